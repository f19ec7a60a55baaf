use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Convert a JS exception into an error `anyhow` can carry.
#[inline]
pub fn js_err(e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

#[inline]
pub fn create_el(document: &web::Document, tag: &str, class: &str) -> anyhow::Result<web::Element> {
    let el = document.create_element(tag).map_err(js_err)?;
    el.set_class_name(class);
    Ok(el)
}

#[inline]
pub fn add_click_listener(element: &web::Element, mut handler: impl FnMut() + 'static) {
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let _ = element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Swallow an event class entirely (used to lock display-only wheels against
/// direct user input).
pub fn suppress_event(element: &web::Element, event_name: &str) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    let _ = element.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
    closure.forget();
}
