//! The parameterized wheel widget.
//!
//! One implementation covers all three variants: the interactive word wheel
//! (repeat factor 1, plain snap scrolling), the display-only score wheels
//! (repeat factor 3, spin animation) and the display-only total wheel. The
//! widget owns its DOM subtree exclusively; other wheels interact with it
//! only through `set_value`/`spin_to`/`mirror_fraction` and the subscription
//! channels.
//!
//! Authoritative state lives in `wheel_core::WheelCore` and changes only on
//! settle or programmatic value-set. Everything driven by the frame gate is
//! cosmetic.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;
use wheel_core::{
    SpinDirection, WheelConfig, WheelCore, WheelGeometry, DEFAULT_ITEM_HEIGHT_PX, SETTLE_QUIET_MS,
};

use crate::dom;
use crate::schedule::{FrameGate, SettleTimer};

pub struct WheelSpec {
    pub labels: Vec<String>,
    pub repeat_factor: usize,
    pub interactive: bool,
    pub aria_label: String,
}

type IndexFn = Box<dyn FnMut(usize)>;
type ProgressFn = Box<dyn FnMut(f64)>;

#[derive(Default)]
struct Callbacks {
    on_select: Option<IndexFn>,
    on_live_scroll: Option<IndexFn>,
    on_live_progress: Option<ProgressFn>,
}

struct Inner {
    labels: Vec<String>,
    root: web::Element,
    track: web::Element,
    items: Vec<web::Element>,
    core: RefCell<WheelCore>,
    geometry: Cell<WheelGeometry>,
    callbacks: RefCell<Callbacks>,
    settle: RefCell<Option<SettleTimer>>,
    live: RefCell<Option<FrameGate>>,
    last_live: Cell<Option<usize>>,
    last_selected: Cell<Option<usize>>,
}

#[derive(Clone)]
pub struct WheelWidget {
    inner: Rc<Inner>,
}

impl WheelWidget {
    /// Build the wheel subtree under `host` and wire all of its listeners.
    pub fn new(
        document: &web::Document,
        host: &web::Element,
        spec: WheelSpec,
    ) -> anyhow::Result<Self> {
        let labels = if spec.labels.is_empty() {
            vec!["-".to_string()]
        } else {
            spec.labels
        };
        let config = WheelConfig::new(labels.len(), spec.repeat_factor, spec.interactive);

        let root = dom::create_el(document, "div", "wheel")?;
        root.set_attribute("role", "spinbutton").map_err(dom::js_err)?;
        root.set_attribute("aria-label", &spec.aria_label)
            .map_err(dom::js_err)?;
        root.set_attribute("aria-valuemin", &labels[0])
            .map_err(dom::js_err)?;
        root.set_attribute("aria-valuemax", &labels[labels.len() - 1])
            .map_err(dom::js_err)?;
        root.set_attribute("aria-valuenow", &labels[0])
            .map_err(dom::js_err)?;
        if config.interactive() {
            root.set_attribute("tabindex", "0").map_err(dom::js_err)?;
        } else {
            root.set_attribute("aria-readonly", "true")
                .map_err(dom::js_err)?;
        }

        // Display-only wheels get no buttons at all.
        let buttons = if config.interactive() {
            let up = dom::create_el(document, "button", "btn btn-up")?;
            up.set_attribute("type", "button").map_err(dom::js_err)?;
            up.set_attribute("title", "Next").map_err(dom::js_err)?;
            up.set_text_content(Some("\u{25b2}"));
            let down = dom::create_el(document, "button", "btn btn-down")?;
            down.set_attribute("type", "button").map_err(dom::js_err)?;
            down.set_attribute("title", "Previous").map_err(dom::js_err)?;
            down.set_text_content(Some("\u{25bc}"));
            Some((up, down))
        } else {
            None
        };

        let track = dom::create_el(document, "div", "track")?;
        track.set_attribute("role", "listbox").map_err(dom::js_err)?;
        track
            .set_attribute("aria-label", &format!("{} options", spec.aria_label))
            .map_err(dom::js_err)?;

        let mut items = Vec::with_capacity(config.rendered_len());
        for raw in 0..config.rendered_len() {
            let item = dom::create_el(document, "div", "item")?;
            item.set_attribute("role", "option").map_err(dom::js_err)?;
            item.set_attribute("aria-selected", "false")
                .map_err(dom::js_err)?;
            item.set_text_content(Some(&labels[raw % config.item_count()]));
            track.append_child(&item).map_err(dom::js_err)?;
            items.push(item);
        }

        if let Some((up, _)) = &buttons {
            root.append_child(up).map_err(dom::js_err)?;
        }
        root.append_child(&track).map_err(dom::js_err)?;
        if let Some((_, down)) = &buttons {
            root.append_child(down).map_err(dom::js_err)?;
        }
        host.append_child(&root).map_err(dom::js_err)?;

        let widget = WheelWidget {
            inner: Rc::new(Inner {
                labels,
                root,
                track,
                items,
                core: RefCell::new(WheelCore::new(config)),
                geometry: Cell::new(WheelGeometry::default()),
                callbacks: RefCell::new(Callbacks::default()),
                settle: RefCell::new(None),
                live: RefCell::new(None),
                last_live: Cell::new(None),
                last_selected: Cell::new(None),
            }),
        };
        widget.wire(buttons);
        measure(&widget.inner);
        widget.set_value(0);
        Ok(widget)
    }

    fn wire(&self, buttons: Option<(web::Element, web::Element)>) {
        let inner = &self.inner;

        {
            let i = inner.clone();
            *inner.settle.borrow_mut() = Some(SettleTimer::new(SETTLE_QUIET_MS, move || {
                settle_now(&i);
            }));
        }
        {
            let i = inner.clone();
            *inner.live.borrow_mut() = Some(FrameGate::new(move || live_tick(&i)));
        }

        // Any scroll restarts the quiet-period timer and arms one live tick.
        {
            let i = inner.clone();
            let closure = Closure::wrap(Box::new(move || {
                if let Some(timer) = i.settle.borrow().as_ref() {
                    timer.restart();
                }
                if let Some(gate) = i.live.borrow().as_ref() {
                    gate.request();
                }
            }) as Box<dyn FnMut()>);
            let _ = inner
                .track
                .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        let interactive = inner.core.borrow().config().interactive();
        if interactive {
            if let Some((up, down)) = buttons {
                let w = self.clone();
                dom::add_click_listener(&up, move || w.step(1));
                let w = self.clone();
                dom::add_click_listener(&down, move || w.step(-1));
            }

            // Keyboard on the wheel container.
            {
                let w = self.clone();
                let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                    match ev.key().as_str() {
                        "ArrowUp" => w.step(1),
                        "ArrowDown" => w.step(-1),
                        "Home" => {
                            let first = w.inner.core.borrow().first();
                            w.jump_to(first);
                        }
                        "End" => {
                            let last = w.inner.core.borrow().last();
                            w.jump_to(last);
                        }
                        _ => return,
                    }
                    ev.prevent_default();
                }) as Box<dyn FnMut(_)>);
                let _ = inner
                    .root
                    .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
                closure.forget();
            }

            // Pointer-down moves focus so the arrow keys apply immediately.
            {
                let root = inner.root.clone();
                let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
                    if let Some(el) = root.dyn_ref::<web::HtmlElement>() {
                        let _ = el.focus();
                    }
                }) as Box<dyn FnMut(_)>);
                let _ = inner.root.add_event_listener_with_callback(
                    "pointerdown",
                    closure.as_ref().unchecked_ref(),
                );
                closure.forget();
            }

            // Clicking an item snaps straight to it.
            for (raw, item) in inner.items.iter().enumerate() {
                let i = inner.clone();
                dom::add_click_listener(item, move || {
                    scroll_to_raw(&i, raw as f64, true);
                });
            }
        } else {
            for event_name in ["wheel", "touchmove", "pointerdown"] {
                dom::suppress_event(&inner.track, event_name);
            }
        }
    }

    /// Authoritative value; stable while a scroll or spin is in flight.
    pub fn value(&self) -> usize {
        self.inner.core.borrow().value()
    }

    /// Clamp, adopt and center `v` immediately, without animation.
    pub fn set_value(&self, v: usize) {
        let value = self.inner.core.borrow_mut().set_value(v);
        let raw = self.inner.core.borrow().resting_raw();
        scroll_to_raw(&self.inner, raw as f64, false);
        apply_selection_attrs(&self.inner, value);
        self.inner.last_selected.set(Some(value));
    }

    /// Animated multi-turn transition. The settle handler makes the landing
    /// value authoritative and restores middle-block headroom.
    pub fn spin_to(&self, target: usize, turns: usize, direction: SpinDirection) {
        let plan = self.inner.core.borrow().plan_spin(target, turns, direction);
        scroll_to_raw(&self.inner, plan.start_raw as f64, false);
        scroll_to_raw(&self.inner, plan.dest_raw as f64, true);
    }

    /// +-1 step with wraparound, routed through the settle path like any
    /// completed scroll gesture.
    pub fn step(&self, delta: isize) {
        let target = self.inner.core.borrow().step_target(delta);
        self.jump_to(target);
    }

    /// Smooth-scroll to `target` in the resting block; settles normally.
    pub fn jump_to(&self, target: usize) {
        let raw = {
            let core = self.inner.core.borrow();
            let config = core.config();
            config.middle_block_start() + target.min(config.item_count() - 1)
        };
        scroll_to_raw(&self.inner, raw as f64, true);
    }

    /// Cosmetic proportional mirroring of a driver mid-scroll: parks the
    /// track at a fractional index without animating or settling a value.
    pub fn mirror_fraction(&self, fractional_index: f64) {
        let (start, max_index) = {
            let core = self.inner.core.borrow();
            let config = core.config();
            (
                config.middle_block_start() as f64,
                (config.item_count() - 1) as f64,
            )
        };
        let raw = start + fractional_index.clamp(0.0, max_index);
        let offset = self.inner.geometry.get().scroll_offset_for(raw);
        self.inner.track.set_scroll_top(offset.round() as i32);
    }

    /// Re-measure after a viewport resize and recenter on the current value.
    pub fn refresh_geometry(&self) {
        measure(&self.inner);
        let raw = self.inner.core.borrow().resting_raw();
        scroll_to_raw(&self.inner, raw as f64, false);
    }

    pub fn on_select(&self, f: impl FnMut(usize) + 'static) {
        self.inner.callbacks.borrow_mut().on_select = Some(Box::new(f));
    }

    pub fn on_live_scroll(&self, f: impl FnMut(usize) + 'static) {
        self.inner.callbacks.borrow_mut().on_live_scroll = Some(Box::new(f));
    }

    pub fn on_live_progress(&self, f: impl FnMut(f64) + 'static) {
        self.inner.callbacks.borrow_mut().on_live_progress = Some(Box::new(f));
    }
}

fn measure(inner: &Inner) {
    let item_height = inner
        .items
        .first()
        .map(|el| el.get_bounding_client_rect().height())
        .filter(|h| *h > 0.0)
        .unwrap_or(DEFAULT_ITEM_HEIGHT_PX);
    let viewport = inner.track.client_height() as f64;
    let geometry = WheelGeometry::new(item_height, viewport);
    inner.geometry.set(geometry);
    let padding = geometry.padding();
    let _ = inner.track.set_attribute(
        "style",
        &format!("padding-top:{padding}px;padding-bottom:{padding}px"),
    );
}

fn scroll_to_raw(inner: &Inner, raw: f64, smooth: bool) {
    let offset = inner.geometry.get().scroll_offset_for(raw);
    let opts = web::ScrollToOptions::new();
    opts.set_top(offset);
    opts.set_behavior(if smooth {
        web::ScrollBehavior::Smooth
    } else {
        web::ScrollBehavior::Auto
    });
    inner.track.scroll_to_with_scroll_to_options(&opts);
}

fn current_raw(inner: &Inner) -> usize {
    let rendered = inner.core.borrow().config().rendered_len();
    inner
        .geometry
        .get()
        .nearest_index(inner.track.scroll_top() as f64, rendered)
}

/// Highlight + ARIA refresh for the canonical `value`. Every repeated copy
/// of the item is marked; only the centered one is visible in practice.
fn apply_selection_attrs(inner: &Inner, value: usize) {
    let n = inner.core.borrow().config().item_count();
    for (raw, item) in inner.items.iter().enumerate() {
        let selected = raw % n == value;
        let _ = item.set_attribute("aria-selected", if selected { "true" } else { "false" });
        let _ = item.class_list().toggle_with_force("is-selected", selected);
    }
    let _ = inner.root.set_attribute("aria-valuenow", &inner.labels[value]);
}

/// Quiet period elapsed: adopt the centered item, snap repeated wheels back
/// into the middle block, and notify the select channel on change.
fn settle_now(inner: &Rc<Inner>) {
    let raw = current_raw(inner);
    let settled = inner.core.borrow_mut().settle(raw);
    if let Some(recenter) = settled.recenter_raw {
        scroll_to_raw(inner, recenter as f64, false);
    }
    apply_selection_attrs(inner, settled.value);
    if inner.last_selected.get() != Some(settled.value) {
        inner.last_selected.set(Some(settled.value));
        emit_index(inner, settled.value, |cbs| &mut cbs.on_select);
    }
}

/// Frame-throttled cosmetic refresh while a scroll is in progress. Never
/// touches the authoritative value.
fn live_tick(inner: &Rc<Inner>) {
    let (rendered, n, middle_start) = {
        let core = inner.core.borrow();
        let config = core.config();
        (
            config.rendered_len(),
            config.item_count(),
            config.middle_block_start(),
        )
    };
    let geometry = inner.geometry.get();
    let scroll = inner.track.scroll_top() as f64;
    let value = geometry.nearest_index(scroll, rendered) % n;
    apply_selection_attrs(inner, value);

    if inner.last_live.get() != Some(value) {
        inner.last_live.set(Some(value));
        emit_index(inner, value, |cbs| &mut cbs.on_live_scroll);
    }

    let fractional =
        (geometry.fractional_index(scroll) - middle_start as f64).clamp(0.0, (n - 1) as f64);
    let cb = inner.callbacks.borrow_mut().on_live_progress.take();
    if let Some(mut cb) = cb {
        cb(fractional);
        inner.callbacks.borrow_mut().on_live_progress = Some(cb);
    }
}

/// Run an index callback with the callbacks cell released, so a subscriber
/// may call back into this wheel without panicking on a double borrow.
fn emit_index(
    inner: &Inner,
    value: usize,
    slot: impl Fn(&mut Callbacks) -> &mut Option<IndexFn>,
) {
    let cb = slot(&mut *inner.callbacks.borrow_mut()).take();
    if let Some(mut cb) = cb {
        cb(value);
        *slot(&mut *inner.callbacks.borrow_mut()) = Some(cb);
    }
}
