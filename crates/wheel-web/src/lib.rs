#![cfg(target_arch = "wasm32")]

mod data;
mod dom;
mod palette;
mod schedule;
mod sync;
mod wheel;

use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;
use wheel_core::{ScoreDomain, CATEGORY_LABELS, DIGIT_REPEAT_FACTOR};

use crate::sync::App;
use crate::wheel::{WheelSpec, WheelWidget};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("wheel-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let wheels_host = document
        .get_element_by_id("wheels")
        .ok_or_else(|| anyhow::anyhow!("missing #wheels"))?;
    let readout = document
        .get_element_by_id("readout")
        .ok_or_else(|| anyhow::anyhow!("missing #readout"))?;
    let details = document
        .get_element_by_id("details")
        .ok_or_else(|| anyhow::anyhow!("missing #details"))?;

    let domain = ScoreDomain::ONE_TO_TEN;
    let table = Rc::new(data::load_word_table(domain));
    log::info!(
        "[data] {} words, scores {}-{}",
        table.len(),
        domain.min,
        domain.max
    );

    let word_wheel = WheelWidget::new(
        &document,
        &wheels_host,
        WheelSpec {
            labels: table.labels(),
            repeat_factor: 1,
            interactive: true,
            aria_label: "Metric".to_string(),
        },
    )?;

    let mut score_wheels = Vec::with_capacity(CATEGORY_LABELS.len());
    for label in CATEGORY_LABELS {
        score_wheels.push(WheelWidget::new(
            &document,
            &wheels_host,
            WheelSpec {
                labels: domain.labels(),
                repeat_factor: DIGIT_REPEAT_FACTOR,
                interactive: false,
                aria_label: label.to_string(),
            },
        )?);
    }

    let total_labels: Vec<String> = (table.min_total()..=table.max_total())
        .map(|t| t.to_string())
        .collect();
    let total_wheel = WheelWidget::new(
        &document,
        &wheels_host,
        WheelSpec {
            labels: total_labels,
            repeat_factor: DIGIT_REPEAT_FACTOR,
            interactive: false,
            aria_label: "Total".to_string(),
        },
    )?;

    let app = Rc::new(App {
        document: document.clone(),
        table,
        word_wheel,
        score_wheels,
        total_wheel,
        readout,
        details,
    });
    sync::wire(&app);
    wire_resize(&app);
    schedule_first_layout(&app);
    Ok(())
}

/// Resize re-measures every wheel and recenters it on its current value.
fn wire_resize(app: &Rc<App>) {
    if let Some(window) = web::window() {
        let a = app.clone();
        let closure = Closure::wrap(Box::new(move || {
            for wheel in a.all_wheels() {
                wheel.refresh_geometry();
            }
        }) as Box<dyn FnMut()>);
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Initial centering runs one frame after mount so CSS layout is measurable.
fn schedule_first_layout(app: &Rc<App>) {
    if let Some(window) = web::window() {
        let a = app.clone();
        let closure = Closure::wrap(Box::new(move || {
            for wheel in a.all_wheels() {
                wheel.refresh_geometry();
            }
            a.word_wheel.set_value(0);
            sync::apply_selection(&a, 0);
        }) as Box<dyn FnMut()>);
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
