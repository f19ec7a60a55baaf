//! Wires the word wheel's notification channels to the dependent wheels,
//! the sum readout and the details panel.
//!
//! Settle drives the full update (spins included); the live channels drive
//! the cheap subset only, so intermediate frames never cascade animations.

use std::rc::Rc;
use web_sys as web;
use wheel_core::{
    SpinDirection, WordTable, CATEGORY_LABELS, DEFAULT_SPIN_TURNS, SCORE_DIMENSIONS,
};

use crate::palette;
use crate::wheel::WheelWidget;

/// Explicit application state, built once at startup and shared by
/// reference. No ambient singletons.
pub struct App {
    pub document: web::Document,
    pub table: Rc<WordTable>,
    pub word_wheel: WheelWidget,
    pub score_wheels: Vec<WheelWidget>,
    pub total_wheel: WheelWidget,
    pub readout: web::Element,
    pub details: web::Element,
}

impl App {
    pub fn all_wheels(&self) -> impl Iterator<Item = &WheelWidget> {
        std::iter::once(&self.word_wheel)
            .chain(self.score_wheels.iter())
            .chain(std::iter::once(&self.total_wheel))
    }
}

pub fn wire(app: &Rc<App>) {
    {
        let a = app.clone();
        app.word_wheel.on_select(move |idx| apply_selection(&a, idx));
    }
    {
        let a = app.clone();
        app.word_wheel.on_live_scroll(move |idx| apply_live(&a, idx));
    }
    {
        let a = app.clone();
        app.word_wheel
            .on_live_progress(move |frac| mirror_total(&a, frac));
    }
}

/// Full update for an authoritative word selection.
pub fn apply_selection(app: &App, word_index: usize) {
    let Some(targets) = app.table.spin_targets(word_index) else {
        return;
    };
    for (wheel, &item_index) in app.score_wheels.iter().zip(targets.wheel_indices.iter()) {
        wheel.spin_to(item_index, DEFAULT_SPIN_TURNS, SpinDirection::Forward);
    }
    let total_index = (targets.total - app.table.min_total()) as usize;
    app.total_wheel
        .spin_to(total_index, DEFAULT_SPIN_TURNS, SpinDirection::Forward);
    render_readout(app, targets.total);
    render_details(app, word_index);
    log::info!("[select] word {} total {}", word_index, targets.total);
}

/// Cheap live-feedback subset: readout and details only, no spins.
pub fn apply_live(app: &App, word_index: usize) {
    if let Some(targets) = app.table.spin_targets(word_index) {
        render_readout(app, targets.total);
    }
    render_details(app, word_index);
}

/// Mirror the total wheel proportionally while the word wheel is between
/// items: interpolate the neighbouring totals and park the track there.
fn mirror_total(app: &App, fractional_word: f64) {
    let last = app.table.len().saturating_sub(1);
    let f = fractional_word.clamp(0.0, last as f64);
    let lo = f.floor() as usize;
    let hi = (f.ceil() as usize).min(last);
    let (Some(a), Some(b)) = (app.table.get(lo), app.table.get(hi)) else {
        return;
    };
    let blend = f - lo as f64;
    let total = a.total() as f64 + (b.total() as f64 - a.total() as f64) * blend;
    app.total_wheel
        .mirror_fraction(total - app.table.min_total() as f64);
}

fn render_readout(app: &App, total: u32) {
    app.readout.set_text_content(Some(&total.to_string()));
    let color = palette::readout_color(total, app.table.min_total(), app.table.max_total());
    let _ = app.readout.set_attribute("style", &format!("color:{color}"));
}

fn render_details(app: &App, word_index: usize) {
    let Some(entry) = app.table.get(word_index) else {
        return;
    };
    app.details.set_text_content(None);
    let doc = &app.document;
    if let Ok(heading) = doc.create_element("div") {
        heading.set_class_name("details-word");
        heading.set_text_content(Some(&entry.label));
        let _ = app.details.append_child(&heading);
    }
    for k in 0..SCORE_DIMENSIONS {
        let Ok(row) = doc.create_element("div") else {
            continue;
        };
        row.set_class_name("details-row");
        if let Ok(category) = doc.create_element("span") {
            category.set_class_name("details-category");
            category.set_text_content(Some(CATEGORY_LABELS[k]));
            let _ = row.append_child(&category);
        }
        if let Ok(score) = doc.create_element("span") {
            score.set_class_name("details-score");
            score.set_text_content(Some(&entry.scores[k].to_string()));
            let _ = row.append_child(&score);
        }
        if let Ok(text) = doc.create_element("div") {
            text.set_class_name("details-text");
            text.set_text_content(Some(&entry.explanations[k]));
            let _ = row.append_child(&text);
        }
        let _ = app.details.append_child(&row);
    }
}
