//! Static data feed: the page may define a global `WORDS_DATA` array before
//! the module loads. Anything missing or malformed degrades to the built-in
//! fallback table; nothing here can fail the app.

use wasm_bindgen::JsValue;
use web_sys as web;
use wheel_core::{RawWordEntry, ScoreDomain, WordTable};

const FEED_GLOBAL: &str = "WORDS_DATA";

/// Read the feed, coerce and clamp every entry, and apply the one-time
/// total-descending ordering.
pub fn load_word_table(domain: ScoreDomain) -> WordTable {
    let raws = read_feed_global().unwrap_or_default();
    let mut table = WordTable::from_raw(&raws, domain);
    table.sort_by_total();
    table
}

fn read_feed_global() -> Option<Vec<RawWordEntry>> {
    let window = web::window()?;
    let value = js_sys::Reflect::get(window.as_ref(), &JsValue::from_str(FEED_GLOBAL)).ok()?;
    if value.is_undefined() || value.is_null() {
        log::info!("no {} global, using fallback list", FEED_GLOBAL);
        return None;
    }
    // Round-trip through JSON text so serde can take over from here.
    let json = js_sys::JSON::stringify(&value).ok()?;
    let json = String::from(json);
    match serde_json::from_str::<Vec<RawWordEntry>>(&json) {
        Ok(entries) => Some(entries),
        Err(e) => {
            log::warn!("malformed {} feed: {}", FEED_GLOBAL, e);
            None
        }
    }
}
