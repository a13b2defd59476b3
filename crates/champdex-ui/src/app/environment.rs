//! Environment probes for the app shell: host-page config, location, viewport.

use crate::core::breakpoints::{Breakpoint, Viewport, for_width};
use crate::core::config::CatalogConfig;
use crate::core::store::HistorySink;
use gloo::utils::{document, window};
use yew_router::history::{BrowserHistory, History};

pub(crate) const VERSION_META: &str = "champdex:version";
pub(crate) const LOCALE_META: &str = "champdex:locale";

const FALLBACK_WIDTH: f64 = 1280.0;
const FALLBACK_HEIGHT: f64 = 800.0;

pub(crate) fn load_config() -> CatalogConfig {
    let version = meta_content(VERSION_META);
    let locale = meta_content(LOCALE_META);
    CatalogConfig::default().with_overrides(version.as_deref(), locale.as_deref())
}

fn meta_content(name: &str) -> Option<String> {
    document()
        .query_selector(&format!("meta[name=\"{name}\"]"))
        .ok()
        .flatten()
        .and_then(|element| element.get_attribute("content"))
}

pub(crate) fn current_viewport() -> Viewport {
    let window = window();
    let width = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(FALLBACK_WIDTH);
    let height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(FALLBACK_HEIGHT);
    Viewport::new(to_pixels(width), to_pixels(height))
}

pub(crate) fn current_breakpoint() -> Breakpoint {
    for_width(current_viewport().width)
}

pub(crate) fn current_path(history: &BrowserHistory) -> String {
    history.location().path().to_string()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_pixels(value: f64) -> u32 {
    value.max(0.0).min(f64::from(u32::MAX)) as u32
}

impl HistorySink for BrowserHistory {
    fn push(&self, path: &str) {
        History::push(self, path.to_string());
    }
}
