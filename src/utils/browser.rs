//! Thin wrappers over `window` for the few imperative things pages need.

use leptos::logging::warn;

/// Blocking `alert()`.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if window.alert_with_message(message).is_err() {
            warn!("[BROWSER] alert failed: {}", message);
        }
    }
}

/// Blocking `confirm()`; a failed dialog counts as "no".
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn history_back() {
    let went_back = web_sys::window()
        .and_then(|window| window.history().ok())
        .map(|history| history.back().is_ok())
        .unwrap_or(false);
    if !went_back {
        warn!("[BROWSER] history.back() unavailable");
    }
}

pub fn current_path() -> Option<String> {
    web_sys::window()?.location().pathname().ok()
}

/// `content` of `<meta name="{name}">` in the host page, if set and non-empty.
pub fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document
        .query_selector(&format!("meta[name=\"{name}\"]"))
        .ok()
        .flatten()?;
    meta.get_attribute("content")
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
}
