//! Thin wrappers over the few window APIs the controllers' effects need.

use gloo::utils::window;

pub fn navigate_to(url: &str) {
    if let Err(e) = window().location().set_href(url) {
        log::error!("Failed to navigate to {}: {:?}", url, e);
    }
}

/// Blocking `window.alert`
pub fn alert(message: &str) {
    gloo::dialogs::alert(message);
}

pub fn current_path() -> String {
    window().location().pathname().unwrap_or_default()
}
