use crate::constants::{THEME_ATTR, THEME_DARK, THEME_LIGHT, THEME_STORAGE_KEY, THEME_TOGGLE_ID};
use crate::dom;
use web_sys as web;

fn storage(window: &web::Window) -> Option<web::Storage> {
    window.local_storage().ok().flatten()
}

/// Apply the persisted theme to `<body data-theme=..>`, defaulting to dark
/// when the store is absent or empty.
pub fn init_theme(window: &web::Window, document: &web::Document) {
    let saved = storage(window)
        .and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten())
        .unwrap_or_else(|| THEME_DARK.to_string());
    if let Some(body) = document.body() {
        _ = body.set_attribute(THEME_ATTR, &saved);
    }
}

/// Flip the body attribute and persist the choice on toggle-button clicks.
pub fn wire_toggle(document: &web::Document) {
    dom::add_click_listener(document, THEME_TOGGLE_ID, move || {
        let Some(document) = dom::window_document() else {
            return;
        };
        let Some(body) = document.body() else {
            return;
        };
        let next = match body.get_attribute(THEME_ATTR).as_deref() {
            Some(THEME_DARK) => THEME_LIGHT,
            _ => THEME_DARK,
        };
        _ = body.set_attribute(THEME_ATTR, next);
        if let Some(store) = web::window().and_then(|w| storage(&w)) {
            _ = store.set_item(THEME_STORAGE_KEY, next);
        }
    });
}
