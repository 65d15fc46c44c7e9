use gloo_console::error as console_error;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, window};

// page helpers
//
// thin wrappers over the handful of document operations that are not
// expressed through rsx.  a missing window, document or body turns the call
// into a no-op.

const LIGHT_MODE_CLASS: &str = "light-mode";

fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

fn body() -> Option<HtmlElement> {
    document().and_then(|d| d.body())
}

fn root() -> Option<HtmlElement> {
    document()
        .and_then(|d| d.document_element())
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
}

pub fn set_scroll_locked(locked: bool) {
    let Some(body) = body() else {
        return;
    };

    let style = body.style();
    let result = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };

    if let Err(err) = result {
        console_error!(format!("Failed to update page scrolling: {err:?}"));
    }
}

pub fn set_light_mode(light: bool) {
    let Some(body) = body() else {
        return;
    };

    if let Err(err) = body.class_list().toggle_with_force(LIGHT_MODE_CLASS, light) {
        console_error!(format!("Failed to switch theme class: {err:?}"));
    }
}

pub fn set_root_property(name: &str, value: &str) {
    let Some(root) = root() else {
        return;
    };

    if let Err(err) = root.style().set_property(name, value) {
        console_error!(format!("Failed to set {name}: {err:?}"));
    }
}

pub fn prefers_light() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: light)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

// milliseconds on the page's monotonic clock
pub fn now_ms() -> Option<f64> {
    window().and_then(|w| w.performance()).map(|p| p.now())
}

pub fn viewport_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}
