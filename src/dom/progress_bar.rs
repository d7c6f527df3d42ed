//! Progress bar widget.
//!
//! Binds to a container holding one or more `fc-progress-fill` elements
//! (their width tracks the progress) and zero or more `fc-label` elements
//! (their text shows a message from the consumer).

use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement};

use picdrop_core::{classes, progress_width};

use super::elements::{by_class, set_text_all};

/// A progress bar bound to existing markup.
#[wasm_bindgen]
pub struct ProgressBar {
    fills: Vec<HtmlElement>,
    labels: Vec<HtmlElement>,
}

impl ProgressBar {
    /// Bind to the widget markup under `container`.
    pub fn bind(container: &Element) -> Self {
        let fills = by_class(container, classes::PROGRESS_FILL);
        if fills.is_empty() {
            log::warn!("⚠️ Progress bar has no {} element", classes::PROGRESS_FILL);
        }
        Self {
            fills,
            labels: by_class(container, classes::LABEL),
        }
    }
}

#[wasm_bindgen]
impl ProgressBar {
    /// Set the progress shown, as a percentage. Values outside 0-100 are clamped.
    #[wasm_bindgen(js_name = setProgress)]
    pub fn set_progress(&self, percent: f64) {
        let width = progress_width(percent);
        for fill in &self.fills {
            if let Err(e) = fill.style().set_property("width", &width) {
                log::warn!("⚠️ Could not set progress width: {:?}", e);
            }
        }
    }

    /// Set the label text.
    #[wasm_bindgen(js_name = setLabel)]
    pub fn set_label(&self, text: &str) {
        set_text_all(&self.labels, text);
    }
}
