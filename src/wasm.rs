//! WASM entry points.

use wasm_bindgen::prelude::*;
use web_sys::Element;

use picdrop_core::{Capabilities, UploaderSetup};

use crate::config::{LogLevel, UploaderConfig};
use crate::constants::CONFIG_ATTRIBUTE;
use crate::dom::{DialogElements, FileUploader, ProgressBar};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(LogLevel::default().to_level()) {
        web_sys::console::warn_1(&format!("Logger already initialized: {}", e).into());
    }
    log::info!("🖼️ picdrop loaded");
}

/// Probe the browser features the dialog uses.
fn detect_capabilities(top: &Element) -> Capabilities {
    let global = js_sys::global();
    let thumbnail_reader = js_sys::Reflect::has(&global, &"FileReader".into()).unwrap_or(false);
    let class_lookup = top
        .owner_document()
        .map(|document| {
            js_sys::Reflect::has(&document, &"getElementsByClassName".into()).unwrap_or(false)
        })
        .unwrap_or(false);

    if !thumbnail_reader {
        log::warn!("⚠️ FileReader unavailable - thumbnails will use a placeholder");
    }
    Capabilities {
        thumbnail_reader,
        class_lookup,
    }
}

/// Read the dialog configuration from the container, falling back to defaults.
fn read_config(top: &Element) -> UploaderConfig {
    let Some(json) = top.get_attribute(CONFIG_ATTRIBUTE) else {
        return UploaderConfig::default();
    };
    match UploaderConfig::from_json(&json) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("⚠️ Ignoring {}: {}", CONFIG_ATTRIBUTE, e);
            UploaderConfig::default()
        }
    }
}

/// Bind an upload dialog to the element `top`.
///
/// Returns `undefined` when there is no element or the browser lacks a
/// required feature; the reason is logged.
#[wasm_bindgen(js_name = createFileUploader)]
pub fn create_file_uploader(top: Option<Element>) -> Option<FileUploader> {
    let Some(top) = top else {
        log::warn!("⚠️ No element given for the file uploader");
        return None;
    };

    let capabilities = detect_capabilities(&top);
    if let Err(e) = capabilities.check_required() {
        log::warn!("⚠️ {}", e);
        log::warn!("⚠️ Uploader does not work on older browsers - try the latest Chrome or Firefox");
        return None;
    }

    let config = read_config(&top);
    log::set_max_level(config.log_level.to_level_filter());

    let elements = DialogElements::locate(&top);
    let setup = UploaderSetup {
        settings: config.settings(),
        capabilities,
        has_grid: elements.grid.is_some(),
    };

    Some(FileUploader::bind(elements, config, setup))
}

/// Bind a stand-alone progress bar to the element `top`.
#[wasm_bindgen(js_name = createProgressBar)]
pub fn create_progress_bar(top: Option<Element>) -> Option<ProgressBar> {
    let Some(top) = top else {
        log::warn!("⚠️ No element given for the progress bar");
        return None;
    };
    Some(ProgressBar::bind(&top))
}
