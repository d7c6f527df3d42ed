//! Element lookup for the dialog markup.
//!
//! Every marker class is resolved once, when the dialog is bound. Missing
//! elements just produce empty lists; the only structural requirement is the
//! picture grid, and even that is checked by the controller, not here.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event, EventTarget, HtmlElement};

use picdrop_core::classes;

/// Collect every descendant of `root` carrying `class`.
pub fn by_class(root: &Element, class: &str) -> Vec<HtmlElement> {
    let collection = root.get_elements_by_class_name(class);
    (0..collection.length())
        .filter_map(|i| collection.item(i))
        .filter_map(|element| element.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Set the text of every element in `targets`.
pub fn set_text_all(targets: &[HtmlElement], text: &str) {
    for target in targets {
        target.set_text_content(Some(text));
    }
}

/// Add or remove a class on an element, logging failures.
pub fn toggle_class(element: &Element, class: &str, on: bool) {
    if let Err(e) = element.class_list().toggle_with_force(class, on) {
        log::warn!("⚠️ Could not toggle class '{}': {:?}", class, e);
    }
}

/// Attach an event listener for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("⚠️ Could not listen for '{}': {:?}", event, e);
    }
    closure.forget(); // The dialog lives as long as the page
}

/// Attach the same handler to every element in `targets`.
pub fn listen_all<F>(targets: &[HtmlElement], event: &str, handler: F)
where
    F: FnMut(Event) + Clone + 'static,
{
    for target in targets {
        listen(target, event, handler.clone());
    }
}

/// Handles to every part of the dialog the uploader talks to.
#[derive(Clone)]
pub struct DialogElements {
    /// The dialog container
    pub root: Element,
    pub error_panels: Vec<HtmlElement>,
    pub instructions: Vec<HtmlElement>,
    pub count: Vec<HtmlElement>,
    pub count_suffix: Vec<HtmlElement>,
    pub chooser_triggers: Vec<HtmlElement>,
    pub file_inputs: Vec<HtmlElement>,
    /// The first picture grid, if any
    pub grid: Option<HtmlElement>,
    pub controls_panels: Vec<HtmlElement>,
    pub activate_controls: Vec<HtmlElement>,
    pub send_buttons: Vec<HtmlElement>,
    pub uploading_controls: Vec<HtmlElement>,
    pub current_upload_imgs: Vec<HtmlElement>,
    pub current_progress: Vec<HtmlElement>,
    pub sending_path: Vec<HtmlElement>,
    pub stop_buttons: Vec<HtmlElement>,
    pub undo_banners: Vec<HtmlElement>,
    pub undo_buttons: Vec<HtmlElement>,
    pub undo_all_buttons: Vec<HtmlElement>,
    pub undo_labels: Vec<HtmlElement>,
    pub pics_sent: Vec<HtmlElement>,
    pub pics_count: Vec<HtmlElement>,
}

impl DialogElements {
    /// Resolve every marker class under `root`.
    pub fn locate(root: &Element) -> Self {
        let grids = by_class(root, classes::PICTURE_GRID);
        if grids.len() > 1 {
            log::warn!("⚠️ {} picture grids found - only the first is used", grids.len());
        }

        let elements = Self {
            root: root.clone(),
            error_panels: by_class(root, classes::ERROR_MESSAGE),
            instructions: by_class(root, classes::INSTRUCTIONS),
            count: by_class(root, classes::COUNT),
            count_suffix: by_class(root, classes::COUNT_SUFFIX),
            chooser_triggers: by_class(root, classes::SHOW_CHOOSER),
            file_inputs: by_class(root, classes::HIDDEN_FILE_INPUT),
            grid: grids.into_iter().next(),
            controls_panels: by_class(root, classes::CONTROLS_PANEL),
            activate_controls: by_class(root, classes::ACTIVATE_CONTROLS),
            send_buttons: by_class(root, classes::SEND_BUTTON),
            uploading_controls: by_class(root, classes::UPLOADING_CONTROLS),
            current_upload_imgs: by_class(root, classes::CURRENT_UPLOAD_IMG),
            current_progress: by_class(root, classes::CURRENT_PROGRESS),
            sending_path: by_class(root, classes::SENDING_PATH),
            stop_buttons: by_class(root, classes::STOP_UPLOAD),
            undo_banners: by_class(root, classes::UNDO_BANNER),
            undo_buttons: by_class(root, classes::UNDO_REMOVE),
            undo_all_buttons: by_class(root, classes::UNDO_ALL),
            undo_labels: by_class(root, classes::UNDO_LABEL),
            pics_sent: by_class(root, classes::PICS_SENT),
            pics_count: by_class(root, classes::PICS_COUNT),
        };

        log::debug!(
            "🔎 Dialog bound: grid={}, {} file inputs, {} send buttons, {} progress widgets",
            elements.grid.is_some(),
            elements.file_inputs.len(),
            elements.send_buttons.len(),
            elements.current_progress.len()
        );
        if elements.send_buttons.is_empty() {
            log::warn!("⚠️ No send button - pictures can only be sent from script");
        }
        if elements.controls_panels.is_empty() && elements.activate_controls.is_empty() {
            log::debug!("No control panels in the dialog");
        }
        if elements.uploading_controls.is_empty() {
            log::debug!("No upload progress panel in the dialog");
        }

        elements
    }
}
