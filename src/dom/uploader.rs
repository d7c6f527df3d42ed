//! The JS-facing uploader handle and its event wiring.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, Element, Event, File, FileList, FileReader, HtmlInputElement};
use web_time::Duration;

use picdrop_core::{
    CancelToken, FileInfo, Intake, ItemId, SendStep, Uploader, UploaderSetup, classes,
};

use super::elements::{DialogElements, listen_all, toggle_class};
use super::view::DomView;
use super::{SharedUploader, WeakUploader, with_uploader};
use crate::config::UploaderConfig;

/// A file upload dialog bound to its markup.
#[wasm_bindgen]
pub struct FileUploader {
    shared: SharedUploader,
}

impl FileUploader {
    /// Bind a dialog and wire up all of its listeners.
    pub fn bind(elements: DialogElements, config: UploaderConfig, setup: UploaderSetup) -> Self {
        let config = Rc::new(config);
        let shared: SharedUploader = Rc::new_cyclic(|handle| {
            let view = DomView::new(elements.clone(), Rc::clone(&config), handle.clone());
            RefCell::new(Uploader::new(view, setup))
        });

        wire(&elements, &Rc::downgrade(&shared));
        log::info!("📎 File uploader ready");
        Self { shared }
    }

    fn handle(&self) -> WeakUploader {
        Rc::downgrade(&self.shared)
    }
}

#[wasm_bindgen]
impl FileUploader {
    /// Number of staged pictures.
    pub fn count(&self) -> usize {
        self.shared
            .try_borrow()
            .map_or(0, |uploader| uploader.count())
    }

    /// Start sending every staged picture.
    pub fn send(&self) {
        start_send(&self.handle());
    }

    /// Cancel the active send at the next tick.
    pub fn cancel(&self) -> bool {
        with_uploader(&self.handle(), |uploader| uploader.cancel()).unwrap_or(false)
    }

    /// Restore the most recently removed picture.
    pub fn undo(&self) -> bool {
        with_uploader(&self.handle(), |uploader| uploader.undo_remove().is_some()).unwrap_or(false)
    }

    /// Restore every removed picture. Returns how many were restored.
    #[wasm_bindgen(js_name = undoAll)]
    pub fn undo_all(&self) -> usize {
        with_uploader(&self.handle(), |uploader| uploader.undo_all()).unwrap_or(0)
    }
}

// ============================================================================
// Event wiring
// ============================================================================

fn wire(elements: &DialogElements, handle: &WeakUploader) {
    {
        let handle = handle.clone();
        listen_all(&elements.send_buttons, "click", move |_| start_send(&handle));
    }
    {
        let handle = handle.clone();
        listen_all(&elements.stop_buttons, "click", move |_| {
            with_uploader(&handle, |uploader| uploader.cancel());
        });
    }
    {
        let handle = handle.clone();
        listen_all(&elements.undo_buttons, "click", move |_| {
            with_uploader(&handle, |uploader| uploader.undo_remove());
        });
    }
    {
        let handle = handle.clone();
        listen_all(&elements.undo_all_buttons, "click", move |_| {
            with_uploader(&handle, |uploader| uploader.undo_all());
        });
    }
    {
        let handle = handle.clone();
        listen_all(&elements.error_panels, "click", move |_| {
            with_uploader(&handle, |uploader| uploader.dismiss_warning());
        });
    }

    wire_chooser(elements, handle);

    // The instructions panel can block a drop unless it handles drag events too
    let mut drop_targets = elements.instructions.clone();
    if let Some(grid) = &elements.grid {
        drop_targets.insert(0, grid.clone());
    }
    wire_drop_targets(&drop_targets, handle);
}

/// Hook the hidden file input up to its triggers, or hide the triggers if
/// there is no input.
fn wire_chooser(elements: &DialogElements, handle: &WeakUploader) {
    let Some(input) = elements.file_inputs.first().cloned() else {
        for trigger in &elements.chooser_triggers {
            if let Err(e) = trigger.style().set_property("display", "none") {
                log::warn!("⚠️ Could not hide chooser trigger: {:?}", e);
            }
        }
        if !elements.chooser_triggers.is_empty() {
            log::warn!("⚠️ No file input - chooser triggers hidden");
        }
        return;
    };

    {
        let handle = handle.clone();
        listen_all(&elements.file_inputs, "change", move |event: Event| {
            event.prevent_default();
            let Some(input) = event
                .target()
                .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
            else {
                log::warn!("⚠️ Files chosen event from an element that is not a file input");
                return;
            };
            if let Some(files) = input.files() {
                intake_files(&handle, &files);
            }
            // Let the same file be chosen again
            input.set_value("");
        });
    }

    listen_all(&elements.chooser_triggers, "click", move |_| input.click());
}

fn wire_drop_targets(targets: &[web_sys::HtmlElement], handle: &WeakUploader) {
    listen_all(targets, "dragenter", |event: Event| {
        event.prevent_default();
        set_drag_over(&event, true);
    });
    listen_all(targets, "dragleave", |event: Event| {
        event.prevent_default();
        set_drag_over(&event, false);
    });
    listen_all(targets, "dragover", |event: Event| event.prevent_default());

    let handle = handle.clone();
    listen_all(targets, "drop", move |event: Event| {
        event.prevent_default();
        set_drag_over(&event, false);
        let files = event
            .dyn_ref::<DragEvent>()
            .and_then(DragEvent::data_transfer)
            .and_then(|transfer| transfer.files());
        match files {
            Some(files) => intake_files(&handle, &files),
            None => log::debug!("Drop without files"),
        }
    });
}

fn set_drag_over(event: &Event, on: bool) {
    if let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) {
        toggle_class(&target, classes::DRAG_OVER, on);
    }
}

// ============================================================================
// File intake and thumbnails
// ============================================================================

fn intake_files(handle: &WeakUploader, files: &FileList) {
    let files: Vec<File> = (0..files.length()).filter_map(|i| files.get(i)).collect();
    log::debug!("📂 {} files offered", files.len());

    let to_read = with_uploader(handle, |uploader| {
        let mut to_read = Vec::new();
        for file in &files {
            let info = FileInfo::new(file.name(), file.type_());
            match uploader.add_file(&info) {
                Ok(Intake::AwaitingThumbnail(id)) => to_read.push((id, file.clone())),
                Ok(Intake::Staged(_)) => {}
                Err(e) if e.is_invalid_input() => {}
                Err(e) => {
                    log::debug!("Dropping the rest of the batch: {}", e);
                    break;
                }
            }
        }
        to_read
    })
    .unwrap_or_default();

    for (id, file) in to_read {
        read_thumbnail(handle, id, &file);
    }
}

fn finish_thumbnail(handle: &WeakUploader, id: ItemId, data_url: Option<String>) {
    with_uploader(handle, |uploader| {
        let _ = uploader.thumbnail_ready(id, data_url);
    });
}

/// Read `file` as a data URL and hand it to the controller. Any failure
/// falls back to the placeholder thumbnail.
fn read_thumbnail(handle: &WeakUploader, id: ItemId, file: &File) {
    let reader = match FileReader::new() {
        Ok(reader) => reader,
        Err(e) => {
            log::warn!("⚠️ FileReader unavailable ({:?}) - using placeholder", e);
            finish_thumbnail(handle, id, None);
            return;
        }
    };

    // onload and onerror are exclusive, but only one of them may report
    let done = Rc::new(Cell::new(false));

    let onload = {
        let handle = handle.clone();
        let done = Rc::clone(&done);
        Closure::wrap(Box::new(move |event: Event| {
            if done.replace(true) {
                return;
            }
            let data_url = event
                .target()
                .and_then(|target| target.dyn_into::<FileReader>().ok())
                .and_then(|reader| reader.result().ok())
                .and_then(|result| result.as_string());
            finish_thumbnail(&handle, id, data_url);
        }) as Box<dyn FnMut(Event)>)
    };
    let onerror = {
        let handle = handle.clone();
        let done = Rc::clone(&done);
        Closure::wrap(Box::new(move |_event: Event| {
            if done.replace(true) {
                return;
            }
            log::warn!("⚠️ Could not read thumbnail for {}", id);
            finish_thumbnail(&handle, id, None);
        }) as Box<dyn FnMut(Event)>)
    };

    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onload.forget(); // Leak the closures to keep them alive until the read completes
    onerror.forget();

    if let Err(e) = reader.read_as_data_url(file) {
        log::warn!("⚠️ Could not start reading {}: {:?}", file.name(), e);
        if !done.replace(true) {
            finish_thumbnail(handle, id, None);
        }
    }
}

// ============================================================================
// Send timer
// ============================================================================

fn start_send(handle: &WeakUploader) {
    let token = CancelToken::new();
    if let Some(Ok(step)) = with_uploader(handle, |uploader| uploader.send(token)) {
        drive(handle, step);
    }
}

/// Schedule the next tick, if the send asks for one.
fn drive(handle: &WeakUploader, step: SendStep) {
    match step {
        SendStep::Scheduled(delay) => schedule_tick(handle.clone(), delay),
        SendStep::Finished(summary) => {
            log::debug!("Send timer stopped after {} pictures", summary.sent);
        }
    }
}

fn schedule_tick(handle: WeakUploader, delay: Duration) {
    let Some(window) = web_sys::window() else {
        log::warn!("⚠️ No window - cannot schedule upload progress");
        return;
    };

    let callback = Closure::once_into_js(move || {
        match with_uploader(&handle, |uploader| uploader.tick()) {
            Some(Ok(step)) => drive(&handle, step),
            Some(Err(e)) => log::debug!("Tick ignored: {}", e),
            None => {}
        }
    });

    let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
    if let Err(e) = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), millis)
    {
        log::warn!("⚠️ Could not schedule upload progress: {:?}", e);
    }
}
