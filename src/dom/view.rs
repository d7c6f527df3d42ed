//! DOM rendering of the uploader's view calls.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Event, HtmlElement, HtmlImageElement, MouseEvent};

use picdrop_core::{
    DialogState, Item, ItemId, ItemState, Thumbnail, UploaderView, classes, count_suffix,
};

use super::elements::{DialogElements, set_text_all, toggle_class};
use super::progress_bar::ProgressBar;
use super::{WeakUploader, with_uploader};
use crate::config::UploaderConfig;
use crate::constants::{NAME_ATTRIBUTE, REMOVE_LABEL};

/// The DOM node of one grid item and the listeners bound to it.
struct ItemNode {
    element: HtmlElement,
    image: HtmlImageElement,
    /// Thumbnail the image currently shows
    shown: RefCell<Thumbnail>,
    _listeners: Vec<Closure<dyn FnMut(Event)>>,
}

/// Renders the uploader into the dialog markup.
pub struct DomView {
    elements: DialogElements,
    config: Rc<UploaderConfig>,
    document: Option<Document>,
    progress: Vec<ProgressBar>,
    nodes: HashMap<ItemId, ItemNode>,
    handle: WeakUploader,
}

impl DomView {
    /// Create a view over bound elements. `handle` lets item listeners reach
    /// the controller that owns this view.
    pub fn new(elements: DialogElements, config: Rc<UploaderConfig>, handle: WeakUploader) -> Self {
        let progress = elements
            .current_progress
            .iter()
            .map(|container| ProgressBar::bind(container))
            .collect();
        let document = elements.root.owner_document();

        Self {
            elements,
            config,
            document,
            progress,
            nodes: HashMap::new(),
            handle,
        }
    }

    /// Build the node for a new item: an image plus a remove button.
    fn create_node(&self, item: &Item) -> Option<ItemNode> {
        let Some(document) = self.document.as_ref() else {
            log::warn!("⚠️ Dialog is not attached to a document - cannot create item");
            return None;
        };

        let element: HtmlElement = document.create_element("div").ok()?.dyn_into().ok()?;
        element.set_class_name(classes::IMG_ITEM);
        if let Err(e) = element.set_attribute(NAME_ATTRIBUTE, &item.name) {
            log::debug!("Could not set item name attribute: {:?}", e);
        }

        let image = HtmlImageElement::new().ok()?;
        image.set_src(self.config.thumbnail_src(&item.thumbnail));

        let remove: HtmlElement = document.create_element("div").ok()?.dyn_into().ok()?;
        remove.set_class_name(classes::REMOVE);
        remove.set_text_content(Some(REMOVE_LABEL));

        element.append_child(&image).ok()?;
        element.append_child(&remove).ok()?;

        let id = item.id;
        let on_click = {
            let handle = self.handle.clone();
            Closure::wrap(Box::new(move |event: Event| {
                let additive = event
                    .dyn_ref::<MouseEvent>()
                    .is_some_and(|e| e.alt_key() || e.ctrl_key() || e.meta_key());
                with_uploader(&handle, |uploader| {
                    let _ = uploader.click_item(id, additive);
                });
            }) as Box<dyn FnMut(Event)>)
        };
        let on_remove = {
            let handle = self.handle.clone();
            Closure::wrap(Box::new(move |event: Event| {
                event.prevent_default();
                event.stop_propagation();
                with_uploader(&handle, |uploader| {
                    let _ = uploader.remove_item(id);
                });
            }) as Box<dyn FnMut(Event)>)
        };

        element
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .ok()?;
        remove
            .add_event_listener_with_callback("click", on_remove.as_ref().unchecked_ref())
            .ok()?;

        Some(ItemNode {
            element,
            image,
            shown: RefCell::new(item.thumbnail.clone()),
            _listeners: vec![on_click, on_remove],
        })
    }

    fn apply_item_state(&self, node: &ItemNode, item: &Item) {
        toggle_class(
            &node.element,
            classes::NEED_UPLOAD,
            item.state == ItemState::NeedsUpload,
        );
        toggle_class(
            &node.element,
            classes::WILL_UPLOAD,
            item.state == ItemState::WillUpload,
        );
        toggle_class(&node.element, classes::SELECTED, item.selected);

        // The element reports its src resolved to an absolute URL, so compare
        // against the thumbnail last applied instead
        if *node.shown.borrow() != item.thumbnail {
            node.image.set_src(self.config.thumbnail_src(&item.thumbnail));
            node.shown.replace(item.thumbnail.clone());
        }
    }
}

impl UploaderView for DomView {
    fn show_count(&mut self, count: usize) {
        set_text_all(&self.elements.count, &count.to_string());
        set_text_all(&self.elements.count_suffix, count_suffix(count));
    }

    fn set_dialog_state(&mut self, state: DialogState) {
        for other in DialogState::all() {
            toggle_class(&self.elements.root, other.class_name(), *other == state);
        }
    }

    fn show_warning(&mut self, message: Option<&str>) {
        match message {
            Some(message) => {
                if !self.elements.error_panels.is_empty() {
                    set_text_all(&self.elements.error_panels, message);
                    toggle_class(&self.elements.root, classes::ERRORED, true);
                }
            }
            None => {
                set_text_all(&self.elements.error_panels, "");
                toggle_class(&self.elements.root, classes::ERRORED, false);
            }
        }
    }

    fn insert_item(&mut self, item: &Item) {
        let Some(grid) = self.elements.grid.clone() else {
            log::warn!("⚠️ No picture grid - cannot show '{}'", item.name);
            return;
        };

        if !self.nodes.contains_key(&item.id) {
            match self.create_node(item) {
                Some(node) => {
                    self.nodes.insert(item.id, node);
                }
                None => {
                    log::warn!("⚠️ Could not create a node for '{}'", item.name);
                    return;
                }
            }
        }

        let Some(node) = self.nodes.get(&item.id) else {
            return;
        };
        self.apply_item_state(node, item);

        let head = grid.first_element_child();
        if let Err(e) = grid.insert_before(&node.element, head.as_deref()) {
            log::warn!("⚠️ Could not insert '{}' into the grid: {:?}", item.name, e);
        }
    }

    fn update_item(&mut self, item: &Item) {
        if let Some(node) = self.nodes.get(&item.id) {
            self.apply_item_state(node, item);
        }
    }

    fn detach_item(&mut self, id: ItemId) {
        if let Some(node) = self.nodes.get(&id) {
            node.element.remove();
        }
    }

    fn discard_item(&mut self, id: ItemId) {
        if let Some(node) = self.nodes.remove(&id) {
            node.element.remove();
        }
    }

    fn show_undo_banner(&mut self, visible: bool, label: Option<&str>) {
        for banner in &self.elements.undo_banners {
            toggle_class(banner, classes::HIDDEN, !visible);
        }
        set_text_all(&self.elements.undo_labels, label.unwrap_or(""));
    }

    fn show_current_upload(&mut self, name: &str, thumbnail: &Thumbnail) {
        set_text_all(&self.elements.sending_path, name);
        let src = self.config.thumbnail_src(thumbnail);
        for preview in &self.elements.current_upload_imgs {
            match preview.dyn_ref::<HtmlImageElement>() {
                Some(image) => image.set_src(src),
                None => log::debug!("{} is not an <img>", classes::CURRENT_UPLOAD_IMG),
            }
        }
        for bar in &self.progress {
            bar.set_label(name);
        }
    }

    fn set_progress(&mut self, percent: u8) {
        for bar in &self.progress {
            bar.set_progress(f64::from(percent));
        }
    }

    fn set_sent_count(&mut self, sent: usize) {
        set_text_all(&self.elements.pics_sent, &sent.to_string());
    }

    fn set_pending_count(&mut self, pending: usize) {
        set_text_all(&self.elements.pics_count, &pending.to_string());
    }
}
