//! Session-level tests for the uploader controller.
//!
//! These drive a full `Uploader` against a view that records what it was
//! asked to render, and check the dialog-wide properties: counts, undo order,
//! send completion and cancellation.

mod intake_tests;
mod send_tests;

use std::collections::HashMap;

use crate::file::FileInfo;
use crate::item::{Item, ItemId, ItemState, Thumbnail};
use crate::send::{SendStep, SendSummary};
use crate::settings::UploaderSetup;
use crate::uploader::Uploader;
use crate::view::{DialogState, UploaderView, count_suffix};

/// View that mirrors the rendered dialog in plain data.
#[derive(Debug, Default)]
pub(crate) struct RecordingView {
    pub count_text: String,
    pub count_suffix: String,
    pub state: DialogState,
    pub warning: Option<String>,
    /// Item nodes currently in the grid, head first
    pub grid: Vec<ItemId>,
    /// Last rendered version of every item node ever created
    pub items: HashMap<ItemId, Item>,
    pub discarded: Vec<ItemId>,
    pub undo_banner_visible: bool,
    pub undo_label: Option<String>,
    pub current_upload: Option<(String, Thumbnail)>,
    pub progress: Vec<u8>,
    pub sent_count: usize,
    pub pending_count: usize,
}

impl UploaderView for RecordingView {
    fn show_count(&mut self, count: usize) {
        self.count_text = count.to_string();
        self.count_suffix = count_suffix(count).to_string();
    }

    fn set_dialog_state(&mut self, state: DialogState) {
        self.state = state;
    }

    fn show_warning(&mut self, message: Option<&str>) {
        self.warning = message.map(str::to_string);
    }

    fn insert_item(&mut self, item: &Item) {
        assert!(!self.grid.contains(&item.id), "{} inserted twice", item.id);
        self.grid.insert(0, item.id);
        self.items.insert(item.id, item.clone());
    }

    fn update_item(&mut self, item: &Item) {
        self.items.insert(item.id, item.clone());
    }

    fn detach_item(&mut self, id: ItemId) {
        self.grid.retain(|node| *node != id);
    }

    fn discard_item(&mut self, id: ItemId) {
        self.grid.retain(|node| *node != id);
        self.items.remove(&id);
        self.discarded.push(id);
    }

    fn show_undo_banner(&mut self, visible: bool, label: Option<&str>) {
        self.undo_banner_visible = visible;
        self.undo_label = label.map(str::to_string);
    }

    fn show_current_upload(&mut self, name: &str, thumbnail: &Thumbnail) {
        self.current_upload = Some((name.to_string(), thumbnail.clone()));
    }

    fn set_progress(&mut self, percent: u8) {
        self.progress.push(percent);
    }

    fn set_sent_count(&mut self, sent: usize) {
        self.sent_count = sent;
    }

    fn set_pending_count(&mut self, pending: usize) {
        self.pending_count = pending;
    }
}

impl RecordingView {
    /// Rendered state of an item node.
    pub fn item_state(&self, id: ItemId) -> Option<ItemState> {
        self.items.get(&id).map(|item| item.state)
    }
}

pub(crate) fn uploader() -> Uploader<RecordingView> {
    Uploader::new(RecordingView::default(), UploaderSetup::default())
}

pub(crate) fn png(name: &str) -> FileInfo {
    FileInfo::new(name, "image/png")
}

/// Add files and finish their thumbnails, returning the new ids.
pub(crate) fn add_staged(uploader: &mut Uploader<RecordingView>, names: &[&str]) -> Vec<ItemId> {
    names
        .iter()
        .map(|name| {
            let id = uploader.add_file(&png(name)).expect("image accepted").id();
            uploader
                .thumbnail_ready(id, Some(format!("data:image/png;base64,{name}")))
                .expect("thumbnail accepted");
            id
        })
        .collect()
}

/// Tick until the active send finishes, returning its summary and the
/// number of ticks taken.
pub(crate) fn run_send(
    uploader: &mut Uploader<RecordingView>,
    first: SendStep,
) -> (SendSummary, usize) {
    let mut step = first;
    let mut ticks = 0;
    loop {
        match step {
            SendStep::Finished(summary) => return (summary, ticks),
            SendStep::Scheduled(_) => {
                ticks += 1;
                assert!(ticks < 10_000, "send never finished");
                step = uploader.tick().expect("send in progress");
            }
        }
    }
}

/// Check the invariants that must hold between any two operations.
pub(crate) fn assert_consistent(uploader: &Uploader<RecordingView>) {
    let grid = uploader.grid().expect("grid present");
    assert_eq!(uploader.count(), grid.staged_count());
    assert_eq!(uploader.view().count_text, uploader.count().to_string());

    let model_order: Vec<ItemId> = grid.iter().map(|item| item.id).collect();
    assert_eq!(uploader.view().grid, model_order);

    for id in uploader.selection() {
        let item = grid.get(*id).expect("selected item in grid");
        assert!(item.selected);
        assert_ne!(item.state, ItemState::WillUpload);
    }
    assert_eq!(uploader.view().undo_banner_visible, uploader.removed().can_undo());
}
