//! The surface the uploader renders into.
//!
//! The controller never touches the DOM directly. It calls these methods after
//! each state change, and the browser binding (or the simulator's logging
//! view) turns them into visible output.

use crate::item::{Item, ItemId, Thumbnail};

/// The three mutually exclusive dialog-level states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    /// No staged pictures
    #[default]
    Empty,
    /// Collecting pictures
    Collecting,
    /// A send is in progress
    Sending,
}

impl DialogState {
    /// CSS class applied to the dialog for this state.
    pub fn class_name(&self) -> &'static str {
        match self {
            DialogState::Empty => crate::classes::EMPTY,
            DialogState::Collecting => crate::classes::COLLECTING,
            DialogState::Sending => crate::classes::SENDING,
        }
    }

    /// All states.
    pub fn all() -> &'static [DialogState] {
        &[
            DialogState::Empty,
            DialogState::Collecting,
            DialogState::Sending,
        ]
    }
}

/// Plural suffix shown after the picture count.
pub fn count_suffix(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

/// CSS width of a progress fill. NaN counts as no progress and values
/// outside 0-100 are clamped.
pub fn progress_width(percent: f64) -> String {
    let percent = if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    };
    format!("{}%", percent)
}

/// Receives state changes from the uploader.
pub trait UploaderView {
    /// Show the number of staged pictures.
    fn show_count(&mut self, count: usize);

    /// Switch the dialog to a new state.
    fn set_dialog_state(&mut self, state: DialogState);

    /// Show a warning message, or clear the warning display with `None`.
    fn show_warning(&mut self, message: Option<&str>);

    /// Insert an item at the head of the grid. Called for new items and for
    /// items restored from the removed stack.
    fn insert_item(&mut self, item: &Item);

    /// Refresh an item's classes and thumbnail.
    fn update_item(&mut self, item: &Item);

    /// Take an item out of the grid; it may be inserted again later.
    fn detach_item(&mut self, id: ItemId);

    /// Take an item out of the grid for good.
    fn discard_item(&mut self, id: ItemId);

    /// Show or hide the undo banner. `label` names the item the next undo
    /// would restore.
    fn show_undo_banner(&mut self, visible: bool, label: Option<&str>);

    /// Show the item currently being sent.
    fn show_current_upload(&mut self, name: &str, thumbnail: &Thumbnail);

    /// Set the progress of the item currently being sent.
    fn set_progress(&mut self, percent: u8);

    /// Show how many pictures were sent so far.
    fn set_sent_count(&mut self, sent: usize);

    /// Show how many pictures the active send will transfer.
    fn set_pending_count(&mut self, pending: usize);
}
