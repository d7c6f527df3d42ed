//! Picture items shown in the grid.

use std::fmt;

/// Identifier of an item, unique within one controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where an item is in its upload lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemState {
    /// Thumbnail still loading (a "tentative" item)
    Pending,
    /// Staged and eligible for the next send
    NeedsUpload,
    /// Committed to the active send's queue
    WillUpload,
}

impl ItemState {
    /// CSS class marking this state on the item node, if any.
    pub fn class_name(&self) -> Option<&'static str> {
        match self {
            ItemState::Pending => None,
            ItemState::NeedsUpload => Some(crate::classes::NEED_UPLOAD),
            ItemState::WillUpload => Some(crate::classes::WILL_UPLOAD),
        }
    }
}

/// Thumbnail shown for an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Thumbnail {
    /// Spinner while the file is being read
    Loading,
    /// Image data read from the file, as a data URL
    DataUrl(String),
    /// Static graphic used when no thumbnail could be read
    Placeholder,
}

/// One candidate picture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Unique identifier
    pub id: ItemId,
    /// Display name (the file name)
    pub name: String,
    /// Lifecycle state
    pub state: ItemState,
    /// Whether the item is highlighted
    pub selected: bool,
    /// Current thumbnail
    pub thumbnail: Thumbnail,
}

impl Item {
    /// Create a tentative item whose thumbnail is still loading.
    pub fn tentative(id: ItemId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            state: ItemState::Pending,
            selected: false,
            thumbnail: Thumbnail::Loading,
        }
    }

    /// Whether the item counts towards the visible total.
    pub fn is_staged(&self) -> bool {
        self.state != ItemState::Pending
    }
}
