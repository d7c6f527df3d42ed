//! Removed-items stack backing the undo banner.
//!
//! Removing an item from the grid parks it here instead of destroying it, so
//! the user can bring it back. The most recent removal sits at the end.

use crate::item::Item;

/// Stack of removed items, most recent last.
#[derive(Debug, Clone, Default)]
pub struct RemovedStack {
    items: Vec<Item>,
}

impl RemovedStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Park a removed item.
    pub fn push(&mut self, item: Item) {
        log::debug!("🗑️ Removed '{}' ({})", item.name, item.id);
        self.items.push(item);
    }

    /// Take back the most recently removed item.
    pub fn pop(&mut self) -> Option<Item> {
        let item = self.items.pop()?;
        log::debug!("⏪ Restoring '{}' ({})", item.name, item.id);
        Some(item)
    }

    /// Take back every removed item, oldest removal first.
    pub fn drain_all(&mut self) -> Vec<Item> {
        log::debug!("⏪ Restoring all {} removed items", self.items.len());
        std::mem::take(&mut self.items)
    }

    /// The item the next undo would restore.
    pub fn peek(&self) -> Option<&Item> {
        self.items.last()
    }

    /// Name shown on the undo banner.
    pub fn undo_label(&self) -> Option<&str> {
        self.peek().map(|item| item.name.as_str())
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.items.is_empty()
    }

    /// Number of removed items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing has been removed
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
