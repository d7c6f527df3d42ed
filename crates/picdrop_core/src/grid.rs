//! The picture grid: items currently shown in the dialog, head first.

use crate::item::{Item, ItemId, ItemState};

/// Ordered collection of the items in the dialog.
#[derive(Debug, Clone, Default)]
pub struct PictureGrid {
    items: Vec<Item>,
}

impl PictureGrid {
    /// Create an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an item at the head of the grid.
    pub fn insert_head(&mut self, item: Item) {
        self.items.insert(0, item);
    }

    /// Detach an item from the grid, returning it.
    pub fn detach(&mut self, id: ItemId) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    /// Look up an item.
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Look up an item for modification.
    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Ids of all items in a given state, in grid order.
    pub fn ids_in_state(&self, state: ItemState) -> Vec<ItemId> {
        self.items
            .iter()
            .filter(|item| item.state == state)
            .map(|item| item.id)
            .collect()
    }

    /// Number of items that have finished loading.
    pub fn staged_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_staged()).count()
    }

    /// Iterate over items, head first.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Total number of items, including tentative ones.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the grid holds no items at all.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
