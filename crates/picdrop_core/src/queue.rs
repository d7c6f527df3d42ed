//! Upload queue and cancellation token for a send.
//!
//! The queue holds the ids committed to the active send and is drained head
//! first, one item at a time. It is independent of the grid so items can keep
//! arriving in the grid while a send is running.

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::item::ItemId;

/// FIFO of items committed to a send.
#[derive(Debug, Clone, Default)]
pub struct UploadQueue {
    items: VecDeque<ItemId>,
}

impl UploadQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item to the tail.
    pub fn push(&mut self, id: ItemId) {
        self.items.push_back(id);
    }

    /// The item currently in flight.
    pub fn head(&self) -> Option<ItemId> {
        self.items.front().copied()
    }

    /// Remove the item currently in flight.
    pub fn pop_head(&mut self) -> Option<ItemId> {
        self.items.pop_front()
    }

    /// Abandon the queue, returning whatever was left in order.
    pub fn abandon(&mut self) -> Vec<ItemId> {
        self.items.drain(..).collect()
    }

    /// Number of queued items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the queue is drained
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<ItemId> for UploadQueue {
    fn from_iter<I: IntoIterator<Item = ItemId>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

/// Cooperative cancellation flag shared between a send and its cancel controls.
///
/// Clones observe the same flag. The send polls it at each tick boundary.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancelToken {
    /// Create a token that is not cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    /// Whether cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_fifo() {
        let mut queue: UploadQueue = [ItemId(3), ItemId(1), ItemId(2)].into_iter().collect();
        assert_eq!(queue.head(), Some(ItemId(3)));
        assert_eq!(queue.pop_head(), Some(ItemId(3)));
        assert_eq!(queue.pop_head(), Some(ItemId(1)));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_queue_abandon() {
        let mut queue = UploadQueue::new();
        queue.push(ItemId(1));
        queue.push(ItemId(2));

        assert_eq!(queue.abandon(), vec![ItemId(1), ItemId(2)]);
        assert!(queue.is_empty());
        assert_eq!(queue.head(), None);
    }

    #[test]
    fn test_cancel_token_shared_between_clones() {
        let token = CancelToken::new();
        let button = token.clone();
        assert!(!token.is_cancelled());

        button.cancel();
        assert!(token.is_cancelled());
    }
}
