//! FIFO frontier used by breadth-first traversal.
//!
//! Traversal only needs enqueue-at-tail, dequeue-from-head, and an emptiness
//! check. [`Frontier`] captures exactly that so any ordered sequence can be
//! substituted; [`FifoQueue`] is the default.

use std::collections::VecDeque;

/// Minimal FIFO contract consumed by BFS.
pub trait Frontier<T> {
    /// Appends `item` at the tail.
    fn enqueue(&mut self, item: T);

    /// Removes and returns the earliest still-queued item, or `None` if empty.
    fn dequeue(&mut self) -> Option<T>;

    /// Returns true if nothing is queued.
    fn is_empty(&self) -> bool;
}

/// Growable FIFO queue backed by a ring buffer.
///
/// Owned exclusively by one traversal; no internal synchronization.
#[derive(Debug, Clone)]
pub struct FifoQueue<T> {
    items: VecDeque<T>,
}

impl<T> FifoQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Creates an empty queue with room for `capacity` items.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
        }
    }

    /// Number of queued items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item the next `dequeue` would return.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }
}

impl<T> Default for FifoQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for FifoQueue<T> {
    fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Frontier<T> for VecDeque<T> {
    fn enqueue(&mut self, item: T) {
        self.push_back(item);
    }

    fn dequeue(&mut self) -> Option<T> {
        self.pop_front()
    }

    fn is_empty(&self) -> bool {
        VecDeque::is_empty(self)
    }
}

impl<T> FromIterator<T> for FifoQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut queue = FifoQueue::new();
        queue.enqueue(1);
        queue.enqueue(2);
        queue.enqueue(3);

        assert_eq!(queue.dequeue(), Some(1));
        assert_eq!(queue.dequeue(), Some(2));
        assert_eq!(queue.dequeue(), Some(3));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_dequeue_empty_returns_none() {
        let mut queue: FifoQueue<u32> = FifoQueue::default();
        assert_eq!(queue.dequeue(), None);
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn test_interleaved_enqueue_dequeue() {
        let mut queue = FifoQueue::with_capacity(2);
        queue.enqueue('a');
        queue.enqueue('b');
        assert_eq!(queue.dequeue(), Some('a'));
        queue.enqueue('c');
        assert_eq!(queue.peek(), Some(&'b'));
        assert_eq!(queue.dequeue(), Some('b'));
        assert_eq!(queue.dequeue(), Some('c'));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn test_from_iterator_preserves_order() {
        let mut queue: FifoQueue<_> = (0..4).collect();
        assert_eq!(queue.len(), 4);
        assert_eq!(queue.dequeue(), Some(0));
    }

    #[test]
    fn test_vecdeque_is_a_frontier() {
        fn drain<Q: Frontier<u8>>(mut q: Q) -> Vec<u8> {
            let mut out = Vec::new();
            while let Some(x) = q.dequeue() {
                out.push(x);
            }
            out
        }

        let mut deque = VecDeque::new();
        Frontier::enqueue(&mut deque, 5);
        Frontier::enqueue(&mut deque, 6);
        assert_eq!(drain(deque), vec![5, 6]);
    }
}
