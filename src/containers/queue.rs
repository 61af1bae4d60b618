//! First-in, first-out queue over a dynamic array.
//!
//! Enqueue appends to the tail in O(1). Dequeue removes from the head and
//! shifts the remaining elements, which is O(n).

/// FIFO queue.
///
/// # Invariants
///
/// - `dequeue` returns the earliest-enqueued element not yet removed.
/// - `dequeue` and `peek` on an empty queue return `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    items: Vec<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append an item at the tail.
    pub fn enqueue(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove and return the head item, or `None` when empty.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }

    /// Head item without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Contents from head to tail.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
