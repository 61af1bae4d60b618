//! Last-in, first-out stacks.
//!
//! The `Stack` trait is the behavioral contract. It is implemented twice and
//! the two implementations differ only in what `Clone` means:
//!
//! - [`SharedStack`] is a handle. Clones point at the same buffer, so a push
//!   through one handle is visible through every other.
//! - [`ValueStack`] is a value. Clones own their elements, so mutating one
//!   copy never affects another.
//!
//! Pick the one whose aliasing you need; behavior is otherwise identical.
//!
//! # Example
//!
//! ```
//! use stacks_and_queues::containers::{SharedStack, Stack, ValueStack};
//!
//! let mut shared = SharedStack::new();
//! let mut alias = shared.clone();
//! shared.push(1);
//! assert_eq!(alias.pop(), Some(1));
//!
//! let mut value = ValueStack::new();
//! value.push(1);
//! let mut copy = value.clone();
//! copy.pop();
//! assert_eq!(value.len(), 1);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Behavioral contract shared by both stack implementations.
///
/// # Invariants
///
/// - `pop` returns the most recently pushed element not yet removed.
/// - `pop` and `peek` on an empty stack return `None`; they never panic.
/// - `push` grows `len` by one, a successful `pop` shrinks it by one.
pub trait Stack<T> {
    /// Push an item onto the top.
    fn push(&mut self, item: T);

    /// Remove and return the top item, or `None` when empty.
    fn pop(&mut self) -> Option<T>;

    /// Return a copy of the top item without removing it.
    fn peek(&self) -> Option<T>
    where
        T: Clone;

    /// Number of stored items.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Stack with reference semantics.
///
/// Every clone is another handle to the same `Vec`. Single-threaded only.
pub struct SharedStack<T> {
    items: Rc<RefCell<Vec<T>>>,
}

impl<T> SharedStack<T> {
    pub fn new() -> Self {
        Self {
            items: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Returns true when both handles refer to the same buffer.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.items, &b.items)
    }
}

impl<T> Stack<T> for SharedStack<T> {
    fn push(&mut self, item: T) {
        self.items.borrow_mut().push(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.borrow_mut().pop()
    }

    fn peek(&self) -> Option<T>
    where
        T: Clone,
    {
        self.items.borrow().last().cloned()
    }

    fn len(&self) -> usize {
        self.items.borrow().len()
    }
}

// Cloning a handle never clones the elements, so no `T: Clone` bound.
impl<T> Clone for SharedStack<T> {
    fn clone(&self) -> Self {
        Self {
            items: Rc::clone(&self.items),
        }
    }
}

impl<T> Default for SharedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for SharedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedStack")
            .field("items", &*self.items.borrow())
            .finish()
    }
}

impl<T> Extend<T> for SharedStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.borrow_mut().extend(iter);
    }
}

impl<T> FromIterator<T> for SharedStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

/// Stack with value semantics.
///
/// Clones are independent copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueStack<T> {
    items: Vec<T>,
}

impl<T> ValueStack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Contents from bottom to top.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> Stack<T> for ValueStack<T> {
    fn push(&mut self, item: T) {
        self.items.push(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    fn peek(&self) -> Option<T>
    where
        T: Clone,
    {
        self.items.last().cloned()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for ValueStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for ValueStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> FromIterator<T> for ValueStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
