//! Container types — the LIFO and FIFO building blocks the exercises use.
//!
//! # Modules
//!
//! - `stack` — `Stack` contract with a shared-handle and a value implementation
//! - `queue` — FIFO queue over a dynamic array

pub mod queue;
pub mod stack;

pub use queue::Queue;
pub use stack::{SharedStack, Stack, ValueStack};
