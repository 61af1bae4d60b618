//! Stacks & Queues Library
//!
//! This library provides stack and queue containers and the exercises built
//! on them: cyclic rotation, string reversal and bracket-balance checking.

pub mod cli;
pub mod config_file;
pub mod containers;
pub mod demo;
pub mod error;
pub mod logic;
pub mod types;

// Re-export main types for convenience
pub use config_file::DemoConfig;
pub use containers::{Queue, SharedStack, Stack, ValueStack};
pub use demo::{DemoEntry, DemoReport, DemoSection};
pub use error::ExerciseError;
pub use types::{Direction, Verdict};

// Exercises
pub use logic::brackets::{Bracket, BracketToken, check_brackets, is_balanced};
pub use logic::reversal::{reverse, reverse_or_placeholder};
pub use logic::rotation::{rotate, rotate_left, rotate_right};
