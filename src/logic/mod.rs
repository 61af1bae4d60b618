//! Logic modules — the exercises built on top of the containers.
//!
//! Every function here is pure: no I/O, and no failure paths beyond
//! returning `None` or `false`.
//!
//! # Modules
//!
//! - `rotation` — Cyclic rotation left/right by K single steps
//! - `reversal` — String reversal through a stack
//! - `brackets` — Bracket-balance checking with a stack of open tokens

pub mod brackets;
pub mod reversal;
pub mod rotation;
