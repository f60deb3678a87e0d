//! Core calculator logic — types, input parsing, recipe derivation, sessions.

pub mod format;
pub mod input;
pub mod recipe;
pub mod session;
pub mod types;
