//! Command implementations.

pub mod bee;
pub mod wordament;
pub mod wordle;
