//! Note search.
//!
//! # Responsibility
//! - Provide the pure content filter applied on each search keystroke.
//!
//! # Invariants
//! - Filtering never reorders its input.
//! - An empty query matches every note.

pub mod filter;

pub use filter::filter_notes;
