//! Domain model for VoxNote.
//!
//! # Responsibility
//! - Define the canonical note record used by core business logic.
//! - Keep validation rules next to the data they guard.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId`.
//! - A note is immutable once created; there is no edit operation.

pub mod note;
