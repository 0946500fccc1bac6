//! New-note dialog.
//!
//! # Responsibility
//! - Model the modal note-creation flow: onboarding, free-text editing
//!   and speech capture.
//!
//! # Invariants
//! - Exactly one capture session may be owned by a dialog at a time.
//! - Saving requires non-empty content; failed saves change no state.

pub mod new_note;

pub use new_note::{DialogState, NewNoteDialog};
