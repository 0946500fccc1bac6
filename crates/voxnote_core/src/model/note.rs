//! Note domain model.
//!
//! # Responsibility
//! - Define the single persisted entity of the system.
//! - Provide creation helpers and content validation.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - `created_at` is captured once at creation and never changes.
//! - `content` must be non-empty before a note may be persisted.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for a note.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = Uuid;

/// A user-authored text record.
///
/// Notes are write-once: content and timestamp never change after
/// creation, and deletion removes the whole record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable global ID used for deletion and card identity.
    pub id: NoteId,
    /// Creation time in Unix epoch milliseconds.
    #[serde(rename = "createdAt")]
    pub created_at: i64,
    /// Plain-text body. Never empty for a persisted note.
    pub content: String,
}

/// Validation errors for note construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteValidationError {
    /// Content is empty; empty notes are never persisted.
    EmptyContent,
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyContent => write!(f, "note content must not be empty"),
        }
    }
}

impl Error for NoteValidationError {}

impl Note {
    /// Creates a new note with a generated stable ID and the current time.
    pub fn new(content: impl Into<String>) -> Self {
        Self::with_parts(Uuid::new_v4(), now_epoch_ms(), content)
    }

    /// Creates a note from caller-provided identity and timestamp.
    ///
    /// Used by persistence round-trips and tests where identity already
    /// exists.
    pub fn with_parts(id: NoteId, created_at: i64, content: impl Into<String>) -> Self {
        Self {
            id,
            created_at,
            content: content.into(),
        }
    }

    /// Checks the note against domain invariants.
    ///
    /// # Errors
    /// - `NoteValidationError::EmptyContent` when `content` is empty.
    pub fn validate(&self) -> Result<(), NoteValidationError> {
        if self.content.is_empty() {
            return Err(NoteValidationError::EmptyContent);
        }
        Ok(())
    }
}

/// Returns the current wall-clock time in Unix epoch milliseconds.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::{now_epoch_ms, Note, NoteValidationError};
    use uuid::Uuid;

    #[test]
    fn new_note_gets_fresh_identity_and_timestamp() {
        let before = now_epoch_ms();
        let note = Note::new("buy milk");
        assert_ne!(note.id, Uuid::nil());
        assert!(note.created_at >= before);
        assert_eq!(note.content, "buy milk");
    }

    #[test]
    fn two_notes_never_share_an_id() {
        let first = Note::new("a");
        let second = Note::new("a");
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn empty_content_fails_validation() {
        let note = Note::with_parts(Uuid::new_v4(), 0, "");
        assert_eq!(note.validate(), Err(NoteValidationError::EmptyContent));
    }

    #[test]
    fn non_empty_content_passes_validation() {
        assert!(Note::new("x").validate().is_ok());
    }
}
