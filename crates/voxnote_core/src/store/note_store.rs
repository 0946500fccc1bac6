//! Note store over key-value storage.
//!
//! # Responsibility
//! - Provide create/delete/search over the authoritative note sequence.
//! - Serialize the full sequence to a single storage key on each change.
//!
//! # Invariants
//! - Every mutation performs its own full-sequence write; last write wins.
//! - A corrupt or missing persisted payload recovers to an empty store.
//! - Deletion of an absent id is a no-op, never an error.

use crate::model::note::{Note, NoteId};
use crate::storage::{KeyValueStorage, StorageError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// The single storage key holding the serialized note sequence.
pub const NOTES_STORAGE_KEY: &str = "notes";

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-layer error for note sequence mutations.
#[derive(Debug)]
pub enum StoreError {
    /// Empty content was offered to `create`; nothing was persisted.
    EmptyContent,
    /// Underlying key-value storage failed.
    Storage(StorageError),
    /// The sequence could not be serialized for persistence.
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyContent => write!(f, "note content must not be empty"),
            Self::Storage(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize note sequence: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EmptyContent => None,
            Self::Storage(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Owner of the authoritative note sequence.
///
/// All other components see read-only views of the sequence or receive
/// callbacks into this store; none hold independent copies.
pub struct NoteStore {
    notes: Vec<Note>,
    storage: Box<dyn KeyValueStorage>,
}

impl NoteStore {
    /// Opens a store over the given storage, loading any persisted notes.
    ///
    /// A present and parseable payload deserializes into the sequence. A
    /// missing payload starts empty. A corrupt payload also starts empty:
    /// recovery is silent toward the caller and logged at warn level.
    pub fn open(storage: Box<dyn KeyValueStorage>) -> StoreResult<Self> {
        let notes = match storage.read(NOTES_STORAGE_KEY)? {
            None => Vec::new(),
            Some(payload) => match serde_json::from_str::<Vec<Note>>(&payload) {
                Ok(notes) => notes,
                Err(err) => {
                    warn!(
                        "event=store_load module=store status=recovered error={err} payload_len={}",
                        payload.len()
                    );
                    Vec::new()
                }
            },
        };

        info!(
            "event=store_load module=store status=ok count={}",
            notes.len()
        );
        Ok(Self { notes, storage })
    }

    /// Read-only view of the full sequence, most-recent-first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Creates a note from `content` and persists the updated sequence.
    ///
    /// The new note is prepended (most-recent-first ordering).
    ///
    /// # Errors
    /// - `StoreError::EmptyContent` when `content` is empty; the sequence
    ///   is left untouched and the caller is responsible for warning the
    ///   user.
    /// - `StoreError::Storage` when the synchronous write fails; the
    ///   in-memory sequence is rolled back to match persisted state.
    pub fn create(&mut self, content: &str) -> StoreResult<&Note> {
        if content.is_empty() {
            return Err(StoreError::EmptyContent);
        }

        let note = Note::new(content);
        let note_id = note.id;
        self.notes.insert(0, note);

        if let Err(err) = self.persist() {
            self.notes.remove(0);
            return Err(err);
        }

        info!(
            "event=note_create module=store status=ok id={note_id} count={}",
            self.notes.len()
        );
        Ok(&self.notes[0])
    }

    /// Deletes the note with `id`, if present, and persists the sequence.
    ///
    /// Returns `Ok(true)` when a note was removed, `Ok(false)` when no
    /// note matched. Absent ids are idempotent no-ops and skip the write.
    pub fn delete(&mut self, id: NoteId) -> StoreResult<bool> {
        let Some(position) = self.notes.iter().position(|note| note.id == id) else {
            return Ok(false);
        };

        let removed = self.notes.remove(position);

        if let Err(err) = self.persist() {
            self.notes.insert(position, removed);
            return Err(err);
        }

        info!(
            "event=note_delete module=store status=ok id={id} count={}",
            self.notes.len()
        );
        Ok(true)
    }

    /// Case-insensitive substring search over note content.
    ///
    /// Pure with respect to store state; ordering follows the sequence.
    pub fn search(&self, query: &str) -> Vec<&Note> {
        crate::search::filter_notes(&self.notes, query)
    }

    fn persist(&self) -> StoreResult<()> {
        let payload = serde_json::to_string(&self.notes)?;
        self.storage.write(NOTES_STORAGE_KEY, &payload)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{NoteStore, StoreError, NOTES_STORAGE_KEY};
    use crate::storage::{KeyValueStorage, MemoryKeyValueStorage};

    #[test]
    fn open_on_empty_storage_starts_empty() {
        let store = NoteStore::open(Box::new(MemoryKeyValueStorage::new())).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn create_prepends_new_note() {
        let mut store = NoteStore::open(Box::new(MemoryKeyValueStorage::new())).unwrap();
        store.create("buy milk").unwrap();
        store.create("call mom").unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.notes()[0].content, "call mom");
        assert_eq!(store.notes()[1].content, "buy milk");
    }

    #[test]
    fn create_empty_content_is_rejected() {
        let mut store = NoteStore::open(Box::new(MemoryKeyValueStorage::new())).unwrap();
        let err = store.create("").unwrap_err();
        assert!(matches!(err, StoreError::EmptyContent));
        assert!(store.is_empty());
    }

    #[test]
    fn corrupt_payload_recovers_to_empty_store() {
        let storage = MemoryKeyValueStorage::new();
        storage.write(NOTES_STORAGE_KEY, "{not json]").unwrap();

        let store = NoteStore::open(Box::new(storage)).unwrap();
        assert!(store.is_empty());
    }
}
