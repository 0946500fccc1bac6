//! Core domain logic for VoxNote.
//! This crate is the single source of truth for business invariants.

pub mod app;
pub mod card;
pub mod dialog;
pub mod logging;
pub mod model;
pub mod notify;
pub mod search;
pub mod speech;
pub mod storage;
pub mod store;

pub use app::{NotesApp, MSG_NOTE_CREATED, MSG_NOTE_DELETED};
pub use card::{format_relative_time, NoteCard};
pub use dialog::{DialogState, NewNoteDialog};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Note, NoteId, NoteValidationError};
pub use notify::{LogNotifier, Notifier};
pub use search::filter_notes;
pub use speech::{
    CaptureConfig, CaptureEvent, CaptureSession, ScriptedSpeechProvider, SpeechCaptureProvider,
    SpeechError, TranscriptSegment, UnsupportedSpeechProvider,
};
pub use storage::{
    KeyValueStorage, MemoryKeyValueStorage, SqliteKeyValueStorage, StorageError, StorageResult,
};
pub use store::{NoteStore, StoreError, StoreResult, NOTES_STORAGE_KEY};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
