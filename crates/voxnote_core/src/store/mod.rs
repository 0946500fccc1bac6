//! Authoritative note sequence and its persistence glue.
//!
//! # Responsibility
//! - Own the in-memory note sequence as the single source of truth.
//! - Mirror every mutation to key-value storage under one key.
//!
//! # Invariants
//! - The sequence is most-recent-first; new notes are prepended.
//! - No two notes in the sequence share an `id`.
//! - An empty-content note is never persisted.

pub mod note_store;

pub use note_store::{NoteStore, StoreError, StoreResult, NOTES_STORAGE_KEY};
