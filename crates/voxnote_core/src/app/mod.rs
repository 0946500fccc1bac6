//! Root composition.
//!
//! # Responsibility
//! - Wire store, search filter, dialog and card projections into one
//!   page-equivalent unit.
//! - Own every service handle so no component probes the environment or
//!   copies the note sequence.
//!
//! # Invariants
//! - The store inside this composition is the single source of truth.
//! - Dialog saves land in the store through exactly one callback path.

use crate::card::NoteCard;
use crate::dialog::new_note::MSG_EMPTY_NOTE;
use crate::dialog::NewNoteDialog;
use crate::model::note::NoteId;
use crate::notify::Notifier;
use crate::speech::SpeechCaptureProvider;
use crate::store::{NoteStore, StoreError, StoreResult};

/// User-visible message after a note is created.
pub const MSG_NOTE_CREATED: &str = "Note created successfully!";
/// User-visible message after a note is deleted.
pub const MSG_NOTE_DELETED: &str = "Note deleted successfully!";

/// The single-page application shell.
pub struct NotesApp {
    store: NoteStore,
    dialog: NewNoteDialog,
    search: String,
    provider: Box<dyn SpeechCaptureProvider>,
    notifier: Box<dyn Notifier>,
}

impl NotesApp {
    /// Assembles the page from its owned services.
    pub fn new(
        store: NoteStore,
        provider: Box<dyn SpeechCaptureProvider>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        Self {
            store,
            dialog: NewNoteDialog::new(),
            search: String::new(),
            provider,
            notifier,
        }
    }

    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    pub fn dialog(&self) -> &NewNoteDialog {
        &self.dialog
    }

    /// Updates the search text (per-keystroke model).
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    pub fn search_text(&self) -> &str {
        &self.search
    }

    /// Filtered, ordered card projections for the current search text.
    pub fn visible_cards(&self, now_ms: i64) -> Vec<NoteCard> {
        self.store
            .search(&self.search)
            .into_iter()
            .map(|note| NoteCard::from_note(note, now_ms))
            .collect()
    }

    /// Creates a note directly, outside the dialog flow.
    ///
    /// Empty content degrades to a user warning without touching the
    /// sequence. Returns whether a note was created.
    pub fn create_note(&mut self, content: &str) -> StoreResult<bool> {
        match self.store.create(content) {
            Ok(_) => {
                self.notifier.success(MSG_NOTE_CREATED);
                Ok(true)
            }
            Err(StoreError::EmptyContent) => {
                self.notifier.warning(MSG_EMPTY_NOTE);
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    /// Deletes a note by card identity.
    ///
    /// The transient success notification is raised here, not by the
    /// card. Absent ids are silent no-ops.
    pub fn delete_note(&mut self, id: NoteId) -> StoreResult<bool> {
        let deleted = self.store.delete(id)?;
        if deleted {
            self.notifier.success(MSG_NOTE_DELETED);
        }
        Ok(deleted)
    }

    /// Dialog: switch from onboarding to free-text entry.
    pub fn open_editor(&mut self) {
        self.dialog.start_editor();
    }

    /// Dialog: replace the draft content.
    pub fn set_dialog_content(&mut self, text: impl Into<String>) {
        self.dialog.set_content(text);
    }

    /// Dialog: start a capture session through the owned provider.
    pub fn start_recording(&mut self) {
        self.dialog
            .start_recording(self.provider.as_ref(), self.notifier.as_ref());
    }

    /// Dialog: fold pending capture events into the draft.
    pub fn pump_capture(&mut self) {
        self.dialog.pump_capture(self.notifier.as_ref());
    }

    /// Dialog: stop the active capture session.
    pub fn stop_recording(&mut self) {
        self.dialog.stop_recording(self.notifier.as_ref());
    }

    /// Dialog: save the draft into the store.
    ///
    /// Returns whether a note was created.
    pub fn save_dialog(&mut self) -> StoreResult<bool> {
        let Self {
            store,
            dialog,
            notifier,
            ..
        } = self;

        let saved = dialog.save(notifier.as_ref(), |content| {
            store.create(content).map(|_| ())
        })?;

        if saved {
            notifier.success(MSG_NOTE_CREATED);
        }
        Ok(saved)
    }

    /// Dialog: close and reset, stopping any active capture session.
    pub fn close_dialog(&mut self) {
        self.dialog.close();
    }
}
