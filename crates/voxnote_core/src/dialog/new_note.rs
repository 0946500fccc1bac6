//! New-note dialog state machine.
//!
//! # Responsibility
//! - Drive the three dialog states and their guarded transitions.
//! - Own the active capture session handle and fold its transcript
//!   events into the draft content.
//!
//! # Invariants
//! - `Recording` implies an owned capture session; no other state does.
//! - Each cumulative transcript event replaces the whole draft content.
//! - Recognition errors and stop-without-session are both surfaced to
//!   the user through the notifier (one visibility policy for both).

use crate::notify::Notifier;
use crate::speech::{
    concat_transcripts, CaptureConfig, CaptureEvent, CaptureSession, SpeechCaptureProvider,
};
use log::{error, info};

/// User-visible message for a save attempt with no content.
pub const MSG_EMPTY_NOTE: &str = "Note has no content!";
/// User-visible message when the runtime offers no speech capture.
pub const MSG_CAPTURE_UNSUPPORTED: &str =
    "Speech capture is not supported in this environment!";
/// User-visible message for a recognition backend failure.
pub const MSG_RECOGNITION_ERROR: &str = "Speech recognition failed";
/// User-visible message for stopping when nothing is recording.
pub const MSG_STOP_WITHOUT_SESSION: &str = "No active recording to stop";

/// Observable dialog state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    /// Initial state offering text entry or speech capture.
    Onboarding,
    /// Free-text entry with a visible draft.
    Editing,
    /// A capture session is active and feeding the draft.
    Recording,
}

/// Modal note-creation dialog.
///
/// The dialog holds draft content and the capture session handle; the
/// speech provider and notifier are borrowed per call so the composition
/// stays the single owner of those services.
pub struct NewNoteDialog {
    state: DialogState,
    content: String,
    session: Option<Box<dyn CaptureSession>>,
    capture_config: CaptureConfig,
}

impl Default for NewNoteDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl NewNoteDialog {
    pub fn new() -> Self {
        Self {
            state: DialogState::Onboarding,
            content: String::new(),
            session: None,
            capture_config: CaptureConfig::default(),
        }
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_recording(&self) -> bool {
        self.state == DialogState::Recording
    }

    /// Switches from onboarding to free-text entry.
    pub fn start_editor(&mut self) {
        if self.state == DialogState::Onboarding {
            self.state = DialogState::Editing;
        }
    }

    /// Replaces the draft content while editing.
    ///
    /// Clearing the content to empty returns the dialog to onboarding.
    pub fn set_content(&mut self, text: impl Into<String>) {
        self.content = text.into();
        if self.state == DialogState::Editing && self.content.is_empty() {
            self.state = DialogState::Onboarding;
        }
    }

    /// Starts a speech capture session.
    ///
    /// Guarded by capability detection: when the provider reports the
    /// capability missing, a user-visible error is raised and the state
    /// is left unchanged. Valid from any state; an already-active session
    /// is stopped before the new one starts.
    pub fn start_recording(
        &mut self,
        provider: &dyn SpeechCaptureProvider,
        notifier: &dyn Notifier,
    ) {
        if !provider.is_available() {
            notifier.error(MSG_CAPTURE_UNSUPPORTED);
            return;
        }

        let session = match provider.start(&self.capture_config) {
            Ok(session) => session,
            Err(err) => {
                error!("event=capture_start module=dialog status=error error={err}");
                notifier.error(MSG_CAPTURE_UNSUPPORTED);
                return;
            }
        };

        if let Some(mut previous) = self.session.take() {
            previous.stop();
        }

        self.session = Some(session);
        self.state = DialogState::Recording;
    }

    /// Drains pending capture events into the draft content.
    ///
    /// Each cumulative transcript event replaces the content with the
    /// concatenation of all recognized segments so far. Recognition
    /// errors are logged and surfaced through the notifier; the session
    /// is left as-is.
    pub fn pump_capture(&mut self, notifier: &dyn Notifier) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        while let Some(event) = session.poll_event() {
            match event {
                CaptureEvent::Transcript(segments) => {
                    self.content = concat_transcripts(&segments);
                }
                CaptureEvent::RecognitionError(message) => {
                    error!(
                        "event=recognition_error module=dialog status=error error={message}"
                    );
                    notifier.error(MSG_RECOGNITION_ERROR);
                }
            }
        }
    }

    /// Stops the active capture session, fire-and-forget.
    ///
    /// Content stays as the last transcribed text; the dialog shows the
    /// editor when there is any, onboarding otherwise. Without an active
    /// session a user-visible error is raised and nothing changes.
    pub fn stop_recording(&mut self, notifier: &dyn Notifier) {
        match self.session.take() {
            Some(mut session) => {
                session.stop();
                self.state = if self.content.is_empty() {
                    DialogState::Onboarding
                } else {
                    DialogState::Editing
                };
            }
            None => {
                notifier.error(MSG_STOP_WITHOUT_SESSION);
            }
        }
    }

    /// Saves the draft through the creation callback.
    ///
    /// Empty content raises a user-visible warning and performs no save.
    /// On a successful callback the draft resets, any active capture
    /// session is stopped, and the dialog returns to onboarding; a
    /// failed callback leaves the draft intact so the user can retry.
    ///
    /// Returns `Ok(true)` when a note was handed to the callback.
    pub fn save<E>(
        &mut self,
        notifier: &dyn Notifier,
        on_note_created: impl FnOnce(&str) -> Result<(), E>,
    ) -> Result<bool, E> {
        if self.content.is_empty() {
            notifier.warning(MSG_EMPTY_NOTE);
            return Ok(false);
        }

        on_note_created(&self.content)?;

        if let Some(mut session) = self.session.take() {
            session.stop();
        }
        self.content.clear();
        self.state = DialogState::Onboarding;
        info!("event=dialog_save module=dialog status=ok");
        Ok(true)
    }

    /// Closes the dialog, resetting to onboarding.
    ///
    /// Any active capture session is stopped. Already-saved notes are
    /// unaffected.
    pub fn close(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.stop();
        }
        self.content.clear();
        self.state = DialogState::Onboarding;
    }
}
