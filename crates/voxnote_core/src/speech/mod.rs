//! Speech-to-text capture boundary.
//!
//! # Responsibility
//! - Define the capability-provider contract the dialog records through.
//! - Ship a never-available provider for headless runs and a scripted
//!   provider for tests and demos.
//!
//! # Invariants
//! - The dialog never probes the environment itself; availability is the
//!   provider's answer.
//! - A capture session is an explicit handle owned by exactly one dialog.
//! - Stopping a session is fire-and-forget; no acknowledgment is awaited.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod scripted;

pub use scripted::{ScriptedCaptureSession, ScriptedSpeechProvider};

/// Spoken-language locale used for every capture session.
pub const DEFAULT_CAPTURE_LANGUAGE: &str = "pt-BR";

/// Configuration for one capture session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureConfig {
    /// BCP 47 locale tag of the expected spoken language.
    pub language: String,
    /// Keep capturing across utterance pauses.
    pub continuous: bool,
    /// Deliver interim (non-final) transcription results.
    pub interim_results: bool,
    /// Alternatives requested per recognized segment.
    pub max_alternatives: u8,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_CAPTURE_LANGUAGE.to_string(),
            continuous: true,
            interim_results: true,
            max_alternatives: 1,
        }
    }
}

/// One recognized segment; carries the best alternative's transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptSegment {
    pub transcript: String,
    /// Interim segments may be replaced by later events.
    pub is_final: bool,
}

impl TranscriptSegment {
    pub fn interim(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
            is_final: false,
        }
    }

    pub fn finalized(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
            is_final: true,
        }
    }
}

/// Event delivered by an active capture session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureEvent {
    /// Cumulative list of segments recognized so far, in recognition
    /// order. Each event supersedes the previous one entirely.
    Transcript(Vec<TranscriptSegment>),
    /// Backend recognition failure; the session itself stays as-is.
    RecognitionError(String),
}

/// Speech-layer errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechError {
    /// The runtime offers no speech-to-text capability.
    Unavailable,
}

impl Display for SpeechError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable => write!(f, "speech capture capability is not available"),
        }
    }
}

impl Error for SpeechError {}

/// Capability provider supplied at composition time.
pub trait SpeechCaptureProvider {
    /// Whether this runtime can start a capture session at all.
    fn is_available(&self) -> bool;

    /// Starts a capture session configured per `config`.
    ///
    /// # Errors
    /// - `SpeechError::Unavailable` when the capability is missing.
    fn start(&self, config: &CaptureConfig) -> Result<Box<dyn CaptureSession>, SpeechError>;
}

/// One active speech-to-text listening operation.
pub trait CaptureSession: std::fmt::Debug {
    /// Takes the next pending event, if any. Events arrive over an
    /// indeterminate duration; `None` means nothing is pending right now.
    fn poll_event(&mut self) -> Option<CaptureEvent>;

    /// Stops listening. Fire-and-forget: already-delivered events remain
    /// consumable, no new ones are produced.
    fn stop(&mut self);
}

/// Concatenates the best transcript of every segment in recognition order.
///
/// Mirrors the replace-not-append accumulation contract: the caller swaps
/// its whole content for this result on each cumulative event.
pub fn concat_transcripts(segments: &[TranscriptSegment]) -> String {
    segments
        .iter()
        .map(|segment| segment.transcript.as_str())
        .collect()
}

/// Provider for runtimes without any speech-to-text backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedSpeechProvider;

impl SpeechCaptureProvider for UnsupportedSpeechProvider {
    fn is_available(&self) -> bool {
        false
    }

    fn start(&self, _config: &CaptureConfig) -> Result<Box<dyn CaptureSession>, SpeechError> {
        Err(SpeechError::Unavailable)
    }
}
