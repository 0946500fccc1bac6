//! Scripted speech provider for tests and demos.
//!
//! # Responsibility
//! - Replay a fixed event script as if a recognition backend produced it.
//!
//! # Invariants
//! - Each `start` hands out one independent replay of the script.
//! - A stopped session produces no further events.

use super::{
    CaptureConfig, CaptureEvent, CaptureSession, SpeechCaptureProvider, SpeechError,
};
use log::info;
use std::collections::VecDeque;

/// Provider that replays a prepared event script per session.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSpeechProvider {
    script: Vec<CaptureEvent>,
}

impl ScriptedSpeechProvider {
    pub fn new(script: Vec<CaptureEvent>) -> Self {
        Self { script }
    }
}

impl SpeechCaptureProvider for ScriptedSpeechProvider {
    fn is_available(&self) -> bool {
        true
    }

    fn start(&self, config: &CaptureConfig) -> Result<Box<dyn CaptureSession>, SpeechError> {
        info!(
            "event=capture_start module=speech status=ok language={} continuous={} interim={} alternatives={}",
            config.language, config.continuous, config.interim_results, config.max_alternatives
        );
        Ok(Box::new(ScriptedCaptureSession {
            pending: self.script.iter().cloned().collect(),
            stopped: false,
        }))
    }
}

/// Session handle replaying one script.
#[derive(Debug)]
pub struct ScriptedCaptureSession {
    pending: VecDeque<CaptureEvent>,
    stopped: bool,
}

impl CaptureSession for ScriptedCaptureSession {
    fn poll_event(&mut self) -> Option<CaptureEvent> {
        if self.stopped {
            return None;
        }
        self.pending.pop_front()
    }

    fn stop(&mut self) {
        self.stopped = true;
        info!("event=capture_stop module=speech status=ok");
    }
}
