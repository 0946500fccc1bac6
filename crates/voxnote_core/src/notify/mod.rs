//! Transient user notifications.
//!
//! # Responsibility
//! - Define the toast-style seam through which components talk to the
//!   user without owning any rendering.
//!
//! # Invariants
//! - Notifications are fire-and-forget; no delivery acknowledgment.
//! - Emitting a notification never fails or mutates application state.

use log::{error, info, warn};

/// Sink for transient success/warning/error messages.
///
/// Supplied at composition time; the dialog and root composition raise
/// messages through it instead of rendering anything themselves.
pub trait Notifier {
    fn success(&self, message: &str);
    fn warning(&self, message: &str);
    fn error(&self, message: &str);
}

/// Notifier that records messages into the structured log stream.
///
/// The default sink for headless runs; UIs replace it with their own.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&self, message: &str) {
        info!("event=notify module=notify level=success message={message}");
    }

    fn warning(&self, message: &str) {
        warn!("event=notify module=notify level=warning message={message}");
    }

    fn error(&self, message: &str) {
        error!("event=notify module=notify level=error message={message}");
    }
}
