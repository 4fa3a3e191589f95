//! Notification sink
//!
//! Fire-and-forget user notifications; display is the host's concern.

use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Something went wrong and the funbox was reverted
    Error,
    /// A policy veto or informational message
    Notice,
}

pub trait NotificationSink: Send + Sync {
    fn notify(&self, message: &str, severity: Severity);
}

/// Notifier that routes messages to the log, for the driver binary
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl NotificationSink for TracingNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Error => error!("{message}"),
            Severity::Notice => info!("{message}"),
        }
    }
}
