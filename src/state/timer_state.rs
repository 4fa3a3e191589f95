//! Memorization countdown timer state

use tokio::task::JoinHandle;

/// Remaining-seconds counter plus the handle of the repeating tick task.
/// At most one tick stream exists at a time: cancelling aborts the task
/// and nulls the counter before a new countdown may be armed.
#[derive(Debug, Default)]
pub struct MemoryTimerState {
    pub remaining_seconds: Option<u64>,
    pub tick_handle: Option<JoinHandle<()>>,
}

impl MemoryTimerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.tick_handle.is_some()
    }

    /// Abort any tick task and clear the counter. Safe to call repeatedly.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.tick_handle.take() {
            handle.abort();
        }
        self.remaining_seconds = None;
    }
}
