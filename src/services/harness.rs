//! Test harness boundary
//!
//! The pieces of the surrounding test engine the controller pokes at: the
//! manual-restart flag (test state must restart), the mode-notice banner,
//! and the current test's word count (drives the memorization countdown).

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

pub trait TestHarness: Send + Sync {
    /// Signal the harness that in-progress test state is invalid
    fn set_manual_restart(&self);

    /// Re-render the banner reflecting current mode/modifier state
    fn update_modes_notice(&self);

    /// Number of words in the current test
    fn word_count(&self) -> usize;
}

/// Stand-in harness for the driver binary and tests: a fixed word count
/// and a restart flag that can be polled.
#[derive(Debug)]
pub struct DemoHarness {
    words: usize,
    restart_pending: AtomicBool,
}

impl DemoHarness {
    pub fn new(words: usize) -> Self {
        Self {
            words,
            restart_pending: AtomicBool::new(false),
        }
    }

    /// Consume the restart flag, returning whether it was set
    pub fn take_restart(&self) -> bool {
        self.restart_pending.swap(false, Ordering::SeqCst)
    }
}

impl TestHarness for DemoHarness {
    fn set_manual_restart(&self) {
        self.restart_pending.store(true, Ordering::SeqCst);
        debug!("manual restart flagged");
    }

    fn update_modes_notice(&self) {
        debug!("modes notice refreshed");
    }

    fn word_count(&self) -> usize {
        self.words
    }
}
