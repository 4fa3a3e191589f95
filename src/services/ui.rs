//! Test UI surface
//!
//! The DOM-visible side of the controller: the funbox stylesheet link, the
//! word-container class flags, the word-wrapper visibility, and the
//! memorization countdown display. Hosts plug in their own renderer; the
//! driver binary uses a tracing-backed one.

use tracing::debug;

/// Boolean class flags the controller toggles on the word container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordsFlag {
    /// Suppress the space character between words
    NoSpace,
    /// Arrow-key input mode
    Arrows,
}

impl WordsFlag {
    pub fn class_name(&self) -> &'static str {
        match self {
            WordsFlag::NoSpace => "nospace",
            WordsFlag::Arrows => "arrows",
        }
    }
}

pub trait TestUi: Send + Sync {
    /// Point the funbox stylesheet link at `href`; empty clears it
    fn set_funbox_theme(&self, href: &str);

    fn add_words_flag(&self, flag: WordsFlag);
    fn remove_words_flag(&self, flag: WordsFlag);

    /// Hide or reveal the word-display wrapper
    fn set_words_hidden(&self, hidden: bool);

    fn show_memory_timer(&self);
    fn hide_memory_timer(&self);
    fn update_memory_timer(&self, seconds: u64);
}

/// Headless UI that only logs, for the driver binary
#[derive(Debug, Default)]
pub struct TracingUi;

impl TestUi for TracingUi {
    fn set_funbox_theme(&self, href: &str) {
        if href.is_empty() {
            debug!("funbox theme cleared");
        } else {
            debug!(href, "funbox theme set");
        }
    }

    fn add_words_flag(&self, flag: WordsFlag) {
        debug!(flag = flag.class_name(), "words flag added");
    }

    fn remove_words_flag(&self, flag: WordsFlag) {
        debug!(flag = flag.class_name(), "words flag removed");
    }

    fn set_words_hidden(&self, hidden: bool) {
        debug!(hidden, "words wrapper visibility changed");
    }

    fn show_memory_timer(&self) {
        debug!("memory timer shown");
    }

    fn hide_memory_timer(&self) {
        debug!("memory timer hidden");
    }

    fn update_memory_timer(&self, seconds: u64) {
        debug!(seconds, "time left to memorise all words");
    }
}
