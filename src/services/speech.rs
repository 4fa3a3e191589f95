//! Speech playback boundary

use tracing::debug;

pub trait SpeechService: Send + Sync {
    /// Speak the given text. Playback errors are the implementation's own
    /// concern; the controller never observes them.
    fn speak(&self, text: &str);
}

/// Speech stub that logs what would be spoken
#[derive(Debug, Default)]
pub struct LoggingSpeech;

impl SpeechService for LoggingSpeech {
    fn speak(&self, text: &str) {
        debug!(text, "speaking");
    }
}
