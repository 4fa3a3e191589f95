//! External service boundaries
//!
//! Every collaborator the controller depends on (configuration store,
//! funbox catalog, language metadata, UI surface, notifications, test
//! harness, speech) is a trait here, with in-process implementations for
//! the driver binary and tests.

pub mod catalog;
pub mod config_store;
pub mod harness;
pub mod language;
pub mod notify;
pub mod speech;
pub mod ui;

use std::sync::Arc;

pub use catalog::{BundledCatalog, FunboxCatalog, FunboxCategory, FunboxDescriptor};
pub use config_store::{
    ConfigSnapshot, ConfigStore, HighlightMode, KeymapMode, MemoryConfig, TestMode,
};
pub use harness::{DemoHarness, TestHarness};
pub use language::{BundledLanguages, LanguageInfo, LanguageProvider};
pub use notify::{NotificationSink, Severity, TracingNotifier};
pub use speech::{LoggingSpeech, SpeechService};
pub use ui::{TestUi, TracingUi, WordsFlag};

/// Bundle of every service the controller needs, shared by reference
#[derive(Clone)]
pub struct Services {
    pub config: Arc<dyn ConfigStore>,
    pub catalog: Arc<dyn FunboxCatalog>,
    pub languages: Arc<dyn LanguageProvider>,
    pub ui: Arc<dyn TestUi>,
    pub notifier: Arc<dyn NotificationSink>,
    pub harness: Arc<dyn TestHarness>,
    pub speech: Arc<dyn SpeechService>,
}
