//! Shared fakes for the integration suites
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use funbox::{
    services::{
        BundledCatalog, BundledLanguages, ConfigSnapshot, DemoHarness, FunboxCatalog,
        FunboxDescriptor, MemoryConfig, NotificationSink, Services, Severity, SpeechService,
        TestUi, WordsFlag,
    },
    state::FunboxController,
};

/// UI surface that records every DOM-visible effect
#[derive(Debug, Default)]
pub struct RecordingUi {
    theme: Mutex<String>,
    flags: Mutex<Vec<String>>,
    words_hidden: Mutex<bool>,
    timer_visible: Mutex<bool>,
    timer_seconds: Mutex<Option<u64>>,
}

impl RecordingUi {
    pub fn theme(&self) -> String {
        self.theme.lock().unwrap().clone()
    }

    pub fn flags(&self) -> Vec<String> {
        self.flags.lock().unwrap().clone()
    }

    pub fn words_hidden(&self) -> bool {
        *self.words_hidden.lock().unwrap()
    }

    pub fn timer_visible(&self) -> bool {
        *self.timer_visible.lock().unwrap()
    }

    pub fn timer_seconds(&self) -> Option<u64> {
        *self.timer_seconds.lock().unwrap()
    }
}

impl TestUi for RecordingUi {
    fn set_funbox_theme(&self, href: &str) {
        *self.theme.lock().unwrap() = href.to_string();
    }

    fn add_words_flag(&self, flag: WordsFlag) {
        let mut flags = self.flags.lock().unwrap();
        let class = flag.class_name().to_string();
        if !flags.contains(&class) {
            flags.push(class);
        }
    }

    fn remove_words_flag(&self, flag: WordsFlag) {
        self.flags.lock().unwrap().retain(|c| c != flag.class_name());
    }

    fn set_words_hidden(&self, hidden: bool) {
        *self.words_hidden.lock().unwrap() = hidden;
    }

    fn show_memory_timer(&self) {
        *self.timer_visible.lock().unwrap() = true;
    }

    fn hide_memory_timer(&self) {
        *self.timer_visible.lock().unwrap() = false;
    }

    fn update_memory_timer(&self, seconds: u64) {
        *self.timer_seconds.lock().unwrap() = Some(seconds);
    }
}

/// Notification sink that records messages with their severity
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<(String, Severity)>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<(String, Severity)> {
        self.messages.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<(String, Severity)> {
        self.messages.lock().unwrap().last().cloned()
    }
}

impl NotificationSink for RecordingNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        self.messages
            .lock()
            .unwrap()
            .push((message.to_string(), severity));
    }
}

/// Speech service that records what was spoken
#[derive(Debug, Default)]
pub struct RecordingSpeech {
    spoken: Mutex<Vec<String>>,
}

impl RecordingSpeech {
    pub fn spoken(&self) -> Vec<String> {
        self.spoken.lock().unwrap().clone()
    }
}

impl SpeechService for RecordingSpeech {
    fn speak(&self, text: &str) {
        self.spoken.lock().unwrap().push(text.to_string());
    }
}

/// Catalog whose lookups always fail, as if the catalog were unavailable
#[derive(Debug, Default)]
pub struct FailingCatalog;

impl FunboxCatalog for FailingCatalog {
    fn get(&self, _name: &str) -> anyhow::Result<Option<FunboxDescriptor>> {
        Err(anyhow::anyhow!("funbox catalog unavailable"))
    }

    fn list(&self) -> anyhow::Result<Vec<FunboxDescriptor>> {
        Err(anyhow::anyhow!("funbox catalog unavailable"))
    }
}

/// A controller wired to recording fakes, plus handles to inspect them
pub struct TestWorld {
    pub config: Arc<MemoryConfig>,
    pub ui: Arc<RecordingUi>,
    pub notifier: Arc<RecordingNotifier>,
    pub harness: Arc<DemoHarness>,
    pub speech: Arc<RecordingSpeech>,
    pub controller: FunboxController,
}

impl TestWorld {
    pub fn new() -> Self {
        Self::with_config(ConfigSnapshot::default())
    }

    pub fn with_config(snapshot: ConfigSnapshot) -> Self {
        let catalog: Arc<dyn FunboxCatalog> =
            Arc::new(BundledCatalog::load().expect("bundled catalog"));
        Self::build(snapshot, catalog, 10)
    }

    pub fn with_words(snapshot: ConfigSnapshot, words: usize) -> Self {
        let catalog: Arc<dyn FunboxCatalog> =
            Arc::new(BundledCatalog::load().expect("bundled catalog"));
        Self::build(snapshot, catalog, words)
    }

    pub fn with_failing_catalog() -> Self {
        Self::build(ConfigSnapshot::default(), Arc::new(FailingCatalog), 10)
    }

    fn build(snapshot: ConfigSnapshot, catalog: Arc<dyn FunboxCatalog>, words: usize) -> Self {
        let config = Arc::new(MemoryConfig::new(snapshot));
        let ui = Arc::new(RecordingUi::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let harness = Arc::new(DemoHarness::new(words));
        let speech = Arc::new(RecordingSpeech::default());

        let controller = FunboxController::new(Services {
            config: config.clone(),
            catalog,
            languages: Arc::new(BundledLanguages::load().expect("bundled languages")),
            ui: ui.clone(),
            notifier: notifier.clone(),
            harness: harness.clone(),
            speech: speech.clone(),
        });

        Self {
            config,
            ui,
            notifier,
            harness,
            speech,
            controller,
        }
    }
}
