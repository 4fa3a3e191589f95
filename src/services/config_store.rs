//! Configuration store boundary
//!
//! The controller reads and writes a handful of configuration options while
//! a funbox is active. The store itself lives elsewhere in the host
//! application; this module defines the typed surface the controller needs
//! plus an in-process implementation for the driver binary and tests.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Test mode the host is currently running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestMode {
    Time,
    Words,
    Zen,
    Quote,
    Custom,
}

impl TestMode {
    /// Display name with a leading capital, used in user-facing notices
    pub fn capitalized(&self) -> &'static str {
        match self {
            TestMode::Time => "Time",
            TestMode::Words => "Words",
            TestMode::Zen => "Zen",
            TestMode::Quote => "Quote",
            TestMode::Custom => "Custom",
        }
    }
}

/// Keymap display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeymapMode {
    Off,
    Static,
    Next,
    React,
}

/// Word highlight mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightMode {
    Off,
    Letter,
    Word,
}

/// Typed get/set surface over the host configuration store.
///
/// Setters take a `quiet` flag: when true the store should skip its usual
/// downstream side effects (persistence, UI refresh). The controller sets
/// it on every forced override and on every restore.
pub trait ConfigStore: Send + Sync {
    fn funbox(&self) -> String;
    fn set_funbox(&self, name: &str, quiet: bool);

    fn language(&self) -> String;

    fn mode(&self) -> TestMode;
    fn set_mode(&self, mode: TestMode, quiet: bool);

    fn keymap_mode(&self) -> KeymapMode;
    fn set_keymap_mode(&self, mode: KeymapMode, quiet: bool);

    fn highlight_mode(&self) -> HighlightMode;
    fn set_highlight_mode(&self, mode: HighlightMode, quiet: bool);

    fn layout(&self) -> String;
    fn set_layout(&self, layout: &str, quiet: bool);

    fn keymap_layout(&self) -> String;
    fn set_keymap_layout(&self, layout: &str, quiet: bool);

    fn show_all_lines(&self) -> bool;
    fn set_show_all_lines(&self, on: bool, quiet: bool);

    fn numbers(&self) -> bool;
    fn set_numbers(&self, on: bool, quiet: bool);

    fn custom_layoutfluid(&self) -> String;
}

/// Snapshot of every configuration option the controller touches
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigSnapshot {
    pub funbox: String,
    pub language: String,
    pub mode: TestMode,
    pub keymap_mode: KeymapMode,
    pub highlight_mode: HighlightMode,
    pub layout: String,
    pub keymap_layout: String,
    pub show_all_lines: bool,
    pub numbers: bool,
    pub custom_layoutfluid: String,
}

impl Default for ConfigSnapshot {
    fn default() -> Self {
        Self {
            funbox: "none".to_string(),
            language: "english".to_string(),
            mode: TestMode::Time,
            keymap_mode: KeymapMode::Off,
            highlight_mode: HighlightMode::Letter,
            layout: "qwerty".to_string(),
            keymap_layout: "qwerty".to_string(),
            show_all_lines: false,
            numbers: false,
            custom_layoutfluid: "qwerty#dvorak#colemak".to_string(),
        }
    }
}

/// In-process configuration store backed by a mutex-guarded snapshot
#[derive(Debug, Default)]
pub struct MemoryConfig {
    inner: Mutex<ConfigSnapshot>,
}

impl MemoryConfig {
    pub fn new(snapshot: ConfigSnapshot) -> Self {
        Self {
            inner: Mutex::new(snapshot),
        }
    }

    /// Clone of the current snapshot
    pub fn snapshot(&self) -> ConfigSnapshot {
        self.inner
            .lock()
            .map(|s| s.clone())
            .unwrap_or_else(|_| ConfigSnapshot::default())
    }

    fn read<T>(&self, reader: impl FnOnce(&ConfigSnapshot) -> T, fallback: T) -> T {
        match self.inner.lock() {
            Ok(snapshot) => reader(&snapshot),
            Err(_) => {
                warn!("config snapshot lock poisoned, returning fallback");
                fallback
            }
        }
    }

    fn write(&self, key: &str, quiet: bool, writer: impl FnOnce(&mut ConfigSnapshot)) {
        if let Ok(mut snapshot) = self.inner.lock() {
            writer(&mut snapshot);
            debug!(key, quiet, "config updated");
        } else {
            warn!(key, "config snapshot lock poisoned, dropping update");
        }
    }
}

impl ConfigStore for MemoryConfig {
    fn funbox(&self) -> String {
        self.read(|s| s.funbox.clone(), "none".to_string())
    }

    fn set_funbox(&self, name: &str, quiet: bool) {
        self.write("funbox", quiet, |s| s.funbox = name.to_string());
    }

    fn language(&self) -> String {
        self.read(|s| s.language.clone(), "english".to_string())
    }

    fn mode(&self) -> TestMode {
        self.read(|s| s.mode, TestMode::Time)
    }

    fn set_mode(&self, mode: TestMode, quiet: bool) {
        self.write("mode", quiet, |s| s.mode = mode);
    }

    fn keymap_mode(&self) -> KeymapMode {
        self.read(|s| s.keymap_mode, KeymapMode::Off)
    }

    fn set_keymap_mode(&self, mode: KeymapMode, quiet: bool) {
        self.write("keymapMode", quiet, |s| s.keymap_mode = mode);
    }

    fn highlight_mode(&self) -> HighlightMode {
        self.read(|s| s.highlight_mode, HighlightMode::Letter)
    }

    fn set_highlight_mode(&self, mode: HighlightMode, quiet: bool) {
        self.write("highlightMode", quiet, |s| s.highlight_mode = mode);
    }

    fn layout(&self) -> String {
        self.read(|s| s.layout.clone(), "qwerty".to_string())
    }

    fn set_layout(&self, layout: &str, quiet: bool) {
        self.write("layout", quiet, |s| s.layout = layout.to_string());
    }

    fn keymap_layout(&self) -> String {
        self.read(|s| s.keymap_layout.clone(), "qwerty".to_string())
    }

    fn set_keymap_layout(&self, layout: &str, quiet: bool) {
        self.write("keymapLayout", quiet, |s| s.keymap_layout = layout.to_string());
    }

    fn show_all_lines(&self) -> bool {
        self.read(|s| s.show_all_lines, false)
    }

    fn set_show_all_lines(&self, on: bool, quiet: bool) {
        self.write("showAllLines", quiet, |s| s.show_all_lines = on);
    }

    fn numbers(&self) -> bool {
        self.read(|s| s.numbers, false)
    }

    fn set_numbers(&self, on: bool, quiet: bool) {
        self.write("numbers", quiet, |s| s.numbers = on);
    }

    fn custom_layoutfluid(&self) -> String {
        self.read(|s| s.custom_layoutfluid.clone(), "qwerty".to_string())
    }
}
