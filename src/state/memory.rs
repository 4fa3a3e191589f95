//! Settings memory
//!
//! While a funbox is active it force-overrides a handful of configuration
//! options. Before the overrides are applied, the user's original values
//! are remembered here; deactivating or replacing the funbox restores them.
//! First write wins: a funbox may mutate the same option several times
//! while active, and the value restored must be the pre-funbox one.

use crate::services::config_store::{ConfigStore, HighlightMode, KeymapMode, TestMode};

/// Configuration option a funbox can override
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    Mode,
    KeymapMode,
    HighlightMode,
    Layout,
    KeymapLayout,
    ShowAllLines,
    Numbers,
}

/// A remembered value, tagged by the option it belongs to. Each variant
/// knows how to re-apply itself through the config store with the quiet
/// flag set, so restoring is a plain dispatch over the variants.
#[derive(Debug, Clone, PartialEq)]
pub enum RememberedSetting {
    Mode(TestMode),
    KeymapMode(KeymapMode),
    HighlightMode(HighlightMode),
    Layout(String),
    KeymapLayout(String),
    ShowAllLines(bool),
    Numbers(bool),
}

impl RememberedSetting {
    pub fn key(&self) -> SettingKey {
        match self {
            RememberedSetting::Mode(_) => SettingKey::Mode,
            RememberedSetting::KeymapMode(_) => SettingKey::KeymapMode,
            RememberedSetting::HighlightMode(_) => SettingKey::HighlightMode,
            RememberedSetting::Layout(_) => SettingKey::Layout,
            RememberedSetting::KeymapLayout(_) => SettingKey::KeymapLayout,
            RememberedSetting::ShowAllLines(_) => SettingKey::ShowAllLines,
            RememberedSetting::Numbers(_) => SettingKey::Numbers,
        }
    }

    /// Write the remembered value back through the store, quietly
    pub fn apply(&self, config: &dyn ConfigStore) {
        match self {
            RememberedSetting::Mode(mode) => config.set_mode(*mode, true),
            RememberedSetting::KeymapMode(mode) => config.set_keymap_mode(*mode, true),
            RememberedSetting::HighlightMode(mode) => config.set_highlight_mode(*mode, true),
            RememberedSetting::Layout(layout) => config.set_layout(layout, true),
            RememberedSetting::KeymapLayout(layout) => config.set_keymap_layout(layout, true),
            RememberedSetting::ShowAllLines(on) => config.set_show_all_lines(*on, true),
            RememberedSetting::Numbers(on) => config.set_numbers(*on, true),
        }
    }
}

/// Small ordered map of remembered settings with insert-if-absent semantics
#[derive(Debug, Default)]
pub struct SettingsMemory {
    entries: Vec<RememberedSetting>,
}

impl SettingsMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember a setting unless one is already recorded for the same key
    pub fn remember(&mut self, setting: RememberedSetting) {
        if self.entries.iter().any(|e| e.key() == setting.key()) {
            return;
        }
        self.entries.push(setting);
    }

    /// Restore every remembered setting in insertion order, then clear
    pub fn restore(&mut self, config: &dyn ConfigStore) {
        for setting in self.entries.drain(..) {
            setting.apply(config);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::config_store::MemoryConfig;

    #[test]
    fn first_write_wins() {
        let mut memory = SettingsMemory::new();
        memory.remember(RememberedSetting::KeymapMode(KeymapMode::Next));
        memory.remember(RememberedSetting::KeymapMode(KeymapMode::Off));
        assert_eq!(memory.len(), 1);

        let config = MemoryConfig::default();
        config.set_keymap_mode(KeymapMode::React, false);
        memory.restore(&config);
        assert_eq!(config.keymap_mode(), KeymapMode::Next);
    }

    #[test]
    fn restore_clears_and_is_idempotent() {
        let mut memory = SettingsMemory::new();
        memory.remember(RememberedSetting::HighlightMode(HighlightMode::Word));

        let config = MemoryConfig::default();
        memory.restore(&config);
        assert!(memory.is_empty());
        assert_eq!(config.highlight_mode(), HighlightMode::Word);

        // Second restore has nothing to re-apply
        config.set_highlight_mode(HighlightMode::Letter, false);
        memory.restore(&config);
        assert_eq!(config.highlight_mode(), HighlightMode::Letter);
    }

    #[test]
    fn different_keys_coexist() {
        let mut memory = SettingsMemory::new();
        memory.remember(RememberedSetting::Mode(TestMode::Time));
        memory.remember(RememberedSetting::ShowAllLines(false));
        memory.remember(RememberedSetting::Layout("qwerty".to_string()));
        assert_eq!(memory.len(), 3);

        let config = MemoryConfig::default();
        config.set_mode(TestMode::Words, false);
        config.set_show_all_lines(true, false);
        config.set_layout("dvorak", false);
        memory.restore(&config);

        assert_eq!(config.mode(), TestMode::Time);
        assert!(!config.show_all_lines());
        assert_eq!(config.layout(), "qwerty");
    }
}
