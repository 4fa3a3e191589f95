//! Funbox controller
//!
//! Owns the transient per-session state (saved category, settings memory,
//! countdown timer) and drives every funbox state transition. All failure
//! paths recover locally to a consistent "none" state; nothing here
//! propagates an error to the caller.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::{
    services::{
        FunboxCategory, HighlightMode, KeymapMode, Services, Severity, TestMode, WordsFlag,
    },
    state::{
        memory::{RememberedSetting, SettingsMemory},
        timer_state::MemoryTimerState,
    },
    tasks::memory_timer_task,
};

/// Sentinel name for "no funbox active"
pub const NONE_FUNBOX: &str = "none";

/// Funboxes that cannot run in languages rendering ligatures
const LIGATURE_INCOMPATIBLE: &[&str] = &["choo_choo", "earthquake"];

const READ_AHEAD_VARIANTS: &[&str] = &["read_ahead", "read_ahead_easy", "read_ahead_hard"];

/// Outcome of an activation attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// The funbox was applied and its side effects ran
    Applied,
    /// A compatibility veto: the funbox was reverted to "none"
    Rejected,
    /// A lookup failed: the funbox was reverted to "none"
    Failed,
}

impl Activation {
    pub fn is_applied(&self) -> bool {
        matches!(self, Activation::Applied)
    }
}

/// Stateful funbox controller, constructed once per test session
pub struct FunboxController {
    services: Services,
    /// Category supplied through `set_funbox`, consumed by activation
    saved_category: Mutex<Option<FunboxCategory>>,
    settings_memory: Mutex<SettingsMemory>,
    timer: Arc<Mutex<MemoryTimerState>>,
    last_activation: Mutex<Option<(String, DateTime<Utc>)>>,
}

impl FunboxController {
    pub fn new(services: Services) -> Self {
        Self {
            services,
            saved_category: Mutex::new(None),
            settings_memory: Mutex::new(SettingsMemory::new()),
            timer: Arc::new(Mutex::new(MemoryTimerState::new())),
            last_activation: Mutex::new(None),
        }
    }

    /// Record the selected funbox and its category, restore any remembered
    /// settings from the previous funbox, and persist the name. This is
    /// the configuration-change path, not a toggle-off.
    pub fn set_funbox(&self, name: &str, category: Option<FunboxCategory>) -> bool {
        if let Ok(mut saved) = self.saved_category.lock() {
            *saved = category;
        }
        self.load_memory();
        self.services.config.set_funbox(name, false);
        true
    }

    /// Restore every remembered setting through its quiet setter, then
    /// clear the memory set. The symmetric undo of activation's forced
    /// overrides, run when a funbox is deactivated or replaced.
    pub fn load_memory(&self) {
        if let Ok(mut memory) = self.settings_memory.lock() {
            if !memory.is_empty() {
                debug!(count = memory.len(), "restoring remembered settings");
            }
            memory.restore(self.services.config.as_ref());
        }
    }

    /// Apply the funbox named in the argument, or the configured one.
    pub fn activate(&self, funbox: Option<&str>) -> Activation {
        let saved = self.saved_category.lock().ok().and_then(|s| *s);
        let name = match funbox {
            Some(name) => name.to_string(),
            None => self.services.config.funbox(),
        };

        let descriptor = match self.services.catalog.get(&name) {
            Ok(descriptor) => descriptor,
            Err(err) => {
                self.fail_to_none(&format!("Failed to activate funbox: {err:#}"));
                return Activation::Failed;
            }
        };

        // Undo the previous funbox's visual traces before applying the new
        // one, whatever it was.
        self.services.ui.set_funbox_theme("");
        self.services.ui.remove_words_flag(WordsFlag::NoSpace);
        self.services.ui.remove_words_flag(WordsFlag::Arrows);

        let language = match self.services.languages.get(&self.services.config.language()) {
            Ok(language) => language,
            Err(err) => {
                self.fail_to_none(&format!("Failed to activate funbox: {err:#}"));
                return Activation::Failed;
            }
        };

        if language.ligatures && LIGATURE_INCOMPATIBLE.contains(&name.as_str()) {
            self.services.notifier.notify(
                "Current language does not support this funbox mode",
                Severity::Notice,
            );
            self.revert_to_none();
            return Activation::Rejected;
        }

        let mode = self.services.config.mode();
        if name != NONE_FUNBOX
            && matches!(mode, TestMode::Zen | TestMode::Quote)
            && descriptor
                .as_ref()
                .is_some_and(|d| d.affects_word_generation)
        {
            self.services.notifier.notify(
                &format!(
                    "{} mode does not support the {} funbox",
                    mode.capitalized(),
                    name
                ),
                Severity::Notice,
            );
            self.revert_to_none();
            return Activation::Rejected;
        }

        self.reset();
        self.services.ui.set_words_hidden(false);

        let category = match self.resolve_category(&name, saved) {
            Ok(category) => category,
            Err(err) => {
                self.services.notifier.notify(
                    &format!("Failed to activate funbox: {err:#}"),
                    Severity::Error,
                );
                self.clear();
                return Activation::Failed;
            }
        };

        self.services.harness.set_manual_restart();
        match category {
            Some(FunboxCategory::Style) => self.apply_style_effects(&name),
            Some(FunboxCategory::Script) => self.apply_script_effects(&name),
            None => {}
        }

        if let Ok(mut last) = self.last_activation.lock() {
            *last = Some((name.clone(), Utc::now()));
        }
        info!(funbox = %name, "funbox activated");
        Activation::Applied
    }

    /// Idempotent reset of every funbox-visible effect: theme, word flags,
    /// countdown timer, word visibility.
    pub fn clear(&self) {
        self.services.ui.set_funbox_theme("");
        self.services.ui.remove_words_flag(WordsFlag::NoSpace);
        self.services.ui.remove_words_flag(WordsFlag::Arrows);
        self.reset();
        self.services.ui.set_words_hidden(false);
        self.services.harness.set_manual_restart();
        self.services.harness.update_modes_notice();
    }

    /// Cancel the countdown timer only
    pub fn reset(&self) {
        self.reset_memory_timer();
    }

    /// Per-keystroke hook: with the tts funbox active, speak the first
    /// parameter. No-op otherwise.
    pub fn toggle_script(&self, params: &[String]) {
        if self.services.config.funbox() == "tts" {
            if let Some(text) = params.first() {
                self.services.speech.speak(text);
            }
        }
    }

    /// Record the user's original values for every option the active
    /// funbox will force-override, first write wins. Intended to run once
    /// per activation, before the overrides are applied.
    pub fn remember_settings(&self) {
        let name = self.services.config.funbox();
        let saved = self.saved_category.lock().ok().and_then(|s| *s);
        let category = match self.resolve_category(&name, saved) {
            Ok(category) => category,
            Err(err) => {
                self.services.notifier.notify(
                    &format!("Failed to remember setting: {err:#}"),
                    Severity::Error,
                );
                self.clear();
                return;
            }
        };

        let config = self.services.config.as_ref();
        let Ok(mut memory) = self.settings_memory.lock() else {
            warn!("settings memory lock poisoned, skipping remember");
            return;
        };

        match category {
            Some(FunboxCategory::Style) => {
                if name == "simon_says" {
                    memory.remember(RememberedSetting::KeymapMode(config.keymap_mode()));
                }
                if READ_AHEAD_VARIANTS.contains(&name.as_str()) {
                    memory.remember(RememberedSetting::HighlightMode(config.highlight_mode()));
                }
            }
            Some(FunboxCategory::Script) => match name.as_str() {
                "tts" => {
                    memory.remember(RememberedSetting::KeymapMode(config.keymap_mode()));
                }
                "layoutfluid" => {
                    memory.remember(RememberedSetting::KeymapMode(config.keymap_mode()));
                    memory.remember(RememberedSetting::Layout(config.layout()));
                    memory.remember(RememberedSetting::KeymapLayout(config.keymap_layout()));
                }
                "memory" => {
                    memory.remember(RememberedSetting::Mode(config.mode()));
                    memory.remember(RememberedSetting::ShowAllLines(config.show_all_lines()));
                    if config.keymap_mode() == KeymapMode::Next {
                        memory.remember(RememberedSetting::KeymapMode(config.keymap_mode()));
                    }
                }
                "nospace" | "arrows" => {
                    memory.remember(RememberedSetting::HighlightMode(config.highlight_mode()));
                }
                "58008" => {
                    memory.remember(RememberedSetting::Numbers(config.numbers()));
                }
                _ => {}
            },
            None => {}
        }
    }

    /// Arm the memorization countdown: `round(words^1.2)` seconds, one
    /// tick per second. Any running countdown is cancelled first.
    pub fn start_memory_timer(&self) {
        self.reset_memory_timer();

        let words = self.services.harness.word_count();
        let seconds = (words as f64).powf(1.2).round() as u64;
        info!(words, seconds, "starting memory timer");

        if let Ok(mut timer) = self.timer.lock() {
            timer.remaining_seconds = Some(seconds);
        }
        self.services.ui.update_memory_timer(seconds);
        self.services.ui.show_memory_timer();

        let handle = tokio::spawn(memory_timer_task(
            Arc::clone(&self.timer),
            Arc::clone(&self.services.ui),
        ));
        if let Ok(mut timer) = self.timer.lock() {
            timer.tick_handle = Some(handle);
        }
    }

    /// Cancel the countdown and hide its display. Idempotent.
    pub fn reset_memory_timer(&self) {
        if let Ok(mut timer) = self.timer.lock() {
            timer.cancel();
        }
        self.services.ui.hide_memory_timer();
    }

    /// Remaining countdown seconds, if a countdown is running
    pub fn memory_timer_remaining(&self) -> Option<u64> {
        self.timer.lock().ok().and_then(|t| t.remaining_seconds)
    }

    pub fn memory_timer_running(&self) -> bool {
        self.timer.lock().map(|t| t.is_running()).unwrap_or(false)
    }

    /// Name and time of the last successful activation
    pub fn last_activation(&self) -> Option<(String, DateTime<Utc>)> {
        self.last_activation.lock().ok().and_then(|l| l.clone())
    }

    /// Number of settings currently remembered for restoration
    pub fn remembered_settings(&self) -> usize {
        self.settings_memory.lock().map(|m| m.len()).unwrap_or(0)
    }

    /// One resolution step for the active category, fed by both inputs:
    /// a category saved through `set_funbox` short-circuits, otherwise
    /// "none" has no category and anything else is looked up in the full
    /// catalog. An unknown name resolves to no category.
    fn resolve_category(
        &self,
        name: &str,
        saved: Option<FunboxCategory>,
    ) -> anyhow::Result<Option<FunboxCategory>> {
        if saved.is_some() {
            return Ok(saved);
        }
        if name == NONE_FUNBOX {
            return Ok(None);
        }
        let list = self.services.catalog.list()?;
        Ok(list.into_iter().find(|f| f.name == name).map(|f| f.category))
    }

    fn apply_style_effects(&self, name: &str) {
        self.services
            .ui
            .set_funbox_theme(&format!("funbox/{name}.css"));

        if name == "simon_says" {
            self.services.config.set_keymap_mode(KeymapMode::Next, true);
        }

        if READ_AHEAD_VARIANTS.contains(&name)
            && self.services.config.highlight_mode() == HighlightMode::Word
        {
            self.services
                .config
                .set_highlight_mode(HighlightMode::Letter, true);
        }
    }

    fn apply_script_effects(&self, name: &str) {
        let config = &self.services.config;
        match name {
            "tts" => {
                // tts reuses the simon_says theme
                self.services.ui.set_funbox_theme("funbox/simon_says.css");
                config.set_keymap_mode(KeymapMode::Off, true);
                config.set_highlight_mode(HighlightMode::Letter, true);
            }
            "layoutfluid" => {
                let layout = fluid_base_layout(&config.custom_layoutfluid());
                config.set_layout(&layout, true);
                config.set_keymap_layout(&layout, true);
            }
            "memory" => {
                config.set_mode(TestMode::Words, true);
                config.set_show_all_lines(true, true);
                if config.keymap_mode() == KeymapMode::Next {
                    config.set_keymap_mode(KeymapMode::React, true);
                }
            }
            "nospace" => {
                self.services.ui.add_words_flag(WordsFlag::NoSpace);
                config.set_highlight_mode(HighlightMode::Letter, true);
            }
            "arrows" => {
                self.services.ui.add_words_flag(WordsFlag::Arrows);
                config.set_highlight_mode(HighlightMode::Letter, true);
            }
            _ => {}
        }
    }

    /// Lookup-failure recovery: notify, force "none", clear
    fn fail_to_none(&self, message: &str) {
        self.services.notifier.notify(message, Severity::Error);
        self.revert_to_none();
    }

    fn revert_to_none(&self) {
        self.services.config.set_funbox(NONE_FUNBOX, true);
        self.clear();
    }
}

/// First segment of the custom fluid-layout string, `qwerty` if empty
fn fluid_base_layout(custom: &str) -> String {
    custom
        .split('#')
        .next()
        .filter(|segment| !segment.is_empty())
        .unwrap_or("qwerty")
        .to_string()
}
