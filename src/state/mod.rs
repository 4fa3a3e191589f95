//! Controller state
//!
//! The funbox controller and the state it owns: the settings memory and
//! the memorization countdown timer.

pub mod controller;
pub mod memory;
pub mod timer_state;

// Re-export main types
pub use controller::{Activation, FunboxController, NONE_FUNBOX};
pub use memory::{RememberedSetting, SettingKey, SettingsMemory};
pub use timer_state::MemoryTimerState;
