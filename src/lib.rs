//! Funbox - gameplay modifier controller for a typing test engine
//!
//! This library manages "funbox" feature toggles: small gameplay modifiers
//! (visual themes, input restrictions, text-to-speech, memorization
//! challenges) that alter test behavior. It owns the active-modifier state,
//! the settings memory used to restore overridden preferences, and the
//! memorization countdown timer.

pub mod config;
pub mod services;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use services::Services;
pub use state::{Activation, FunboxController};
pub use utils::shutdown_signal;
