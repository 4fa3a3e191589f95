//! Background tasks
//!
//! The only recurring background activity is the memorization countdown.

pub mod memory_timer;

pub use memory_timer::memory_timer_task;
