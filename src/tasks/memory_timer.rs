//! Memorization countdown tick task

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use tokio::time::interval;
use tracing::debug;

use crate::{services::TestUi, state::MemoryTimerState};

/// Repeating one-second tick behind the "memorize words, then they
/// disappear" mechanic. Each tick decrements the shared counter; the tick
/// that reaches zero hides the countdown display, clears the timer state,
/// and hides the word area.
pub async fn memory_timer_task(timer: Arc<Mutex<MemoryTimerState>>, ui: Arc<dyn TestUi>) {
    let mut ticks = interval(Duration::from_secs(1));
    // The first interval tick completes immediately; the countdown starts
    // one second after arming.
    ticks.tick().await;

    loop {
        ticks.tick().await;

        let remaining = {
            let Ok(mut state) = timer.lock() else {
                break;
            };
            match state.remaining_seconds {
                Some(seconds) => {
                    let next = seconds.saturating_sub(1);
                    state.remaining_seconds = Some(next);
                    next
                }
                // Cancelled between ticks
                None => break,
            }
        };

        if remaining == 0 {
            ui.hide_memory_timer();
            if let Ok(mut state) = timer.lock() {
                state.remaining_seconds = None;
                state.tick_handle = None;
            }
            ui.set_words_hidden(true);
            debug!("memory timer expired, words hidden");
            break;
        }

        ui.update_memory_timer(remaining);
    }
}
