//! Signal handling for clean shutdown of the driver binary

use futures::stream::StreamExt;
use signal_hook_tokio::Signals;
use tracing::info;

/// Resolve on the first shutdown signal (SIGTERM, SIGINT, SIGQUIT)
pub async fn shutdown_signal() {
    let mut signals = Signals::new([
        signal_hook::consts::SIGTERM,
        signal_hook::consts::SIGINT,
        signal_hook::consts::SIGQUIT,
    ])
    .expect("failed to install signal handler");

    if let Some(signal) = signals.next().await {
        info!(signal, "shutdown signal received");
    }
}
