//! Funbox driver
//!
//! Wires the in-process service implementations together and runs one
//! activation cycle from the command line: remember settings, activate,
//! run the memorization countdown where applicable, then deactivate and
//! show the restored configuration.

use std::{sync::Arc, time::Duration};

use tracing::info;

use funbox::{
    config::Cli,
    services::{
        BundledCatalog, BundledLanguages, ConfigSnapshot, DemoHarness, LoggingSpeech,
        MemoryConfig, Services, TracingNotifier, TracingUi,
    },
    state::FunboxController,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();

    tracing_subscriber::fmt()
        .with_env_filter(format!("funbox={}", cli.log_level()))
        .init();

    info!(
        funbox = %cli.funbox,
        words = cli.words,
        language = %cli.language,
        "starting funbox driver"
    );

    let config = Arc::new(MemoryConfig::new(ConfigSnapshot {
        funbox: cli.funbox.clone(),
        language: cli.language.clone(),
        ..ConfigSnapshot::default()
    }));
    let harness = Arc::new(DemoHarness::new(cli.words));

    let services = Services {
        config: config.clone(),
        catalog: Arc::new(BundledCatalog::load()?),
        languages: Arc::new(BundledLanguages::load()?),
        ui: Arc::new(TracingUi),
        notifier: Arc::new(TracingNotifier),
        harness: harness.clone(),
        speech: Arc::new(LoggingSpeech),
    };
    let controller = FunboxController::new(services);

    controller.remember_settings();
    let outcome = controller.activate(None);
    info!(?outcome, "activation finished");

    if outcome.is_applied() && cli.funbox == "memory" {
        controller.start_memory_timer();

        let countdown = async {
            loop {
                tokio::time::sleep(Duration::from_millis(250)).await;
                if controller.memory_timer_remaining().is_none() {
                    break;
                }
            }
        };
        tokio::select! {
            _ = countdown => info!("memory countdown finished"),
            _ = shutdown_signal() => info!("interrupted, cancelling countdown"),
        }
        controller.reset_memory_timer();
    }

    if harness.take_restart() {
        info!("test harness would restart now");
    }

    // Deactivate and restore the remembered settings
    controller.set_funbox("none", None);
    controller.activate(Some("none"));

    info!(
        "final config: {}",
        serde_json::to_string_pretty(&config.snapshot())?
    );
    Ok(())
}
