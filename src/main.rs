//! freqchart — a real-time area-chart widget over a live numeric signal.
//!
//! Run with:  `RUST_LOG=info freqchart`

use anyhow::Result;
use chart_config::{default_path, load as load_config, ChartConfig, ConfigWatcher};
use chart_options::ChartOptions;
use chart_render::TermRenderer;
use chart_signal::{latest_value, spawn_generator};
use chart_widget::{ChartTask, FrequencyChart};
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Structured logging — RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("freqchart v{} starting", env!("CARGO_PKG_VERSION"));

    let config = load_config(default_path()).unwrap_or_else(|e| {
        warn!("Config unusable ({e}); using defaults");
        ChartConfig::default()
    });

    // The demo source owns the writing half of the latest-value cell; the
    // widget only ever reads it, and the source stops by itself once the
    // widget (the last reader) is gone.
    let (writer, reader) = latest_value(None);
    let _generator = spawn_generator(
        writer,
        config.demo.interval_ms,
        config.demo.min,
        config.demo.max,
    );

    let chart = FrequencyChart::new(
        ChartOptions::from_config(&config),
        &config.demo.init_values,
        reader,
    );
    let task = ChartTask::spawn(
        chart,
        TermRenderer::new(),
        Duration::from_millis(config.window.tick_ms),
    );

    // Live config reload until Ctrl-C.
    let (_watcher, mut reloads) = ConfigWatcher::spawn(default_path());
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            Some(()) = reloads.recv() => {
                match load_config(default_path()) {
                    Ok(cfg) => {
                        info!("Config reloaded");
                        task.reload(ChartOptions::from_config(&cfg)).await;
                    }
                    Err(e) => warn!("Config reload failed: {e}"),
                }
            }
        }
    }

    info!("Shutting down");
    task.shutdown().await;

    Ok(())
}
