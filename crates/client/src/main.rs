//! Status synchronization replay tool.
//!
//! Replays a JSON-lines event script through the runtime and prints every
//! emitted effect to stdout, one JSON object per line, tagged with its topic.
//!
//! # Examples
//!
//! ```bash
//! cargo run -p statsync-client -- crates/client/scripts/session.jsonl
//!
//! # Real content tables and a legacy protocol version
//! STATSYNC_CONTENT_DIR=crates/game/content/data STATSYNC_PACKETVER=20130807 \
//!     cargo run -p statsync-client -- crates/client/scripts/session.jsonl
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use client_bootstrap::{ClientConfig, RuntimeBuilder};
use statsync_client::{parse_script, replay};
use statsync_core::{Effect, SessionState};
use statsync_runtime::{ManualClock, Topic};
use tokio::sync::mpsc;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_DIR_VAR: &str = "STATSYNC_LOG_DIR";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let log_dir = std::env::var_os(LOG_DIR_VAR).map(PathBuf::from);
    let _guard = setup_logging(log_dir.as_deref())?;

    let script_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: statsync-replay <script.jsonl>")?;
    let script = std::fs::read_to_string(&script_path)
        .with_context(|| format!("Failed to read script {}", script_path.display()))?;
    let steps = parse_script(&script)?;

    let config = ClientConfig::from_env()?;
    tracing::info!(
        script = %script_path.display(),
        steps = steps.len(),
        content_dir = ?config.content_dir,
        "Starting replay"
    );

    let clock = Arc::new(ManualClock::new());
    let (tap_tx, tap_rx) = mpsc::unbounded_channel();
    let setup = RuntimeBuilder::new(config)
        .session(SessionState::default())
        .clock(clock.clone())
        .tap(tap_tx)
        .build()
        .await?;
    tracing::info!(
        packet_version = setup.sync.packet_version,
        "Runtime built successfully"
    );

    let printer = tokio::spawn(print_effects(tap_rx));

    let stats = replay(&setup.runtime.handle(), &clock, steps).await?;
    let session = setup.runtime.shutdown().await?;
    let printed = printer.await.context("Effect printer panicked")??;

    let hp = session.player.life.hp;
    tracing::info!(
        events = stats.events,
        unhandled = stats.unhandled,
        session_updates = stats.session_updates,
        effects = printed,
        hp = hp.current,
        hp_max = hp.max,
        "Replay complete"
    );
    Ok(())
}

/// Writes each effect as `{"topic": .., "effect": ..}` until the runtime
/// drops its sink.
async fn print_effects(mut effects: mpsc::UnboundedReceiver<Effect>) -> Result<usize> {
    let mut count = 0;
    let stdout = std::io::stdout();
    while let Some(effect) = effects.recv().await {
        let line = serde_json::json!({
            "topic": Topic::of(&effect),
            "effect": effect,
        });
        let mut out = stdout.lock();
        writeln!(out, "{line}").context("Failed to write effect")?;
        count += 1;
    }
    Ok(count)
}

/// Logs to stderr, plus a non-blocking file layer when `log_dir` is set.
///
/// The returned guard must stay alive until exit to flush the file writer.
fn setup_logging(log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let file_appender = tracing_appender::rolling::never(dir, "replay.log");
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    if let Some(dir) = log_dir {
        tracing::info!("Log file: {}/replay.log", dir.display());
    }
    Ok(guard)
}
