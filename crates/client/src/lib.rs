//! Event-script replay for the status synchronization runtime.
//!
//! A script is a JSON-lines file. Each non-blank line that does not start
//! with `#` is one [`ScriptStep`]:
//!
//! ```text
//! {"session": {"in_party": true, "companion": {"species": 1002, "friendliness": 950, "hunger": 50}}}
//! {"event": {"status": {"long_par_change": {"var_id": 6, "amount": 200}}}}
//! {"advance_ms": 11000}
//! ```
//!
//! Time only moves on `advance_ms`, so companion cooldowns replay the same
//! way on every run.
mod script;

pub use script::{CompanionPatch, ScriptStep, SessionPatch, parse_script};

use std::time::Duration;

use anyhow::{Context, Result};
use statsync_runtime::{ManualClock, SyncHandle};
use tracing::{debug, warn};

/// Counters reported after a replay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplayStats {
    pub events: usize,
    pub unhandled: usize,
    pub session_updates: usize,
}

/// Feeds `steps` through the runtime one at a time, waiting for each event
/// to be applied before moving on.
pub async fn replay(
    handle: &SyncHandle,
    clock: &ManualClock,
    steps: Vec<ScriptStep>,
) -> Result<ReplayStats> {
    let mut stats = ReplayStats::default();

    for (index, step) in steps.into_iter().enumerate() {
        match step {
            ScriptStep::Event(event) => {
                let kind = event.kind();
                let handled = handle
                    .dispatch(event)
                    .await
                    .with_context(|| format!("Failed to dispatch step {}", index + 1))?;
                stats.events += 1;
                if !handled {
                    stats.unhandled += 1;
                    warn!(target: "statsync::replay", step = index + 1, %kind, "no handler registered");
                }
            }
            ScriptStep::AdvanceMs(ms) => {
                debug!(target: "statsync::replay", ms, "advancing clock");
                clock.advance(Duration::from_millis(ms));
            }
            ScriptStep::Session(patch) => {
                handle
                    .update_session(move |session| patch.apply(session))
                    .await
                    .with_context(|| format!("Failed to update session at step {}", index + 1))?;
                stats.session_updates += 1;
            }
        }
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;

    use statsync_core::{Effect, OutboundPacket};
    use statsync_runtime::{OracleBundle, SyncRuntime};
    use tokio::sync::mpsc;

    use super::*;

    fn sample_script() -> String {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scripts/session.jsonl");
        std::fs::read_to_string(path).unwrap()
    }

    #[tokio::test]
    async fn sample_script_replays() {
        let steps = parse_script(&sample_script()).unwrap();
        let clock = Arc::new(ManualClock::new());
        let (tap_tx, mut tap_rx) = mpsc::unbounded_channel();
        let runtime = SyncRuntime::builder()
            .oracles(OracleBundle::builtin())
            .clock(clock.clone())
            .tap(tap_tx)
            .build()
            .await
            .unwrap();

        let stats = replay(&runtime.handle(), &clock, steps).await.unwrap();
        let session = runtime.shutdown().await.unwrap();

        assert_eq!(stats.unhandled, 0);
        assert!(stats.events > 0);
        assert!(session.in_party);
        assert_eq!(session.player.life.hp.max, 200);

        let mut talks = 0;
        while let Ok(effect) = tap_rx.try_recv() {
            if matches!(effect, Effect::Outbound(OutboundPacket::PetAct { .. })) {
                talks += 1;
            }
        }
        assert!(talks >= 2);
    }
}
