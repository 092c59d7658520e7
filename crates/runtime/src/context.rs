//! Per-dispatch context handed to every handler.

use std::time::Instant;

use statsync_core::{Effect, PlayerState, SessionState, SyncConfig, SyncEnv};

use crate::clock::Clock;
use crate::events::EffectSink;

/// Capability-scoped view of everything a handler may touch.
///
/// The session is borrowed from the host for exactly one dispatch; effects go
/// to the sink in the order handlers emit them.
pub struct SyncContext<'a> {
    session: &'a mut SessionState,
    env: SyncEnv<'a>,
    config: &'a SyncConfig,
    sink: &'a mut dyn EffectSink,
    clock: &'a dyn Clock,
}

impl<'a> SyncContext<'a> {
    pub fn new(
        session: &'a mut SessionState,
        env: SyncEnv<'a>,
        config: &'a SyncConfig,
        sink: &'a mut dyn EffectSink,
        clock: &'a dyn Clock,
    ) -> Self {
        Self {
            session,
            env,
            config,
            sink,
            clock,
        }
    }

    pub fn session(&self) -> &SessionState {
        self.session
    }

    pub fn session_mut(&mut self) -> &mut SessionState {
        self.session
    }

    pub fn player(&self) -> &PlayerState {
        &self.session.player
    }

    pub fn player_mut(&mut self) -> &mut PlayerState {
        &mut self.session.player
    }

    pub fn env(&self) -> SyncEnv<'a> {
        self.env
    }

    pub fn config(&self) -> &'a SyncConfig {
        self.config
    }

    /// Message-table lookup with placeholder fallback.
    pub fn message(&self, id: u32) -> String {
        self.env.messages().message(id)
    }

    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    pub fn emit(&mut self, effect: Effect) {
        self.sink.emit(effect);
    }
}

impl std::fmt::Debug for SyncContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncContext")
            .field("account_id", &self.session.account_id)
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}
