//! Synchronous dispatch façade.

use std::sync::Arc;

use statsync_core::{InboundEvent, SessionState, SyncConfig};

use crate::clock::{Clock, SystemClock};
use crate::context::SyncContext;
use crate::events::EffectSink;
use crate::oracle::OracleBundle;
use crate::registry::EventRegistry;

/// Registry, configuration, oracles and clock bundled for dispatch.
///
/// The engine holds no session state; each call borrows the host's
/// [`SessionState`] for the duration of one event.
pub struct SyncEngine {
    config: SyncConfig,
    registry: EventRegistry,
    oracles: OracleBundle,
    clock: Arc<dyn Clock>,
}

impl SyncEngine {
    /// Builds an engine with the default handler set for `config`.
    pub fn new(config: SyncConfig, oracles: OracleBundle) -> Self {
        let registry = EventRegistry::with_defaults(&config);
        Self {
            config,
            registry,
            oracles,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    pub fn registry(&self) -> &EventRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut EventRegistry {
        &mut self.registry
    }

    pub fn oracles(&self) -> &OracleBundle {
        &self.oracles
    }

    /// Fully processes one event before returning.
    ///
    /// Returns false when no handler is registered for the event's kind.
    pub fn dispatch(
        &self,
        event: &InboundEvent,
        session: &mut SessionState,
        sink: &mut dyn EffectSink,
    ) -> bool {
        let mut ctx = SyncContext::new(
            session,
            self.oracles.as_env(),
            &self.config,
            sink,
            self.clock.as_ref(),
        );
        self.registry.dispatch(event, &mut ctx)
    }
}

impl std::fmt::Debug for SyncEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncEngine")
            .field("config", &self.config)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
