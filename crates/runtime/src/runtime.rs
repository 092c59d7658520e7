//! Runtime builder and lifecycle.

use std::sync::Arc;

use statsync_core::{SessionState, SyncConfig};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::api::{Result, RuntimeError, SyncHandle};
use crate::clock::Clock;
use crate::engine::SyncEngine;
use crate::events::{EffectSink, EventBus};
use crate::oracle::OracleBundle;
use crate::registry::EventRegistry;
use crate::workers::SyncWorker;

/// Runtime configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub sync: SyncConfig,
    /// Capacity of the inbound event queue.
    pub event_buffer_size: usize,
    /// Capacity of each event bus topic.
    pub bus_capacity: usize,
}

impl RuntimeConfig {
    pub const DEFAULT_EVENT_BUFFER: usize = 64;
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            sync: SyncConfig::default(),
            event_buffer_size: Self::DEFAULT_EVENT_BUFFER,
            bus_capacity: EventBus::DEFAULT_CAPACITY,
        }
    }
}

/// Main runtime that owns the sync worker.
///
/// [`SyncHandle`] provides a cloneable façade for clients.
pub struct SyncRuntime {
    handle: SyncHandle,
    worker: JoinHandle<SessionState>,
}

impl SyncRuntime {
    pub fn builder() -> SyncRuntimeBuilder {
        SyncRuntimeBuilder::new()
    }

    pub fn handle(&self) -> SyncHandle {
        self.handle.clone()
    }

    /// Stops the worker after every queued event and returns the final session.
    pub async fn shutdown(self) -> Result<SessionState> {
        self.handle.shutdown().await?;
        self.worker.await.map_err(RuntimeError::WorkerJoin)
    }
}

/// Customizes the registry before the worker starts.
pub type RegistryHook = Box<dyn FnOnce(&mut EventRegistry) + Send>;

/// Builder for [`SyncRuntime`]
#[derive(Default)]
pub struct SyncRuntimeBuilder {
    config: RuntimeConfig,
    oracles: Option<OracleBundle>,
    session: SessionState,
    clock: Option<Arc<dyn Clock>>,
    sink: Option<Box<dyn EffectSink>>,
    registry_hooks: Vec<RegistryHook>,
}

impl SyncRuntimeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn oracles(mut self, oracles: OracleBundle) -> Self {
        self.oracles = Some(oracles);
        self
    }

    /// Initial session; defaults to an empty session for account 0.
    pub fn session(mut self, session: SessionState) -> Self {
        self.session = session;
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Extra sink fed in addition to the event bus.
    pub fn tap(mut self, sink: impl EffectSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    pub fn configure_registry<F>(mut self, hook: F) -> Self
    where
        F: FnOnce(&mut EventRegistry) + Send + 'static,
    {
        self.registry_hooks.push(Box::new(hook));
        self
    }

    /// Spawns the worker on the current tokio runtime.
    pub async fn build(self) -> Result<SyncRuntime> {
        let oracles = self.oracles.ok_or(RuntimeError::MissingOracles)?;

        let mut engine = SyncEngine::new(self.config.sync.clone(), oracles);
        if let Some(clock) = self.clock {
            engine = engine.with_clock(clock);
        }
        for hook in self.registry_hooks {
            hook(engine.registry_mut());
        }

        let event_bus = EventBus::with_capacity(self.config.bus_capacity);
        let sink: Box<dyn EffectSink> = match self.sink {
            Some(tap) => Box::new(Tee {
                bus: event_bus.clone(),
                tap,
            }),
            None => Box::new(event_bus.clone()),
        };

        let (command_tx, command_rx) = mpsc::channel(self.config.event_buffer_size.max(1));
        let worker = SyncWorker::new(engine, self.session, sink, command_rx);
        let worker = tokio::spawn(worker.run());

        Ok(SyncRuntime {
            handle: SyncHandle::new(command_tx, event_bus),
            worker,
        })
    }
}

/// Publishes to the bus and forwards to a tap sink.
struct Tee {
    bus: EventBus,
    tap: Box<dyn EffectSink>,
}

impl EffectSink for Tee {
    fn emit(&mut self, effect: statsync_core::Effect) {
        self.tap.emit(effect.clone());
        self.bus.publish(effect);
    }
}
