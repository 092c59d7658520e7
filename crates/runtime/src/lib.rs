//! Runtime orchestration for the inbound status synchronization engine.
//!
//! This crate wires the pure model from `statsync-core` into a dispatching
//! engine: an [`EventRegistry`] routes each decoded [`InboundEvent`] to its
//! handler, handlers mutate the caller's [`SessionState`] through a
//! [`SyncContext`], and every observable side effect is emitted through an
//! [`EffectSink`].
//!
//! Modules are organized by responsibility:
//! - [`registry`] and [`context`] form the dispatch core
//! - [`handlers`] holds the per-event handlers and the status mutation table
//! - [`events`] provides effect sinks and the topic-based event bus
//! - [`oracle`] adapts content tables to the core oracle traits
//! - [`runtime`] hosts the builder and the single-consumer worker behind [`SyncHandle`]
//!
//! [`InboundEvent`]: statsync_core::InboundEvent
//! [`SessionState`]: statsync_core::SessionState
pub mod api;
pub mod clock;
pub mod context;
pub mod engine;
pub mod events;
pub mod handlers;
pub mod oracle;
pub mod registry;
pub mod runtime;

mod workers;

pub use api::{Result, RuntimeError, SyncHandle};
pub use clock::{Clock, ManualClock, SystemClock};
pub use context::SyncContext;
pub use engine::SyncEngine;
pub use events::{EffectLog, EffectSink, EventBus, Topic};
pub use oracle::{MessageTable, OracleBundle, PetTalkTable};
pub use registry::{EventRegistry, Handler};
pub use runtime::{RuntimeConfig, SyncRuntime, SyncRuntimeBuilder};
