//! Effect sinks and topic-based fan-out.
//!
//! Handlers emit [`Effect`](statsync_core::Effect)s into an [`EffectSink`].
//! [`EffectLog`] records them in order (tests, replay tooling) and
//! [`EventBus`] routes them to per-topic broadcast channels for live
//! collaborators.
mod bus;
mod sink;

pub use bus::{EventBus, Topic};
pub use sink::{EffectLog, EffectSink};
