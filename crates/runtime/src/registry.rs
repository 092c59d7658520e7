//! Event registry mapping packet kinds to handlers.

use std::collections::HashMap;

use statsync_core::{EventKind, InboundEvent, SyncConfig};
use tracing::{debug, trace};

use crate::context::SyncContext;
use crate::handlers;

/// Callback invoked for one packet kind.
pub type Handler = Box<dyn Fn(&InboundEvent, &mut SyncContext<'_>) + Send + Sync>;

/// Registry that routes each inbound event to the handler for its kind.
///
/// Stateless once built. Kinds without a handler are ignored: the protocol
/// keeps growing and unhandled kinds are expected.
#[derive(Default)]
pub struct EventRegistry {
    handlers: HashMap<EventKind, Handler>,
}

impl EventRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the default handler set.
    ///
    /// The vital recovery packet is version dependent: exactly one of
    /// `RECOVERY` / `RECOVERY2` is registered, chosen by comparing the active
    /// protocol version against [`SyncConfig::RECOVERY2_PACKETVER`]. Killer
    /// rankings are not registered.
    pub fn with_defaults(config: &SyncConfig) -> Self {
        let mut registry = Self::new();

        registry.register(EventKind::NotifyPlayerMove, handlers::on_player_move);
        for kind in EventKind::STATUS_FAMILY {
            registry.register(kind, handlers::on_status);
        }
        registry.register(EventKind::Status, handlers::on_status_block);
        registry.register(EventKind::StatusChangeAck, handlers::on_status_change_ack);
        registry.register(EventKind::AttackRange, handlers::on_attack_range);
        registry.register(EventKind::Broadcast, handlers::on_announce);
        registry.register(EventKind::Broadcast2, handlers::on_announce);
        registry.register(EventKind::UserCount, handlers::on_user_count);
        registry.register(EventKind::NotifyPlayerChat, handlers::on_player_chat);
        registry.register(
            EventKind::AttackFailureForDistance,
            handlers::on_attack_failure_for_distance,
        );
        registry.register(EventKind::Config, handlers::on_config);
        registry.register(EventKind::ActionFailure, handlers::on_action_failure);
        registry.register(EventKind::Msg, handlers::on_table_message);
        registry.register(EventKind::MsgColor, handlers::on_table_message);

        if config.uses_recovery2() {
            registry.register(EventKind::Recovery2, handlers::on_recovery);
        } else {
            registry.register(EventKind::Recovery, handlers::on_recovery);
        }

        registry.register(EventKind::BlacksmithRank, handlers::on_rank);
        registry.register(EventKind::AlchemistRank, handlers::on_rank);
        registry.register(EventKind::TaekwonRank, handlers::on_rank);
        registry.register(EventKind::UpdateMapInfo, handlers::on_update_map_info);

        debug!(
            target: "statsync::registry",
            handlers = registry.len(),
            packet_version = config.packet_version,
            recovery2 = config.uses_recovery2(),
            "event registry initialized"
        );
        registry
    }

    /// Registers `handler` for `kind`, replacing any previous handler.
    pub fn register<F>(&mut self, kind: EventKind, handler: F)
    where
        F: Fn(&InboundEvent, &mut SyncContext<'_>) + Send + Sync + 'static,
    {
        if self.handlers.insert(kind, Box::new(handler)).is_some() {
            debug!(target: "statsync::registry", %kind, "handler replaced");
        }
    }

    /// Removes the handler for `kind`, if any.
    pub fn unregister(&mut self, kind: EventKind) -> bool {
        self.handlers.remove(&kind).is_some()
    }

    /// Invokes the handler registered for the event's kind.
    ///
    /// Returns false, without error, when no handler is registered.
    pub fn dispatch(&self, event: &InboundEvent, ctx: &mut SyncContext<'_>) -> bool {
        let kind = event.kind();
        match self.handlers.get(&kind) {
            Some(handler) => {
                trace!(target: "statsync::registry", %kind, "dispatching event");
                handler(event, ctx);
                true
            }
            None => {
                debug!(target: "statsync::registry", %kind, "no handler registered, event ignored");
                false
            }
        }
    }

    pub fn contains(&self, kind: EventKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    /// Returns the number of registered kinds.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Returns an iterator over registered kinds (for debugging).
    pub fn kinds(&self) -> impl Iterator<Item = EventKind> + '_ {
        self.handlers.keys().copied()
    }
}

impl std::fmt::Debug for EventRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut kinds: Vec<_> = self.kinds().collect();
        kinds.sort();
        f.debug_struct("EventRegistry").field("kinds", &kinds).finish()
    }
}
