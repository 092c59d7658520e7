//! Companion dialogue reactions.

use std::time::Instant;

use statsync_core::{CompanionConfig, CompanionState, CompanionTrigger, Effect, OutboundPacket};
use tracing::{debug, trace};

use crate::context::SyncContext;

/// Cooldown-gated rule deciding when the companion talks.
///
/// Friendliness must exceed the configured threshold for every trigger.
/// Only [`CompanionTrigger::Danger`] additionally waits for the talk cooldown,
/// yet every successful reaction resets the shared `last_talk` timestamp.
pub struct CompanionPolicy;

impl CompanionPolicy {
    /// Pure gate: would `trigger` make the companion talk at `now`?
    pub fn should_react(
        companion: &CompanionState,
        config: &CompanionConfig,
        trigger: CompanionTrigger,
        now: Instant,
    ) -> bool {
        if companion.friendliness <= config.friendliness_threshold {
            return false;
        }
        match trigger {
            CompanionTrigger::Danger => companion.last_talk.is_none_or(|last| {
                now.saturating_duration_since(last) > config.talk_cooldown
            }),
            CompanionTrigger::Death | CompanionTrigger::LevelUp => true,
        }
    }

    /// Emits a `PET_ACT` packet for `trigger` when the gate allows it.
    ///
    /// Returns whether the companion talked.
    pub fn maybe_react(ctx: &mut SyncContext<'_>, trigger: CompanionTrigger) -> bool {
        let now = ctx.now();
        let config = &ctx.config().companion;
        if !Self::should_react(&ctx.session().companion, config, trigger, now) {
            trace!(target: "statsync::companion", %trigger, "companion stays silent");
            return false;
        }

        let companion = ctx.env().companion();
        let state = &ctx.session().companion;
        let hunger = companion.hunger_tier(state.hunger);
        let species = state.species;
        let data = companion
            .talk_id(species, trigger, hunger)
            .unwrap_or_else(|| {
                debug!(
                    target: "statsync::companion",
                    species,
                    %trigger,
                    %hunger,
                    "no dialogue line for companion, sending talk id 0"
                );
                0
            });

        ctx.emit(Effect::Outbound(OutboundPacket::PetAct { data }));
        ctx.session_mut().companion.last_talk = Some(now);
        debug!(target: "statsync::companion", %trigger, data, "companion reacted");
        true
    }
}
