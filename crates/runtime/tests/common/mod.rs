#![allow(dead_code)]

use std::sync::Arc;

use statsync_content::{MessageCatalog, PetTalkCatalog, PetTalkLine};
use statsync_core::{
    AccountId, CompanionState, CompanionTrigger, Effect, HungerTier, InboundEvent,
    OutboundPacket, SessionState, StatusEvent, StatusProperty, SyncConfig,
};
use statsync_runtime::{EffectLog, ManualClock, OracleBundle, SyncEngine};

pub const PORING: u32 = 1002;
pub const DANGER_TALK: u32 = 11;
pub const DEATH_TALK: u32 = 12;
pub const LEVEL_UP_TALK: u32 = 13;

pub fn oracles() -> OracleBundle {
    let lines = [
        (CompanionTrigger::Danger, DANGER_TALK),
        (CompanionTrigger::Death, DEATH_TALK),
        (CompanionTrigger::LevelUp, LEVEL_UP_TALK),
    ]
    .into_iter()
    .map(|(trigger, talk_id)| PetTalkLine {
        species: PORING,
        trigger,
        hunger: HungerTier::Neutral,
        talk_id,
    })
    .collect();
    let pet_talk = PetTalkCatalog {
        lines,
        ..Default::default()
    };
    OracleBundle::from_catalogs(MessageCatalog::builtin(), &pet_talk)
        .expect("test dialogue table is valid")
}

pub fn session() -> SessionState {
    let mut session = SessionState::new(AccountId(2_000_001));
    session.companion = CompanionState::new(PORING, 950, 50);
    session
}

/// Engine plus session driven by a manual clock.
pub struct Harness {
    pub engine: SyncEngine,
    pub session: SessionState,
    pub clock: Arc<ManualClock>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(SyncConfig::default())
    }

    pub fn with_config(config: SyncConfig) -> Self {
        let clock = Arc::new(ManualClock::new());
        let engine = SyncEngine::new(config, oracles()).with_clock(clock.clone());
        Self {
            engine,
            session: session(),
            clock,
        }
    }

    /// Dispatches one event and returns what it emitted.
    pub fn apply(&mut self, event: impl Into<InboundEvent>) -> Vec<Effect> {
        let mut log = EffectLog::new();
        self.engine
            .dispatch(&event.into(), &mut self.session, &mut log);
        log.drain()
    }
}

pub fn status(property: StatusProperty, amount: i64) -> InboundEvent {
    StatusEvent::LongParChange {
        var_id: property as i32,
        amount,
    }
    .into()
}

pub fn pet_talks(effects: &[Effect]) -> Vec<u32> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::Outbound(OutboundPacket::PetAct { data }) => Some(*data),
            _ => None,
        })
        .collect()
}
