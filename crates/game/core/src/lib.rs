//! Data model and pure logic of the inbound status synchronization engine.
//!
//! `statsync-core` defines the decoded inbound events, the session state they
//! mutate, the effects emitted for UI and network collaborators, and the pure
//! formatting helpers. Dispatch and handler wiring live in `statsync-runtime`;
//! this crate never performs I/O.
pub mod config;
pub mod effect;
pub mod env;
pub mod error;
pub mod event;
pub mod format;
pub mod state;
pub mod status;

pub use config::{CompanionConfig, SyncConfig};
pub use effect::{
    AnnounceDisplay, ChatFilter, ChatKind, ChatLine, Effect, GaugeKind, InfoKey, OutboundPacket,
    StatKey,
};
pub use env::{CompanionOracle, MessageOracle, SyncEnv};
pub use error::CoreError;
pub use event::{
    ActionFailure, AnnounceEvent, AttackFailure, AttackRange, CellPos, ConfigUpdate, EventKind,
    InboundEvent, MapCellUpdate, PlayerChat, PlayerMove, RankCategory, RankEvent, Recovery,
    StatusBlock, StatusChangeAck, StatusEvent, TableMessage, UserCount,
};
pub use format::{format_announce, format_rank, rgb_from_packed};
pub use state::{
    AccountId, CompanionState, CompanionTrigger, HungerTier, Life, LifeSnapshot, Meter,
    PlayerState, SessionState, VitalKind,
};
pub use status::{NormalizedStatus, PrimaryStat, StatusCode, StatusFields, StatusProperty};
