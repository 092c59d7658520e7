//! Session-scoped state mutated by the status synchronization engine.
//!
//! [`SessionState`] is owned by the hosting application and handed to the
//! engine as `&mut` for the duration of one dispatch. UI and party collaborators
//! only ever see the snapshots carried inside emitted effects.
mod companion;
mod life;
mod player;

pub use companion::{CompanionState, CompanionTrigger, HungerTier};
pub use life::{Life, LifeSnapshot, Meter, VitalKind};
pub use player::{CombatStats, PlayerState, Progression, StatPoints, TraitStats};

/// Identifier the server assigns to the logged-in account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AccountId(pub u32);

/// Everything this engine writes, bundled as one context object.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    /// Account of the locally controlled actor (used for party broadcasts).
    pub account_id: AccountId,
    /// True while the player belongs to a party.
    pub in_party: bool,
    /// True while a chat room window is open; own chat goes there instead of the log.
    pub chat_room_open: bool,
    pub player: PlayerState,
    pub companion: CompanionState,
}

impl SessionState {
    pub fn new(account_id: AccountId) -> Self {
        Self {
            account_id,
            ..Self::default()
        }
    }
}
