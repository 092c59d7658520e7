//! Companion dialogue oracle.

use crate::state::{CompanionTrigger, HungerTier};

/// Selects companion dialogue lines.
pub trait CompanionOracle: Send + Sync {
    /// Talk id for a species reacting to `trigger` while in `hunger` tier.
    fn talk_id(&self, species: u32, trigger: CompanionTrigger, hunger: HungerTier) -> Option<u32>;

    /// Buckets a raw hunger counter.
    fn hunger_tier(&self, hunger: i32) -> HungerTier {
        HungerTier::from_hunger(hunger)
    }
}
