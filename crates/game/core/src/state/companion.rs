use std::time::Instant;

/// Per-session state of the player's companion (pet).
///
/// Only the companion reaction policy writes to this.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompanionState {
    /// Intimacy on the server's 0..=1000 scale.
    pub friendliness: i32,
    /// Raw hunger counter (0..=100) as last reported by the server.
    pub hunger: i32,
    /// Companion job / species identifier used to pick dialogue lines.
    pub species: u32,
    /// When the companion last spoke; `None` if it never has this session.
    pub last_talk: Option<Instant>,
}

impl CompanionState {
    pub fn new(species: u32, friendliness: i32, hunger: i32) -> Self {
        Self {
            friendliness,
            hunger,
            species,
            last_talk: None,
        }
    }

    pub fn hunger_tier(&self) -> HungerTier {
        HungerTier::from_hunger(self.hunger)
    }
}

/// Transition that may make the companion talk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum CompanionTrigger {
    /// HP fell to the danger threshold.
    Danger,
    /// HP fell to 1 or below.
    Death,
    /// Base level changed.
    LevelUp,
}

/// Hunger bucket used when selecting dialogue lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum HungerTier {
    VeryHungry,
    Hungry,
    Neutral,
    Satisfied,
    Stuffed,
}

impl HungerTier {
    /// Buckets a raw hunger counter.
    ///
    /// - `..=10`: very hungry
    /// - `11..=25`: hungry
    /// - `26..=75`: neutral
    /// - `76..=90`: satisfied
    /// - `91..`: stuffed
    pub const fn from_hunger(hunger: i32) -> Self {
        match hunger {
            i32::MIN..=10 => Self::VeryHungry,
            11..=25 => Self::Hungry,
            26..=75 => Self::Neutral,
            76..=90 => Self::Satisfied,
            _ => Self::Stuffed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hunger_tier_boundaries() {
        assert_eq!(HungerTier::from_hunger(0), HungerTier::VeryHungry);
        assert_eq!(HungerTier::from_hunger(10), HungerTier::VeryHungry);
        assert_eq!(HungerTier::from_hunger(11), HungerTier::Hungry);
        assert_eq!(HungerTier::from_hunger(25), HungerTier::Hungry);
        assert_eq!(HungerTier::from_hunger(26), HungerTier::Neutral);
        assert_eq!(HungerTier::from_hunger(75), HungerTier::Neutral);
        assert_eq!(HungerTier::from_hunger(76), HungerTier::Satisfied);
        assert_eq!(HungerTier::from_hunger(90), HungerTier::Satisfied);
        assert_eq!(HungerTier::from_hunger(91), HungerTier::Stuffed);
        assert_eq!(HungerTier::from_hunger(100), HungerTier::Stuffed);
    }
}
