use std::collections::HashMap;

use statsync_core::{CompanionTrigger, HungerTier};

use crate::error::ContentError;

/// Upper bounds (inclusive) of the first four hunger tiers.
///
/// Anything above the last bound is [`HungerTier::Stuffed`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct HungerThresholds(pub [i32; 4]);

impl HungerThresholds {
    pub const fn tier(&self, hunger: i32) -> HungerTier {
        let [very_hungry, hungry, neutral, satisfied] = self.0;
        if hunger <= very_hungry {
            HungerTier::VeryHungry
        } else if hunger <= hungry {
            HungerTier::Hungry
        } else if hunger <= neutral {
            HungerTier::Neutral
        } else if hunger <= satisfied {
            HungerTier::Satisfied
        } else {
            HungerTier::Stuffed
        }
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.0.windows(2).all(|pair| pair[0] < pair[1]) {
            Ok(())
        } else {
            Err(ContentError::UnorderedHungerThresholds(self.0))
        }
    }
}

impl Default for HungerThresholds {
    fn default() -> Self {
        Self([10, 25, 75, 90])
    }
}

/// One dialogue line a companion species can perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PetTalkLine {
    pub species: u32,
    pub trigger: CompanionTrigger,
    pub hunger: HungerTier,
    pub talk_id: u32,
}

/// Companion dialogue table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PetTalkCatalog {
    pub hunger_thresholds: HungerThresholds,
    pub lines: Vec<PetTalkLine>,
}

impl PetTalkCatalog {
    /// Indexes the lines by `(species, trigger, hunger)`.
    ///
    /// Fails on invalid thresholds or on two lines sharing the same key.
    pub fn index(
        &self,
    ) -> Result<HashMap<(u32, CompanionTrigger, HungerTier), u32>, ContentError> {
        self.hunger_thresholds.validate()?;

        let mut index = HashMap::with_capacity(self.lines.len());
        for line in &self.lines {
            let key = (line.species, line.trigger, line.hunger);
            if index.insert(key, line.talk_id).is_some() {
                return Err(ContentError::DuplicateTalkLine {
                    species: line.species,
                    trigger: line.trigger.to_string(),
                    hunger: line.hunger.to_string(),
                });
            }
        }
        Ok(index)
    }
}
