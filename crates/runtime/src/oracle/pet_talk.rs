use std::collections::HashMap;

use statsync_content::{ContentError, HungerThresholds, PetTalkCatalog};
use statsync_core::{CompanionOracle, CompanionTrigger, HungerTier};

/// Companion dialogue table indexed for constant-time lookup.
#[derive(Clone, Debug, Default)]
pub struct PetTalkTable {
    thresholds: HungerThresholds,
    lines: HashMap<(u32, CompanionTrigger, HungerTier), u32>,
}

impl PetTalkTable {
    pub fn from_catalog(catalog: &PetTalkCatalog) -> Result<Self, ContentError> {
        Ok(Self {
            thresholds: catalog.hunger_thresholds,
            lines: catalog.index()?,
        })
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl CompanionOracle for PetTalkTable {
    fn talk_id(&self, species: u32, trigger: CompanionTrigger, hunger: HungerTier) -> Option<u32> {
        self.lines.get(&(species, trigger, hunger)).copied()
    }

    fn hunger_tier(&self, hunger: i32) -> HungerTier {
        self.thresholds.tier(hunger)
    }
}

#[cfg(test)]
mod tests {
    use statsync_content::PetTalkLine;

    use super::*;

    #[test]
    fn uses_catalog_thresholds() {
        let catalog = PetTalkCatalog {
            hunger_thresholds: HungerThresholds([0, 10, 50, 60]),
            lines: vec![PetTalkLine {
                species: 1002,
                trigger: CompanionTrigger::LevelUp,
                hunger: HungerTier::Satisfied,
                talk_id: 33,
            }],
        };
        let table = PetTalkTable::from_catalog(&catalog).unwrap();

        assert_eq!(table.hunger_tier(55), HungerTier::Satisfied);
        assert_eq!(table.hunger_tier(61), HungerTier::Stuffed);
        assert_eq!(
            table.talk_id(1002, CompanionTrigger::LevelUp, HungerTier::Satisfied),
            Some(33)
        );
        assert_eq!(
            table.talk_id(1002, CompanionTrigger::Death, HungerTier::Satisfied),
            None
        );
    }
}
