//! Companion dialogue table loader.

use std::path::Path;

use anyhow::Context;

use crate::loaders::{LoadResult, read_file};
use crate::tables::PetTalkCatalog;

/// Loader for the companion dialogue table from RON files.
pub struct PetTalkLoader;

impl PetTalkLoader {
    /// Load and validate a dialogue catalog.
    pub fn load(path: &Path) -> LoadResult<PetTalkCatalog> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<PetTalkCatalog> {
        let catalog: PetTalkCatalog =
            ron::from_str(content).context("Failed to parse pet talk RON")?;
        catalog.index()?;
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use statsync_core::{CompanionTrigger, HungerTier};

    use super::*;
    use crate::tables::HungerThresholds;

    const TABLE: &str = r#"(
        hunger_thresholds: (5, 20, 70, 95),
        lines: [
            (species: 1002, trigger: danger, hunger: neutral, talk_id: 1),
            (species: 1002, trigger: level_up, hunger: stuffed, talk_id: 2),
        ],
    )"#;

    #[test]
    fn parses_thresholds_and_lines() {
        let catalog = PetTalkLoader::parse(TABLE).unwrap();
        assert_eq!(catalog.hunger_thresholds, HungerThresholds([5, 20, 70, 95]));
        assert_eq!(catalog.lines.len(), 2);
        assert_eq!(catalog.lines[1].trigger, CompanionTrigger::LevelUp);
        assert_eq!(catalog.lines[1].hunger, HungerTier::Stuffed);
    }

    #[test]
    fn thresholds_default_when_omitted() {
        let catalog = PetTalkLoader::parse("(lines: [])").unwrap();
        assert_eq!(catalog.hunger_thresholds, HungerThresholds::default());
    }

    #[test]
    fn validation_errors_surface() {
        let err = PetTalkLoader::parse("(hunger_thresholds: (90, 75, 25, 10))").unwrap_err();
        assert!(err.to_string().contains("strictly increasing"));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pet_talk.ron");
        std::fs::write(&path, TABLE).unwrap();
        assert_eq!(PetTalkLoader::load(&path).unwrap().lines.len(), 2);
    }
}
