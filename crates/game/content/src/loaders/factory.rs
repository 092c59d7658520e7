//! Content factory for loading every table from a data directory.

use std::path::{Path, PathBuf};

use statsync_core::SyncConfig;

use crate::loaders::{ConfigLoader, LoadResult, MessageLoader, PetTalkLoader};
use crate::tables::{MessageCatalog, PetTalkCatalog};

/// Content factory that loads tables from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── messages.ron
/// └── pet_talk.ron
/// ```
///
/// Every file is optional; a missing file yields the built-in table.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "config.toml";
    pub const MESSAGES_FILE: &'static str = "messages.ron";
    pub const PET_TALK_FILE: &'static str = "pet_talk.ron";

    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load engine configuration from `config.toml`, if present.
    pub fn load_config(&self) -> LoadResult<Option<SyncConfig>> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if !path.exists() {
            return Ok(None);
        }
        ConfigLoader::load(&path).map(Some)
    }

    /// Load the message table, layered over the built-in templates.
    pub fn load_messages(&self) -> LoadResult<MessageCatalog> {
        let mut catalog = MessageCatalog::builtin();
        let path = self.data_dir.join(Self::MESSAGES_FILE);
        if path.exists() {
            catalog.merge(MessageLoader::load(&path)?);
        }
        Ok(catalog)
    }

    /// Load the companion dialogue table from `pet_talk.ron`.
    pub fn load_pet_talk(&self) -> LoadResult<PetTalkCatalog> {
        let path = self.data_dir.join(Self::PET_TALK_FILE);
        if !path.exists() {
            return Ok(PetTalkCatalog::default());
        }
        PetTalkLoader::load(&path)
    }
}
