//! Engine configuration loader.

use std::path::Path;

use anyhow::Context;
use statsync_core::SyncConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for engine configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file containing a [`SyncConfig`].
    pub fn load(path: &Path) -> LoadResult<SyncConfig> {
        let content = read_file(path)?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config TOML {}", path.display()))
    }
}
