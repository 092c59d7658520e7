//! Message table loader.

use std::path::Path;

use anyhow::Context;

use crate::loaders::{LoadResult, read_file};
use crate::tables::MessageCatalog;

/// Loader for the message table from RON files.
pub struct MessageLoader;

impl MessageLoader {
    /// Load a message catalog from a RON file of the form
    /// `(messages: { 178: "...", 2383: "Rank" })`.
    pub fn load(path: &Path) -> LoadResult<MessageCatalog> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<MessageCatalog> {
        ron::from_str(content).context("Failed to parse message table RON")
    }
}
