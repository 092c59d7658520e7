//! Content loaders for reading tables from files.
//!
//! Message and dialogue tables are RON; engine configuration is TOML.

pub mod config;
pub mod factory;
pub mod messages;
pub mod pet_talk;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use messages::MessageLoader;
pub use pet_talk::PetTalkLoader;

use std::path::Path;

use anyhow::Context;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file {}", path.display()))
}
