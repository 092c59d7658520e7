//! Helpers for constructing oracle bundles consumed by the runtime.
use std::path::PathBuf;

use anyhow::{Context, Result};
use statsync_content::ContentFactory;
use statsync_runtime::OracleBundle;
use tracing::info;

pub trait OracleFactory: Send + Sync {
    fn build(&self) -> Result<OracleBundle>;
}

/// Built-in message templates and an empty dialogue table.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinOracleFactory;

impl OracleFactory for BuiltinOracleFactory {
    fn build(&self) -> Result<OracleBundle> {
        Ok(OracleBundle::builtin())
    }
}

/// Oracle factory that loads content tables from data files.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── messages.ron
/// └── pet_talk.ron
/// ```
#[derive(Clone, Debug)]
pub struct ContentOracleFactory {
    data_dir: PathBuf,
}

impl ContentOracleFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}

impl OracleFactory for ContentOracleFactory {
    fn build(&self) -> Result<OracleBundle> {
        anyhow::ensure!(
            self.data_dir.is_dir(),
            "Content data directory not found: {}",
            self.data_dir.display()
        );

        let factory = ContentFactory::new(&self.data_dir);
        let messages = factory.load_messages()?;
        let pet_talk = factory.load_pet_talk()?;
        info!(
            target: "statsync::bootstrap",
            dir = %self.data_dir.display(),
            messages = messages.len(),
            talk_lines = pet_talk.lines.len(),
            "content tables loaded"
        );

        OracleBundle::from_catalogs(messages, &pet_talk).with_context(|| {
            format!("Invalid dialogue table in {}", self.data_dir.display())
        })
    }
}
