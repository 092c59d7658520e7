//! Read-only collaborator tables and their loaders.
//!
//! This crate houses the static content the synchronization engine consults
//! while dispatching:
//! - Message table (localized chat templates, keyed by id)
//! - Companion dialogue table (talk ids keyed by species, trigger and hunger)
//! - Engine configuration (data-driven via TOML)
//!
//! Tables are consumed by runtime oracles and never appear in session state.
//! Built-in tables cover every message id the engine emits, so a client can
//! run without a data directory.

pub mod error;
pub mod tables;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use error::ContentError;
pub use tables::{HungerThresholds, MessageCatalog, PetTalkCatalog, PetTalkLine};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, MessageLoader, PetTalkLoader};
