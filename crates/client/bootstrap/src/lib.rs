//! Shared bootstrap utilities for client front-ends.
//!
//! Provides configuration loading, oracle assembly, and runtime setup that can
//! be reused by the replay tool or any other host embedding the engine.
pub mod builder;
pub mod config;
pub mod oracles;

pub use builder::{RuntimeBuilder, RuntimeSetup};
pub use config::{ChannelConfig, ClientConfig, ConfigError, SyncOverrides};
pub use oracles::{BuiltinOracleFactory, ContentOracleFactory, OracleFactory};
