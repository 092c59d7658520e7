//! Client configuration structures and environment loading.
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use statsync_core::SyncConfig;
use statsync_runtime::RuntimeConfig;

/// Invalid environment value.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}

/// Configuration required to bootstrap a client runtime.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
    pub channels: ChannelConfig,
    /// Applied on top of `config.toml` (or the defaults).
    pub overrides: SyncOverrides,
    /// Directory holding `config.toml`, `messages.ron` and `pet_talk.ron`.
    /// `None` runs on the built-in tables.
    pub content_dir: Option<PathBuf>,
}

impl ClientConfig {
    pub const PACKETVER: &'static str = "STATSYNC_PACKETVER";
    pub const PET_FRIENDLY_THRESHOLD: &'static str = "STATSYNC_PET_FRIENDLY_THRESHOLD";
    pub const PET_TALK_COOLDOWN_MS: &'static str = "STATSYNC_PET_TALK_COOLDOWN_MS";
    pub const PET_DANGER_PERCENT: &'static str = "STATSYNC_PET_DANGER_PERCENT";
    pub const EVENT_BUFFER: &'static str = "STATSYNC_EVENT_BUFFER";
    pub const BUS_CAPACITY: &'static str = "STATSYNC_BUS_CAPACITY";
    pub const CONTENT_DIR: &'static str = "STATSYNC_CONTENT_DIR";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `STATSYNC_PACKETVER` - Active protocol version (default: 20141022)
    /// - `STATSYNC_PET_FRIENDLY_THRESHOLD` - Friendliness needed to talk (default: 900)
    /// - `STATSYNC_PET_TALK_COOLDOWN_MS` - Danger reaction cooldown (default: 10000)
    /// - `STATSYNC_PET_DANGER_PERCENT` - HP percentage counted as danger (default: 25)
    /// - `STATSYNC_EVENT_BUFFER` - Inbound queue size (default: 64)
    /// - `STATSYNC_BUS_CAPACITY` - Per-topic broadcast capacity (default: 128)
    /// - `STATSYNC_CONTENT_DIR` - Content data directory (default: built-in tables)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(capacity) = read_var::<usize>(&lookup, Self::EVENT_BUFFER)? {
            config.channels.event_buffer = capacity.max(1);
        }
        if let Some(capacity) = read_var::<usize>(&lookup, Self::BUS_CAPACITY)? {
            config.channels.bus_capacity = capacity.max(1);
        }

        config.overrides = SyncOverrides {
            packet_version: read_var(&lookup, Self::PACKETVER)?,
            friendliness_threshold: read_var(&lookup, Self::PET_FRIENDLY_THRESHOLD)?,
            talk_cooldown: read_var::<u64>(&lookup, Self::PET_TALK_COOLDOWN_MS)?
                .map(Duration::from_millis),
            danger_percent: read_var(&lookup, Self::PET_DANGER_PERCENT)?,
        };

        config.content_dir = lookup(Self::CONTENT_DIR)
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        Ok(config)
    }

    /// Runtime configuration for the given engine settings.
    pub fn runtime_config(&self, sync: SyncConfig) -> RuntimeConfig {
        RuntimeConfig {
            sync,
            event_buffer_size: self.channels.event_buffer,
            bus_capacity: self.channels.bus_capacity,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChannelConfig {
    pub event_buffer: usize,
    pub bus_capacity: usize,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        let runtime = RuntimeConfig::default();
        Self {
            event_buffer: runtime.event_buffer_size,
            bus_capacity: runtime.bus_capacity,
        }
    }
}

/// Engine settings taken from the environment. `None` keeps the file value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SyncOverrides {
    pub packet_version: Option<u32>,
    pub friendliness_threshold: Option<i32>,
    pub talk_cooldown: Option<Duration>,
    pub danger_percent: Option<i64>,
}

impl SyncOverrides {
    pub fn apply(&self, config: &mut SyncConfig) {
        if let Some(version) = self.packet_version {
            config.packet_version = version;
        }
        let companion = &mut config.companion;
        if let Some(threshold) = self.friendliness_threshold {
            companion.friendliness_threshold = threshold;
        }
        if let Some(cooldown) = self.talk_cooldown {
            companion.talk_cooldown = cooldown;
        }
        if let Some(percent) = self.danger_percent {
            companion.danger_percent = percent;
        }
    }
}

fn read_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
{
    let Some(value) = lookup(key) else {
        return Ok(None);
    };
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::InvalidValue { key, value })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.channels.event_buffer, 64);
        assert_eq!(config.channels.bus_capacity, 128);
    }

    #[test]
    fn overrides_replace_file_values() {
        let config = ClientConfig::from_lookup(lookup(&[
            (ClientConfig::PACKETVER, "20130807"),
            (ClientConfig::PET_TALK_COOLDOWN_MS, "2500"),
            (ClientConfig::PET_DANGER_PERCENT, " 40 "),
            (ClientConfig::EVENT_BUFFER, "0"),
            (ClientConfig::CONTENT_DIR, "/srv/content"),
        ]))
        .unwrap();

        let mut sync = SyncConfig::default();
        config.overrides.apply(&mut sync);
        assert_eq!(sync.packet_version, 20130807);
        assert!(!sync.uses_recovery2());
        assert_eq!(sync.companion.talk_cooldown, Duration::from_millis(2500));
        assert_eq!(sync.companion.danger_percent, 40);
        assert_eq!(sync.companion.friendliness_threshold, 900);
        assert_eq!(config.channels.event_buffer, 1);
        assert_eq!(config.content_dir, Some(PathBuf::from("/srv/content")));
    }

    #[test]
    fn malformed_value_is_rejected() {
        let err = ClientConfig::from_lookup(lookup(&[(ClientConfig::PACKETVER, "latest")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: ClientConfig::PACKETVER,
                value: "latest".into()
            }
        );
    }
}
