use core::time::Duration;

/// Tunable parameters for the status synchronization engine.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SyncConfig {
    /// Active protocol version (`PACKETVER`). Read once when the event
    /// registry is built to pick the vital recovery packet variant.
    pub packet_version: u32,
    pub companion: CompanionConfig,
}

impl SyncConfig {
    // ===== protocol constants =====
    /// First protocol version that sends `ZC_RECOVERY2` instead of `ZC_RECOVERY`.
    pub const RECOVERY2_PACKETVER: u32 = 20141022;

    /// Number of entries in every rank listing.
    pub const RANK_ENTRIES: usize = 10;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_PACKETVER: u32 = Self::RECOVERY2_PACKETVER;

    pub fn new() -> Self {
        Self {
            packet_version: Self::DEFAULT_PACKETVER,
            companion: CompanionConfig::default(),
        }
    }

    pub fn with_packet_version(packet_version: u32) -> Self {
        Self {
            packet_version,
            ..Self::new()
        }
    }

    /// Returns true when the active protocol sends `ZC_RECOVERY2`.
    pub const fn uses_recovery2(&self) -> bool {
        self.packet_version >= Self::RECOVERY2_PACKETVER
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Gating parameters for companion dialogue reactions.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompanionConfig {
    /// Friendliness must be strictly above this value before the companion talks.
    pub friendliness_threshold: i32,
    /// Minimum time between two danger reactions.
    pub talk_cooldown: Duration,
    /// HP at or below this percentage of max HP counts as danger.
    pub danger_percent: i64,
}

impl CompanionConfig {
    pub const DEFAULT_FRIENDLINESS_THRESHOLD: i32 = 900;
    pub const DEFAULT_TALK_COOLDOWN: Duration = Duration::from_secs(10);
    pub const DEFAULT_DANGER_PERCENT: i64 = 25;
}

impl Default for CompanionConfig {
    fn default() -> Self {
        Self {
            friendliness_threshold: Self::DEFAULT_FRIENDLINESS_THRESHOLD,
            talk_cooldown: Self::DEFAULT_TALK_COOLDOWN,
            danger_percent: Self::DEFAULT_DANGER_PERCENT,
        }
    }
}
