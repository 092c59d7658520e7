//! World-wide announcements and leaderboards.

use arrayvec::ArrayVec;

use super::EventKind;
use crate::config::SyncConfig;

/// `ZC_BROADCAST` / `ZC_BROADCAST2`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnounceEvent {
    pub msg: String,
    /// Packed `0x00RRGGBB` colour; only the second broadcast shape carries one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub font_color: Option<u32>,
}

impl AnnounceEvent {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            font_color: None,
        }
    }

    pub fn with_font_color(mut self, color: u32) -> Self {
        self.font_color = Some(color);
        self
    }
}

/// Which leaderboard a rank event describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum RankCategory {
    Blacksmith,
    Alchemist,
    Taekwon,
    Killer,
}

impl RankCategory {
    pub const fn kind(self) -> EventKind {
        match self {
            Self::Blacksmith => EventKind::BlacksmithRank,
            Self::Alchemist => EventKind::AlchemistRank,
            Self::Taekwon => EventKind::TaekwonRank,
            Self::Killer => EventKind::KillerRank,
        }
    }

    /// Message-table id naming this category, if the client ships one.
    pub const fn title_message(self) -> Option<u32> {
        match self {
            Self::Blacksmith => Some(2386),
            Self::Alchemist => Some(2387),
            Self::Taekwon => Some(2388),
            // PK ranking is not supported by the client.
            Self::Killer => None,
        }
    }
}

/// Leaderboard snapshot. Both lists may be shorter than ten entries.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankEvent {
    pub category: RankCategory,
    #[cfg_attr(feature = "serde", serde(default))]
    pub names: ArrayVec<String, { SyncConfig::RANK_ENTRIES }>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub points: ArrayVec<i64, { SyncConfig::RANK_ENTRIES }>,
}

impl RankEvent {
    pub fn new(category: RankCategory) -> Self {
        Self {
            category,
            names: ArrayVec::new(),
            points: ArrayVec::new(),
        }
    }

    /// Appends one entry; entries beyond the tenth are dropped.
    pub fn push(&mut self, name: impl Into<String>, points: i64) {
        if self.names.is_full() || self.points.is_full() {
            return;
        }
        self.names.push(name.into());
        self.points.push(points);
    }
}
