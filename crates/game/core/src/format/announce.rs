//! Server-wide announcement colouring.

use core::str::FromStr;

use super::color::rgb_from_packed;
use crate::effect::AnnounceDisplay;
use crate::error::CoreError;
use crate::event::AnnounceEvent;

/// Colour used when neither a packed colour nor a legacy tag is present.
pub const ANNOUNCE_FALLBACK_COLOR: &str = "#FFFF00";

/// Four-character colour prefixes older servers put in front of the text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum LegacyColorTag {
    Blue,
    Ssss,
}

impl LegacyColorTag {
    pub const LEN: usize = 4;

    pub const fn color(self) -> &'static str {
        match self {
            Self::Blue => "#00FFFF",
            Self::Ssss => "#FFFF00",
        }
    }

    /// Splits a leading tag off `msg`, returning the tag and the remaining text.
    pub fn strip(msg: &str) -> Option<(Self, &str)> {
        let prefix = msg.get(..Self::LEN)?;
        let tag = prefix.parse().ok()?;
        Some((tag, &msg[Self::LEN..]))
    }
}

impl FromStr for LegacyColorTag {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blue" => Ok(Self::Blue),
            "ssss" => Ok(Self::Ssss),
            other => Err(CoreError::UnknownColorTag(other.to_owned())),
        }
    }
}

/// Resolves the display text and colour of an announcement.
///
/// A non-zero packed colour wins and leaves the text untouched. Otherwise a
/// legacy tag picks the colour and is removed from the text.
pub fn format_announce(event: &AnnounceEvent) -> AnnounceDisplay {
    if let Some(packed) = event.font_color.filter(|&c| c != 0) {
        return AnnounceDisplay {
            text: event.msg.clone(),
            color: rgb_from_packed(packed),
        };
    }

    match LegacyColorTag::strip(&event.msg) {
        Some((tag, rest)) => AnnounceDisplay {
            text: rest.to_owned(),
            color: tag.color().to_owned(),
        },
        None => AnnounceDisplay {
            text: event.msg.clone(),
            color: ANNOUNCE_FALLBACK_COLOR.to_owned(),
        },
    }
}
