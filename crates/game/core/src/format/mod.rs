//! Pure text formatting for chat and banner output.
//!
//! Everything here is a function of its inputs; message lookups go through
//! [`MessageOracle`](crate::env::MessageOracle) so tests can supply a table.
mod announce;
mod color;
mod rank;

pub use announce::{ANNOUNCE_FALLBACK_COLOR, LegacyColorTag, format_announce};
pub use color::rgb_from_packed;
pub use rank::{RANK_LABEL_MSG, RANK_POINTS_MSG, format_rank};

/// Replaces the first occurrence of `placeholder` in `template`.
pub fn substitute(template: &str, placeholder: &str, value: impl core::fmt::Display) -> String {
    template.replacen(placeholder, &value.to_string(), 1)
}
