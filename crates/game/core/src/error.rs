//! Error types for statsync-core.
//!
//! Nothing on the dispatch path returns these to a caller. They exist for the
//! conversions that can legitimately fail (raw wire codes, colour tags) so the
//! runtime can log what it dropped.

/// Errors raised by the pure conversion helpers in this crate.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// The raw attribute code has no canonical counterpart.
    #[error("unrecognized status code {0}")]
    UnknownStatusCode(i32),

    /// Announce text does not start with a known legacy colour tag.
    #[error("unrecognized legacy colour tag in {0:?}")]
    UnknownColorTag(String),
}

impl CoreError {
    /// Returns a static identifier for this error variant, used as a log field.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownStatusCode(_) => "unknown_status_code",
            Self::UnknownColorTag(_) => "unknown_color_tag",
        }
    }
}
