//! Error type shared by every fallible palette operation.

use at_color::ParseColorError;

/// Result alias for palette operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Why a palette could not be produced.
///
/// Every variant is a caller error surfaced before any work is done: the
/// engine never returns a partial palette. Failing to reach a contrast
/// target is not an error, see [`crate::accessible::Outcome`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The seed string is not a `#RGB` or `#RRGGBB` hex code.
    #[error(transparent)]
    InvalidColor(#[from] ParseColorError),

    /// The harmony name does not match any [`crate::HarmonyKind`].
    #[error("unknown harmony kind {0:?}")]
    InvalidHarmonyKind(String),

    /// A numeric option is outside its accepted range.
    #[error("invalid option `{name}`: {reason}")]
    InvalidOption {
        name: &'static str,
        reason: String,
    },

    /// A theme request could not be parsed as TOML.
    #[error("invalid theme request: {0}")]
    Config(#[from] toml::de::Error),
}
