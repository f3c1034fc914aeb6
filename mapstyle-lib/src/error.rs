//! Error types for map-style encoding.

use thiserror::Error;

/// Result type alias for style encoding.
pub type Result<T> = std::result::Result<T, StyleError>;

/// Invalid style configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// Element name missing from the short-code table.
    #[error("unknown map element: {0}")]
    UnknownElement(String),

    /// Property name missing from the short-code table.
    #[error("unknown style property: {0}")]
    UnknownProperty(String),

    /// Color value containing one of the encoding's delimiters.
    #[error("color for {name} contains a reserved character: {value}")]
    ReservedCharacter {
        /// Property the color belongs to.
        name: String,
        /// Offending color string.
        value: String,
    },
}
