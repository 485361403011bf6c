//! Error types for the tag cloud library.
//!
//! Rendering itself never fails; these errors only come out of the explicit
//! parsing entry points.

use thiserror::Error;

/// Errors that can occur when parsing a CSS color value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input was empty or whitespace.
    #[error("color value is empty")]
    Empty,

    /// A `#` color with the wrong number of hex digits or a non-hex digit.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),

    /// An `rgb()`/`hsl()` style function that could not be parsed.
    #[error("invalid color function: {0}")]
    InvalidFunction(String),

    /// Not a hex value, a color function, or a known color name.
    #[error("unknown color name: {0}")]
    UnknownName(String),
}

/// Errors that can occur when reading render options strictly.
#[derive(Debug, Error)]
pub enum OptionsError {
    /// The options value was not a JSON object.
    #[error("render options must be an object, got {0}")]
    NotAnObject(&'static str),

    /// A recognized option had the wrong type.
    #[error("option `{field}` must be {expected}")]
    WrongType {
        /// The option key.
        field: &'static str,
        /// A short description of the accepted type.
        expected: &'static str,
    },

    /// The color flag was set but a gradient endpoint did not parse.
    #[error("option `{field}` is not a valid color: {source}")]
    InvalidColor {
        /// The option key.
        field: &'static str,
        /// The underlying parse failure.
        #[source]
        source: ColorError,
    },
}
