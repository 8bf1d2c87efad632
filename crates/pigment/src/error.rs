//! Error type for color construction and transformation.

use thiserror::Error;

/// A literal, component, or bounded parameter that does not describe a
/// valid color or color operation.
///
/// Raised synchronously by constructors and transformations; a failed call
/// has no observable side effect on its receiver. The crate performs no
/// logging or recovery of its own.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidColorError {
    /// A string matched none of the supported grammars (named color, hex,
    /// `rgb()`, `rgba()`), or a component inside it was out of range.
    #[error("unrecognized color string: {0:?}")]
    UnrecognizedString(String),

    /// Alpha outside [0, 1].
    #[error("invalid alpha value: {0}")]
    Alpha(f64),

    /// Hue outside [0, 1].
    #[error("invalid hue value: {0}")]
    Hue(f64),

    /// Saturation outside [0, 1].
    #[error("invalid saturation value: {0}")]
    Saturation(f64),

    /// Lightness outside [0, 1].
    #[error("invalid lightness value: {0}")]
    Lightness(f64),

    /// Saturate/desaturate or lighten/darken delta outside [-1, 1].
    #[error("invalid adjustment delta: {0}")]
    Delta(f64),

    /// Combine fraction outside [0, 1].
    #[error("invalid combine fraction: {0}")]
    Fraction(f64),
}

impl From<std::convert::Infallible> for InvalidColorError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}
