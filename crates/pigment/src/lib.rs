//! pigment - CSS-compatible color parsing, conversion, and manipulation.
//!
//! A [`Color`] is built from a named CSS color, a hex string, an
//! `rgb()`/`rgba()` string, literal RGB channels, or HSL components. The
//! two representations are mutually derived on demand and cached, and every
//! transformation (hue shift, lighten, saturate, blend, tint, invert)
//! returns a new value.
//!
//! ```
//! use pigment::Color;
//!
//! let c = Color::parse("cornflowerblue").unwrap();
//! assert_eq!(c.to_hex(), "#6495ed");
//! assert_eq!(c.darken(0.2).unwrap().combine("black", 0.5).unwrap().alpha(), 1.0);
//! ```

mod color;
mod error;
mod model;
pub mod names;
mod parse;

pub use color::{Color, Hsl};
pub use error::InvalidColorError;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::color::{Color, Hsl};
    pub use crate::error::InvalidColorError;
}
