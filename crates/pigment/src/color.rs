//! The [`Color`] value type: an immutable CSS-compatible color.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::InvalidColorError;
use crate::model;
use crate::parse;

/// A hue/saturation/lightness triple, each component a real in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue position on the color wheel (wraps at 1).
    pub h: f64,
    /// Saturation: 0 = gray, 1 = fully saturated.
    pub s: f64,
    /// Lightness: 0 = black, 1 = white.
    pub l: f64,
}

/// Which representation a color was built from, plus a cache slot for the
/// derived one.
///
/// A color is RGB-known or HSL-known at construction; the first access to
/// the missing representation derives it and fills the `OnceLock`, after
/// which the value is both-known. That lock write is the only mutation in
/// the crate, and the derivation is deterministic, so a racing double
/// computation is benign and the type stays `Send + Sync`.
#[derive(Debug, Clone)]
enum Repr {
    Rgb { rgb: [u8; 3], hsl: OnceLock<Hsl> },
    Hsl { hsl: Hsl, rgb: OnceLock<[u8; 3]> },
}

/// An immutable CSS-compatible color value.
///
/// A `Color` holds an RGB triple (integers 0-255) or an HSL triple (reals
/// 0-1) plus an alpha channel in [0, 1]; the other representation is
/// derived and cached on first access. Every transformation returns a new
/// `Color` and leaves the receiver untouched.
///
/// ```
/// use pigment::Color;
///
/// let red = Color::parse("red").unwrap();
/// assert_eq!(red.to_rgb(), [255, 0, 0]);
/// assert_eq!(red.with_hue(2.0 / 3.0).unwrap().to_string(), "#00f");
/// ```
#[derive(Debug, Clone)]
pub struct Color {
    repr: Repr,
    alpha: f64,
}

impl Color {
    /// Fully transparent black, the `Default` value.
    pub const TRANSPARENT: Color = Color::const_rgb([0, 0, 0], 0.0);
    /// Opaque white.
    pub const WHITE: Color = Color::const_rgb([255, 255, 255], 1.0);
    /// Opaque black.
    pub const BLACK: Color = Color::const_rgb([0, 0, 0], 1.0);
    /// Opaque full red.
    pub const RED: Color = Color::const_rgb([255, 0, 0], 1.0);
    /// Opaque full green.
    pub const GREEN: Color = Color::const_rgb([0, 255, 0], 1.0);
    /// Opaque full blue.
    pub const BLUE: Color = Color::const_rgb([0, 0, 255], 1.0);

    const fn const_rgb(rgb: [u8; 3], alpha: f64) -> Color {
        Color {
            repr: Repr::Rgb {
                rgb,
                hsl: OnceLock::new(),
            },
            alpha,
        }
    }

    /// Opaque color from literal RGB channels.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Color {
        Color::const_rgb([r, g, b], 1.0)
    }

    /// Color from literal RGB channels plus an alpha in [0, 1].
    pub fn from_rgba(r: u8, g: u8, b: u8, alpha: f64) -> Result<Color, InvalidColorError> {
        if !model::is_unit_interval(alpha) {
            return Err(InvalidColorError::Alpha(alpha));
        }
        Ok(Color::const_rgb([r, g, b], alpha))
    }

    /// Opaque color from hue/saturation/lightness, each in [0, 1].
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Result<Color, InvalidColorError> {
        Color::from_hsla(h, s, l, 1.0)
    }

    /// Color from hue/saturation/lightness plus alpha, each in [0, 1].
    pub fn from_hsla(h: f64, s: f64, l: f64, alpha: f64) -> Result<Color, InvalidColorError> {
        if !model::is_unit_interval(h) {
            return Err(InvalidColorError::Hue(h));
        }
        if !model::is_unit_interval(s) {
            return Err(InvalidColorError::Saturation(s));
        }
        if !model::is_unit_interval(l) {
            return Err(InvalidColorError::Lightness(l));
        }
        if !model::is_unit_interval(alpha) {
            return Err(InvalidColorError::Alpha(alpha));
        }
        Ok(Color {
            repr: Repr::Hsl {
                hsl: Hsl { h, s, l },
                rgb: OnceLock::new(),
            },
            alpha,
        })
    }

    /// Parse a color from any supported string form: a named color
    /// (`"red"`), 3- or 6-digit hex (`"#f00"`, `"#e2b644"`, `#` optional),
    /// `rgb(r,g,b)`, or `rgba(r,g,b,a)`.
    ///
    /// ```
    /// use pigment::Color;
    ///
    /// assert_eq!(Color::parse("#f00").unwrap().to_rgb(), [255, 0, 0]);
    /// assert!(Color::parse("rgb(256,0,0)").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Color, InvalidColorError> {
        match parse::parse_color_string(input) {
            Some((rgb, alpha)) => Ok(Color::const_rgb(rgb, alpha.unwrap_or(1.0))),
            None => Err(InvalidColorError::UnrecognizedString(input.to_owned())),
        }
    }

    fn rgb_parts(&self) -> [u8; 3] {
        match &self.repr {
            Repr::Rgb { rgb, .. } => *rgb,
            Repr::Hsl { hsl, rgb } => *rgb.get_or_init(|| model::hsl_to_rgb(*hsl)),
        }
    }

    fn hsl_parts(&self) -> Hsl {
        match &self.repr {
            Repr::Hsl { hsl, .. } => *hsl,
            Repr::Rgb { rgb, hsl } => *hsl.get_or_init(|| model::rgb_to_hsl(*rgb)),
        }
    }

    /// The RGB triple, derived from HSL on first access if necessary.
    pub fn to_rgb(&self) -> [u8; 3] {
        self.rgb_parts()
    }

    /// The HSL triple, derived from RGB on first access if necessary.
    pub fn to_hsl(&self) -> Hsl {
        self.hsl_parts()
    }

    /// The hex form: `#rgb` when every channel compacts to a single
    /// repeated digit, `#rrggbb` otherwise. Alpha is not encoded.
    ///
    /// ```
    /// use pigment::Color;
    ///
    /// assert_eq!(Color::from_rgb(255, 0, 0).to_hex(), "#f00");
    /// assert_eq!(Color::from_rgb(226, 182, 68).to_hex(), "#e2b644");
    /// ```
    pub fn to_hex(&self) -> String {
        model::rgb_to_hex(self.rgb_parts())
    }

    /// The red channel, 0-255.
    pub fn red(&self) -> u8 {
        self.rgb_parts()[0]
    }

    /// The green channel, 0-255.
    pub fn green(&self) -> u8 {
        self.rgb_parts()[1]
    }

    /// The blue channel, 0-255.
    pub fn blue(&self) -> u8 {
        self.rgb_parts()[2]
    }

    /// The alpha channel, 0-1.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// The hue component, 0-1.
    pub fn hue(&self) -> f64 {
        self.hsl_parts().h
    }

    /// The saturation component, 0-1.
    pub fn saturation(&self) -> f64 {
        self.hsl_parts().s
    }

    /// The lightness component, 0-1.
    pub fn lightness(&self) -> f64 {
        self.hsl_parts().l
    }

    /// Replace the alpha channel; `alpha` must be in [0, 1].
    ///
    /// The new color keeps every representation the receiver has already
    /// resolved.
    pub fn with_alpha(&self, alpha: f64) -> Result<Color, InvalidColorError> {
        if !model::is_unit_interval(alpha) {
            return Err(InvalidColorError::Alpha(alpha));
        }
        Ok(Color {
            repr: self.repr.clone(),
            alpha,
        })
    }

    /// Replace the red channel.
    pub fn with_red(&self, r: u8) -> Color {
        let [_, g, b] = self.rgb_parts();
        Color::const_rgb([r, g, b], self.alpha)
    }

    /// Replace the green channel.
    pub fn with_green(&self, g: u8) -> Color {
        let [r, _, b] = self.rgb_parts();
        Color::const_rgb([r, g, b], self.alpha)
    }

    /// Replace the blue channel.
    pub fn with_blue(&self, b: u8) -> Color {
        let [r, g, _] = self.rgb_parts();
        Color::const_rgb([r, g, b], self.alpha)
    }

    /// Replace the hue component; `h` must be in [0, 1].
    ///
    /// ```
    /// use pigment::Color;
    ///
    /// let c = Color::parse("#f00").unwrap();
    /// assert_eq!(c.with_hue(2.0 / 3.0).unwrap().to_string(), "#00f");
    /// ```
    pub fn with_hue(&self, h: f64) -> Result<Color, InvalidColorError> {
        if !model::is_unit_interval(h) {
            return Err(InvalidColorError::Hue(h));
        }
        let hsl = self.hsl_parts();
        Ok(Color::from_hsl_unchecked(Hsl { h, ..hsl }, self.alpha))
    }

    /// Replace the saturation component; `s` must be in [0, 1].
    ///
    /// ```
    /// use pigment::Color;
    ///
    /// let c = Color::from_rgb(100, 50, 50);
    /// assert_eq!(c.with_saturation(0.5).unwrap().to_string(), "#712626");
    /// ```
    pub fn with_saturation(&self, s: f64) -> Result<Color, InvalidColorError> {
        if !model::is_unit_interval(s) {
            return Err(InvalidColorError::Saturation(s));
        }
        let hsl = self.hsl_parts();
        Ok(Color::from_hsl_unchecked(Hsl { s, ..hsl }, self.alpha))
    }

    /// Replace the lightness component.
    ///
    /// Unlike the sibling setters, an out-of-range `l` does not fail: the
    /// result is plain white.
    ///
    /// ```
    /// use pigment::Color;
    ///
    /// let red = Color::parse("#f00").unwrap();
    /// assert_eq!(red.with_lightness(1.0).to_string(), "#fff");
    /// assert_eq!(red.with_lightness(1.5), Color::WHITE);
    /// ```
    pub fn with_lightness(&self, l: f64) -> Color {
        if !model::is_unit_interval(l) {
            return Color::WHITE;
        }
        let hsl = self.hsl_parts();
        Color::from_hsl_unchecked(Hsl { l, ..hsl }, self.alpha)
    }

    /// Add `delta` to the hue and wrap the result back into [0, 1).
    ///
    /// Any finite delta is accepted, including magnitudes beyond ±1.
    ///
    /// ```
    /// use pigment::Color;
    ///
    /// let yellow = Color::from_rgb(255, 255, 0);
    /// assert_eq!(yellow.shift_hue(0.25).to_string(), "#00ff7f");
    /// ```
    pub fn shift_hue(&self, delta: f64) -> Color {
        let hsl = self.hsl_parts();
        let mut h = hsl.h + delta;
        if h >= 1.0 {
            h -= h.floor();
        }
        if h < -1.0 {
            h += h.floor().abs();
        }
        if h < 0.0 {
            h += 1.0;
        }
        Color::from_hsl_unchecked(Hsl { h, ..hsl }, self.alpha)
    }

    /// Add `delta` to the saturation, clamping the result into [0, 1];
    /// `delta` must be in [-1, 1].
    pub fn saturate(&self, delta: f64) -> Result<Color, InvalidColorError> {
        if !(-1.0..=1.0).contains(&delta) {
            return Err(InvalidColorError::Delta(delta));
        }
        let hsl = self.hsl_parts();
        let s = (hsl.s + delta).clamp(0.0, 1.0);
        Ok(Color::from_hsl_unchecked(Hsl { s, ..hsl }, self.alpha))
    }

    /// Subtract `delta` from the saturation; `delta` must be in [-1, 1].
    pub fn desaturate(&self, delta: f64) -> Result<Color, InvalidColorError> {
        self.saturate(-delta)
    }

    /// Add `delta` to the lightness, clamping the result into [0, 1];
    /// `delta` must be in [-1, 1].
    pub fn lighten(&self, delta: f64) -> Result<Color, InvalidColorError> {
        if !(-1.0..=1.0).contains(&delta) {
            return Err(InvalidColorError::Delta(delta));
        }
        let hsl = self.hsl_parts();
        let l = (hsl.l + delta).clamp(0.0, 1.0);
        Ok(Color::from_hsl_unchecked(Hsl { l, ..hsl }, self.alpha))
    }

    /// Subtract `delta` from the lightness; `delta` must be in [-1, 1].
    ///
    /// ```
    /// use pigment::Color;
    ///
    /// let red = Color::parse("#f00").unwrap();
    /// assert_eq!(red.darken(0.25).unwrap().to_string(), "#800000");
    /// ```
    pub fn darken(&self, delta: f64) -> Result<Color, InvalidColorError> {
        self.lighten(-delta)
    }

    /// Interpolate each RGB channel toward `other` by `fraction` in [0, 1].
    ///
    /// `other` is anything convertible to a color: a `Color`, `&Color`,
    /// `[u8; 3]`, [`Hsl`], or a parseable string. The result keeps the
    /// receiver's alpha.
    ///
    /// ```
    /// use pigment::Color;
    ///
    /// let black = Color::parse("black").unwrap();
    /// assert_eq!(black.combine("red", 0.5).unwrap().to_string(), "#800000");
    /// ```
    pub fn combine<T>(&self, other: T, fraction: f64) -> Result<Color, InvalidColorError>
    where
        T: TryInto<Color>,
        T::Error: Into<InvalidColorError>,
    {
        if !model::is_unit_interval(fraction) {
            return Err(InvalidColorError::Fraction(fraction));
        }
        let other = other.try_into().map_err(Into::into)?;
        let rgb = model::blend(self.rgb_parts(), other.rgb_parts(), fraction);
        Ok(Color::const_rgb(rgb, self.alpha))
    }

    /// Invert each RGB channel (`255 - v`); alpha is unchanged.
    ///
    /// ```
    /// use pigment::Color;
    ///
    /// assert_eq!(Color::parse("#f00").unwrap().invert().to_string(), "#0ff");
    /// ```
    pub fn invert(&self) -> Color {
        Color::const_rgb(model::invert(self.rgb_parts()), self.alpha)
    }

    /// Rotate only the hue toward `other`'s hue by `fraction`, taking the
    /// shortest arc around the color wheel. Saturation, lightness, and
    /// alpha come from the receiver.
    ///
    /// ```
    /// use pigment::Color;
    ///
    /// let red = Color::parse("#f00").unwrap();
    /// assert_eq!(red.tint("#00f", 0.5).unwrap().to_string(), "#f0f");
    /// ```
    pub fn tint<T>(&self, other: T, fraction: f64) -> Result<Color, InvalidColorError>
    where
        T: TryInto<Color>,
        T::Error: Into<InvalidColorError>,
    {
        let other = other.try_into().map_err(Into::into)?;
        let hsl = self.hsl_parts();
        let h = model::mix_hue(hsl.h, other.hsl_parts().h, fraction);
        Ok(Color::from_hsl_unchecked(Hsl { h, ..hsl }, self.alpha))
    }

    /// The lossless CSS form: hex when fully opaque, `rgba(…)` otherwise.
    ///
    /// Unlike `Display`, a fully transparent color keeps its RGB triple
    /// (`rgba(r,g,b,0)`) instead of collapsing to the `transparent`
    /// keyword, so the output always parses back to an equal color.
    pub fn to_css_string(&self) -> String {
        if self.alpha < 1.0 {
            let [r, g, b] = self.rgb_parts();
            format!("rgba({},{},{},{})", r, g, b, self.alpha)
        } else {
            self.to_hex()
        }
    }

    /// Components already validated or produced by a transformation.
    fn from_hsl_unchecked(hsl: Hsl, alpha: f64) -> Color {
        Color {
            repr: Repr::Hsl {
                hsl,
                rgb: OnceLock::new(),
            },
            alpha,
        }
    }
}

impl Default for Color {
    /// Fully transparent black.
    fn default() -> Self {
        Color::TRANSPARENT
    }
}

/// Equality compares the resolved RGB triple and alpha, so an RGB-built
/// and an HSL-built color describing the same 8-bit value are equal.
impl PartialEq for Color {
    fn eq(&self, other: &Color) -> bool {
        self.rgb_parts() == other.rgb_parts() && self.alpha == other.alpha
    }
}

/// CSS output: `transparent` when alpha is 0, `rgba(r,g,b,a)` when
/// translucent, the hex form when fully opaque.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alpha == 0.0 {
            return f.write_str("transparent");
        }
        if self.alpha < 1.0 {
            let [r, g, b] = self.rgb_parts();
            return write!(f, "rgba({},{},{},{})", r, g, b, self.alpha);
        }
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = InvalidColorError;

    fn from_str(s: &str) -> Result<Color, InvalidColorError> {
        Color::parse(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = InvalidColorError;

    fn try_from(s: &str) -> Result<Color, InvalidColorError> {
        Color::parse(s)
    }
}

impl From<[u8; 3]> for Color {
    fn from(rgb: [u8; 3]) -> Color {
        Color::from_rgb(rgb[0], rgb[1], rgb[2])
    }
}

impl From<&Color> for Color {
    fn from(color: &Color) -> Color {
        color.clone()
    }
}

impl TryFrom<Hsl> for Color {
    type Error = InvalidColorError;

    fn try_from(hsl: Hsl) -> Result<Color, InvalidColorError> {
        Color::from_hsl(hsl.h, hsl.s, hsl.l)
    }
}

/// Serialized as the lossless CSS string form.
impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_css_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Color, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_default_is_transparent_black() {
        let c = Color::default();
        assert_eq!(c.to_rgb(), [0, 0, 0]);
        assert_eq!(c.alpha(), 0.0);
        assert_eq!(c.to_string(), "transparent");
    }

    #[test]
    fn test_named_color_rgb() {
        assert_eq!(Color::parse("red").unwrap().to_rgb(), [255, 0, 0]);
    }

    #[test]
    fn test_rgba_string_round_trip() {
        let c = Color::parse("rgba(255,0,100,0.5)").unwrap();
        assert_eq!(c.to_string(), "rgba(255,0,100,0.5)");
    }

    #[test]
    fn test_hue_setter_rotates_to_blue() {
        let c = Color::parse("#f00").unwrap();
        assert_eq!(c.with_hue(2.0 / 3.0).unwrap().to_string(), "#00f");
    }

    #[test]
    fn test_saturation_setter() {
        let c = Color::from_rgb(100, 50, 50);
        assert_eq!(c.with_saturation(0.5).unwrap().to_string(), "#712626");
    }

    #[test]
    fn test_combine_from_string_literal() {
        let black = Color::parse("black").unwrap();
        assert_eq!(black.combine("red", 0.5).unwrap().to_string(), "#800000");
    }

    #[test]
    fn test_combine_accepts_color_and_array() {
        let black = Color::BLACK;
        let red = Color::RED;
        assert_eq!(black.combine(&red, 0.5).unwrap().to_string(), "#800000");
        assert_eq!(
            black.combine([255u8, 0, 0], 0.5).unwrap().to_string(),
            "#800000"
        );
    }

    #[test]
    fn test_combine_keeps_receiver_alpha() {
        let c = Color::from_rgba(0, 0, 0, 0.5).unwrap();
        let mixed = c.combine("red", 0.5).unwrap();
        assert_eq!(mixed.alpha(), 0.5);
        assert_eq!(mixed.to_string(), "rgba(128,0,0,0.5)");
    }

    #[test]
    fn test_combine_rejects_bad_fraction() {
        let c = Color::BLACK;
        assert_eq!(
            c.combine("red", 1.5),
            Err(InvalidColorError::Fraction(1.5))
        );
        assert!(c.combine("not a color", 0.5).is_err());
    }

    #[test]
    fn test_transparent_regardless_of_rgb() {
        let c = Color::from_rgba(200, 100, 50, 0.0).unwrap();
        assert_eq!(c.to_string(), "transparent");
    }

    #[test]
    fn test_to_string_round_trips_through_parse() {
        for input in ["#f00", "#e2b644", "cornsilk", "rgb(1,2,3)"] {
            let c = Color::parse(input).unwrap();
            let back = Color::parse(&c.to_string()).unwrap();
            assert_eq!(back.to_hex(), c.to_hex(), "round trip of {input:?}");
        }
    }

    #[test]
    fn test_alpha_setter_and_validation() {
        let c = Color::parse("#f00").unwrap();
        assert_eq!(c.with_alpha(0.5).unwrap().to_string(), "rgba(255,0,0,0.5)");
        assert_eq!(c.with_alpha(1.5), Err(InvalidColorError::Alpha(1.5)));
        // The receiver is untouched.
        assert_eq!(c.alpha(), 1.0);
    }

    #[test]
    fn test_alpha_override_of_parsed_alpha() {
        let c = Color::parse("rgba(255,0,100,0.5)")
            .unwrap()
            .with_alpha(0.1)
            .unwrap();
        assert_eq!(c.to_string(), "rgba(255,0,100,0.1)");
    }

    #[test]
    fn test_channel_setters() {
        let c = Color::parse("rgb(0,0,255)").unwrap();
        assert_eq!(c.with_red(255).to_string(), "#f0f");
        let c = Color::parse("rgb(255,0,0)").unwrap();
        assert_eq!(c.with_green(255).to_string(), "#ff0");
        let c = Color::parse("#ff0").unwrap();
        assert_eq!(c.with_blue(255).to_string(), "#fff");
    }

    #[test]
    fn test_hsl_accessors() {
        let c = Color::parse("#f00").unwrap();
        let hsl = c.to_hsl();
        assert!(approx_eq(hsl.h, 0.0));
        assert!(approx_eq(hsl.s, 1.0));
        assert!(approx_eq(hsl.l, 0.5));
        assert!(approx_eq(Color::parse("#0f0").unwrap().hue(), 1.0 / 3.0));
        assert!(approx_eq(Color::parse("#00f").unwrap().hue(), 2.0 / 3.0));
    }

    #[test]
    fn test_hue_setter_reads_back_exactly() {
        let c = Color::parse("tomato").unwrap();
        for i in 0..=10 {
            let h = f64::from(i) / 10.0;
            assert_eq!(c.with_hue(h).unwrap().hue(), h);
        }
        assert_eq!(c.with_hue(1.5), Err(InvalidColorError::Hue(1.5)));
    }

    #[test]
    fn test_shift_hue_stays_in_unit_range() {
        let c = Color::parse("#e2b644").unwrap();
        for delta in [0.25, 0.9999, 1.0, 2.5, 3.7, -0.25, -1.0, -2.2, -5.2] {
            let h = c.shift_hue(delta).hue();
            assert!((0.0..1.0).contains(&h), "delta {delta} gave hue {h}");
        }
    }

    #[test]
    fn test_shift_hue_quarter_turn_from_yellow() {
        let c = Color::from_rgb(255, 255, 0);
        assert_eq!(c.shift_hue(0.25).to_string(), "#00ff7f");
    }

    #[test]
    fn test_saturate_clamps_and_validates() {
        let red = Color::parse("#f00").unwrap();
        // Already fully saturated: the delta clamps away.
        assert_eq!(red.saturate(0.5).unwrap().to_string(), "#f00");
        assert_eq!(red.desaturate(0.5).unwrap().to_string(), "#bf4040");
        assert_eq!(red.saturate(1.5), Err(InvalidColorError::Delta(1.5)));
        assert_eq!(red.desaturate(2.0), Err(InvalidColorError::Delta(-2.0)));
    }

    #[test]
    fn test_lighten_darken() {
        let red = Color::parse("#f00").unwrap();
        assert_eq!(red.lighten(0.2).unwrap().to_string(), "#f66");
        assert_eq!(red.darken(0.25).unwrap().to_string(), "#800000");
        // Clamped at the extremes.
        assert_eq!(red.lighten(1.0).unwrap().to_string(), "#fff");
        assert_eq!(red.darken(1.0).unwrap().to_string(), "#000");
        assert_eq!(red.lighten(1.2), Err(InvalidColorError::Delta(1.2)));
    }

    #[test]
    fn test_lightness_setter_white_fallback() {
        let c = Color::parse("#f00").unwrap();
        assert_eq!(c.with_lightness(0.0).to_string(), "#000");
        assert_eq!(c.with_lightness(0.5).to_string(), "#f00");
        assert_eq!(c.with_lightness(1.0).to_string(), "#fff");
        // Out of range substitutes white instead of failing.
        assert_eq!(c.with_lightness(1.5), Color::WHITE);
        assert_eq!(c.with_lightness(-0.5), Color::WHITE);
    }

    #[test]
    fn test_invert_involution() {
        let c = Color::parse("#e2b644").unwrap();
        assert_eq!(c.invert().invert().to_rgb(), c.to_rgb());
        assert_eq!(Color::parse("#fff").unwrap().invert().to_string(), "#000");
    }

    #[test]
    fn test_invert_keeps_alpha() {
        let c = Color::from_rgba(255, 0, 0, 0.5).unwrap();
        assert_eq!(c.invert().to_string(), "rgba(0,255,255,0.5)");
    }

    #[test]
    fn test_tint_shortest_arc() {
        // Red to blue passes through magenta, not green.
        let red = Color::parse("#f00").unwrap();
        assert_eq!(red.tint("#00f", 0.5).unwrap().to_string(), "#f0f");
        // Deep blue nudged a tenth of the way toward red.
        let blue = Color::parse("rgb(0,0,100)").unwrap();
        assert_eq!(
            blue.tint("rgb(100,0,0)", 0.1).unwrap().to_string(),
            "#140064"
        );
    }

    #[test]
    fn test_tint_keeps_saturation_lightness_alpha() {
        let c = Color::from_rgba(0, 0, 100, 0.5).unwrap();
        let tinted = c.tint("rgb(100,0,0)", 0.1).unwrap();
        assert_eq!(tinted.alpha(), 0.5);
        assert!(approx_eq(tinted.saturation(), c.saturation()));
        assert!(approx_eq(tinted.lightness(), c.lightness()));
    }

    #[test]
    fn test_copy_preserves_representations() {
        let hsl_built = Color::from_hsl(0.25, 0.5, 0.5).unwrap();
        let copy = hsl_built.clone();
        assert_eq!(copy.to_hsl(), hsl_built.to_hsl());
        assert_eq!(copy.to_rgb(), hsl_built.to_rgb());
    }

    #[test]
    fn test_equality_across_representations() {
        let from_rgb = Color::from_rgb(255, 0, 0);
        let from_hsl = Color::from_hsl(0.0, 1.0, 0.5).unwrap();
        assert_eq!(from_rgb, from_hsl);
        assert_ne!(from_rgb, from_rgb.with_alpha(0.5).unwrap());
    }

    #[test]
    fn test_from_rgba_validates_alpha() {
        assert!(Color::from_rgba(0, 0, 0, 0.5).is_ok());
        assert_eq!(
            Color::from_rgba(0, 0, 0, -0.1),
            Err(InvalidColorError::Alpha(-0.1))
        );
    }

    #[test]
    fn test_from_hsla_validates_components() {
        assert_eq!(
            Color::from_hsla(1.5, 0.0, 0.0, 1.0),
            Err(InvalidColorError::Hue(1.5))
        );
        assert_eq!(
            Color::from_hsla(0.5, -0.1, 0.0, 1.0),
            Err(InvalidColorError::Saturation(-0.1))
        );
        assert_eq!(
            Color::from_hsla(0.5, 0.5, 2.0, 1.0),
            Err(InvalidColorError::Lightness(2.0))
        );
        assert_eq!(
            Color::from_hsla(0.5, 0.5, 0.5, 7.0),
            Err(InvalidColorError::Alpha(7.0))
        );
    }

    #[test]
    fn test_parse_failure_is_an_error() {
        assert_eq!(
            Color::parse("no-such-color"),
            Err(InvalidColorError::UnrecognizedString(
                "no-such-color".to_owned()
            ))
        );
    }

    #[test]
    fn test_from_str_and_try_from() {
        let c: Color = "dodgerblue".parse().unwrap();
        assert_eq!(c.to_rgb(), [30, 144, 255]);
        assert!("bogus".parse::<Color>().is_err());
        assert_eq!(Color::try_from("#123").unwrap().to_rgb(), [17, 34, 51]);
    }

    #[test]
    fn test_serde_round_trip() {
        let opaque = Color::parse("#f00").unwrap();
        assert_eq!(serde_json::to_string(&opaque).unwrap(), "\"#f00\"");

        let translucent = Color::from_rgba(255, 0, 0, 0.5).unwrap();
        assert_eq!(
            serde_json::to_string(&translucent).unwrap(),
            "\"rgba(255,0,0,0.5)\""
        );

        // Fully transparent keeps its channels instead of serializing to
        // the `transparent` keyword.
        let clear = Color::from_rgba(10, 20, 30, 0.0).unwrap();
        let json = serde_json::to_string(&clear).unwrap();
        assert_eq!(json, "\"rgba(10,20,30,0)\"");

        for c in [opaque, translucent, clear] {
            let json = serde_json::to_string(&c).unwrap();
            let back: Color = serde_json::from_str(&json).unwrap();
            assert_eq!(back, c);
        }
    }

    #[test]
    fn test_serde_rejects_bad_input() {
        assert!(serde_json::from_str::<Color>("\"bogus\"").is_err());
    }

    #[test]
    fn test_constants() {
        assert_eq!(Color::WHITE.to_string(), "#fff");
        assert_eq!(Color::BLACK.to_string(), "#000");
        assert_eq!(Color::RED.to_rgb(), [255, 0, 0]);
        assert_eq!(Color::GREEN.to_rgb(), [0, 255, 0]);
        assert_eq!(Color::BLUE.to_rgb(), [0, 0, 255]);
        assert_eq!(Color::TRANSPARENT, Color::default());
    }
}
