//! String parsing for CSS-style color literals.

use crate::model;
use crate::names;

/// Parse a color string into an RGB triple plus the alpha it carried, if
/// any.
///
/// Recognized forms: named colors, 3- or 6-digit hex (the `#` prefix is
/// optional, digits case-insensitive), `rgb(r,g,b)` and `rgba(r,g,b,a)`.
/// Returns `None` when the input matches none of these grammars or a
/// component is out of range; the constructor maps that to
/// [`InvalidColorError`](crate::InvalidColorError).
pub(crate) fn parse_color_string(input: &str) -> Option<([u8; 3], Option<f64>)> {
    let s = input.trim().to_ascii_lowercase();
    if let Some(rgb) = names::rgb_for(&s) {
        return Some((rgb, None));
    }
    if let Some(list) = s.strip_prefix("rgba(") {
        return parse_rgb_components(list.strip_suffix(')')?, true);
    }
    if let Some(list) = s.strip_prefix("rgb(") {
        return parse_rgb_components(list.strip_suffix(')')?, false);
    }
    parse_hex(&s).map(|rgb| (rgb, None))
}

fn parse_hex(s: &str) -> Option<[u8; 3]> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match digits.len() {
        3 => {
            let mut rgb = [0u8; 3];
            for (i, c) in digits.chars().enumerate() {
                // Expand each nibble to a doubled-digit channel: f -> ff.
                rgb[i] = c.to_digit(16)? as u8 * 17;
            }
            Some(rgb)
        }
        6 => {
            let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
            let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
            let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
            Some([r, g, b])
        }
        _ => None,
    }
}

fn parse_rgb_components(list: &str, with_alpha: bool) -> Option<([u8; 3], Option<f64>)> {
    let parts: Vec<&str> = list.split(',').map(str::trim).collect();
    if parts.len() != if with_alpha { 4 } else { 3 } {
        return None;
    }
    let rgb = [
        parse_channel(parts[0])?,
        parse_channel(parts[1])?,
        parse_channel(parts[2])?,
    ];
    if !with_alpha {
        return Some((rgb, None));
    }
    let alpha: f64 = parts[3].parse().ok()?;
    if !model::is_unit_interval(alpha) {
        return None;
    }
    Some((rgb, Some(alpha)))
}

/// A decimal channel value in 0-255; sign characters and fractions are
/// rejected along with out-of-range magnitudes.
fn parse_channel(s: &str) -> Option<u8> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
