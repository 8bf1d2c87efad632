//! Print the named color palette as hex values.

use pigment::Color;

fn main() {
    for (name, rgb) in pigment::names::entries() {
        let color = Color::from_rgb(rgb[0], rgb[1], rgb[2]);
        println!("{name:<22} {}", color.to_hex());
    }
}
