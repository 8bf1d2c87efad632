//! pigment demo application
//!
//! Parses a color from the command line and prints its representations
//! and a few transformations.

use pigment::{Color, InvalidColorError};

fn main() -> Result<(), InvalidColorError> {
    env_logger::init();

    let input = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "cornflowerblue".to_owned());
    log::debug!("parsing {input:?}");

    let color = Color::parse(&input)?;
    let hsl = color.to_hsl();

    println!("input:     {input}");
    println!("css:       {color}");
    println!("hex:       {}", color.to_hex());
    println!("rgb:       {:?}  alpha {}", color.to_rgb(), color.alpha());
    println!("hsl:       h {:.3}  s {:.3}  l {:.3}", hsl.h, hsl.s, hsl.l);
    println!("inverted:  {}", color.invert());
    println!("lightened: {}", color.lighten(0.2)?);
    println!("darkened:  {}", color.darken(0.2)?);
    println!("half red:  {}", color.combine("red", 0.5)?);

    log::debug!("done");
    Ok(())
}
