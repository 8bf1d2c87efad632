//! Blend between two colors in even steps.

use pigment::{Color, InvalidColorError};

fn main() -> Result<(), InvalidColorError> {
    let from = Color::parse("navy")?;
    let to = Color::parse("gold")?;

    for step in 0..=10 {
        let t = f64::from(step) / 10.0;
        println!("{t:.1}  {}", from.combine(&to, t)?);
    }
    Ok(())
}
