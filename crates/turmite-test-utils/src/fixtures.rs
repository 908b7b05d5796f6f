//! Reusable palettes, rule tables, and grid seeding.
//!
//! - [`black_white`]: the classic two-color palette, white background.
//! - [`langton`]: the `RL` rule table.
//! - [`scatter`]: deterministic pseudo-random paint for non-blank starts.

use turmite_core::{Color, ColorPalette, Grid, Position, RuleTable};

/// `[#ffffff, #000000]`.
pub fn black_white() -> ColorPalette {
    ColorPalette::new([Color::WHITE, Color::BLACK]).expect("two distinct colors")
}

/// The classic Langton's Ant rules, `RL`.
pub fn langton() -> RuleTable {
    RuleTable::parse("RL").expect("valid rule string")
}

/// A palette of `n` distinct grays, darkest last.
pub fn grays(n: u8) -> ColorPalette {
    let n = n.max(1);
    let step = 255 / u16::from(n);
    ColorPalette::new((0..n).map(|i| {
        let v = (255 - u16::from(i) * step) as u8;
        Color::rgb(v, v, v)
    }))
    .expect("distinct grays")
}

/// Paint every cell of `grid` with a palette color chosen by a hash of
/// `(seed, x, y)`. Same seed, same picture.
pub fn scatter<G: Grid + ?Sized>(grid: &mut G, palette: &ColorPalette, seed: u64) {
    let n = palette.len() as u64;
    for y in 0..i64::from(grid.height()) {
        for x in 0..i64::from(grid.width()) {
            let h = seed
                .wrapping_mul(6364136223846793005)
                .wrapping_add((x as u64).wrapping_mul(1442695040888963407))
                .wrapping_add((y as u64).wrapping_mul(2862933555777941757));
            let pick = ((h >> 33) % n) as usize;
            if let Some(color) = palette.get(pick) {
                let _ = grid.write(Position::new(x, y), color);
            }
        }
    }
}
