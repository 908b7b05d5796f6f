//! Benchmark profiles for the Turmite stepping engine.
//!
//! Provides pre-built [`RunConfig`] profiles for benchmarks and examples:
//!
//! - [`reference_profile`]: 256x256 classic ant, 1000 steps per frame
//! - [`stress_profile`]: 1024x1024 four-color `LLRR`, 10K steps per frame
//! - [`four_color_palette`]: the palette [`stress_profile`] paints with

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use turmite_core::{Color, ColorPalette, PaletteError, RuleTable};
use turmite_engine::{ConfigError, RunConfig};

/// Classic `RL` ant on a 256x256 grid (64K cells).
///
/// Halts when the highway, which appears after about 10K steps, reaches
/// an edge.
pub fn reference_profile() -> RunConfig {
    RunConfig::new(256, 256, RuleTable::default(), ColorPalette::default())
}

/// Four-color `LLRR` on a 1024x1024 grid (~1M cells).
///
/// `LLRR` grows a symmetric, bounded-looking blob and keeps the agent on
/// the grid far longer than the classic ant, so frames stay full.
pub fn stress_profile() -> Result<RunConfig, ConfigError> {
    Ok(RunConfig {
        steps_per_frame: 10_000,
        ..RunConfig::new(1024, 1024, RuleTable::parse("LLRR")?, four_color_palette()?)
    })
}

/// White, red, green, blue.
pub fn four_color_palette() -> Result<ColorPalette, PaletteError> {
    ColorPalette::new([
        Color::WHITE,
        Color::rgb(0xff, 0x00, 0x00),
        Color::rgb(0x00, 0xff, 0x00),
        Color::rgb(0x00, 0x00, 0xff),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_profile_validates() {
        let config = reference_profile();
        config.validate().unwrap();
        assert_eq!(config.rules.to_string(), "RL");
    }

    #[test]
    fn stress_profile_validates() {
        let config = stress_profile().unwrap();
        config.validate().unwrap();
        assert_eq!(config.rules.to_string(), "LLRR");
        assert_eq!(config.palette.len(), 4);
    }
}
