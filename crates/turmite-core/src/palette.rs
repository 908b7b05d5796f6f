//! Ordered color palettes and the color cycle.

use crate::color::Color;
use crate::error::PaletteError;
use smallvec::{smallvec, SmallVec};

/// Ordered, de-duplicated sequence of colors.
///
/// Index 0 is the background every run starts from. The palette also
/// defines the color cycle: a cell holding `palette[i]` is repainted with
/// [`successor(i)`](ColorPalette::successor) when the agent leaves it.
///
/// Palettes are immutable. Changing colors means building a new palette.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorPalette {
    colors: SmallVec<[Color; 16]>,
}

impl ColorPalette {
    /// Build a palette from colors.
    ///
    /// Returns [`PaletteError::Empty`] for an empty list and
    /// [`PaletteError::DuplicateColor`] if a color repeats.
    pub fn new(colors: impl IntoIterator<Item = Color>) -> Result<Self, PaletteError> {
        let colors: SmallVec<[Color; 16]> = colors.into_iter().collect();
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }
        for (second, color) in colors.iter().enumerate() {
            if let Some(first) = colors[..second].iter().position(|c| c == color) {
                return Err(PaletteError::DuplicateColor {
                    color: *color,
                    first,
                    second,
                });
            }
        }
        Ok(Self { colors })
    }

    /// Parse a list of `#rrggbb` strings.
    ///
    /// Every entry is checked before any duplicate check, so a malformed
    /// string is always reported as [`PaletteError::InvalidColorEncoding`]
    /// with its index.
    pub fn parse<S: AsRef<str>>(inputs: &[S]) -> Result<Self, PaletteError> {
        let colors = inputs
            .iter()
            .enumerate()
            .map(|(index, s)| {
                Color::from_hex(s.as_ref()).map_err(|e| PaletteError::InvalidColorEncoding {
                    index,
                    input: e.input,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(colors)
    }

    /// Number of colors. Always at least 1.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always returns `false`; construction rejects empty palettes.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The color at `index`, if any.
    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    /// The background color (index 0).
    pub fn background(&self) -> Color {
        self.colors[0]
    }

    /// Position of the first entry equal to `color`.
    ///
    /// Linear search. Construction rejects duplicates, so "first" is
    /// also "only".
    pub fn index_of(&self, color: Color) -> Option<usize> {
        self.colors.iter().position(|c| *c == color)
    }

    /// The color that follows `index` in the cycle: `palette[(index + 1) % len]`.
    pub fn successor(&self, index: usize) -> Color {
        self.colors[(index + 1) % self.colors.len()]
    }

    /// Iterate over the colors in order.
    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.colors.iter().copied()
    }

    /// The colors as canonical `#rrggbb` strings.
    pub fn to_hex_strings(&self) -> Vec<String> {
        self.iter().map(Color::to_hex).collect()
    }
}

/// Black on white: `[#ffffff, #000000]`.
impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            colors: smallvec![Color::WHITE, Color::BLACK],
        }
    }
}
