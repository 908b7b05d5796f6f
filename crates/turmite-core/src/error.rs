//! Error types for palette and rule construction and for stepping.
//!
//! Construction errors ([`PaletteError`], [`RuleError`]) are raised before
//! a run exists. [`StepError`] is raised by a single step and mixes the one
//! expected termination signal ([`StepError::OffGrid`]) with the
//! configuration faults that can only be discovered while walking.

use crate::color::Color;
use crate::heading::Position;
use std::error::Error;
use std::fmt;

/// Errors from [`ColorPalette`](crate::ColorPalette) construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaletteError {
    /// The palette has no colors (`EmptyPalette`).
    Empty,
    /// A supplied string is not a `#rrggbb` color.
    InvalidColorEncoding {
        /// Position of the offending entry in the supplied list.
        index: usize,
        /// The offending entry, verbatim.
        input: String,
    },
    /// The same color appears twice, which would make index lookup ambiguous.
    DuplicateColor {
        /// The repeated color.
        color: Color,
        /// Index of the first occurrence.
        first: usize,
        /// Index of the repeat.
        second: usize,
    },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "palette must contain at least one color"),
            Self::InvalidColorEncoding { index, input } => {
                write!(f, "color {index} ('{input}') is not a #rrggbb color")
            }
            Self::DuplicateColor {
                color,
                first,
                second,
            } => write!(
                f,
                "color {color} appears at both index {first} and index {second}"
            ),
        }
    }
}

impl Error for PaletteError {}

/// Errors from [`RuleTable`](crate::RuleTable) parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleError {
    /// The rule string is empty.
    Empty,
    /// A character other than `L` or `R` (`InvalidRuleSymbol`).
    InvalidRuleSymbol {
        /// Character offset of the symbol in the rule string.
        position: usize,
        /// The rejected symbol.
        symbol: char,
    },
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "rule string must contain at least one symbol"),
            Self::InvalidRuleSymbol { position, symbol } => write!(
                f,
                "rule symbol {symbol:?} at position {position} is not 'L' or 'R'"
            ),
        }
    }
}

impl Error for RuleError {}

/// Errors from a single turmite step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepError {
    /// The agent stands outside the grid. This is the halt signal, not a
    /// fault: see [`is_halt`](StepError::is_halt).
    OffGrid {
        /// Where the agent stood.
        position: Position,
    },
    /// The cell under the agent holds a color the palette does not contain.
    UnknownColor {
        /// The unrecognized color.
        color: Color,
        /// Where it was read.
        position: Position,
    },
    /// The cell's palette index has no entry in the rule table.
    RuleIndexOutOfRange {
        /// The palette index that was looked up.
        index: usize,
        /// Length of the rule table.
        len: usize,
    },
}

impl StepError {
    /// `true` for the expected end of a run, `false` for configuration faults.
    pub fn is_halt(&self) -> bool {
        matches!(self, Self::OffGrid { .. })
    }
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OffGrid { position } => write!(f, "agent at {position} is off the grid"),
            Self::UnknownColor { color, position } => {
                write!(f, "cell {position} holds {color}, which is not in the palette")
            }
            Self::RuleIndexOutOfRange { index, len } => write!(
                f,
                "color index {index} has no rule (rule table has {len} entries)"
            ),
        }
    }
}

impl Error for StepError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_off_grid_is_a_halt() {
        let position = Position::new(-1, 0);
        assert!(StepError::OffGrid { position }.is_halt());
        assert!(!StepError::UnknownColor {
            color: Color::BLACK,
            position,
        }
        .is_halt());
        assert!(!StepError::RuleIndexOutOfRange { index: 3, len: 2 }.is_halt());
    }

    #[test]
    fn messages_name_the_offending_value() {
        let e = PaletteError::InvalidColorEncoding {
            index: 2,
            input: "#zz0000".into(),
        };
        assert!(e.to_string().contains("#zz0000"));

        let e = RuleError::InvalidRuleSymbol {
            position: 4,
            symbol: 'X',
        };
        assert!(e.to_string().contains("'X'"));

        let e = StepError::RuleIndexOutOfRange { index: 3, len: 2 };
        assert!(e.to_string().contains('3'));
    }
}
