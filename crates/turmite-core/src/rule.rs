//! Turn instructions and the per-color rule table.

use crate::error::{RuleError, StepError};
use crate::heading::Heading;
use smallvec::{smallvec, SmallVec};
use std::fmt;
use std::str::FromStr;

/// What the agent does on a cell of a given color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Turn {
    /// Quarter turn counter-clockwise (`L`).
    Left,
    /// Quarter turn clockwise (`R`).
    Right,
    /// Keep the current heading. Never parsed from a rule string; only
    /// produced by [`RuleTable::padded_to`].
    Straight,
}

impl Turn {
    /// Apply this turn to `heading`.
    pub fn apply(self, heading: Heading) -> Heading {
        match self {
            Turn::Left => heading.rotate_left(),
            Turn::Right => heading.rotate_right(),
            Turn::Straight => heading,
        }
    }

    fn symbol(self) -> char {
        match self {
            Turn::Left => 'L',
            Turn::Right => 'R',
            Turn::Straight => 'S',
        }
    }
}

/// One [`Turn`] per palette index.
///
/// Parsed from a string over `{L, R}` (either case): `"RL"` is the classic
/// Langton's Ant. The table length does not have to match the palette;
/// see [`turn_for`](RuleTable::turn_for) for what happens when it is short.
///
/// # Examples
///
/// ```
/// use turmite_core::{RuleTable, Turn};
///
/// let rules: RuleTable = "rl".parse().unwrap();
/// assert_eq!(rules.turn_for(0), Ok(Turn::Right));
/// assert_eq!(rules.to_string(), "RL");
/// assert!(rules.turn_for(2).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleTable {
    turns: SmallVec<[Turn; 16]>,
}

impl RuleTable {
    /// Parse a rule string.
    ///
    /// Returns [`RuleError::Empty`] for `""` and
    /// [`RuleError::InvalidRuleSymbol`] for the first character that is not
    /// `L`/`R` (case-insensitive).
    pub fn parse(rules: &str) -> Result<Self, RuleError> {
        let turns = rules
            .chars()
            .enumerate()
            .map(|(position, symbol)| match symbol.to_ascii_uppercase() {
                'L' => Ok(Turn::Left),
                'R' => Ok(Turn::Right),
                _ => Err(RuleError::InvalidRuleSymbol { position, symbol }),
            })
            .collect::<Result<SmallVec<[Turn; 16]>, _>>()?;
        if turns.is_empty() {
            return Err(RuleError::Empty);
        }
        Ok(Self { turns })
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Always returns `false`; parsing rejects empty rule strings.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The turn for palette index `index`.
    ///
    /// Fails with [`StepError::RuleIndexOutOfRange`] when `index >= len()`.
    pub fn turn_for(&self, index: usize) -> Result<Turn, StepError> {
        self.turns
            .get(index)
            .copied()
            .ok_or(StepError::RuleIndexOutOfRange {
                index,
                len: self.turns.len(),
            })
    }

    /// A copy extended with [`Turn::Straight`] up to `len` entries.
    ///
    /// Tables already at least `len` long are returned unchanged.
    pub fn padded_to(&self, len: usize) -> Self {
        let mut turns = self.turns.clone();
        if turns.len() < len {
            turns.resize(len, Turn::Straight);
        }
        Self { turns }
    }

    /// Iterate over the turns in index order.
    pub fn iter(&self) -> impl Iterator<Item = Turn> + '_ {
        self.turns.iter().copied()
    }
}

/// The classic Langton's Ant, `RL`.
impl Default for RuleTable {
    fn default() -> Self {
        Self {
            turns: smallvec![Turn::Right, Turn::Left],
        }
    }
}

impl fmt::Display for RuleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.turns.iter().try_for_each(|t| write!(f, "{}", t.symbol()))
    }
}

impl FromStr for RuleTable {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
