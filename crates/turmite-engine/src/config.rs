//! Run configuration, validation, and error types.
//!
//! [`RunConfig`] is the immutable input for one run. [`validate()`](RunConfig::validate)
//! checks every structural invariant up front so that a misconfigured run
//! is refused before the first step instead of failing part-way through.

use std::error::Error;
use std::fmt;

use turmite_core::{ColorPalette, Heading, PaletteError, Position, RuleError, RuleTable};
use turmite_space::{Grid2D, SpaceError};

// ── RuleCoverage ───────────────────────────────────────────────────

/// Policy for palettes with more colors than the rule table has entries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RuleCoverage {
    /// Refuse the configuration with [`ConfigError::UnruledColors`].
    #[default]
    Strict,
    /// Colors without a rule keep the agent's heading.
    Straight,
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while building or validating a [`RunConfig`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The palette is empty, malformed, or has duplicates.
    Palette(PaletteError),
    /// The rule string is empty or has a symbol other than `L`/`R`.
    Rules(RuleError),
    /// Grid dimensions are zero or too large.
    Space(SpaceError),
    /// `steps_per_frame` is zero.
    ZeroSteps,
    /// The start position is outside the grid.
    OriginOutOfBounds {
        /// The configured origin.
        origin: Position,
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
    },
    /// The palette has colors the rule table does not cover, under
    /// [`RuleCoverage::Strict`].
    UnruledColors {
        /// Rule table length.
        rules: usize,
        /// Palette length.
        colors: usize,
    },
    /// The grid handed to the runner does not match the configured size.
    GridSizeMismatch {
        /// Configured `(width, height)`.
        expected: (u32, u32),
        /// The grid's `(width, height)`.
        actual: (u32, u32),
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Palette(e) => write!(f, "palette: {e}"),
            Self::Rules(e) => write!(f, "rules: {e}"),
            Self::Space(e) => write!(f, "grid: {e}"),
            Self::ZeroSteps => write!(f, "steps_per_frame must be at least 1"),
            Self::OriginOutOfBounds {
                origin,
                width,
                height,
            } => write!(f, "origin {origin} is outside the {width}x{height} grid"),
            Self::UnruledColors { rules, colors } => write!(
                f,
                "{colors} colors but only {rules} rules; add rules or allow straight moves"
            ),
            Self::GridSizeMismatch { expected, actual } => write!(
                f,
                "grid is {}x{}, configuration expects {}x{}",
                actual.0, actual.1, expected.0, expected.1
            ),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Palette(e) => Some(e),
            Self::Rules(e) => Some(e),
            Self::Space(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PaletteError> for ConfigError {
    fn from(e: PaletteError) -> Self {
        Self::Palette(e)
    }
}

impl From<RuleError> for ConfigError {
    fn from(e: RuleError) -> Self {
        Self::Rules(e)
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

// ── RunConfig ──────────────────────────────────────────────────────

/// Complete configuration for one run.
///
/// Immutable once handed to the runner; a changed setting means a new run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    /// Grid width in cells.
    pub width: u32,
    /// Grid height in cells.
    pub height: u32,
    /// Upper bound on steps per [`advance_frame`](crate::SimulationRunner::advance_frame).
    /// Default: 1000. Minimum: 1.
    pub steps_per_frame: u32,
    /// Turn per palette index.
    pub rules: RuleTable,
    /// Color cycle; index 0 is the background.
    pub palette: ColorPalette,
    /// Start position. `None` = grid centre `(width / 2, height / 2)`.
    pub origin: Option<Position>,
    /// Start heading. Default: north.
    pub heading: Heading,
    /// What to do with colors that have no rule.
    pub coverage: RuleCoverage,
}

impl RunConfig {
    /// Steps per frame used when none is given.
    pub const DEFAULT_STEPS_PER_FRAME: u32 = 1000;

    /// A config with default origin, heading, coverage and frame size.
    ///
    /// Not validated; the runner calls [`validate()`](Self::validate).
    pub fn new(width: u32, height: u32, rules: RuleTable, palette: ColorPalette) -> Self {
        Self {
            width,
            height,
            steps_per_frame: Self::DEFAULT_STEPS_PER_FRAME,
            rules,
            palette,
            origin: None,
            heading: Heading::North,
            coverage: RuleCoverage::Strict,
        }
    }

    /// Build and validate a config from operator-facing strings.
    ///
    /// `rules` is a string over `{L, R}`; `colors` are `#rrggbb` strings.
    pub fn parse<S: AsRef<str>>(
        width: u32,
        height: u32,
        rules: &str,
        colors: &[S],
        steps_per_frame: u32,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            steps_per_frame,
            ..Self::new(
                width,
                height,
                RuleTable::parse(rules)?,
                ColorPalette::parse(colors)?,
            )
        };
        config.validate()?;
        Ok(config)
    }

    /// The start position, resolving `None` to the grid centre.
    pub fn origin(&self) -> Position {
        self.origin.unwrap_or(Position::new(
            i64::from(self.width / 2),
            i64::from(self.height / 2),
        ))
    }

    /// The rule table the runner steps with: padded with straight moves
    /// under [`RuleCoverage::Straight`], unchanged otherwise.
    pub fn effective_rules(&self) -> RuleTable {
        match self.coverage {
            RuleCoverage::Strict => self.rules.clone(),
            RuleCoverage::Straight => self.rules.padded_to(self.palette.len()),
        }
    }

    /// Whether the rule table has entries no palette index can reach.
    pub fn has_unreachable_rules(&self) -> bool {
        self.rules.len() > self.palette.len()
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Grid dimensions must be non-zero and fit in i32. The dense
        //    cell limit is the backend's to enforce.
        Grid2D::check_extent(self.width, self.height)?;
        // 2. At least one step per frame.
        if self.steps_per_frame == 0 {
            return Err(ConfigError::ZeroSteps);
        }
        // 3. Origin inside the grid.
        let origin = self.origin();
        if origin.x < 0
            || origin.y < 0
            || origin.x >= i64::from(self.width)
            || origin.y >= i64::from(self.height)
        {
            return Err(ConfigError::OriginOutOfBounds {
                origin,
                width: self.width,
                height: self.height,
            });
        }
        // 4. Every color reachable by the cycle needs a rule.
        if self.coverage == RuleCoverage::Strict && self.rules.len() < self.palette.len() {
            return Err(ConfigError::UnruledColors {
                rules: self.rules.len(),
                colors: self.palette.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use turmite_core::Color;

    fn langton(width: u32, height: u32) -> RunConfig {
        RunConfig::new(
            width,
            height,
            RuleTable::parse("RL").unwrap(),
            ColorPalette::new([Color::WHITE, Color::BLACK]).unwrap(),
        )
    }

    #[test]
    fn defaults_validate() {
        let c = langton(100, 80);
        assert!(c.validate().is_ok());
        assert_eq!(c.steps_per_frame, 1000);
        assert_eq!(c.heading, Heading::North);
        assert_eq!(c.origin(), Position::new(50, 40));
    }

    #[test]
    fn odd_sizes_centre_rounds_down() {
        assert_eq!(langton(3, 3).origin(), Position::new(1, 1));
        assert_eq!(langton(1, 1).origin(), Position::new(0, 0));
    }

    #[test]
    fn zero_dimension_rejected() {
        assert_eq!(
            langton(0, 10).validate(),
            Err(ConfigError::Space(SpaceError::EmptySpace))
        );
        assert_eq!(
            langton(10, 0).validate(),
            Err(ConfigError::Space(SpaceError::EmptySpace))
        );
    }

    #[test]
    fn oversized_dimension_rejected() {
        let c = langton(i32::MAX as u32 + 1, 4);
        assert!(matches!(
            c.validate(),
            Err(ConfigError::Space(SpaceError::DimensionTooLarge { name: "width", .. }))
        ));
    }

    #[test]
    fn zero_steps_rejected() {
        let c = RunConfig {
            steps_per_frame: 0,
            ..langton(10, 10)
        };
        assert_eq!(c.validate(), Err(ConfigError::ZeroSteps));
    }

    #[test]
    fn origin_outside_rejected() {
        let c = RunConfig {
            origin: Some(Position::new(10, 0)),
            ..langton(10, 10)
        };
        assert!(matches!(
            c.validate(),
            Err(ConfigError::OriginOutOfBounds { .. })
        ));
        let c = RunConfig {
            origin: Some(Position::new(0, -1)),
            ..langton(10, 10)
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn strict_coverage_rejects_short_rules() {
        let c = RunConfig::new(
            8,
            8,
            RuleTable::parse("RL").unwrap(),
            ColorPalette::parse(&["#ffffff", "#000000", "#ff0000"]).unwrap(),
        );
        assert_eq!(
            c.validate(),
            Err(ConfigError::UnruledColors {
                rules: 2,
                colors: 3
            })
        );
    }

    #[test]
    fn straight_coverage_pads_rules() {
        let c = RunConfig {
            coverage: RuleCoverage::Straight,
            ..RunConfig::new(
                8,
                8,
                RuleTable::parse("RL").unwrap(),
                ColorPalette::parse(&["#ffffff", "#000000", "#ff0000"]).unwrap(),
            )
        };
        assert!(c.validate().is_ok());
        assert_eq!(c.effective_rules().to_string(), "RLS");
        assert_eq!(c.rules.to_string(), "RL");
    }

    #[test]
    fn long_rules_are_valid_but_flagged() {
        let c = RunConfig::new(
            8,
            8,
            RuleTable::parse("RRLRL").unwrap(),
            ColorPalette::new([Color::WHITE, Color::BLACK]).unwrap(),
        );
        assert!(c.validate().is_ok());
        assert!(c.has_unreachable_rules());
        assert!(!langton(8, 8).has_unreachable_rules());
    }

    #[test]
    fn parse_surfaces_field_errors() {
        assert!(matches!(
            RunConfig::parse(10, 10, "RLQ", &["#ffffff", "#000000"], 10),
            Err(ConfigError::Rules(RuleError::InvalidRuleSymbol { symbol: 'Q', .. }))
        ));
        assert!(matches!(
            RunConfig::parse(10, 10, "RL", &["#ffffff", "black"], 10),
            Err(ConfigError::Palette(PaletteError::InvalidColorEncoding { index: 1, .. }))
        ));
        assert_eq!(
            RunConfig::parse::<&str>(10, 10, "RL", &[], 10),
            Err(ConfigError::Palette(PaletteError::Empty))
        );
        let ok = RunConfig::parse(10, 10, "rl", &["#FFFFFF", "#000000"], 7).unwrap();
        assert_eq!(ok.steps_per_frame, 7);
        assert_eq!(ok.rules.to_string(), "RL");
    }

    #[test]
    fn errors_chain_sources() {
        let e = ConfigError::from(RuleError::Empty);
        assert!(e.source().is_some());
        assert!(ConfigError::ZeroSteps.source().is_none());
    }
}
