//! The stored form of a turmite: rules and colors as raw strings.

use turmite_core::{ColorPalette, RuleTable};
use turmite_engine::{ConfigError, RunConfig};

/// A named `(rules, colors)` pair as kept by a [`ConfigStore`](crate::ConfigStore).
///
/// Fields hold the operator-facing strings, not parsed values, so a
/// backend can store them verbatim. Nothing guarantees that stored data
/// is still valid; [`validate()`](Self::validate) runs the same checks
/// as operator input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preset {
    /// Rule string over `{L, R}`.
    pub rules: String,
    /// Palette as `#rrggbb` strings, background first.
    pub colors: Vec<String>,
}

impl Preset {
    /// Create a preset from raw strings. Not validated.
    pub fn new<I, S>(rules: impl Into<String>, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rules: rules.into(),
            colors: colors.into_iter().map(Into::into).collect(),
        }
    }

    /// Capture already-validated values in canonical form.
    pub fn from_parts(rules: &RuleTable, palette: &ColorPalette) -> Self {
        Self {
            rules: rules.to_string(),
            colors: palette.to_hex_strings(),
        }
    }

    /// Parse both fields.
    pub fn validate(&self) -> Result<(RuleTable, ColorPalette), ConfigError> {
        let rules = RuleTable::parse(&self.rules)?;
        let palette = ColorPalette::parse(&self.colors)?;
        Ok((rules, palette))
    }

    /// Build a validated [`RunConfig`] for a grid of the given size.
    pub fn to_config(
        &self,
        width: u32,
        height: u32,
        steps_per_frame: u32,
    ) -> Result<RunConfig, ConfigError> {
        RunConfig::parse(width, height, &self.rules, &self.colors, steps_per_frame)
    }
}
