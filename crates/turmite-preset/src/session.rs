//! Operator session: the settings the next run will start from.
//!
//! A [`Session`] holds the current rules, palette, grid size, frame
//! budget and rule coverage, plus a [`ConfigStore`] of named presets. Every setter parses
//! and validates its input completely before assigning anything, so a
//! rejected change leaves the session exactly as it was.
//!
//! Rules and palette are validated independently. Whether they fit
//! together is only checked when a run is built from them, see
//! [`run_config()`](Session::run_config).

use std::fmt;

use log::{debug, warn};
use turmite_core::{ColorPalette, RuleTable};
use turmite_engine::{ConfigError, RuleCoverage, RunConfig, SimulationRunner};
use turmite_space::Grid2D;

use crate::error::{ImportError, PresetError};
use crate::import::{import_palette, normalize_entries, PaletteSource};
use crate::preset::Preset;
use crate::store::{ConfigStore, MemoryStore};

/// Advisory condition that does not block a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionWarning {
    /// The rule table is longer than the palette; the extra rules are
    /// never consulted.
    MoreRulesThanColors {
        /// Rule table length.
        rules: usize,
        /// Palette length.
        colors: usize,
    },
    /// The palette is longer than the rule table. Runs fail unless
    /// coverage is [`RuleCoverage::Straight`].
    FewerRulesThanColors {
        /// Rule table length.
        rules: usize,
        /// Palette length.
        colors: usize,
    },
}

impl fmt::Display for SessionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MoreRulesThanColors { rules, colors } => write!(
                f,
                "more rules than colors: there are currently {rules} rules and only {colors} colors"
            ),
            Self::FewerRulesThanColors { rules, colors } => write!(
                f,
                "fewer rules than colors: there are currently {rules} rules and {colors} colors"
            ),
        }
    }
}

/// Current operator settings and preset store.
#[derive(Clone, Debug)]
pub struct Session<S: ConfigStore = MemoryStore> {
    rules: RuleTable,
    palette: ColorPalette,
    width: u32,
    height: u32,
    steps_per_frame: u32,
    coverage: RuleCoverage,
    store: S,
}

impl Session<MemoryStore> {
    /// A session with default settings and an empty in-memory store.
    pub fn new() -> Self {
        Self::with_store(MemoryStore::new())
    }
}

impl Default for Session<MemoryStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ConfigStore> Session<S> {
    /// Rules a fresh session starts with.
    pub const DEFAULT_RULES: &'static str = "RL";
    /// Colors a fresh session starts with.
    pub const DEFAULT_COLORS: [&'static str; 2] = ["#ffffff", "#000000"];
    /// Grid width and height a fresh session starts with.
    pub const DEFAULT_SIZE: (u32, u32) = (1000, 1000);

    /// A session with default settings backed by `store`.
    pub fn with_store(store: S) -> Self {
        Self {
            rules: RuleTable::default(),
            palette: ColorPalette::default(),
            width: Self::DEFAULT_SIZE.0,
            height: Self::DEFAULT_SIZE.1,
            steps_per_frame: RunConfig::DEFAULT_STEPS_PER_FRAME,
            coverage: RuleCoverage::Strict,
            store,
        }
    }

    // ── Accessors ────────────────────────────────────────────────

    /// Current rule table.
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Current palette.
    pub fn palette(&self) -> &ColorPalette {
        &self.palette
    }

    /// Current grid `(width, height)`.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Current steps per frame.
    pub fn steps_per_frame(&self) -> u32 {
        self.steps_per_frame
    }

    /// How colors past the end of the rule table are handled.
    pub fn coverage(&self) -> RuleCoverage {
        self.coverage
    }

    /// The preset store.
    pub fn store(&self) -> &S {
        &self.store
    }

    // ── Setters ──────────────────────────────────────────────────

    /// Replace the rules with a parsed `{L, R}` string.
    pub fn set_rules(&mut self, rules: &str) -> Result<(), ConfigError> {
        self.rules = RuleTable::parse(rules)?;
        self.log_warnings();
        Ok(())
    }

    /// Replace the palette with parsed `rrggbb` strings. The leading `#`
    /// is optional and case is ignored.
    pub fn set_colors<T: AsRef<str>>(&mut self, colors: &[T]) -> Result<(), ConfigError> {
        self.palette = ColorPalette::parse(&normalize_entries(colors))?;
        self.log_warnings();
        Ok(())
    }

    /// Resize the grid the next run uses.
    pub fn set_size(&mut self, width: u32, height: u32) -> Result<(), ConfigError> {
        Grid2D::check_dimensions(width, height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Set how many steps each frame advances.
    pub fn set_steps(&mut self, steps_per_frame: u32) -> Result<(), ConfigError> {
        if steps_per_frame == 0 {
            return Err(ConfigError::ZeroSteps);
        }
        self.steps_per_frame = steps_per_frame;
        Ok(())
    }

    /// Set rules and size together. Nothing changes unless both are valid.
    pub fn new_simulation(
        &mut self,
        rules: &str,
        width: u32,
        height: u32,
    ) -> Result<(), ConfigError> {
        let parsed = RuleTable::parse(rules)?;
        Grid2D::check_dimensions(width, height)?;
        self.rules = parsed;
        self.width = width;
        self.height = height;
        self.log_warnings();
        Ok(())
    }

    /// Choose how colors without a rule are handled by the next run.
    pub fn set_coverage(&mut self, coverage: RuleCoverage) {
        self.coverage = coverage;
    }

    /// Replace the palette with one fetched from `source`.
    ///
    /// On any failure the current palette is kept.
    pub fn import_palette<P: PaletteSource + ?Sized>(
        &mut self,
        source: &P,
        id: &str,
    ) -> Result<(), ImportError> {
        self.palette = import_palette(source, id)?;
        self.log_warnings();
        Ok(())
    }

    // ── Presets ──────────────────────────────────────────────────

    /// Store the current rules and colors under `name`.
    pub fn save(&mut self, name: &str) -> Result<(), PresetError> {
        self.store
            .save(name, Preset::from_parts(&self.rules, &self.palette))?;
        debug!("saved preset {name:?}");
        Ok(())
    }

    /// Replace rules and colors with the preset stored under `name`.
    ///
    /// # Errors
    ///
    /// [`PresetError::NotFound`] if there is none, and
    /// [`PresetError::Invalid`] if the stored strings no longer parse.
    /// Either way the session is unchanged.
    pub fn load(&mut self, name: &str) -> Result<(), PresetError> {
        let (rules, palette) = self.store.load(name)?.validate()?;
        self.rules = rules;
        self.palette = palette;
        debug!("loaded preset {name:?}");
        self.log_warnings();
        Ok(())
    }

    /// Names of the stored presets.
    pub fn list(&self) -> Result<Vec<String>, PresetError> {
        self.store.list()
    }

    /// Remove the preset stored under `name`.
    pub fn delete(&mut self, name: &str) -> Result<(), PresetError> {
        self.store.delete(name)
    }

    // ── Runs ─────────────────────────────────────────────────────

    /// Advisory conditions on the current settings.
    pub fn warnings(&self) -> Vec<SessionWarning> {
        let mut out = Vec::new();
        if self.rules.len() > self.palette.len() {
            out.push(SessionWarning::MoreRulesThanColors {
                rules: self.rules.len(),
                colors: self.palette.len(),
            });
        } else if self.rules.len() < self.palette.len() {
            out.push(SessionWarning::FewerRulesThanColors {
                rules: self.rules.len(),
                colors: self.palette.len(),
            });
        }
        out
    }

    /// A validated [`RunConfig`] for the current settings, with the
    /// default origin and heading.
    pub fn run_config(&self) -> Result<RunConfig, ConfigError> {
        let config = RunConfig {
            steps_per_frame: self.steps_per_frame,
            coverage: self.coverage,
            ..RunConfig::new(
                self.width,
                self.height,
                self.rules.clone(),
                self.palette.clone(),
            )
        };
        config.validate()?;
        Ok(config)
    }

    /// Start an in-memory run from the current settings.
    pub fn start(&self) -> Result<SimulationRunner<Grid2D>, ConfigError> {
        SimulationRunner::in_memory(self.run_config()?)
    }

    fn log_warnings(&self) {
        for w in self.warnings() {
            warn!("{w}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_ant() {
        let s = Session::new();
        assert_eq!(s.rules().to_string(), "RL");
        assert_eq!(s.palette().to_hex_strings(), Session::<MemoryStore>::DEFAULT_COLORS);
        assert_eq!(s.size(), (1000, 1000));
        assert_eq!(s.steps_per_frame(), 1000);
        assert_eq!(s.coverage(), RuleCoverage::Strict);
        assert!(s.warnings().is_empty());
        assert!(s.list().unwrap().is_empty());
    }

    #[test]
    fn default_rules_constant_agrees_with_state() {
        let s = Session::new();
        assert_eq!(
            &RuleTable::parse(Session::<MemoryStore>::DEFAULT_RULES).unwrap(),
            s.rules()
        );
    }

    #[test]
    fn size_is_checked_against_the_dense_grid() {
        let mut s = Session::new();
        let max = Grid2D::MAX_DIM;
        assert!(matches!(
            s.set_size(max, max),
            Err(ConfigError::Space(turmite_space::SpaceError::TooManyCells { .. }))
        ));
        assert!(s.new_simulation("RLR", max, 2).is_err());
        assert_eq!(s.size(), Session::<MemoryStore>::DEFAULT_SIZE);
        assert_eq!(s.rules().to_string(), "RL");
    }

    #[test]
    fn warning_text() {
        let w = SessionWarning::MoreRulesThanColors {
            rules: 5,
            colors: 2,
        };
        assert_eq!(
            w.to_string(),
            "more rules than colors: there are currently 5 rules and only 2 colors"
        );
        let w = SessionWarning::FewerRulesThanColors {
            rules: 2,
            colors: 16,
        };
        assert_eq!(
            w.to_string(),
            "fewer rules than colors: there are currently 2 rules and 16 colors"
        );
    }
}
