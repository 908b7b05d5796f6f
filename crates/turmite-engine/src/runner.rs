//! Frame-batched simulation runner.
//!
//! [`SimulationRunner`] owns one run: the grid, the agent, and the
//! validated configuration. Each call to
//! [`advance_frame()`](SimulationRunner::advance_frame) performs up to
//! `steps_per_frame` steps and reports whether the run continues, has
//! halted, or has hit a configuration fault.
//!
//! # Ownership model
//!
//! The runner owns its grid and every mutating method takes `&mut self`,
//! so a presentation layer reading [`grid()`](SimulationRunner::grid)
//! can never observe a half-finished frame; the borrow checker enforces
//! the single-writer rule at compile time. The runner is [`Send`] when
//! its grid is.
//!
//! # States
//!
//! `Running → Halted | Faulted`. Initialization happens inside the
//! constructor, so a runner is `Running` from the moment it exists. Both
//! end states are terminal: the grid stays readable but no further steps
//! are taken.

use std::error::Error;
use std::fmt;
use std::time::Instant;

use log::{debug, error, info, warn};
use turmite_core::{Color, Grid, Position, RuleTable, StepError};
use turmite_space::Grid2D;

use crate::agent::{StepOutcome, TurmiteAgent};
use crate::config::{ConfigError, RunConfig};
use crate::metrics::FrameMetrics;

// Compile-time assertion: the in-memory runner can be moved to a worker thread.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<SimulationRunner<Grid2D>>();
    }
};

// ── Outcome types ───────────────────────────────────────────────

/// Why a run stopped normally.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HaltReason {
    /// The agent stepped outside the grid.
    WalkedOffGrid,
    /// The caller requested cancellation between frames.
    Cancelled,
}

impl fmt::Display for HaltReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WalkedOffGrid => write!(f, "walked off the grid"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Result of a successful [`SimulationRunner::advance_frame()`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Every step of the frame ran and the agent is still on the grid.
    Continued {
        /// Steps completed this frame.
        steps: u32,
    },
    /// The run is over; show the final grid and stop advancing.
    Halted {
        /// Why the run ended.
        reason: HaltReason,
        /// Steps completed this frame before the halt (0 once halted).
        steps: u32,
    },
}

impl FrameOutcome {
    /// Whether the run has ended.
    pub fn is_halted(&self) -> bool {
        matches!(self, Self::Halted { .. })
    }

    /// Steps completed in the frame that produced this outcome.
    pub fn steps(&self) -> u32 {
        match *self {
            Self::Continued { steps } | Self::Halted { steps, .. } => steps,
        }
    }
}

/// A configuration fault discovered while stepping.
///
/// Unlike a halt, this means rules, palette and grid contents disagree.
/// The run stops and the fault is reported with the offending value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunError {
    /// A cell holds a color outside the palette.
    UnknownColor {
        /// The unrecognized color.
        color: Color,
        /// Where it was read.
        position: Position,
    },
    /// A palette index has no rule.
    RuleIndexOutOfRange {
        /// The palette index that was looked up.
        index: usize,
        /// Length of the rule table.
        len: usize,
    },
}

impl RunError {
    /// Classify a step failure: `None` for the off-grid halt signal.
    pub fn from_step(err: StepError) -> Option<Self> {
        match err {
            StepError::OffGrid { .. } => None,
            StepError::UnknownColor { color, position } => {
                Some(Self::UnknownColor { color, position })
            }
            StepError::RuleIndexOutOfRange { index, len } => {
                Some(Self::RuleIndexOutOfRange { index, len })
            }
        }
    }
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
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

impl Error for RunError {}

/// Lifecycle state of a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunState {
    /// Frames may be advanced.
    Running,
    /// The run ended normally.
    Halted(HaltReason),
    /// The run stopped on a configuration fault.
    Faulted(RunError),
}

// ── SimulationRunner ────────────────────────────────────────────

/// Drives one turmite run frame by frame.
///
/// Created from a [`RunConfig`] and a grid via [`new()`](SimulationRunner::new),
/// or with a fresh in-memory grid via [`in_memory()`](SimulationRunner::in_memory).
///
/// # Example
///
/// ```
/// use turmite_engine::{RunConfig, SimulationRunner};
///
/// let config = RunConfig::parse(64, 64, "RL", &["#ffffff", "#000000"], 500).unwrap();
/// let mut runner = SimulationRunner::in_memory(config).unwrap();
/// let outcome = runner.run_to_halt(1_000).unwrap();
/// assert!(outcome.is_halted());
/// ```
pub struct SimulationRunner<G: Grid = Grid2D> {
    config: RunConfig,
    rules: RuleTable,
    grid: G,
    agent: TurmiteAgent,
    state: RunState,
    total_steps: u64,
    frames: u64,
    last_metrics: FrameMetrics,
}

impl SimulationRunner<Grid2D> {
    /// Validate `config` and start a run on a newly allocated [`Grid2D`].
    pub fn in_memory(config: RunConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid2D::new(config.width, config.height, config.palette.background())?;
        Self::new(config, grid)
    }
}

impl<G: Grid> SimulationRunner<G> {
    /// Validate `config`, paint `grid` with the background color, and
    /// place the agent at the configured origin.
    ///
    /// # Errors
    ///
    /// Any [`ConfigError`] from [`RunConfig::validate()`], or
    /// [`ConfigError::GridSizeMismatch`] if `grid` is not
    /// `config.width × config.height`. On error nothing is painted.
    pub fn new(config: RunConfig, mut grid: G) -> Result<Self, ConfigError> {
        config.validate()?;
        let actual = (grid.width(), grid.height());
        let expected = (config.width, config.height);
        if actual != expected {
            return Err(ConfigError::GridSizeMismatch { expected, actual });
        }
        if config.has_unreachable_rules() {
            warn!(
                "more rules than colors: {} rules, {} colors; rules past index {} are never used",
                config.rules.len(),
                config.palette.len(),
                config.palette.len() - 1,
            );
        }

        let mut runner = Self {
            rules: config.effective_rules(),
            agent: TurmiteAgent::new(config.origin(), config.heading),
            grid,
            config,
            state: RunState::Running,
            total_steps: 0,
            frames: 0,
            last_metrics: FrameMetrics::default(),
        };
        runner.grid.fill(runner.config.palette.background());
        info!(
            "turmite run started: rules={} colors={} grid={}x{} origin={} steps_per_frame={}",
            runner.config.rules,
            runner.config.palette.len(),
            runner.config.width,
            runner.config.height,
            runner.agent.position(),
            runner.config.steps_per_frame,
        );
        Ok(runner)
    }

    /// Run up to `steps_per_frame` steps.
    ///
    /// Stops early, and for good, when the agent leaves the grid; the step
    /// that carried it off counts toward `steps`. Once halted, every later
    /// call returns the same [`FrameOutcome::Halted`] with `steps: 0`.
    ///
    /// # Errors
    ///
    /// Returns [`RunError`] if the agent lands on a color outside the
    /// palette or on a color without a rule. The runner becomes
    /// [`RunState::Faulted`] and every later call returns the same error.
    pub fn advance_frame(&mut self) -> Result<FrameOutcome, RunError> {
        match &self.state {
            RunState::Halted(reason) => {
                return Ok(FrameOutcome::Halted {
                    reason: *reason,
                    steps: 0,
                })
            }
            RunState::Faulted(err) => return Err(err.clone()),
            RunState::Running => {}
        }

        let start = Instant::now();
        let budget = self.config.steps_per_frame;
        let mut steps = 0u32;
        let mut halted = false;
        let mut fault = None;

        while steps < budget {
            match self
                .agent
                .step(&mut self.grid, &self.config.palette, &self.rules)
            {
                Ok(StepOutcome::Continued) => {
                    steps += 1;
                    if !self.grid.contains(self.agent.position()) {
                        halted = true;
                        break;
                    }
                }
                Err(err) => {
                    match RunError::from_step(err) {
                        None => halted = true,
                        Some(run_err) => fault = Some(run_err),
                    }
                    break;
                }
            }
        }

        self.total_steps += u64::from(steps);
        self.frames += 1;
        self.last_metrics = FrameMetrics {
            total_us: u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX),
            steps,
            cells_painted: if self.config.palette.len() > 1 { steps } else { 0 },
            total_steps: self.total_steps,
            frame_index: self.frames,
        };

        if let Some(err) = fault {
            error!(
                "turmite run faulted after {} steps: {err}",
                self.total_steps
            );
            self.state = RunState::Faulted(err.clone());
            return Err(err);
        }
        if halted {
            info!(
                "turmite halted after {} steps: agent left the grid at {}",
                self.total_steps,
                self.agent.position(),
            );
            self.state = RunState::Halted(HaltReason::WalkedOffGrid);
            return Ok(FrameOutcome::Halted {
                reason: HaltReason::WalkedOffGrid,
                steps,
            });
        }
        Ok(FrameOutcome::Continued { steps })
    }

    /// Advance frames until the run halts or `max_frames` frames have run.
    ///
    /// Returns the last frame's outcome, which is
    /// [`FrameOutcome::Continued`] if the frame limit was reached first.
    pub fn run_to_halt(&mut self, max_frames: u64) -> Result<FrameOutcome, RunError> {
        let mut outcome = FrameOutcome::Continued { steps: 0 };
        for _ in 0..max_frames {
            outcome = self.advance_frame()?;
            if outcome.is_halted() {
                break;
            }
        }
        Ok(outcome)
    }

    /// Stop a running run. Takes effect before the next frame.
    ///
    /// No effect on a run that has already halted or faulted.
    pub fn cancel(&mut self) {
        if self.state == RunState::Running {
            debug!("turmite run cancelled after {} steps", self.total_steps);
            self.state = RunState::Halted(HaltReason::Cancelled);
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> &RunState {
        &self.state
    }

    /// Whether frames can still be advanced.
    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// The grid as painted so far.
    pub fn grid(&self) -> &G {
        &self.grid
    }

    /// The agent's current position and heading.
    pub fn agent(&self) -> &TurmiteAgent {
        &self.agent
    }

    /// The configuration this run was started with.
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Steps completed since the run started.
    pub fn total_steps(&self) -> u64 {
        self.total_steps
    }

    /// Metrics from the most recent frame.
    pub fn last_metrics(&self) -> &FrameMetrics {
        &self.last_metrics
    }

    /// End the run and hand back the grid.
    pub fn into_grid(self) -> G {
        self.grid
    }
}

impl<G: Grid> fmt::Debug for SimulationRunner<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimulationRunner")
            .field("state", &self.state)
            .field("agent", &self.agent)
            .field("total_steps", &self.total_steps)
            .field("frames", &self.frames)
            .finish()
    }
}
