//! Simulation engine for Turmite runs.
//!
//! Provides the [`TurmiteAgent`] state machine and its single-step
//! algorithm, the validated [`RunConfig`], and the [`SimulationRunner`]
//! that batches steps into presentation frames and reports whether a run
//! is still going, halted, or faulted.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod agent;
pub mod config;
pub mod metrics;
pub mod runner;

pub use agent::{StepOutcome, TurmiteAgent};
pub use config::{ConfigError, RuleCoverage, RunConfig};
pub use metrics::FrameMetrics;
pub use runner::{FrameOutcome, HaltReason, RunError, RunState, SimulationRunner};
