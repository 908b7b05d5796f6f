//! Turmite: a generalized Langton's Ant simulation engine.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Turmite sub-crates. For most users, adding `turmite` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use turmite::prelude::*;
//!
//! let mut session = Session::new();
//! session.set_rules("RLR").unwrap();
//! session.set_colors(&["#ffffff", "#ff0000", "#0000ff"]).unwrap();
//! session.set_size(64, 64).unwrap();
//!
//! let mut runner = session.start().unwrap();
//! let outcome = runner.advance_frame().unwrap();
//! assert!(matches!(outcome, FrameOutcome::Continued { steps: 1000 } | FrameOutcome::Halted { .. }));
//! assert!(runner
//!     .grid()
//!     .cells()
//!     .iter()
//!     .all(|c| session.palette().index_of(*c).is_some()));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `turmite-core` | Colors, palettes, rules, headings, the `Grid` trait |
//! | [`space`] | `turmite-space` | The dense in-memory grid |
//! | [`engine`] | `turmite-engine` | Agent stepping, run configuration, the frame runner |
//! | [`preset`] | `turmite-preset` | Presets, palette import, operator sessions |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and errors (`turmite-core`).
///
/// Contains [`types::Color`], [`types::ColorPalette`], [`types::RuleTable`],
/// [`types::Heading`], and the [`types::Grid`] capability trait.
pub use turmite_core as types;

/// Grid backends (`turmite-space`).
pub use turmite_space as space;

/// Agent stepping and the frame runner (`turmite-engine`).
///
/// [`engine::TurmiteAgent::step`] is the single-step transition;
/// [`engine::SimulationRunner`] batches steps into frames and detects the halt.
pub use turmite_engine as engine;

/// Presets, palette import, and sessions (`turmite-preset`).
pub use turmite_preset as preset;

/// Common imports for typical Turmite usage.
///
/// ```rust
/// use turmite::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use turmite_core::{Color, ColorPalette, Grid, Heading, Position, RuleTable, Turn};

    // Errors
    pub use turmite_core::{PaletteError, RuleError, StepError};
    pub use turmite_engine::{ConfigError, RunError};
    pub use turmite_preset::{FetchError, ImportError, PresetError};

    // Space
    pub use turmite_space::Grid2D;

    // Engine
    pub use turmite_engine::{
        FrameMetrics, FrameOutcome, HaltReason, RuleCoverage, RunConfig, RunState,
        SimulationRunner, TurmiteAgent,
    };

    // Presets and sessions
    pub use turmite_preset::{
        ConfigStore, MemoryStore, PaletteSource, Preset, Session, StaticPaletteSource,
    };
}
