//! Core types and traits for the Turmite stepping engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the rest of the workspace: colors and
//! palettes, turn rules, headings and positions, the [`Grid`] capability
//! trait, and the error types raised while stepping.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod color;
pub mod error;
pub mod heading;
pub mod palette;
pub mod rule;
pub mod traits;

pub use color::Color;
pub use error::{PaletteError, RuleError, StepError};
pub use heading::{Heading, Position};
pub use palette::ColorPalette;
pub use rule::{RuleTable, Turn};
pub use traits::Grid;
