//! Grid storage for Turmite simulations.
//!
//! The engine reaches cells only through the [`turmite_core::Grid`] trait.
//! This crate provides [`Grid2D`], a dense row-major backend that lets
//! runs execute headless (tests, benchmarks, batch jobs) without any
//! presentation surface behind them.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid2d;

pub use error::SpaceError;
pub use grid2d::Grid2D;
