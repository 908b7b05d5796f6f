//! Presets, palette import, and the operator session for Turmite.
//!
//! The stepping engine only ever sees a validated
//! [`RunConfig`](turmite_engine::RunConfig). This crate owns everything
//! an operator touches before that point:
//!
//! - [`Preset`]: a named `(rules, colors)` pair kept as raw strings
//! - [`ConfigStore`]: save/load/list/delete presets by name, with the
//!   in-memory [`MemoryStore`]
//! - [`PaletteSource`]: fetch a palette by identifier, with the
//!   in-memory [`StaticPaletteSource`] catalogue
//! - [`Session`]: the current rules, palette, size and frame budget,
//!   changed only through all-or-nothing setters
//!
//! Persistence and network fetching are left to implementors of the two
//! traits.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod import;
pub mod preset;
pub mod session;
pub mod store;

pub use error::{FetchError, ImportError, PresetError};
pub use import::{import_palette, normalize_entries, PaletteSource, StaticPaletteSource};
pub use preset::Preset;
pub use session::{Session, SessionWarning};
pub use store::{ConfigStore, MemoryStore};
