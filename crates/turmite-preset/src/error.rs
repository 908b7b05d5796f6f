//! Error types for preset storage and palette import.

use std::error::Error;
use std::fmt;

use turmite_core::PaletteError;
use turmite_engine::ConfigError;

/// Errors from a [`ConfigStore`](crate::ConfigStore) or from applying a
/// stored preset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PresetError {
    /// No preset is stored under this name.
    NotFound {
        /// The name that was looked up.
        name: String,
    },
    /// The stored preset does not pass validation.
    Invalid(ConfigError),
    /// The storage backend failed.
    Backend {
        /// Human-readable description from the backend.
        reason: String,
    },
}

impl fmt::Display for PresetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { name } => write!(f, "no preset named {name:?}"),
            Self::Invalid(e) => write!(f, "invalid preset: {e}"),
            Self::Backend { reason } => write!(f, "preset store failed: {reason}"),
        }
    }
}

impl Error for PresetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for PresetError {
    fn from(e: ConfigError) -> Self {
        Self::Invalid(e)
    }
}

/// Errors reported by a [`PaletteSource`](crate::PaletteSource).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchError {
    /// The source has no palette with this identifier.
    NotFound {
        /// The identifier that was requested.
        id: String,
    },
    /// The source could not be reached or returned garbage.
    Unavailable {
        /// Human-readable description from the source.
        reason: String,
    },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { id } => write!(f, "palette {id:?} does not exist"),
            Self::Unavailable { reason } => write!(f, "palette source unavailable: {reason}"),
        }
    }
}

impl Error for FetchError {}

/// Errors from importing a palette into a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImportError {
    /// The source failed to produce a palette.
    Fetch(FetchError),
    /// The fetched entries are not a valid palette.
    Palette(PaletteError),
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch(e) => write!(f, "palette import failed: {e}"),
            Self::Palette(e) => write!(f, "imported palette rejected: {e}"),
        }
    }
}

impl Error for ImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Fetch(e) => Some(e),
            Self::Palette(e) => Some(e),
        }
    }
}

impl From<FetchError> for ImportError {
    fn from(e: FetchError) -> Self {
        Self::Fetch(e)
    }
}

impl From<PaletteError> for ImportError {
    fn from(e: PaletteError) -> Self {
        Self::Palette(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_preset_chains_config_error() {
        let e = PresetError::from(ConfigError::ZeroSteps);
        assert_eq!(e, PresetError::Invalid(ConfigError::ZeroSteps));
        assert!(e.source().is_some());
        assert!(PresetError::NotFound { name: "x".into() }.source().is_none());
    }

    #[test]
    fn display_names_the_missing_thing() {
        let e = PresetError::NotFound {
            name: "scary fractal".into(),
        };
        assert_eq!(e.to_string(), "no preset named \"scary fractal\"");
        let e = FetchError::NotFound { id: "nope".into() };
        assert!(e.to_string().contains("nope"));
    }

    #[test]
    fn import_error_wraps_both_sides() {
        let fetch: ImportError = FetchError::Unavailable {
            reason: "offline".into(),
        }
        .into();
        assert!(fetch.source().is_some());
        let palette: ImportError = PaletteError::Empty.into();
        assert_eq!(palette, ImportError::Palette(PaletteError::Empty));
    }
}
