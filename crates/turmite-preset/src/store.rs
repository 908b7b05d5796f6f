//! Named preset storage.
//!
//! [`ConfigStore`] is the port a persistence backend implements.
//! [`MemoryStore`] keeps presets in insertion order and is what a
//! headless [`Session`](crate::Session) uses by default.

use indexmap::IndexMap;
use log::debug;

use crate::error::PresetError;
use crate::preset::Preset;

/// Save, load, list and delete [`Preset`]s by name.
///
/// Saving under an existing name replaces the stored preset. Stores do
/// not validate what they hold; callers validate on load.
pub trait ConfigStore {
    /// Store `preset` under `name`, replacing any previous entry.
    fn save(&mut self, name: &str, preset: Preset) -> Result<(), PresetError>;

    /// Fetch the preset stored under `name`.
    ///
    /// # Errors
    ///
    /// [`PresetError::NotFound`] if there is none.
    fn load(&self, name: &str) -> Result<Preset, PresetError>;

    /// Names of all stored presets.
    fn list(&self) -> Result<Vec<String>, PresetError>;

    /// Remove the preset stored under `name`.
    ///
    /// # Errors
    ///
    /// [`PresetError::NotFound`] if there is none.
    fn delete(&mut self, name: &str) -> Result<(), PresetError>;
}

/// In-memory [`ConfigStore`]. `list()` returns names in the order they
/// were first saved.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    presets: IndexMap<String, Preset>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored presets.
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, Preset)> for MemoryStore {
    fn from_iter<T: IntoIterator<Item = (N, Preset)>>(iter: T) -> Self {
        Self {
            presets: iter.into_iter().map(|(n, p)| (n.into(), p)).collect(),
        }
    }
}

impl ConfigStore for MemoryStore {
    fn save(&mut self, name: &str, preset: Preset) -> Result<(), PresetError> {
        if self.presets.insert(name.to_owned(), preset).is_some() {
            debug!("preset {name:?} overwritten");
        }
        Ok(())
    }

    fn load(&self, name: &str) -> Result<Preset, PresetError> {
        self.presets
            .get(name)
            .cloned()
            .ok_or_else(|| PresetError::NotFound {
                name: name.to_owned(),
            })
    }

    fn list(&self) -> Result<Vec<String>, PresetError> {
        Ok(self.presets.keys().cloned().collect())
    }

    fn delete(&mut self, name: &str) -> Result<(), PresetError> {
        self.presets
            .shift_remove(name)
            .map(|_| ())
            .ok_or_else(|| PresetError::NotFound {
                name: name.to_owned(),
            })
    }
}
