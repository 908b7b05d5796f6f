//! Palette import from an external catalogue.
//!
//! A [`PaletteSource`] returns entries the way palette sites publish
//! them: bare hex digits, any case. [`normalize_entries`] turns those into
//! canonical `#rrggbb` strings, and [`import_palette`] validates the result
//! exactly like manually entered colors.

use indexmap::IndexMap;
use log::debug;
use turmite_core::ColorPalette;

use crate::error::{FetchError, ImportError};

/// Fetches a palette by identifier.
pub trait PaletteSource {
    /// The palette's entries, background first, in the source's own
    /// encoding.
    ///
    /// # Errors
    ///
    /// [`FetchError::NotFound`] for an unknown identifier,
    /// [`FetchError::Unavailable`] if the source cannot answer.
    fn fetch_palette(&self, id: &str) -> Result<Vec<String>, FetchError>;
}

const PICO_8: &[&str] = &[
    "000000", "1d2b53", "7e2553", "008751", "ab5236", "5f574f", "c2c3c7", "fff1e8", "ff004d",
    "ffa300", "ffec27", "00e436", "29adff", "83769c", "ff77a8", "ffccaa",
];
const NINTENDO_GAMEBOY_BGB: &[&str] = &["e0f8d0", "88c070", "346856", "081820"];
const ONE_BIT_MONITOR_GLOW: &[&str] = &["222323", "f0f6f0"];

/// In-memory palette catalogue.
///
/// [`Default`] ships a few well-known palettes (`pico-8`,
/// `nintendo-gameboy-bgb`, `1bit-monitor-glow`); [`empty()`](Self::empty)
/// starts blank. Entries are stored unnormalized, like a remote source
/// would return them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticPaletteSource {
    palettes: IndexMap<String, Vec<String>>,
}

impl StaticPaletteSource {
    /// A catalogue with no palettes.
    pub fn empty() -> Self {
        Self {
            palettes: IndexMap::new(),
        }
    }

    /// Add or replace a palette.
    pub fn insert<I, S>(&mut self, id: impl Into<String>, entries: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.palettes
            .insert(id.into(), entries.into_iter().map(Into::into).collect());
    }

    /// Identifiers in the catalogue, in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.palettes.keys().map(String::as_str)
    }
}

impl Default for StaticPaletteSource {
    fn default() -> Self {
        let mut source = Self::empty();
        source.insert("pico-8", PICO_8.iter().copied());
        source.insert("nintendo-gameboy-bgb", NINTENDO_GAMEBOY_BGB.iter().copied());
        source.insert("1bit-monitor-glow", ONE_BIT_MONITOR_GLOW.iter().copied());
        source
    }
}

impl PaletteSource for StaticPaletteSource {
    fn fetch_palette(&self, id: &str) -> Result<Vec<String>, FetchError> {
        self.palettes
            .get(id)
            .cloned()
            .ok_or_else(|| FetchError::NotFound { id: id.to_owned() })
    }
}

/// Canonicalize raw palette entries: trim, ensure exactly one leading
/// `#`, lower-case. No validation.
pub fn normalize_entries<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    raw.iter()
        .map(|s| {
            let s = s.as_ref().trim();
            let digits = s.strip_prefix('#').unwrap_or(s);
            format!("#{}", digits.to_ascii_lowercase())
        })
        .collect()
}

/// Fetch, normalize and validate the palette `id` from `source`.
pub fn import_palette<P: PaletteSource + ?Sized>(
    source: &P,
    id: &str,
) -> Result<ColorPalette, ImportError> {
    let raw = source.fetch_palette(id)?;
    let palette = ColorPalette::parse(&normalize_entries(&raw))?;
    debug!("imported palette {id:?} with {} colors", palette.len());
    Ok(palette)
}

#[cfg(test)]
mod tests {
    use super::*;
    use turmite_core::{Color, PaletteError};

    #[test]
    fn normalization_adds_hash_and_lowercases() {
        assert_eq!(
            normalize_entries(&["FF004D", " #1D2B53", "abcdef "]),
            ["#ff004d", "#1d2b53", "#abcdef"]
        );
    }

    #[test]
    fn builtin_pico8_imports() {
        let palette = import_palette(&StaticPaletteSource::default(), "pico-8").unwrap();
        assert_eq!(palette.len(), 16);
        assert_eq!(palette.background(), Color::BLACK);
        assert_eq!(palette.get(8), Some(Color::rgb(0xff, 0x00, 0x4d)));
    }

    #[test]
    fn unknown_id_is_not_found() {
        let source = StaticPaletteSource::default();
        assert_eq!(
            import_palette(&source, "no-such-palette"),
            Err(ImportError::Fetch(FetchError::NotFound {
                id: "no-such-palette".into()
            }))
        );
    }

    #[test]
    fn malformed_entries_are_rejected() {
        let mut source = StaticPaletteSource::empty();
        source.insert("broken", ["ffffff", "zzzzzz"]);
        source.insert("dupes", ["ffffff", "FFFFFF"]);
        source.insert("blank", Vec::<String>::new());
        assert!(matches!(
            import_palette(&source, "broken"),
            Err(ImportError::Palette(PaletteError::InvalidColorEncoding { index: 1, .. }))
        ));
        assert!(matches!(
            import_palette(&source, "dupes"),
            Err(ImportError::Palette(PaletteError::DuplicateColor { .. }))
        ));
        assert_eq!(
            import_palette(&source, "blank"),
            Err(ImportError::Palette(PaletteError::Empty))
        );
        assert_eq!(source.ids().collect::<Vec<_>>(), ["broken", "dupes", "blank"]);
    }
}
