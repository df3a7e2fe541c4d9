use std::collections::{BTreeMap, BTreeSet};

/// The distinct font identifiers applied to text layers.
///
/// Identifiers compare by exact string equality, so "Arial" and "arial"
/// are two different fonts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsedFonts {
    fonts: BTreeSet<String>,
}

impl UsedFonts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a font, returning true if it was not seen before
    pub fn insert(&mut self, font: &str) -> bool {
        if self.fonts.contains(font) {
            return false;
        }
        self.fonts.insert(font.to_string())
    }

    pub fn contains(&self, font: &str) -> bool {
        self.fonts.contains(font)
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Fonts in lexicographic order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.fonts.iter().map(String::as_str)
    }
}

impl<'a> FromIterator<&'a str> for UsedFonts {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut used = UsedFonts::new();
        for font in iter {
            used.insert(font);
        }
        used
    }
}

/// A confirmed source font → replacement mapping.
///
/// Built once from the mapping form and never edited afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontMapping {
    entries: BTreeMap<String, String>,
}

impl FontMapping {
    /// Every used font mapped to itself
    pub fn identity(used: &UsedFonts) -> Self {
        used.iter()
            .map(|font| (font.to_string(), font.to_string()))
            .collect()
    }

    /// The replacement to apply to a layer currently using `font`.
    ///
    /// Returns `None` when the font is unmapped, maps to itself, or maps to
    /// an empty string.
    pub fn replacement_for(&self, font: &str) -> Option<&str> {
        let replacement = self.entries.get(font)?;
        if replacement.is_empty() || replacement == font {
            return None;
        }
        Some(replacement)
    }

    pub fn get(&self, font: &str) -> Option<&str> {
        self.entries.get(font).map(String::as_str)
    }

    /// Entries that would actually change something
    pub fn changes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter(|(from, to)| !to.is_empty() && from != to)
            .map(|(from, to)| (from.as_str(), to.as_str()))
    }

    pub fn is_identity(&self) -> bool {
        self.changes().next().is_none()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for FontMapping {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
