use std::fs;
use std::path::{Path, PathBuf};
use font_kit::handle::Handle;
use font_kit::source::SystemSource;
use rayon::prelude::*;
use crate::error::{Error, Result};
use crate::models::FontSource;
use super::metadata::{find_font_files, postscript_name, postscript_names_in_file};

/// Supplies the identifiers of fonts available for use as replacements.
///
/// The list is advisory: it is shown to the user and used for hints, never
/// to reject a mapping.
pub trait FontRegistry {
    /// Available font identifiers, sorted ascending with no duplicates
    fn available_fonts(&self) -> Result<Vec<String>>;
}

/// Fonts installed on this machine
#[derive(Debug, Default)]
pub struct SystemFontRegistry;

/// Fonts found in one directory
#[derive(Debug)]
pub struct DirectoryFontRegistry {
    dir: PathBuf,
}

/// A fixed list of identifiers
#[derive(Debug, Default)]
pub struct StaticFontRegistry {
    fonts: Vec<String>,
}

fn sorted_unique(mut fonts: Vec<String>) -> Vec<String> {
    fonts.sort();
    fonts.dedup();
    fonts
}

fn handle_names(handle: &Handle) -> Vec<String> {
    match handle {
        Handle::Path { path, font_index } => {
            match fs::read(path) {
                Ok(data) => postscript_name(&data, *font_index).into_iter().collect(),
                Err(e) => {
                    log::debug!("Failed to read {}: {}", path.display(), e);
                    Vec::new()
                }
            }
        }
        Handle::Memory { bytes, font_index } => {
            postscript_name(bytes, *font_index).into_iter().collect()
        }
    }
}

impl FontRegistry for SystemFontRegistry {
    fn available_fonts(&self) -> Result<Vec<String>> {
        let handles = SystemSource::new()
            .all_fonts()
            .map_err(|e| Error::Registry(format!("Failed to enumerate system fonts: {}", e)))?;
        log::debug!("System source returned {} font handles", handles.len());

        let names: Vec<String> = handles
            .par_iter()
            .flat_map_iter(|handle| handle_names(handle))
            .collect();
        Ok(sorted_unique(names))
    }
}

impl DirectoryFontRegistry {
    pub fn new(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(Error::InvalidPath(dir.to_path_buf()));
        }
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }
}

impl FontRegistry for DirectoryFontRegistry {
    fn available_fonts(&self) -> Result<Vec<String>> {
        let files = find_font_files(&self.dir)?;
        let names: Vec<String> = files
            .par_iter()
            .flat_map_iter(|path| postscript_names_in_file(path))
            .collect();
        Ok(sorted_unique(names))
    }
}

impl StaticFontRegistry {
    pub fn new(fonts: Vec<String>) -> Self {
        Self { fonts }
    }

    /// Read one identifier per line; blank lines and `#` comments are skipped
    pub fn from_list_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let fonts = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(String::from)
            .collect();
        Ok(Self::new(fonts))
    }
}

impl FontRegistry for StaticFontRegistry {
    fn available_fonts(&self) -> Result<Vec<String>> {
        Ok(sorted_unique(self.fonts.clone()))
    }
}

/// Build the registry a configuration asks for
pub fn registry_for(source: &FontSource) -> Result<Box<dyn FontRegistry>> {
    Ok(match source {
        FontSource::System => Box::new(SystemFontRegistry),
        FontSource::Directory(dir) => Box::new(DirectoryFontRegistry::new(dir)?),
        FontSource::ListFile(path) => Box::new(StaticFontRegistry::from_list_file(path)?),
        FontSource::None => Box::new(StaticFontRegistry::default()),
    })
}

/// Fetch the advisory font list. Failures are logged and yield an empty list.
pub fn load_available_fonts(registry: &dyn FontRegistry) -> Vec<String> {
    match registry.available_fonts() {
        Ok(fonts) => {
            log::info!("{} fonts available", fonts.len());
            fonts
        }
        Err(e) => {
            log::warn!("{}; continuing without a font list", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenRegistry;

    impl FontRegistry for BrokenRegistry {
        fn available_fonts(&self) -> Result<Vec<String>> {
            Err(Error::Registry("no font service".to_string()))
        }
    }

    #[test]
    fn test_static_registry_sorts_and_dedups() {
        let registry = StaticFontRegistry::new(vec![
            "Helvetica".to_string(),
            "Arial-BoldMT".to_string(),
            "Helvetica".to_string(),
            "ArialMT".to_string(),
        ]);
        assert_eq!(
            registry.available_fonts().unwrap(),
            vec!["Arial-BoldMT", "ArialMT", "Helvetica"]
        );
    }

    #[test]
    fn test_list_file_skips_comments() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fonts.txt");
        fs::write(&path, "# installed\nTimesNewRoman-Bold\n\n  Arial  \n").unwrap();

        let registry = registry_for(&FontSource::ListFile(path)).unwrap();
        assert_eq!(
            registry.available_fonts().unwrap(),
            vec!["Arial", "TimesNewRoman-Bold"]
        );
    }

    #[test]
    fn test_missing_directory_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            DirectoryFontRegistry::new(&missing),
            Err(Error::InvalidPath(_))
        ));
    }

    #[test]
    fn test_directory_without_fonts_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("readme.md"), "fonts go here").unwrap();
        let registry = DirectoryFontRegistry::new(dir.path()).unwrap();
        assert!(registry.available_fonts().unwrap().is_empty());
    }

    #[test]
    fn test_registry_failure_is_advisory() {
        assert!(load_available_fonts(&BrokenRegistry).is_empty());
        assert!(load_available_fonts(&StaticFontRegistry::default()).is_empty());
    }
}
