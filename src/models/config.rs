use std::fmt;
use std::path::PathBuf;

/// Configuration for a remapping run
#[derive(Debug, Clone)]
pub struct Config {
    /// Enable debug output
    pub debug_mode: bool,
    /// Default state of the "show success report" toggle
    pub show_report: bool,
    /// Apply, report and undo without writing the project
    pub dry_run: bool,
    /// Where to write the remapped project; `None` writes in place
    pub output: Option<PathBuf>,
    /// Where the advisory list of available fonts comes from
    pub font_source: FontSource,
}

/// Sources for the list of available fonts
#[derive(Debug, Clone, PartialEq)]
pub enum FontSource {
    /// Fonts installed on this machine
    System,
    /// Font files in a directory
    Directory(PathBuf),
    /// A text file with one font identifier per line
    ListFile(PathBuf),
    /// No list at all
    None,
}

impl fmt::Display for FontSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontSource::System => write!(f, "system fonts"),
            FontSource::Directory(dir) => write!(f, "fonts in {}", dir.display()),
            FontSource::ListFile(file) => write!(f, "font list {}", file.display()),
            FontSource::None => write!(f, "no font list"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug_mode: false,
            show_report: true,
            dry_run: false,
            output: None,
            font_source: FontSource::System,
        }
    }
}
