use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the FontRemap application
#[derive(Error, Debug)]
pub enum Error {
    /// IO operations errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Project document could not be parsed or written
    #[error("Project format error: {0}")]
    Json(#[from] serde_json::Error),
    /// No project is open, or the project has no items
    #[error("Open a project with comps to use this tool.")]
    NoProject,
    /// Invalid file or directory path
    #[error("Invalid path: {}", .0.display())]
    InvalidPath(PathBuf),
    /// A `--map` argument or mapping file line could not be understood
    #[error("Invalid mapping '{entry}': {reason}")]
    InvalidMapping { entry: String, reason: String },
    /// Font registry enumeration errors
    #[error("Font registry error: {0}")]
    Registry(String),
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Errors raised by the document host when a single layer cannot be edited.
///
/// These never abort a pass; the applier records them per layer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HostError {
    #[error("layer '{0}' is locked")]
    LayerLocked(String),
    #[error("layer '{0}' is not a text layer")]
    NotTextLayer(String),
    #[error("'{0}' is not a valid font identifier")]
    InvalidFont(String),
    #[error("no layer at item {item}, index {layer}")]
    NoSuchLayer { item: usize, layer: usize },
}

/// Result type alias for FontRemap operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "project.json");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("project.json"));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::NoProject.to_string(),
            "Open a project with comps to use this tool."
        );

        let err = Error::InvalidMapping {
            entry: "Arial".to_string(),
            reason: "expected FROM=TO".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid mapping 'Arial': expected FROM=TO");

        let err = HostError::LayerLocked("Title".to_string());
        assert_eq!(err.to_string(), "layer 'Title' is locked");
    }
}
