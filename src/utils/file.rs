use std::fs;
use std::path::{Path, PathBuf};
use crate::error::{Error, Result};
use crate::models::Project;

/// Load a project document
pub fn load_project(path: &Path) -> Result<Project> {
    if !path.is_file() {
        return Err(Error::InvalidPath(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    let project: Project = serde_json::from_str(&content)?;
    log::debug!("Loaded {} items from {}", project.items.len(), path.display());
    Ok(project)
}

/// Write a project document. The content goes to a sibling temporary file
/// first and is then moved over the destination.
pub fn save_project(project: &Project, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(project)?;
    let temp = temp_path_for(path);
    fs::write(&temp, json)?;
    if let Err(e) = safe_move_file(&temp, path) {
        let _ = fs::remove_file(&temp);
        return Err(e);
    }
    log::debug!("Saved project to {}", path.display());
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "project.json".to_string());
    path.with_file_name(format!(".{}.tmp", name))
}

/// Safely move a file with fallback to copy+delete if rename fails
pub fn safe_move_file(src: &Path, dest: &Path) -> Result<()> {
    match fs::rename(src, dest) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::debug!("Rename failed for {}, trying copy+delete: {}", src.display(), e);

            fs::copy(src, dest)?;

            if let Err(e) = fs::remove_file(src) {
                // The destination is complete; a stray source is only clutter
                log::warn!("Could not delete {} after copying: {}", src.display(), e);
            }
            Ok(())
        }
    }
}
