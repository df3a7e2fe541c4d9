use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use ttf_parser::{name_id, Face};
use crate::error::Result;

/// Check if a file looks like a font file: known extension and magic header
pub fn is_valid_font_file(path: &Path) -> bool {
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => ext.to_lowercase(),
        None => return false,
    };
    if ext != "ttf" && ext != "otf" && ext != "ttc" {
        return false;
    }

    let mut header = [0u8; 4];
    let valid = fs::File::open(path)
        .and_then(|mut file| file.read_exact(&mut header))
        .is_ok()
        && (header == [0x00, 0x01, 0x00, 0x00] // TTF
            || header == *b"OTTO"
            || header == *b"true"
            || header == *b"ttcf");

    if !valid {
        log::debug!("Invalid font file: {}", path.display());
    }
    valid
}

/// Find font files directly inside a directory
pub fn find_font_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_valid_font_file(&path) {
            files.push(path);
        }
    }
    log::debug!("Found {} font files in {}", files.len(), dir.display());
    Ok(files)
}

/// Read the PostScript name of face `index` in `data`.
///
/// This is the identifier compositing hosts use for a family + style,
/// e.g. "Arial-BoldMT".
pub fn postscript_name(data: &[u8], index: u32) -> Option<String> {
    let face = match Face::parse(data, index) {
        Ok(face) => face,
        Err(e) => {
            log::debug!("Failed to parse face {}: {}", index, e);
            return None;
        }
    };

    face.names()
        .into_iter()
        .filter(|name| name.name_id == name_id::POST_SCRIPT_NAME)
        .find_map(|name| name.to_string())
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
}

/// PostScript names of every face in a font file
pub fn postscript_names_in_file(path: &Path) -> Vec<String> {
    let data = match fs::read(path) {
        Ok(data) => data,
        Err(e) => {
            log::debug!("Failed to read {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    let faces = ttf_parser::fonts_in_collection(&data).unwrap_or(1);
    (0..faces)
        .filter_map(|index| postscript_name(&data, index))
        .collect()
}
