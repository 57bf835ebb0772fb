// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    character::CharacterRecord,
    config::consts::DOWNLOAD_PREFIX,
    core::sanitize::sanitize_file_stem,
    error::{Error, Result},
};

/// "wow-overlay-<name>.html", name lowercased and made filesystem-safe.
pub fn download_file_name(character: &CharacterRecord) -> String {
    join!(DOWNLOAD_PREFIX, &sanitize_file_stem(&character.name), ".html")
}

/// Write a generated overlay into `dir` under its download name.
/// Returns the final path written to.
pub fn write_overlay(dir: &Path, character: &CharacterRecord, html: &str) -> Result<PathBuf> {
    ensure_directory(dir)?;
    let path = dir.join(download_file_name(character));
    fs::write(&path, html)?;
    Ok(path)
}

/// Write to an explicit file path, creating parent directories.
pub fn write_overlay_to(path: &Path, html: &str) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, html)?;
    Ok(path.to_path_buf())
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c=='/'||c=='\\' { sep } else { c }).collect()
}

pub fn normalize_dir_path(p: &str) -> PathBuf {
    PathBuf::from(normalize_separators(p.trim()))
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::Storage(format!("Path exists but is not a directory: {}", dir.display())));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// Walk up from `path` to the closest directory that exists ("." as last resort).
pub fn find_nearest_existing_parent(path: &Path) -> PathBuf {
    let mut current = path.to_path_buf();
    loop {
        if current.is_dir() {
            return current;
        }
        match current.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => current = parent.to_path_buf(),
            _ => return PathBuf::from("."),
        }
    }
}
