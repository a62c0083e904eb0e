// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

/// Read a page as UTF-8 text. `Ok(None)` when the file does not exist —
/// a per-page condition the batch driver reports and skips, never a fault
/// that stops the run.
pub fn read_document(path: &Path) -> Result<Option<String>, Box<dyn std::error::Error>> {
    if !path.exists() {
        return Ok(None);
    }
    Ok(Some(fs::read_to_string(path)?))
}

/// Overwrite a page in place. Callers only get here with a fully computed
/// and validated result, so the write is the last step of the unit of work.
pub fn write_document(path: &Path, text: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, text)?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c=='/'||c=='\\' { sep } else { c }).collect()
}

/// Resolve a page name from a spec or the CLI under the site root.
pub fn resolve_page(root: &Path, name: &str) -> PathBuf {
    root.join(normalize_separators(name))
}
