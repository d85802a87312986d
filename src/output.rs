//! Aggregate writer: persists the finished [`MonsterDocument`].

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{error, info};

use crate::contract::{Monster, MonsterDocument};
use crate::error::ExpandError;

/// Renders the document as two-space indented JSON. Non-ASCII text is kept
/// literal.
pub fn render_document(monsters: &[Monster]) -> Result<String, serde_json::Error> {
    #[derive(serde::Serialize)]
    struct Borrowed<'a> {
        monsters: &'a [Monster],
    }
    serde_json::to_string_pretty(&Borrowed { monsters })
}

/// Writes `{"monsters": [...]}` to `path`, replacing whatever was there.
///
/// The document is written to a temporary file next to `path` and renamed
/// into place, so readers see either the old file or the complete new one.
/// Returns the number of monsters written.
pub fn write_monsters(path: &Path, monsters: &[Monster]) -> Result<usize, ExpandError> {
    let json = render_document(monsters).map_err(|e| {
        error!(error = ?e, "[WRITE] Failed to serialize monster document");
        ExpandError::io(path, e.into())
    })?;

    let dir = prepare_output_dir(path)?;

    let mut staged = NamedTempFile::new_in(dir).map_err(|e| {
        error!(error = ?e, dir = %dir.display(), "[WRITE] Failed to create temporary file");
        ExpandError::io(dir, e)
    })?;
    staged.write_all(json.as_bytes()).map_err(|e| {
        error!(error = ?e, path = %staged.path().display(), "[WRITE] Failed to write temporary file");
        ExpandError::io(staged.path(), e)
    })?;

    // Temporary files are created owner-only; the document keeps the
    // target's mode, or gets a world-readable one when it is new.
    if let Some(permissions) = target_permissions(path) {
        staged.as_file().set_permissions(permissions).map_err(|e| {
            error!(error = ?e, path = %staged.path().display(), "[WRITE] Failed to set file permissions");
            ExpandError::io(staged.path(), e)
        })?;
    }

    staged.persist(path).map_err(|e| {
        error!(error = ?e.error, path = %path.display(), "[WRITE] Failed to move document into place");
        ExpandError::io(path, e.error)
    })?;

    info!(count = monsters.len(), path = %path.display(), "[WRITE] Saved monsters");
    Ok(monsters.len())
}

/// Makes sure the directory `path` will be written into exists, creating it
/// if needed, and returns it. Called before any fetching so an unusable
/// output location fails the run immediately.
pub fn prepare_output_dir(path: &Path) -> Result<&Path, ExpandError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !dir.is_dir() {
        fs::create_dir_all(dir).map_err(|e| {
            error!(error = ?e, dir = %dir.display(), "[WRITE] Failed to create output directory");
            ExpandError::io(dir, e)
        })?;
        info!(dir = %dir.display(), "[WRITE] Created output directory");
    }
    Ok(dir)
}

#[cfg(unix)]
fn target_permissions(path: &Path) -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;

    match fs::metadata(path) {
        Ok(meta) => Some(meta.permissions()),
        Err(_) => Some(fs::Permissions::from_mode(0o644)),
    }
}

#[cfg(not(unix))]
fn target_permissions(path: &Path) -> Option<fs::Permissions> {
    fs::metadata(path).ok().map(|meta| meta.permissions())
}

/// Reads a previously written document back.
pub fn read_monsters(path: &Path) -> Result<MonsterDocument, ExpandError> {
    let text = fs::read_to_string(path).map_err(|e| ExpandError::io(path, e))?;
    serde_json::from_str(&text)
        .map_err(|e| ExpandError::schema(format!("monster document {}", path.display()), e))
}
