//! Export file loading and pre-flight access checks.

use std::fs;
use std::path::Path;

use crate::domain::Export;
use crate::errors::EditorError;

/// Check that the export file is readable and its containing directory is
/// writable.
///
/// The directory check runs for every command, read-only ones included: the
/// expected workflow redirects a mutated export back into the same directory,
/// so a read-only directory is surfaced before any work is done rather than
/// at redirect time.
pub fn preflight(path: &Path) -> Result<(), EditorError> {
    fs::File::open(path).map_err(|source| EditorError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    // Creating (and immediately dropping) a temp file is the only reliable
    // writability probe across platforms.
    tempfile::Builder::new()
        .prefix(".bbex-probe-")
        .tempfile_in(dir)
        .map_err(|source| EditorError::FileAccess {
            path: dir.to_path_buf(),
            source,
        })?;

    Ok(())
}

/// Load and parse the export file, running pre-flight checks first.
pub fn load(path: &Path) -> Result<Export, EditorError> {
    preflight(path)?;

    let contents = fs::read_to_string(path).map_err(|source| EditorError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    let export = serde_json::from_str(&contents)?;
    Ok(export)
}

/// Serialize the export as one compact JSON document, matching the output
/// format of the original editor.
pub fn to_json(export: &Export) -> Result<String, EditorError> {
    Ok(serde_json::to_string(export)?)
}
