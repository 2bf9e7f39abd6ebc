//! JSON file I/O for the issue list.
//!
//! The file holds a single JSON array; each element is a complete `Issue`.

use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Result, UmbraError};
use crate::model::Issue;

/// Load issues from a JSON array file, preserving file order.
///
/// # Errors
///
/// Returns `FileNotFound` if the file does not exist, `Io` if it cannot be
/// read, `MalformedData` if any record violates the schema, or `DuplicateId`
/// if two records share an id.
pub fn load(path: &Path) -> Result<Vec<Issue>> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            UmbraError::FileNotFound(path.to_path_buf())
        } else {
            UmbraError::Io(e)
        }
    })?;

    let issues: Vec<Issue> = serde_json::from_str(&content)
        .map_err(|e| UmbraError::malformed(path.display().to_string(), e.to_string()))?;

    let mut seen = HashSet::with_capacity(issues.len());
    for issue in &issues {
        if !seen.insert(issue.id) {
            return Err(UmbraError::DuplicateId { id: issue.id });
        }
    }

    tracing::debug!(path = %path.display(), count = issues.len(), "Loaded issues");
    Ok(issues)
}

/// Save issues as a pretty-printed JSON array, replacing the file.
///
/// Writes to a temp file in the same directory and renames it over `path`.
/// The temp file is removed if any step fails.
///
/// # Errors
///
/// Returns `Io` if the file cannot be written, or `Json` if serialization fails.
pub fn save(path: &Path, issues: &[Issue]) -> Result<()> {
    let json = serde_json::to_string_pretty(issues)?;

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    writeln!(tmp, "{json}")?;
    tmp.flush()?;

    tmp.persist(path).map_err(|e| UmbraError::Io(e.error))?;

    tracing::debug!(path = %path.display(), count = issues.len(), "Saved issues");
    Ok(())
}
