//! Issue list operations.
//!
//! Every collection-level operation takes a borrowed snapshot and returns a
//! fresh `Vec<Issue>`; the caller's slice is never modified. Storage paths are
//! passed explicitly at each call site.

use std::path::Path;

use crate::error::{Result, UmbraError};
use crate::json;
use crate::model::{AUTO_CLOSE_NOTE, Issue};
use crate::query::IssueFilter;

/// Message returned by [`summarize_open_issues`] when nothing is open.
pub const NO_OPEN_ISSUES: &str = "No open issues 🎉";

// ========================================================================
// Persistence
// ========================================================================

/// Load the issue list stored at `path`.
///
/// # Errors
///
/// See [`json::load`].
pub fn load_issues(path: impl AsRef<Path>) -> Result<Vec<Issue>> {
    json::load(path.as_ref())
}

/// Persist `issues` to `path`, replacing its previous content.
///
/// # Errors
///
/// See [`json::save`].
pub fn save_issues(issues: &[Issue], path: impl AsRef<Path>) -> Result<()> {
    json::save(path.as_ref(), issues)
}

// ========================================================================
// Queries
// ========================================================================

/// Open issues in their original order.
#[must_use]
pub fn list_open_issues(issues: &[Issue]) -> Vec<&Issue> {
    IssueFilter::open().apply(issues)
}

/// Find the first issue with the given id.
///
/// # Errors
///
/// Returns `IssueNotFound` if no issue has that id.
pub fn find_issue(issues: &[Issue], id: i64) -> Result<&Issue> {
    issues
        .iter()
        .find(|issue| issue.id == id)
        .ok_or(UmbraError::IssueNotFound { id })
}

/// Human-readable report of open issues.
///
/// One ` - #<id> <title> [<priority>]` line per open issue under an
/// `Open issues:` header.
#[must_use]
pub fn summarize_open_issues(issues: &[Issue]) -> String {
    let open = list_open_issues(issues);
    if open.is_empty() {
        return NO_OPEN_ISSUES.to_string();
    }

    let mut lines = Vec::with_capacity(open.len() + 1);
    lines.push("Open issues:".to_string());
    for issue in open {
        let mut line = format!(" - #{} {}", issue.id, issue.title);
        if let Some(priority) = issue.priority.as_deref().filter(|p| !p.is_empty()) {
            line.push_str(&format!(" [{priority}]"));
        }
        lines.push(line);
    }
    lines.join("\n")
}

// ========================================================================
// Transitions
// ========================================================================

/// Close every open issue that is already implemented.
///
/// Returns a new list; issues that do not match are copied unchanged.
#[must_use]
pub fn close_implemented_issues(issues: &[Issue]) -> Vec<Issue> {
    let mut updated = issues.to_vec();
    let mut closed = 0usize;
    for issue in &mut updated {
        if issue.implemented && issue.is_open() {
            issue.close(Some(AUTO_CLOSE_NOTE));
            closed += 1;
        }
    }
    tracing::debug!(closed, total = updated.len(), "Closed implemented issues");
    updated
}

/// Close the issue identified by `id`, optionally replacing its notes.
///
/// Returns a new list with the first matching issue closed.
///
/// # Errors
///
/// Returns `IssueNotFound` if no issue has that id. The input is untouched.
pub fn complete_issue(issues: &[Issue], id: i64, note: Option<&str>) -> Result<Vec<Issue>> {
    let index = issues
        .iter()
        .position(|issue| issue.id == id)
        .ok_or(UmbraError::IssueNotFound { id })?;

    let mut updated = issues.to_vec();
    updated[index].close(note);
    tracing::debug!(id, "Completed issue");
    Ok(updated)
}

/// Load `path`, close implemented issues and write the result back.
///
/// # Errors
///
/// Returns any load or save error; nothing is written if loading fails.
pub fn close_and_persist(path: impl AsRef<Path>) -> Result<Vec<Issue>> {
    let path = path.as_ref();
    let issues = load_issues(path)?;
    let closed = close_implemented_issues(&issues);
    save_issues(&closed, path)?;
    tracing::info!(path = %path.display(), "Persisted issue list after auto-close");
    Ok(closed)
}
