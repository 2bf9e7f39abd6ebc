//! Text formatting functions for `umbra`.
//!
//! Provides plain text (non-ANSI) formatting for terminal output:
//! - Status icons (○ ✓)
//! - Priority labels ([P1])
//! - Issue line and detail formatting

use std::fmt::Write as _;

use crate::model::{Issue, Status};

/// Status icon characters.
pub mod icons {
    /// Open issue (hollow circle).
    pub const OPEN: &str = "○";
    /// Closed issue (checkmark).
    pub const CLOSED: &str = "✓";
}

/// Return the icon character for a status.
#[must_use]
pub const fn format_status_icon(status: &Status) -> &'static str {
    match status {
        Status::Open => icons::OPEN,
        Status::Closed => icons::CLOSED,
    }
}

/// Format a priority label as a bracketed badge, or an empty string.
#[must_use]
pub fn format_priority(priority: Option<&str>) -> String {
    match priority {
        Some(label) if !label.is_empty() => format!("[{label}]"),
        _ => String::new(),
    }
}

/// Format a single-line issue summary.
///
/// Format: `{icon} #{id} [{priority}] {title}`, with `(implemented)` appended
/// to open issues whose work already exists.
#[must_use]
pub fn format_issue_line(issue: &Issue) -> String {
    let mut line = format!("{} #{}", format_status_icon(&issue.status), issue.id);
    let priority = format_priority(issue.priority.as_deref());
    if !priority.is_empty() {
        line.push(' ');
        line.push_str(&priority);
    }
    line.push(' ');
    line.push_str(&issue.title);
    if issue.implemented && issue.is_open() {
        line.push_str(" (implemented)");
    }
    line
}

/// Multi-line detail block used by `issues show`.
#[must_use]
pub fn format_issue_details(issue: &Issue) -> String {
    let mut out = format_issue_line(issue);
    let _ = write!(out, "\nStatus: {}", issue.status);
    let _ = write!(
        out,
        "\nImplemented: {}",
        if issue.implemented { "yes" } else { "no" }
    );
    if let Some(description) = &issue.description {
        let _ = write!(out, "\n\n{description}");
    }
    if let Some(notes) = &issue.notes {
        let _ = write!(out, "\n\nNotes: {notes}");
    }
    out
}
