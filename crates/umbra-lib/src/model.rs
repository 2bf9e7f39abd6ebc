//! Core data types for umbra-lib.
//!
//! The serde format matches the `git_issues.json` array layout so existing
//! files load unchanged.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Note attached by [`crate::store::close_implemented_issues`].
pub const AUTO_CLOSE_NOTE: &str = "Automatically closed because implementation exists.";

/// Issue lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    Open,
    Closed,
}

impl Status {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = crate::error::UmbraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "closed" => Ok(Self::Closed),
            _ => Err(crate::error::UmbraError::InvalidStatus {
                status: s.to_string(),
            }),
        }
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// Stored files may carry "Open" or "CLOSED"; reads are case-insensitive.
impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

/// A tracked work item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct Issue {
    /// Unique numeric id.
    pub id: i64,

    pub title: String,

    pub status: Status,

    /// Whether the work described by the issue already exists.
    pub implemented: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Free-form notes; overwritten when the issue is closed with a note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Priority label (e.g. "P1").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

impl Issue {
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.status.is_open()
    }

    /// Mark the issue as closed and implemented.
    ///
    /// A non-empty `note` replaces any existing notes.
    pub fn close(&mut self, note: Option<&str>) {
        self.status = Status::Closed;
        self.implemented = true;
        if let Some(note) = note.filter(|n| !n.is_empty()) {
            self.notes = Some(note.to_string());
        }
    }
}
