//! Output formatting for `umbra`.
//!
//! Supports both human-readable text output and machine-parseable JSON.
//!
//! # JSON Output Types
//!
//! - [`IssueList`] - Filtered issues (issues list)
//! - [`TransitionReport`] - Ids closed by a transition (close-implemented, complete)
//! - [`SummaryOutput`] - Open issues with the rendered summary
//! - [`LocalesData`], [`LocaleData`], [`TranslationData`], [`HealthData`] -
//!   payloads shared by the CLI and the HTTP envelope

mod output;
mod text;

pub use output::{
    HealthData, IssueList, LocaleData, LocalesData, SummaryOutput, TransitionReport,
    TranslationData,
};
pub use text::{format_issue_details, format_issue_line};
