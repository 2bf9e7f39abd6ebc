use std::path::Path;

use crate::catalog::LocaleTranslations;
use crate::model::Issue;
use serde::Serialize;

/// Issue list for `issues list --json`.
#[derive(Debug, Clone, Serialize)]
pub struct IssueList<'a> {
    pub issues: Vec<&'a Issue>,
    pub count: usize,
}

impl<'a> IssueList<'a> {
    #[must_use]
    pub fn new(issues: Vec<&'a Issue>) -> Self {
        let count = issues.len();
        Self { issues, count }
    }
}

/// Result of a transition command (`close-implemented`, `complete`).
#[derive(Debug, Clone, Serialize)]
pub struct TransitionReport<'a> {
    /// Ids whose status changed from open to closed.
    pub closed: Vec<i64>,
    pub total: usize,
    pub dry_run: bool,
    pub path: &'a Path,
}

impl<'a> TransitionReport<'a> {
    /// Compare snapshots taken before and after a transition.
    #[must_use]
    pub fn from_snapshots(before: &[Issue], after: &[Issue], dry_run: bool, path: &'a Path) -> Self {
        let closed = before
            .iter()
            .zip(after)
            .filter(|(old, new)| old.is_open() && !new.is_open())
            .map(|(_, new)| new.id)
            .collect();
        Self {
            closed,
            total: after.len(),
            dry_run,
            path,
        }
    }
}

/// Summary for `issues summary --json`.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryOutput<'a> {
    pub open: Vec<&'a Issue>,
    pub summary: String,
}

/// Payload of `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthData<'a> {
    pub status: &'static str,
    pub service: &'a str,
}

/// Payload of `GET /locales`.
#[derive(Debug, Clone, Serialize)]
pub struct LocalesData<'a> {
    pub locales: Vec<&'a str>,
}

/// Payload of `GET /translations/{locale}`.
#[derive(Debug, Clone, Serialize)]
pub struct LocaleData<'a> {
    pub locale: &'a str,
    pub translations: &'a LocaleTranslations,
}

/// Payload of `GET /translations/{locale}/{key}`.
#[derive(Debug, Clone, Serialize)]
pub struct TranslationData<'a> {
    pub locale: &'a str,
    pub key: &'a str,
    pub value: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store;

    fn issues() -> Vec<Issue> {
        vec![
            Issue {
                id: 1,
                title: "a".to_string(),
                implemented: true,
                ..Default::default()
            },
            Issue {
                id: 2,
                title: "b".to_string(),
                ..Default::default()
            },
        ]
    }

    #[test]
    fn test_transition_report_lists_newly_closed() {
        let before = issues();
        let after = store::close_implemented_issues(&before);
        let report = TransitionReport::from_snapshots(&before, &after, true, Path::new("x.json"));
        assert_eq!(report.closed, vec![1]);
        assert_eq!(report.total, 2);
        assert!(report.dry_run);
    }

    #[test]
    fn test_issue_list_counts() {
        let all = issues();
        let list = IssueList::new(all.iter().collect());
        assert_eq!(list.count, 2);
        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(json["issues"][1]["id"], 2);
    }
}
