//! Filter types for issue listing.

use crate::model::{Issue, Status};

/// Filter options for listing issues.
///
/// Every populated field must match; unset fields match everything.
#[derive(Debug, Clone, Default)]
pub struct IssueFilter {
    pub status: Option<Status>,
    pub implemented: Option<bool>,
    /// Priority label, compared case-insensitively.
    pub priority: Option<String>,
    /// Case-insensitive substring of the title.
    pub title_contains: Option<String>,
}

impl IssueFilter {
    /// Filter that keeps only open issues.
    #[must_use]
    pub fn open() -> Self {
        Self {
            status: Some(Status::Open),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn matches(&self, issue: &Issue) -> bool {
        if let Some(status) = self.status {
            if issue.status != status {
                return false;
            }
        }

        if let Some(implemented) = self.implemented {
            if issue.implemented != implemented {
                return false;
            }
        }

        if let Some(ref priority) = self.priority {
            match issue.priority.as_deref() {
                Some(label) if label.eq_ignore_ascii_case(priority) => {}
                _ => return false,
            }
        }

        if let Some(ref query) = self.title_contains {
            if !issue.title.to_lowercase().contains(&query.to_lowercase()) {
                return false;
            }
        }

        true
    }

    /// Apply the filter, preserving input order.
    #[must_use]
    pub fn apply<'a>(&self, issues: &'a [Issue]) -> Vec<&'a Issue> {
        issues.iter().filter(|issue| self.matches(issue)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issues() -> Vec<Issue> {
        vec![
            Issue {
                id: 1,
                title: "Translate dashboard".to_string(),
                status: Status::Open,
                implemented: true,
                priority: Some("P1".to_string()),
                ..Default::default()
            },
            Issue {
                id: 2,
                title: "Add Italian locale".to_string(),
                status: Status::Closed,
                implemented: true,
                priority: Some("P2".to_string()),
                ..Default::default()
            },
            Issue {
                id: 3,
                title: "Fix plural forms".to_string(),
                status: Status::Open,
                implemented: false,
                ..Default::default()
            },
        ]
    }

    fn ids(found: &[&Issue]) -> Vec<i64> {
        found.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let all = issues();
        let filter = IssueFilter::default();
        assert_eq!(ids(&filter.apply(&all)), vec![1, 2, 3]);
    }

    #[test]
    fn test_open_filter() {
        let all = issues();
        assert_eq!(ids(&IssueFilter::open().apply(&all)), vec![1, 3]);
    }

    #[test]
    fn test_combined_filters() {
        let all = issues();
        let filter = IssueFilter {
            status: Some(Status::Open),
            implemented: Some(true),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&all)), vec![1]);
    }

    #[test]
    fn test_priority_filter_case_insensitive_and_skips_unlabelled() {
        let all = issues();
        let filter = IssueFilter {
            priority: Some("p2".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&all)), vec![2]);
    }

    #[test]
    fn test_title_contains() {
        let all = issues();
        let filter = IssueFilter {
            title_contains: Some("LOCALE".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&all)), vec![2]);
    }
}
