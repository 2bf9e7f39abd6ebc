//! List command implementation.
//!
//! Shows open issues by default; `--all` or `--status` widen the view.

use crate::cli::ListArgs;
use crate::config::Config;
use crate::error::Result;
use crate::format::{IssueList, format_issue_line};
use crate::model::Status;
use crate::query::IssueFilter;
use crate::store;

/// Execute the list command.
///
/// # Errors
///
/// Returns an error if the issues file cannot be loaded or a filter is invalid.
pub fn execute(args: &ListArgs, json: bool, config: &Config) -> Result<()> {
    let issues = store::load_issues(&config.issues_path)?;
    let filter = build_filter(args)?;
    let matched = filter.apply(&issues);

    if json {
        let output = serde_json::to_string_pretty(&IssueList::new(matched))?;
        println!("{output}");
    } else if matched.is_empty() {
        println!("No issues found.");
    } else {
        for issue in &matched {
            println!("{}", format_issue_line(issue));
        }
        println!("\n{} issue(s)", matched.len());
    }

    Ok(())
}

/// Convert CLI args to an issue filter.
fn build_filter(args: &ListArgs) -> Result<IssueFilter> {
    let status = match args.status.as_deref() {
        Some(value) => Some(value.parse::<Status>()?),
        None if args.all => None,
        None => Some(Status::Open),
    };

    Ok(IssueFilter {
        status,
        implemented: args.implemented,
        priority: args.priority.clone(),
        title_contains: args.title_contains.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UmbraError;

    #[test]
    fn test_default_filter_is_open_only() {
        let filter = build_filter(&ListArgs::default()).unwrap();
        assert_eq!(filter.status, Some(Status::Open));
    }

    #[test]
    fn test_all_drops_status() {
        let args = ListArgs {
            all: true,
            ..Default::default()
        };
        assert_eq!(build_filter(&args).unwrap().status, None);
    }

    #[test]
    fn test_explicit_status_wins_over_all() {
        let args = ListArgs {
            all: true,
            status: Some("Closed".to_string()),
            ..Default::default()
        };
        assert_eq!(build_filter(&args).unwrap().status, Some(Status::Closed));
    }

    #[test]
    fn test_invalid_status_rejected() {
        let args = ListArgs {
            status: Some("pending".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            build_filter(&args),
            Err(UmbraError::InvalidStatus { .. })
        ));
    }
}
