//! Show command implementation.

use crate::config::Config;
use crate::error::Result;
use crate::format::format_issue_details;
use crate::store;

/// Execute the show command.
///
/// # Errors
///
/// Returns an error if the issues file cannot be loaded or the issue is not found.
pub fn execute(id: i64, json: bool, config: &Config) -> Result<()> {
    let issues = store::load_issues(&config.issues_path)?;
    let issue = store::find_issue(&issues, id)?;

    if json {
        let output = serde_json::to_string_pretty(issue)?;
        println!("{output}");
    } else {
        println!("{}", format_issue_details(issue));
    }

    Ok(())
}
