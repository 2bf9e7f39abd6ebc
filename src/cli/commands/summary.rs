//! Summary command implementation.

use crate::config::Config;
use crate::error::Result;
use crate::format::SummaryOutput;
use crate::store;

/// Execute the summary command.
///
/// # Errors
///
/// Returns an error if the issues file cannot be loaded.
pub fn execute(json: bool, config: &Config) -> Result<()> {
    let issues = store::load_issues(&config.issues_path)?;
    let summary = store::summarize_open_issues(&issues);

    if json {
        let output = SummaryOutput {
            open: store::list_open_issues(&issues),
            summary,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{summary}");
    }

    Ok(())
}
