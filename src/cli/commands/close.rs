//! Close-implemented command implementation.
//!
//! Closes every open issue flagged as implemented and rewrites the issues file.

use crate::cli::CloseImplementedArgs;
use crate::config::Config;
use crate::error::Result;
use crate::format::TransitionReport;
use crate::store;

/// Execute the close-implemented command.
///
/// # Errors
///
/// Returns an error if the issues file cannot be loaded or written.
pub fn execute(args: &CloseImplementedArgs, json: bool, config: &Config) -> Result<()> {
    let path = config.issues_path.as_path();
    let before = store::load_issues(path)?;

    let after = store::close_implemented_issues(&before);
    if !args.dry_run {
        store::save_issues(&after, path)?;
    }

    let report = TransitionReport::from_snapshots(&before, &after, args.dry_run, path);
    tracing::info!(closed = report.closed.len(), dry_run = args.dry_run, "close-implemented");

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let verb = if args.dry_run { "Would close" } else { "Closed" };
    if report.closed.is_empty() {
        println!("No implemented issues left open.");
    } else {
        let ids: Vec<String> = report.closed.iter().map(|id| format!("#{id}")).collect();
        println!("{verb} {} issue(s): {}", report.closed.len(), ids.join(", "));
    }
    println!("{}", store::summarize_open_issues(&after));

    Ok(())
}
