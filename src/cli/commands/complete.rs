//! Complete command implementation.

use crate::cli::CompleteArgs;
use crate::config::Config;
use crate::error::Result;
use crate::format::TransitionReport;
use crate::store;

/// Execute the complete command.
///
/// # Errors
///
/// Returns an error if the issues file cannot be loaded or written, or if no
/// issue has the requested id. Nothing is written on error.
pub fn execute(args: &CompleteArgs, json: bool, config: &Config) -> Result<()> {
    let path = config.issues_path.as_path();
    let before = store::load_issues(path)?;
    let after = store::complete_issue(&before, args.id, args.note.as_deref())?;

    if !args.dry_run {
        store::save_issues(&after, path)?;
    }
    tracing::info!(id = args.id, dry_run = args.dry_run, "Completed issue");

    if json {
        let report = TransitionReport::from_snapshots(&before, &after, args.dry_run, path);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if args.dry_run {
        println!("Would close issue #{}", args.id);
    } else {
        println!("Closed issue #{}", args.id);
    }

    Ok(())
}
