//! Version command implementation.

use crate::cli::VersionArgs;
use crate::error::Result;
use serde::Serialize;

#[derive(Serialize)]
struct VersionOutput<'a> {
    version: &'a str,
    build: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    rust_version: Option<&'a str>,
}

/// Execute the version command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(args: &VersionArgs, json: bool) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");

    if args.short {
        println!("{version}");
        return Ok(());
    }

    let build = if cfg!(debug_assertions) {
        "dev"
    } else {
        "release"
    };
    let rust_version = option_env!("CARGO_PKG_RUST_VERSION").filter(|s| !s.trim().is_empty());

    if json {
        let output = VersionOutput {
            version,
            build,
            rust_version,
        };
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    println!("umbra {version} ({build})");
    Ok(())
}
