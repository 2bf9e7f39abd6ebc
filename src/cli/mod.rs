//! Command-line interface for `umbra`.
//!
//! This module provides the CLI parsing and command routing using clap.

pub mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use crate::config::{CliOverrides, Config};
use crate::logging::{self, LogFormat};

/// `umbra` - Localization lookup service and issue list utility.
#[derive(Parser, Debug)]
#[command(name = "umbra")]
#[command(
    author,
    version,
    about = "Localization lookup service with a JSON-backed issue list",
    long_about = None,
    after_help = "Issue commands read and rewrite the whole issues file; run one writer at a time."
)]
pub struct Cli {
    /// Output format: text (default) or json
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output (repeat for more)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Emit log lines as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Path to a YAML config file (default: ./umbra.yaml if present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Path to the issues JSON file
    #[arg(long, global = true, value_name = "PATH", env = "UMBRA_ISSUES")]
    pub issues: Option<PathBuf>,

    /// Path to the translations JSON file
    #[arg(long, global = true, value_name = "PATH", env = "UMBRA_TRANSLATIONS")]
    pub translations: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inspect and update the issue list
    Issues(IssuesCommand),

    /// List available locales
    Locales,

    /// Show translations for a locale, or a single key
    Translations(TranslationsArgs),

    /// Run the HTTP translation service
    Serve(ServeArgs),

    /// Show version information
    Version(VersionArgs),
}

#[derive(Args, Debug)]
pub struct IssuesCommand {
    /// Issues subcommand
    #[command(subcommand)]
    pub command: IssuesSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum IssuesSubcommand {
    /// List issues (open only unless --all or --status)
    List(ListArgs),

    /// Show a single issue
    Show(ShowArgs),

    /// Print the open issues report
    Summary,

    /// Close every open issue that is already implemented
    CloseImplemented(CloseImplementedArgs),

    /// Close one issue by id
    Complete(CompleteArgs),
}

#[derive(Args, Debug, Default, Clone)]
pub struct ListArgs {
    /// Include closed issues
    #[arg(short, long)]
    pub all: bool,

    /// Filter by status (open, closed)
    #[arg(short, long)]
    pub status: Option<String>,

    /// Filter by implemented flag
    #[arg(long)]
    pub implemented: Option<bool>,

    /// Filter by priority label (e.g. P1)
    #[arg(short, long)]
    pub priority: Option<String>,

    /// Filter by title substring (case-insensitive)
    #[arg(long)]
    pub title_contains: Option<String>,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Issue id
    pub id: i64,
}

#[derive(Args, Debug, Default)]
pub struct CloseImplementedArgs {
    /// Report what would change without writing the file
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args, Debug, Default)]
pub struct CompleteArgs {
    /// Issue id
    pub id: i64,

    /// Note replacing the issue's notes
    #[arg(short, long)]
    pub note: Option<String>,

    /// Report what would change without writing the file
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args, Debug)]
pub struct TranslationsArgs {
    /// Locale code (e.g. en, fr)
    pub locale: String,

    /// Translation key; omit to show the whole locale
    pub key: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Address to bind (default: 0.0.0.0)
    #[arg(long, env = "UMBRA_HOST")]
    pub host: Option<String>,

    /// Port to bind (default: 5007)
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,
}

#[derive(Args, Debug, Default)]
pub struct VersionArgs {
    /// Print only the version number
    #[arg(long)]
    pub short: bool,
}

impl Cli {
    /// Collect the overrides that feed configuration resolution.
    #[must_use]
    pub fn overrides(&self) -> CliOverrides {
        let (host, port) = match &self.command {
            Some(Commands::Serve(args)) => (args.host.clone(), args.port),
            _ => (None, None),
        };
        CliOverrides {
            config_path: self.config.clone(),
            issues_path: self.issues.clone(),
            translations_path: self.translations.clone(),
            host,
            port,
        }
    }
}

/// Run the CLI.
///
/// # Errors
///
/// Returns an error if configuration cannot be resolved or the command fails.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(&cli.overrides()).context("Failed to load configuration")?;

    // The server logs its lifecycle at info, and at debug when debug is on.
    let verbose = match cli.command {
        Some(Commands::Serve(_)) if config.debug => cli.verbose.max(2),
        Some(Commands::Serve(_)) => cli.verbose.max(1),
        _ => cli.verbose,
    };
    let format = cli.log_json.then_some(LogFormat::Json);
    logging::init_logging(verbose, cli.quiet, format)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    let json = cli.json;
    let Some(command) = cli.command else {
        println!("umbra - localization service and issue list utility. Use --help for usage.");
        return Ok(());
    };
    let name = command.name();

    let result = match command {
        Commands::Issues(issues) => match issues.command {
            IssuesSubcommand::List(args) => commands::list::execute(&args, json, &config),
            IssuesSubcommand::Show(args) => commands::show::execute(args.id, json, &config),
            IssuesSubcommand::Summary => commands::summary::execute(json, &config),
            IssuesSubcommand::CloseImplemented(args) => {
                commands::close::execute(&args, json, &config)
            }
            IssuesSubcommand::Complete(args) => commands::complete::execute(&args, json, &config),
        },
        Commands::Locales => commands::translations::execute_locales(json, &config),
        Commands::Translations(args) => commands::translations::execute(&args, json, &config),
        Commands::Serve(_) => commands::serve::execute(&config),
        Commands::Version(args) => commands::version::execute(&args, json),
    };

    result.with_context(|| format!("{name} failed"))
}

impl Commands {
    const fn name(&self) -> &'static str {
        match self {
            Self::Issues(issues) => match issues.command {
                IssuesSubcommand::List(_) => "issues list",
                IssuesSubcommand::Show(_) => "issues show",
                IssuesSubcommand::Summary => "issues summary",
                IssuesSubcommand::CloseImplemented(_) => "issues close-implemented",
                IssuesSubcommand::Complete(_) => "issues complete",
            },
            Self::Locales => "locales",
            Self::Translations(_) => "translations",
            Self::Serve(_) => "serve",
            Self::Version(_) => "version",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_complete_with_note() {
        let cli = Cli::try_parse_from(["umbra", "issues", "complete", "2", "--note", "Shipped"])
            .unwrap();
        match cli.command {
            Some(Commands::Issues(IssuesCommand {
                command: IssuesSubcommand::Complete(args),
            })) => {
                assert_eq!(args.id, 2);
                assert_eq!(args.note.as_deref(), Some("Shipped"));
                assert!(!args.dry_run);
            }
            other => panic!("unexpected parse: {other:?}"),
        }
    }

    #[test]
    fn test_serve_overrides_flow_into_config() {
        let cli = Cli::try_parse_from(["umbra", "serve", "--port", "8080", "--host", "127.0.0.1"])
            .unwrap();
        let overrides = cli.overrides();
        assert_eq!(overrides.port, Some(8080));
        assert_eq!(overrides.host.as_deref(), Some("127.0.0.1"));
    }

    #[test]
    fn test_global_paths() {
        let cli = Cli::try_parse_from([
            "umbra",
            "locales",
            "--translations",
            "/tmp/t.json",
        ])
        .unwrap();
        assert_eq!(
            cli.overrides().translations_path,
            Some(PathBuf::from("/tmp/t.json"))
        );
    }
}
