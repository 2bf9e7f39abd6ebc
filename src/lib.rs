//! `umbra` - localization lookup service and issue list utility
//!
//! This crate provides the `umbra` CLI and HTTP server on top of `umbra-lib`.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`cli`] - Command-line interface using clap
//! - [`config`] - Layered configuration (defaults, YAML, env, CLI)
//! - [`format`] - Output formatting (text, JSON)
//! - [`logging`] - tracing subscriber setup
//! - [`server`] - axum HTTP surface for translation lookups
//!
//! The data model, storage and lookup logic live in `umbra-lib` and are
//! re-exported here as [`model`], [`store`], [`query`], [`catalog`] and
//! [`error`].

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod format;
pub mod logging;
pub mod server;

pub use umbra_lib::{catalog, error, model, query, store};

pub use error::{Result, UmbraError};

/// Run the CLI application.
///
/// This is the main entry point called from `main()`.
///
/// # Errors
///
/// Returns an error if configuration, logging setup, or the command fails.
pub fn run() -> anyhow::Result<()> {
    cli::run()
}
