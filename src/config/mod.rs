//! Configuration management for `umbra`.
//!
//! Configuration is layered, later sources winning:
//! - Built-in defaults
//! - YAML file (`--config <path>`, else `umbra.yaml` in the working directory)
//! - `UMBRA_DEBUG` / `FLASK_DEBUG`
//! - Command-line overrides, which clap also fills from `UMBRA_ISSUES`,
//!   `UMBRA_TRANSLATIONS`, `UMBRA_HOST` and `PORT`

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, UmbraError};

/// Name reported by the health endpoint.
pub const DEFAULT_SERVICE_NAME: &str = "umbra-localization-service";
pub const DEFAULT_CONFIG_FILE: &str = "umbra.yaml";
pub const DEFAULT_ISSUES_PATH: &str = "data/git_issues.json";
pub const DEFAULT_TRANSLATIONS_PATH: &str = "data/translations.json";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5007;

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub issues_path: PathBuf,
    pub translations_path: PathBuf,
    pub host: String,
    pub port: u16,
    pub debug: bool,
    pub service_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            issues_path: PathBuf::from(DEFAULT_ISSUES_PATH),
            translations_path: PathBuf::from(DEFAULT_TRANSLATIONS_PATH),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            debug: false,
            service_name: DEFAULT_SERVICE_NAME.to_string(),
        }
    }
}

/// Values that may appear in the YAML config file. All optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub issues_path: Option<PathBuf>,
    pub translations_path: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub debug: Option<bool>,
    pub service_name: Option<String>,
}

/// Overrides supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub config_path: Option<PathBuf>,
    pub issues_path: Option<PathBuf>,
    pub translations_path: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
}

impl Config {
    /// Resolve configuration from the file system, process environment and CLI.
    ///
    /// # Errors
    ///
    /// Returns `Config` if the config file is unreadable or invalid.
    pub fn load(cli: &CliOverrides) -> Result<Self> {
        let file = match cli.config_path.as_deref() {
            Some(path) => Some(read_file_config(path)?),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Some(read_file_config(default_path)?)
                } else {
                    None
                }
            }
        };
        Ok(Self::from_sources(file, |key| std::env::var(key).ok(), cli))
    }

    /// Merge the layers. `env` looks up a variable by name.
    #[must_use]
    pub fn from_sources<F>(file: Option<FileConfig>, env: F, cli: &CliOverrides) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(file) = file {
            config.apply_file(file);
        }
        config.apply_env(env);
        config.apply_cli(cli);

        config.issues_path = normalize(config.issues_path);
        config.translations_path = normalize(config.translations_path);

        tracing::debug!(?config, "Resolved configuration");
        config
    }

    /// `host:port` string for binding.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn apply_file(&mut self, file: FileConfig) {
        if let Some(path) = file.issues_path {
            self.issues_path = path;
        }
        if let Some(path) = file.translations_path {
            self.translations_path = path;
        }
        if let Some(host) = file.host {
            self.host = host;
        }
        if let Some(port) = file.port {
            self.port = port;
        }
        if let Some(debug) = file.debug {
            self.debug = debug;
        }
        if let Some(name) = file.service_name {
            self.service_name = name;
        }
    }

    fn apply_env<F>(&mut self, env: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // FLASK_DEBUG is honoured for deployments that still export it.
        if let Some(flag) = non_empty(env("UMBRA_DEBUG")).or_else(|| non_empty(env("FLASK_DEBUG")))
        {
            self.debug = flag.trim() == "1";
        }
    }

    fn apply_cli(&mut self, cli: &CliOverrides) {
        if let Some(path) = &cli.issues_path {
            self.issues_path.clone_from(path);
        }
        if let Some(path) = &cli.translations_path {
            self.translations_path.clone_from(path);
        }
        if let Some(host) = &cli.host {
            self.host.clone_from(host);
        }
        if let Some(port) = cli.port {
            self.port = port;
        }
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| UmbraError::Config(format!("cannot read {}: {e}", path.display())))?;
    serde_yaml::from_str(&content)
        .map_err(|e| UmbraError::Config(format!("invalid {}: {e}", path.display())))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn normalize(path: PathBuf) -> PathBuf {
    dunce::canonicalize(&path).unwrap_or(path)
}
