//! `umbra-lib` — issue list and translation catalog library.
//!
//! Provides the synchronous core used by the `umbra` CLI and HTTP server.
//! Issues are stored as a JSON array; translations as a nested JSON object.
//!
//! # Quick Start
//!
//! ```no_run
//! use umbra_lib::{TranslationCatalog, store};
//!
//! let issues = store::load_issues("data/git_issues.json").unwrap();
//! let closed = store::close_implemented_issues(&issues);
//! let closed = store::complete_issue(&closed, 2, Some("Shipped")).unwrap();
//! store::save_issues(&closed, "data/git_issues.json").unwrap();
//! println!("{}", store::summarize_open_issues(&closed));
//!
//! let catalog = TranslationCatalog::load("data/translations.json").unwrap();
//! let greeting = catalog.lookup_key("fr", "greeting").unwrap();
//! ```

pub mod catalog;
pub mod error;
pub mod json;
pub mod model;
pub mod query;
pub mod store;

pub use catalog::{LocaleTranslations, TranslationCatalog};
pub use error::{Result, UmbraError};
pub use model::{Issue, Status};
pub use query::IssueFilter;
