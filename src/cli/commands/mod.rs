//! Command implementations, one module per subcommand.

pub mod close;
pub mod complete;
pub mod list;
pub mod serve;
pub mod show;
pub mod summary;
pub mod translations;
pub mod version;
