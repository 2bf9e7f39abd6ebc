//! Serve command implementation.

use crate::config::Config;
use crate::error::Result;
use crate::server;

/// Run the HTTP server on a multi-threaded tokio runtime until interrupted.
///
/// # Errors
///
/// Returns an error if the runtime cannot start, the catalog cannot be
/// loaded, or the address cannot be bound.
pub fn execute(config: &Config) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(server::serve(config))
}
