//! Log output setup.
//!
//! The terminal belongs to the user interface while the game runs, so log records go to a file.
//! Filtering follows `RUST_LOG` and defaults to the `info` level.

use std::{fs::File, path::Path, sync::Arc};

use color_eyre::eyre::{eyre, Result};
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber, writing plain-text records to `path`.
///
/// # Errors
///
/// This function returns an error if the file cannot be created or a global subscriber is already
/// installed.
pub fn init(path: &Path) -> Result<()> {
    let file = File::create(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| eyre!(err))
}
