// SPDX-License-Identifier: MPL-2.0
//! Logging system initialization.
//!
//! Installs a `tracing` subscriber writing to stderr. The level defaults to
//! INFO and can be overridden through the `RUST_LOG` environment variable.

use crate::error::{Error, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// Filter directive used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Builds the level filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. Fails if one is already installed.
pub fn init_logging() -> Result<()> {
    let subscriber = fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter())
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Logging(e.to_string()))?;

    tracing::info!("clinic_brochure v{} started", env!("CARGO_PKG_VERSION"));

    Ok(())
}
