//! Log subscriber bootstrap
//!
//! The engine only emits `tracing` events; hosts that want them printed call
//! [`init`] once. Repeated calls are no-ops and never panic.

use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;
use crate::error::{DesktopError, Result};

static INSTALLED: OnceLock<()> = OnceLock::new();

/// Install a formatted subscriber filtered by `RUST_LOG`, or `default_filter`
/// when the variable is unset.
pub fn init(default_filter: &str) -> Result<()> {
    if INSTALLED.get().is_some() {
        return Ok(());
    }
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter).map_err(|e| DesktopError::Logging(e.to_string()))?,
    };
    // Fails only if another subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
    let _ = INSTALLED.set(());
    Ok(())
}
