//! Error types for the desktop engine

use thiserror::Error;
use crate::container::ContainerId;
use crate::item::ItemId;

/// Convenient result type for the desktop crate.
pub type Result<T> = std::result::Result<T, DesktopError>;

/// Errors surfaced by explicit lookups and configuration loading.
///
/// Event handlers never return these; they log and report the event as
/// unhandled instead.
#[derive(Debug, Error)]
pub enum DesktopError {
    /// No item with this id in the container that was searched.
    #[error("unknown item: {0}")]
    UnknownItem(ItemId),

    /// The container is not open or has no published geometry.
    #[error("unknown container: {0}")]
    UnknownContainer(ContainerId),

    /// A folder operation was attempted on a plain file.
    #[error("not a folder: {0}")]
    NotAFolder(ItemId),

    /// Configuration values failed validation.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Configuration JSON could not be parsed.
    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The log subscriber could not be installed.
    #[error("logging init failed: {0}")]
    Logging(String),
}
