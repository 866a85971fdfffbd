//! Error types for save-slot I/O.

use thiserror::Error;

/// Errors that can occur when saving or loading a player record.
#[derive(Debug, Error)]
pub enum SaveError {
    /// Slot file could not be read or written.
    #[error("Save slot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Record could not be serialized.
    #[error("Failed to serialize save data: {0}")]
    Serialize(#[from] ron::Error),

    /// Slot file exists but could not be parsed.
    #[error("Failed to parse save slot: {0}")]
    Parse(#[from] ron::error::SpannedError),
}
