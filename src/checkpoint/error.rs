//! Checkpoint error types.

use thiserror::Error;

/// Errors that can occur while encoding, decoding or restoring checkpoints.
#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("JSON checkpoint codec failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Binary checkpoint codec failed: {0}")]
    Binary(#[from] bincode::Error),

    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The checkpoint was taken from a machine with another initial state.
    #[error("Checkpoint starts in '{found}' but this machine starts in '{expected}'")]
    InitialStateMismatch { expected: String, found: String },

    #[error("Checkpoint state '{0}' is not declared by this machine")]
    UndeclaredState(String),

    /// The checkpoint's current state is not where its history leads.
    #[error("Checkpoint state '{0}' does not follow from its recorded history")]
    InconsistentState(String),
}
