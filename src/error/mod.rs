//! Error handling for the risk estimator.

pub mod util;

use std::path::PathBuf;

/// Specialized error type for risk estimation operations
#[derive(Debug, thiserror::Error)]
pub enum HeartExpertError {
    /// One or more of the thirteen input fields is missing or not a number
    #[error("invalid input: {message}")]
    InputValidation {
        /// What was wrong, naming the offending field(s)
        message: String,
    },

    /// A model or scaler artifact could not be loaded or is malformed
    ///
    /// This is a fatal startup condition, never a per-request error.
    #[error("failed to load artifact {}: {message}", .path.display())]
    ArtifactLoad {
        /// Path of the artifact that failed to load
        path: PathBuf,
        /// What was wrong with it
        message: String,
    },

    /// Error opening or reading a file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error encoding or decoding a serialized artifact
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HeartExpertError {
    /// Create an `InputValidation` error
    pub fn input_validation(message: impl Into<String>) -> Self {
        Self::InputValidation {
            message: message.into(),
        }
    }

    /// Create an `ArtifactLoad` error carrying the artifact path
    pub fn artifact_load(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ArtifactLoad {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result type for risk estimation operations
pub type Result<T> = std::result::Result<T, HeartExpertError>;
