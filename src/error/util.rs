//! Utility functions for error handling
//!
//! This module provides utility functions to make error handling more convenient.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{HeartExpertError, Result};

/// Safely open a file with rich error information
///
/// This function attempts to open a file and provides detailed
/// error information if the operation fails.
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
///
/// # Returns
/// * `Result<fs::File>` - The opened file or a detailed error
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    // Check if the path exists
    if !path.exists() {
        return Err(HeartExpertError::artifact_load(
            path,
            format!("file not found (needed for {purpose})"),
        ));
    }

    // Check if the path is a file
    if !path.is_file() {
        return Err(HeartExpertError::artifact_load(
            path,
            format!("path is not a file (expected a file for {purpose})"),
        ));
    }

    // Try to open the file
    match fs::File::open(path) {
        Ok(file) => Ok(file),
        Err(e) => {
            // Provide different error messages based on the error kind
            let context = match e.kind() {
                io::ErrorKind::PermissionDenied => {
                    "permission denied - check file permissions".to_string()
                }
                io::ErrorKind::NotFound => {
                    "file not found - it may have been deleted during operation".to_string()
                }
                _ => format!("failed to open file for {purpose}"),
            };

            Err(HeartExpertError::artifact_load(
                path,
                format!("{context}: {e}"),
            ))
        }
    }
}

/// Check that an artifact path exists and is a readable file
pub fn validate_artifact_file(path: &Path, purpose: &str) -> Result<()> {
    safe_open_file(path, purpose).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_file_reports_path_and_purpose() {
        let path = PathBuf::from("/nonexistent/scaler.json");
        let err = safe_open_file(&path, "scaler").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("scaler.json"));
        assert!(message.contains("not found"));
    }

    #[test]
    fn test_directory_is_rejected() {
        let dir = std::env::temp_dir();
        let err = validate_artifact_file(&dir, "model").unwrap_err();
        assert!(err.to_string().contains("not a file"));
    }
}
