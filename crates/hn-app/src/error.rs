//! Error types for the hn-app service layer.

use std::path::PathBuf;

/// Unified error for CLI and other front ends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to load building file {path}: {message}")]
    Load { path: PathBuf, message: String },

    #[error("Failed to save building file {path}: {message}")]
    Save { path: PathBuf, message: String },

    #[error("Building file validation failed: {0}")]
    Validation(String),

    #[error("Invalid edit: {0}")]
    InvalidEdit(String),

    #[error("Report error: {0}")]
    Report(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for hn-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<hn_calc::CalcError> for AppError {
    fn from(err: hn_calc::CalcError) -> Self {
        AppError::InvalidEdit(err.to_string())
    }
}

impl From<hn_report::ReportError> for AppError {
    fn from(err: hn_report::ReportError) -> Self {
        AppError::Report(err.to_string())
    }
}
