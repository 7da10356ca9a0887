//! Error types for calculator inputs.
//!
//! The formulas themselves are total; only parsing of named selections and
//! incremental edits addressing a non-existent envelope row can fail.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("Unknown building category: {name}")]
    UnknownCategory { name: String },

    #[error("Unknown orientation: {name}")]
    UnknownOrientation { name: String },

    #[error("Envelope row out of range (index={index}, len={len})")]
    RowOutOfRange { index: usize, len: usize },
}

pub type CalcResult<T> = Result<T, CalcError>;
