//! Content fingerprint of a rendered report.

use crate::error::ReportResult;
use crate::render::Report;
use sha2::{Digest, Sha256};

impl Report {
    /// SHA-256 of the compact JSON form, hex encoded.
    pub fn fingerprint(&self) -> ReportResult<String> {
        let mut hasher = Sha256::new();
        let json = serde_json::to_string(self)?;
        hasher.update(json.as_bytes());
        let result = hasher.finalize();
        Ok(format!("{:x}", result))
    }
}
