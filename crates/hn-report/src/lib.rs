//! hn-report: fixed-precision rendering of calculation results.
//!
//! Numbers are rounded only here. A [`Report`] holds the rendered strings,
//! prints as an aligned text table and serializes to JSON; its fingerprint
//! is stable across runs for identical inputs.

pub mod error;
pub mod hash;
pub mod precision;
pub mod render;
pub mod tables;
mod text;

pub use error::{ReportError, ReportResult};
pub use precision::{Precision, format_value, to_fixed};
pub use render::{ComplianceLine, EnvelopeLine, FieldLine, GainLine, Report, render};
pub use tables::render_tables;
