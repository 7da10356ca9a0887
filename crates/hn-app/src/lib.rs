//! Shared application service layer for the heat-need calculator.
//!
//! Front ends go through this crate to load building files, run the
//! calculation and render reports, so they agree on every step.

pub mod calc_service;
pub mod error;
pub mod project_service;

pub use calc_service::{
    CalcResponse, CalcSession, OutputFormat, calculate_file, calculate_project, format_report,
};
pub use error::{AppError, AppResult};
pub use project_service::{
    ProjectSummary, load_project, sample_project, save_project, summarize, validate_project,
};
