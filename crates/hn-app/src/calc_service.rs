//! Calculation and report rendering.

use hn_calc::{CalculationRequest, CalculationResult, InputEdit, Pipeline, StageSet, calculate};
use hn_project::Project;
use hn_report::{Report, render};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

use crate::error::{AppError, AppResult};
use crate::project_service;

/// Output encodings for a rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(AppError::Report(format!("unknown output format '{other}'"))),
        }
    }
}

/// Everything produced by one calculation.
#[derive(Debug, Clone)]
pub struct CalcResponse {
    pub request: CalculationRequest,
    pub result: CalculationResult,
    pub report: Report,
}

pub fn calculate_project(project: &Project) -> CalcResponse {
    let request = project.to_request();
    let result = calculate(&request);
    let report = render(&result).with_title(project.name.clone());
    info!(
        name = %project.name,
        compliant = result.compliance.all_compliant(),
        "calculated building"
    );
    CalcResponse {
        request,
        result,
        report,
    }
}

/// Load, validate and calculate a building file.
pub fn calculate_file(path: &Path) -> AppResult<CalcResponse> {
    let project = project_service::load_project(path)?;
    Ok(calculate_project(&project))
}

pub fn format_report(report: &Report, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Text => Ok(report.to_string()),
        OutputFormat::Json => Ok(report.to_json()?),
    }
}

/// Interactive editing of one building.
///
/// Each edit reruns only the stages that depend on it.
#[derive(Debug, Clone)]
pub struct CalcSession {
    name: String,
    pipeline: Pipeline,
}

impl CalcSession {
    pub fn new(project: &Project) -> Self {
        Self {
            name: project.name.clone(),
            pipeline: Pipeline::new(project.to_request()),
        }
    }

    pub fn apply(&mut self, edit: InputEdit) -> AppResult<StageSet> {
        let stages = self.pipeline.apply(edit)?;
        debug!(name = %self.name, ?stages, "applied edit");
        Ok(stages)
    }

    pub fn result(&self) -> &CalculationResult {
        self.pipeline.result()
    }

    pub fn report(&self) -> Report {
        render(self.pipeline.result()).with_title(self.name.clone())
    }

    /// Current inputs as a building file.
    pub fn to_project(&self) -> Project {
        Project::from_request(self.name.clone(), self.pipeline.request())
    }
}
