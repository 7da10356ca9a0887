//! Building file loading, saving, validation and introspection.

use hn_calc::{BuildingCategory, CalculationRequest, CategorySelection, EnvelopeElementRow};
use hn_calc::{Orientation, OrientationGain};
use hn_project::Project;
use std::path::Path;
use tracing::info;

use crate::error::{AppError, AppResult};

/// Short description of a building file for listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectSummary {
    pub name: String,
    pub version: u32,
    pub category: Option<String>,
    pub envelope_rows: usize,
    pub glazed_orientations: usize,
}

/// Load a building file; the format follows the extension.
pub fn load_project(path: &Path) -> AppResult<Project> {
    let project = hn_project::load(path).map_err(|e| AppError::Load {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    info!(path = %path.display(), name = %project.name, "loaded building file");
    Ok(project)
}

/// Save a building file; the format follows the extension.
pub fn save_project(path: &Path, project: &Project) -> AppResult<()> {
    hn_project::save(path, project).map_err(|e| AppError::Save {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    info!(path = %path.display(), "saved building file");
    Ok(())
}

pub fn validate_project(project: &Project) -> AppResult<()> {
    hn_project::validate_project(project).map_err(|e| AppError::Validation(e.to_string()))
}

pub fn summarize(project: &Project) -> ProjectSummary {
    ProjectSummary {
        name: project.name.clone(),
        version: project.version,
        category: project.building.category.clone(),
        envelope_rows: project.envelope.len(),
        glazed_orientations: project
            .glazing
            .iter()
            .filter(|g| g.area_m2.unwrap_or(0.0) > 0.0)
            .count(),
    }
}

/// Starter building written by `init`.
pub fn sample_project(name: &str) -> Project {
    let mut request = CalculationRequest::default();
    request.building.floor_area = 150.0;
    request.building.volume = 405.0;
    request.building.air_exchange_rate = 0.5;
    request.building.category = CategorySelection::Known(BuildingCategory::FamilyHouse);
    request.building.exact_delta_u = 0.05;
    request.envelope = vec![
        EnvelopeElementRow::new(180.0, 0.2).with_label("External walls"),
        EnvelopeElementRow::new(80.0, 0.15).with_label("Roof"),
        EnvelopeElementRow::new(80.0, 0.3)
            .with_b(0.5)
            .with_label("Floor on ground"),
        EnvelopeElementRow::new(28.0, 0.9).with_label("Windows"),
    ];
    request.set_glazing(Orientation::South, OrientationGain::new(0.5, 12.0));
    request.set_glazing(Orientation::East, OrientationGain::new(0.5, 6.0));
    request.set_glazing(Orientation::West, OrientationGain::new(0.5, 6.0));
    request.set_glazing(Orientation::North, OrientationGain::new(0.5, 4.0));
    Project::from_request(name, &request)
}
