//! Schema migration framework.

use crate::ProjectError;
use crate::schema::Project;
use hn_calc::FlatRateDeltaU;

pub const LATEST_VERSION: u32 = 2;

pub fn migrate_to_latest(mut project: Project) -> Result<Project, ProjectError> {
    while project.version < LATEST_VERSION {
        project = migrate_one_version(project)?;
    }
    Ok(project)
}

fn migrate_one_version(project: Project) -> Result<Project, ProjectError> {
    match project.version {
        1 => migrate_v1_to_v2(project),
        v => Err(ProjectError::Migration {
            what: format!("No migration path from version {}", v),
        }),
    }
}

fn migrate_v1_to_v2(mut project: Project) -> Result<Project, ProjectError> {
    let bridges = &mut project.thermal_bridges;
    if let Some(value) = bridges.flat_rate_value.take() {
        let class = FlatRateDeltaU::from_value(value).ok_or_else(|| ProjectError::Migration {
            what: format!("flat_rate_value {} is not a standard flat-rate ΔU", value),
        })?;
        bridges.flat_rate = Some(class);
    }

    project.version = 2;
    Ok(project)
}
