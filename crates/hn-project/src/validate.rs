//! Building file validation.

use crate::schema::{BuildingDef, EnvelopeElementDef, GlazingDef, Project, ThermalBridgesDef};
use hn_core::{HnError, ensure_non_negative};
use std::collections::HashSet;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate entry: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_project(project: &Project) -> Result<(), ValidationError> {
    if project.version > crate::migrate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: project.version,
        });
    }

    validate_building(&project.building)?;
    validate_thermal_bridges(&project.thermal_bridges)?;

    for (index, element) in project.envelope.iter().enumerate() {
        validate_envelope_element(index, element)?;
    }

    validate_glazing(&project.glazing)?;

    Ok(())
}

fn validate_building(building: &BuildingDef) -> Result<(), ValidationError> {
    check_optional("building floor_area_m2", building.floor_area_m2)?;
    check_optional("building volume_m3", building.volume_m3)?;
    check_optional(
        "building air_exchange_rate_per_h",
        building.air_exchange_rate_per_h,
    )?;

    if let Some(category) = &building.category {
        if category.trim().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "building category".to_string(),
                value: category.clone(),
                reason: "omit the field instead of leaving it blank".to_string(),
            });
        }
    }

    Ok(())
}

fn validate_thermal_bridges(bridges: &ThermalBridgesDef) -> Result<(), ValidationError> {
    check_optional("thermal_bridges exact_delta_u", bridges.exact_delta_u)?;

    if let Some(value) = bridges.flat_rate_value {
        return Err(ValidationError::InvalidValue {
            field: "thermal_bridges flat_rate_value".to_string(),
            value: value.to_string(),
            reason: "version 1 field; use flat_rate".to_string(),
        });
    }

    Ok(())
}

fn validate_envelope_element(
    index: usize,
    element: &EnvelopeElementDef,
) -> Result<(), ValidationError> {
    let name = element
        .label
        .clone()
        .unwrap_or_else(|| format!("#{}", index + 1));
    check_optional_named(&name, "area_m2", element.area_m2)?;
    check_optional_named(&name, "u", element.u)?;
    check_optional_named(&name, "b", element.b)?;
    Ok(())
}

fn validate_glazing(glazing: &[GlazingDef]) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for entry in glazing {
        if !seen.insert(entry.orientation) {
            return Err(ValidationError::DuplicateId {
                id: entry.orientation.to_string(),
                context: "glazing".to_string(),
            });
        }
        let name = format!("glazing {}", entry.orientation);
        check_optional_named(&name, "g", entry.g)?;
        check_optional_named(&name, "area_m2", entry.area_m2)?;
    }
    Ok(())
}

fn check_optional(field: &'static str, value: Option<f64>) -> Result<(), ValidationError> {
    match value {
        Some(v) => ensure_non_negative(v, field)
            .map(|_| ())
            .map_err(|e| invalid(field.to_string(), e)),
        None => Ok(()),
    }
}

fn check_optional_named(
    owner: &str,
    field: &'static str,
    value: Option<f64>,
) -> Result<(), ValidationError> {
    match value {
        Some(v) => ensure_non_negative(v, field)
            .map(|_| ())
            .map_err(|e| invalid(format!("{owner} {field}"), e)),
        None => Ok(()),
    }
}

fn invalid(field: String, err: HnError) -> ValidationError {
    let (value, reason) = match err {
        HnError::NonFinite { value, .. } => (value, "must be finite"),
        HnError::Negative { value, .. } => (value, "must be non-negative"),
    };
    ValidationError::InvalidValue {
        field,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
