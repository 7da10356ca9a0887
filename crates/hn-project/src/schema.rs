//! Building file schema definitions.

use hn_calc::{FlatRateDeltaU, InternalGainClass, Orientation, ThermalBridgeMethod};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub building: BuildingDef,
    #[serde(default)]
    pub thermal_bridges: ThermalBridgesDef,
    #[serde(default)]
    pub envelope: Vec<EnvelopeElementDef>,
    #[serde(default)]
    pub glazing: Vec<GlazingDef>,
}

/// Scalar building inputs. Empty fields read as 0.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct BuildingDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_area_m2: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_m3: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub air_exchange_rate_per_h: Option<f64>,
    /// Category identifier; names outside the table are kept as-is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_gain_class: Option<InternalGainClass>,
}

/// Thermal-bridge surcharge settings.
///
/// ```yaml
/// thermal_bridges:
///   method: flat_rate     # or exact
///   exact_delta_u: 0.03
///   flat_rate: standard
/// ```
///
/// Version 1 files stored the flat-rate choice as a bare number
/// (`flat_rate_value: 0.1`); migration converts it to the named class.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ThermalBridgesDef {
    #[serde(default)]
    pub method: ThermalBridgeMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exact_delta_u: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flat_rate: Option<FlatRateDeltaU>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flat_rate_value: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct EnvelopeElementDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub area_m2: Option<f64>,
    #[serde(default)]
    pub u: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GlazingDef {
    pub orientation: Orientation,
    #[serde(default)]
    pub g: Option<f64>,
    #[serde(default)]
    pub area_m2: Option<f64>,
}
