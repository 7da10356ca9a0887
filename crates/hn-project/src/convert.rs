//! Conversion between the file schema and calculation requests.

use crate::migrate::LATEST_VERSION;
use crate::schema::{
    BuildingDef, EnvelopeElementDef, GlazingDef, Project, ThermalBridgesDef,
};
use hn_calc::{
    BuildingInputs, CalculationRequest, CategorySelection, EnvelopeElementRow, Orientation,
    OrientationGain,
};
use hn_core::coerce;

impl Project {
    /// Build the calculation request described by this file.
    ///
    /// Empty fields become 0; orientations without an entry have no glazing.
    pub fn to_request(&self) -> CalculationRequest {
        let building = &self.building;
        let bridges = &self.thermal_bridges;

        let mut request = CalculationRequest {
            building: BuildingInputs {
                floor_area: coerce(building.floor_area_m2),
                volume: coerce(building.volume_m3),
                air_exchange_rate: coerce(building.air_exchange_rate_per_h),
                category: CategorySelection::parse(building.category.as_deref()),
                internal_gain_class: building.internal_gain_class,
                thermal_bridge_method: bridges.method,
                exact_delta_u: coerce(bridges.exact_delta_u),
                flat_rate_delta_u: bridges.flat_rate,
            },
            envelope: self
                .envelope
                .iter()
                .map(|e| EnvelopeElementRow {
                    label: e.label.clone(),
                    area: e.area_m2,
                    u: e.u,
                    b: e.b,
                })
                .collect(),
            glazing: Default::default(),
        };

        for entry in &self.glazing {
            request.set_glazing(
                entry.orientation,
                OrientationGain::new(coerce(entry.g), coerce(entry.area_m2)),
            );
        }

        request
    }

    /// File representation of a request, at the latest schema version.
    pub fn from_request(name: impl Into<String>, request: &CalculationRequest) -> Self {
        let building = &request.building;
        Project {
            version: LATEST_VERSION,
            name: name.into(),
            building: BuildingDef {
                floor_area_m2: Some(building.floor_area),
                volume_m3: Some(building.volume),
                air_exchange_rate_per_h: Some(building.air_exchange_rate),
                category: building.category.name().map(str::to_string),
                internal_gain_class: building.internal_gain_class,
            },
            thermal_bridges: ThermalBridgesDef {
                method: building.thermal_bridge_method,
                exact_delta_u: Some(building.exact_delta_u),
                flat_rate: building.flat_rate_delta_u,
                flat_rate_value: None,
            },
            envelope: request
                .envelope
                .iter()
                .map(|r| EnvelopeElementDef {
                    label: r.label.clone(),
                    area_m2: r.area,
                    u: r.u,
                    b: r.b,
                })
                .collect(),
            glazing: Orientation::ALL
                .iter()
                .map(|o| {
                    let gain = request.glazing(*o);
                    GlazingDef {
                        orientation: *o,
                        g: Some(gain.g),
                        area_m2: Some(gain.glazed_area),
                    }
                })
                .collect(),
        }
    }
}
