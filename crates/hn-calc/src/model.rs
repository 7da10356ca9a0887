//! Calculation inputs.
//!
//! Everything here is plain data. Raw cells arrive possibly missing or
//! malformed; [`CalculationRequest::sanitized`] coerces them once at the
//! boundary so the stages only ever see finite, non-negative numbers.

use crate::error::CalcError;
use crate::norms::DEFAULT_QI;
use core::fmt;
use core::str::FromStr;
use hn_core::{Real, coerce_non_negative};
use serde::{Deserialize, Serialize};

/// Building usage category with a normative energy-performance target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildingCategory {
    FamilyHouse,
    ApartmentBuilding,
    Administrative,
    School,
    Hospital,
    Hotel,
    SportsHall,
    Retail,
}

impl BuildingCategory {
    pub const ALL: [BuildingCategory; 8] = [
        BuildingCategory::FamilyHouse,
        BuildingCategory::ApartmentBuilding,
        BuildingCategory::Administrative,
        BuildingCategory::School,
        BuildingCategory::Hospital,
        BuildingCategory::Hotel,
        BuildingCategory::SportsHall,
        BuildingCategory::Retail,
    ];

    /// Identifier used in building files.
    pub fn as_str(self) -> &'static str {
        match self {
            BuildingCategory::FamilyHouse => "family_house",
            BuildingCategory::ApartmentBuilding => "apartment_building",
            BuildingCategory::Administrative => "administrative",
            BuildingCategory::School => "school",
            BuildingCategory::Hospital => "hospital",
            BuildingCategory::Hotel => "hotel",
            BuildingCategory::SportsHall => "sports_hall",
            BuildingCategory::Retail => "retail",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BuildingCategory::FamilyHouse => "Family house",
            BuildingCategory::ApartmentBuilding => "Apartment building",
            BuildingCategory::Administrative => "Administrative building",
            BuildingCategory::School => "School",
            BuildingCategory::Hospital => "Hospital",
            BuildingCategory::Hotel => "Hotel",
            BuildingCategory::SportsHall => "Sports hall",
            BuildingCategory::Retail => "Retail building",
        }
    }
}

impl fmt::Display for BuildingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildingCategory {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BuildingCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CalcError::UnknownCategory {
                name: s.to_string(),
            })
    }
}

/// The caller's category choice.
///
/// Unmapped names are kept rather than rejected: they select the generic
/// energy-performance fallback, which differs from the "nothing selected"
/// default.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategorySelection {
    #[default]
    Unselected,
    Known(BuildingCategory),
    Unmapped(String),
}

impl CategorySelection {
    pub fn parse(name: Option<&str>) -> Self {
        match name {
            None => CategorySelection::Unselected,
            Some(name) => match name.parse::<BuildingCategory>() {
                Ok(category) => CategorySelection::Known(category),
                Err(_) => CategorySelection::Unmapped(name.to_string()),
            },
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            CategorySelection::Unselected => None,
            CategorySelection::Known(category) => Some(category.as_str()),
            CategorySelection::Unmapped(name) => Some(name),
        }
    }
}

/// Internal-gain class; each carries a specific gain qi in W/m².
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InternalGainClass {
    FamilyHouse,
    ApartmentBuilding,
    NonResidential,
}

impl InternalGainClass {
    pub fn qi(self) -> Real {
        match self {
            InternalGainClass::FamilyHouse => 4.0,
            InternalGainClass::ApartmentBuilding => 5.0,
            InternalGainClass::NonResidential => 6.0,
        }
    }

    /// Class implied by a category selection, if any.
    pub fn for_category(selection: &CategorySelection) -> Option<Self> {
        match selection {
            CategorySelection::Unselected => None,
            CategorySelection::Known(BuildingCategory::FamilyHouse) => {
                Some(InternalGainClass::FamilyHouse)
            }
            CategorySelection::Known(BuildingCategory::ApartmentBuilding) => {
                Some(InternalGainClass::ApartmentBuilding)
            }
            CategorySelection::Known(_) | CategorySelection::Unmapped(_) => {
                Some(InternalGainClass::NonResidential)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThermalBridgeMethod {
    #[default]
    Exact,
    FlatRate,
}

/// Standard flat-rate thermal-bridge surcharges ΔU, W/(m²·K).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlatRateDeltaU {
    /// Details optimized for thermal bridges.
    Optimized,
    /// Details designed against a bridge catalogue.
    Catalogued,
    /// Ordinary details.
    Standard,
    /// Bridges not addressed in the design.
    Unaddressed,
}

impl FlatRateDeltaU {
    pub const ALL: [FlatRateDeltaU; 4] = [
        FlatRateDeltaU::Optimized,
        FlatRateDeltaU::Catalogued,
        FlatRateDeltaU::Standard,
        FlatRateDeltaU::Unaddressed,
    ];

    pub fn value(self) -> Real {
        match self {
            FlatRateDeltaU::Optimized => 0.02,
            FlatRateDeltaU::Catalogued => 0.05,
            FlatRateDeltaU::Standard => 0.10,
            FlatRateDeltaU::Unaddressed => 0.15,
        }
    }

    /// Inverse of [`FlatRateDeltaU::value`] for exact table values.
    pub fn from_value(value: Real) -> Option<Self> {
        FlatRateDeltaU::ALL
            .into_iter()
            .find(|v| (v.value() - value).abs() < 1e-9)
    }
}

/// Scalar building inputs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BuildingInputs {
    /// Total floor area Ab, m².
    pub floor_area: Real,
    /// Enclosed volume Vb, m³.
    pub volume: Real,
    /// Air-exchange rate n, 1/h.
    pub air_exchange_rate: Real,
    pub category: CategorySelection,
    /// Explicit gain class; when `None` the class follows the category.
    pub internal_gain_class: Option<InternalGainClass>,
    pub thermal_bridge_method: ThermalBridgeMethod,
    pub exact_delta_u: Real,
    pub flat_rate_delta_u: Option<FlatRateDeltaU>,
}

impl BuildingInputs {
    /// Effective specific internal gain qi.
    pub fn qi(&self) -> Real {
        self.internal_gain_class
            .or_else(|| InternalGainClass::for_category(&self.category))
            .map(InternalGainClass::qi)
            .unwrap_or(DEFAULT_QI)
    }

    /// ΔU of the active thermal-bridge method.
    pub fn delta_u(&self) -> Real {
        match self.thermal_bridge_method {
            ThermalBridgeMethod::Exact => self.exact_delta_u,
            ThermalBridgeMethod::FlatRate => {
                self.flat_rate_delta_u.map(FlatRateDeltaU::value).unwrap_or(0.0)
            }
        }
    }

    pub fn sanitized(&self) -> Self {
        Self {
            floor_area: sanitize_scalar(self.floor_area),
            volume: sanitize_scalar(self.volume),
            air_exchange_rate: sanitize_scalar(self.air_exchange_rate),
            exact_delta_u: sanitize_scalar(self.exact_delta_u),
            ..self.clone()
        }
    }
}

/// One row of the envelope table, as entered.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EnvelopeElementRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Element area A, m².
    #[serde(default)]
    pub area: Option<Real>,
    /// Thermal transmittance U, W/(m²·K).
    #[serde(default)]
    pub u: Option<Real>,
    /// Temperature reduction factor b; 1 when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b: Option<Real>,
}

impl EnvelopeElementRow {
    pub fn new(area: Real, u: Real) -> Self {
        Self {
            label: None,
            area: Some(area),
            u: Some(u),
            b: None,
        }
    }

    pub fn with_b(mut self, b: Real) -> Self {
        self.b = Some(b);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn area(&self) -> Real {
        self.area.unwrap_or(0.0)
    }

    pub fn u(&self) -> Real {
        self.u.unwrap_or(0.0)
    }

    pub fn b(&self) -> Real {
        self.b.unwrap_or(1.0)
    }

    /// Empty or malformed cells become 0; a missing or malformed b becomes 1.
    pub fn sanitized(&self) -> Self {
        let b = match self.b {
            Some(b) if b.is_finite() => b.max(0.0),
            _ => 1.0,
        };
        Self {
            label: self.label.clone(),
            area: Some(coerce_non_negative(self.area)),
            u: Some(coerce_non_negative(self.u)),
            b: Some(b),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    South,
    East,
    West,
    North,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::South,
        Orientation::East,
        Orientation::West,
        Orientation::North,
    ];

    pub fn index(self) -> usize {
        match self {
            Orientation::South => 0,
            Orientation::East => 1,
            Orientation::West => 2,
            Orientation::North => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::South => "south",
            Orientation::East => "east",
            Orientation::West => "west",
            Orientation::North => "north",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Orientation::ALL
            .into_iter()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| CalcError::UnknownOrientation {
                name: s.to_string(),
            })
    }
}

/// Glazing facing one orientation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrientationGain {
    /// Total solar energy transmittance g.
    pub g: Real,
    /// Effective glazed area An, m².
    pub glazed_area: Real,
}

impl OrientationGain {
    pub fn new(g: Real, glazed_area: Real) -> Self {
        Self { g, glazed_area }
    }

    pub fn sanitized(&self) -> Self {
        Self {
            g: sanitize_scalar(self.g),
            glazed_area: sanitize_scalar(self.glazed_area),
        }
    }
}

/// Everything the pipeline reads.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CalculationRequest {
    pub building: BuildingInputs,
    pub envelope: Vec<EnvelopeElementRow>,
    /// Indexed by [`Orientation::index`].
    pub glazing: [OrientationGain; 4],
}

impl CalculationRequest {
    pub fn glazing(&self, orientation: Orientation) -> &OrientationGain {
        &self.glazing[orientation.index()]
    }

    pub fn set_glazing(&mut self, orientation: Orientation, gain: OrientationGain) {
        self.glazing[orientation.index()] = gain;
    }

    pub fn sanitized(&self) -> Self {
        Self {
            building: self.building.sanitized(),
            envelope: self.envelope.iter().map(|r| r.sanitized()).collect(),
            glazing: self.glazing.map(|g| g.sanitized()),
        }
    }
}

/// Coerce a single edited value the same way a full sanitize would.
pub(crate) fn sanitize_scalar(v: Real) -> Real {
    coerce_non_negative(Some(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_round_trips_through_its_name() {
        for category in BuildingCategory::ALL {
            assert_eq!(category.as_str().parse::<BuildingCategory>(), Ok(category));
        }
        assert!(matches!(
            "garage".parse::<BuildingCategory>(),
            Err(CalcError::UnknownCategory { .. })
        ));
    }

    #[test]
    fn category_selection_keeps_unmapped_names() {
        assert_eq!(CategorySelection::parse(None), CategorySelection::Unselected);
        assert_eq!(
            CategorySelection::parse(Some("hotel")),
            CategorySelection::Known(BuildingCategory::Hotel)
        );
        let unmapped = CategorySelection::parse(Some("garage"));
        assert_eq!(unmapped, CategorySelection::Unmapped("garage".into()));
        assert_eq!(unmapped.name(), Some("garage"));
    }

    #[test]
    fn qi_follows_override_then_category_then_default() {
        let mut inputs = BuildingInputs::default();
        assert_eq!(inputs.qi(), 4.0);

        inputs.category = CategorySelection::Known(BuildingCategory::ApartmentBuilding);
        assert_eq!(inputs.qi(), 5.0);

        inputs.category = CategorySelection::Known(BuildingCategory::Hospital);
        assert_eq!(inputs.qi(), 6.0);

        inputs.category = CategorySelection::Unmapped("garage".into());
        assert_eq!(inputs.qi(), 6.0);

        inputs.internal_gain_class = Some(InternalGainClass::FamilyHouse);
        assert_eq!(inputs.qi(), 4.0);
    }

    #[test]
    fn delta_u_follows_active_method() {
        let mut inputs = BuildingInputs {
            exact_delta_u: 0.03,
            flat_rate_delta_u: Some(FlatRateDeltaU::Standard),
            ..Default::default()
        };
        assert_eq!(inputs.delta_u(), 0.03);

        inputs.thermal_bridge_method = ThermalBridgeMethod::FlatRate;
        assert_eq!(inputs.delta_u(), 0.10);

        inputs.flat_rate_delta_u = None;
        assert_eq!(inputs.delta_u(), 0.0);
    }

    #[test]
    fn flat_rate_values_invert() {
        for v in FlatRateDeltaU::ALL {
            assert_eq!(FlatRateDeltaU::from_value(v.value()), Some(v));
        }
        assert_eq!(FlatRateDeltaU::from_value(0.07), None);
    }

    #[test]
    fn row_sanitize_defaults() {
        let row = EnvelopeElementRow {
            label: Some("roof".into()),
            area: None,
            u: Some(f64::NAN),
            b: None,
        }
        .sanitized();
        assert_eq!(row.area(), 0.0);
        assert_eq!(row.u(), 0.0);
        assert_eq!(row.b(), 1.0);
        assert_eq!(row.label.as_deref(), Some("roof"));

        let negative = EnvelopeElementRow::new(-5.0, 0.3).with_b(-1.0).sanitized();
        assert_eq!(negative.area(), 0.0);
        assert_eq!(negative.b(), 0.0);
    }

    #[test]
    fn request_sanitize_clamps_building_inputs() {
        let request = CalculationRequest {
            building: BuildingInputs {
                floor_area: f64::NAN,
                volume: -10.0,
                air_exchange_rate: 0.5,
                ..Default::default()
            },
            envelope: vec![],
            glazing: [OrientationGain::new(-0.6, 5.0); 4],
        }
        .sanitized();
        assert_eq!(request.building.floor_area, 0.0);
        assert_eq!(request.building.volume, 0.0);
        assert_eq!(request.building.air_exchange_rate, 0.5);
        assert_eq!(request.glazing(Orientation::West).g, 0.0);
        assert_eq!(request.glazing(Orientation::West).glazed_area, 5.0);
    }

    #[test]
    fn orientation_indices_follow_all() {
        for (i, o) in Orientation::ALL.into_iter().enumerate() {
            assert_eq!(o.index(), i);
            assert_eq!(o.as_str().parse::<Orientation>(), Ok(o));
        }
    }
}
