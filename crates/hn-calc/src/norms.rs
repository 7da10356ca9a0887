//! Normative constants and lookup tables.
//!
//! Values follow the recommended levels in force from 1 January 2016.

use crate::model::{BuildingCategory, CategorySelection, Orientation};
use hn_core::Real;

/// Ventilation loss coefficient, W·h/(m³·K): HV = 0.264 · n · V.
pub const VENTILATION_COEFFICIENT: Real = 0.264;

/// Shading correction applied to every glazed area.
pub const SOLAR_SHADING_FACTOR: Real = 0.5;
/// Frame/utilization factor applied to every glazed area.
pub const SOLAR_FRAME_FACTOR: Real = 0.9;

/// Converts qi in W/m² into annual kWh for the reference heating season.
pub const INTERNAL_GAIN_FACTOR: Real = 5.0;
/// qi used when neither a gain class nor a category is selected.
pub const DEFAULT_QI: Real = 4.0;

/// Degree-day factor multiplying the total heat-loss coefficient.
pub const DEGREE_DAY_FACTOR: Real = 82.1;
/// Utilization factor applied to the sum of internal and solar gains.
pub const GAIN_UTILIZATION_FACTOR: Real = 0.95;

/// QH,nd,N1 = 0.5 · (28.57 + 71.43 · A/V)
pub const HEAT_NEED_TARGET_SCALE: Real = 0.5;
pub const HEAT_NEED_TARGET_BASE: Real = 28.57;
pub const HEAT_NEED_TARGET_SLOPE: Real = 71.43;

/// Uem,N by shape factor: inclusive upper bound, target.
pub const UEM_TARGET_STEPS: [(Real, Real); 7] = [
    (0.3, 0.38),
    (0.4, 0.35),
    (0.5, 0.33),
    (0.6, 0.31),
    (0.7, 0.30),
    (0.8, 0.29),
    (0.9, 0.28),
];
/// Uem,N for shape factors above the last step.
pub const UEM_TARGET_ABOVE: Real = 0.27;

/// Q_N,EP when no category is selected at all (family house value).
pub const ENERGY_PERFORMANCE_TARGET_UNSELECTED: Real = 40.7;
/// Q_N,EP when a category is selected but has no table entry.
pub const ENERGY_PERFORMANCE_TARGET_UNMAPPED: Real = 30.0;

/// Solar intensity for an orientation over the heating season, kWh/m².
pub fn solar_intensity(orientation: Orientation) -> Real {
    match orientation {
        Orientation::South => 320.0,
        Orientation::East => 200.0,
        Orientation::West => 200.0,
        Orientation::North => 100.0,
    }
}

/// Normalized average heat-transfer coefficient Uem,N for a shape factor.
///
/// Steps are evaluated in ascending order and the first bound the shape
/// factor does not exceed wins, so 0.3 selects 0.38.
pub fn uem_target(shape_factor: Real) -> Real {
    UEM_TARGET_STEPS
        .iter()
        .find(|(bound, _)| shape_factor <= *bound)
        .map(|(_, target)| *target)
        .unwrap_or(UEM_TARGET_ABOVE)
}

/// Normalized specific heat need QH,nd,N1 for a shape factor.
pub fn heat_need_target(shape_factor: Real) -> Real {
    HEAT_NEED_TARGET_SCALE * (HEAT_NEED_TARGET_BASE + HEAT_NEED_TARGET_SLOPE * shape_factor)
}

impl BuildingCategory {
    /// Q_N,EP table entry for the category.
    pub fn energy_performance_target(self) -> Real {
        match self {
            BuildingCategory::FamilyHouse => 40.7,
            BuildingCategory::ApartmentBuilding => 25.0,
            BuildingCategory::Administrative => 26.8,
            BuildingCategory::School => 27.6,
            BuildingCategory::Hospital => 33.2,
            BuildingCategory::Hotel => 33.7,
            BuildingCategory::SportsHall => 31.5,
            BuildingCategory::Retail => 30.9,
        }
    }
}

/// Q_N,EP for the current selection.
///
/// "Nothing selected" and "selected but unmapped" are distinct defaults.
pub fn energy_performance_target(selection: &CategorySelection) -> Real {
    match selection {
        CategorySelection::Unselected => ENERGY_PERFORMANCE_TARGET_UNSELECTED,
        CategorySelection::Known(category) => category.energy_performance_target(),
        CategorySelection::Unmapped(_) => ENERGY_PERFORMANCE_TARGET_UNMAPPED,
    }
}

/// One printable row of a reference table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub key: String,
    pub value: Real,
}

/// Uem,N reference table, in lookup order.
pub fn uem_target_table() -> Vec<TableRow> {
    let mut rows: Vec<TableRow> = UEM_TARGET_STEPS
        .iter()
        .map(|(bound, target)| TableRow {
            key: format!("A/V <= {bound}"),
            value: *target,
        })
        .collect();
    if let Some((last, _)) = UEM_TARGET_STEPS.last() {
        rows.push(TableRow {
            key: format!("A/V > {last}"),
            value: UEM_TARGET_ABOVE,
        });
    }
    rows
}

/// Q_N,EP reference table, one row per category.
pub fn energy_performance_table() -> Vec<TableRow> {
    BuildingCategory::ALL
        .iter()
        .map(|category| TableRow {
            key: category.label().to_string(),
            value: category.energy_performance_target(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn uem_target_boundaries_select_lower_bucket() {
        assert_eq!(uem_target(0.0), 0.38);
        assert_eq!(uem_target(0.3), 0.38);
        assert_eq!(uem_target(0.30001), 0.35);
        assert_eq!(uem_target(0.4), 0.35);
        assert_eq!(uem_target(0.5), 0.33);
        assert_eq!(uem_target(0.6), 0.31);
        assert_eq!(uem_target(0.65), 0.30);
        assert_eq!(uem_target(0.7), 0.30);
        assert_eq!(uem_target(0.8), 0.29);
        assert_eq!(uem_target(0.9), 0.28);
        assert_eq!(uem_target(0.9001), 0.27);
        assert_eq!(uem_target(3.0), 0.27);
    }

    #[test]
    fn heat_need_target_at_known_shape_factor() {
        let target = heat_need_target(0.65);
        assert!((target - 37.49975).abs() < 1e-9);
        assert_eq!(format!("{target:.3}"), "37.500");
    }

    #[test]
    fn energy_performance_fallbacks_are_distinct() {
        assert_eq!(
            energy_performance_target(&CategorySelection::Unselected),
            40.7
        );
        assert_eq!(
            energy_performance_target(&CategorySelection::Unmapped("garage".into())),
            30.0
        );
        assert_eq!(
            energy_performance_target(&CategorySelection::Known(BuildingCategory::School)),
            27.6
        );
    }

    #[test]
    fn every_category_has_a_table_row() {
        let table = energy_performance_table();
        assert_eq!(table.len(), 8);
        assert_eq!(table[0].value, 40.7);
        assert_eq!(table[7].value, 30.9);
    }

    #[test]
    fn uem_table_lists_all_buckets() {
        let table = uem_target_table();
        assert_eq!(table.len(), 8);
        assert_eq!(table[0].key, "A/V <= 0.3");
        assert_eq!(table[7].key, "A/V > 0.9");
        assert_eq!(table[7].value, 0.27);
    }

    proptest! {
        #[test]
        fn uem_target_is_non_increasing(a in 0.0_f64..2.0, b in 0.0_f64..2.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(uem_target(lo) >= uem_target(hi));
        }
    }
}
