//! Average storey height.

use crate::model::CalculationRequest;
use crate::result::CalculationResult;
use hn_core::{Length, Real, m2, m3};
use uom::si::length::meter;

/// Vb / Ab, undefined unless both are positive.
pub fn average_height(volume: Real, floor_area: Real) -> Option<Real> {
    if volume > 0.0 && floor_area > 0.0 {
        let height: Length = m3(volume) / m2(floor_area);
        Some(height.get::<meter>())
    } else {
        None
    }
}

pub fn run(request: &CalculationRequest, out: &mut CalculationResult) {
    let building = &request.building;
    out.average_height = average_height(building.volume, building.floor_area);
}
