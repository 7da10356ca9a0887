//! Solar, internal and total heat gains over the heating season.

use crate::model::{CalculationRequest, Orientation};
use crate::norms::{INTERNAL_GAIN_FACTOR, SOLAR_FRAME_FACTOR, SOLAR_SHADING_FACTOR, solar_intensity};
use crate::result::{CalculationResult, SolarGain};
use hn_core::Real;

/// QS,j = Is,j · 0.5 · 0.9 · gs,j · An,j
pub fn solar_gain(orientation: Orientation, g: Real, glazed_area: Real) -> Real {
    solar_intensity(orientation) * SOLAR_SHADING_FACTOR * SOLAR_FRAME_FACTOR * g * glazed_area
}

/// Qi = 5 · qi · Ab
pub fn internal_gains(qi: Real, floor_area: Real) -> Real {
    INTERNAL_GAIN_FACTOR * qi * floor_area
}

pub fn run_solar(request: &CalculationRequest, out: &mut CalculationResult) {
    out.solar_gains = Orientation::ALL.map(|orientation| {
        let glazing = request.glazing(orientation);
        SolarGain {
            orientation,
            gain: solar_gain(orientation, glazing.g, glazing.glazed_area),
        }
    });
    out.total_solar_gains = out.solar_gains.iter().map(|s| s.gain).sum();
}

pub fn run_internal(request: &CalculationRequest, out: &mut CalculationResult) {
    let building = &request.building;
    out.internal_gains = internal_gains(building.qi(), building.floor_area);
}

pub fn run_total(_request: &CalculationRequest, out: &mut CalculationResult) {
    out.total_gains = out.total_solar_gains + out.internal_gains;
}
