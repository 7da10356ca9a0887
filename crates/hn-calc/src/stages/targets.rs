//! Shape factor A/V and the normative targets derived from it.

use crate::model::CalculationRequest;
use crate::norms::{energy_performance_target, heat_need_target, uem_target};
use crate::result::CalculationResult;
use hn_core::{Real, m2, m3};

/// ΣA / Vb in 1/m, undefined for a non-positive volume.
pub fn shape_factor(sum_area: Real, volume: Real) -> Option<Real> {
    if volume > 0.0 {
        Some((m2(sum_area) / m3(volume)).value)
    } else {
        None
    }
}

pub fn run(request: &CalculationRequest, out: &mut CalculationResult) {
    out.shape_factor = shape_factor(out.sum_area, request.building.volume);
    out.normalized_heat_need_target = out.shape_factor.map(heat_need_target);
    out.normalized_uem_target = out.shape_factor.map(uem_target);
    out.energy_performance_target = energy_performance_target(&request.building.category);
}
