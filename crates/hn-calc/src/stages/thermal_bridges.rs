//! Thermal-bridge surcharge ΔU·ΣA.

use crate::model::CalculationRequest;
use crate::result::CalculationResult;

pub fn run(request: &CalculationRequest, out: &mut CalculationResult) {
    out.thermal_bridges_impact = request.building.delta_u() * out.sum_area;
}
