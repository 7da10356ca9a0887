//! Total heat transfer HT and average coefficient Uem.

use crate::model::CalculationRequest;
use crate::result::CalculationResult;
use hn_core::div_if_positive;

pub fn run(_request: &CalculationRequest, out: &mut CalculationResult) {
    out.total_heat_transfer = out.sum_bua + out.thermal_bridges_impact;
    out.avg_coefficient = div_if_positive(out.total_heat_transfer, out.sum_area);
}
