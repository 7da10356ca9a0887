//! Annual heating energy need QH and its per-floor-area value.

use crate::model::CalculationRequest;
use crate::norms::{DEGREE_DAY_FACTOR, GAIN_UTILIZATION_FACTOR};
use crate::result::CalculationResult;
use hn_core::{Real, div_if_positive};

/// QH = 82.1 · (HT + HV) − 0.95 · (Qi + QS)
pub fn heat_need(total_heat_loss: Real, internal_gains: Real, solar_gains: Real) -> Real {
    DEGREE_DAY_FACTOR * total_heat_loss - GAIN_UTILIZATION_FACTOR * (internal_gains + solar_gains)
}

pub fn run(request: &CalculationRequest, out: &mut CalculationResult) {
    out.heat_need = heat_need(out.total_heat_loss, out.internal_gains, out.total_solar_gains);
    out.specific_heat_need = div_if_positive(out.heat_need, request.building.floor_area);
}
