use crate::model::CalculationRequest;
use crate::norms::VENTILATION_COEFFICIENT;
use crate::result::CalculationResult;
use hn_core::Real;

/// HV = 0.264 · n · Vb
pub fn ventilation_loss(air_exchange_rate: Real, volume: Real) -> Real {
    VENTILATION_COEFFICIENT * air_exchange_rate * volume
}

pub fn run(request: &CalculationRequest, out: &mut CalculationResult) {
    let building = &request.building;
    out.ventilation_loss = ventilation_loss(building.air_exchange_rate, building.volume);
    out.total_heat_loss = out.total_heat_transfer + out.ventilation_loss;
}
