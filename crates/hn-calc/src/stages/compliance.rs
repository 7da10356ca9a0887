use crate::model::CalculationRequest;
use crate::result::{CalculationResult, ComplianceCheck, ComplianceSummary};

pub fn run(_request: &CalculationRequest, out: &mut CalculationResult) {
    out.compliance = ComplianceSummary {
        heat_transfer_coefficient: ComplianceCheck::evaluate(
            out.avg_coefficient,
            out.normalized_uem_target,
        ),
        heat_need: ComplianceCheck::evaluate(
            out.specific_heat_need,
            out.normalized_heat_need_target,
        ),
        // Specific heat need doubles as the primary-energy figure.
        energy_performance: ComplianceCheck::evaluate(
            out.specific_heat_need,
            Some(out.energy_performance_target),
        ),
    };
}
