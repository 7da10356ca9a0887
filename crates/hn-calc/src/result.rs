//! Calculation outputs.
//!
//! Values are kept at full precision; rounding happens only when a report is
//! rendered. `None` marks a quantity that is undefined because its divisor is
//! zero and must never be read as 0.

use crate::model::Orientation;
use hn_core::Real;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnvelopeRowResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub area: Real,
    /// U·A, W/K.
    pub ua: Real,
    /// b·U·A, W/K.
    pub bua: Real,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarGain {
    pub orientation: Orientation,
    /// QS,j, kWh/a.
    pub gain: Real,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Compliance {
    Compliant,
    NonCompliant,
}

impl Compliance {
    pub fn is_compliant(self) -> bool {
        matches!(self, Compliance::Compliant)
    }

    /// Comparison sign shown between actual and target.
    pub fn symbol(self) -> &'static str {
        match self {
            Compliance::Compliant => "≤",
            Compliance::NonCompliant => ">",
        }
    }
}

/// One actual-vs-target comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComplianceCheck {
    pub actual: Option<Real>,
    pub target: Option<Real>,
    pub outcome: Compliance,
}

impl ComplianceCheck {
    /// Compliant iff both sides are defined, the target is positive and the
    /// actual value does not exceed it.
    pub fn evaluate(actual: Option<Real>, target: Option<Real>) -> Self {
        let outcome = match (actual, target) {
            (Some(a), Some(t)) if t > 0.0 && a <= t => Compliance::Compliant,
            _ => Compliance::NonCompliant,
        };
        Self {
            actual,
            target,
            outcome,
        }
    }
}

impl Default for ComplianceCheck {
    fn default() -> Self {
        Self::evaluate(None, None)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ComplianceSummary {
    /// Uem against Uem,N.
    pub heat_transfer_coefficient: ComplianceCheck,
    /// Specific heat need against QH,nd,N1.
    pub heat_need: ComplianceCheck,
    /// Specific heat need against Q_N,EP.
    ///
    /// A heat-need value stands in for primary energy here; the two are not
    /// the same physical quantity.
    pub energy_performance: ComplianceCheck,
}

impl ComplianceSummary {
    pub fn all_compliant(&self) -> bool {
        self.heat_transfer_coefficient.outcome.is_compliant()
            && self.heat_need.outcome.is_compliant()
            && self.energy_performance.outcome.is_compliant()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    /// Vb / Ab, m.
    pub average_height: Option<Real>,

    pub envelope_rows: Vec<EnvelopeRowResult>,
    /// ΣA, m².
    pub sum_area: Real,
    /// Σ b·U·A, W/K.
    pub sum_bua: Real,

    /// ΔU·ΣA, W/K.
    pub thermal_bridges_impact: Real,
    /// HT, W/K.
    pub total_heat_transfer: Real,
    /// Uem, W/(m²·K).
    pub avg_coefficient: Option<Real>,

    /// HV, W/K.
    pub ventilation_loss: Real,
    /// HT + HV, W/K.
    pub total_heat_loss: Real,

    pub solar_gains: [SolarGain; 4],
    pub total_solar_gains: Real,
    pub internal_gains: Real,
    pub total_gains: Real,

    /// QH, kWh/a.
    pub heat_need: Real,
    /// QH / Ab, kWh/(m²·a).
    pub specific_heat_need: Option<Real>,

    /// ΣA / Vb, 1/m.
    pub shape_factor: Option<Real>,
    pub normalized_heat_need_target: Option<Real>,
    pub normalized_uem_target: Option<Real>,
    pub energy_performance_target: Real,

    pub compliance: ComplianceSummary,
}

impl Default for CalculationResult {
    fn default() -> Self {
        Self {
            average_height: None,
            envelope_rows: Vec::new(),
            sum_area: 0.0,
            sum_bua: 0.0,
            thermal_bridges_impact: 0.0,
            total_heat_transfer: 0.0,
            avg_coefficient: None,
            ventilation_loss: 0.0,
            total_heat_loss: 0.0,
            solar_gains: Orientation::ALL.map(|orientation| SolarGain {
                orientation,
                gain: 0.0,
            }),
            total_solar_gains: 0.0,
            internal_gains: 0.0,
            total_gains: 0.0,
            heat_need: 0.0,
            specific_heat_need: None,
            shape_factor: None,
            normalized_heat_need_target: None,
            normalized_uem_target: None,
            energy_performance_target: 0.0,
            compliance: ComplianceSummary::default(),
        }
    }
}

impl CalculationResult {
    pub fn solar_gain(&self, orientation: Orientation) -> Real {
        self.solar_gains[orientation.index()].gain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_target_is_never_satisfiable() {
        let check = ComplianceCheck::evaluate(Some(0.0), Some(0.0));
        assert_eq!(check.outcome, Compliance::NonCompliant);
        let check = ComplianceCheck::evaluate(Some(-5.0), Some(-1.0));
        assert_eq!(check.outcome, Compliance::NonCompliant);
    }

    #[test]
    fn equal_actual_and_target_is_compliant() {
        let check = ComplianceCheck::evaluate(Some(0.3), Some(0.3));
        assert_eq!(check.outcome, Compliance::Compliant);
        assert_eq!(check.outcome.symbol(), "≤");
    }

    #[test]
    fn undefined_sides_are_non_compliant() {
        assert_eq!(
            ComplianceCheck::evaluate(None, Some(40.7)).outcome,
            Compliance::NonCompliant
        );
        assert_eq!(
            ComplianceCheck::evaluate(Some(10.0), None).outcome,
            Compliance::NonCompliant
        );
        assert_eq!(ComplianceCheck::default().outcome.symbol(), ">");
    }

    #[test]
    fn default_result_has_one_gain_per_orientation() {
        let result = CalculationResult::default();
        for o in Orientation::ALL {
            assert_eq!(result.solar_gains[o.index()].orientation, o);
            assert_eq!(result.solar_gain(o), 0.0);
        }
        assert!(!result.compliance.all_compliant());
    }
}
