//! Conversion of a calculation result into rendered strings.

use crate::error::ReportResult;
use crate::precision::{Precision, format_value};
use hn_calc::{CalculationResult, ComplianceCheck};
use hn_core::Real;
use serde::Serialize;

/// Definition of one scalar output line.
struct FieldSpec {
    key: &'static str,
    label: &'static str,
    symbol: &'static str,
    unit: &'static str,
    precision: Precision,
    read: fn(&CalculationResult) -> Option<Real>,
}

impl FieldSpec {
    fn read(&self, result: &CalculationResult) -> Option<Real> {
        (self.read)(result)
    }
}

const TWO: Precision = Precision::Decimals(2);
const THREE: Precision = Precision::Decimals(3);

static FIELDS: [FieldSpec; 17] = [
    FieldSpec {
        key: "average_height",
        label: "Average height",
        symbol: "h",
        unit: "m",
        precision: TWO,
        read: |r| r.average_height,
    },
    FieldSpec {
        key: "sum_area",
        label: "Envelope area",
        symbol: "ΣA",
        unit: "m²",
        precision: TWO,
        read: |r| Some(r.sum_area),
    },
    FieldSpec {
        key: "sum_bua",
        label: "Envelope transmission",
        symbol: "Σb·U·A",
        unit: "W/K",
        precision: TWO,
        read: |r| Some(r.sum_bua),
    },
    FieldSpec {
        key: "thermal_bridges_impact",
        label: "Thermal bridges",
        symbol: "ΔU·ΣA",
        unit: "W/K",
        precision: TWO,
        read: |r| Some(r.thermal_bridges_impact),
    },
    FieldSpec {
        key: "total_heat_transfer",
        label: "Transmission loss",
        symbol: "HT",
        unit: "W/K",
        precision: TWO,
        read: |r| Some(r.total_heat_transfer),
    },
    FieldSpec {
        key: "avg_coefficient",
        label: "Average heat-transfer coefficient",
        symbol: "Uem",
        unit: "W/(m²·K)",
        precision: THREE,
        read: |r| r.avg_coefficient,
    },
    FieldSpec {
        key: "ventilation_loss",
        label: "Ventilation loss",
        symbol: "HV",
        unit: "W/K",
        precision: TWO,
        read: |r| Some(r.ventilation_loss),
    },
    FieldSpec {
        key: "total_heat_loss",
        label: "Total heat loss",
        symbol: "HT+HV",
        unit: "W/K",
        precision: TWO,
        read: |r| Some(r.total_heat_loss),
    },
    FieldSpec {
        key: "total_solar_gains",
        label: "Solar gains",
        symbol: "QS",
        unit: "kWh/a",
        precision: THREE,
        read: |r| Some(r.total_solar_gains),
    },
    FieldSpec {
        key: "internal_gains",
        label: "Internal gains",
        symbol: "Qi",
        unit: "kWh/a",
        precision: THREE,
        read: |r| Some(r.internal_gains),
    },
    FieldSpec {
        key: "total_gains",
        label: "Total gains",
        symbol: "Qgn",
        unit: "kWh/a",
        precision: THREE,
        read: |r| Some(r.total_gains),
    },
    FieldSpec {
        key: "heat_need",
        label: "Heat need",
        symbol: "QH",
        unit: "kWh/a",
        precision: THREE,
        read: |r| Some(r.heat_need),
    },
    FieldSpec {
        key: "specific_heat_need",
        label: "Specific heat need",
        symbol: "QH,nd",
        unit: "kWh/(m²·a)",
        precision: THREE,
        read: |r| r.specific_heat_need,
    },
    FieldSpec {
        key: "shape_factor",
        label: "Shape factor",
        symbol: "A/V",
        unit: "1/m",
        precision: THREE,
        read: |r| r.shape_factor,
    },
    FieldSpec {
        key: "normalized_heat_need_target",
        label: "Normalized heat need",
        symbol: "QH,nd,N1",
        unit: "kWh/(m²·a)",
        precision: THREE,
        read: |r| r.normalized_heat_need_target,
    },
    FieldSpec {
        key: "normalized_uem_target",
        label: "Normalized Uem",
        symbol: "Uem,N",
        unit: "W/(m²·K)",
        precision: Precision::Shortest,
        read: |r| r.normalized_uem_target,
    },
    FieldSpec {
        key: "energy_performance_target",
        label: "Energy-performance target",
        symbol: "Q_N,EP",
        unit: "kWh/(m²·a)",
        precision: Precision::Decimals(1),
        read: |r| Some(r.energy_performance_target),
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldLine {
    pub key: &'static str,
    pub label: &'static str,
    pub symbol: &'static str,
    pub unit: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvelopeLine {
    pub label: String,
    pub area: String,
    pub ua: String,
    pub bua: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GainLine {
    pub orientation: String,
    pub gain: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplianceLine {
    pub check: &'static str,
    pub actual: String,
    pub symbol: &'static str,
    pub target: String,
    pub compliant: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub fields: Vec<FieldLine>,
    pub envelope: Vec<EnvelopeLine>,
    pub solar_gains: Vec<GainLine>,
    pub compliance: Vec<ComplianceLine>,
}

impl Report {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Rendered value of a scalar field by key.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.key == key)
            .map(|f| f.value.as_str())
    }

    pub fn all_compliant(&self) -> bool {
        self.compliance.iter().all(|c| c.compliant)
    }

    pub fn to_json(&self) -> ReportResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Render every output of `result` at its display precision.
pub fn render(result: &CalculationResult) -> Report {
    let fields = FIELDS
        .iter()
        .map(|spec| FieldLine {
            key: spec.key,
            label: spec.label,
            symbol: spec.symbol,
            unit: spec.unit,
            value: format_value(spec.read(result), spec.precision),
        })
        .collect();

    let envelope = result
        .envelope_rows
        .iter()
        .enumerate()
        .map(|(i, row)| EnvelopeLine {
            label: row.label.clone().unwrap_or_else(|| format!("#{}", i + 1)),
            area: format_value(Some(row.area), TWO),
            ua: format_value(Some(row.ua), TWO),
            bua: format_value(Some(row.bua), TWO),
        })
        .collect();

    let solar_gains = result
        .solar_gains
        .iter()
        .map(|g| GainLine {
            orientation: g.orientation.to_string(),
            gain: format_value(Some(g.gain), THREE),
        })
        .collect();

    let summary = &result.compliance;
    let compliance = vec![
        compliance_line("Uem <= Uem,N", &summary.heat_transfer_coefficient),
        compliance_line("QH,nd <= QH,nd,N1", &summary.heat_need),
        compliance_line("QH,nd <= Q_N,EP", &summary.energy_performance),
    ];

    Report {
        title: None,
        fields,
        envelope,
        solar_gains,
        compliance,
    }
}

/// Both sides of a comparison are shown at three decimals.
fn compliance_line(check: &'static str, outcome: &ComplianceCheck) -> ComplianceLine {
    ComplianceLine {
        check,
        actual: format_value(outcome.actual, THREE),
        symbol: outcome.outcome.symbol(),
        target: format_value(outcome.target, THREE),
        compliant: outcome.outcome.is_compliant(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_keys_are_unique() {
        for (i, a) in FIELDS.iter().enumerate() {
            for b in &FIELDS[i + 1..] {
                assert_ne!(a.key, b.key);
            }
        }
    }

    #[test]
    fn default_result_renders_undefined_as_empty() {
        let report = render(&CalculationResult::default());
        assert_eq!(report.value("average_height"), Some(""));
        assert_eq!(report.value("avg_coefficient"), Some(""));
        assert_eq!(report.value("sum_area"), Some("0.00"));
        assert_eq!(report.value("missing"), None);
        assert_eq!(report.compliance[0].actual, "");
        assert_eq!(report.compliance[0].symbol, ">");
        assert!(!report.all_compliant());
    }

    #[test]
    fn unlabelled_rows_are_numbered() {
        let mut result = CalculationResult::default();
        result.envelope_rows.push(hn_calc::EnvelopeRowResult {
            label: None,
            area: 10.0,
            ua: 2.0,
            bua: 2.0,
        });
        let report = render(&result);
        assert_eq!(report.envelope[0].label, "#1");
        assert_eq!(report.envelope[0].bua, "2.00");
    }
}
