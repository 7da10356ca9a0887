//! Envelope heat-transfer table: U·A and b·U·A per element, plus sums.

use crate::model::{CalculationRequest, EnvelopeElementRow};
use crate::result::{CalculationResult, EnvelopeRowResult};
use hn_core::{m2, w_per_m2k};

pub fn row_result(row: &EnvelopeElementRow) -> EnvelopeRowResult {
    let ua = (m2(row.area()) * w_per_m2k(row.u())).value;
    EnvelopeRowResult {
        label: row.label.clone(),
        area: row.area(),
        ua,
        bua: row.b() * ua,
    }
}

pub fn run(request: &CalculationRequest, out: &mut CalculationResult) {
    out.envelope_rows = request.envelope.iter().map(row_result).collect();
    out.sum_area = out.envelope_rows.iter().map(|r| r.area).sum();
    out.sum_bua = out.envelope_rows.iter().map(|r| r.bua).sum();
}
