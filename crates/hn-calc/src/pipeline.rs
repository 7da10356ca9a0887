//! Full and incremental evaluation of the stage chain.
//!
//! [`calculate`] is the pure entry point: request in, result out. [`Pipeline`]
//! keeps one building's request and result together and, for each
//! [`InputEdit`], reruns only the stages downstream of what the edit touched.
//! Both paths produce identical results.

use crate::error::{CalcError, CalcResult};
use crate::model::{
    CalculationRequest, CategorySelection, EnvelopeElementRow, FlatRateDeltaU, InternalGainClass,
    Orientation, OrientationGain, ThermalBridgeMethod, sanitize_scalar,
};
use crate::result::CalculationResult;
use crate::stages::{Stage, StageSet};
use tracing::{debug, trace};

/// Run every stage on a sanitized copy of `request`.
pub fn calculate(request: &CalculationRequest) -> CalculationResult {
    let request = request.sanitized();
    let mut out = CalculationResult::default();
    run_stages(&request, &mut out, StageSet::all());
    out
}

fn run_stages(request: &CalculationRequest, out: &mut CalculationResult, stages: StageSet) {
    for stage in stages.iter() {
        trace!(stage = stage.name(), "running stage");
        stage.run(request, out);
    }
    debug!(?stages, "recomputed");
}

/// A single change made by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEdit {
    FloorArea(f64),
    Volume(f64),
    AirExchangeRate(f64),
    Category(CategorySelection),
    InternalGainClass(Option<InternalGainClass>),
    ThermalBridgeMethod(ThermalBridgeMethod),
    ExactDeltaU(f64),
    FlatRateDeltaU(Option<FlatRateDeltaU>),
    SetRow { index: usize, row: EnvelopeElementRow },
    PushRow(EnvelopeElementRow),
    RemoveRow(usize),
    ReplaceEnvelope(Vec<EnvelopeElementRow>),
    Glazing {
        orientation: Orientation,
        gain: OrientationGain,
    },
}

impl InputEdit {
    /// Stages that read the edited input directly.
    pub fn touches(&self) -> StageSet {
        match self {
            InputEdit::FloorArea(_) => {
                StageSet::of(&[Stage::Geometry, Stage::InternalGains, Stage::HeatNeed])
            }
            InputEdit::Volume(_) => {
                StageSet::of(&[Stage::Geometry, Stage::Ventilation, Stage::Targets])
            }
            InputEdit::AirExchangeRate(_) => StageSet::of(&[Stage::Ventilation]),
            InputEdit::Category(_) => StageSet::of(&[Stage::InternalGains, Stage::Targets]),
            InputEdit::InternalGainClass(_) => StageSet::of(&[Stage::InternalGains]),
            InputEdit::ThermalBridgeMethod(_)
            | InputEdit::ExactDeltaU(_)
            | InputEdit::FlatRateDeltaU(_) => StageSet::of(&[Stage::ThermalBridges]),
            InputEdit::SetRow { .. }
            | InputEdit::PushRow(_)
            | InputEdit::RemoveRow(_)
            | InputEdit::ReplaceEnvelope(_) => StageSet::of(&[Stage::Envelope]),
            InputEdit::Glazing { .. } => StageSet::of(&[Stage::SolarGains]),
        }
    }
}

/// One building's inputs and the results currently derived from them.
#[derive(Debug, Clone)]
pub struct Pipeline {
    request: CalculationRequest,
    result: CalculationResult,
}

impl Pipeline {
    pub fn new(request: CalculationRequest) -> Self {
        let request = request.sanitized();
        let result = calculate(&request);
        Self { request, result }
    }

    pub fn request(&self) -> &CalculationRequest {
        &self.request
    }

    pub fn result(&self) -> &CalculationResult {
        &self.result
    }

    pub fn into_result(self) -> CalculationResult {
        self.result
    }

    /// Apply an edit and recompute what depends on it.
    ///
    /// Returns the stages that were rerun. A row edit addressing a missing
    /// row leaves the pipeline unchanged.
    pub fn apply(&mut self, edit: InputEdit) -> CalcResult<StageSet> {
        let touched = edit.touches();
        self.mutate(edit)?;
        let stages = touched.with_downstream();
        run_stages(&self.request, &mut self.result, stages);
        Ok(stages)
    }

    /// Rerun every stage.
    pub fn recompute(&mut self) -> &CalculationResult {
        self.result = calculate(&self.request);
        &self.result
    }

    fn mutate(&mut self, edit: InputEdit) -> CalcResult<()> {
        let building = &mut self.request.building;
        match edit {
            InputEdit::FloorArea(v) => building.floor_area = sanitize_scalar(v),
            InputEdit::Volume(v) => building.volume = sanitize_scalar(v),
            InputEdit::AirExchangeRate(v) => building.air_exchange_rate = sanitize_scalar(v),
            InputEdit::Category(category) => {
                // Picking a category re-selects the gain class it implies.
                building.internal_gain_class = InternalGainClass::for_category(&category);
                building.category = category;
            }
            InputEdit::InternalGainClass(class) => building.internal_gain_class = class,
            InputEdit::ThermalBridgeMethod(method) => building.thermal_bridge_method = method,
            InputEdit::ExactDeltaU(v) => building.exact_delta_u = sanitize_scalar(v),
            InputEdit::FlatRateDeltaU(v) => building.flat_rate_delta_u = v,
            InputEdit::SetRow { index, row } => {
                let len = self.request.envelope.len();
                let slot = self
                    .request
                    .envelope
                    .get_mut(index)
                    .ok_or(CalcError::RowOutOfRange { index, len })?;
                *slot = row.sanitized();
            }
            InputEdit::PushRow(row) => self.request.envelope.push(row.sanitized()),
            InputEdit::RemoveRow(index) => {
                let len = self.request.envelope.len();
                if index >= len {
                    return Err(CalcError::RowOutOfRange { index, len });
                }
                self.request.envelope.remove(index);
            }
            InputEdit::ReplaceEnvelope(rows) => {
                self.request.envelope = rows.iter().map(|r| r.sanitized()).collect();
            }
            InputEdit::Glazing { orientation, gain } => {
                self.request.set_glazing(orientation, gain.sanitized());
            }
        }
        Ok(())
    }
}
