//! hn-calc: normative building heat-need calculation.
//!
//! The calculation is a fixed chain of closed-form stages:
//! - geometry (average height)
//! - envelope table (U·A, b·U·A, sums)
//! - thermal bridges, total heat transfer HT and Uem
//! - ventilation loss HV and total loss
//! - solar, internal and total gains
//! - heat need QH and specific heat need
//! - shape factor and normative targets
//! - compliance evaluation
//!
//! Every stage is a total function of sanitized inputs; quantities whose
//! divisor vanishes are `None` rather than 0.
//!
//! # Example
//!
//! ```
//! use hn_calc::{CalculationRequest, EnvelopeElementRow, calculate};
//!
//! let mut request = CalculationRequest::default();
//! request.building.floor_area = 200.0;
//! request.building.volume = 500.0;
//! request.envelope.push(EnvelopeElementRow::new(10.0, 0.2));
//!
//! let result = calculate(&request);
//! assert_eq!(result.average_height, Some(2.5));
//! ```

pub mod error;
pub mod model;
pub mod norms;
pub mod pipeline;
pub mod result;
pub mod stages;

pub use error::{CalcError, CalcResult};
pub use model::{
    BuildingCategory, BuildingInputs, CalculationRequest, CategorySelection, EnvelopeElementRow,
    FlatRateDeltaU, InternalGainClass, Orientation, OrientationGain, ThermalBridgeMethod,
};
pub use pipeline::{InputEdit, Pipeline, calculate};
pub use result::{
    CalculationResult, Compliance, ComplianceCheck, ComplianceSummary, EnvelopeRowResult,
    SolarGain,
};
pub use stages::{Stage, StageSet};
