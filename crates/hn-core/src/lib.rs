//! hn-core: shared foundation for the heat-need calculator.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real, tolerances, input coercion, guarded division)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{HnError, HnResult};
pub use numeric::*;
pub use units::*;
