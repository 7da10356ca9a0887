use crate::{HnError, HnResult};

/// Floating point type used throughout the calculator
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> HnResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(HnError::NonFinite { what, value: v })
    }
}

pub fn ensure_non_negative(v: Real, what: &'static str) -> HnResult<Real> {
    let v = ensure_finite(v, what)?;
    if v < 0.0 {
        Err(HnError::Negative { what, value: v })
    } else {
        Ok(v)
    }
}

/// Coerce a raw input cell to a usable number.
///
/// Missing and non-finite values become 0, mirroring how an empty form field
/// is read.
#[inline]
pub fn coerce(v: Option<Real>) -> Real {
    match v {
        Some(x) if x.is_finite() => x,
        _ => 0.0,
    }
}

/// Like [`coerce`], additionally clamping negative values to 0.
#[inline]
pub fn coerce_non_negative(v: Option<Real>) -> Real {
    coerce(v).max(0.0)
}

/// `num / den` when `den > 0`, otherwise `None`.
///
/// Used for every quantity that is undefined rather than zero when its divisor
/// vanishes.
#[inline]
pub fn div_if_positive(num: Real, den: Real) -> Option<Real> {
    if den > 0.0 { Some(num / den) } else { None }
}
