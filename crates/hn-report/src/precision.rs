//! Fixed-precision number formatting.

use hn_core::Real;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    /// Fixed number of decimals.
    Decimals(usize),
    /// Shortest representation that round-trips.
    Shortest,
}

/// Render a value; undefined values render as the empty string.
pub fn format_value(value: Option<Real>, precision: Precision) -> String {
    let Some(v) = value else {
        return String::new();
    };
    let s = match precision {
        Precision::Decimals(n) => to_fixed(v, n),
        Precision::Shortest => format!("{v}"),
    };
    strip_negative_zero(s)
}

/// Round to `decimals` places, ties away from zero.
///
/// Rounding is decided on the exact binary value, so 1.125 becomes "1.13"
/// while 1.005 (stored just below) becomes "1.00".
pub fn to_fixed(v: Real, decimals: usize) -> String {
    if !v.is_finite() {
        return format!("{v}");
    }
    // Every finite f64 has at most 1074 fractional decimal digits.
    let exact = format!("{:.1074}", v.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(decimals))
        .collect();
    let round_up = frac_part.as_bytes().get(decimals).is_some_and(|d| *d >= b'5');
    if round_up {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - decimals;
    let mut out = String::with_capacity(digits.len() + 2);
    if v < 0.0 {
        out.push('-');
    }
    out.extend(digits[..split].iter().map(|d| char::from(*d)));
    if decimals > 0 {
        out.push('.');
        out.extend(digits[split..].iter().map(|d| char::from(*d)));
    }
    out
}

// "-0.00" after rounding a tiny negative value.
fn strip_negative_zero(s: String) -> String {
    match s.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => s,
    }
}
