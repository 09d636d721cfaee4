//! Numeric predicates.
//!
//! A value counts as numeric when it is a finite `f64`. NaN and ±∞ are what a
//! typed caller can hand us instead of "not a number", so they are rejected
//! the same way a string would be at a dynamic boundary.

use crate::error::{GeomError, GeomResult};

/// True if `v` is a finite real number.
#[inline]
pub fn is_numeric(v: f64) -> bool {
    v.is_finite()
}

/// True if every value in `vs` is numeric.
#[inline]
pub fn are_numeric(vs: &[f64]) -> bool {
    vs.iter().all(|&v| is_numeric(v))
}

/// Validate a single named value.
pub(crate) fn require(field: &str, v: f64) -> GeomResult<f64> {
    if is_numeric(v) {
        Ok(v)
    } else {
        Err(GeomError::invalid(
            field,
            format!("must be a number, not '{v}'"),
        ))
    }
}

/// Validate an optional named value; `None` passes untouched.
pub(crate) fn require_opt(field: &str, v: Option<f64>) -> GeomResult<Option<f64>> {
    v.map(|v| require(field, v)).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_values_are_numeric() {
        assert!(is_numeric(0.0));
        assert!(is_numeric(-3.5));
        assert!(!is_numeric(f64::NAN));
        assert!(!is_numeric(f64::INFINITY));
        assert!(are_numeric(&[1.0, 2.0, 3.0]));
        assert!(!are_numeric(&[1.0, f64::NEG_INFINITY, 3.0]));
        assert!(are_numeric(&[]));
    }

    #[test]
    fn require_opt_skips_absent() {
        assert_eq!(require_opt("angle", None), Ok(None));
        assert_eq!(require_opt("angle", Some(30.0)), Ok(Some(30.0)));
        assert!(matches!(
            require_opt("angle", Some(f64::NAN)),
            Err(GeomError::InvalidArgument { field, .. }) if field == "angle"
        ));
    }
}
