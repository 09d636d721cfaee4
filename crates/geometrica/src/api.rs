//! Curated surface for the command-line tool and the Python bindings.
//!
//! Important
//! - Front-ends that receive loosely typed input (JSON, Python objects) go
//!   through these entry points so validation order is the same everywhere.
//! - Stable for the front-ends: the keyword signatures of `sine_law_kw` and
//!   `cosine_law_kw`, the argument order of `rotate_named`, and the error
//!   family each check raises. The CLI reports that family by name and the
//!   bindings map it to a Python exception type.
//! - Everything else here is a convenience re-export and may move.

pub use crate::numeric::{are_numeric, is_numeric};
pub use crate::transform::{rotate_named, rotation_matrix};
pub use crate::trig::{
    cosine_law_with_cfg, sine_law_with_cfg, CosineLawProblem, SineLawProblem, TrigCfg,
};

use crate::error::GeomResult;
use crate::trig::{CosineLaw, SineLaw};

/// Sine law with keyword-style optional arguments.
pub fn sine_law_kw(
    side1: Option<f64>,
    angle1: Option<f64>,
    side2: Option<f64>,
    angle2: Option<f64>,
    obtuse: bool,
) -> GeomResult<f64> {
    crate::trig::sine_law(&SineLaw {
        side1,
        angle1,
        side2,
        angle2,
        obtuse,
    })
}

/// Cosine law with keyword-style optional arguments.
pub fn cosine_law_kw(
    side1: f64,
    side2: f64,
    side3: Option<f64>,
    angle: Option<f64>,
) -> GeomResult<f64> {
    crate::trig::cosine_law(&CosineLaw {
        side1,
        side2,
        side3,
        angle,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GeomError;

    #[test]
    fn keyword_entry_points_match_structs() {
        let v = sine_law_kw(Some(2.0), Some(30.0), None, Some(105.0), false).unwrap();
        assert!((v - 3.8637).abs() < 1e-3);
        let v = cosine_law_kw(60.0, 50.0, Some(20.0), None).unwrap();
        assert!((v - 18.19).abs() < 1e-2);
        assert!(matches!(
            cosine_law_kw(60.0, 50.0, None, None),
            Err(GeomError::ArgumentCount { .. })
        ));
    }

    #[test]
    fn top_level_reexports_are_the_module_functions() {
        let pts = [[1.0, 1.0, 1.0]];
        assert_eq!(
            crate::translate(&pts, 1.0, 2.0, 3.0),
            crate::transform::translate(&pts, 1.0, 2.0, 3.0)
        );
        assert!(is_numeric(1.0) && are_numeric(&[1.0, 2.0]));
    }
}
