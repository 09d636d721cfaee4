//! Planar-triangle solvers (law of sines, law of cosines).
//!
//! - `SineLaw`/`CosineLaw`: request structs; the unknown quantity is the field
//!   left as `None`.
//! - `SineLawProblem`/`CosineLawProblem`: the validated form, where "exactly
//!   one unknown" is encoded in the enum variant.
//!
//! Angles are in degrees at the boundary and radians internally.

mod cosine;
mod sine;

pub use cosine::{cosine_law, cosine_law_with_cfg, CosineLaw, CosineLawProblem};
pub use sine::{sine_law, sine_law_with_cfg, SineLaw, SineLawProblem};

use crate::cfg::DOMAIN_EPS;
use crate::error::{GeomError, GeomResult};

/// Solver tolerances.
#[derive(Clone, Copy, Debug)]
pub struct TrigCfg {
    /// Slack on asin/acos arguments before reporting `NoSolution`.
    pub domain_eps: f64,
}

impl Default for TrigCfg {
    fn default() -> Self {
        Self {
            domain_eps: DOMAIN_EPS,
        }
    }
}

/// Clamp `v` into [-1, 1] if it is within `eps` of the interval.
fn clamp_unit(v: f64, eps: f64, what: &str) -> GeomResult<f64> {
    if !v.is_finite() || v.abs() > 1.0 + eps {
        return Err(GeomError::no_solution(format!(
            "{what} argument {v} is outside [-1, 1]"
        )));
    }
    Ok(v.clamp(-1.0, 1.0))
}

/// Reject infinite/NaN results (e.g. division by a zero sine).
fn finite(v: f64, what: &str) -> GeomResult<f64> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(GeomError::no_solution(format!("{what} is not finite")))
    }
}

#[cfg(test)]
mod tests;
