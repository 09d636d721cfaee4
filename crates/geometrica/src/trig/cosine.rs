//! Law of cosines: c² = a² + b² − 2ab·cos(C).

use super::{clamp_unit, finite, TrigCfg};
use crate::error::{GeomError, GeomResult};
use crate::numeric::{require, require_opt};

/// Cosine-law request. `side1` and `side2` are always known; exactly one of
/// `side3` / `angle` (the angle opposite `side3`) must be `None`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CosineLaw {
    pub side1: f64,
    pub side2: f64,
    pub side3: Option<f64>,
    pub angle: Option<f64>,
}

/// Validated cosine-law problem; the variant names the unknown.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CosineLawProblem {
    Side3 { side1: f64, side2: f64, angle: f64 },
    Angle { side1: f64, side2: f64, side3: f64 },
}

impl CosineLaw {
    pub fn problem(&self) -> GeomResult<CosineLawProblem> {
        let side1 = require("side1", self.side1)?;
        let side2 = require("side2", self.side2)?;
        let side3 = require_opt("side3", self.side3)?;
        let angle = require_opt("angle", self.angle)?;
        match (side3, angle) {
            (None, Some(angle)) => Ok(CosineLawProblem::Side3 {
                side1,
                side2,
                angle,
            }),
            (Some(side3), None) => Ok(CosineLawProblem::Angle {
                side1,
                side2,
                side3,
            }),
            (Some(_), Some(_)) => Err(GeomError::ArgumentCount {
                op: "cosine_law",
                supplied: 4,
            }),
            (None, None) => Err(GeomError::ArgumentCount {
                op: "cosine_law",
                supplied: 2,
            }),
        }
    }
}

impl CosineLawProblem {
    /// Side length, or angle in degrees, of the unknown quantity.
    pub fn solve(&self, cfg: TrigCfg) -> GeomResult<f64> {
        match *self {
            CosineLawProblem::Side3 {
                side1,
                side2,
                angle,
            } => {
                // work in units of the longer side so the squares cannot overflow
                let scale = side1.abs().max(side2.abs());
                if scale == 0.0 {
                    return Ok(0.0);
                }
                let (a, b) = (side1 / scale, side2 / scale);
                let sq = a * a + b * b - 2.0 * a * b * angle.to_radians().cos();
                let sq = finite(sq, "side3²")?;
                // rounding can push a degenerate (flat) triangle slightly below zero
                finite(sq.max(0.0).sqrt() * scale, "side3")
            }
            CosineLawProblem::Angle {
                side1,
                side2,
                side3,
            } => {
                let scale = side1.abs().max(side2.abs()).max(side3.abs());
                let (a, b, c) = (side1 / scale, side2 / scale, side3 / scale);
                let arg = (c * c - (a * a + b * b)) / (-2.0 * a * b);
                let arg = clamp_unit(arg, cfg.domain_eps, "acos")?;
                Ok(arg.acos().to_degrees())
            }
        }
    }
}

/// Solve for the missing quantity with default tolerances.
pub fn cosine_law(req: &CosineLaw) -> GeomResult<f64> {
    cosine_law_with_cfg(req, TrigCfg::default())
}

pub fn cosine_law_with_cfg(req: &CosineLaw, cfg: TrigCfg) -> GeomResult<f64> {
    req.problem()?.solve(cfg)
}
