//! Law of sines: sin(A)/a = sin(B)/b.

use super::{clamp_unit, finite, TrigCfg};
use crate::error::{GeomError, GeomResult};
use crate::numeric::require_opt;

/// Sine-law request. Exactly one of the four quantities must be `None`.
///
/// `obtuse` only matters when solving for an angle: asin cannot tell θ from
/// 180° − θ, so the caller picks the branch.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SineLaw {
    pub side1: Option<f64>,
    pub angle1: Option<f64>,
    pub side2: Option<f64>,
    pub angle2: Option<f64>,
    pub obtuse: bool,
}

/// Validated sine-law problem; the variant names the unknown.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SineLawProblem {
    Side1 { angle1: f64, side2: f64, angle2: f64 },
    Side2 { side1: f64, angle1: f64, angle2: f64 },
    Angle1 { side1: f64, side2: f64, angle2: f64, obtuse: bool },
    Angle2 { side1: f64, angle1: f64, side2: f64, obtuse: bool },
}

impl SineLaw {
    /// Check every supplied value and the unknown count; no arithmetic happens here.
    pub fn problem(&self) -> GeomResult<SineLawProblem> {
        let side1 = require_opt("side1", self.side1)?;
        let side2 = require_opt("side2", self.side2)?;
        let angle1 = require_opt("angle1", self.angle1)?;
        let angle2 = require_opt("angle2", self.angle2)?;
        let obtuse = self.obtuse;
        match (side1, angle1, side2, angle2) {
            (None, Some(angle1), Some(side2), Some(angle2)) => Ok(SineLawProblem::Side1 {
                angle1,
                side2,
                angle2,
            }),
            (Some(side1), Some(angle1), None, Some(angle2)) => Ok(SineLawProblem::Side2 {
                side1,
                angle1,
                angle2,
            }),
            (Some(side1), None, Some(side2), Some(angle2)) => Ok(SineLawProblem::Angle1 {
                side1,
                side2,
                angle2,
                obtuse,
            }),
            (Some(side1), Some(angle1), Some(side2), None) => Ok(SineLawProblem::Angle2 {
                side1,
                angle1,
                side2,
                obtuse,
            }),
            (a, b, c, d) => Err(GeomError::ArgumentCount {
                op: "sine_law",
                supplied: [a, b, c, d].iter().filter(|v| v.is_some()).count(),
            }),
        }
    }
}

impl SineLawProblem {
    /// Side length, or angle in degrees, of the unknown quantity.
    pub fn solve(&self, cfg: TrigCfg) -> GeomResult<f64> {
        match *self {
            SineLawProblem::Side1 {
                angle1,
                side2,
                angle2,
            } => finite(
                side2 * angle1.to_radians().sin() / angle2.to_radians().sin(),
                "side1",
            ),
            SineLawProblem::Side2 {
                side1,
                angle1,
                angle2,
            } => finite(
                side1 * angle2.to_radians().sin() / angle1.to_radians().sin(),
                "side2",
            ),
            SineLawProblem::Angle1 {
                side1,
                side2,
                angle2,
                obtuse,
            } => {
                let arg = clamp_unit(
                    side1 * angle2.to_radians().sin() / side2,
                    cfg.domain_eps,
                    "asin",
                )?;
                Ok(resolve_ambiguous(arg.asin().to_degrees(), obtuse))
            }
            SineLawProblem::Angle2 {
                side1,
                angle1,
                side2,
                obtuse,
            } => {
                let arg = clamp_unit(
                    side2 * angle1.to_radians().sin() / side1,
                    cfg.domain_eps,
                    "asin",
                )?;
                Ok(resolve_ambiguous(arg.asin().to_degrees(), obtuse))
            }
        }
    }
}

/// Pick the acute or obtuse branch of an asin result (degrees).
fn resolve_ambiguous(raw: f64, obtuse: bool) -> f64 {
    if (obtuse && raw <= 90.0) || (!obtuse && raw > 90.0) {
        180.0 - raw
    } else {
        raw
    }
}

/// Solve for the missing quantity with default tolerances.
pub fn sine_law(req: &SineLaw) -> GeomResult<f64> {
    sine_law_with_cfg(req, TrigCfg::default())
}

pub fn sine_law_with_cfg(req: &SineLaw, cfg: TrigCfg) -> GeomResult<f64> {
    req.problem()?.solve(cfg)
}

#[cfg(test)]
mod tests {
    use super::resolve_ambiguous;

    #[test]
    fn ambiguous_branch_selection() {
        assert_eq!(resolve_ambiguous(30.0, false), 30.0);
        assert_eq!(resolve_ambiguous(30.0, true), 150.0);
        // exactly 90 flips to itself on the obtuse branch
        assert_eq!(resolve_ambiguous(90.0, true), 90.0);
        assert_eq!(resolve_ambiguous(90.0, false), 90.0);
    }
}
