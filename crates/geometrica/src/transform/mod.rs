//! Rigid-body point transforms: translation and rotation about a principal axis.
//!
//! Purpose
//! - Move or rotate whole point collections in 3D Cartesian space.
//! - Accept any `PointLike` slice; normalization happens once per call via
//!   [`crate::point::normalize`], before any arithmetic.
//!
//! Conventions
//! - Angles are given in degrees and converted to radians at the boundary.
//! - Rotation uses the three elemental right-handed matrices; a left-handed
//!   rotation by θ is the right-handed rotation by −θ.
//! - Outputs preserve input order and length.

mod axis;

pub use axis::{Axis, Handedness};

use nalgebra::Matrix3;

use crate::error::{GeomError, GeomResult};
use crate::numeric::{are_numeric, require};
use crate::point::{make_vector, normalize, Point, PointLike};

/// Translate every point by `(x, y, z)`.
///
/// Fails with `InvalidArgument` if any offset is not numeric.
pub fn translate<P: PointLike>(points: &[P], x: f64, y: f64, z: f64) -> GeomResult<Vec<Point>> {
    if !are_numeric(&[x, y, z]) {
        return Err(GeomError::invalid(
            "x, y, z",
            format!("translation parameters must be numeric, not '({x}, {y}, {z})'"),
        ));
    }
    let offset = make_vector(x, y, z);
    Ok(normalize(points)?.into_iter().map(|p| p + offset).collect())
}

/// Elemental rotation matrix about `axis` by `angle` radians (right-handed).
pub fn rotation_matrix(axis: Axis, angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    match axis {
        Axis::X => Matrix3::new(
            1.0, 0.0, 0.0, //
            0.0, c, -s, //
            0.0, s, c,
        ),
        Axis::Y => Matrix3::new(
            c, 0.0, s, //
            0.0, 1.0, 0.0, //
            -s, 0.0, c,
        ),
        Axis::Z => Matrix3::new(
            c, -s, 0.0, //
            s, c, 0.0, //
            0.0, 0.0, 1.0,
        ),
    }
}

/// Rotate every point about `axis` by `angle` degrees.
///
/// Fails with `InvalidArgument` if the angle is not numeric.
pub fn rotate<P: PointLike>(
    points: &[P],
    axis: Axis,
    angle: f64,
    hand: Handedness,
) -> GeomResult<Vec<Point>> {
    let angle = require("angle", angle)?;
    let points = normalize(points)?;
    let m = rotation_matrix(axis, hand.apply(angle).to_radians());
    Ok(points.into_iter().map(|p| m * p).collect())
}

/// String-facing rotation used by dynamic front-ends.
///
/// Validation order: angle, then `hand`, then `axis`. The axis name is only
/// resolved once the matrix is about to be built, so a bad angle or hand is
/// reported ahead of a bad axis.
pub fn rotate_named<P: PointLike>(
    points: &[P],
    axis: &str,
    angle: f64,
    hand: &str,
) -> GeomResult<Vec<Point>> {
    require("angle", angle)?;
    let hand: Handedness = hand.parse()?;
    let axis: Axis = axis.parse()?;
    rotate(points, axis, angle, hand)
}
