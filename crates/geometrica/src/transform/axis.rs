//! Rotation selectors: principal axis and handedness.

use std::fmt;
use std::str::FromStr;

use crate::error::GeomError;

/// Principal rotation axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn as_str(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

impl FromStr for Axis {
    type Err = GeomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "z" => Ok(Axis::Z),
            other => Err(GeomError::invalid(
                "axis",
                format!("can only be 'x', 'y' or 'z', not {other}"),
            )),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rotation sense. `Right` follows the right-hand rule; `Left` negates the angle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Handedness {
    #[default]
    Right,
    Left,
}

impl Handedness {
    pub fn as_str(self) -> &'static str {
        match self {
            Handedness::Right => "right",
            Handedness::Left => "left",
        }
    }

    /// Signed angle as seen by the right-handed rotation matrices.
    #[inline]
    pub fn apply(self, angle: f64) -> f64 {
        match self {
            Handedness::Right => angle,
            Handedness::Left => -angle,
        }
    }
}

impl FromStr for Handedness {
    type Err = GeomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "right" => Ok(Handedness::Right),
            "left" => Ok(Handedness::Left),
            other => Err(GeomError::invalid(
                "hand",
                format!("must be 'left' or 'right', not {other}"),
            )),
        }
    }
}

impl fmt::Display for Handedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
