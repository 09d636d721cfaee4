//! Cartesian geometry helpers.
//!
//! - `transform`: translate and rotate point collections (any `PointLike`).
//! - `trig`: law of sines / law of cosines solvers for planar triangles.
//!
//! Both groups are pure functions over `f64`; they validate every input
//! before computing and report problems through [`GeomError`].

mod cfg;

pub mod api;
pub mod error;
pub mod numeric;
pub mod point;
pub mod transform;
pub mod trig;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{GeomError, GeomResult};
pub use point::{make_vector, normalize, Point, PointLike};
pub use transform::{rotate, rotate_named, rotation_matrix, translate, Axis, Handedness};
pub use trig::{cosine_law, sine_law, CosineLaw, SineLaw, TrigCfg};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{GeomError, GeomResult};
    pub use crate::point::{make_vector, Point, PointLike};
    pub use crate::transform::{rotate, translate, Axis, Handedness};
    pub use crate::trig::{cosine_law, sine_law, CosineLaw, SineLaw};
    pub use nalgebra::{Matrix3 as Mat3, Vector3 as Vec3};
}
