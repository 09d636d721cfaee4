//! Points and the point-collection normalizer.
//!
//! Every operation that takes "a collection of points" accepts any slice of
//! `PointLike` values and calls [`normalize`] once at its boundary; downstream
//! code only ever sees [`Point`].
//!
//! The strategy is fixed per collection by its element type, so a slice is
//! either all coordinate triples or all accessor objects, never a mix.

use nalgebra::{Point3, Vector3};

use crate::error::{GeomError, GeomResult};
use crate::numeric::is_numeric;

/// Ordered (x, y, z) triple.
pub type Point = Vector3<f64>;

/// Build a column vector from three coordinates.
#[inline]
pub fn make_vector(x: f64, y: f64, z: f64) -> Point {
    Vector3::new(x, y, z)
}

/// Anything that can yield a [`Point`] through zero-argument accessors.
pub trait PointLike {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
    fn z(&self) -> f64;

    #[inline]
    fn to_point(&self) -> Point {
        make_vector(self.x(), self.y(), self.z())
    }
}

impl PointLike for [f64; 3] {
    #[inline]
    fn x(&self) -> f64 {
        self[0]
    }
    #[inline]
    fn y(&self) -> f64 {
        self[1]
    }
    #[inline]
    fn z(&self) -> f64 {
        self[2]
    }
}

impl PointLike for (f64, f64, f64) {
    #[inline]
    fn x(&self) -> f64 {
        self.0
    }
    #[inline]
    fn y(&self) -> f64 {
        self.1
    }
    #[inline]
    fn z(&self) -> f64 {
        self.2
    }
}

impl PointLike for Vector3<f64> {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }
    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
    #[inline]
    fn z(&self) -> f64 {
        self.z
    }
    #[inline]
    fn to_point(&self) -> Point {
        *self
    }
}

impl PointLike for Point3<f64> {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }
    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
    #[inline]
    fn z(&self) -> f64 {
        self.z
    }
    #[inline]
    fn to_point(&self) -> Point {
        self.coords
    }
}

impl<T: PointLike + ?Sized> PointLike for &T {
    #[inline]
    fn x(&self) -> f64 {
        (**self).x()
    }
    #[inline]
    fn y(&self) -> f64 {
        (**self).y()
    }
    #[inline]
    fn z(&self) -> f64 {
        (**self).z()
    }
}

/// Normalize a collection of point-like items into owned points.
///
/// Order and length are preserved; the input is left untouched. A coordinate
/// that is not a finite number fails the whole call with `InvalidArgument`
/// naming the item index.
pub fn normalize<P: PointLike>(points: &[P]) -> GeomResult<Vec<Point>> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let q = p.to_point();
            if q.iter().all(|&c| is_numeric(c)) {
                Ok(q)
            } else {
                Err(GeomError::invalid(
                    format!("points[{i}]"),
                    format!("coordinates must be numeric, not ({}, {}, {})", q.x, q.y, q.z),
                ))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::point;

    /// Object exposing accessors only, like a domain type from another crate.
    struct Atom {
        pos: (f64, f64, f64),
    }

    impl PointLike for Atom {
        fn x(&self) -> f64 {
            self.pos.0
        }
        fn y(&self) -> f64 {
            self.pos.1
        }
        fn z(&self) -> f64 {
            self.pos.2
        }
    }

    #[test]
    fn triples_and_objects_normalize_alike() {
        let triples = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let tuples = [(1.0, 2.0, 3.0), (4.0, 5.0, 6.0)];
        let atoms = [
            Atom {
                pos: (1.0, 2.0, 3.0),
            },
            Atom {
                pos: (4.0, 5.0, 6.0),
            },
        ];
        let a = normalize(&triples).unwrap();
        assert_eq!(a, normalize(&tuples).unwrap());
        assert_eq!(a, normalize(&atoms).unwrap());
        assert_eq!(a, normalize(&[point![1.0, 2.0, 3.0], point![4.0, 5.0, 6.0]]).unwrap());
        assert_eq!(a[1], make_vector(4.0, 5.0, 6.0));
    }

    #[test]
    fn references_are_point_like() {
        let atoms = [Atom {
            pos: (0.5, -1.0, 2.0),
        }];
        let refs: Vec<&Atom> = atoms.iter().collect();
        assert_eq!(normalize(&refs).unwrap(), vec![make_vector(0.5, -1.0, 2.0)]);
    }

    #[test]
    fn empty_collection_is_fine() {
        let none: [[f64; 3]; 0] = [];
        assert!(normalize(&none).unwrap().is_empty());
    }

    #[test]
    fn non_finite_coordinate_names_index() {
        let pts = [[0.0, 0.0, 0.0], [1.0, f64::NAN, 0.0]];
        match normalize(&pts) {
            Err(GeomError::InvalidArgument { field, .. }) => assert_eq!(field, "points[1]"),
            other => panic!("expected InvalidArgument, got {other:?}"),
        }
    }
}
