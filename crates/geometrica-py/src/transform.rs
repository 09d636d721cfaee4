//! Transform bindings: `translate`, `rotate`.

use crate::common::{map_geom_err, number, points_from_py, points_to_py};
use pyo3::exceptions::PyTypeError;
use pyo3::prelude::*;
use pyo3::types::PyString;

/// Translate points (tuples, or objects with x()/y()/z()) by (x, y, z).
#[pyfunction]
pub fn translate(py: Python<'_>, points: &PyAny, x: &PyAny, y: &PyAny, z: &PyAny) -> PyResult<PyObject> {
    let pts = points_from_py(points)?;
    let (x, y, z) = match (number("x", x), number("y", y), number("z", z)) {
        (Ok(x), Ok(y), Ok(z)) => (x, y, z),
        _ => {
            return Err(PyTypeError::new_err(format!(
                "Translation parameters must be numeric, not '({x}, {y}, {z})'"
            )))
        }
    };
    let out = geometrica::translate(&pts, x, y, z).map_err(map_geom_err)?;
    Ok(points_to_py(py, &out))
}

/// Rotate points about "x", "y" or "z" by `angle` degrees.
#[pyfunction]
#[pyo3(signature = (points, axis, angle, hand = None))]
pub fn rotate(
    py: Python<'_>,
    points: &PyAny,
    axis: &PyAny,
    angle: &PyAny,
    hand: Option<&PyAny>,
) -> PyResult<PyObject> {
    let pts = points_from_py(points)?;
    let angle = number("angle", angle)?;
    let hand = match hand {
        None => "right".to_string(),
        Some(h) => match h.downcast::<PyString>() {
            Ok(s) => s.to_str()?.to_string(),
            Err(_) => return Err(PyTypeError::new_err(format!("hand must be str, not '{h}'"))),
        },
    };
    let axis = match axis.downcast::<PyString>() {
        Ok(s) => s.to_str()?.to_string(),
        Err(_) => axis.str()?.to_str()?.to_string(),
    };
    let out = geometrica::api::rotate_named(&pts, &axis, angle, &hand).map_err(map_geom_err)?;
    Ok(points_to_py(py, &out))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(translate, m)?)?;
    m.add_function(wrap_pyfunction!(rotate, m)?)?;
    Ok(())
}
