use geometrica::{GeomError, Point};
use pyo3::exceptions::{PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PySequence, PyString, PyTuple};

/// ArgumentCount and InvalidType surface as `TypeError`, the rest as `ValueError`.
pub fn map_geom_err(err: GeomError) -> PyErr {
    match err {
        GeomError::ArgumentCount { .. } | GeomError::InvalidType { .. } => {
            PyTypeError::new_err(err.to_string())
        }
        _ => PyValueError::new_err(err.to_string()),
    }
}

/// Extract a required number; strings (even numeric ones) are rejected.
pub fn number(field: &str, v: &PyAny) -> PyResult<f64> {
    if v.is_instance_of::<PyString>() {
        return Err(PyTypeError::new_err(format!(
            "{field} must be a number, not '{v}'"
        )));
    }
    v.extract::<f64>()
        .map_err(|_| PyTypeError::new_err(format!("{field} must be a number, not '{v}'")))
}

/// `None` (or an omitted keyword) means "unknown".
pub fn opt_number(field: &str, v: Option<&PyAny>) -> PyResult<Option<f64>> {
    match v {
        None => Ok(None),
        Some(v) if v.is_none() => Ok(None),
        Some(v) => number(field, v).map(Some),
    }
}

/// Normalize a point collection. If the first item is a 3-element sequence
/// every item is unpacked as (x, y, z); otherwise every item has its
/// `x()`, `y()`, `z()` methods called.
pub fn points_from_py(objects: &PyAny) -> PyResult<Vec<[f64; 3]>> {
    let items: Vec<&PyAny> = objects.iter()?.collect::<PyResult<_>>()?;
    let unpackable = match items.first() {
        Some(first) => first
            .downcast::<PySequence>()
            .map(|seq| seq.len().map(|n| n == 3).unwrap_or(false))
            .unwrap_or(false),
        None => true,
    };
    items
        .into_iter()
        .map(|item| {
            if unpackable {
                let seq = item
                    .downcast::<PySequence>()
                    .map_err(|_| PyTypeError::new_err(format!("cannot unpack '{item}' into (x, y, z)")))?;
                if seq.len()? != 3 {
                    return Err(PyTypeError::new_err(format!(
                        "cannot unpack '{item}' into (x, y, z)"
                    )));
                }
                Ok([
                    number("x", seq.get_item(0)?)?,
                    number("y", seq.get_item(1)?)?,
                    number("z", seq.get_item(2)?)?,
                ])
            } else {
                Ok([
                    number("x()", item.call_method0("x")?)?,
                    number("y()", item.call_method0("y")?)?,
                    number("z()", item.call_method0("z")?)?,
                ])
            }
        })
        .collect()
}

/// Points come back as a tuple of (x, y, z) tuples.
pub fn points_to_py(py: Python<'_>, points: &[Point]) -> PyObject {
    PyTuple::new(py, points.iter().map(|p| (p.x, p.y, p.z))).into_py(py)
}
