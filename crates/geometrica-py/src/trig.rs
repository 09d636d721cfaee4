//! Triangle solver bindings with the keyword signatures Python callers expect.

use crate::common::{map_geom_err, number, opt_number};
use pyo3::prelude::*;

#[pyfunction]
#[pyo3(signature = (side1 = None, angle1 = None, side2 = None, angle2 = None, obtuse = false))]
pub fn sine_law(
    side1: Option<&PyAny>,
    angle1: Option<&PyAny>,
    side2: Option<&PyAny>,
    angle2: Option<&PyAny>,
    obtuse: bool,
) -> PyResult<f64> {
    let side1 = opt_number("side1", side1)?;
    let side2 = opt_number("side2", side2)?;
    let angle1 = opt_number("angle1", angle1)?;
    let angle2 = opt_number("angle2", angle2)?;
    geometrica::api::sine_law_kw(side1, angle1, side2, angle2, obtuse).map_err(map_geom_err)
}

#[pyfunction]
#[pyo3(signature = (side1, side2, side3 = None, angle = None))]
pub fn cosine_law(
    side1: &PyAny,
    side2: &PyAny,
    side3: Option<&PyAny>,
    angle: Option<&PyAny>,
) -> PyResult<f64> {
    let side1 = number("side1", side1)?;
    let side2 = number("side2", side2)?;
    let side3 = opt_number("side3", side3)?;
    let angle = opt_number("angle", angle)?;
    geometrica::api::cosine_law_kw(side1, side2, side3, angle).map_err(map_geom_err)
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(sine_law, m)?)?;
    m.add_function(wrap_pyfunction!(cosine_law, m)?)?;
    Ok(())
}
