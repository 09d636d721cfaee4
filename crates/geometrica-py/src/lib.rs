//! PyO3 bindings for `geometrica`.
//!
//! Notes
//! - Keep bindings thin: convert Python values, call the Rust API, map errors.
//! - Point collections accept tuples/lists or objects with x()/y()/z() methods.

use pyo3::prelude::*;

mod common;
mod transform;
mod trig;

#[pymodule]
fn geometrica_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__version__", geometrica::VERSION)?;
    transform::register(m)?;
    trig::register(m)?;
    Ok(())
}
