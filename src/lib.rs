use pyo3::prelude::*;

pub mod error;

pub mod matrix {
    pub mod det;
    pub mod matrix;
}

pub mod utils;

/// A Python module implemented in Rust. The tkinter calculator imports this,
/// parses its entry grid into a `Matrix`, invokes one operation, and renders
/// the returned grid or scalar.
#[pymodule]
fn matrix_math(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<matrix::matrix::Matrix>()?;
    Ok(())
}
