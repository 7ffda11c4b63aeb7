use pyo3::exceptions::PyValueError;
use pyo3::PyErr;
use thiserror::Error;

/// Failure kinds the numeric core can signal. The Python UI only needs the
/// message text, but the kinds are kept distinct so tests can pin them down.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatrixError {
    #[error("dimensions not compatible for {op}: {lhs_rows}x{lhs_cols} and {rhs_rows}x{rhs_cols}")]
    DimensionMismatch {
        op: &'static str,
        lhs_rows: usize,
        lhs_cols: usize,
        rhs_rows: usize,
        rhs_cols: usize,
    },

    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("Sarrus' rule is only applicable for 3x3 matrices, got {rows}x{cols}")]
    UnsupportedSize { rows: usize, cols: usize },

    #[error("index ({row}, {col}) out of range for a {rows}x{cols} matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("cell ({row}, {col}) is not a valid number: {text:?}")]
    InvalidNumericInput {
        row: usize,
        col: usize,
        text: String,
    },
}

impl From<MatrixError> for PyErr {
    fn from(error: MatrixError) -> PyErr {
        PyValueError::new_err(error.to_string())
    }
}
