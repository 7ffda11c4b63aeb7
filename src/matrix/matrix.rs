use crate::error::MatrixError;
use crate::matrix::det;
use itertools::iproduct;
use pyo3::prelude::*;
use pyo3::types::PyType;
use std::ops;
use std::ops::{Add, Mul, Sub};

/// Dense row-major matrix of real numbers. Built once per user action from
/// the entry grid, consumed by one operation, then discarded; `frozen`
/// because nothing ever mutates it from the Python side.
#[derive(Debug, Clone, PartialEq)]
#[pyclass(frozen)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<f64>,
}

#[pymethods]
impl Matrix {
    #[classmethod]
    pub fn from_list(_cls: &Bound<PyType>, lines: Vec<Vec<f64>>) -> Self {
        Matrix::from_lines(lines)
    }

    /// Validating constructor for the UI entry grid: every cell is a string
    /// straight out of a text field.
    #[classmethod]
    pub fn parse(_cls: &Bound<PyType>, lines: Vec<Vec<String>>) -> PyResult<Self> {
        Ok(Matrix::parse_lines(&lines)?)
    }

    pub fn to_list(&self) -> Vec<Vec<f64>> {
        self.cells
            .chunks(self.cols)
            .map(|line| line.into())
            .collect()
    }

    pub fn __add__(&self, rhs: &Matrix) -> PyResult<Matrix> {
        Ok(self.add(rhs)?)
    }

    pub fn __sub__(&self, rhs: &Matrix) -> PyResult<Matrix> {
        Ok(self.sub(rhs)?)
    }

    pub fn __mul__(&self, rhs: &Matrix) -> PyResult<Matrix> {
        Ok(self.mul(rhs)?)
    }

    #[getter]
    pub fn T(&self) -> Matrix {
        self.transpose()
    }

    #[getter]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[getter]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Determinant by the classic method.
    pub fn det(&self) -> PyResult<f64> {
        Ok(det::determinant(self)?)
    }

    pub fn det_sarrus(&self) -> PyResult<f64> {
        Ok(det::determinant_sarrus(self)?)
    }

    pub fn det_gaussian(&self) -> PyResult<f64> {
        Ok(det::determinant_gaussian(self)?)
    }

    pub fn minor(&self, i: usize, j: usize) -> PyResult<f64> {
        Ok(det::minor(self, i, j)?)
    }

    pub fn cofactor(&self, i: usize, j: usize) -> PyResult<f64> {
        Ok(det::cofactor(self, i, j)?)
    }

    pub fn minor_matrix(&self) -> PyResult<Matrix> {
        Ok(det::minor_matrix(self)?)
    }

    pub fn cofactor_matrix(&self) -> PyResult<Matrix> {
        Ok(det::cofactor_matrix(self)?)
    }
}

impl Matrix {
    pub fn from_lines(lines: Vec<Vec<f64>>) -> Self {
        let cols = lines.iter().map(|l| l.len()).max().unwrap_or(0);
        let rows = lines.len();

        Matrix {
            rows,
            cols,
            cells: lines
                .into_iter()
                .flat_map(|l| {
                    let pad = cols - l.len();
                    l.into_iter().chain(std::iter::repeat_n(0.0, pad))
                })
                .collect(),
        }
    }

    pub fn parse_lines(lines: &[Vec<String>]) -> Result<Self, MatrixError> {
        let mut parsed = Vec::with_capacity(lines.len());
        for (row, line) in lines.iter().enumerate() {
            let mut values = Vec::with_capacity(line.len());
            for (col, text) in line.iter().enumerate() {
                let value: f64 =
                    text.trim()
                        .parse()
                        .map_err(|_| MatrixError::InvalidNumericInput {
                            row,
                            col,
                            text: text.clone(),
                        })?;
                values.push(value);
            }
            parsed.push(values);
        }
        Ok(Matrix::from_lines(parsed))
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn transpose(&self) -> Matrix {
        Matrix {
            rows: self.cols,
            cols: self.rows,
            cells: iproduct!(0..self.cols, 0..self.rows)
                .map(|(c, r)| self.at(r, c))
                .collect(),
        }
    }

    /// Copy with row `skip_row` and column `skip_col` deleted.
    pub fn submatrix(&self, skip_row: usize, skip_col: usize) -> Matrix {
        Matrix {
            rows: self.rows - 1,
            cols: self.cols - 1,
            cells: iproduct!(0..self.rows, 0..self.cols)
                .filter(|&(r, c)| r != skip_row && c != skip_col)
                .map(|(r, c)| self.at(r, c))
                .collect(),
        }
    }

    #[inline(always)]
    pub fn at(&self, row: usize, col: usize) -> f64 {
        self.cells[row * self.cols + col]
    }
}

impl ops::Add<&Matrix> for &Matrix {
    type Output = Result<Matrix, MatrixError>;

    fn add(self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        if self.cols != rhs.cols || self.rows != rhs.rows {
            return Err(MatrixError::DimensionMismatch {
                op: "add",
                lhs_rows: self.rows,
                lhs_cols: self.cols,
                rhs_rows: rhs.rows,
                rhs_cols: rhs.cols,
            });
        }

        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            cells: self
                .cells
                .iter()
                .zip(rhs.cells.iter())
                .map(|(a, b)| a + b)
                .collect(),
        })
    }
}

impl ops::Sub<&Matrix> for &Matrix {
    type Output = Result<Matrix, MatrixError>;

    fn sub(self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        if self.cols != rhs.cols || self.rows != rhs.rows {
            return Err(MatrixError::DimensionMismatch {
                op: "subtract",
                lhs_rows: self.rows,
                lhs_cols: self.cols,
                rhs_rows: rhs.rows,
                rhs_cols: rhs.cols,
            });
        }

        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            cells: self
                .cells
                .iter()
                .zip(rhs.cells.iter())
                .map(|(a, b)| a - b)
                .collect(),
        })
    }
}

impl ops::Mul<&Matrix> for &Matrix {
    type Output = Result<Matrix, MatrixError>;

    fn mul(self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        if self.cols != rhs.rows {
            return Err(MatrixError::DimensionMismatch {
                op: "multiply",
                lhs_rows: self.rows,
                lhs_cols: self.cols,
                rhs_rows: rhs.rows,
                rhs_cols: rhs.cols,
            });
        }

        Ok(Matrix {
            rows: self.rows,
            cols: rhs.cols,
            cells: iproduct!(0..self.rows, 0..rhs.cols)
                .map(|(i, j)| (0..self.cols).map(|k| self.at(i, k) * rhs.at(k, j)).sum())
                .collect(),
        })
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatrixError;

    #[test]
    fn test_from_list_to_list() {
        let m = Matrix::from_lines(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert_eq!(m.rows, 2);
        assert_eq!(m.cols, 3);
        assert_eq!(m.to_list(), vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);

        // short rows are padded with zeros
        let m = Matrix::from_lines(vec![vec![1.0, 2.0], vec![3.0]]);
        assert_eq!(m.to_list(), vec![vec![1.0, 2.0], vec![3.0, 0.0]]);
    }

    #[test]
    fn test_parse_lines() {
        let grid = vec![
            vec!["1.5".into(), " 2 ".into()],
            vec!["-3".into(), "4e1".into()],
        ];
        let m = Matrix::parse_lines(&grid).unwrap();
        assert_eq!(m.to_list(), vec![vec![1.5, 2.0], vec![-3.0, 40.0]]);

        let grid = vec![vec!["1".into(), "abc".into()]];
        assert_eq!(
            Matrix::parse_lines(&grid),
            Err(MatrixError::InvalidNumericInput {
                row: 0,
                col: 1,
                text: "abc".into(),
            })
        );
    }

    #[test]
    fn test_add_sub() {
        let a = Matrix::from_lines(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = Matrix::from_lines(vec![vec![5.0, 6.0], vec![7.0, 8.0]]);

        let c = (&a + &b).unwrap();
        assert_eq!(c.to_list(), vec![vec![6.0, 8.0], vec![10.0, 12.0]]);

        // add then subtract gives back the first operand
        assert_eq!((&c - &b).unwrap(), a);

        let wide = Matrix::from_lines(vec![vec![1.0, 2.0, 3.0]]);
        assert!(matches!(
            &a + &wide,
            Err(MatrixError::DimensionMismatch { op: "add", .. })
        ));
    }

    #[test]
    fn test_mul() {
        let a = Matrix::from_lines(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = Matrix::from_lines(vec![vec![5.0, 6.0], vec![7.0, 8.0]]);
        let c = (&a * &b).unwrap();
        assert_eq!(c.to_list(), vec![vec![19.0, 22.0], vec![43.0, 50.0]]);

        let row = Matrix::from_lines(vec![vec![1.0, 2.0, 3.0]]);
        let col = Matrix::from_lines(vec![vec![4.0], vec![5.0], vec![6.0]]);
        let c = (&row * &col).unwrap();
        assert_eq!(c.to_list(), vec![vec![32.0]]);

        // 1x2 times 1x2 is not a valid product
        let a = Matrix::from_lines(vec![vec![1.0, 2.0]]);
        let b = Matrix::from_lines(vec![vec![1.0, 2.0]]);
        assert!(matches!(
            &a * &b,
            Err(MatrixError::DimensionMismatch { op: "multiply", .. })
        ));
    }

    #[test]
    fn test_transpose() {
        let m = Matrix::from_lines(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert_eq!(
            m.transpose().to_list(),
            vec![vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]]
        );
        assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn test_submatrix() {
        let m = Matrix::from_lines(vec![
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 9.0],
        ]);
        assert_eq!(
            m.submatrix(1, 0).to_list(),
            vec![vec![2.0, 3.0], vec![8.0, 9.0]]
        );
        assert_eq!(
            m.submatrix(0, 2).to_list(),
            vec![vec![4.0, 5.0], vec![7.0, 8.0]]
        );
    }
}
