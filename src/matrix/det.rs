use crate::error::MatrixError;
use crate::matrix::matrix::Matrix;
use crate::utils::round2;
use rayon::prelude::*;

fn check_square(matrix: &Matrix) -> Result<usize, MatrixError> {
    if !matrix.is_square() {
        return Err(MatrixError::NotSquare {
            rows: matrix.rows,
            cols: matrix.cols,
        });
    }
    Ok(matrix.rows)
}

/// Determinant by the classic method: elimination with partial pivoting on a
/// working copy. Row swaps flip the sign, so a zero leading entry is never
/// fatal here; `minor` relies on that for every submatrix it hands over.
pub fn determinant(matrix: &Matrix) -> Result<f64, MatrixError> {
    let n = check_square(matrix)?;
    let mut cells = matrix.cells.clone();
    let mut det = 1.0;

    for col in 0..n {
        let pivot_row = (col..n)
            .max_by(|&a, &b| {
                cells[a * n + col]
                    .abs()
                    .total_cmp(&cells[b * n + col].abs())
            })
            .unwrap_or(col);

        let pivot = cells[pivot_row * n + col];
        if pivot == 0.0 {
            return Ok(0.0);
        }

        if pivot_row != col {
            for k in col..n {
                cells.swap(col * n + k, pivot_row * n + k);
            }
            det = -det;
        }

        det *= pivot;
        for row in col + 1..n {
            let factor = cells[row * n + col] / pivot;
            for k in col..n {
                cells[row * n + k] -= factor * cells[col * n + k];
            }
        }
    }

    Ok(round2(det))
}

/// Sarrus' rule, the fixed six-term expansion for 3x3 matrices only.
pub fn determinant_sarrus(matrix: &Matrix) -> Result<f64, MatrixError> {
    let n = check_square(matrix)?;
    if n != 3 {
        return Err(MatrixError::UnsupportedSize {
            rows: matrix.rows,
            cols: matrix.cols,
        });
    }

    let at = |r, c| matrix.at(r, c);
    Ok(round2(
        at(0, 0) * at(1, 1) * at(2, 2)
            + at(0, 1) * at(1, 2) * at(2, 0)
            + at(0, 2) * at(1, 0) * at(2, 1)
            - at(0, 2) * at(1, 1) * at(2, 0)
            - at(0, 0) * at(1, 2) * at(2, 1)
            - at(0, 1) * at(1, 0) * at(2, 2),
    ))
}

/// Forward elimination with no row exchange. A pivot that is exactly zero
/// returns 0 immediately, even when a row swap would expose a nonzero
/// determinant. Known, intentional behavior of this method; `determinant`
/// is the pivoting counterpart.
pub fn determinant_gaussian(matrix: &Matrix) -> Result<f64, MatrixError> {
    let n = check_square(matrix)?;
    let mut cells = matrix.cells.clone();
    let mut det = 1.0;

    for i in 0..n {
        let pivot = cells[i * n + i];
        if pivot == 0.0 {
            return Ok(0.0);
        }
        det *= pivot;
        for j in i + 1..n {
            let factor = cells[j * n + i] / pivot;
            for k in i..n {
                cells[j * n + k] -= factor * cells[i * n + k];
            }
        }
    }

    Ok(round2(det))
}

/// Determinant of the submatrix with row `i` and column `j` deleted.
pub fn minor(matrix: &Matrix, i: usize, j: usize) -> Result<f64, MatrixError> {
    let n = check_square(matrix)?;
    if i >= n || j >= n {
        return Err(MatrixError::IndexOutOfRange {
            row: i,
            col: j,
            rows: matrix.rows,
            cols: matrix.cols,
        });
    }
    // 0x0 submatrix of a 1x1 matrix: empty pivot product, 1.0
    if n == 1 {
        return Ok(1.0);
    }
    determinant(&matrix.submatrix(i, j))
}

pub fn cofactor(matrix: &Matrix, i: usize, j: usize) -> Result<f64, MatrixError> {
    let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
    Ok(round2(sign * minor(matrix, i, j)?))
}

/// Minor of every cell. Cells are independent, so they are computed in
/// parallel.
pub fn minor_matrix(matrix: &Matrix) -> Result<Matrix, MatrixError> {
    let n = check_square(matrix)?;
    let cells = (0..n * n)
        .into_par_iter()
        .map(|cell| minor(matrix, cell / n, cell % n))
        .collect::<Result<Vec<f64>, MatrixError>>()?;

    Ok(Matrix {
        rows: n,
        cols: n,
        cells,
    })
}

/// Cofactor of every cell, in parallel.
pub fn cofactor_matrix(matrix: &Matrix) -> Result<Matrix, MatrixError> {
    let n = check_square(matrix)?;
    let cells = (0..n * n)
        .into_par_iter()
        .map(|cell| cofactor(matrix, cell / n, cell % n))
        .collect::<Result<Vec<f64>, MatrixError>>()?;

    Ok(Matrix {
        rows: n,
        cols: n,
        cells,
    })
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
