//! Linear algebra leaves consumed by the root-finding engines.
//!
//! The solvers only touch this module through three narrow entry points:
//! a square linear solve, a least-squares solve, and a general (complex)
//! eigenvalue computation.

use nalgebra::{DMatrix, DVector};
use num_complex::Complex64;

use crate::error::{RootError, RootResult};

/// Relative pivot threshold below which elimination treats a matrix as
/// singular.
const PIVOT_THRESHOLD: f64 = 1e-12;

/// Solves a square linear system `Ax = b` by Gaussian elimination with
/// partial pivoting.
///
/// Fails with [`SingularMatrix`](crate::error::RootError::SingularMatrix)
/// when the best available pivot is negligible relative to the matrix
/// scale.
pub fn solve_linear_system(a: &DMatrix<f64>, b: &DVector<f64>) -> RootResult<DVector<f64>> {
    let n = a.nrows();
    if n != a.ncols() {
        return Err(RootError::invalid_input("matrix must be square"));
    }
    if b.len() != n {
        return Err(RootError::DimensionMismatch {
            rows1: n,
            cols1: n,
            rows2: b.len(),
            cols2: 1,
        });
    }

    let mut m = a.clone_owned();
    let mut x = b.clone_owned();
    let scale = m.iter().fold(0.0_f64, |acc, v| acc.max(v.abs())).max(1.0);

    for k in 0..n {
        let mut pivot_row = k;
        for i in k + 1..n {
            if m[(i, k)].abs() > m[(pivot_row, k)].abs() {
                pivot_row = i;
            }
        }
        if m[(pivot_row, k)].abs() < PIVOT_THRESHOLD * scale {
            return Err(RootError::SingularMatrix);
        }
        if pivot_row != k {
            m.swap_rows(k, pivot_row);
            x.swap_rows(k, pivot_row);
        }

        for i in k + 1..n {
            let factor = m[(i, k)] / m[(k, k)];
            for j in k..n {
                m[(i, j)] -= factor * m[(k, j)];
            }
            x[i] -= factor * x[k];
        }
    }

    for i in (0..n).rev() {
        let mut sum = x[i];
        for j in i + 1..n {
            sum -= m[(i, j)] * x[j];
        }
        x[i] = sum / m[(i, i)];
    }

    Ok(x)
}

/// Solves the least-squares problem `min |Ax - b|` via the normal
/// equations `A^T A x = A^T b`.
///
/// Squaring the condition number is acceptable for the well-scaled
/// Jacobians the multivariate solvers produce; a rank-deficient `A`
/// surfaces as [`SingularMatrix`](crate::error::RootError::SingularMatrix).
pub fn solve_least_squares(a: &DMatrix<f64>, b: &DVector<f64>) -> RootResult<DVector<f64>> {
    if a.nrows() != b.len() {
        return Err(RootError::DimensionMismatch {
            rows1: a.nrows(),
            cols1: a.ncols(),
            rows2: b.len(),
            cols2: 1,
        });
    }

    let at = a.transpose();
    let ata = &at * a;
    let atb = &at * b;
    solve_linear_system(&ata, &atb)
}

/// Computes all eigenvalues of a square real matrix as complex numbers.
///
/// Delegates to nalgebra's Schur-based eigenvalue computation. No ordering
/// is guaranteed; callers that need reproducible output sort the result.
pub fn eigenvalues(matrix: &DMatrix<f64>) -> RootResult<Vec<Complex64>> {
    if matrix.nrows() != matrix.ncols() {
        return Err(RootError::invalid_input(
            "eigenvalues are only defined for square matrices",
        ));
    }

    Ok(matrix.complex_eigenvalues().iter().copied().collect())
}
