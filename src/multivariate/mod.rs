//! Solvers for nonlinear systems `F(x) = 0`, `F: R^m -> R^n`.
//!
//! - [`newton_system`]: full Newton step via a Jacobian linear solve;
//!   quadratic local convergence, square systems only
//! - [`broyden`]: quasi-Newton with rank-one secant updates; cheaper per
//!   iteration, superlinear, square systems only
//! - [`gauss_newton`]: normal-equations least-squares step; also accepts
//!   non-square systems, where it converges to a least-squares minimizer
//!
//! Every method takes the callable as `Fn(&DVector<f64>) -> DVector<f64>`
//! and, where a Jacobian is involved, either an analytic
//! `Fn(&DVector<f64>) -> DMatrix<f64>` or a `_numerical` variant that
//! approximates it by forward differences. Jacobian state never outlives
//! one solve call.

mod broyden;
mod gauss_newton;
mod newton;

pub use broyden::broyden;
pub use gauss_newton::{gauss_newton, gauss_newton_numerical};
pub use newton::{newton_system, newton_system_numerical};

use nalgebra::{DMatrix, DVector};

use crate::error::{RootError, RootResult};

/// Approximates the Jacobian of `f` at `x` by forward differences.
///
/// One extra function evaluation per column; the per-column step is scaled
/// by the magnitude of the corresponding coordinate. `fx` must be `f(x)`,
/// which callers already have in hand.
pub fn finite_difference_jacobian<F>(
    f: &F,
    x: &DVector<f64>,
    fx: &DVector<f64>,
    step: f64,
) -> DMatrix<f64>
where
    F: Fn(&DVector<f64>) -> DVector<f64>,
{
    let n = fx.len();
    let m = x.len();
    let mut jacobian = DMatrix::zeros(n, m);

    for j in 0..m {
        let h = step * x[j].abs().max(1.0);
        let mut x_step = x.clone_owned();
        x_step[j] += h;
        let f_step = f(&x_step);
        for i in 0..n {
            jacobian[(i, j)] = (f_step[i] - fx[i]) / h;
        }
    }

    jacobian
}

/// Checks that the callable output and Jacobian dimensions agree with the
/// iterate. Shared entry validation for the system solvers.
pub(crate) fn check_system_dims(
    fx_len: usize,
    jacobian: &DMatrix<f64>,
    x_len: usize,
) -> RootResult<()> {
    if jacobian.nrows() != fx_len || jacobian.ncols() != x_len {
        return Err(RootError::DimensionMismatch {
            rows1: jacobian.nrows(),
            cols1: jacobian.ncols(),
            rows2: fx_len,
            cols2: x_len,
        });
    }
    Ok(())
}
