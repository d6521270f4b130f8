//! Gauss-Newton method for nonlinear systems and least squares.

use nalgebra::{DMatrix, DVector};

use crate::config::SolverConfig;
use crate::error::{RootError, RootResult};
use crate::linear_algebra::solve_linear_system;
use crate::multivariate::{check_system_dims, finite_difference_jacobian};
use crate::report::ConvergenceResult;

/// Gauss-Newton iteration for `F(x) = 0`, `F: R^m -> R^n`.
///
/// Linearizes `F` at the current estimate and solves the normal-equations
/// step `J^T J dx = -J^T F` each iteration. Convergence is declared when
/// the residual norm or the step norm drops below tolerance.
///
/// For `m != n` (and for inconsistent square systems) the iteration
/// converges to a least-squares minimizer, not necessarily an exact zero —
/// inspect `value` on the result rather than assuming a root. The
/// step-norm criterion is what terminates in that case, since the residual
/// may never reach the tolerance.
///
/// A rank-deficient Jacobian makes the normal equations singular and fails
/// with [`SingularJacobian`](crate::error::RootError::SingularJacobian).
pub fn gauss_newton<F, J>(
    f: F,
    jacobian: J,
    x0: &DVector<f64>,
    config: &SolverConfig,
) -> RootResult<ConvergenceResult<DVector<f64>>>
where
    F: Fn(&DVector<f64>) -> DVector<f64>,
    J: Fn(&DVector<f64>) -> DMatrix<f64>,
{
    config.validate()?;
    if x0.is_empty() {
        return Err(RootError::invalid_input("initial guess must be non-empty"));
    }

    let mut x = x0.clone_owned();
    let mut fx = f(&x);
    let mut last_step = 0.0;

    for iteration in 0..config.max_iterations {
        let residual = fx.norm();
        if residual <= config.tolerance {
            return Ok(ConvergenceResult::converged(x, fx, iteration, last_step));
        }

        let jac = jacobian(&x);
        check_system_dims(fx.len(), &jac, x.len())?;

        let jt = jac.transpose();
        let jtj = &jt * &jac;
        let jtf = &jt * &fx;

        let dx = match solve_linear_system(&jtj, &(-jtf)) {
            Ok(dx) => dx,
            Err(RootError::SingularMatrix) => return Err(RootError::SingularJacobian),
            Err(e) => return Err(e),
        };

        x += &dx;
        last_step = dx.norm();
        fx = f(&x);

        if last_step <= config.tolerance {
            return Ok(ConvergenceResult::converged(x, fx, iteration + 1, last_step));
        }
    }

    Ok(ConvergenceResult::max_iter(
        x,
        fx,
        config.max_iterations,
        last_step,
    ))
}

/// Gauss-Newton with a forward-difference Jacobian.
pub fn gauss_newton_numerical<F>(
    f: F,
    x0: &DVector<f64>,
    config: &SolverConfig,
) -> RootResult<ConvergenceResult<DVector<f64>>>
where
    F: Fn(&DVector<f64>) -> DVector<f64>,
{
    let step = config.step_size;
    let jacobian = |x: &DVector<f64>| {
        let fx = f(x);
        finite_difference_jacobian(&f, x, &fx, step)
    };

    gauss_newton(&f, jacobian, x0, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_nonlinear_system() {
        let f = |v: &DVector<f64>| {
            DVector::from_vec(vec![v[0] * v[0] + v[1] * v[1] - 1.0, v[0] - v[1]])
        };

        let x0 = DVector::from_vec(vec![0.5, 0.5]);
        let result = gauss_newton_numerical(f, &x0, &SolverConfig::default()).unwrap();

        let expected = 1.0 / 2.0_f64.sqrt();
        assert!(result.status.is_converged());
        assert!((result.root[0] - expected).abs() < 1e-8);
    }

    #[test]
    fn test_overdetermined_least_squares() {
        // F: R^1 -> R^2, F(x) = (x - 1, x - 3): no zero exists and the
        // least-squares minimizer is x = 2 with residual sqrt(2).
        let f = |v: &DVector<f64>| DVector::from_vec(vec![v[0] - 1.0, v[0] - 3.0]);

        let x0 = DVector::from_vec(vec![0.0]);
        let result = gauss_newton_numerical(f, &x0, &SolverConfig::default()).unwrap();

        assert!(result.status.is_converged());
        assert!((result.root[0] - 2.0).abs() < 1e-6);
        assert!((result.value.norm() - 2.0_f64.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_analytic_jacobian() {
        let f = |v: &DVector<f64>| {
            DVector::from_vec(vec![v[0] * v[0] - v[1], v[0] + v[1] - 2.0])
        };
        let jac =
            |v: &DVector<f64>| DMatrix::from_row_slice(2, 2, &[2.0 * v[0], -1.0, 1.0, 1.0]);

        let x0 = DVector::from_vec(vec![0.5, 0.5]);
        let result = gauss_newton(f, jac, &x0, &SolverConfig::default()).unwrap();

        assert!((result.root[0] - 1.0).abs() < 1e-8);
        assert!((result.root[1] - 1.0).abs() < 1e-8);
    }

    #[test]
    fn test_rank_deficient_jacobian_fails() {
        let f = |v: &DVector<f64>| DVector::from_vec(vec![v[0] + v[1], 2.0 * (v[0] + v[1])]);

        let x0 = DVector::from_vec(vec![1.0, 1.0]);
        let result = gauss_newton_numerical(f, &x0, &SolverConfig::default());

        assert!(matches!(result, Err(RootError::SingularJacobian)));
    }

    #[test]
    fn test_jacobian_dimension_validated() {
        let f = |v: &DVector<f64>| DVector::from_vec(vec![v[0], v[1]]);
        // Wrong shape on purpose.
        let jac = |_: &DVector<f64>| DMatrix::from_row_slice(1, 1, &[1.0]);

        let x0 = DVector::from_vec(vec![1.0, 1.0]);
        let result = gauss_newton(f, jac, &x0, &SolverConfig::default());

        assert!(matches!(result, Err(RootError::DimensionMismatch { .. })));
    }
}
