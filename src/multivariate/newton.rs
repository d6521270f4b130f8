//! Newton's method for nonlinear systems.

use nalgebra::{DMatrix, DVector};

use crate::config::SolverConfig;
use crate::error::{RootError, RootResult};
use crate::linear_algebra::solve_linear_system;
use crate::multivariate::{check_system_dims, finite_difference_jacobian};
use crate::report::ConvergenceResult;

/// Newton's method for square nonlinear systems.
///
/// Each iteration solves the linear system `J(x) dx = -F(x)` and applies
/// the full step. Quadratic local convergence near a simple root. Requires
/// `m = n`; a numerically singular Jacobian fails fast with
/// [`SingularJacobian`](crate::error::RootError::SingularJacobian).
///
/// # Example
///
/// ```rust
/// use nalgebra::{DMatrix, DVector};
/// use resolvent::multivariate::newton_system;
/// use resolvent::config::SolverConfig;
///
/// // x^2 + y^2 = 1, x = y  =>  x = y = 1/sqrt(2)
/// let f = |v: &DVector<f64>| {
///     DVector::from_vec(vec![v[0] * v[0] + v[1] * v[1] - 1.0, v[0] - v[1]])
/// };
/// let jac = |v: &DVector<f64>| {
///     DMatrix::from_row_slice(2, 2, &[2.0 * v[0], 2.0 * v[1], 1.0, -1.0])
/// };
///
/// let x0 = DVector::from_vec(vec![0.5, 0.5]);
/// let result = newton_system(f, jac, &x0, &SolverConfig::default()).unwrap();
/// assert!((result.root[0] - 0.5_f64.sqrt()).abs() < 1e-10);
/// ```
pub fn newton_system<F, J>(
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
    if fx.len() != x.len() {
        return Err(RootError::DimensionMismatch {
            rows1: fx.len(),
            cols1: 1,
            rows2: x.len(),
            cols2: 1,
        });
    }

    let mut last_step = 0.0;

    for iteration in 0..config.max_iterations {
        let residual = fx.norm();
        if residual <= config.tolerance {
            return Ok(ConvergenceResult::converged(x, fx, iteration, last_step));
        }

        let jac = jacobian(&x);
        check_system_dims(fx.len(), &jac, x.len())?;

        let dx = match solve_linear_system(&jac, &(-&fx)) {
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

/// Newton's method with a forward-difference Jacobian.
pub fn newton_system_numerical<F>(
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

    newton_system(&f, jacobian, x0, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_system() {
        // x + y = 3, 2x - y = 0  =>  x = 1, y = 2
        let f = |v: &DVector<f64>| DVector::from_vec(vec![v[0] + v[1] - 3.0, 2.0 * v[0] - v[1]]);

        let x0 = DVector::from_vec(vec![0.0, 0.0]);
        let result = newton_system_numerical(f, &x0, &SolverConfig::default()).unwrap();

        assert!(result.status.is_converged());
        assert!((result.root[0] - 1.0).abs() < 1e-6);
        assert!((result.root[1] - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_quadratic_system_analytic_jacobian() {
        let f = |v: &DVector<f64>| {
            DVector::from_vec(vec![v[0] * v[0] + v[1] * v[1] - 1.0, v[0] - v[1]])
        };
        let jac = |v: &DVector<f64>| {
            DMatrix::from_row_slice(2, 2, &[2.0 * v[0], 2.0 * v[1], 1.0, -1.0])
        };

        let x0 = DVector::from_vec(vec![0.5, 0.5]);
        let result = newton_system(f, jac, &x0, &SolverConfig::default()).unwrap();

        let expected = 1.0 / 2.0_f64.sqrt();
        assert!((result.root[0] - expected).abs() < 1e-10);
        assert!((result.root[1] - expected).abs() < 1e-10);
    }

    #[test]
    fn test_three_dimensional_system() {
        // x + y + z = 6, x - y = 0, y - z = 0  =>  x = y = z = 2
        let f = |v: &DVector<f64>| {
            DVector::from_vec(vec![v[0] + v[1] + v[2] - 6.0, v[0] - v[1], v[1] - v[2]])
        };

        let x0 = DVector::from_vec(vec![1.0, 1.0, 1.0]);
        let result = newton_system_numerical(f, &x0, &SolverConfig::default()).unwrap();

        for i in 0..3 {
            assert!((result.root[i] - 2.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_singular_jacobian() {
        // Both components identical: the Jacobian has rank one everywhere.
        let f = |v: &DVector<f64>| DVector::from_vec(vec![v[0] + v[1] - 1.0, v[0] + v[1] + 1.0]);

        let x0 = DVector::from_vec(vec![0.0, 0.0]);
        let result = newton_system_numerical(f, &x0, &SolverConfig::default());

        assert!(matches!(result, Err(RootError::SingularJacobian)));
    }

    #[test]
    fn test_dimension_mismatch() {
        let f = |v: &DVector<f64>| DVector::from_vec(vec![v[0], v[1], 0.0]);

        let x0 = DVector::from_vec(vec![1.0, 1.0]);
        let result = newton_system_numerical(f, &x0, &SolverConfig::default());

        assert!(matches!(result, Err(RootError::DimensionMismatch { .. })));
    }

    #[test]
    fn test_empty_input_rejected() {
        let f = |_: &DVector<f64>| DVector::from_vec(vec![]);

        let x0 = DVector::from_vec(vec![]);
        let result = newton_system_numerical(f, &x0, &SolverConfig::default());

        assert!(matches!(result, Err(RootError::InvalidInput { .. })));
    }
}
