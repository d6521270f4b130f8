//! Broyden's quasi-Newton method for nonlinear systems.

use nalgebra::DVector;

use crate::config::SolverConfig;
use crate::error::{RootError, RootResult};
use crate::linear_algebra::solve_linear_system;
use crate::multivariate::finite_difference_jacobian;
use crate::report::ConvergenceResult;

/// Broyden's method for square nonlinear systems.
///
/// Starts from a forward-difference Jacobian and thereafter maintains the
/// approximation with rank-one secant updates
///
/// `J <- J + (dF - J dx) dx^T / (dx . dx)`
///
/// so each iteration costs one function evaluation instead of a full
/// Jacobian recomputation. Convergence is superlinear but less robust than
/// full Newton. The quasi-Newton state is local to this call. Requires
/// `m = n`.
///
/// When the approximation goes singular the Jacobian is rebuilt once from
/// finite differences; a second singular solve fails with
/// [`SingularJacobian`](crate::error::RootError::SingularJacobian).
pub fn broyden<F>(
    f: F,
    x0: &DVector<f64>,
    config: &SolverConfig,
) -> RootResult<ConvergenceResult<DVector<f64>>>
where
    F: Fn(&DVector<f64>) -> DVector<f64>,
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

    let mut jacobian = finite_difference_jacobian(&f, &x, &fx, config.step_size);
    let mut last_step = 0.0;

    for iteration in 0..config.max_iterations {
        let residual = fx.norm();
        if residual <= config.tolerance {
            return Ok(ConvergenceResult::converged(x, fx, iteration, last_step));
        }

        let neg_fx = -&fx;
        let dx = match solve_linear_system(&jacobian, &neg_fx) {
            Ok(dx) => dx,
            Err(RootError::SingularMatrix) => {
                // The secant updates drifted; one fresh Jacobian gets a
                // second chance.
                jacobian = finite_difference_jacobian(&f, &x, &fx, config.step_size);
                match solve_linear_system(&jacobian, &neg_fx) {
                    Ok(dx) => dx,
                    Err(RootError::SingularMatrix) => return Err(RootError::SingularJacobian),
                    Err(e) => return Err(e),
                }
            }
            Err(e) => return Err(e),
        };

        x += &dx;
        last_step = dx.norm();

        if last_step <= config.tolerance {
            fx = f(&x);
            return Ok(ConvergenceResult::converged(x, fx, iteration + 1, last_step));
        }

        let fx_new = f(&x);

        // Rank-one secant update from the step and residual change.
        let df = &fx_new - &fx;
        let j_dx = &jacobian * &dx;
        let correction = df - j_dx;
        let dx_dot_dx = dx.dot(&dx);
        if dx_dot_dx > 1e-30 {
            jacobian += correction * dx.transpose() / dx_dot_dx;
        }

        fx = fx_new;
    }

    Ok(ConvergenceResult::max_iter(
        x,
        fx,
        config.max_iterations,
        last_step,
    ))
}
