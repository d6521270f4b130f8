//! Secant root-finding algorithm.

use crate::config::SolverConfig;
use crate::error::{RootError, RootResult};
use crate::report::ConvergenceResult;
use crate::solvers::SINGULARITY_FLOOR;

/// Secant root-finding algorithm.
///
/// Approximates the derivative with the finite difference through the two
/// most recent iterates. Convergence is superlinear (order ~1.618) near a
/// simple root, and no analytic derivative is needed.
///
/// Unlike the bracketing methods, the secant iteration has no
/// bracket-preservation guarantee: iterates may leave `[x0, x1]` entirely
/// and the method can diverge. This is a documented limitation; use a
/// bracketing solver when a guarantee is required.
///
/// # Example
///
/// ```rust
/// use resolvent::solvers::secant;
/// use resolvent::config::SolverConfig;
///
/// let f = |x: f64| x * x - 2.0;
///
/// let result = secant(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn secant<F>(
    f: F,
    x0: f64,
    x1: f64,
    config: &SolverConfig,
) -> RootResult<ConvergenceResult<f64>>
where
    F: Fn(f64) -> f64,
{
    config.validate()?;

    let mut x_prev = x0;
    let mut x_curr = x1;
    let mut f_prev = f(x_prev);
    let mut f_curr = f(x_curr);

    for iteration in 0..config.max_iterations {
        if f_curr.abs() <= config.tolerance {
            return Ok(ConvergenceResult::converged(
                x_curr,
                f_curr,
                iteration,
                (x_curr - x_prev).abs(),
            ));
        }

        // A flat secant line gives no usable step direction.
        let denom = f_curr - f_prev;
        if denom.abs() < SINGULARITY_FLOOR {
            return Err(RootError::singular_derivative(x_curr, denom));
        }

        let x_next = x_curr - f_curr * (x_curr - x_prev) / denom;
        if !x_next.is_finite() {
            return Err(RootError::invalid_input(format!(
                "secant iteration produced a non-finite estimate after {iteration} iterations"
            )));
        }

        let step = (x_next - x_curr).abs();
        if step <= config.tolerance {
            let f_next = f(x_next);
            return Ok(ConvergenceResult::converged(
                x_next,
                f_next,
                iteration + 1,
                step,
            ));
        }

        x_prev = x_curr;
        f_prev = f_curr;
        x_curr = x_next;
        f_curr = f(x_curr);
    }

    Ok(ConvergenceResult::max_iter(
        x_curr,
        f_curr,
        config.max_iterations,
        (x_curr - x_prev).abs(),
    ))
}
