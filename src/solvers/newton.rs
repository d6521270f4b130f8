//! Newton-Raphson root-finding algorithm.

use crate::config::SolverConfig;
use crate::error::{RootError, RootResult};
use crate::report::ConvergenceResult;
use crate::solvers::SINGULARITY_FLOOR;

/// Newton-Raphson root-finding algorithm.
///
/// Uses the iteration `x_{n+1} = x_n - f(x_n) / f'(x_n)` with an analytic
/// derivative. Quadratic convergence near a simple root; no bracket is
/// required, which also makes this the method of choice for refining a
/// close starting estimate — including touching roots, where the function
/// never changes sign and bracketing methods cannot apply (convergence
/// there degrades to linear).
///
/// Fails with [`SingularDerivative`](crate::error::RootError::SingularDerivative)
/// when `|f'(x)|` falls below the numeric floor.
///
/// # Example
///
/// ```rust
/// use resolvent::solvers::newton_raphson;
/// use resolvent::config::SolverConfig;
///
/// let f = |x: f64| x * x - 2.0;
/// let df = |x: f64| 2.0 * x;
///
/// let result = newton_raphson(f, df, 1.5, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn newton_raphson<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    config: &SolverConfig,
) -> RootResult<ConvergenceResult<f64>>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    config.validate()?;
    if !initial_guess.is_finite() {
        return Err(RootError::invalid_input(format!(
            "initial guess must be finite, got {initial_guess}"
        )));
    }

    let mut x = initial_guess;
    let mut last_step = 0.0;

    for iteration in 0..config.max_iterations {
        let fx = f(x);

        if fx.abs() <= config.tolerance {
            return Ok(ConvergenceResult::converged(x, fx, iteration, last_step));
        }

        let dfx = df(x);
        if dfx.abs() < SINGULARITY_FLOOR {
            return Err(RootError::singular_derivative(x, dfx));
        }

        let step = fx / dfx;
        x -= step;
        last_step = step.abs();

        if !x.is_finite() {
            return Err(RootError::invalid_input(format!(
                "Newton iteration produced a non-finite estimate after {iteration} iterations"
            )));
        }

        if last_step <= config.tolerance {
            let final_fx = f(x);
            return Ok(ConvergenceResult::converged(
                x,
                final_fx,
                iteration + 1,
                last_step,
            ));
        }
    }

    let fx = f(x);
    Ok(ConvergenceResult::max_iter(
        x,
        fx,
        config.max_iterations,
        last_step,
    ))
}

/// Newton-Raphson with a central finite-difference derivative.
///
/// Use when an analytic derivative is not available; accuracy is limited by
/// the differencing step (`config.step_size`).
pub fn newton_raphson_numerical<F>(
    f: F,
    initial_guess: f64,
    config: &SolverConfig,
) -> RootResult<ConvergenceResult<f64>>
where
    F: Fn(f64) -> f64,
{
    let h = config.step_size;
    let df = |x: f64| (f(x + h) - f(x - h)) / (2.0 * h);

    newton_raphson(&f, df, initial_guess, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RootError;
    use approx::assert_relative_eq;

    #[test]
    fn test_sqrt_2() {
        let f = |x: f64| x * x - 2.0;
        let df = |x: f64| 2.0 * x;

        let result = newton_raphson(f, df, 1.5, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-10);
        assert!(result.iterations < 10);
    }

    #[test]
    fn test_cube_root() {
        let f = |x: f64| x * x * x - 27.0;
        let df = |x: f64| 3.0 * x * x;

        let result = newton_raphson(f, df, 2.0, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, 3.0, epsilon = 1e-10);
    }

    #[test]
    fn test_numerical_derivative() {
        let f = |x: f64| x * x - 2.0;

        let result = newton_raphson_numerical(f, 1.5, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-8);
    }

    #[test]
    fn test_touching_root() {
        // sin^2 touches zero at pi without a sign change; bracketing methods
        // cannot see it but Newton walks in (at linear rate).
        let f = |x: f64| x.sin().powi(2);
        let df = |x: f64| (2.0 * x).sin();

        let result = newton_raphson(f, df, 2.0, &SolverConfig::default()).unwrap();

        assert!(result.status.is_converged());
        assert!((result.root - std::f64::consts::PI).abs() < 1e-4);
    }

    #[test]
    fn test_zero_derivative_error() {
        let f = |x: f64| x * x * x - 1.0;
        let df = |x: f64| 3.0 * x * x;

        let result = newton_raphson(f, df, 0.0, &SolverConfig::default());

        assert!(matches!(result, Err(RootError::SingularDerivative { .. })));
    }

    #[test]
    fn test_non_finite_guess_rejected() {
        let f = |x: f64| x * x - 2.0;
        let df = |x: f64| 2.0 * x;

        let result = newton_raphson(f, df, f64::NAN, &SolverConfig::default());

        assert!(matches!(result, Err(RootError::InvalidInput { .. })));
    }
}
