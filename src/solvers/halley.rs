//! Halley's root-finding algorithm.

use crate::config::SolverConfig;
use crate::error::{RootError, RootResult};
use crate::report::ConvergenceResult;
use crate::solvers::SINGULARITY_FLOOR;

/// Halley's root-finding algorithm.
///
/// Extends Newton-Raphson with a second-order correction:
///
/// `x_{n+1} = x_n - 2 f f' / (2 f'^2 - f f'')`
///
/// Cubic convergence near a simple root at the cost of a second-derivative
/// evaluation per step. Like Newton, no bracket is required and a
/// near-zero first derivative fails with
/// [`SingularDerivative`](crate::error::RootError::SingularDerivative).
pub fn halley<F, DF, D2F>(
    f: F,
    df: DF,
    d2f: D2F,
    initial_guess: f64,
    config: &SolverConfig,
) -> RootResult<ConvergenceResult<f64>>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
    D2F: Fn(f64) -> f64,
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

        let d2fx = d2f(x);
        let denom = 2.0 * dfx * dfx - fx * d2fx;
        if denom.abs() < SINGULARITY_FLOOR {
            return Err(RootError::singular_derivative(x, denom));
        }

        let step = 2.0 * fx * dfx / denom;
        x -= step;
        last_step = step.abs();

        if !x.is_finite() {
            return Err(RootError::invalid_input(format!(
                "Halley iteration produced a non-finite estimate after {iteration} iterations"
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

/// Halley's method with finite-difference derivatives.
///
/// The first derivative uses a central difference with `config.step_size`;
/// the second derivative uses the second central difference with a wider
/// step (`sqrt(step_size)`) to keep cancellation error in check.
pub fn halley_numerical<F>(
    f: F,
    initial_guess: f64,
    config: &SolverConfig,
) -> RootResult<ConvergenceResult<f64>>
where
    F: Fn(f64) -> f64,
{
    let h = config.step_size;
    let h2 = config.step_size.sqrt();
    let df = |x: f64| (f(x + h) - f(x - h)) / (2.0 * h);
    let d2f = |x: f64| (f(x + h2) - 2.0 * f(x) + f(x - h2)) / (h2 * h2);

    halley(&f, df, d2f, initial_guess, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RootError;
    use approx::assert_relative_eq;

    #[test]
    fn test_cube_root() {
        let f = |x: f64| x * x * x - 27.0;
        let df = |x: f64| 3.0 * x * x;
        let d2f = |x: f64| 6.0 * x;

        let result = halley(f, df, d2f, 2.0, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, 3.0, epsilon = 1e-10);
    }

    #[test]
    fn test_fewer_iterations_than_newton() {
        let f = |x: f64| x.cos() - x * x * x;
        let df = |x: f64| -x.sin() - 3.0 * x * x;
        let d2f = |x: f64| -x.cos() - 6.0 * x;
        let config = SolverConfig::default();

        let halley_result = halley(f, df, d2f, 0.5, &config).unwrap();
        let newton_result = super::super::newton_raphson(f, df, 0.5, &config).unwrap();

        assert_relative_eq!(halley_result.root, newton_result.root, epsilon = 1e-9);
        assert!(halley_result.iterations <= newton_result.iterations);
    }

    #[test]
    fn test_numerical_derivatives() {
        let f = |x: f64| x * x - 2.0;

        let result = halley_numerical(f, 1.5, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-6);
    }

    #[test]
    fn test_zero_derivative_error() {
        let f = |_: f64| 2.0;
        let df = |_: f64| 0.0;
        let d2f = |_: f64| 0.0;

        let result = halley(f, df, d2f, 1.0, &SolverConfig::default());

        assert!(matches!(result, Err(RootError::SingularDerivative { .. })));
    }
}
