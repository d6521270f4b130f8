//! Hybrid root-finding algorithm.
//!
//! Combines Newton-Raphson with Brent-Dekker for robust convergence.

use crate::config::SolverConfig;
use crate::error::{RootError, RootResult};
use crate::report::ConvergenceResult;
use crate::solvers::{brent, SINGULARITY_FLOOR};

/// Hybrid root-finding algorithm.
///
/// Starts with Newton-Raphson for fast quadratic convergence, but falls
/// back to Brent-Dekker when Newton diverges, stalls, or hits a singular
/// derivative. The fallback runs over the supplied `bounds`, or over a
/// bracket discovered by [`find_bracket`] when none are given.
///
/// # Example
///
/// ```rust
/// use resolvent::solvers::hybrid;
/// use resolvent::config::SolverConfig;
///
/// let f = |x: f64| x * x * x - x - 2.0;
/// let df = |x: f64| 3.0 * x * x - 1.0;
///
/// let result = hybrid(f, df, 1.5, Some((1.0, 2.0)), &SolverConfig::default()).unwrap();
/// assert!(f(result.root).abs() < 1e-10);
/// ```
pub fn hybrid<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    bounds: Option<(f64, f64)>,
    config: &SolverConfig,
) -> RootResult<ConvergenceResult<f64>>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    config.validate()?;

    match newton_with_monitoring(&f, &df, initial_guess, config) {
        Ok(result) if result.status.is_converged() => Ok(result),
        _ => {
            if let Some((a, b)) = bounds {
                brent(&f, a, b, config)
            } else {
                match find_bracket(&f, initial_guess) {
                    Some((a, b)) => brent(&f, a, b, config),
                    None => Err(RootError::invalid_input(
                        "Newton-Raphson failed and no bracketing interval could be found",
                    )),
                }
            }
        }
    }
}

/// Hybrid solver with a central finite-difference derivative.
pub fn hybrid_numerical<F>(
    f: F,
    initial_guess: f64,
    bounds: Option<(f64, f64)>,
    config: &SolverConfig,
) -> RootResult<ConvergenceResult<f64>>
where
    F: Fn(f64) -> f64,
{
    let h = config.step_size;
    let df = |x: f64| (f(x + h) - f(x - h)) / (2.0 * h);

    hybrid(&f, df, initial_guess, bounds, config)
}

/// Newton-Raphson with divergence detection, used as the fast path.
///
/// Fails fast (so the caller can fall back) when the residual grows for
/// several consecutive steps, the step explodes, or the derivative
/// degenerates.
fn newton_with_monitoring<F, DF>(
    f: &F,
    df: &DF,
    initial_guess: f64,
    config: &SolverConfig,
) -> RootResult<ConvergenceResult<f64>>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    const MAX_DIVERGENCE: u32 = 3;

    let mut x = initial_guess;
    let mut prev_residual = f64::MAX;
    let mut divergence_count = 0;
    let mut last_step = 0.0;

    // Fail fast in hybrid mode: the fallback picks up the slack.
    let newton_max_iter = config.max_iterations.min(20);

    for iteration in 0..newton_max_iter {
        let fx = f(x);
        let residual = fx.abs();

        if residual <= config.tolerance {
            return Ok(ConvergenceResult::converged(x, fx, iteration, last_step));
        }

        if residual > prev_residual * 2.0 {
            divergence_count += 1;
            if divergence_count >= MAX_DIVERGENCE {
                return Err(RootError::invalid_input("Newton-Raphson diverging"));
            }
        } else {
            divergence_count = 0;
        }
        prev_residual = residual;

        let dfx = df(x);
        if dfx.abs() < SINGULARITY_FLOOR {
            return Err(RootError::singular_derivative(x, dfx));
        }

        let step = fx / dfx;
        if step.abs() > 1e10 {
            return Err(RootError::invalid_input("Newton step too large"));
        }

        x -= step;
        last_step = step.abs();

        if !x.is_finite() {
            return Err(RootError::invalid_input(
                "Newton produced a non-finite value",
            ));
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
    Ok(ConvergenceResult::max_iter(x, fx, newton_max_iter, last_step))
}

/// Attempts to find a bracketing interval around an initial guess.
///
/// Expands exponentially outward and returns the first window whose
/// endpoints straddle a sign change, or `None` when the search runs out.
pub fn find_bracket<F>(f: &F, initial_guess: f64) -> Option<(f64, f64)>
where
    F: Fn(f64) -> f64,
{
    let mut left = initial_guess;
    let mut right = initial_guess;
    let mut delta = 0.1;

    // An initial guess at or near zero gives the expansion nothing to
    // scale from.
    if initial_guess.abs() < 1e-10 {
        left = -1.0;
        right = 1.0;
    }

    let f_init = f(initial_guess);

    for _ in 0..50 {
        left -= delta;
        right += delta;

        let f_left = f(left);
        let f_right = f(right);

        if f_left * f_init < 0.0 {
            return Some((left, initial_guess));
        }
        if f_right * f_init < 0.0 {
            return Some((initial_guess, right));
        }
        if f_left * f_right < 0.0 {
            return Some((left, right));
        }

        delta *= 2.0;
        if delta > 1e6 {
            break;
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sqrt_2() {
        let f = |x: f64| x * x - 2.0;
        let df = |x: f64| 2.0 * x;

        let result = hybrid(f, df, 1.5, Some((1.0, 2.0)), &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-10);
    }

    #[test]
    fn test_fallback_to_brent() {
        // A hostile starting point sends Newton toward a flat region; the
        // bracket keeps the hybrid honest.
        let f = |x: f64| x.tanh();
        let df = |x: f64| 1.0 - x.tanh() * x.tanh();

        let result = hybrid(f, df, 20.0, Some((-1.0, 5.0)), &SolverConfig::default()).unwrap();

        assert!(result.root.abs() < 1e-8);
    }

    #[test]
    fn test_bracket_discovery() {
        let f = |x: f64| x * x * x - 2.0 * x - 5.0;

        let bracket = find_bracket(&f, 1.0).expect("cubic has a sign change");
        let (a, b) = bracket;
        assert!(f(a) * f(b) < 0.0);
    }

    #[test]
    fn test_no_bracket_for_positive_function() {
        let f = |x: f64| x * x + 1.0;

        assert!(find_bracket(&f, 0.0).is_none());
    }

    #[test]
    fn test_numerical_variant() {
        let f = |x: f64| x * x * x - x - 2.0;

        let result = hybrid_numerical(f, 1.5, Some((1.0, 2.0)), &SolverConfig::default()).unwrap();

        assert!(f(result.root).abs() < 1e-9);
    }
}
