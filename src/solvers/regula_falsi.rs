//! Regula falsi (false position) root-finding algorithm.

use crate::bracket::{Bracket, Interval};
use crate::config::SolverConfig;
use crate::error::RootResult;
use crate::report::ConvergenceResult;

/// Regula falsi (false position) root-finding algorithm.
///
/// A hybrid that keeps bisection's bracket-narrowing guarantee while
/// stepping along the secant line through the bracket endpoints, which is
/// usually faster than halving. On strongly convex functions one endpoint
/// can stagnate, so the bracket width may never shrink below tolerance;
/// that case surfaces as a `MaxIterReached` status with the best estimate,
/// never as a silently wrong answer.
///
/// Requires: `f(a)` and `f(b)` of opposite sign.
pub fn regula_falsi<F>(
    f: F,
    a: f64,
    b: f64,
    config: &SolverConfig,
) -> RootResult<ConvergenceResult<f64>>
where
    F: Fn(f64) -> f64,
{
    config.validate()?;
    let bracket = Bracket::new(&f, Interval::ordered(a, b)?)?;

    let mut a = bracket.interval().low();
    let mut b = bracket.interval().high();
    let mut fa = bracket.f_low();
    let mut fb = bracket.f_high();

    if fa.abs() <= config.tolerance {
        return Ok(ConvergenceResult::converged(a, fa, 0, 0.0));
    }
    if fb.abs() <= config.tolerance {
        return Ok(ConvergenceResult::converged(b, fb, 0, 0.0));
    }

    let mut x = a;
    let mut fx = fa;
    let mut x_prev = a;

    for iteration in 0..config.max_iterations {
        // Secant intersection of the chord through the bracket endpoints.
        x = b - fb * (b - a) / (fb - fa);
        let step = (x - x_prev).abs();
        fx = f(x);

        if fx.abs() <= config.tolerance || step <= config.tolerance {
            return Ok(ConvergenceResult::converged(x, fx, iteration + 1, step));
        }

        if fa * fx < 0.0 {
            b = x;
            fb = fx;
        } else {
            a = x;
            fa = fx;
        }

        if (b - a).abs() <= config.tolerance {
            return Ok(ConvergenceResult::converged(
                x,
                fx,
                iteration + 1,
                (b - a).abs(),
            ));
        }

        x_prev = x;
    }

    Ok(ConvergenceResult::max_iter(
        x,
        fx,
        config.max_iterations,
        (b - a).abs(),
    ))
}
