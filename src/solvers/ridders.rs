//! Ridders' root-finding algorithm.

use crate::bracket::{Bracket, Interval};
use crate::config::SolverConfig;
use crate::error::RootResult;
use crate::report::ConvergenceResult;

/// Ridders' root-finding algorithm.
///
/// Each iteration evaluates the function at the bracket midpoint, then
/// applies an exponential correction built from the three points
/// (endpoints plus midpoint) to place the next estimate:
///
/// `x = m + (m - a) * sign(f(a) - f(b)) * f(m) / sqrt(f(m)^2 - f(a) * f(b))`
///
/// The corrected estimate always lands strictly inside the bracket, and the
/// subinterval containing the sign change becomes the new bracket.
/// Convergence is guaranteed for any valid bracket, typically in far fewer
/// iterations than bisection and competitive with Brent-Dekker.
///
/// # Example
///
/// ```rust
/// use resolvent::solvers::ridders;
/// use resolvent::config::SolverConfig;
///
/// let f = |x: f64| x * x - 2.0;
///
/// let result = ridders(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn ridders<F>(f: F, a: f64, b: f64, config: &SolverConfig) -> RootResult<ConvergenceResult<f64>>
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

    for iteration in 0..config.max_iterations {
        let m = a + (b - a) / 2.0;
        let fm = f(m);

        if fm.abs() <= config.tolerance {
            return Ok(ConvergenceResult::converged(
                m,
                fm,
                iteration + 1,
                (b - a) / 2.0,
            ));
        }

        // For a valid bracket fa * fb <= 0, so the discriminant is positive
        // whenever fm is not itself a root.
        let disc = fm * fm - fa * fb;
        if disc <= 0.0 {
            return Ok(ConvergenceResult::converged(
                m,
                fm,
                iteration + 1,
                (b - a) / 2.0,
            ));
        }

        let sign = if fa >= fb { 1.0 } else { -1.0 };
        let x = m + (m - a) * sign * fm / disc.sqrt();
        let fx = f(x);

        if fx.abs() <= config.tolerance {
            return Ok(ConvergenceResult::converged(
                x,
                fx,
                iteration + 1,
                (x - m).abs(),
            ));
        }

        // Keep the subinterval that still straddles the sign change.
        if fm * fx < 0.0 {
            if m < x {
                a = m;
                fa = fm;
                b = x;
                fb = fx;
            } else {
                a = x;
                fa = fx;
                b = m;
                fb = fm;
            }
        } else if fa * fx < 0.0 {
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
    }

    let m = a + (b - a) / 2.0;
    let fm = f(m);
    Ok(ConvergenceResult::max_iter(
        m,
        fm,
        config.max_iterations,
        (b - a) / 2.0,
    ))
}
