//! Bisection root-finding algorithm.

use crate::bracket::{Bracket, Interval};
use crate::config::SolverConfig;
use crate::error::RootResult;
use crate::report::ConvergenceResult;

/// Bisection root-finding algorithm.
///
/// A simple and reliable bracketing method that repeatedly halves the
/// interval and keeps the half containing the sign change. Convergence is
/// linear but guaranteed for any valid bracket.
///
/// Requires: `f(a)` and `f(b)` of opposite sign, else fails with
/// [`InvalidBracket`](crate::error::RootError::InvalidBracket). On success
/// the root lies in `[a, b]` and satisfies `|f(root)| <= tol` or a final
/// bracket half-width `<= tol`. Exhausting the budget returns the bracket
/// midpoint with a `MaxIterReached` status.
///
/// # Example
///
/// ```rust
/// use resolvent::solvers::bisection;
/// use resolvent::config::SolverConfig;
///
/// let f = |x: f64| x * x - 2.0;
///
/// let result = bisection(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-9);
/// ```
pub fn bisection<F>(
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

    let mut lo = bracket.interval().low();
    let mut hi = bracket.interval().high();
    let mut f_lo = bracket.f_low();
    let f_hi = bracket.f_high();

    // Endpoint already at a root.
    if f_lo.abs() <= config.tolerance {
        return Ok(ConvergenceResult::converged(lo, f_lo, 0, 0.0));
    }
    if f_hi.abs() <= config.tolerance {
        return Ok(ConvergenceResult::converged(hi, f_hi, 0, 0.0));
    }

    for iteration in 0..config.max_iterations {
        let mid = lo + (hi - lo) / 2.0;
        let f_mid = f(mid);

        if f_mid.abs() <= config.tolerance || (hi - lo) / 2.0 <= config.tolerance {
            return Ok(ConvergenceResult::converged(
                mid,
                f_mid,
                iteration + 1,
                (hi - lo) / 2.0,
            ));
        }

        if f_lo * f_mid < 0.0 {
            hi = mid;
        } else {
            lo = mid;
            f_lo = f_mid;
        }
    }

    let mid = lo + (hi - lo) / 2.0;
    let f_mid = f(mid);
    Ok(ConvergenceResult::max_iter(
        mid,
        f_mid,
        config.max_iterations,
        (hi - lo) / 2.0,
    ))
}
