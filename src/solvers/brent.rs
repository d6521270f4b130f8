//! Brent-Dekker root-finding algorithm.

use crate::bracket::{Bracket, Interval};
use crate::config::SolverConfig;
use crate::error::RootResult;
use crate::report::ConvergenceResult;

/// Brent-Dekker root-finding algorithm.
///
/// Maintains three points and alternates inverse quadratic interpolation,
/// secant interpolation, and bisection. An interpolated step is accepted
/// only if it stays strictly inside the current bracket and makes adequate
/// progress relative to the previous step (halving criterion); otherwise the
/// iteration falls back to bisection. This keeps bisection's convergence
/// guarantee while reaching superlinear speed when interpolation behaves.
///
/// Requires: `f(a)` and `f(b)` of opposite sign. Exhausting the budget is
/// not a failure: the result carries the best estimate with a
/// `MaxIterReached` status, and the estimate never leaves `[a, b]`.
///
/// # Example
///
/// ```rust
/// use resolvent::solvers::brent;
/// use resolvent::config::SolverConfig;
///
/// // Find root of x^3 - x - 2
/// let f = |x: f64| x * x * x - x - 2.0;
///
/// let result = brent(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!(f(result.root).abs() < 1e-10);
/// ```
pub fn brent<F>(f: F, a: f64, b: f64, config: &SolverConfig) -> RootResult<ConvergenceResult<f64>>
where
    F: Fn(f64) -> f64,
{
    config.validate()?;
    let bracket = Bracket::new(&f, Interval::ordered(a, b)?)?;

    let mut a = bracket.interval().low();
    let mut b = bracket.interval().high();
    let mut fa = bracket.f_low();
    let mut fb = bracket.f_high();

    // Keep b the best estimate: |f(a)| >= |f(b)|.
    if fa.abs() < fb.abs() {
        std::mem::swap(&mut a, &mut b);
        std::mem::swap(&mut fa, &mut fb);
    }

    let mut c = a;
    let mut fc = fa;
    let mut d = b - a;
    let mut e = d;

    for iteration in 0..config.max_iterations {
        if fb.abs() <= config.tolerance || (b - a).abs() <= config.tolerance {
            return Ok(ConvergenceResult::converged(
                b,
                fb,
                iteration,
                (b - a).abs(),
            ));
        }

        let mut use_bisection = true;
        let mut s = 0.0;

        if (fa - fc).abs() > 1e-15 && (fb - fc).abs() > 1e-15 {
            // Inverse quadratic interpolation through (a, b, c).
            let r = fb / fc;
            let p = fa / fc;
            let q = fa / fb;

            s = b
                - (q * (q - r) * (b - a) + (1.0 - r) * (b - c) * p)
                    / ((q - 1.0) * (r - 1.0) * (p - 1.0));

            let m = (a + b) / 2.0;
            if s > m.min(b) && s < m.max(b) && (s - b).abs() < e.abs() / 2.0 {
                use_bisection = false;
            }
        } else if (fb - fa).abs() > 1e-15 {
            // Secant step.
            s = b - fb * (b - a) / (fb - fa);

            let m = (a + b) / 2.0;
            if s > m.min(b) && s < m.max(b) && (s - b).abs() < e.abs() / 2.0 {
                use_bisection = false;
            }
        }

        if use_bisection {
            s = (a + b) / 2.0;
            e = b - a;
            d = e;
        } else {
            e = d;
            d = s - b;
        }

        c = b;
        fc = fb;

        let fs = f(s);

        if fa * fs < 0.0 {
            b = s;
            fb = fs;
        } else {
            a = s;
            fa = fs;
        }

        if fa.abs() < fb.abs() {
            std::mem::swap(&mut a, &mut b);
            std::mem::swap(&mut fa, &mut fb);
        }
    }

    Ok(ConvergenceResult::max_iter(
        b,
        fb,
        config.max_iterations,
        (b - a).abs(),
    ))
}
