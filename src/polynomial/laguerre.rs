//! Laguerre's root-finding algorithm.

use num_complex::Complex64;

use crate::config::SolverConfig;
use crate::error::{RootError, RootResult};
use crate::polynomial::{deflate, eval_with_derivatives, Polynomial};
use crate::report::ConvergenceResult;

/// Laguerre's root-finding algorithm for one polynomial root.
///
/// Iterates in the complex plane using the polynomial's first and second
/// derivative values at the current estimate:
///
/// `x - n / (G +- sqrt((n-1)(n H - G^2)))`, `G = p'/p`, `H = G^2 - p''/p`
///
/// Of the two candidate denominators the one with larger magnitude is
/// chosen, which keeps the division away from zero and maximizes
/// stability. Local convergence is cubic. The arithmetic is complex even
/// for a real seed, so a real starting point may converge to a complex
/// root; the result is always typed `Complex64`. Point different seeds at
/// the polynomial to target specific roots, or use [`laguerre_roots`] to
/// enumerate all of them.
///
/// # Example
///
/// ```rust
/// use num_complex::Complex64;
/// use resolvent::polynomial::{laguerre, Polynomial};
/// use resolvent::config::SolverConfig;
///
/// // x^2 + 4 from a real seed converges to +-2i.
/// let p = Polynomial::new(&[1.0, 0.0, 4.0]).unwrap();
///
/// let result = laguerre(&p, Complex64::new(1.0, 1.0), &SolverConfig::default()).unwrap();
/// assert!((result.root.im.abs() - 2.0).abs() < 1e-9);
/// ```
pub fn laguerre(
    poly: &Polynomial,
    seed: Complex64,
    config: &SolverConfig,
) -> RootResult<ConvergenceResult<Complex64>> {
    config.validate()?;
    if poly.degree() == 0 {
        return Err(RootError::invalid_input(
            "constant polynomial has no roots to iterate toward",
        ));
    }
    laguerre_on(&poly.complex_coeffs(), seed, config)
}

/// Laguerre iteration over an explicit (possibly deflated) coefficient
/// sequence.
fn laguerre_on(
    coeffs: &[Complex64],
    seed: Complex64,
    config: &SolverConfig,
) -> RootResult<ConvergenceResult<Complex64>> {
    let n = (coeffs.len() - 1) as f64;
    let mut x = seed;
    let mut last_step = 0.0;

    for iteration in 0..config.max_iterations {
        let (p, dp, d2p) = eval_with_derivatives(coeffs, x);

        if p.norm() <= config.tolerance {
            return Ok(ConvergenceResult::converged(x, p, iteration, last_step));
        }

        let g = dp / p;
        let h = g * g - d2p / p;
        let disc = ((h * n - g * g) * (n - 1.0)).sqrt();

        let den_plus = g + disc;
        let den_minus = g - disc;
        let den = if den_plus.norm() >= den_minus.norm() {
            den_plus
        } else {
            den_minus
        };
        if den.norm() < 1e-300 {
            return Err(RootError::invalid_input(
                "both Laguerre denominators are negligible; derivative information degenerated",
            ));
        }

        let step = Complex64::new(n, 0.0) / den;
        x -= step;
        last_step = step.norm();

        if last_step <= config.tolerance {
            let (p, _, _) = eval_with_derivatives(coeffs, x);
            return Ok(ConvergenceResult::converged(x, p, iteration + 1, last_step));
        }
    }

    let (p, _, _) = eval_with_derivatives(coeffs, x);
    Ok(ConvergenceResult::max_iter(
        x,
        p,
        config.max_iterations,
        last_step,
    ))
}

/// Enumerates all roots of a polynomial by repeated Laguerre iteration
/// with deflation.
///
/// Each root found is polished against the original polynomial before the
/// working polynomial is divided down, so deflation error does not
/// accumulate into later roots. Returns exactly `degree` roots (with
/// multiplicity; a double root appears twice), in discovery order.
pub fn laguerre_roots(poly: &Polynomial, config: &SolverConfig) -> RootResult<Vec<Complex64>> {
    config.validate()?;

    let original = poly.complex_coeffs();
    let mut work = original.clone();
    let mut roots = Vec::with_capacity(poly.degree());
    let seed = Complex64::new(0.0, 0.0);

    while work.len() > 2 {
        let rough = laguerre_on(&work, seed, config)?;
        let polished = laguerre_on(&original, rough.root, config)?;
        roots.push(polished.root);
        work = deflate(&work, polished.root);
    }

    if work.len() == 2 {
        // Remaining linear factor: c0 z + c1 = 0.
        roots.push(-work[1] / work[0]);
    }

    Ok(roots)
}
