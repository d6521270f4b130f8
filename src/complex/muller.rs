//! Muller's root-finding algorithm.

use num_complex::Complex64;

use crate::config::SolverConfig;
use crate::error::{RootError, RootResult};
use crate::report::ConvergenceResult;

/// Muller's root-finding algorithm.
///
/// Fits a parabola through the three most recent estimates via divided
/// differences, solves the resulting quadratic, and takes the quadratic
/// root closer to the latest estimate — implemented by choosing the
/// larger-magnitude denominator of the two equivalent quadratic-formula
/// forms, which both avoids near-zero division and damps runaway steps.
///
/// The three starting points must be pairwise distinct but need not
/// bracket anything or be collinear. There is no sign condition: the
/// iteration may converge to any complex root, including one far from all
/// three seeds when the parabola extrapolates poorly. That is inherent to
/// the method, not an error.
///
/// # Example
///
/// ```rust
/// use num_complex::Complex64;
/// use resolvent::complex::muller;
/// use resolvent::config::SolverConfig;
///
/// // z^2 + 1 has roots at +-i.
/// let f = |z: Complex64| z * z + 1.0;
///
/// let result = muller(
///     f,
///     Complex64::new(0.5, 0.0),
///     Complex64::new(1.0, 0.0),
///     Complex64::new(1.5, 0.5),
///     &SolverConfig::default(),
/// )
/// .unwrap();
/// assert!((result.root - Complex64::new(0.0, 1.0)).norm() < 1e-10);
/// ```
pub fn muller<F>(
    f: F,
    x0: Complex64,
    x1: Complex64,
    x2: Complex64,
    config: &SolverConfig,
) -> RootResult<ConvergenceResult<Complex64>>
where
    F: Fn(Complex64) -> Complex64,
{
    config.validate()?;
    if x0 == x1 || x1 == x2 || x0 == x2 {
        return Err(RootError::invalid_input(
            "Muller starting points must be pairwise distinct",
        ));
    }

    let mut x0 = x0;
    let mut x1 = x1;
    let mut x2 = x2;
    let mut f0 = f(x0);
    let mut f1 = f(x1);
    let mut f2 = f(x2);
    let mut last_step = 0.0;

    for iteration in 0..config.max_iterations {
        if f2.norm() <= config.tolerance {
            return Ok(ConvergenceResult::converged(x2, f2, iteration, last_step));
        }

        // Divided differences of the interpolating parabola.
        let h1 = x1 - x0;
        let h2 = x2 - x1;
        if h1.norm() == 0.0 || h2.norm() == 0.0 || (h1 + h2).norm() == 0.0 {
            return Err(RootError::invalid_input(
                "Muller iterates collapsed onto each other",
            ));
        }
        let d1 = (f1 - f0) / h1;
        let d2 = (f2 - f1) / h2;
        let a = (d2 - d1) / (h2 + h1);
        let b = a * h2 + d2;
        let c = f2;

        // Of the two quadratic-formula denominators, the larger in
        // magnitude selects the root closer to x2.
        let disc = (b * b - 4.0 * a * c).sqrt();
        let den_plus = b + disc;
        let den_minus = b - disc;
        let den = if den_plus.norm() >= den_minus.norm() {
            den_plus
        } else {
            den_minus
        };
        if den.norm() < 1e-300 {
            return Err(RootError::invalid_input(
                "Muller quadratic degenerated to a constant",
            ));
        }

        let dx = (-2.0 * c) / den;
        let x3 = x2 + dx;
        last_step = dx.norm();

        if last_step <= config.tolerance {
            let f3 = f(x3);
            return Ok(ConvergenceResult::converged(x3, f3, iteration + 1, last_step));
        }

        x0 = x1;
        x1 = x2;
        x2 = x3;
        f0 = f1;
        f1 = f2;
        f2 = f(x2);
    }

    Ok(ConvergenceResult::max_iter(
        x2,
        f2,
        config.max_iterations,
        last_step,
    ))
}
