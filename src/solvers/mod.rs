//! Scalar root-finding algorithms.
//!
//! This module provides the scalar solvers and the interval scanner:
//!
//! - [`brent`]: robust bracketing, combining bisection, secant, and inverse
//!   quadratic interpolation
//! - [`ridders`]: bracketing with exponential three-point extrapolation
//! - [`bisection`]: simple and reliable bracketing
//! - [`regula_falsi`]: bracketing along the secant line
//! - [`secant`]: derivative-free open method
//! - [`newton_raphson`] / [`halley`]: derivative-driven open methods
//! - [`hybrid`]: Newton-Raphson with Brent fallback
//! - [`find_zeros`]: multi-root scanner over an interval
//!
//! # Choosing a Solver
//!
//! | Solver | Speed | Reliability | Requires |
//! |--------|-------|-------------|----------|
//! | Brent-Dekker | Fast (superlinear) | Guaranteed | Bracket |
//! | Ridders | Fast (superlinear) | Guaranteed | Bracket |
//! | Bisection | Slow (linear) | Guaranteed | Bracket |
//! | Regula falsi | Usually fast | Bracket kept, may stagnate | Bracket |
//! | Secant | Fast (order ~1.6) | May diverge | Two guesses |
//! | Newton-Raphson | Fastest (quadratic) | May diverge | Derivative |
//! | Halley | Cubic | May diverge | Two derivatives |
//! | Hybrid | Fast | Guaranteed* | Initial guess |
//!
//! *When bounds are provided or a bracket can be found automatically.
//!
//! Budget exhaustion is reported through
//! [`ConvergenceStatus::MaxIterReached`](crate::report::ConvergenceStatus)
//! on an `Ok` result; the `Err` arm is reserved for structural failures
//! such as an invalid bracket or a singular derivative.

mod bisection;
mod brent;
mod halley;
mod hybrid;
mod newton;
mod regula_falsi;
mod ridders;
mod scan;
mod secant;

pub use bisection::bisection;
pub use brent::brent;
pub use halley::{halley, halley_numerical};
pub use hybrid::{find_bracket, hybrid, hybrid_numerical};
pub use newton::{newton_raphson, newton_raphson_numerical};
pub use regula_falsi::regula_falsi;
pub use ridders::ridders;
pub use scan::{find_zeros, ScanConfig, DEFAULT_SUBDIVISIONS};
pub use secant::secant;

use crate::config::SolverConfig;
use crate::error::RootResult;
use crate::report::ConvergenceResult;

/// Floor below which a derivative (or denominator) is treated as singular.
pub(crate) const SINGULARITY_FLOOR: f64 = 1e-15;

/// Trait for scalar root-finding solvers selected at runtime.
///
/// Every method also exists as a free function; this trait is the
/// object-style entry point when the method is chosen dynamically.
///
/// # Example
///
/// ```rust
/// use resolvent::solvers::{NewtonSolver, Solver};
/// use resolvent::config::SolverConfig;
///
/// let solver = NewtonSolver;
/// let f = |x: f64| x * x - 2.0;
/// let df = |x: f64| 2.0 * x;
///
/// let result = solver
///     .solve(f, Some(df), 1.5, None, &SolverConfig::default())
///     .unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub trait Solver: Send + Sync {
    /// Solves for a root of `f`.
    ///
    /// * `derivative` - optional analytic derivative, used where the method
    ///   can exploit it; methods that cannot ignore it
    /// * `initial_guess` - starting point (seed for bracket defaults)
    /// * `bounds` - bracketing interval for the bracketing methods
    fn solve<F, D>(
        &self,
        f: F,
        derivative: Option<D>,
        initial_guess: f64,
        bounds: Option<(f64, f64)>,
        config: &SolverConfig,
    ) -> RootResult<ConvergenceResult<f64>>
    where
        F: Fn(f64) -> f64,
        D: Fn(f64) -> f64;

    /// Returns the name of the solver.
    fn name(&self) -> &'static str;
}

/// Newton-Raphson solver implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewtonSolver;

impl Solver for NewtonSolver {
    fn solve<F, D>(
        &self,
        f: F,
        derivative: Option<D>,
        initial_guess: f64,
        _bounds: Option<(f64, f64)>,
        config: &SolverConfig,
    ) -> RootResult<ConvergenceResult<f64>>
    where
        F: Fn(f64) -> f64,
        D: Fn(f64) -> f64,
    {
        match derivative {
            Some(df) => newton_raphson(f, df, initial_guess, config),
            None => newton_raphson_numerical(f, initial_guess, config),
        }
    }

    fn name(&self) -> &'static str {
        "Newton-Raphson"
    }
}

/// Halley solver implementation.
///
/// The second derivative is always approximated numerically; supply an
/// analytic first derivative through `derivative` when available.
#[derive(Debug, Clone, Copy, Default)]
pub struct HalleySolver;

impl Solver for HalleySolver {
    fn solve<F, D>(
        &self,
        f: F,
        derivative: Option<D>,
        initial_guess: f64,
        _bounds: Option<(f64, f64)>,
        config: &SolverConfig,
    ) -> RootResult<ConvergenceResult<f64>>
    where
        F: Fn(f64) -> f64,
        D: Fn(f64) -> f64,
    {
        match derivative {
            Some(df) => {
                let h2 = config.step_size.sqrt();
                let d2f = |x: f64| (f(x + h2) - 2.0 * f(x) + f(x - h2)) / (h2 * h2);
                halley(&f, df, d2f, initial_guess, config)
            }
            None => halley_numerical(f, initial_guess, config),
        }
    }

    fn name(&self) -> &'static str {
        "Halley"
    }
}

/// Brent-Dekker solver implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrentSolver;

impl Solver for BrentSolver {
    fn solve<F, D>(
        &self,
        f: F,
        _derivative: Option<D>,
        initial_guess: f64,
        bounds: Option<(f64, f64)>,
        config: &SolverConfig,
    ) -> RootResult<ConvergenceResult<f64>>
    where
        F: Fn(f64) -> f64,
        D: Fn(f64) -> f64,
    {
        let (a, b) = bounds.unwrap_or((initial_guess - 1.0, initial_guess + 1.0));
        brent(f, a, b, config)
    }

    fn name(&self) -> &'static str {
        "Brent-Dekker"
    }
}

/// Ridders solver implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiddersSolver;

impl Solver for RiddersSolver {
    fn solve<F, D>(
        &self,
        f: F,
        _derivative: Option<D>,
        initial_guess: f64,
        bounds: Option<(f64, f64)>,
        config: &SolverConfig,
    ) -> RootResult<ConvergenceResult<f64>>
    where
        F: Fn(f64) -> f64,
        D: Fn(f64) -> f64,
    {
        let (a, b) = bounds.unwrap_or((initial_guess - 1.0, initial_guess + 1.0));
        ridders(f, a, b, config)
    }

    fn name(&self) -> &'static str {
        "Ridders"
    }
}

/// Bisection solver implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct BisectionSolver;

impl Solver for BisectionSolver {
    fn solve<F, D>(
        &self,
        f: F,
        _derivative: Option<D>,
        initial_guess: f64,
        bounds: Option<(f64, f64)>,
        config: &SolverConfig,
    ) -> RootResult<ConvergenceResult<f64>>
    where
        F: Fn(f64) -> f64,
        D: Fn(f64) -> f64,
    {
        let (a, b) = bounds.unwrap_or((initial_guess - 1.0, initial_guess + 1.0));
        bisection(f, a, b, config)
    }

    fn name(&self) -> &'static str {
        "Bisection"
    }
}

/// Regula falsi solver implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegulaFalsiSolver;

impl Solver for RegulaFalsiSolver {
    fn solve<F, D>(
        &self,
        f: F,
        _derivative: Option<D>,
        initial_guess: f64,
        bounds: Option<(f64, f64)>,
        config: &SolverConfig,
    ) -> RootResult<ConvergenceResult<f64>>
    where
        F: Fn(f64) -> f64,
        D: Fn(f64) -> f64,
    {
        let (a, b) = bounds.unwrap_or((initial_guess - 1.0, initial_guess + 1.0));
        regula_falsi(f, a, b, config)
    }

    fn name(&self) -> &'static str {
        "Regula falsi"
    }
}

/// Secant solver implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecantSolver;

impl Solver for SecantSolver {
    fn solve<F, D>(
        &self,
        f: F,
        _derivative: Option<D>,
        initial_guess: f64,
        bounds: Option<(f64, f64)>,
        config: &SolverConfig,
    ) -> RootResult<ConvergenceResult<f64>>
    where
        F: Fn(f64) -> f64,
        D: Fn(f64) -> f64,
    {
        let (x0, x1) = bounds.unwrap_or((initial_guess - 0.1, initial_guess + 0.1));
        secant(f, x0, x1, config)
    }

    fn name(&self) -> &'static str {
        "Secant"
    }
}

/// Hybrid solver implementation (Newton with Brent fallback).
#[derive(Debug, Clone, Copy, Default)]
pub struct HybridSolver;

impl Solver for HybridSolver {
    fn solve<F, D>(
        &self,
        f: F,
        derivative: Option<D>,
        initial_guess: f64,
        bounds: Option<(f64, f64)>,
        config: &SolverConfig,
    ) -> RootResult<ConvergenceResult<f64>>
    where
        F: Fn(f64) -> f64,
        D: Fn(f64) -> f64,
    {
        match derivative {
            Some(df) => hybrid(f, df, initial_guess, bounds, config),
            None => hybrid_numerical(f, initial_guess, bounds, config),
        }
    }

    fn name(&self) -> &'static str {
        "Hybrid (Newton + Brent)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_solver_trait_newton() {
        let solver = NewtonSolver;
        let f = |x: f64| x * x - 2.0;
        let df = |x: f64| 2.0 * x;

        let result = solver
            .solve(f, Some(df), 1.5, None, &SolverConfig::default())
            .unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-10);
        assert_eq!(solver.name(), "Newton-Raphson");
    }

    #[test]
    fn test_solver_trait_bracketing_methods_agree() {
        let f = |x: f64| x * x * x - x - 2.0;
        let no_deriv: Option<fn(f64) -> f64> = None;
        let config = SolverConfig::default();
        let bounds = Some((1.0, 2.0));

        let brent_root = BrentSolver
            .solve(f, no_deriv, 1.5, bounds, &config)
            .unwrap()
            .root;
        let ridders_root = RiddersSolver
            .solve(f, no_deriv, 1.5, bounds, &config)
            .unwrap()
            .root;
        let bisection_root = BisectionSolver
            .solve(f, no_deriv, 1.5, bounds, &config)
            .unwrap()
            .root;
        let falsi_root = RegulaFalsiSolver
            .solve(f, no_deriv, 1.5, bounds, &config)
            .unwrap()
            .root;

        assert_relative_eq!(brent_root, ridders_root, epsilon = 1e-8);
        assert_relative_eq!(brent_root, bisection_root, epsilon = 1e-8);
        assert_relative_eq!(brent_root, falsi_root, epsilon = 1e-8);
    }

    #[test]
    fn test_solver_trait_halley() {
        let solver = HalleySolver;
        let f = |x: f64| x * x - 2.0;
        let df = |x: f64| 2.0 * x;

        let result = solver
            .solve(f, Some(df), 1.5, None, &SolverConfig::default())
            .unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-8);
    }

    #[test]
    fn test_solver_trait_hybrid_without_derivative() {
        let solver = HybridSolver;
        let f = |x: f64| x * x * x - x - 2.0;
        let no_deriv: Option<fn(f64) -> f64> = None;

        let result = solver
            .solve(f, no_deriv, 1.5, Some((1.0, 2.0)), &SolverConfig::default())
            .unwrap();

        assert!(f(result.root).abs() < 1e-9);
    }
}
