//! Solver configuration.

use crate::error::{RootError, RootResult};

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Default step size for finite-difference derivatives and Jacobians.
pub const DEFAULT_STEP_SIZE: f64 = 1e-8;

/// Configuration shared by all solvers.
///
/// The default tolerance is deliberately strict; loosen it explicitly when a
/// problem warrants it rather than relying on a weak default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Tolerance for convergence (residual magnitude or step size).
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
    /// Step size for finite-difference derivative approximation.
    pub step_size: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            step_size: DEFAULT_STEP_SIZE,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
            step_size: DEFAULT_STEP_SIZE,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the finite-difference step size.
    #[must_use]
    pub fn with_step_size(mut self, step_size: f64) -> Self {
        self.step_size = step_size;
        self
    }

    /// Checks the configuration at solver entry.
    ///
    /// Every solver calls this before iterating, so a non-positive tolerance
    /// or an empty iteration budget fails fast instead of looping.
    pub fn validate(&self) -> RootResult<()> {
        if !(self.tolerance > 0.0 && self.tolerance.is_finite()) {
            return Err(RootError::invalid_input(format!(
                "tolerance must be positive and finite, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(RootError::invalid_input("max_iterations must be positive"));
        }
        if !(self.step_size > 0.0 && self.step_size.is_finite()) {
            return Err(RootError::invalid_input(format!(
                "step_size must be positive and finite, got {}",
                self.step_size
            )));
        }
        Ok(())
    }
}
