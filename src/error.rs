//! Error types for root-finding operations.

use thiserror::Error;

/// A specialized Result type for root-finding operations.
pub type RootResult<T> = Result<T, RootError>;

/// Errors that can occur during root-finding.
///
/// Budget exhaustion is deliberately absent: running out of iterations is a
/// recoverable condition reported through
/// [`ConvergenceStatus::MaxIterReached`](crate::report::ConvergenceStatus)
/// on an `Ok` result, so the best estimate always reaches the caller.
#[derive(Error, Debug, Clone)]
pub enum RootError {
    /// Bracketing precondition violated: the function does not change sign
    /// over the supplied interval.
    #[error("invalid bracket: f({a}) = {fa:.2e} and f({b}) = {fb:.2e} have the same sign")]
    InvalidBracket {
        /// Lower bound of the bracket.
        a: f64,
        /// Upper bound of the bracket.
        b: f64,
        /// Function value at `a`.
        fa: f64,
        /// Function value at `b`.
        fb: f64,
    },

    /// Derivative magnitude fell below the singularity floor, so the next
    /// step cannot be computed meaningfully.
    #[error("derivative {value:.2e} at x = {x} is below the singularity floor")]
    SingularDerivative {
        /// Point at which the derivative degenerated.
        x: f64,
        /// The near-zero derivative value.
        value: f64,
    },

    /// A matrix handed to the linear-algebra leaf is numerically singular.
    #[error("singular matrix: elimination hit a negligible pivot")]
    SingularMatrix,

    /// The Jacobian of a nonlinear system is numerically singular.
    #[error("singular Jacobian: the Newton step cannot be computed")]
    SingularJacobian,

    /// Matrix or vector dimensions are incompatible.
    #[error("incompatible dimensions: ({rows1}x{cols1}) and ({rows2}x{cols2})")]
    DimensionMismatch {
        /// Rows of the first operand.
        rows1: usize,
        /// Columns of the first operand.
        cols1: usize,
        /// Rows of the second operand.
        rows2: usize,
        /// Columns of the second operand.
        cols2: usize,
    },

    /// Invalid input or configuration.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl RootError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates a singular-derivative error.
    #[must_use]
    pub fn singular_derivative(x: f64, value: f64) -> Self {
        Self::SingularDerivative { x, value }
    }
}
