//! Root multiplicity refinement.

use num_complex::Complex64;

use crate::config::SolverConfig;
use crate::error::{RootError, RootResult};
use crate::polynomial::Polynomial;

/// Estimated multiplicity of a root candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Multiplicity {
    /// The candidate is a zero of the polynomial and its first `m - 1`
    /// derivatives but not of its `m`-th derivative.
    Estimated(u32),
    /// The candidate is not close enough to an actual root (or the
    /// derivative pattern is inconsistent), so no integer multiplicity can
    /// be asserted.
    Unreliable,
}

/// A root candidate with its estimated multiplicity and residual.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Root {
    /// The candidate value.
    pub value: Complex64,
    /// Estimated multiplicity; meaningful only after refinement.
    pub multiplicity: Multiplicity,
    /// `|p(value)|` at the candidate.
    pub residual: f64,
}

/// Estimates the integer multiplicity of a rough root candidate.
///
/// Counts how many successive derivatives of the polynomial vanish at the
/// candidate. The vanishing threshold is `sqrt(config.tolerance)` —
/// deliberately looser than the solver tolerance, because in
/// limited-precision arithmetic this heuristic is only trustworthy near
/// effectively-integer multiplicities.
///
/// This is a bounded, explicitly-uncertain refinement: when the candidate
/// is not within tolerance of a true root, the result is
/// [`Multiplicity::Unreliable`] and a warning is logged; a false integer
/// multiplicity is never asserted.
///
/// # Example
///
/// ```rust
/// use num_complex::Complex64;
/// use resolvent::polynomial::{refine_multiplicity, Multiplicity, Polynomial};
/// use resolvent::config::SolverConfig;
///
/// // (x - 1)^2 (x + 2)
/// let p = Polynomial::new(&[1.0, 0.0, -3.0, 2.0]).unwrap();
///
/// let root = refine_multiplicity(&p, Complex64::new(1.0, 0.0), &SolverConfig::default())
///     .unwrap();
/// assert_eq!(root.multiplicity, Multiplicity::Estimated(2));
/// ```
pub fn refine_multiplicity(
    poly: &Polynomial,
    candidate: Complex64,
    config: &SolverConfig,
) -> RootResult<Root> {
    config.validate()?;
    if !candidate.re.is_finite() || !candidate.im.is_finite() {
        return Err(RootError::invalid_input("root candidate must be finite"));
    }

    let near_tol = config.tolerance.sqrt();
    let residual = poly.eval_complex(candidate).norm();

    if residual > near_tol {
        log::warn!(
            "multiplicity refinement: candidate {candidate} has residual {residual:.2e}, \
             not within tolerance of a root; multiplicity is unreliable"
        );
        return Ok(Root {
            value: candidate,
            multiplicity: Multiplicity::Unreliable,
            residual,
        });
    }

    let degree = poly.degree() as u32;
    let mut current = poly.clone();
    let mut vanished = 0u32;
    while vanished <= degree {
        if current.eval_complex(candidate).norm() > near_tol {
            break;
        }
        vanished += 1;
        current = current.derivative();
    }

    // Every derivative up to the degree vanishing means the coefficients
    // themselves are near the threshold; nothing can be asserted.
    if vanished == 0 || vanished > degree {
        log::warn!(
            "multiplicity refinement: derivative pattern at {candidate} is inconsistent; \
             multiplicity is unreliable"
        );
        return Ok(Root {
            value: candidate,
            multiplicity: Multiplicity::Unreliable,
            residual,
        });
    }

    Ok(Root {
        value: candidate,
        multiplicity: Multiplicity::Estimated(vanished),
        residual,
    })
}
