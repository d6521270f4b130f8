//! Polynomial representation and root extraction.
//!
//! Roots can be extracted two ways: the broad-spectrum companion-matrix
//! eigenvalue path ([`eigen_roots`]) and the iterative complex Laguerre
//! path ([`laguerre`] / [`laguerre_roots`]). Both report roots as
//! `Complex64`; the eigen path loses precision for clustered or multiple
//! roots and for ill-conditioned (Wilkinson-type) polynomials, which is
//! what [`refine_multiplicity`] is for.

mod companion;
mod laguerre;
mod multiplicity;

pub use companion::{companion_matrix, eigen_roots};
pub use laguerre::{laguerre, laguerre_roots};
pub use multiplicity::{refine_multiplicity, Multiplicity, Root};

use num_complex::Complex64;

use crate::error::{RootError, RootResult};

/// A real polynomial stored as ordered coefficients, highest degree first.
///
/// The coefficient sequence is normalized at construction: leading zero
/// terms are stripped, and the all-zero sequence is rejected, so the
/// leading coefficient is always non-zero and `len == degree + 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    /// Creates a polynomial from coefficients, highest degree first.
    ///
    /// # Example
    ///
    /// ```rust
    /// use resolvent::polynomial::Polynomial;
    ///
    /// // x^2 - 2 (leading zeros are stripped)
    /// let p = Polynomial::new(&[0.0, 1.0, 0.0, -2.0]).unwrap();
    /// assert_eq!(p.degree(), 2);
    /// ```
    pub fn new(coeffs: &[f64]) -> RootResult<Self> {
        let first_nonzero = coeffs.iter().position(|&c| c != 0.0);
        match first_nonzero {
            None => Err(RootError::invalid_input(
                "polynomial has no non-zero coefficients",
            )),
            Some(start) => {
                if coeffs[start..].iter().any(|c| !c.is_finite()) {
                    return Err(RootError::invalid_input(
                        "polynomial coefficients must be finite",
                    ));
                }
                Ok(Self {
                    coeffs: coeffs[start..].to_vec(),
                })
            }
        }
    }

    /// Degree of the polynomial.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Coefficients, highest degree first. Never empty, and the leading
    /// coefficient is non-zero (except for the zero polynomial produced by
    /// differentiating a constant).
    #[must_use]
    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    /// Evaluates the polynomial at a real point (Horner).
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.coeffs.iter().fold(0.0, |acc, &c| acc * x + c)
    }

    /// Evaluates the polynomial at a complex point (Horner).
    #[must_use]
    pub fn eval_complex(&self, z: Complex64) -> Complex64 {
        self.coeffs
            .iter()
            .fold(Complex64::new(0.0, 0.0), |acc, &c| acc * z + c)
    }

    /// The first derivative as a polynomial.
    ///
    /// Differentiating a constant yields the zero polynomial, which is
    /// representable here (single zero coefficient) but not constructible
    /// through [`Polynomial::new`].
    #[must_use]
    pub fn derivative(&self) -> Self {
        let n = self.degree();
        if n == 0 {
            return Self { coeffs: vec![0.0] };
        }
        let coeffs = self
            .coeffs
            .iter()
            .take(n)
            .enumerate()
            .map(|(i, &c)| c * ((n - i) as f64))
            .collect();
        Self { coeffs }
    }

    /// Coefficients scaled to a leading coefficient of one.
    #[must_use]
    pub fn monic(&self) -> Vec<f64> {
        let lead = self.coeffs[0];
        self.coeffs.iter().map(|&c| c / lead).collect()
    }

    /// Coefficients lifted into the complex plane, for the Laguerre and
    /// deflation paths.
    pub(crate) fn complex_coeffs(&self) -> Vec<Complex64> {
        self.coeffs
            .iter()
            .map(|&c| Complex64::new(c, 0.0))
            .collect()
    }
}

/// Fused Horner evaluation of value, first, and second derivative at `z`.
pub(crate) fn eval_with_derivatives(
    coeffs: &[Complex64],
    z: Complex64,
) -> (Complex64, Complex64, Complex64) {
    let zero = Complex64::new(0.0, 0.0);
    let mut p = zero;
    let mut dp = zero;
    let mut d2p = zero;
    for &c in coeffs {
        d2p = d2p * z + 2.0 * dp;
        dp = dp * z + p;
        p = p * z + c;
    }
    (p, dp, d2p)
}

/// Synthetic division by `(z - root)`, dropping the (near-zero) remainder.
pub(crate) fn deflate(coeffs: &[Complex64], root: Complex64) -> Vec<Complex64> {
    let mut out = Vec::with_capacity(coeffs.len() - 1);
    let mut acc = coeffs[0];
    out.push(acc);
    for &c in &coeffs[1..coeffs.len() - 1] {
        acc = c + acc * root;
        out.push(acc);
    }
    out
}
