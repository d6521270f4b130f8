//! Companion-matrix root extraction.

use nalgebra::DMatrix;
use num_complex::Complex64;

use crate::error::{RootError, RootResult};
use crate::linear_algebra;
use crate::polynomial::Polynomial;

/// Builds the companion matrix of a polynomial.
///
/// The polynomial is first scaled monic; the resulting `degree x degree`
/// matrix has the negated coefficients in its first row and an identity
/// subdiagonal, and its eigenvalues are exactly the polynomial's roots
/// (with multiplicity, up to numerical tolerance). Construction is
/// deterministic. Requires degree >= 1.
pub fn companion_matrix(poly: &Polynomial) -> RootResult<DMatrix<f64>> {
    let n = poly.degree();
    if n == 0 {
        return Err(RootError::invalid_input(
            "constant polynomial has no companion matrix",
        ));
    }

    let monic = poly.monic();
    let mut matrix = DMatrix::zeros(n, n);
    for j in 0..n {
        matrix[(0, j)] = -monic[j + 1];
    }
    for i in 1..n {
        matrix[(i, i - 1)] = 1.0;
    }

    Ok(matrix)
}

/// Extracts all roots of a polynomial via companion-matrix eigenvalues.
///
/// This is the default broad-spectrum method: it returns all `degree`
/// roots at once (a constant polynomial yields an empty list), sorted by
/// real part then imaginary part for reproducible output. Multiplicity is
/// only implicit in numerical clustering, and precision degrades for
/// clustered roots and ill-conditioned polynomials; refine with
/// [`refine_multiplicity`](crate::polynomial::refine_multiplicity) or
/// polish with [`laguerre`](crate::polynomial::laguerre) when that
/// matters.
///
/// # Example
///
/// ```rust
/// use resolvent::polynomial::{eigen_roots, Polynomial};
///
/// // (x^2 - 1)(x^2 - 4) = x^4 - 5x^2 + 4, roots -2, -1, 1, 2
/// let p = Polynomial::new(&[1.0, 0.0, -5.0, 0.0, 4.0]).unwrap();
///
/// let roots = eigen_roots(&p).unwrap();
/// assert_eq!(roots.len(), 4);
/// assert!((roots[0].re - -2.0).abs() < 1e-6);
/// ```
pub fn eigen_roots(poly: &Polynomial) -> RootResult<Vec<Complex64>> {
    if poly.degree() == 0 {
        return Ok(Vec::new());
    }

    let matrix = companion_matrix(poly)?;
    let mut roots = linear_algebra::eigenvalues(&matrix)?;
    roots.sort_by(|a, b| a.re.total_cmp(&b.re).then(a.im.total_cmp(&b.im)));
    Ok(roots)
}
