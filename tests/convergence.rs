//! End-to-end convergence tests across solver families.

use approx::assert_relative_eq;
use nalgebra::DVector;
use num_complex::Complex64;
use proptest::prelude::*;

use resolvent::complex::muller;
use resolvent::config::SolverConfig;
use resolvent::multivariate::gauss_newton_numerical;
use resolvent::polynomial::{
    eigen_roots, laguerre, refine_multiplicity, Multiplicity, Polynomial,
};
use resolvent::solvers::{
    bisection, brent, find_zeros, newton_raphson, regula_falsi, ridders, ScanConfig,
};

/// (x - 1) e^(-9x) + x^9: steep on the left, flat near zero, with a single
/// root near 0.5367 inside [-1.4, 1.0].
fn hard_scalar(x: f64) -> f64 {
    (x - 1.0) * (-9.0 * x).exp() + x.powi(9)
}

#[test]
fn bracketing_solvers_agree_on_hard_scalar() {
    let config = SolverConfig::default().with_tolerance(1e-8);
    let expected = 0.53674166;

    let brent_result = brent(hard_scalar, -1.4, 1.0, &config).unwrap();
    let ridders_result = ridders(hard_scalar, -1.4, 1.0, &config).unwrap();
    let bisection_result = bisection(hard_scalar, -1.4, 1.0, &config).unwrap();

    for result in [&brent_result, &ridders_result, &bisection_result] {
        assert!(result.status.is_converged());
        assert!(result.root >= -1.4 && result.root <= 1.0);
        assert_relative_eq!(result.root, expected, epsilon = 1e-6);
    }
}

#[test]
fn companion_matrix_finds_four_real_roots() {
    // (x^2 - 1)(x^2 - 4): roots -2, -1, 1, 2.
    let p = Polynomial::new(&[1.0, 0.0, -5.0, 0.0, 4.0]).unwrap();

    let roots = eigen_roots(&p).unwrap();

    assert_eq!(roots.len(), 4);
    for (root, expected) in roots.iter().zip([-2.0, -1.0, 1.0, 2.0]) {
        assert!((root.re - expected).abs() < 1e-6);
        assert!(root.im.abs() < 1e-6);
    }
}

#[test]
fn laguerre_converges_to_imaginary_root() {
    // (x - 1.2)(x - 2.1)^2 (x^2 + 5), seeded at 2i.
    let p = Polynomial::new(&[1.0, -5.4, 14.45, -32.292, 47.25, -26.46]).unwrap();

    let result = laguerre(&p, Complex64::new(0.0, 2.0), &SolverConfig::default()).unwrap();

    assert!(result.status.is_converged());
    assert!((result.root - Complex64::new(0.0, 2.236068)).norm() < 1e-6);
}

#[test]
fn newton_finds_touching_root_of_sin_squared() {
    let f = |x: f64| x.sin().powi(2);
    let df = |x: f64| (2.0 * x).sin();

    let result = newton_raphson(f, df, 2.0, &SolverConfig::default()).unwrap();

    assert!(result.status.is_converged());
    assert!((result.root - std::f64::consts::PI).abs() < 1e-4);
}

#[test]
fn newton_converges_quadratically_on_simple_root() {
    // Quadratic convergence shows up as very few iterations from a
    // reasonable starting point.
    let f = |x: f64| x.cos() - x * x * x;
    let df = |x: f64| -x.sin() - 3.0 * x * x;

    let result = newton_raphson(f, df, 0.5, &SolverConfig::default()).unwrap();

    assert!(result.status.is_converged());
    assert_relative_eq!(result.root, 0.865474033102, epsilon = 1e-9);
    assert!(result.iterations <= 8);
}

#[test]
fn scanner_finds_crossing_and_touching_roots() {
    let f = |x: f64| x * (std::f64::consts::PI * x).sin();
    let config = ScanConfig::default().with_solver(SolverConfig::default().with_tolerance(1e-8));

    let roots = find_zeros(f, -2.0, 2.0, &config).unwrap();

    assert_eq!(roots.len(), 5);
    for (root, expected) in roots.iter().zip([-2.0, -1.0, 0.0, 1.0, 2.0]) {
        assert!((root - expected).abs() < 1e-6);
    }
    // Deduplicated: no pair closer than the tolerance.
    for pair in roots.windows(2) {
        assert!(pair[1] - pair[0] > 1e-8);
    }
}

#[test]
fn gauss_newton_solves_complex_equation_split_into_reals() {
    // sin^2(z) + sqrt(z) - log(z) = 0 split into real and imaginary parts
    // over (re, im), started at (1, 1).
    let f = |v: &DVector<f64>| {
        let z = Complex64::new(v[0], v[1]);
        let w = z.sin() * z.sin() + z.sqrt() - z.ln();
        DVector::from_vec(vec![w.re, w.im])
    };

    let x0 = DVector::from_vec(vec![1.0, 1.0]);
    let result = gauss_newton_numerical(f, &x0, &SolverConfig::default()).unwrap();

    assert!(result.status.is_converged());
    assert_relative_eq!(result.root[0], 0.2555197, epsilon = 1e-6);
    assert_relative_eq!(result.root[1], 0.8948303, epsilon = 1e-6);
}

#[test]
fn muller_reaches_complex_root_from_near_real_seeds() {
    let f = |z: Complex64| z * z + 1.0;

    let result = muller(
        f,
        Complex64::new(0.5, 0.0),
        Complex64::new(1.0, 0.0),
        Complex64::new(1.5, 0.5),
        &SolverConfig::default(),
    )
    .unwrap();

    assert!((result.root - Complex64::new(0.0, 1.0)).norm() < 1e-9);
}

#[test]
fn identical_inputs_give_identical_results() {
    let config = SolverConfig::default().with_tolerance(1e-12);

    let first = brent(hard_scalar, -1.4, 1.0, &config).unwrap();
    let second = brent(hard_scalar, -1.4, 1.0, &config).unwrap();
    assert_eq!(first, second);

    let p = Polynomial::new(&[1.0, -5.4, 14.45, -32.292, 47.25, -26.46]).unwrap();
    let eig_first = eigen_roots(&p).unwrap();
    let eig_second = eigen_roots(&p).unwrap();
    assert_eq!(eig_first, eig_second);
}

#[test]
fn multiplicity_refinement_flags_non_roots() {
    let p = Polynomial::new(&[1.0, 0.0, -3.0, 2.0]).unwrap();

    let bogus = refine_multiplicity(&p, Complex64::new(3.7, 0.0), &SolverConfig::default())
        .unwrap();
    assert_eq!(bogus.multiplicity, Multiplicity::Unreliable);

    let genuine = refine_multiplicity(&p, Complex64::new(1.0, 0.0), &SolverConfig::default())
        .unwrap();
    assert_eq!(genuine.multiplicity, Multiplicity::Estimated(2));
}

proptest! {
    // For any valid bracket of a monotone cubic, every bracketing solver
    // returns a root inside the bracket satisfying the postcondition.
    #[test]
    fn bracketing_postcondition_holds(lo in -10.0_f64..0.0, hi in 1.0_f64..10.0) {
        let f = |x: f64| x * x * x + x - 1.0;
        let config = SolverConfig::default().with_tolerance(1e-9);

        let brent_result = brent(f, lo, hi, &config).unwrap();
        let ridders_result = ridders(f, lo, hi, &config).unwrap();
        let bisection_result = bisection(f, lo, hi, &config).unwrap();

        for result in [brent_result, ridders_result, bisection_result] {
            prop_assert!(result.root >= lo && result.root <= hi);
            prop_assert!(f(result.root).abs() <= 1e-9 || result.error <= 1e-9);
        }

        // Regula falsi keeps the bracket but may run out of budget on wide
        // brackets; the postcondition is only claimed on convergence.
        let falsi_result = regula_falsi(f, lo, hi, &config).unwrap();
        prop_assert!(falsi_result.root >= lo && falsi_result.root <= hi);
        if falsi_result.status.is_converged() {
            prop_assert!(f(falsi_result.root).abs() <= 1e-9 || falsi_result.error <= 1e-9);
        }
    }
}
