//! # Resolvent
//!
//! Root-finding algorithms for scalar, complex, polynomial, and
//! multivariate nonlinear problems.
//!
//! This crate provides:
//!
//! - **Bracketing solvers**: Brent-Dekker, Ridders, bisection, secant,
//!   regula falsi
//! - **Open solvers**: Newton-Raphson, Halley, and a Newton-with-Brent
//!   hybrid
//! - **Interval scanning**: multi-root search with touching-root detection
//! - **Complex plane**: Muller's method
//! - **Polynomials**: companion-matrix eigen-roots, Laguerre iteration
//!   with deflation, multiplicity refinement
//! - **Nonlinear systems**: Newton, Broyden, Gauss-Newton
//!
//! ## Design Philosophy
//!
//! - **Uniform contract**: every solver takes a callable plus a
//!   [`SolverConfig`](config::SolverConfig) and returns a
//!   [`ConvergenceResult`](report::ConvergenceResult)
//! - **Failure taxonomy**: structural problems (bad bracket, singular
//!   derivative or Jacobian, invalid configuration) are `Err`; running out
//!   of iterations is a recoverable status carrying the best estimate
//! - **Deterministic**: identical inputs produce identical outputs; no
//!   global state, no caching, no I/O
//!
//! Callables are opaque: functions, derivatives, and Jacobians are plain
//! `Fn` values that are never inspected, cached, or memoized. Wrap them
//! externally if evaluation is expensive.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::needless_range_loop)]
#![allow(clippy::if_not_else)]
#![allow(clippy::single_match_else)]

pub mod bracket;
pub mod complex;
pub mod config;
pub mod error;
pub mod linear_algebra;
pub mod multivariate;
pub mod polynomial;
pub mod report;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bracket::{Bracket, Interval};
    pub use crate::complex::muller;
    pub use crate::config::SolverConfig;
    pub use crate::error::{RootError, RootResult};
    pub use crate::multivariate::{
        broyden, gauss_newton, gauss_newton_numerical, newton_system, newton_system_numerical,
    };
    pub use crate::polynomial::{
        eigen_roots, laguerre, laguerre_roots, refine_multiplicity, Multiplicity, Polynomial, Root,
    };
    pub use crate::report::{ConvergenceResult, ConvergenceStatus};
    pub use crate::solvers::{
        bisection, brent, find_zeros, halley, halley_numerical, hybrid, hybrid_numerical,
        newton_raphson, newton_raphson_numerical, regula_falsi, ridders, secant, BisectionSolver,
        BrentSolver, HalleySolver, HybridSolver, NewtonSolver, RegulaFalsiSolver, RiddersSolver,
        ScanConfig, SecantSolver, Solver,
    };
}

pub use error::{RootError, RootResult};
