//! Complex-plane root finding.
//!
//! Solvers here operate on `C -> C` callables and report roots as
//! [`Complex64`](num_complex::Complex64) unconditionally, even when seeded
//! from the real axis.

mod muller;

pub use muller::muller;
