//! Multi-root interval scanner.

use crate::bracket::Interval;
use crate::config::SolverConfig;
use crate::error::{RootError, RootResult};
use crate::solvers::brent;

/// Default number of panels the scanned interval is split into.
pub const DEFAULT_SUBDIVISIONS: usize = 100;

/// Configuration for [`find_zeros`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanConfig {
    /// Configuration forwarded to the per-panel solvers.
    pub solver: SolverConfig,
    /// Upper bound on the number of panels; the actual panel width never
    /// drops below the solver tolerance.
    pub subdivisions: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            solver: SolverConfig::default(),
            subdivisions: DEFAULT_SUBDIVISIONS,
        }
    }
}

impl ScanConfig {
    /// Sets the solver configuration.
    #[must_use]
    pub fn with_solver(mut self, solver: SolverConfig) -> Self {
        self.solver = solver;
        self
    }

    /// Sets the panel count cap.
    #[must_use]
    pub fn with_subdivisions(mut self, subdivisions: usize) -> Self {
        self.subdivisions = subdivisions;
        self
    }
}

/// Finds all roots of `f` on `[a, b]`.
///
/// The interval is split into panels of width at least the solver
/// tolerance. A panel whose endpoint values differ in sign is handed to
/// [`brent`]; a panel with agreeing signs is probed with a bounded
/// golden-section minimizer of `|f|`, and its minimizer is recorded as a
/// touching (quadratic) root when `|f|` there is within tolerance. Panel
/// edges that already satisfy `|f| <= tol` are recorded directly, and the
/// overall endpoints are tested rather than assumed interior.
///
/// The returned list is sorted and deduplicated: roots closer than the
/// tolerance are merged. A single pass is made over the interval; roots
/// separated by less than the panel width can still be missed, so tighten
/// `subdivisions` for wildly oscillating functions.
///
/// # Example
///
/// ```rust
/// use resolvent::solvers::{find_zeros, ScanConfig};
///
/// // Roots at -1, 0, 1.
/// let f = |x: f64| x * (x * x - 1.0);
///
/// let roots = find_zeros(f, -2.0, 2.0, &ScanConfig::default()).unwrap();
/// assert_eq!(roots.len(), 3);
/// ```
pub fn find_zeros<F>(f: F, a: f64, b: f64, config: &ScanConfig) -> RootResult<Vec<f64>>
where
    F: Fn(f64) -> f64,
{
    config.solver.validate()?;
    if config.subdivisions == 0 {
        return Err(RootError::invalid_input("subdivisions must be positive"));
    }
    let interval = Interval::ordered(a, b)?;
    let (a, b) = (interval.low(), interval.high());
    let tol = config.solver.tolerance;

    let mut roots = Vec::new();

    if interval.width() == 0.0 {
        if f(a).abs() <= tol {
            roots.push(a);
        }
        return Ok(roots);
    }

    // The right endpoint is no panel's left edge, so test it up front.
    if f(b).abs() <= tol {
        roots.push(b);
    }

    let panels = ((interval.width() / tol) as usize)
        .clamp(1, config.subdivisions);
    let width = interval.width();

    for i in 0..panels {
        let lo = a + width * (i as f64) / (panels as f64);
        let hi = if i + 1 == panels {
            b
        } else {
            a + width * ((i + 1) as f64) / (panels as f64)
        };

        let f_lo = f(lo);
        if f_lo.abs() <= tol {
            roots.push(lo);
            continue;
        }

        let f_hi = f(hi);
        if f_lo * f_hi < 0.0 {
            // Sign change: the bracketing solver owns this panel. The
            // bracket was just verified, so only a budget overrun can be
            // reported, and its best estimate is still inside the panel.
            let result = brent(&f, lo, hi, &config.solver)?;
            roots.push(result.root);
        } else {
            // No sign change: look for a touching root at the panel's
            // extremum of |f|.
            let x_min = golden_section_min(|x| f(x).abs(), lo, hi, tol);
            if f(x_min).abs() <= tol && x_min > lo + tol && x_min < hi - tol {
                roots.push(x_min);
            }
        }
    }

    roots.sort_by(f64::total_cmp);
    let mut merged: Vec<f64> = Vec::with_capacity(roots.len());
    for root in roots {
        match merged.last() {
            Some(&last) if (root - last).abs() <= tol => {}
            _ => merged.push(root),
        }
    }

    log::debug!(
        "find_zeros: {} root(s) over [{a}, {b}] using {panels} panel(s)",
        merged.len()
    );

    Ok(merged)
}

/// Golden-section search for the minimum of `g` on `[a, b]`.
///
/// Bounded and derivative-free; accurate to `xtol` in the argument, which
/// is all the touching-root probe needs.
fn golden_section_min<G>(g: G, a: f64, b: f64, xtol: f64) -> f64
where
    G: Fn(f64) -> f64,
{
    const INV_PHI: f64 = 0.618_033_988_749_894_8;
    const MAX_STEPS: u32 = 200;

    let mut a = a;
    let mut b = b;
    let mut x1 = b - INV_PHI * (b - a);
    let mut x2 = a + INV_PHI * (b - a);
    let mut g1 = g(x1);
    let mut g2 = g(x2);

    let mut steps = 0;
    while (b - a) > xtol && steps < MAX_STEPS {
        if g1 < g2 {
            b = x2;
            x2 = x1;
            g2 = g1;
            x1 = b - INV_PHI * (b - a);
            g1 = g(x1);
        } else {
            a = x1;
            x1 = x2;
            g1 = g2;
            x2 = a + INV_PHI * (b - a);
            g2 = g(x2);
        }
        steps += 1;
    }

    a + (b - a) / 2.0
}
