//! Intervals and sign-change brackets.

use crate::error::{RootError, RootResult};

/// A closed interval `[low, high]` with finite bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    low: f64,
    high: f64,
}

impl Interval {
    /// Creates an interval, rejecting non-finite or reversed bounds.
    pub fn new(low: f64, high: f64) -> RootResult<Self> {
        if !(low.is_finite() && high.is_finite()) {
            return Err(RootError::invalid_input(format!(
                "interval bounds must be finite, got [{low}, {high}]"
            )));
        }
        if low > high {
            return Err(RootError::invalid_input(format!(
                "interval bounds must satisfy low <= high, got [{low}, {high}]"
            )));
        }
        Ok(Self { low, high })
    }

    /// Creates an interval from bounds in either order.
    pub fn ordered(a: f64, b: f64) -> RootResult<Self> {
        Self::new(a.min(b), a.max(b))
    }

    /// Lower bound.
    #[must_use]
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Upper bound.
    #[must_use]
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Interval width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    /// Midpoint, computed without overflow for large bounds.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        self.low + (self.high - self.low) / 2.0
    }

    /// Whether `x` lies inside the closed interval.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        self.low <= x && x <= self.high
    }
}

/// An interval whose endpoints have function values of opposite sign,
/// guaranteeing at least one root inside for a continuous function.
///
/// The endpoint values are evaluated once at construction and cached, so
/// bracketing solvers never re-pay those evaluations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    interval: Interval,
    f_low: f64,
    f_high: f64,
}

impl Bracket {
    /// Evaluates `f` at the interval endpoints and validates the sign
    /// condition. An endpoint that is exactly zero is a valid bracket.
    pub fn new<F>(f: &F, interval: Interval) -> RootResult<Self>
    where
        F: Fn(f64) -> f64,
    {
        let f_low = f(interval.low());
        let f_high = f(interval.high());

        // NaN endpoint values fail this comparison and are rejected too.
        if !(f_low * f_high <= 0.0) {
            return Err(RootError::InvalidBracket {
                a: interval.low(),
                b: interval.high(),
                fa: f_low,
                fb: f_high,
            });
        }

        Ok(Self {
            interval,
            f_low,
            f_high,
        })
    }

    /// The bracketed interval.
    #[must_use]
    pub fn interval(&self) -> Interval {
        self.interval
    }

    /// Cached function value at the lower bound.
    #[must_use]
    pub fn f_low(&self) -> f64 {
        self.f_low
    }

    /// Cached function value at the upper bound.
    #[must_use]
    pub fn f_high(&self) -> f64 {
        self.f_high
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_validation() {
        assert!(Interval::new(1.0, 2.0).is_ok());
        assert!(Interval::new(2.0, 1.0).is_err());
        assert!(Interval::new(f64::NAN, 1.0).is_err());
        assert!(Interval::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_interval_ordered() {
        let interval = Interval::ordered(2.0, 1.0).unwrap();
        assert!((interval.low() - 1.0).abs() < f64::EPSILON);
        assert!((interval.high() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_midpoint_and_contains() {
        let interval = Interval::new(1.0, 3.0).unwrap();
        assert!((interval.midpoint() - 2.0).abs() < f64::EPSILON);
        assert!(interval.contains(1.0));
        assert!(interval.contains(3.0));
        assert!(!interval.contains(3.5));
    }

    #[test]
    fn test_bracket_sign_condition() {
        let f = |x: f64| x * x - 2.0;

        let valid = Bracket::new(&f, Interval::new(1.0, 2.0).unwrap());
        assert!(valid.is_ok());

        let invalid = Bracket::new(&f, Interval::new(2.0, 3.0).unwrap());
        assert!(matches!(invalid, Err(RootError::InvalidBracket { .. })));
    }

    #[test]
    fn test_bracket_endpoint_root_is_valid() {
        let f = |x: f64| x - 1.0;
        let bracket = Bracket::new(&f, Interval::new(0.0, 1.0).unwrap()).unwrap();
        assert!((bracket.f_high()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bracket_rejects_nan() {
        let f = |_: f64| f64::NAN;
        let result = Bracket::new(&f, Interval::new(0.0, 1.0).unwrap());
        assert!(result.is_err());
    }
}
