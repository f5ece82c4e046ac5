//! Approximate comparison of floating point values, for tests.

/// Tolerance to use when performing approximate comparisons.
#[derive(Debug, Clone, Copy)]
pub enum Tol {
    /// Absolute tolerance.
    Abs(f64),
    /// Both absolute and relative tolerance.
    AbsRel { atol: f64, rtol: f64 },
}
impl Tol {
    /// Create a new absolute tolerance.
    pub fn abs(atol: f64) -> Tol {
        Tol::Abs(atol.abs())
    }
}

/// Tolerance used by the two-argument form of `assert_close!`.
///
/// Finite differences with a step of `1e-3` are accurate to roughly seven
/// places for smooth functions.
pub const DEFAULT_TOL: Tol = Tol::AbsRel {
    atol: 1e-7,
    rtol: 1e-6,
};

/// Closeness test.
///
/// This implements `|a - b| <= atol`, or for [`Tol::AbsRel`]
/// `(|a - b| <= atol) || (|a - b| <= rtol * max(|a|, |b|))`.
///
/// Equal values are always close. Otherwise a non-finite value is never
/// close to anything.
pub fn close(tol: Tol, a: f64, b: f64) -> bool {
    if a == b {
        return true;
    }
    if !(a.is_finite() && b.is_finite()) {
        return false;
    }
    let delta = (a - b).abs();
    match tol {
        Tol::Abs(atol) => delta <= atol,
        Tol::AbsRel { atol, rtol } => delta <= atol || delta <= rtol * a.abs().max(b.abs()),
    }
}

macro_rules! assert_close {
    ($tol:expr, $a: expr, $b: expr) => {
        if (!$crate::compare::close($tol, $a, $b)) {
            panic!(
                "assertion failed: `(left ≈ right)`
  left:  `{:?}`
  right: `{:?}`
  tol:   `{:?}`",
                $a, $b, $tol
            );
        }
    };
    ($a: expr, $b: expr) => {
        assert_close!($crate::compare::DEFAULT_TOL, $a, $b)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_tolerance() {
        assert!(close(Tol::abs(1e-3), 1.0, 1.0005));
        assert!(!close(Tol::abs(1e-3), 1.0, 1.002));
        assert!(close(Tol::abs(-1e-3), 1.0, 1.0005));
    }

    #[test]
    fn test_default_tolerance_is_relative_for_large_values() {
        assert!(!close(DEFAULT_TOL, 1.0, 1.00001));
        assert!(close(DEFAULT_TOL, 1e6, 1e6 + 0.5));
    }

    #[test]
    fn test_infinities() {
        assert!(close(DEFAULT_TOL, f64::INFINITY, f64::INFINITY));
        assert!(!close(DEFAULT_TOL, f64::INFINITY, f64::NEG_INFINITY));
        assert!(!close(Tol::abs(1e300), f64::INFINITY, 1.0));
    }

    #[test]
    #[should_panic]
    fn test_assert_close_panics_when_far() {
        assert_close!(Tol::abs(1e-9), 1.0, 2.0);
    }
}
