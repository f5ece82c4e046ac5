//! Dynamically typed operands for the checked operations.

use crate::{
    error::{Error, Result},
    interval::Interval,
    point::Point,
};

/// An argument whose type is only known at runtime.
///
/// The `try_*` methods of [`Point`] and [`Interval`] accept operands and
/// report [`Error::TypeMismatch`] when an operand has the wrong type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    Point(Point),
    Interval(Interval),
    Value(f64),
}

impl Operand {
    /// Name of the operand's type, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Operand::Point(_) => "Point",
            Operand::Interval(_) => "Interval",
            Operand::Value(_) => "value",
        }
    }

    pub(crate) fn expect_point(&self) -> Result<&Point> {
        match self {
            Operand::Point(p) => Ok(p),
            _ => Err(Error::TypeMismatch {
                expected: "Point",
                found: self.type_name(),
            }),
        }
    }

    pub(crate) fn expect_interval(&self) -> Result<&Interval> {
        match self {
            Operand::Interval(i) => Ok(i),
            _ => Err(Error::TypeMismatch {
                expected: "Interval",
                found: self.type_name(),
            }),
        }
    }
}

impl From<Point> for Operand {
    fn from(p: Point) -> Operand {
        Operand::Point(p)
    }
}

impl From<Interval> for Operand {
    fn from(i: Interval) -> Operand {
        Operand::Interval(i)
    }
}

impl From<f64> for Operand {
    fn from(x: f64) -> Operand {
        Operand::Value(x)
    }
}

/// Extracts every interval from a slice of operands.
///
/// Fails on the first operand that is not an interval.
pub(crate) fn expect_intervals(operands: &[Operand]) -> Result<Vec<Interval>> {
    operands
        .iter()
        .map(|operand| operand.expect_interval().copied())
        .collect()
}
