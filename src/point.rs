//! Interval endpoints.

use crate::{
    error::{Error, Result},
    operand::Operand,
};
use std::{cmp::Ordering, fmt};

/// Which end of an interval a [`Point`] bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Lower endpoint.
    Left,
    /// Upper endpoint.
    Right,
}

/// Endpoint of an interval on the real line.
///
/// A point carries a value (which may be infinite), an openness flag and
/// the side of the interval it bounds. Equality is structural: all three
/// attributes must match.
///
/// Points are ordered by value first. When two values are equal the order
/// is decided by side and openness, treating each point as if it were
/// displaced slightly towards the inside of its interval:
///
/// - a left-open point at `v` sits at `v + ε`,
/// - a left-closed or right-closed point at `v` sits at `v`,
/// - a right-open point at `v` sits at `v - ε`.
///
/// A left-closed and a right-closed point at the same value therefore sit
/// at the same position without being equal, and are not comparable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    value: f64,
    is_open: bool,
    side: Side,
}

impl Point {
    /// Creates a new point.
    ///
    /// # Parameters
    ///
    /// - `value`: Position of the point. Infinite values are permitted.
    /// - `is_open`: `true` if the point excludes its own value.
    /// - `side`: Side of the interval the point bounds.
    pub fn new(value: f64, is_open: bool, side: Side) -> Point {
        Point {
            value,
            is_open,
            side,
        }
    }

    /// Creates an open point.
    pub fn open(value: f64, side: Side) -> Point {
        Point::new(value, true, side)
    }

    /// Creates a closed point.
    pub fn closed(value: f64, side: Side) -> Point {
        Point::new(value, false, side)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_closed(&self) -> bool {
        !self.is_open
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Returns a copy of this point bounding the given side.
    pub fn with_side(self, side: Side) -> Point {
        Point { side, ..self }
    }

    /// Displacement of the point from its value when values tie.
    ///
    /// `-1`, `0` and `1` stand for `v - ε`, `v` and `v + ε`.
    fn offset(&self) -> i8 {
        match (self.side, self.is_open) {
            (Side::Left, true) => 1,
            (Side::Right, true) => -1,
            (_, false) => 0,
        }
    }

    /// Tests whether the half-line bounded by this point includes `x`.
    ///
    /// A left point admits values above it, a right point admits values
    /// below it. The value of the point itself is admitted only when the
    /// point is closed.
    pub fn admits(&self, x: f64) -> bool {
        match self.side {
            Side::Left => self.le_value(x),
            Side::Right => self.ge_value(x),
        }
    }

    /// Tests `self <= x` against a raw scalar.
    ///
    /// At equal values the point's offset decides: a left-open point lies
    /// above its value, so it is not `<=` it.
    pub fn le_value(&self, x: f64) -> bool {
        self.value < x || (self.value == x && self.offset() <= 0)
    }

    /// Tests `self >= x` against a raw scalar.
    ///
    /// At equal values the point's offset decides: a right-open point lies
    /// below its value, so it is not `>=` it.
    pub fn ge_value(&self, x: f64) -> bool {
        self.value > x || (self.value == x && self.offset() >= 0)
    }

    /// Compares against a dynamically typed operand, checking equality.
    ///
    /// # Returns
    ///
    /// - `Ok(bool)` if `other` is a point.
    /// - `Err(Error::TypeMismatch)` otherwise.
    pub fn try_eq(&self, other: &Operand) -> Result<bool> {
        Ok(self == other.expect_point()?)
    }

    /// Orders against a dynamically typed operand.
    ///
    /// # Returns
    ///
    /// - `Ok(ordering)` with the same meaning as [`PartialOrd::partial_cmp`]
    ///   if `other` is a point.
    /// - `Err(Error::TypeMismatch)` otherwise.
    pub fn try_partial_cmp(&self, other: &Operand) -> Result<Option<Ordering>> {
        Ok(self.partial_cmp(other.expect_point()?))
    }

    pub fn try_lt(&self, other: &Operand) -> Result<bool> {
        Ok(self < other.expect_point()?)
    }

    pub fn try_gt(&self, other: &Operand) -> Result<bool> {
        Ok(self > other.expect_point()?)
    }

    /// Tests `self <= other`. Scalars are accepted and use [`Point::le_value`].
    pub fn try_le(&self, other: &Operand) -> Result<bool> {
        match other {
            Operand::Point(p) => Ok(self <= p),
            Operand::Value(x) => Ok(self.le_value(*x)),
            Operand::Interval(_) => Err(Error::TypeMismatch {
                expected: "Point or value",
                found: other.type_name(),
            }),
        }
    }

    /// Tests `self >= other`. Scalars are accepted and use [`Point::ge_value`].
    pub fn try_ge(&self, other: &Operand) -> Result<bool> {
        match other {
            Operand::Point(p) => Ok(self >= p),
            Operand::Value(x) => Ok(self.ge_value(*x)),
            Operand::Interval(_) => Err(Error::TypeMismatch {
                expected: "Point or value",
                found: other.type_name(),
            }),
        }
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Point) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        match self.value.partial_cmp(&other.value)? {
            Ordering::Equal => match self.offset().cmp(&other.offset()) {
                // Same position, different points.
                Ordering::Equal => None,
                ord => Some(ord),
            },
            ord => Some(ord),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.side, self.is_open) {
            (Side::Left, true) => write!(f, "({}", self.value),
            (Side::Left, false) => write!(f, "[{}", self.value),
            (Side::Right, true) => write!(f, "{})", self.value),
            (Side::Right, false) => write!(f, "{}]", self.value),
        }
    }
}
