//! Intervals of the real line with open or closed endpoints.

use crate::{
    error::{Error, Result},
    operand::{expect_intervals, Operand},
    point::{Point, Side},
};
use log::{debug, trace};
use std::fmt;

/// Interval of real values, bounded by two [`Point`]s.
///
/// The lower point always bounds the [`Side::Left`] and the upper point the
/// [`Side::Right`], whatever sides were supplied on construction.
///
/// An interval is empty when its lower value is at or above its upper
/// value. Empty intervals are classified as both open and closed, and all
/// empty intervals are equal to each other.
///
/// To construct an interval, use [`Interval::new`] or one of the shorthand
/// constructors such as [`Interval::closed`].
#[derive(Debug, Clone, Copy)]
pub struct Interval {
    lower: Point,
    upper: Point,
}

/// Classification of an interval by the openness of its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalKind {
    /// Both open and closed at once.
    Empty,
    Open,
    Closed,
    /// One endpoint open, the other closed.
    HalfOpen,
}

impl Interval {
    /// Creates an interval from two end points.
    ///
    /// The sides of `lower` and `upper` are ignored and replaced with
    /// [`Side::Left`] and [`Side::Right`] respectively.
    ///
    /// # Parameters
    ///
    /// - `lower`: Lower end point.
    /// - `upper`: Upper end point.
    ///
    /// # Returns
    ///
    /// A new interval. It is empty if `lower` is not numerically below
    /// `upper`.
    pub fn new(lower: Point, upper: Point) -> Interval {
        Interval {
            lower: lower.with_side(Side::Left),
            upper: upper.with_side(Side::Right),
        }
    }

    /// Creates the interval `(-∞, +∞)`.
    pub fn universal() -> Interval {
        Interval::open(f64::NEG_INFINITY, f64::INFINITY)
    }

    /// Creates the open interval `(a, b)`.
    pub fn open(a: f64, b: f64) -> Interval {
        Interval::new(Point::open(a, Side::Left), Point::open(b, Side::Right))
    }

    /// Creates the closed interval `[a, b]`.
    pub fn closed(a: f64, b: f64) -> Interval {
        Interval::new(Point::closed(a, Side::Left), Point::closed(b, Side::Right))
    }

    /// Creates the half-open interval `(a, b]`.
    pub fn open_closed(a: f64, b: f64) -> Interval {
        Interval::new(Point::open(a, Side::Left), Point::closed(b, Side::Right))
    }

    /// Creates the half-open interval `[a, b)`.
    pub fn closed_open(a: f64, b: f64) -> Interval {
        Interval::new(Point::closed(a, Side::Left), Point::open(b, Side::Right))
    }

    pub fn lower(&self) -> Point {
        self.lower
    }

    pub fn upper(&self) -> Point {
        self.upper
    }

    /// Tests if the interval is empty.
    ///
    /// This compares the endpoint values only; openness plays no part, so
    /// the single-value interval `[v, v]` is empty too.
    pub fn is_empty(&self) -> bool {
        self.lower.value() >= self.upper.value()
    }

    /// Tests if both end points are closed. Always `true` when empty.
    pub fn is_closed(&self) -> bool {
        self.is_empty() || (self.lower.is_closed() && self.upper.is_closed())
    }

    /// Tests if both end points are open. Always `true` when empty.
    pub fn is_open(&self) -> bool {
        self.is_empty() || (self.lower.is_open() && self.upper.is_open())
    }

    pub fn kind(&self) -> IntervalKind {
        if self.is_empty() {
            IntervalKind::Empty
        } else if self.is_open() {
            IntervalKind::Open
        } else if self.is_closed() {
            IntervalKind::Closed
        } else {
            IntervalKind::HalfOpen
        }
    }

    /// Tests if a value is contained by this interval.
    pub fn contains_value(&self, x: f64) -> bool {
        self.lower.admits(x) && self.upper.admits(x)
    }

    /// Tests if a point lies between the end points of this interval,
    /// using the ordering of [`Point`].
    pub fn contains_point(&self, point: &Point) -> bool {
        self.lower <= *point && *point <= self.upper
    }

    /// Tests if two intervals intersect.
    ///
    /// Besides comparing the end points with each other, this also checks
    /// whether either interval contains one of the other's end values. An
    /// open end point touching a closed one (such as `(0, 2)` and `(-1, 0]`)
    /// therefore counts as intersecting.
    pub fn intersects(&self, other: &Interval) -> bool {
        let intersects = (self.lower <= other.upper && other.lower <= self.upper)
            || other.contains_value(self.lower.value())
            || other.contains_value(self.upper.value())
            || self.contains_value(other.lower.value())
            || self.contains_value(other.upper.value());
        trace!("{} intersects {}: {}", self, other, intersects);
        intersects
    }

    /// Splits intervals into those disjoint from this interval and those
    /// intersecting it.
    ///
    /// # Returns
    ///
    /// `(disjoint, intersecting)`, each in the order of `others`.
    pub fn split(&self, others: &[Interval]) -> (Vec<Interval>, Vec<Interval>) {
        others.iter().partition(|other| !self.intersects(other))
    }

    /// Takes the union of this interval with some others.
    ///
    /// Every interval that intersects `self` is merged with it into a
    /// single interval, which is placed after the disjoint intervals. If
    /// none intersect, `self` is placed after them unchanged.
    ///
    /// Only intervals intersecting `self` are merged. The result is
    /// pairwise disjoint if `others` already was.
    pub fn union(&self, others: &[Interval]) -> Vec<Interval> {
        let (mut disjoint, intersecting) = self.split(others);
        match intersecting.split_first() {
            None => disjoint.push(*self),
            Some((first, rest)) => {
                let tail = || rest.iter().chain(std::iter::once(self));
                let merged = Interval::new(
                    min_point(first.lower(), tail().map(Interval::lower)),
                    max_point(first.upper(), tail().map(Interval::upper)),
                );
                debug!(
                    "union merged {} intervals into {}",
                    intersecting.len() + 1,
                    merged
                );
                disjoint.push(merged);
            }
        }
        disjoint
    }

    /// Intersects this interval with some others.
    ///
    /// # Returns
    ///
    /// The interval from the greatest lower point to the least upper point.
    /// When the intervals have nothing in common the result is empty.
    pub fn intersect(&self, others: &[Interval]) -> Interval {
        let (first, rest) = match others.split_first() {
            Some(split) => split,
            None => return *self,
        };
        let tail = || rest.iter().chain(std::iter::once(self));
        let result = Interval::new(
            max_point(first.lower(), tail().map(Interval::lower)),
            min_point(first.upper(), tail().map(Interval::upper)),
        );
        debug!(
            "intersection of {} intervals is {}",
            others.len() + 1,
            result
        );
        result
    }

    /// Unions a collection of intervals, one at a time.
    ///
    /// Each interval is merged into the accumulated list with
    /// [`Interval::union`]. Starting from an empty list, the accumulated list
    /// stays pairwise disjoint as long as no interval bridges two
    /// previously separate ones.
    pub fn union_all(intervals: &[Interval]) -> Vec<Interval> {
        intervals
            .iter()
            .fold(Vec::new(), |acc, interval| interval.union(&acc))
    }

    /// Checked version of `==`.
    pub fn try_eq(&self, other: &Operand) -> Result<bool> {
        Ok(self == other.expect_interval()?)
    }

    /// Checked version of [`Interval::intersects`].
    pub fn try_intersects(&self, other: &Operand) -> Result<bool> {
        Ok(self.intersects(other.expect_interval()?))
    }

    /// Checked version of [`Interval::split`].
    pub fn try_split(&self, others: &[Operand]) -> Result<(Vec<Interval>, Vec<Interval>)> {
        Ok(self.split(&expect_intervals(others)?))
    }

    /// Checked version of [`Interval::union`].
    pub fn try_union(&self, others: &[Operand]) -> Result<Vec<Interval>> {
        Ok(self.union(&expect_intervals(others)?))
    }

    /// Checked version of [`Interval::intersect`].
    pub fn try_intersect(&self, others: &[Operand]) -> Result<Interval> {
        Ok(self.intersect(&expect_intervals(others)?))
    }

    /// Checked containment test, accepting either a value or a point.
    pub fn try_contains(&self, operand: &Operand) -> Result<bool> {
        match operand {
            Operand::Value(x) => Ok(self.contains_value(*x)),
            Operand::Point(p) => Ok(self.contains_point(p)),
            Operand::Interval(_) => Err(Error::TypeMismatch {
                expected: "Point or value",
                found: operand.type_name(),
            }),
        }
    }
}

impl Default for Interval {
    fn default() -> Interval {
        Interval::universal()
    }
}

impl PartialEq for Interval {
    fn eq(&self, other: &Interval) -> bool {
        (self.lower == other.lower && self.upper == other.upper)
            || (self.is_empty() && other.is_empty())
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "empty")
        } else {
            write!(f, "{}, {}", self.lower, self.upper)
        }
    }
}

/// Returns the least of `first` and `rest`, keeping the first of any tied
/// points.
fn min_point(first: Point, rest: impl Iterator<Item = Point>) -> Point {
    rest.fold(first, |least, p| if p < least { p } else { least })
}

/// Returns the greatest of `first` and `rest`, keeping the first of any
/// tied points.
fn max_point(first: Point, rest: impl Iterator<Item = Point>) -> Point {
    rest.fold(first, |greatest, p| if p > greatest { p } else { greatest })
}
