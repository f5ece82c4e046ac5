//! Intervals of the real line with open and closed endpoints.
//!
//! An [`Interval`] is bounded by two [`Point`]s, each of which is open or
//! closed. Intervals support containment tests, intersection, and unions
//! that merge overlapping intervals. All types are immutable values.
//!
//! The [`basis`] module holds scalar basis functions with numerical
//! derivatives.

#[cfg(test)]
#[macro_use]
mod compare;
pub mod basis;
mod error;
mod interval;
mod operand;
mod point;

pub use error::{Error, Result};
pub use interval::{Interval, IntervalKind};
pub use operand::Operand;
pub use point::{Point, Side};

/// Installs `env_logger` for tests.
///
/// The level is taken from `RUST_LOG`. Only the first call has an effect.
#[cfg(test)]
fn init_test_logger() {
    let _ = env_logger::Builder::from_default_env()
        .is_test(true)
        .try_init();
}
