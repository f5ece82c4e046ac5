//! Errors.

use thiserror::Error;

/// Errors produced by the checked (dynamically typed) operations and by
/// basis-function lookup.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// An operand was not of the type required by the operation.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    /// No basis function exists with the given name.
    #[error("{0} function not implemented")]
    UnknownFunction(String),
    /// No sigmoid exists with the given name.
    #[error("{0} sigmoid not implemented: use 'logistic' or 'tanh'")]
    UnknownSigmoid(String),
}

pub type Result<T> = std::result::Result<T, Error>;
