//! Error types for IDS parsing.

use thiserror::Error;

use crate::idc::Idc;

/// Errors that can occur while parsing a description sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdsError {
    /// An operator was reached with fewer formed operands than its arity.
    #[error("operator {idc} needs {expected} operands, only {available} available")]
    MissingOperands {
        /// The operator that could not be satisfied.
        idc: Idc,
        /// Operands the operator requires.
        expected: usize,
        /// Operands that were actually available.
        available: usize,
    },

    /// More than one tree remained after all tokens were consumed.
    #[error("malformed description sequence: {roots} roots remain")]
    LeftoverOperands {
        /// Number of unconnected trees left on the stack.
        roots: usize,
    },

    /// The token sequence was empty.
    #[error("empty description sequence")]
    EmptyDescription,
}

/// Result type for IDS operations.
pub type IdsResult<T> = std::result::Result<T, IdsError>;
