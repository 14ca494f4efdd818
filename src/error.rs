//! Error types for constant addition.

use thiserror::Error;

/// Errors from applying a constant to an operand.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unsupported operand for addition: {operand:?}")]
    InvalidOperand { operand: String },
}

pub type Result<T> = std::result::Result<T, Error>;
