#[cfg(feature = "certora")]
mod certora;
pub mod error;
pub mod number;

use std::fmt::Debug;
use std::ops::Add;

pub use error::{Error, Result};
pub use number::Number;

/// Adds a fixed constant to any number it is applied to.
/// The constant is bound at construction and never changes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ConstAdder<C> {
    constant: C,
}

impl<C: Copy + Debug> ConstAdder<C> {
    /// Create an adder for the given constant. Any value is accepted.
    pub fn new(constant: C) -> Self {
        tracing::debug!(constant = ?constant, "created const adder");
        ConstAdder { constant }
    }

    pub fn constant(&self) -> C {
        self.constant
    }

    /// Returns `n + constant`, with the native `Add` semantics of the operand type.
    pub fn apply<N>(&self, n: N) -> <N as Add<C>>::Output
    where
        N: Add<C>,
    {
        n + self.constant
    }
}

impl ConstAdder<Number> {
    /// Parses `operand` as a number and adds the constant to it.
    ///
    /// Fails with [`Error::InvalidOperand`] when `operand` is not numeric,
    /// or is integer text outside the `i64` range.
    ///
    /// # Panics
    ///
    /// Integer + integer uses native `i64` addition, so an overflowing sum panics
    /// in debug builds and wraps in release builds, e.g. `try_apply("9223372036854775807")`
    /// on a constant of `1`.
    ///
    /// ```
    /// use addconst::{ConstAdder, Number};
    ///
    /// let add = ConstAdder::new(Number::from(1.5));
    /// assert_eq!(add.try_apply("2").unwrap(), Number::Float(3.5));
    /// assert!(add.try_apply("two").is_err());
    /// ```
    pub fn try_apply(&self, operand: &str) -> Result<Number> {
        let n: Number = operand.parse().inspect_err(|err| {
            tracing::debug!(error = %err, "rejected operand");
        })?;
        Ok(self.apply(n))
    }
}
