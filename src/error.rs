use thiserror::Error;

use crate::ty::IntType;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("type mismatch: `{lhs}` and `{rhs}`")]
    TypeMismatch { lhs: IntType, rhs: IntType },
    #[error("division by zero")]
    DivisionByZero,
    #[error("invalid width: {0}")]
    InvalidWidth(WidthError),
    #[error("invalid shift amount {0}")]
    InvalidShiftAmount(i64),
    #[error("bit index {index} out of range for a {bits}-bit value")]
    IndexOutOfRange { index: u32, bits: u32 },
    #[error("malformed integer literal {literal:?}: {reason}")]
    ParseError { literal: String, reason: &'static str },
    #[error("value out of range for `{ty}`")]
    ValueOutOfRange { ty: IntType },
    #[error("`{op}` requires an unsigned operand, found `{ty}`")]
    RequiresUnsigned { op: &'static str, ty: IntType },
}

/// Detail carried by [`Error::InvalidWidth`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WidthError {
    #[error("{0} is not one of 8, 16, .., 256")]
    Unsupported(u32),
    #[error("expected {expected} words, found {found}")]
    WordCount { expected: usize, found: usize },
    #[error("expected {expected} bytes, found {found}")]
    ByteCount { expected: usize, found: usize },
    #[error("cannot widen `{from}` to {to} bits")]
    Widen { from: IntType, to: u32 },
    #[error("cannot narrow `{from}` to {to} bits")]
    Narrow { from: IntType, to: u32 },
}

impl Error {
    pub(crate) fn parse(literal: &str, reason: &'static str) -> Self {
        Error::ParseError {
            literal: literal.to_owned(),
            reason,
        }
    }

    pub(crate) fn check_same(lhs: IntType, rhs: IntType) -> Result<()> {
        if lhs != rhs {
            return Err(Error::TypeMismatch { lhs, rhs });
        }
        Ok(())
    }
}
