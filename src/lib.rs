pub mod cli;
pub mod codegen;
pub mod conformance;
pub mod error;
pub mod fixed;
pub mod harness;
pub mod int;
pub mod ty;

pub(crate) mod words;

pub use error::{Error, Result, WidthError};
pub use fixed::types::*;
pub use fixed::FixedInt;
pub use int::Int;
pub use ty::{IntType, Signedness};
