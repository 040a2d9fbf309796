//! Core definitions shared by the lazyrange crates: the error type, the
//! `Result` alias and the argument verification macro.

pub mod error;
pub mod result;

pub use error::{Error, ErrorKind};
pub use result::Result;
