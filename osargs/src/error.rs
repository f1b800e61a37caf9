//! Error types for building an argument set.
//!
//! Matching itself never fails; the only fallible step is reading the
//! process arguments, which the operating system does not guarantee to be
//! valid Unicode.

use thiserror::Error;

/// Error returned by the strict constructors of [`Arguments`](crate::Arguments).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgsError {
    /// An argument could not be decoded as Unicode
    #[error("Argument {index} is not valid Unicode: {lossy}")]
    NonUnicode {
        /// Position of the argument, not counting the program name
        index: usize,
        /// The argument with invalid sequences replaced by U+FFFD
        lossy: String,
    },
}

/// Result type alias for argument set construction
pub type Result<T> = std::result::Result<T, ArgsError>;
