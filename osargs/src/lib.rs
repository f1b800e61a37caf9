//! Command line argument matching.
//!
//! This crate matches the raw arguments of a process against flags declared
//! by the caller. Queries report which flags were present and the values
//! paired with them, and mark the arguments they used so that later queries
//! and [`Arguments::unconsumed`] only see what is left.
//!
//! ```
//! use osargs::{Arguments, Delimiter};
//!
//! let mut args = Arguments::new(["--verbose", "--out=a.txt", "input"]);
//!
//! let verbose = args.match_flags(&["-v", "--verbose"]);
//! let out = args.match_pairs(&Delimiter::new(false, false, ["="]), &["-o", "--out"]);
//!
//! assert!(verbose.is_present());
//! assert_eq!(out.first(), Some("a.txt"));
//! assert_eq!(args.unconsumed(), vec!["input"]);
//! ```
//!
//! Values are never interpreted: everything stays text, and a missing match
//! is an empty [`MatchResult`] rather than an error.

mod arguments;
mod delimiter;
mod error;
mod result;

pub use arguments::Arguments;
pub use delimiter::Delimiter;
pub use error::{ArgsError, Result};
pub use result::MatchResult;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
