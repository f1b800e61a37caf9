//! Separator rules between a flag and its value.

use serde::{Deserialize, Serialize};

/// Describes how the value of a flag is separated from the flag itself.
///
/// A delimiter works in one of two modes:
///
/// * **blank**: the value is the next argument (`-o file.txt`). Values
///   embedded in the same argument are still recognized through `tokens`.
/// * **embedded**: the value lives in the same argument, after one of the
///   separator `tokens` (`--opt=value`) or, when `empty` is set, directly
///   after the flag (`--optvalue`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Delimiter {
    /// Accept the following argument as the value
    pub blank: bool,

    /// Accept a value that follows the flag with no separator
    pub empty: bool,

    /// Candidate separators, tried in order
    pub tokens: Vec<String>,
}

impl Delimiter {
    /// Create a new delimiter.
    pub fn new<I, S>(blank: bool, empty: bool, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            blank,
            empty,
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.blank
    }

    pub fn allows_empty(&self) -> bool {
        self.empty
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Whether the delimiter can match anything without a following argument.
    pub(crate) fn is_embedded(&self) -> bool {
        !self.tokens.is_empty() || self.empty
    }

    /// Find the separator that `rest` starts with.
    ///
    /// Tokens are tried in declared order and the first prefix wins. When no
    /// token matches, the empty separator `""` is returned if the delimiter
    /// allows values directly after the flag.
    pub fn matching_token(&self, rest: &str) -> Option<&str> {
        self.tokens
            .iter()
            .map(String::as_str)
            .find(|token| rest.starts_with(token))
            .or(if self.empty { Some("") } else { None })
    }
}
