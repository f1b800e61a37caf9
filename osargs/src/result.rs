//! Values produced by a single match call.

use std::ops::Index;
use std::slice;
use std::vec;

use serde::{Deserialize, Serialize};

/// Ordered values matched by one query.
///
/// For flag queries the values are the flag arguments themselves, for pair
/// queries they are the extracted values. The result owns its strings and
/// does not borrow from the [`Arguments`](crate::Arguments) it came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchResult {
    values: Vec<String>,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, value: impl Into<String>) {
        self.values.push(value.into());
    }

    /// True if at least one value was matched
    pub fn is_present(&self) -> bool {
        !self.values.is_empty()
    }

    /// Number of matched values
    pub fn count(&self) -> usize {
        self.values.len()
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn first(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    /// The last value, which is what most programs use when a flag repeats
    pub fn last(&self) -> Option<&str> {
        self.values.last().map(String::as_str)
    }

    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.values.iter()
    }

    pub fn into_values(self) -> Vec<String> {
        self.values
    }
}

impl From<Vec<String>> for MatchResult {
    fn from(values: Vec<String>) -> Self {
        Self { values }
    }
}

impl Index<usize> for MatchResult {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.values[index]
    }
}

impl IntoIterator for MatchResult {
    type Item = String;
    type IntoIter = vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a MatchResult {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
