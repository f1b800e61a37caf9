//! The argument set and its matching operations.
//!
//! Every argument carries a consumed marker. A successful match marks the
//! arguments it used, and later queries skip them, so successive calls
//! partition the command line into parsed and unparsed arguments.

use std::env;
use std::ffi::OsString;

use tracing::{debug, trace, warn};

use crate::delimiter::Delimiter;
use crate::error::{ArgsError, Result};
use crate::result::MatchResult;

/// A single command line argument and whether a match has used it
#[derive(Debug, Clone, PartialEq, Eq)]
struct Argument {
    value: String,
    consumed: bool,
}

/// How a pair query matched one argument
enum Pair {
    /// The argument is the flag and nothing else
    Bare,
    /// The value follows the flag inside the same argument
    Embedded(String),
}

/// Ordered command line arguments, matched greedily by flag queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    args: Vec<Argument>,
}

impl Arguments {
    /// Create an argument set from the given arguments, all unconsumed.
    ///
    /// The program name must not be part of `args`.
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<Argument> = args
            .into_iter()
            .map(|value| Argument {
                value: value.into(),
                consumed: false,
            })
            .collect();

        debug!("Created argument set with {} arguments", args.len());
        Self { args }
    }

    /// Create an argument set from the arguments of the current process.
    ///
    /// The program name is dropped. Arguments that are not valid Unicode are
    /// converted lossily; use [`Arguments::try_from_env`] to reject them.
    pub fn from_env() -> Self {
        let args = env::args_os()
            .skip(1)
            .enumerate()
            .map(|(index, arg)| {
                arg.into_string().unwrap_or_else(|raw| {
                    let lossy = raw.to_string_lossy().into_owned();
                    warn!("Argument {} is not valid Unicode, using {:?}", index, lossy);
                    lossy
                })
            });

        Self::new(args)
    }

    /// Create an argument set from the arguments of the current process,
    /// failing on the first argument that is not valid Unicode.
    pub fn try_from_env() -> Result<Self> {
        Self::try_from_os_args(env::args_os().skip(1))
    }

    /// Create an argument set from raw OS strings, program name excluded.
    pub fn try_from_os_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let args = args
            .into_iter()
            .enumerate()
            .map(|(index, arg)| {
                arg.into_string().map_err(|raw| ArgsError::NonUnicode {
                    index,
                    lossy: raw.to_string_lossy().into_owned(),
                })
            })
            .collect::<Result<Vec<String>>>()?;

        Ok(Self::new(args))
    }

    /// Number of arguments, consumed or not
    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// All arguments in their original order
    pub fn tokens(&self) -> impl Iterator<Item = &str> + '_ {
        self.args.iter().map(|arg| arg.value.as_str())
    }

    /// Whether the argument at `index` has been consumed, `None` if out of range
    pub fn is_consumed(&self, index: usize) -> Option<bool> {
        self.args.get(index).map(|arg| arg.consumed)
    }

    pub fn consumed_count(&self) -> usize {
        self.args.iter().filter(|arg| arg.consumed).count()
    }

    /// Match arguments that are equal to one of `flags`.
    ///
    /// Every unconsumed argument equal to a flag is consumed and returned, in
    /// argument order. Returns an empty result when nothing matches.
    pub fn match_flags<F: AsRef<str>>(&mut self, flags: &[F]) -> MatchResult {
        let mut result = MatchResult::new();
        if self.args.is_empty() || flags.is_empty() {
            return result;
        }

        for (index, arg) in self.args.iter_mut().enumerate() {
            if arg.consumed {
                continue;
            }
            if let Some(flag) = flags.iter().map(|flag| flag.as_ref()).find(|flag| *flag == arg.value) {
                trace!(index, flag, "Matched flag");
                arg.consumed = true;
                result.push(arg.value.as_str());
            }
        }

        debug!("Flag query matched {} of {} arguments", result.count(), self.args.len());
        result
    }

    /// Match arguments that start with one of `flags` and extract their values.
    ///
    /// With a blank delimiter, an argument equal to the flag takes the next
    /// argument as its value, whatever that argument's state, and consumes
    /// it. A flag in last position gets the empty string. Otherwise an
    /// argument equal to the flag has the empty string as its value.
    ///
    /// An argument longer than the flag matches when the rest starts with a
    /// separator of the delimiter; the value is what follows the separator.
    /// If it does not, the next flag is tried.
    pub fn match_pairs<F: AsRef<str>>(&mut self, delimiter: &Delimiter, flags: &[F]) -> MatchResult {
        let mut result = MatchResult::new();
        if self.args.is_empty() || flags.is_empty() {
            return result;
        }
        if !delimiter.is_blank() && !delimiter.is_embedded() {
            debug!("Delimiter accepts no separator, pair query skipped");
            return result;
        }

        let mut index = 0;
        while index < self.args.len() {
            let arg = &self.args[index];
            let found = if arg.consumed {
                None
            } else {
                find_pair(&arg.value, delimiter, flags)
            };

            if let Some((flag, pair)) = found {
                let flag_index = index;
                self.args[index].consumed = true;

                let value = match pair {
                    Pair::Embedded(value) => value,
                    Pair::Bare if delimiter.is_blank() => match self.args.get_mut(index + 1) {
                        Some(next) => {
                            next.consumed = true;
                            index += 1;
                            next.value.clone()
                        }
                        None => String::new(),
                    },
                    Pair::Bare => String::new(),
                };

                trace!(index = flag_index, flag, value = %value, "Matched flag/value pair");
                result.push(value);
            }

            index += 1;
        }

        debug!(
            "Pair query matched {} values, {} of {} arguments consumed",
            result.count(),
            self.consumed_count(),
            self.args.len()
        );
        result
    }

    /// Arguments not consumed by any match so far, in original order.
    pub fn unconsumed(&self) -> Vec<String> {
        self.unconsumed_iter().map(str::to_string).collect()
    }

    /// Lazy form of [`Arguments::unconsumed`]
    pub fn unconsumed_iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.args
            .iter()
            .filter(|arg| !arg.consumed)
            .map(|arg| arg.value.as_str())
    }
}

/// Find the first flag, in supplied order, that `arg` pairs with.
fn find_pair<'f, F: AsRef<str>>(arg: &str, delimiter: &Delimiter, flags: &'f [F]) -> Option<(&'f str, Pair)> {
    flags.iter().map(|flag| flag.as_ref()).find_map(|flag| {
        let rest = arg.strip_prefix(flag)?;
        if rest.is_empty() {
            return Some((flag, Pair::Bare));
        }
        let token = delimiter.matching_token(rest)?;
        Some((flag, Pair::Embedded(rest[token.len()..].to_string())))
    })
}

impl From<Vec<String>> for Arguments {
    fn from(args: Vec<String>) -> Self {
        Self::new(args)
    }
}

impl<S: Into<String>> FromIterator<S> for Arguments {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
