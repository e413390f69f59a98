//! Error types and Result aliases for envset.
//!
//! Coercion failures surface as [`ValueError`], get wrapped with the failing
//! variable's name as [`ParseError`], and reach binaries through [`Error`].

use std::num::ParseIntError;

use thiserror::Error;

/// Result type alias using envset's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for envset operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A registered variable could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Invalid declaration or settings.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A raw string could not be converted into a variable's type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// Not a base-10 integer in the 32-bit signed range.
    #[error("invalid integer {raw:?}: {source}")]
    InvalidInt {
        raw: String,
        #[source]
        source: ParseIntError,
    },

    /// Rejected by a user-defined value type.
    #[error("invalid value {raw:?}: {reason}")]
    Invalid { raw: String, reason: String },
}

/// Failure to set the variable `name` from its environment entry.
///
/// Rendered as `parse error <name>: <message>`, which is also the line
/// written to the output sink under [`ErrorHandling::ExitOnError`].
///
/// [`ErrorHandling::ExitOnError`]: crate::ErrorHandling::ExitOnError
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("parse error {name}: {source}")]
pub struct ParseError {
    /// Name of the variable that failed.
    pub name: String,
    /// Underlying coercion failure.
    #[source]
    pub source: ValueError,
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl ValueError {
    /// Create a rejection for a custom value type.
    pub fn invalid(raw: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            raw: raw.into(),
            reason: reason.into(),
        }
    }
}

impl ParseError {
    /// Process exit status used when a parse failure terminates the program.
    pub const EXIT_CODE: u8 = 2;

    /// Wrap a coercion failure with the variable name.
    pub fn new(name: impl Into<String>, source: ValueError) -> Self {
        Self {
            name: name.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests;
