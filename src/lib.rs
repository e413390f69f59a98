//! envset
//!
//! Typed configuration variables populated from the process environment.
//!
//! Register variables with a default and a usage string, then fill them in a
//! single pass from a list of `KEY=VALUE` entries:
//!
//! ```
//! use envset::{ErrorHandling, VariableSet};
//!
//! let mut set = VariableSet::new("server", ErrorHandling::ContinueOnError);
//! let host = set.string("HOST", "127.0.0.1", "address to bind");
//! let port = set.int("PORT", 8080, "port to listen on");
//!
//! set.parse(["PORT=9090"]).unwrap();
//!
//! assert_eq!(host.get(), "127.0.0.1");
//! assert_eq!(port.get(), 9090);
//! ```
//!
//! The package-level [`string`], [`int`] and [`parse`] functions work on a
//! process-wide default set that reads the real environment and exits with
//! status 2 on a malformed value.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod global;
pub mod observability;
pub mod set;
pub mod value;
pub mod variable;

pub use error::{Error, ParseError, Result, ValueError};
pub use global::{environ, int, parse, string, usage, var, with_default};
pub use set::{ErrorHandling, Lookup, UsageFn, VariableSet};
pub use value::{EnvValue, Handle, Value};
pub use variable::Variable;
