//! The process-wide default set.
//!
//! The default set has no name and uses [`ErrorHandling::ExitOnError`]. It is
//! created on first use; programs that want their own policy can build a
//! [`VariableSet`] instead.

use once_cell::sync::Lazy;
use parking_lot::Mutex;

use crate::value::{EnvValue, Handle};
use crate::{ErrorHandling, VariableSet};

static DEFAULT: Lazy<Mutex<VariableSet>> =
    Lazy::new(|| Mutex::new(VariableSet::new("", ErrorHandling::ExitOnError)));

/// Run `f` with exclusive access to the default set.
///
/// The default set stays locked while `f` runs. Calling [`string`], [`int`],
/// [`var`], [`parse`], [`usage`] or `with_default` from inside `f` deadlocks;
/// use the `&mut VariableSet` passed to `f` instead.
pub fn with_default<R>(f: impl FnOnce(&mut VariableSet) -> R) -> R {
    f(&mut DEFAULT.lock())
}

/// Define a string variable on the default set.
///
/// # Panics
///
/// Panics if `name` is empty or already defined.
pub fn string(
    name: impl Into<String>,
    default: impl Into<String>,
    usage: impl Into<String>,
) -> Handle<String> {
    DEFAULT.lock().string(name, default, usage)
}

/// Define a 32-bit integer variable on the default set.
///
/// # Panics
///
/// Panics if `name` is empty or already defined.
pub fn int(name: impl Into<String>, default: i32, usage: impl Into<String>) -> Handle<i32> {
    DEFAULT.lock().int(name, default, usage)
}

/// Define a variable of any [`EnvValue`] type on the default set.
///
/// # Panics
///
/// Panics if `name` is empty or already defined.
pub fn var<T: EnvValue>(name: impl Into<String>, default: T, usage: impl Into<String>) -> Handle<T> {
    DEFAULT.lock().var(name, default, usage)
}

/// Parse the process environment into the default set.
///
/// Must be called after all variables are defined and before they are read.
/// A parse failure prints `parse error <name>: <message>` to standard error
/// and exits with status 2, unless the default set's output was redirected.
pub fn parse() {
    let entries = environ();
    let _ = DEFAULT.lock().parse(entries);
}

/// Usage text of the default set.
#[must_use]
pub fn usage() -> String {
    DEFAULT.lock().usage()
}

/// The process environment as `KEY=VALUE` strings.
///
/// Non-UTF-8 keys and values are converted lossily.
#[must_use]
pub fn environ() -> Vec<String> {
    std::env::vars_os()
        .map(|(key, value)| format!("{}={}", key.to_string_lossy(), value.to_string_lossy()))
        .collect()
}
