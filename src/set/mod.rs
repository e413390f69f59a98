//! The variable registry.
//!
//! A [`VariableSet`] owns every [`Variable`] registered on it, decides how
//! environment entries are matched to names ([`Lookup`]) and what happens when
//! a value cannot be parsed ([`ErrorHandling`]).

mod parse;
mod usage;

use std::collections::BTreeMap;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::value::{EnvValue, Handle, TypedValue};
use crate::variable::Variable;

/// Replacement for [`VariableSet::default_usage`].
pub type UsageFn = Box<dyn Fn(&VariableSet) -> String + Send>;

/// What [`VariableSet::parse`] does when a value fails to parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorHandling {
    /// Return the first error to the caller. Later variables are not visited.
    #[default]
    ContinueOnError,
    /// Write the error to the output sink and exit with status 2.
    ExitOnError,
    /// Panic with the error.
    PanicOnError,
}

impl fmt::Display for ErrorHandling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ContinueOnError => "continue",
            Self::ExitOnError => "exit",
            Self::PanicOnError => "panic",
        })
    }
}

impl FromStr for ErrorHandling {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "continue" => Ok(Self::ContinueOnError),
            "exit" => Ok(Self::ExitOnError),
            "panic" => Ok(Self::PanicOnError),
            other => Err(format!(
                "invalid error handling '{other}', must be one of: continue, exit, panic"
            )),
        }
    }
}

/// How an environment entry is matched to a variable name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Lookup {
    /// The entry only has to start with the name, so `FOO` also matches
    /// `FOOBAR=1`.
    #[default]
    Prefix,
    /// The key before the first `=` must equal the name.
    ExactKey,
}

/// A named collection of variables with its own error handling.
///
/// Names must be unique within a set. Registering a name twice panics.
pub struct VariableSet {
    name: String,
    variables: BTreeMap<String, Variable>,
    error_handling: ErrorHandling,
    lookup: Lookup,
    output: Option<Box<dyn Write + Send>>,
    usage: Option<UsageFn>,
}

impl fmt::Debug for VariableSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariableSet")
            .field("name", &self.name)
            .field("variables", &self.variables)
            .field("error_handling", &self.error_handling)
            .field("lookup", &self.lookup)
            .field("output", &self.output.is_some())
            .field("usage", &self.usage.is_some())
            .finish()
    }
}

impl Default for VariableSet {
    fn default() -> Self {
        Self::new("", ErrorHandling::default())
    }
}

impl VariableSet {
    /// Create an empty set.
    ///
    /// A non-empty `name` is printed as the header of the usage text.
    pub fn new(name: impl Into<String>, error_handling: ErrorHandling) -> Self {
        Self {
            name: name.into(),
            variables: BTreeMap::new(),
            error_handling,
            lookup: Lookup::default(),
            output: None,
            usage: None,
        }
    }

    /// Display name of the set.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Configured error handling.
    #[must_use]
    pub const fn error_handling(&self) -> ErrorHandling {
        self.error_handling
    }

    /// Configured lookup mode.
    #[must_use]
    pub const fn lookup(&self) -> Lookup {
        self.lookup
    }

    /// Change how entries are matched to names.
    pub fn set_lookup(&mut self, lookup: Lookup) -> &mut Self {
        self.lookup = lookup;
        self
    }

    /// Destination for error messages under [`ErrorHandling::ExitOnError`].
    /// Standard error is used when unset.
    pub fn set_output(&mut self, output: impl Write + Send + 'static) -> &mut Self {
        self.output = Some(Box::new(output));
        self
    }

    /// Replace the usage renderer.
    pub fn set_usage<F>(&mut self, usage: F) -> &mut Self
    where
        F: Fn(&Self) -> String + Send + 'static,
    {
        self.usage = Some(Box::new(usage));
        self
    }

    /// Define a string variable.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty or already defined in this set.
    pub fn string(
        &mut self,
        name: impl Into<String>,
        default: impl Into<String>,
        usage: impl Into<String>,
    ) -> Handle<String> {
        self.var(name, default.into(), usage)
    }

    /// Define a 32-bit integer variable.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty or already defined in this set.
    pub fn int(
        &mut self,
        name: impl Into<String>,
        default: i32,
        usage: impl Into<String>,
    ) -> Handle<i32> {
        self.var(name, default, usage)
    }

    /// Define a variable of any [`EnvValue`] type.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty or already defined in this set.
    pub fn var<T: EnvValue>(
        &mut self,
        name: impl Into<String>,
        default: T,
        usage: impl Into<String>,
    ) -> Handle<T> {
        let name = name.into();
        assert!(!name.is_empty(), "variable name cannot be empty");
        assert!(
            !self.variables.contains_key(&name),
            "variable {name} is already defined"
        );

        let rendered = default.to_string();
        let value = TypedValue::new(default);
        let handle = value.handle();

        tracing::trace!(set = %self.name, name = %name, kind = T::KIND, "Variable registered");

        let variable = Variable::new(name.clone(), Box::new(value), Some(rendered), usage.into());
        self.variables.insert(name, variable);
        handle
    }

    /// Number of registered variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether no variables are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Whether `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.variables.keys().map(String::as_str)
    }

    /// Registered variables in sorted-name order.
    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.variables.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_set_is_empty() {
        let set = VariableSet::new("test", ErrorHandling::ContinueOnError);
        assert_eq!(set.name(), "test");
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.lookup(), Lookup::Prefix);
    }

    #[test]
    fn test_default_set() {
        let set = VariableSet::default();
        assert_eq!(set.name(), "");
        assert_eq!(set.error_handling(), ErrorHandling::ContinueOnError);
    }

    #[test]
    fn test_registration_returns_default() {
        let mut set = VariableSet::default();
        let s = set.string("HOST", "localhost", "host to bind");
        let i = set.int("PORT", 8080, "port to bind");
        assert_eq!(s.get(), "localhost");
        assert_eq!(i.get(), 8080);
        assert_eq!(set.len(), 2);
        assert!(set.contains("HOST"));
        assert!(!set.contains("HOS"));
    }

    #[test]
    fn test_names_are_sorted() {
        let mut set = VariableSet::default();
        set.int("ZETA", 0, "");
        set.string("ALPHA", "", "");
        set.string("MID", "", "");
        assert_eq!(set.names().collect::<Vec<_>>(), ["ALPHA", "MID", "ZETA"]);
    }

    #[test]
    fn test_variable_metadata() {
        let mut set = VariableSet::default();
        set.int("RETRIES", -1, "retry count");
        let variable = set.variables().next().unwrap();
        assert_eq!(variable.name(), "RETRIES");
        assert_eq!(variable.default_text(), Some("-1"));
        assert_eq!(variable.usage(), "retry count");
    }

    #[test]
    #[should_panic(expected = "variable FOO is already defined")]
    fn test_duplicate_name_panics() {
        let mut set = VariableSet::default();
        set.string("FOO", "a", "");
        set.int("FOO", 1, "");
    }

    #[test]
    #[should_panic(expected = "variable name cannot be empty")]
    fn test_empty_name_panics() {
        let mut set = VariableSet::default();
        set.string("", "a", "");
    }

    #[test]
    fn test_error_handling_from_str() {
        assert_eq!(
            "continue".parse::<ErrorHandling>().unwrap(),
            ErrorHandling::ContinueOnError
        );
        assert_eq!(
            "EXIT".parse::<ErrorHandling>().unwrap(),
            ErrorHandling::ExitOnError
        );
        assert_eq!(
            "Panic".parse::<ErrorHandling>().unwrap(),
            ErrorHandling::PanicOnError
        );
        let err = "ignore".parse::<ErrorHandling>().unwrap_err();
        assert!(err.contains("ignore"));
    }

    #[test]
    fn test_error_handling_display_round_trips() {
        for handling in [
            ErrorHandling::ContinueOnError,
            ErrorHandling::ExitOnError,
            ErrorHandling::PanicOnError,
        ] {
            assert_eq!(handling.to_string().parse::<ErrorHandling>().unwrap(), handling);
        }
    }

    #[test]
    fn test_debug_hides_sinks() {
        let mut set = VariableSet::new("dbg", ErrorHandling::PanicOnError);
        set.set_output(std::io::sink());
        let rendered = format!("{set:?}");
        assert!(rendered.contains("dbg"));
        assert!(rendered.contains("output: true"));
        assert!(rendered.contains("usage: false"));
    }
}
