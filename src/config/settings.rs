//! Settings and variable declarations for the `envset` binary.

use std::collections::BTreeSet;
use std::io::Write;

use crate::observability::{is_valid_level, LOG_LEVELS};
use crate::value::{EnvValue, Handle};
use crate::{Error, ErrorHandling, Lookup, Result, VariableSet};

/// Type of a declared variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Stored verbatim.
    String,
    /// 32-bit signed integer.
    Int,
}

/// A variable declared on the command line as `NAME` or `NAME=DEFAULT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Variable type.
    pub kind: Kind,
    /// Environment key.
    pub name: String,
    /// Default as written; `0` for an int declared without one.
    pub default: String,
}

impl Declaration {
    /// Parse a `NAME[=DEFAULT]` declaration.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or an int default is malformed.
    pub fn parse(kind: Kind, spec: &str) -> Result<Self> {
        let (name, default) = match spec.split_once('=') {
            Some((name, default)) => (name, Some(default)),
            None => (spec, None),
        };

        if name.is_empty() {
            return Err(Error::config(format!(
                "declaration '{spec}' has an empty name"
            )));
        }

        let default = match (kind, default) {
            (Kind::String, default) => default.unwrap_or_default().to_string(),
            (Kind::Int, None) => "0".to_string(),
            (Kind::Int, Some(default)) => {
                i32::parse_env(default)
                    .map_err(|e| Error::config(format!("default for {name}: {e}")))?;
                default.to_string()
            }
        };

        Ok(Self {
            kind,
            name: name.to_string(),
            default,
        })
    }
}

/// Handle to a variable registered from a [`Declaration`].
#[derive(Debug, Clone)]
pub enum Bound {
    /// String variable.
    String(Handle<String>),
    /// Integer variable.
    Int(Handle<i32>),
}

impl Bound {
    /// Current value as text.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::String(handle) => handle.get(),
            Self::Int(handle) => handle.get().to_string(),
        }
    }
}

/// Write one `NAME=VALUE` line per bound variable.
///
/// # Errors
///
/// Returns an I/O error if `out` cannot be written, e.g. a closed pipe.
pub fn write_values<W: Write>(out: &mut W, bound: &[(String, Bound)]) -> Result<()> {
    for (name, value) in bound {
        writeln!(out, "{name}={}", value.render())?;
    }
    out.flush()?;
    Ok(())
}

/// Settings for one run of the binary.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Display name printed in the usage header.
    pub name: String,
    /// What to do when a value fails to parse.
    pub error_handling: ErrorHandling,
    /// How entries are matched to names.
    pub lookup: Lookup,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// Declared variables.
    pub declarations: Vec<Declaration>,
    /// Usage text per variable name.
    pub usage_texts: Vec<(String, String)>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            name: String::new(),
            error_handling: ErrorHandling::ContinueOnError,
            lookup: Lookup::Prefix,
            log_level: "warn".to_string(),
            declarations: Vec::new(),
            usage_texts: Vec::new(),
        }
    }
}

impl Settings {
    /// Validate settings.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown log level, a name declared twice, or
    /// usage text for an undeclared name.
    pub fn validate(&self) -> Result<()> {
        if !is_valid_level(&self.log_level) {
            return Err(Error::config(format!(
                "invalid log level '{}', must be one of: {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }

        let mut seen = BTreeSet::new();
        for declaration in &self.declarations {
            if !seen.insert(declaration.name.as_str()) {
                return Err(Error::config(format!(
                    "variable {} is declared more than once",
                    declaration.name
                )));
            }
        }

        if let Some((name, _)) = self
            .usage_texts
            .iter()
            .find(|(name, _)| !seen.contains(name.as_str()))
        {
            return Err(Error::config(format!(
                "usage text given for undeclared variable {name}"
            )));
        }

        Ok(())
    }

    /// Build a set holding every declared variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings are invalid.
    pub fn build(&self) -> Result<(VariableSet, Vec<(String, Bound)>)> {
        self.validate()?;

        let mut set = VariableSet::new(self.name.clone(), self.error_handling);
        set.set_lookup(self.lookup);

        let mut bound = Vec::with_capacity(self.declarations.len());
        for declaration in &self.declarations {
            let usage = self.usage_for(&declaration.name);
            let handle = match declaration.kind {
                Kind::String => {
                    Bound::String(set.string(&declaration.name, &declaration.default, usage))
                }
                Kind::Int => {
                    let default = i32::parse_env(&declaration.default)
                        .map_err(|e| Error::config(format!("default for {}: {e}", declaration.name)))?;
                    Bound::Int(set.int(&declaration.name, default, usage))
                }
            };
            bound.push((declaration.name.clone(), handle));
        }

        bound.sort_by(|a, b| a.0.cmp(&b.0));
        Ok((set, bound))
    }

    fn usage_for(&self, name: &str) -> String {
        self.usage_texts
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, text)| text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
