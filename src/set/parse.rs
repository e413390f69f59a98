//! Resolving registered variables against `KEY=VALUE` entries.

use std::io::Write;

use super::{ErrorHandling, Lookup, VariableSet};
use crate::ParseError;

impl Lookup {
    /// Find the raw value for `name` in `entries`.
    ///
    /// The first matching entry wins. A matched entry without `=` yields an
    /// empty value.
    pub fn find<'a, S: AsRef<str>>(self, entries: &'a [S], name: &str) -> Option<&'a str> {
        entries.iter().map(AsRef::<str>::as_ref).find_map(|entry| {
            let (key, raw) = entry.split_once('=').unwrap_or((entry, ""));
            let matched = match self {
                Self::Prefix => entry.starts_with(name),
                Self::ExactKey => key == name,
            };
            matched.then_some(raw)
        })
    }
}

impl VariableSet {
    /// Parse `entries` into the registered variables, applying the set's
    /// [`ErrorHandling`] on the first failure.
    ///
    /// Variables are visited in sorted-name order. A variable without a
    /// matching entry keeps its current value.
    ///
    /// # Errors
    ///
    /// Under [`ErrorHandling::ContinueOnError`], returns the first
    /// [`ParseError`]; remaining variables are left untouched.
    ///
    /// # Panics
    ///
    /// Under [`ErrorHandling::PanicOnError`], panics on the first failure.
    /// Under [`ErrorHandling::ExitOnError`] the process exits with status 2
    /// instead of returning.
    pub fn parse<I, S>(&mut self, entries: I) -> Result<(), ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries: Vec<S> = entries.into_iter().collect();
        let Err(err) = self.try_parse(&entries) else {
            return Ok(());
        };

        match self.error_handling {
            ErrorHandling::ContinueOnError => Err(err),
            ErrorHandling::ExitOnError => {
                let line = format!("{err}\n");
                match self.output.as_mut() {
                    Some(out) => {
                        let _ = out.write_all(line.as_bytes());
                        let _ = out.flush();
                    }
                    None => {
                        let _ = std::io::stderr().write_all(line.as_bytes());
                    }
                }
                std::process::exit(i32::from(ParseError::EXIT_CODE));
            }
            ErrorHandling::PanicOnError => panic!("{err}"),
        }
    }

    /// Parse `entries` and return the first failure without exiting or
    /// panicking, whatever the configured [`ErrorHandling`].
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`] in sorted-name order.
    pub fn try_parse<S: AsRef<str>>(&self, entries: &[S]) -> Result<(), ParseError> {
        let _span = tracing::debug_span!("parse", set = %self.name, entries = entries.len())
            .entered();

        for (name, variable) in &self.variables {
            let Some(raw) = self.lookup.find(entries, name) else {
                tracing::trace!(name = %name, "No entry, keeping current value");
                continue;
            };

            if let Err(source) = variable.set(raw) {
                tracing::warn!(name = %name, error = %source, "Failed to parse variable");
                return Err(ParseError::new(name.clone(), source));
            }

            tracing::debug!(name = %name, "Variable set from environment");
        }

        Ok(())
    }
}
