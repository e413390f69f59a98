//! Registered variables.

use crate::value::Value;
use crate::ValueError;

/// A named, typed slot with a default and usage text.
#[derive(Debug)]
pub struct Variable {
    name: String,
    value: Box<dyn Value>,
    default: Option<String>,
    usage: String,
}

impl Variable {
    pub(crate) fn new(
        name: String,
        value: Box<dyn Value>,
        default: Option<String>,
        usage: String,
    ) -> Self {
        Self {
            name,
            value,
            default,
            usage,
        }
    }

    /// Environment key this variable is read from.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rendered default, if any.
    #[must_use]
    pub fn default_text(&self) -> Option<&str> {
        self.default.as_deref()
    }

    /// Usage text as registered.
    #[must_use]
    pub fn usage(&self) -> &str {
        &self.usage
    }

    pub(crate) fn set(&self, raw: &str) -> Result<(), ValueError> {
        self.value.set(raw)
    }
}
