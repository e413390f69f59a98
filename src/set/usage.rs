//! Usage text.

use std::fmt::Write as _;

use super::VariableSet;

impl VariableSet {
    /// Render the usage text, using the renderer installed with
    /// [`VariableSet::set_usage`] if there is one.
    #[must_use]
    pub fn usage(&self) -> String {
        self.usage
            .as_ref()
            .map_or_else(|| self.default_usage(), |render| render(self))
    }

    /// Built-in usage text.
    ///
    /// ```text
    /// Usage of <set name>
    ///   <NAME>: default(<default>)
    ///     <usage line>
    /// ```
    ///
    /// The header is omitted for an unnamed set.
    #[must_use]
    pub fn default_usage(&self) -> String {
        let mut out = String::new();

        if !self.name.is_empty() {
            let _ = writeln!(out, "Usage of {}", self.name);
        }

        for variable in self.variables.values() {
            match variable.default_text() {
                Some(default) => {
                    let _ = writeln!(out, "  {}: default({default})", variable.name());
                }
                None => {
                    let _ = writeln!(out, "  {}:", variable.name());
                }
            }

            for line in variable.usage().split('\n') {
                let _ = writeln!(out, "    {line}");
            }
        }

        out
    }
}
