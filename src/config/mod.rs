//! Configuration for the `envset` binary.
//!
//! Settings come from:
//! - Command-line arguments (highest priority)
//! - `ENVSET_*` environment variables
//! - Built-in defaults (lowest priority)

mod settings;

pub use settings::{write_values, Bound, Declaration, Kind, Settings};
