//! envset - resolve declared variables against the process environment
//!
//! Prints `NAME=VALUE` for every declared variable, or the usage text.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use envset::config::{write_values, Declaration, Kind, Settings};
use envset::observability::init_tracing;
use envset::{environ, Error, ErrorHandling, Lookup, ParseError, Result};

/// Resolve typed variables from the environment
#[derive(Parser, Debug)]
#[command(name = "envset")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Declare a string variable as NAME or NAME=DEFAULT
    #[arg(short, long = "string", value_name = "NAME[=DEFAULT]")]
    strings: Vec<String>,

    /// Declare an integer variable as NAME or NAME=DEFAULT
    #[arg(short, long = "int", value_name = "NAME[=DEFAULT]")]
    ints: Vec<String>,

    /// Usage text for a declared variable as NAME=TEXT (repeatable)
    #[arg(short = 'u', long = "usage-text", value_name = "NAME=TEXT")]
    usage_texts: Vec<String>,

    /// Name shown in the usage header
    #[arg(short, long, default_value = "")]
    name: String,

    /// What to do on a malformed value (continue, exit, panic)
    #[arg(long, env = "ENVSET_ON_ERROR", default_value = "continue")]
    on_error: ErrorHandling,

    /// Require the key to equal the name instead of prefix matching
    #[arg(long)]
    exact: bool,

    /// Print the usage text instead of resolving
    #[arg(long)]
    usage: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "ENVSET_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    /// Enable JSON logging output
    #[arg(long, env = "ENVSET_LOG_JSON")]
    log_json: bool,
}

impl Cli {
    fn settings(&self) -> Result<Settings> {
        let mut declarations = Vec::with_capacity(self.strings.len() + self.ints.len());
        for spec in &self.strings {
            declarations.push(Declaration::parse(Kind::String, spec)?);
        }
        for spec in &self.ints {
            declarations.push(Declaration::parse(Kind::Int, spec)?);
        }

        let usage_texts = self
            .usage_texts
            .iter()
            .map(|spec| {
                spec.split_once('=')
                    .map(|(name, text)| (name.to_string(), text.to_string()))
                    .ok_or_else(|| Error::config(format!("usage text '{spec}' is not NAME=TEXT")))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Settings {
            name: self.name.clone(),
            error_handling: self.on_error,
            lookup: if self.exact {
                Lookup::ExactKey
            } else {
                Lookup::Prefix
            },
            log_level: self.log_level.clone(),
            declarations,
            usage_texts,
        })
    }
}

fn run(cli: &Cli) -> Result<()> {
    let settings = cli.settings()?;
    tracing::debug!(?settings, "Settings loaded");

    let (mut set, bound) = settings.build()?;

    let mut stdout = std::io::stdout().lock();

    if cli.usage {
        stdout.write_all(set.usage().as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }

    set.parse(environ())?;

    write_values(&mut stdout, &bound)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.log_json);

    tracing::debug!("envset v{} starting", env!("CARGO_PKG_VERSION"));

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::Parse(err)) => {
            eprintln!("{err}");
            ExitCode::from(ParseError::EXIT_CODE)
        }
        Err(err) => {
            eprintln!("envset: {err}");
            ExitCode::FAILURE
        }
    }
}
