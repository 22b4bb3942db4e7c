//! Command-line arguments.

use thiserror::Error;

use crate::style::ColorMode;

/// What the binary was asked to do.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Run { color: ColorMode },
    Help,
    Version,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CliError {
    #[error("unknown argument '{0}'")]
    UnknownArgument(String),
    #[error("invalid color mode '{0}' (expected auto, always or never)")]
    InvalidColor(String),
}

/// Parse arguments, program name excluded.
///
/// `--help` and `--version` win over anything after them.
pub fn parse_args(args: &[String]) -> Result<Command, CliError> {
    let mut color = ColorMode::default();
    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            other => {
                let Some(mode) = other.strip_prefix("--color=") else {
                    return Err(CliError::UnknownArgument(other.to_string()));
                };
                color = ColorMode::parse(mode)
                    .ok_or_else(|| CliError::InvalidColor(mode.to_string()))?;
            }
        }
    }
    Ok(Command::Run { color })
}

pub const USAGE: &str = "\
Usage: memlab [options]

Interactively measure the shallow and deep memory size of a value.

Options:
  --color=<mode>   Color output: auto, always, never (default: auto)
  -h, --help       Show this help message
  -V, --version    Show version information

Set RUST_LOG (for example RUST_LOG=debug) to log diagnostics to stderr.";
