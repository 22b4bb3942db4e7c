//! memlab: an interactive look at how much memory a value takes.
//!
//! The user picks a language, reads a short introduction, and types one
//! value. The value is parsed as a literal when possible, wrapped in seven
//! derived containers, and each container's shallow and deep size is shown
//! in a table.
//!
//! The library half exists so the whole session can run against in-memory
//! input and output; `main.rs` only wires it to the real terminal.

mod cli;
mod config;
mod console;
mod error;
mod locale;
mod render;
mod session;
mod style;
mod tracing_setup;

pub use cli::{parse_args, CliError, Command, USAGE};
pub use config::LabConfig;
pub use console::{Console, PACE_DOTS, PACE_STEP};
pub use error::SessionError;
pub use locale::{Language, TextBundle, ENGLISH, LANGUAGE_QUESTION, PORTUGUESE};
pub use render::{format_row, RULE_WIDTH};
pub use session::{run_session, SessionSummary};
pub use style::{colors, ColorMode, Style, CLEAR_SCREEN};
pub use tracing_setup::init_tracing;
