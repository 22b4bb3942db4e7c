//! memlab CLI

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use memlab::{init_tracing, parse_args, run_session, Command, Console, Style, USAGE};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let color = match parse_args(&args) {
        Ok(Command::Run { color }) => color,
        Ok(Command::Help) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Ok(Command::Version) => {
            println!("memlab {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    let is_tty = io::stdout().is_terminal();
    let style = Style::new(color, is_tty);
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock(), is_tty);

    match run_session(&mut console, style) {
        Ok(summary) => {
            tracing::debug!(
                language = ?summary.language,
                literal = summary.probe.is_literal(),
                "session finished"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!();
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
