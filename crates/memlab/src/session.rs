//! The interactive session script.
//!
//! ```text
//! language ──► intro ──► ENTER ──► examples + value ──► pace ──► report
//! ```

use std::io::{BufRead, Write};

use memlab_literal::{probe, Probe};
use memlab_measure::{fixed_sizes, inspect, Report};

use crate::locale::{Language, LANGUAGE_QUESTION};
use crate::render;
use crate::style::{colors, Style};
use crate::{Console, LabConfig, SessionError};

/// What one session measured.
#[derive(Debug)]
pub struct SessionSummary {
    pub language: Language,
    pub probe: Probe,
    pub report: Report,
}

/// Run the whole script once against `console`.
pub fn run_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    style: Style,
) -> Result<SessionSummary, SessionError> {
    console.clear()?;
    let answer = console.prompt(&style.paint(colors::BOLD, LANGUAGE_QUESTION))?;
    let language = Language::from_answer(&answer);
    tracing::debug!(?language, "language chosen");
    let config = LabConfig::new(language, style);

    console.clear()?;
    render::write_intro(console.out(), &config)?;
    console.prompt(&render::continue_prompt(&config))?;

    console.clear()?;
    let input = console.prompt(&render::input_prompt(&config))?;
    let probed = probe(&input);

    console.pace(&render::pacing_message(&config))?;
    let value = probed.clone().into_value();
    let report = inspect(&value);

    console.clear()?;
    render::write_report(console.out(), &config, &report, fixed_sizes())?;
    writeln!(console.out())?;
    console.out().flush()?;

    Ok(SessionSummary {
        language,
        probe: probed,
        report,
    })
}
