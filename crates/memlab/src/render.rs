//! Screen text for each step of the session.

use std::io::{self, Write};

use memlab_measure::{FixedSizes, NotApplicable, Outcome, Report, Row};

use crate::style::colors;
use crate::LabConfig;

/// Width of the table rules.
pub const RULE_WIDTH: usize = 75;

/// Example literals with their colors, in the order of
/// `TextBundle::example_names`.
const EXAMPLES: [(&str, &str); 5] = [
    ("(10, 200)", colors::GREEN),
    ("'nome'", colors::CYAN),
    ("[1, 2, 3]", colors::YELLOW),
    ("2506", colors::RED),
    ("1.89", colors::MAGENTA),
];
const EXAMPLE_COLUMN: usize = 11;

pub fn write_intro<W: Write>(out: &mut W, config: &LabConfig) -> io::Result<()> {
    let style = config.style;
    writeln!(out, "{}", style.paint(colors::YELLOW, config.bundle.title))?;
    writeln!(out)?;
    writeln!(out, "{}", style.paint(colors::WHITE, config.bundle.narrative))
}

pub fn continue_prompt(config: &LabConfig) -> String {
    format!(
        "\n{}",
        config.style.paint(colors::YELLOW, config.bundle.continue_prompt)
    )
}

/// The examples block ending in the input label.
pub fn input_prompt(config: &LabConfig) -> String {
    let style = config.style;
    let bundle = config.bundle;

    let mut text = format!("\n{}\n", style.paint(colors::BOLD, bundle.examples_heading));
    for ((literal, color), name) in EXAMPLES.iter().zip(bundle.example_names) {
        let pad = EXAMPLE_COLUMN.saturating_sub(literal.chars().count());
        text.push_str(&format!(
            "  {}{}\u{2190} {name}\n",
            style.paint(color, literal),
            " ".repeat(pad)
        ));
    }
    text.push('\n');
    text.push_str(&style.paint(colors::BOLD, bundle.input_label));
    text
}

pub fn pacing_message(config: &LabConfig) -> String {
    config.style.paint(colors::CYAN, config.bundle.pacing)
}

/// One table row; not-applicable rows are red and show the reason marker.
pub fn format_row(row: &Row, config: &LabConfig) -> String {
    let label = row.label();
    match row.outcome {
        Outcome::Measured { shallow, deep } => {
            let content = row.content.as_deref().unwrap_or_default();
            format!("{label:<15} | {content:<15} | {shallow:<6} bytes   | {deep:<6} bytes")
        }
        Outcome::NotApplicable(reason) => {
            let marker = match reason {
                NotApplicable::Unhashable => config.bundle.na_unhashable,
                NotApplicable::NotInteger => config.bundle.na_not_integer,
            };
            let line = format!("{label:<15} | {marker:<15} | {:<15} | -", "-");
            config.style.paint(colors::RED, &line)
        }
    }
}

pub fn write_report<W: Write>(
    out: &mut W,
    config: &LabConfig,
    report: &Report,
    facts: FixedSizes,
) -> io::Result<()> {
    let style = config.style;
    let bundle = config.bundle;

    writeln!(out, "{}", style.paint(colors::YELLOW, bundle.title))?;
    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    let header = format!(
        "{:<15} | {:<15} | {:<15} | {}",
        bundle.col_structure, bundle.col_content, bundle.col_shallow, bundle.col_deep
    );
    writeln!(out, "{}", style.paint(colors::BOLD, &header))?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    for row in &report.rows {
        writeln!(out, "{}", format_row(row, config))?;
    }
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;

    writeln!(out)?;
    writeln!(out, "{}", style.paint(colors::YELLOW, bundle.legend_title))?;
    writeln!(
        out,
        " \u{2192} {} {}",
        style.paint(colors::BOLD, bundle.shallow_label),
        bundle.shallow_def
    )?;
    writeln!(
        out,
        " \u{2192} {} {}",
        style.paint(colors::BOLD, bundle.deep_label),
        bundle.deep_def
    )?;

    write_facts(out, config, facts)
}

fn write_facts<W: Write>(out: &mut W, config: &LabConfig, facts: FixedSizes) -> io::Result<()> {
    let bundle = config.bundle;
    writeln!(out)?;
    writeln!(out, "{}", config.style.paint(colors::CYAN, bundle.facts_title))?;
    writeln!(out, "\u{2022} {}", bundle.facts_intro)?;
    let integer = format!("{}:", bundle.facts_integer);
    let float = format!("{}:", bundle.facts_float);
    let lines = [
        ("None:", facts.none),
        ("True/False:", facts.boolean),
        (integer.as_str(), facts.int),
        (float.as_str(), facts.float),
    ];
    for (label, bytes) in lines {
        writeln!(out, "\u{2022} {label:<12} {bytes} bytes")?;
    }
    writeln!(out)
}
