//! End-to-end sessions over in-memory input and output.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::io::Cursor;
use std::time::Duration;

use memlab::{
    colors, run_session, ColorMode, Console, Language, SessionError, SessionSummary, Style,
    CLEAR_SCREEN, RULE_WIDTH,
};
use memlab_literal::Probe;
use memlab_measure::{NotApplicable, Outcome, Shape};
use memlab_value::Value;
use pretty_assertions::assert_eq;

fn session_with(
    input: &str,
    style: Style,
    clear: bool,
) -> (Result<SessionSummary, SessionError>, String) {
    let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), clear)
        .with_pace(Duration::ZERO);
    let result = run_session(&mut console, style);
    let output = String::from_utf8(console.into_output()).unwrap();
    (result, output)
}

fn session(input: &str) -> (SessionSummary, String) {
    let (result, output) = session_with(input, Style::plain(), false);
    (result.unwrap(), output)
}

fn outcome(summary: &SessionSummary, shape: Shape) -> Outcome {
    summary.report.row(shape).unwrap().outcome
}

#[test]
fn english_list_session() {
    let (summary, output) = session("nao\n\n[1, 2, 3]\n");

    assert_eq!(summary.language, Language::English);
    assert!(summary.probe.is_literal());
    assert_eq!(
        outcome(&summary, Shape::Set),
        Outcome::NotApplicable(NotApplicable::Unhashable)
    );

    assert!(output.starts_with("Prefere Português? (Sim/Não): "));
    assert!(output.contains("In high-performance development, every byte counts."));
    assert!(output.contains("Press ENTER to start inspection..."));
    assert!(output.contains("Your input: "));
    assert!(output.contains("Auditing physical costs...\n...\n"));
    assert!(output.contains("List            | [[1, 2, 3]]     |"));
    assert!(output.contains("Set             | Not Applicable (Mutable) | -"));
    assert!(output.contains("Dict (as Key)   | Not Applicable (Mutable) | -"));
    assert!(output.contains("Dict (as Val)   | {'key': [1, ..."));
    assert!(output.contains(&"=".repeat(RULE_WIDTH)));
    assert!(!output.contains(CLEAR_SCREEN));
}

#[test]
fn portuguese_session() {
    let (summary, output) = session("Sim\n\n'nome'\n");

    assert_eq!(summary.language, Language::Portuguese);
    assert_eq!(summary.probe, Probe::Literal(Value::string("nome")));
    assert_eq!(
        outcome(&summary, Shape::Integer),
        Outcome::NotApplicable(NotApplicable::NotInteger)
    );
    assert!(output.contains("--- INSPEÇÃO TÉCNICA DE MEMÓRIA ---"));
    assert!(output.contains("Sua entrada: "));
    assert!(output.contains("String          | nome            |"));
    assert!(output.contains("Integer         | Não Aplicável   | -"));
    assert!(output.contains("--- TIPOS ESTÁTICOS ---"));
}

#[test]
fn bare_text_falls_back_to_string() {
    let (summary, _) = session("\n\n  hello world \n");
    assert_eq!(summary.probe, Probe::RawText("hello world".to_string()));
    assert!(summary.report.hashable);
    assert!(summary.report.row(Shape::Set).unwrap().sizes().is_some());
}

#[test]
fn integer_session() {
    let (summary, output) = session("n\n\n2506\n");
    assert_eq!(
        outcome(&summary, Shape::Integer),
        Outcome::Measured {
            shallow: std::mem::size_of::<Value>(),
            deep: std::mem::size_of::<Value>(),
        }
    );
    assert!(output.contains("String          | 2506            |"));
}

#[test]
fn input_without_final_newline() {
    let (summary, _) = session("\n\n1.89");
    assert_eq!(summary.probe, Probe::Literal(Value::Float(1.89)));
    assert_eq!(
        outcome(&summary, Shape::Integer),
        Outcome::NotApplicable(NotApplicable::NotInteger)
    );
}

#[test]
fn closed_input_stops_the_session() {
    for input in ["", "sim\n", "sim\n\n"] {
        let (result, _) = session_with(input, Style::plain(), false);
        assert!(
            matches!(result, Err(SessionError::InputClosed)),
            "{input:?}"
        );
    }
}

#[test]
fn colors_and_clearing_when_enabled() {
    let style = Style::new(ColorMode::Always, false);
    let (result, output) = session_with("\n\n[1]\n", style, true);
    result.unwrap();

    assert!(output.starts_with(CLEAR_SCREEN));
    assert_eq!(output.matches(CLEAR_SCREEN).count(), 4);
    assert!(output.contains(&format!("{}Set ", colors::RED)));
    assert!(output.contains(&format!("{}Examples:{}", colors::BOLD, colors::RESET)));
}

#[test]
fn very_deep_literal_is_measured_as_text() {
    let depth = 100_000;
    let literal = format!("{}{}", "[".repeat(depth), "]".repeat(depth));
    let (summary, output) = session(&format!("\n\n{literal}\n"));

    assert_eq!(summary.probe, Probe::RawText(literal));
    assert!(summary.report.hashable);
    assert_eq!(
        outcome(&summary, Shape::Integer),
        Outcome::NotApplicable(NotApplicable::NotInteger)
    );
    assert!(summary.report.row(Shape::DictKey).unwrap().sizes().is_some());
    assert!(output.contains("String          | [[[[[[[[[[[[... |"));
}

#[test]
fn none_fills_every_hashed_row() {
    let (summary, _) = session("\n\nNone\n");
    assert_eq!(summary.probe, Probe::Literal(Value::None));
    assert!(summary.report.hashable);
    for shape in [Shape::Set, Shape::DictKey] {
        assert!(summary.report.row(shape).unwrap().sizes().is_some());
    }
}
