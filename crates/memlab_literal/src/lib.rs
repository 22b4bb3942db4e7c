//! Literal parsing for memlab input.
//!
//! The user types one value at the prompt. [`probe`] first tries to read it as
//! a structured literal (`2506`, `1.89`, `'nome'`, `[1, 2, 3]`, `(10, 200)`,
//! `{1, 2}`, `{'a': 1}`, `True`, `None`) and otherwise keeps the text as is.
//!
//! ```text
//! input ──► lex() ──► Parser::parse() ──► Probe::Literal(value)
//!               │              │
//!               └──── error ───┴────────► Probe::RawText(text)
//! ```

mod error;
mod lexer;
mod parser;

use memlab_value::Value;

pub use error::LiteralError;
pub use lexer::{lex, Span, Token, TokenKind};
pub use parser::{Parser, MAX_DEPTH};

/// Parse `input` strictly as a single literal.
pub fn parse_literal(input: &str) -> Result<Value, LiteralError> {
    let tokens = lex(input)?;
    Parser::new(tokens).parse()
}

/// Result of reading the user's input.
#[derive(Clone, Debug, PartialEq)]
pub enum Probe {
    /// The input parsed as a literal.
    Literal(Value),
    /// The input did not parse; its trimmed text stands in as a string.
    RawText(String),
}

impl Probe {
    /// Whether the input parsed as a literal.
    pub fn is_literal(&self) -> bool {
        matches!(self, Probe::Literal(_))
    }

    /// The value to inspect. Raw text becomes a string value.
    pub fn into_value(self) -> Value {
        match self {
            Probe::Literal(value) => value,
            Probe::RawText(text) => Value::string(text),
        }
    }
}

/// Read `input` as a literal, falling back to its trimmed text.
///
/// Never fails; the parse error is only logged.
pub fn probe(input: &str) -> Probe {
    let text = input.trim();
    match parse_literal(text) {
        Ok(value) => {
            tracing::debug!(kind = value.type_name(), "input parsed as literal");
            Probe::Literal(value)
        }
        Err(err) => {
            tracing::debug!(%err, "input is not a literal, keeping raw text");
            Probe::RawText(text.to_owned())
        }
    }
}
