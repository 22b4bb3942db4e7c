//! Literal parse errors.
//!
//! These never reach the user: [`probe`](crate::probe) turns any of them into
//! a raw-text fallback. They exist so the fallback can be logged precisely and
//! so the strict parser can be tested.

use memlab_value::Unhashable;
use thiserror::Error;

use crate::Span;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LiteralError {
    /// Nothing but whitespace.
    #[error("empty input")]
    Empty,

    /// Text the lexer does not recognize, or a number out of range.
    #[error("invalid token `{text}` at {span}")]
    InvalidToken { text: String, span: Span },

    #[error("expected {expected}, found {found} at {span}")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
        span: Span,
    },

    #[error("expected {expected}, found end of input")]
    UnexpectedEnd { expected: &'static str },

    /// Containers nested past the parser's depth limit.
    #[error("literal nests deeper than {limit} levels")]
    TooDeep { limit: usize },

    /// A set member or map key that cannot be hashed.
    #[error(transparent)]
    Unhashable(#[from] Unhashable),
}
