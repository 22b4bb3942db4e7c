//! Recursive descent parser from tokens to a [`Value`].

use memlab_stack::ensure_sufficient_stack;
use memlab_value::Value;

use crate::lexer::{Token, TokenKind};
use crate::LiteralError;

/// Deepest container nesting a literal may have.
///
/// Rendering, hashing and dropping a value recurse once per level, so input
/// nested deeper than this is rejected and kept as raw text instead.
pub const MAX_DEPTH: usize = 1_000;

/// Parser over a fully lexed token stream.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    /// Parse the whole stream as one literal.
    ///
    /// A top-level comma sequence such as `1, 2` is a tuple.
    pub fn parse(mut self) -> Result<Value, LiteralError> {
        if self.tokens.is_empty() {
            return Err(LiteralError::Empty);
        }

        let first = self.parse_expr()?;
        let value = if self.eat(&TokenKind::Comma) {
            let mut items = vec![first];
            while !self.is_at_end() {
                items.push(self.parse_expr()?);
                if !self.eat(&TokenKind::Comma) {
                    break;
                }
            }
            Value::tuple(items)
        } else {
            first
        };

        if let Some(token) = self.current() {
            return Err(LiteralError::UnexpectedToken {
                expected: "end of input",
                found: token.kind.describe(),
                span: token.span,
            });
        }
        Ok(value)
    }

    // Cursor

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it is `kind`.
    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.current().is_some_and(|t| &t.kind == kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: &TokenKind, expected: &'static str) -> Result<(), LiteralError> {
        if self.eat(kind) {
            return Ok(());
        }
        Err(self.unexpected(expected))
    }

    /// Error for the current token (or end of input) not being `expected`.
    fn unexpected(&self, expected: &'static str) -> LiteralError {
        match self.current() {
            Some(token) => LiteralError::UnexpectedToken {
                expected,
                found: token.kind.describe(),
                span: token.span,
            },
            None => LiteralError::UnexpectedEnd { expected },
        }
    }

    // Grammar

    fn parse_expr(&mut self) -> Result<Value, LiteralError> {
        if self.depth == MAX_DEPTH {
            return Err(LiteralError::TooDeep { limit: MAX_DEPTH });
        }
        self.depth += 1;
        let value = ensure_sufficient_stack(|| self.parse_expr_inner());
        self.depth -= 1;
        value
    }

    fn parse_expr_inner(&mut self) -> Result<Value, LiteralError> {
        let Some(token) = self.advance() else {
            return Err(LiteralError::UnexpectedEnd {
                expected: "a value",
            });
        };

        match token.kind {
            TokenKind::Int(n) => Ok(Value::Int(n)),
            TokenKind::Float(x) => Ok(Value::Float(x)),
            TokenKind::Minus => self.parse_signed(true),
            TokenKind::Plus => self.parse_signed(false),
            TokenKind::True => Ok(Value::Bool(true)),
            TokenKind::False => Ok(Value::Bool(false)),
            TokenKind::None => Ok(Value::None),
            TokenKind::Str(first) => Ok(self.parse_strings(first)),
            TokenKind::LBracket => Ok(Value::list(self.parse_items(&TokenKind::RBracket)?)),
            TokenKind::LParen => self.parse_paren(),
            TokenKind::LBrace => self.parse_brace(),
            TokenKind::Ident(name) if name == "set" => {
                self.expect(&TokenKind::LParen, "`(`")?;
                self.expect(&TokenKind::RParen, "`)`")?;
                Ok(Value::set(Vec::new())?)
            }
            kind => Err(LiteralError::UnexpectedToken {
                expected: "a value",
                found: kind.describe(),
                span: token.span,
            }),
        }
    }

    /// A sign applies to a number only.
    fn parse_signed(&mut self, negate: bool) -> Result<Value, LiteralError> {
        let value = match self.current().map(|t| &t.kind) {
            Some(TokenKind::Int(n)) if negate => Value::Int(-n),
            Some(TokenKind::Int(n)) => Value::Int(*n),
            Some(TokenKind::Float(x)) if negate => Value::Float(-x),
            Some(TokenKind::Float(x)) => Value::Float(*x),
            _ => return Err(self.unexpected("a number after the sign")),
        };
        self.pos += 1;
        Ok(value)
    }

    /// Adjacent string literals concatenate.
    fn parse_strings(&mut self, first: String) -> Value {
        let mut text = first;
        while let Some(TokenKind::Str(next)) = self.current().map(|t| &t.kind) {
            text.push_str(next);
            self.pos += 1;
        }
        Value::string(text)
    }

    /// Comma-separated values up to `close`, trailing comma allowed.
    fn parse_items(&mut self, close: &TokenKind) -> Result<Vec<Value>, LiteralError> {
        let mut items = Vec::new();
        loop {
            if self.eat(close) {
                break;
            }
            items.push(self.parse_expr()?);
            if !self.eat(&TokenKind::Comma) {
                self.expect(close, "`,` or a closing bracket")?;
                break;
            }
        }
        Ok(items)
    }

    /// `()` is the empty tuple, `(x)` is just `x`, `(x,)` is a tuple.
    fn parse_paren(&mut self) -> Result<Value, LiteralError> {
        if self.eat(&TokenKind::RParen) {
            return Ok(Value::tuple(Vec::new()));
        }
        let first = self.parse_expr()?;
        if self.eat(&TokenKind::RParen) {
            return Ok(first);
        }
        self.expect(&TokenKind::Comma, "`,` or `)`")?;
        let mut items = vec![first];
        items.extend(self.parse_items(&TokenKind::RParen)?);
        Ok(Value::tuple(items))
    }

    /// `{}` is the empty map; a colon after the first item makes a map,
    /// otherwise a set.
    fn parse_brace(&mut self) -> Result<Value, LiteralError> {
        if self.eat(&TokenKind::RBrace) {
            return Ok(Value::map(Vec::new())?);
        }
        let first = self.parse_expr()?;
        if !self.eat(&TokenKind::Colon) {
            let mut items = vec![first];
            if self.eat(&TokenKind::Comma) {
                items.extend(self.parse_items(&TokenKind::RBrace)?);
            } else {
                self.expect(&TokenKind::RBrace, "`,` or `}`")?;
            }
            return Ok(Value::set(items)?);
        }

        let mut entries = vec![(first, self.parse_expr()?)];
        loop {
            if !self.eat(&TokenKind::Comma) {
                self.expect(&TokenKind::RBrace, "`,` or `}`")?;
                break;
            }
            if self.eat(&TokenKind::RBrace) {
                break;
            }
            let key = self.parse_expr()?;
            self.expect(&TokenKind::Colon, "`:`")?;
            entries.push((key, self.parse_expr()?));
        }
        Ok(Value::map(entries)?)
    }
}
