//! Lexer for the literal syntax, generated with logos.

use std::fmt;

use logos::Logos;

use crate::LiteralError;

/// Byte range of a token in the trimmed input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Token kinds of the literal syntax.
///
/// Numeric callbacks return `None` on overflow or malformed digit grouping,
/// which logos reports as an invalid token.
#[derive(Logos, Clone, Debug, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    // === Delimiters ===
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,

    // === Signs ===
    #[token("-")]
    Minus,
    #[token("+")]
    Plus,

    // === Constants ===
    #[token("True")]
    True,
    #[token("False")]
    False,
    #[token("None")]
    None,

    // === Literals ===
    #[regex(r"0[xX][0-9a-fA-F_]+", |lex| int_with_radix(&lex.slice()[2..], 16))]
    #[regex(r"0[oO][0-7_]+", |lex| int_with_radix(&lex.slice()[2..], 8))]
    #[regex(r"0[bB][01_]+", |lex| int_with_radix(&lex.slice()[2..], 2))]
    #[regex(r"[0-9][0-9_]*", |lex| decimal_int(lex.slice()))]
    Int(i64),

    #[regex(r"[0-9][0-9_]*\.[0-9_]*([eE][+-]?[0-9]+)?", |lex| float(lex.slice()))]
    #[regex(r"\.[0-9][0-9_]*([eE][+-]?[0-9]+)?", |lex| float(lex.slice()))]
    #[regex(r"[0-9][0-9_]*[eE][+-]?[0-9]+", |lex| float(lex.slice()))]
    Float(f64),

    #[regex(r"'([^'\\\n]|\\.)*'", |lex| unquote(lex.slice()))]
    #[regex(r#""([^"\\\n]|\\.)*""#, |lex| unquote(lex.slice()))]
    Str(String),

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_owned())]
    Ident(String),
}

impl TokenKind {
    /// Short description for error messages.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::LParen => "`(`".to_string(),
            TokenKind::RParen => "`)`".to_string(),
            TokenKind::LBracket => "`[`".to_string(),
            TokenKind::RBracket => "`]`".to_string(),
            TokenKind::LBrace => "`{`".to_string(),
            TokenKind::RBrace => "`}`".to_string(),
            TokenKind::Comma => "`,`".to_string(),
            TokenKind::Colon => "`:`".to_string(),
            TokenKind::Minus => "`-`".to_string(),
            TokenKind::Plus => "`+`".to_string(),
            TokenKind::True => "`True`".to_string(),
            TokenKind::False => "`False`".to_string(),
            TokenKind::None => "`None`".to_string(),
            TokenKind::Int(n) => format!("integer `{n}`"),
            TokenKind::Float(x) => format!("float `{x:?}`"),
            TokenKind::Str(_) => "string".to_string(),
            TokenKind::Ident(name) => format!("name `{name}`"),
        }
    }
}

/// A token with its location.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

/// Tokenize the whole input, failing on the first invalid token.
pub fn lex(input: &str) -> Result<Vec<Token>, LiteralError> {
    let mut lexer = TokenKind::lexer(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let range = lexer.span();
        let span = Span::new(range.start, range.end);
        match result {
            Ok(kind) => tokens.push(Token { kind, span }),
            Err(()) => {
                return Err(LiteralError::InvalidToken {
                    text: lexer.slice().to_owned(),
                    span,
                });
            }
        }
    }

    Ok(tokens)
}

/// Strip digit-group underscores; `None` for leading, trailing or doubled ones.
fn strip_underscores(digits: &str) -> Option<String> {
    if digits.starts_with('_') || digits.ends_with('_') || digits.contains("__") {
        return None;
    }
    Some(digits.replace('_', ""))
}

fn int_with_radix(digits: &str, radix: u32) -> Option<i64> {
    let digits = strip_underscores(digits)?;
    i64::from_str_radix(&digits, radix).ok()
}

/// Decimal integers may not carry leading zeros (`0123`), though `0` and
/// `00` are fine.
fn decimal_int(digits: &str) -> Option<i64> {
    let digits = strip_underscores(digits)?;
    if digits.starts_with('0') && digits.bytes().any(|b| b != b'0') {
        return None;
    }
    digits.parse().ok()
}

fn float(text: &str) -> Option<f64> {
    if text.contains("__") || text.contains("_.") || text.contains("._") {
        return None;
    }
    text.replace('_', "").parse().ok()
}

/// Remove the quotes and resolve escape sequences.
///
/// Unknown escapes are kept verbatim, backslash included.
fn unquote(quoted: &str) -> Option<String> {
    let body = &quoted[1..quoted.len() - 1];
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('0') => out.push('\0'),
            Some('\\') => out.push('\\'),
            Some('\'') => out.push('\''),
            Some('"') => out.push('"'),
            Some('x') => out.push(hex_escape(&mut chars, 2)?),
            Some('u') => out.push(hex_escape(&mut chars, 4)?),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    Some(out)
}

/// Read exactly `len` hex digits and return the code point they name.
fn hex_escape(chars: &mut std::str::Chars<'_>, len: usize) -> Option<char> {
    let mut code = 0u32;
    for _ in 0..len {
        code = code * 16 + chars.next()?.to_digit(16)?;
    }
    char::from_u32(code)
}
