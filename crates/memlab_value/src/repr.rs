//! Literal rendering of values.
//!
//! The rendered form is the same syntax `memlab_literal` accepts, so the
//! content column of the measurement table reads like something the user
//! could have typed.

use std::fmt::{self, Write};

use crate::Value;

/// Write `text` as a quoted string literal.
///
/// Single quotes are preferred; double quotes are used when the text holds a
/// single quote and no double quote, which avoids escaping.
pub(crate) fn write_quoted(f: &mut impl Write, text: &str) -> fmt::Result {
    let quote = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };
    f.write_char(quote)?;
    for c in text.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c == quote => {
                f.write_char('\\')?;
                f.write_char(c)?;
            }
            c => f.write_char(c)?,
        }
    }
    f.write_char(quote)
}

/// Write a float so it never reads as an integer (`1.0`, not `1`).
///
/// Exponents carry a sign and at least two digits: `1e+16`, `1.5e-05`.
pub(crate) fn write_float(f: &mut impl Write, value: f64) -> fmt::Result {
    if value.is_nan() {
        return f.write_str("nan");
    }
    if value.is_infinite() {
        return f.write_str(if value > 0.0 { "inf" } else { "-inf" });
    }
    // `Debug` switches to an exponent outside 1e-4..1e16 and keeps a
    // fractional part otherwise.
    let text = format!("{value:?}");
    let Some((mantissa, exponent)) = text.split_once('e') else {
        return f.write_str(&text);
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    write!(f, "{mantissa}e{sign}{digits:0>2}")
}

/// Write items separated by `, `.
pub(crate) fn write_items(f: &mut impl Write, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// Write map entries as `key: value` pairs.
pub(crate) fn write_entries(f: &mut impl Write, entries: &[(Value, Value)]) -> fmt::Result {
    for (i, (key, value)) in entries.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{key}: {value}")?;
    }
    Ok(())
}
