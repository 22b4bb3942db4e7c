//! Per-form measurement rows.

use memlab_value::Value;

use crate::forms::{build_form, NotApplicable, Shape};
use crate::size::{deep_size, shallow_size};

/// Display text shorter than this many characters is shown in full.
const DISPLAY_LIMIT: usize = 15;
/// Characters kept before the ellipsis when text is cut.
const DISPLAY_KEEP: usize = 12;

/// Sizes of one derived form, or why it has none.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Measured { shallow: usize, deep: usize },
    NotApplicable(NotApplicable),
}

/// One table row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    pub shape: Shape,
    /// Truncated text of the form; `None` when it could not be built.
    pub content: Option<String>,
    pub outcome: Outcome,
}

impl Row {
    pub fn label(&self) -> &'static str {
        self.shape.label()
    }

    pub fn sizes(&self) -> Option<(usize, usize)> {
        match self.outcome {
            Outcome::Measured { shallow, deep } => Some((shallow, deep)),
            Outcome::NotApplicable(_) => None,
        }
    }
}

/// All seven rows for one probe value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub hashable: bool,
    pub rows: Vec<Row>,
}

impl Report {
    pub fn row(&self, shape: Shape) -> Option<&Row> {
        self.rows.iter().find(|row| row.shape == shape)
    }
}

/// Measure every derived form of `value`.
pub fn inspect(value: &Value) -> Report {
    inspect_with(value, value.is_hashable())
}

/// Measure every derived form of `value` with an explicit hashable flag.
#[tracing::instrument(level = "debug", skip(value), fields(kind = value.type_name()))]
pub fn inspect_with(value: &Value, hashable: bool) -> Report {
    let rows = Shape::ALL
        .iter()
        .map(|&shape| measure_row(shape, value, hashable))
        .collect();
    Report { hashable, rows }
}

fn measure_row(shape: Shape, value: &Value, hashable: bool) -> Row {
    match build_form(shape, value, hashable) {
        Ok(form) => {
            let shallow = shallow_size(&form);
            let deep = deep_size(&form);
            tracing::trace!(shape = shape.label(), shallow, deep, "measured");
            Row {
                shape,
                content: Some(truncate_display(&form.to_text())),
                outcome: Outcome::Measured { shallow, deep },
            }
        }
        Err(reason) => {
            tracing::trace!(shape = shape.label(), %reason, "not applicable");
            Row {
                shape,
                content: None,
                outcome: Outcome::NotApplicable(reason),
            }
        }
    }
}

/// Text in full when under 15 characters, else its first 12 and `...`.
pub fn truncate_display(text: &str) -> String {
    if text.chars().count() < DISPLAY_LIMIT {
        return text.to_owned();
    }
    let mut cut: String = text.chars().take(DISPLAY_KEEP).collect();
    cut.push_str("...");
    cut
}

/// Measured sizes of the fixed-size scalar values.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FixedSizes {
    pub none: usize,
    pub boolean: usize,
    pub int: usize,
    pub float: usize,
}

pub fn fixed_sizes() -> FixedSizes {
    FixedSizes {
        none: deep_size(&Value::None),
        boolean: deep_size(&Value::Bool(true)),
        int: deep_size(&Value::Int(0)),
        float: deep_size(&Value::Float(0.0)),
    }
}
