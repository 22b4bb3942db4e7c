//! Session configuration.

use crate::locale::{Language, TextBundle};
use crate::style::Style;

/// Immutable settings fixed once the language is chosen.
#[derive(Clone, Copy, Debug)]
pub struct LabConfig {
    pub language: Language,
    pub bundle: &'static TextBundle,
    pub style: Style,
}

impl LabConfig {
    pub fn new(language: Language, style: Style) -> Self {
        LabConfig {
            language,
            bundle: language.bundle(),
            style,
        }
    }
}
