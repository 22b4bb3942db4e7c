//! Terminal colors.

/// ANSI color codes for terminal output.
pub mod colors {
    pub const CYAN: &str = "\x1b[96m";
    pub const GREEN: &str = "\x1b[92m";
    pub const YELLOW: &str = "\x1b[93m";
    pub const RED: &str = "\x1b[91m";
    pub const MAGENTA: &str = "\x1b[95m";
    pub const WHITE: &str = "\x1b[97m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Clear the screen and move the cursor home.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Color output mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Colors when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Parse a `--color` value.
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }

    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Resolved styling: either every escape sequence or none.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Style {
    colors: bool,
}

impl Style {
    pub fn new(mode: ColorMode, is_tty: bool) -> Self {
        Style {
            colors: mode.should_use_colors(is_tty),
        }
    }

    pub fn plain() -> Self {
        Style { colors: false }
    }

    /// `text` wrapped in `color` and a reset, or as is without colors.
    pub fn paint(self, color: &str, text: &str) -> String {
        if self.colors {
            format!("{color}{text}{}", colors::RESET)
        } else {
            text.to_owned()
        }
    }
}
