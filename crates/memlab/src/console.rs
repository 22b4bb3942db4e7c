//! Line-oriented terminal I/O.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use crate::style::CLEAR_SCREEN;
use crate::SessionError;

/// Pause between pacing dots.
pub const PACE_STEP: Duration = Duration::from_millis(400);
/// Number of pacing dots.
pub const PACE_DOTS: usize = 3;

/// Prompting console over any reader and writer.
pub struct Console<R: BufRead, W: Write> {
    input: R,
    output: W,
    clear: bool,
    pace_step: Duration,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// `clear` enables the clear-screen escape; it is skipped when the
    /// output is not a terminal.
    pub fn new(input: R, output: W, clear: bool) -> Self {
        Console {
            input,
            output,
            clear,
            pace_step: PACE_STEP,
        }
    }

    /// Replace the pause between pacing dots.
    #[must_use]
    pub fn with_pace(mut self, step: Duration) -> Self {
        self.pace_step = step;
        self
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn clear(&mut self) -> io::Result<()> {
        if self.clear {
            self.output.write_all(CLEAR_SCREEN.as_bytes())?;
        }
        Ok(())
    }

    /// Show `text`, then read one line without its line ending.
    pub fn prompt(&mut self, text: &str) -> Result<String, SessionError> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::InputClosed);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Show `message` on its own line followed by paced dots.
    pub fn pace(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{message}")?;
        for _ in 0..PACE_DOTS {
            self.output.write_all(b".")?;
            self.output.flush()?;
            if !self.pace_step.is_zero() {
                thread::sleep(self.pace_step);
            }
        }
        writeln!(self.output)?;
        writeln!(self.output)
    }
}
