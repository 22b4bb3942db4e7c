//! Session errors.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    /// Input ended before a prompt was answered.
    #[error("input closed before the prompt was answered")]
    InputClosed,

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}
