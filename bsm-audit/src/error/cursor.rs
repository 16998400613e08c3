/*!
 Errors that can happen when moving a [`ByteCursor`](crate::util::cursor::ByteCursor) over the source bytes.
*/

use std::fmt::{Display, Formatter, Result};

/// Errors that can happen when reading from or seeking the byte source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CursorError {
    /// A read of `.1` bytes at offset `.0` would pass the end of a source of length `.2`
    OutOfBounds(usize, usize, usize),
    /// A seek to offset `.0` would pass the end of a source of length `.1`
    SeekOutOfBounds(usize, usize),
}

impl Display for CursorError {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result {
        match self {
            CursorError::OutOfBounds(idx, needed, len) => {
                write!(
                    fmt,
                    "Reading {needed} bytes at {idx:#x} is outside of range {len:#x}!"
                )
            }
            CursorError::SeekOutOfBounds(idx, len) => {
                write!(fmt, "Seek to {idx:#x} is outside of range {len:#x}!")
            }
        }
    }
}

impl std::error::Error for CursorError {}
