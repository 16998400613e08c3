/*!
 Errors that can happen when decoding the payload of a single token.
*/

use std::fmt::{Display, Formatter, Result};

use crate::error::cursor::CursorError;

/// Errors that can happen when decoding a token payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// The payload needs more bytes than the source has left
    Cursor(CursorError),
    /// A data token declared an element type we cannot size
    UnknownDataType(u8),
}

impl Display for TokenError {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result {
        match self {
            TokenError::Cursor(why) => write!(fmt, "{why}"),
            TokenError::UnknownDataType(kind) => {
                write!(fmt, "Data token element type {kind:#04x} is not known!")
            }
        }
    }
}

impl std::error::Error for TokenError {}

impl From<CursorError> for TokenError {
    fn from(why: CursorError) -> Self {
        TokenError::Cursor(why)
    }
}
