/*!
 Errors that can happen when framing events from an audit trail.
*/

use std::fmt::{Display, Formatter, Result};

use crate::error::cursor::CursorError;

/// Errors that stop decoding of an audit trail
///
/// [`AuditError::InvalidHeaderTag`] and [`AuditError::ZeroLength`] mean the input is not
/// a usable audit trail and abort the run. [`AuditError::TruncatedStream`] means the source
/// ended early; every event decoded before it is still valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditError {
    /// The tag at the given offset does not open a record
    InvalidHeaderTag(u8, usize),
    /// The header at the given offset declares a record length of zero
    ZeroLength(usize),
    /// The source ended before a token or a record boundary was complete
    TruncatedStream(CursorError),
}

impl AuditError {
    /// Whether this error means the input is not a decodable audit trail at all
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            AuditError::InvalidHeaderTag(..) | AuditError::ZeroLength(_)
        )
    }
}

impl Display for AuditError {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result {
        match self {
            AuditError::InvalidHeaderTag(tag, offset) => write!(
                fmt,
                "Tag {tag:#04x} at {offset:#x} is not a record header, not a BSM audit trail!"
            ),
            AuditError::ZeroLength(offset) => {
                write!(fmt, "Record at {offset:#x} declares a length of zero!")
            }
            AuditError::TruncatedStream(why) => write!(fmt, "Audit trail is truncated: {why}"),
        }
    }
}

impl std::error::Error for AuditError {}

impl From<CursorError> for AuditError {
    fn from(why: CursorError) -> Self {
        AuditError::TruncatedStream(why)
    }
}
