/*!
 Non-fatal conditions raised while framing an event.

 Warnings never stop the run; they are attached to the [`Event`](crate::record::Event)
 they were found in so exporters can report them next to the salvaged data.
*/

use std::fmt::{Display, Formatter, Result};

/// Problems found in an otherwise decodable event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeWarning {
    /// A tag that is not in the registry was found inside a record
    UnknownToken { tag: u8, offset: usize },
    /// A data token used an element type that cannot be sized
    UnknownDataType { element_type: u8, offset: usize },
    /// The tokens of a record ran past its declared end, or the next record started before it
    BoundaryOverrun { offset: usize, end: usize },
    /// A text token contained bytes that are not valid UTF-8
    TextDecode { offset: usize },
    /// The header version is not the one this decoder was written against
    UnsupportedVersion(u8),
    /// A trailer token carried the wrong magic number
    BadTrailerMagic { magic: u16, offset: usize },
    /// The trailer disagrees with the header about the record length
    TrailerLengthMismatch { declared: u32, trailer: u32 },
    /// A record boundary did not start with a header tag
    MisalignedRecord { tag: u8, offset: usize },
}

impl DecodeWarning {
    /// Short, stable name used to group warnings in summaries
    pub fn kind(&self) -> &'static str {
        match self {
            DecodeWarning::UnknownToken { .. } => "unknown_token",
            DecodeWarning::UnknownDataType { .. } => "unknown_data_type",
            DecodeWarning::BoundaryOverrun { .. } => "boundary_overrun",
            DecodeWarning::TextDecode { .. } => "text_decode",
            DecodeWarning::UnsupportedVersion(_) => "unsupported_version",
            DecodeWarning::BadTrailerMagic { .. } => "bad_trailer_magic",
            DecodeWarning::TrailerLengthMismatch { .. } => "trailer_length_mismatch",
            DecodeWarning::MisalignedRecord { .. } => "misaligned_record",
        }
    }
}

impl Display for DecodeWarning {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result {
        match self {
            DecodeWarning::UnknownToken { tag, offset } => {
                write!(fmt, "Unknown token {tag:#04x} at {offset:#x}, token lost")
            }
            DecodeWarning::UnknownDataType {
                element_type,
                offset,
            } => write!(
                fmt,
                "Data token at {offset:#x} has unknown element type {element_type:#04x}"
            ),
            DecodeWarning::BoundaryOverrun { offset, end } => write!(
                fmt,
                "Tokens end at {offset:#x}, not at the record boundary at {end:#x}"
            ),
            DecodeWarning::TextDecode { offset } => {
                write!(fmt, "Text token at {offset:#x} is not valid UTF-8")
            }
            DecodeWarning::UnsupportedVersion(version) => {
                write!(fmt, "BSM version {version} not supported")
            }
            DecodeWarning::BadTrailerMagic { magic, offset } => {
                write!(fmt, "Trailer at {offset:#x} has bad magic {magic:#06x}")
            }
            DecodeWarning::TrailerLengthMismatch { declared, trailer } => write!(
                fmt,
                "Header declares {declared} bytes but trailer records {trailer}"
            ),
            DecodeWarning::MisalignedRecord { tag, offset } => {
                write!(fmt, "Expected a header at {offset:#x}, found tag {tag:#04x}")
            }
        }
    }
}
