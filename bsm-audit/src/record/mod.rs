/*!
 Contains logic to split an audit trail into events.

 ## Overview

 Every record starts with a header token that declares the total byte length of the record.
 The [`framer`] decodes the tokens between a header and its boundary, the [`resync`]
 strategies recover alignment after data it cannot decode, and [`trail`] drives both over
 a whole source, yielding one [`Event`] at a time.

 ## Boundaries

 Real trails occasionally disagree with themselves: a header can declare a length that does
 not match where the trailer actually sits. [`BoundaryPolicy`] selects which of the two is
 trusted.
*/

pub mod framer;
pub mod resync;
pub mod trail;
mod tests;

use crate::{
    error::warning::DecodeWarning,
    tokens::{
        header::{Header, Trailer},
        Token,
    },
};

/// How the end of a record is located
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryPolicy {
    /// Every record ends `length` bytes after its header tag
    #[default]
    DeclaredLength,
    /// Every record ends right after its trailer token
    Trailer,
}

/// How much of a record was recovered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    /// Every token up to the boundary was decoded
    Complete,
    /// Decoding stopped early; the tokens before the failure are kept
    Truncated,
    /// A token ran past the declared boundary and the record was cut there
    Overrun,
}

impl EventStatus {
    pub fn name(&self) -> &'static str {
        match self {
            EventStatus::Complete => "complete",
            EventStatus::Truncated => "truncated",
            EventStatus::Overrun => "overrun",
        }
    }
}

/// One decoded audit record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Position of the event in the trail, starting at 1
    pub number: usize,
    /// Offset of the header tag
    pub offset: usize,
    /// Offset of the first byte after the record
    pub end_offset: usize,
    pub header: Header,
    /// Tokens after the header, in stream order, trailer included
    pub tokens: Vec<Token>,
    /// Problems found while framing this event
    pub warnings: Vec<DecodeWarning>,
    pub status: EventStatus,
}

impl Event {
    /// Whether every token of the record was recovered
    pub fn is_complete(&self) -> bool {
        self.status == EventStatus::Complete
    }

    /// The trailer of the record, if it was reached
    pub fn trailer(&self) -> Option<&Trailer> {
        self.tokens.iter().rev().find_map(|token| match token {
            Token::Trailer(trailer) => Some(trailer),
            _ => None,
        })
    }
}
