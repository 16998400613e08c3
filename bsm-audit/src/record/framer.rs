/*!
 Decodes one record, from its header tag to its boundary.
*/

use log::{debug, warn};

use crate::{
    error::{audit::AuditError, cursor::CursorError, token::TokenError, warning::DecodeWarning},
    record::{
        resync::{scan_to_trailer, seek_to_boundary},
        BoundaryPolicy, Event, EventStatus,
    },
    tokens::{
        header::{Header, AUDIT_HEADER_VERSION},
        registry::TokenKind,
        Token,
    },
    util::cursor::ByteCursor,
};

/// The result of framing one record
#[derive(Debug)]
pub enum Framed {
    /// The record ended at a boundary and the cursor is at the next one
    Event(Event),
    /// The source ended inside the record; the tokens read before that are kept
    Interrupted(Event, AuditError),
}

/// Where the token loop stopped
enum Stop {
    Boundary(EventStatus),
    Eof(CursorError),
}

/// Decodes records according to a [`BoundaryPolicy`]
#[derive(Debug, Clone, Copy, Default)]
pub struct EventFramer {
    pub policy: BoundaryPolicy,
}

impl EventFramer {
    pub fn new(policy: BoundaryPolicy) -> Self {
        Self { policy }
    }

    /// Decode the record whose header tag is at the cursor
    ///
    /// Errors are only returned when no event can be built at all: the tag does not open a
    /// record, the header itself is cut short, or the header declares a length of zero.
    pub fn frame(&self, cursor: &mut ByteCursor, number: usize) -> Result<Framed, AuditError> {
        let offset = cursor.offset();
        let tag = cursor.read_u8()?;
        let kind = TokenKind::from_tag(tag)
            .filter(TokenKind::is_header)
            .ok_or(AuditError::InvalidHeaderTag(tag, offset))?;
        let header = Header::decode(cursor, kind)?;
        if header.length == 0 {
            return Err(AuditError::ZeroLength(offset));
        }

        let declared_end = offset.saturating_add(header.length as usize);
        debug!(
            "Record {number} at {offset:#x}: {} declaring {} bytes",
            kind.name(),
            header.length
        );

        let mut event = Event {
            number,
            offset,
            end_offset: declared_end,
            header,
            tokens: vec![],
            warnings: vec![],
            status: EventStatus::Complete,
        };

        if event.header.version != AUDIT_HEADER_VERSION {
            add_warning(
                &mut event.warnings,
                DecodeWarning::UnsupportedVersion(event.header.version),
            );
        }

        let stop = match self.policy {
            BoundaryPolicy::DeclaredLength => self.read_to_declared_end(cursor, &mut event),
            BoundaryPolicy::Trailer => self.read_to_trailer(cursor, &mut event),
        };

        match stop {
            Ok(Stop::Boundary(status)) => {
                event.status = status;
                debug!(
                    "Record {number} ended at {:#x} with {} tokens, {}",
                    cursor.offset(),
                    event.tokens.len(),
                    status.name()
                );
                Ok(Framed::Event(event))
            }
            Ok(Stop::Eof(why)) => {
                event.status = EventStatus::Truncated;
                Ok(Framed::Interrupted(event, AuditError::TruncatedStream(why)))
            }
            Err(why) => {
                event.status = EventStatus::Truncated;
                Ok(Framed::Interrupted(event, why))
            }
        }
    }

    /// Decode tokens until the cursor reaches `end_offset`
    fn read_to_declared_end(
        &self,
        cursor: &mut ByteCursor,
        event: &mut Event,
    ) -> Result<Stop, AuditError> {
        let end = event.end_offset;

        // The declared length did not even cover the header
        if cursor.offset() > end {
            add_warning(
                &mut event.warnings,
                DecodeWarning::BoundaryOverrun {
                    offset: cursor.offset(),
                    end,
                },
            );
            seek_to_boundary(cursor, end)?;
            return Ok(Stop::Boundary(EventStatus::Overrun));
        }

        while cursor.offset() < end {
            let token_offset = cursor.offset();
            let tag = match cursor.read_u8() {
                Ok(tag) => tag,
                Err(why) => return Ok(Stop::Eof(why)),
            };

            let Some(kind) = TokenKind::from_tag(tag) else {
                add_warning(
                    &mut event.warnings,
                    DecodeWarning::UnknownToken {
                        tag,
                        offset: token_offset,
                    },
                );
                seek_to_boundary(cursor, end)?;
                return Ok(Stop::Boundary(EventStatus::Truncated));
            };

            // The declared length runs into the next record
            if kind.is_header() {
                add_warning(
                    &mut event.warnings,
                    DecodeWarning::BoundaryOverrun {
                        offset: token_offset,
                        end,
                    },
                );
                cursor.restore(token_offset);
                event.end_offset = token_offset;
                return Ok(Stop::Boundary(EventStatus::Overrun));
            }

            match Token::decode(cursor, kind) {
                Ok(token) => self.accept(event, token, token_offset),
                Err(TokenError::UnknownDataType(element_type)) => {
                    add_warning(
                        &mut event.warnings,
                        DecodeWarning::UnknownDataType {
                            element_type,
                            offset: token_offset,
                        },
                    );
                    seek_to_boundary(cursor, end)?;
                    return Ok(Stop::Boundary(EventStatus::Truncated));
                }
                Err(TokenError::Cursor(why)) => return Ok(Stop::Eof(why)),
            }

            if cursor.offset() > end {
                add_warning(
                    &mut event.warnings,
                    DecodeWarning::BoundaryOverrun {
                        offset: cursor.offset(),
                        end,
                    },
                );
                seek_to_boundary(cursor, end)?;
                return Ok(Stop::Boundary(EventStatus::Overrun));
            }
        }

        Ok(Stop::Boundary(EventStatus::Complete))
    }

    /// Decode tokens until a trailer has been read, ignoring the declared length
    fn read_to_trailer(
        &self,
        cursor: &mut ByteCursor,
        event: &mut Event,
    ) -> Result<Stop, AuditError> {
        loop {
            let token_offset = cursor.offset();
            let tag = match cursor.read_u8() {
                Ok(tag) => tag,
                Err(why) => return Ok(Stop::Eof(why)),
            };

            let Some(kind) = TokenKind::from_tag(tag) else {
                add_warning(
                    &mut event.warnings,
                    DecodeWarning::UnknownToken {
                        tag,
                        offset: token_offset,
                    },
                );
                return self.skip_to_trailer(cursor, event, EventStatus::Truncated);
            };

            // The next record started before this one was closed
            if kind.is_header() {
                cursor.restore(token_offset);
                event.end_offset = token_offset;
                return Ok(Stop::Boundary(EventStatus::Truncated));
            }

            match Token::decode(cursor, kind) {
                Ok(token) => {
                    let is_trailer = matches!(token, Token::Trailer(_));
                    self.accept(event, token, token_offset);
                    if is_trailer {
                        event.end_offset = cursor.offset();
                        return Ok(Stop::Boundary(EventStatus::Complete));
                    }
                }
                Err(TokenError::UnknownDataType(element_type)) => {
                    add_warning(
                        &mut event.warnings,
                        DecodeWarning::UnknownDataType {
                            element_type,
                            offset: token_offset,
                        },
                    );
                    return self.skip_to_trailer(cursor, event, EventStatus::Truncated);
                }
                Err(TokenError::Cursor(why)) => return Ok(Stop::Eof(why)),
            }
        }
    }

    fn skip_to_trailer(
        &self,
        cursor: &mut ByteCursor,
        event: &mut Event,
        status: EventStatus,
    ) -> Result<Stop, AuditError> {
        scan_to_trailer(cursor)?;
        event.end_offset = cursor.offset();
        Ok(Stop::Boundary(status))
    }

    /// Validate a decoded token and add it to the event
    fn accept(&self, event: &mut Event, token: Token, offset: usize) {
        if token.has_repaired_text() {
            add_warning(&mut event.warnings, DecodeWarning::TextDecode { offset });
        }
        if let Token::Trailer(trailer) = &token {
            if !trailer.has_valid_magic() {
                add_warning(
                    &mut event.warnings,
                    DecodeWarning::BadTrailerMagic {
                        magic: trailer.magic,
                        offset,
                    },
                );
            }
            if trailer.record_length != event.header.length {
                add_warning(
                    &mut event.warnings,
                    DecodeWarning::TrailerLengthMismatch {
                        declared: event.header.length,
                        trailer: trailer.record_length,
                    },
                );
            }
        }
        event.tokens.push(token);
    }
}

/// Log a warning and attach it to the event being framed
fn add_warning(warnings: &mut Vec<DecodeWarning>, warning: DecodeWarning) {
    warn!("{warning}");
    warnings.push(warning);
}
