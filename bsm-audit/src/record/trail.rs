/*!
 The driver that walks a whole audit trail, one record at a time.
*/

use log::{debug, warn};

use crate::{
    error::{audit::AuditError, warning::DecodeWarning},
    record::{
        framer::{EventFramer, Framed},
        resync::scan_to_trailer,
        BoundaryPolicy, Event,
    },
    tokens::registry::TokenKind,
    util::cursor::ByteCursor,
};

/// Iterator over the events of an audit trail
///
/// Yields every decodable event in stream order. Once an error is yielded the iterator is
/// exhausted; events yielded before it remain valid.
#[derive(Debug)]
pub struct AuditTrail<'a> {
    cursor: ByteCursor<'a>,
    framer: EventFramer,
    /// Number of events yielded so far
    count: usize,
    /// Warnings raised between records, attached to the next event
    pending_warnings: Vec<DecodeWarning>,
    /// An error to yield after the event it interrupted
    pending_error: Option<AuditError>,
    done: bool,
}

impl<'a> AuditTrail<'a> {
    /// Check that `stream` starts with a record header and prepare to iterate over it
    pub fn new(stream: &'a [u8], policy: BoundaryPolicy) -> Result<Self, AuditError> {
        let cursor = ByteCursor::new(stream);
        let tag = cursor.peek_u8()?;
        if !TokenKind::from_tag(tag).is_some_and(|kind| kind.is_header()) {
            return Err(AuditError::InvalidHeaderTag(tag, 0));
        }
        debug!(
            "Audit trail of {} bytes, using {policy:?} boundaries",
            stream.len()
        );
        Ok(Self {
            cursor,
            framer: EventFramer::new(policy),
            count: 0,
            pending_warnings: vec![],
            pending_error: None,
            done: false,
        })
    }

    /// Current offset into the source
    pub fn offset(&self) -> usize {
        self.cursor.offset()
    }

    /// Warnings raised between records that no event received
    ///
    /// Non-empty only when the trail stopped while realigning to a record boundary.
    pub fn unattached_warnings(&self) -> &[DecodeWarning] {
        &self.pending_warnings
    }

    /// Move past data at a record boundary that does not start with a header
    fn realign(&mut self, tag: u8) -> Result<(), AuditError> {
        let warning = DecodeWarning::MisalignedRecord {
            tag,
            offset: self.cursor.offset(),
        };
        warn!("{warning}");
        self.pending_warnings.push(warning);
        scan_to_trailer(&mut self.cursor)?;
        Ok(())
    }

    fn finish(&mut self, error: AuditError) -> Option<Result<Event, AuditError>> {
        self.done = true;
        debug!("Stopped after {} events: {error}", self.count);
        Some(Err(error))
    }
}

impl Iterator for AuditTrail<'_> {
    type Item = Result<Event, AuditError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if let Some(error) = self.pending_error.take() {
            return self.finish(error);
        }

        loop {
            if self.cursor.is_eof() {
                self.done = true;
                debug!("Reached end of trail after {} events", self.count);
                return None;
            }
            let tag = match self.cursor.peek_u8() {
                Ok(tag) => tag,
                Err(why) => return self.finish(why.into()),
            };
            if TokenKind::from_tag(tag).is_some_and(|kind| kind.is_header()) {
                break;
            }
            if let Err(why) = self.realign(tag) {
                return self.finish(why);
            }
        }

        let framed = match self.framer.frame(&mut self.cursor, self.count + 1) {
            Ok(framed) => framed,
            Err(why) => return self.finish(why),
        };
        self.count += 1;

        let mut event = match framed {
            Framed::Event(event) => event,
            Framed::Interrupted(event, why) => {
                self.pending_error = Some(why);
                event
            }
        };
        if !self.pending_warnings.is_empty() {
            let mut warnings = std::mem::take(&mut self.pending_warnings);
            warnings.append(&mut event.warnings);
            event.warnings = warnings;
        }
        Some(Ok(event))
    }
}
