/*!
 Strategies that move the cursor back to a record boundary after undecodable data.
*/

use log::debug;

use crate::{
    error::audit::AuditError,
    tokens::{header::Trailer, registry::AUT_TRAILER},
    util::cursor::ByteCursor,
};

/// Discard the rest of a record by jumping to its declared end
///
/// Fails with [`AuditError::TruncatedStream`] if the declared end lies past the source.
pub fn seek_to_boundary(cursor: &mut ByteCursor, end_offset: usize) -> Result<(), AuditError> {
    debug!("Resync: seeking from {:#x} to {end_offset:#x}", cursor.offset());
    cursor.seek(end_offset)?;
    Ok(())
}

/// Scan forward one byte at a time for a trailer with valid magic
///
/// Each candidate trailer tag is decoded tentatively; if the magic does not match, the cursor
/// is restored and the scan continues one byte later. On success the cursor sits right after
/// the trailer and the offset of its tag is returned.
pub fn scan_to_trailer(cursor: &mut ByteCursor) -> Result<usize, AuditError> {
    let start = cursor.offset();
    loop {
        let candidate = cursor.snapshot();
        if cursor.read_u8()? != AUT_TRAILER {
            continue;
        }
        match Trailer::decode(cursor) {
            Ok(trailer) if trailer.has_valid_magic() => {
                debug!(
                    "Resync: found trailer at {candidate:#x} after scanning {} bytes",
                    candidate - start
                );
                return Ok(candidate);
            }
            _ => cursor.restore(candidate + 1),
        }
    }
}
