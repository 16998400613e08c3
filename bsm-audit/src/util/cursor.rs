/*!
 A bounds-checked, seekable reader over the bytes of an audit trail.

 All integers in BSM are stored big-endian ("network order").
*/

use crate::error::cursor::CursorError;

/// Sequential reader over one byte source that tracks its absolute offset
///
/// The offset always satisfies `0 <= offset <= len`; reads that would pass the end of the
/// source fail without moving the cursor.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    /// The audit trail we want to parse
    stream: &'a [u8],
    /// The current index we are at in the stream
    idx: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(stream: &'a [u8]) -> Self {
        Self { stream, idx: 0 }
    }

    /// The current absolute offset
    pub fn offset(&self) -> usize {
        self.idx
    }

    pub fn is_eof(&self) -> bool {
        self.idx >= self.stream.len()
    }

    /// Move to an absolute offset; `offset == len` is allowed and means end of source
    pub fn seek(&mut self, offset: usize) -> Result<(), CursorError> {
        if offset > self.stream.len() {
            return Err(CursorError::SeekOutOfBounds(offset, self.stream.len()));
        }
        self.idx = offset;
        Ok(())
    }

    /// Remember the current position so a tentative read can be undone
    pub fn snapshot(&self) -> usize {
        self.idx
    }

    /// Return to a position taken from [`ByteCursor::snapshot`]
    pub fn restore(&mut self, snapshot: usize) {
        self.idx = snapshot.min(self.stream.len());
    }

    /// Read the byte at the offset without consuming it
    pub fn peek_u8(&self) -> Result<u8, CursorError> {
        self.stream
            .get(self.idx)
            .copied()
            .ok_or(CursorError::OutOfBounds(self.idx, 1, self.stream.len()))
    }

    /// Read exactly `n` bytes from the stream
    pub fn read_exact_bytes(&mut self, n: usize) -> Result<&'a [u8], CursorError> {
        let range = self
            .idx
            .checked_add(n)
            .and_then(|end| self.stream.get(self.idx..end))
            .ok_or(CursorError::OutOfBounds(self.idx, n, self.stream.len()))?;
        self.idx += n;
        Ok(range)
    }

    /// Read a fixed-size array, used by the integer readers below
    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], CursorError> {
        let mut out = [0; N];
        out.copy_from_slice(self.read_exact_bytes(N)?);
        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8, CursorError> {
        Ok(u8::from_be_bytes(self.read_array()?))
    }

    pub fn read_u16(&mut self) -> Result<u16, CursorError> {
        Ok(u16::from_be_bytes(self.read_array()?))
    }

    pub fn read_u32(&mut self) -> Result<u32, CursorError> {
        Ok(u32::from_be_bytes(self.read_array()?))
    }

    pub fn read_u64(&mut self) -> Result<u64, CursorError> {
        Ok(u64::from_be_bytes(self.read_array()?))
    }

    /// Read bytes up to and including the next NUL, returning them without the terminator
    ///
    /// At most `limit` bytes are consumed; if no NUL is found inside the limit the whole
    /// span is returned.
    pub fn read_c_string(&mut self, limit: usize) -> Result<&'a [u8], CursorError> {
        let window = &self.stream[self.idx..];
        match window.iter().take(limit).position(|byte| *byte == 0) {
            Some(nul) => {
                let bytes = self.read_exact_bytes(nul + 1)?;
                Ok(&bytes[..nul])
            }
            None if window.len() >= limit => self.read_exact_bytes(limit),
            None => Err(CursorError::OutOfBounds(
                self.idx,
                window.len() + 1,
                self.stream.len(),
            )),
        }
    }
}
