/*!
 Big-endian byte writer used to re-encode decoded tokens.
*/

/// Accumulates big-endian fields into a byte buffer
#[derive(Debug, Default)]
pub struct ByteWriter {
    buf: Vec<u8>,
}

impl ByteWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn u8(&mut self, value: u8) -> &mut Self {
        self.buf.push(value);
        self
    }

    pub fn u16(&mut self, value: u16) -> &mut Self {
        self.buf.extend_from_slice(&value.to_be_bytes());
        self
    }

    pub fn u32(&mut self, value: u32) -> &mut Self {
        self.buf.extend_from_slice(&value.to_be_bytes());
        self
    }

    pub fn u64(&mut self, value: u64) -> &mut Self {
        self.buf.extend_from_slice(&value.to_be_bytes());
        self
    }

    pub fn bytes(&mut self, value: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(value);
        self
    }

    /// Write a `u16` length followed by the text and its NUL terminator
    pub fn text16(&mut self, value: &str) -> &mut Self {
        let len = u16::try_from(value.len() + 1).unwrap_or(u16::MAX);
        self.u16(len);
        self.bytes(&value.as_bytes()[..usize::from(len) - 1]);
        self.u8(0)
    }

    /// Write the text followed by a NUL terminator, with no length prefix
    pub fn c_string(&mut self, value: &str) -> &mut Self {
        self.bytes(value.as_bytes());
        self.u8(0)
    }

    pub fn finish(self) -> Vec<u8> {
        self.buf
    }
}
