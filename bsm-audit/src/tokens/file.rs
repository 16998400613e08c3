/*!
 Tokens describing files: paths, attributes and free text.
*/

use crate::{
    error::cursor::CursorError,
    util::{cursor::ByteCursor, text::AuditText, writer::ByteWriter},
};

/// Read a `u16` length followed by that many bytes of NUL-terminated text
pub(crate) fn decode_text16(cursor: &mut ByteCursor) -> Result<AuditText, CursorError> {
    let length = cursor.read_u16()?;
    Ok(AuditText::from_bytes(
        cursor.read_exact_bytes(usize::from(length))?,
    ))
}

/// Read a `u16` length followed by that many raw bytes
pub(crate) fn decode_opaque(cursor: &mut ByteCursor) -> Result<Vec<u8>, CursorError> {
    let length = cursor.read_u16()?;
    Ok(cursor.read_exact_bytes(usize::from(length))?.to_vec())
}

/// Width of the device field in an attribute token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceWidth {
    Bits32,
    Bits64,
}

/// An `AUT_ATTR32` or `AUT_ATTR64` token: the `vnode` attributes of a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attr {
    pub mode: u32,
    pub uid: u32,
    pub gid: u32,
    pub fsid: u32,
    pub node_id: u64,
    /// Widened to `u64` for `AUT_ATTR32`
    pub device: u64,
}

impl Attr {
    pub(crate) fn decode(cursor: &mut ByteCursor, width: DeviceWidth) -> Result<Self, CursorError> {
        Ok(Self {
            mode: cursor.read_u32()?,
            uid: cursor.read_u32()?,
            gid: cursor.read_u32()?,
            fsid: cursor.read_u32()?,
            node_id: cursor.read_u64()?,
            device: match width {
                DeviceWidth::Bits32 => u64::from(cursor.read_u32()?),
                DeviceWidth::Bits64 => cursor.read_u64()?,
            },
        })
    }

    pub(crate) fn encode(&self, writer: &mut ByteWriter, width: DeviceWidth) {
        writer
            .u32(self.mode)
            .u32(self.uid)
            .u32(self.gid)
            .u32(self.fsid)
            .u64(self.node_id);
        match width {
            DeviceWidth::Bits32 => writer.u32(self.device as u32),
            DeviceWidth::Bits64 => writer.u64(self.device),
        };
    }
}

/// An `AUT_OTHER_FILE32` token, written when a trail is rotated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtherFile {
    pub seconds: u32,
    pub milliseconds: u32,
    pub name: AuditText,
}

impl OtherFile {
    pub(crate) fn decode(cursor: &mut ByteCursor) -> Result<Self, CursorError> {
        Ok(Self {
            seconds: cursor.read_u32()?,
            milliseconds: cursor.read_u32()?,
            name: decode_text16(cursor)?,
        })
    }

    pub(crate) fn encode(&self, writer: &mut ByteWriter) {
        writer
            .u32(self.seconds)
            .u32(self.milliseconds)
            .text16(self.name.as_str());
    }
}
