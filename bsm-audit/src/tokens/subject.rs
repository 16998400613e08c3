/*!
 Subject and process tokens, which describe who caused an event.

 All eight variants share the same identity core and differ only in the width of the
 terminal port and in how the terminal address is stored.
*/

use crate::{
    error::cursor::CursorError,
    tokens::address::{read_ipv4, NetAddress},
    util::{cursor::ByteCursor, writer::ByteWriter},
};

/// Width of the terminal port field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortWidth {
    Bits32,
    Bits64,
}

/// The identity block shared by subject and process tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Identity {
    pub audit_uid: u32,
    pub effective_uid: u32,
    pub effective_gid: u32,
    pub real_uid: u32,
    pub real_gid: u32,
    pub pid: u32,
    pub session_id: u32,
}

impl Identity {
    fn decode(cursor: &mut ByteCursor) -> Result<Self, CursorError> {
        Ok(Self {
            audit_uid: cursor.read_u32()?,
            effective_uid: cursor.read_u32()?,
            effective_gid: cursor.read_u32()?,
            real_uid: cursor.read_u32()?,
            real_gid: cursor.read_u32()?,
            pid: cursor.read_u32()?,
            session_id: cursor.read_u32()?,
        })
    }

    fn encode(&self, writer: &mut ByteWriter) {
        writer
            .u32(self.audit_uid)
            .u32(self.effective_uid)
            .u32(self.effective_gid)
            .u32(self.real_uid)
            .u32(self.real_gid)
            .u32(self.pid)
            .u32(self.session_id);
    }
}

/// Payload of every subject and process token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subject {
    pub identity: Identity,
    /// Terminal port, widened to `u64` for the 32-bit variants
    pub port: u64,
    /// Terminal machine address
    pub address: NetAddress,
}

impl Subject {
    /// Decode a subject whose address is a bare IPv4 value
    pub(crate) fn decode(cursor: &mut ByteCursor, width: PortWidth) -> Result<Self, CursorError> {
        let identity = Identity::decode(cursor)?;
        let port = read_port(cursor, width)?;
        let address = NetAddress::IPv4(read_ipv4(cursor)?);
        Ok(Self {
            identity,
            port,
            address,
        })
    }

    /// Decode a subject whose address is a `{type, addr}` union
    pub(crate) fn decode_ex(cursor: &mut ByteCursor, width: PortWidth) -> Result<Self, CursorError> {
        let identity = Identity::decode(cursor)?;
        let port = read_port(cursor, width)?;
        let address = NetAddress::decode_ex(cursor)?;
        Ok(Self {
            identity,
            port,
            address,
        })
    }

    pub(crate) fn encode(&self, writer: &mut ByteWriter, width: PortWidth, extended: bool) {
        self.identity.encode(writer);
        match width {
            PortWidth::Bits32 => writer.u32(self.port as u32),
            PortWidth::Bits64 => writer.u64(self.port),
        };
        if extended {
            self.address.encode_ex(writer);
        } else {
            self.address.encode(writer);
        }
    }
}

fn read_port(cursor: &mut ByteCursor, width: PortWidth) -> Result<u64, CursorError> {
    match width {
        PortWidth::Bits32 => Ok(u64::from(cursor.read_u32()?)),
        PortWidth::Bits64 => cursor.read_u64(),
    }
}

/// Read the group list of an `AUT_NEWGROUPS` token
pub(crate) fn decode_groups(cursor: &mut ByteCursor) -> Result<Vec<u32>, CursorError> {
    let count = cursor.read_u16()?;
    (0..count).map(|_| cursor.read_u32()).collect()
}
