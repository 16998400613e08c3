/*!
 Tokens describing System V IPC objects.
*/

use crate::{
    error::cursor::CursorError,
    tables::UNKNOWN,
    util::{cursor::ByteCursor, writer::ByteWriter},
};

/// An `AUT_IPC` token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ipc {
    /// Message queue, semaphore or shared memory
    pub ipc_type: u8,
    pub id: u32,
}

impl Ipc {
    pub(crate) fn decode(cursor: &mut ByteCursor) -> Result<Self, CursorError> {
        Ok(Self {
            ipc_type: cursor.read_u8()?,
            id: cursor.read_u32()?,
        })
    }

    pub(crate) fn encode(&self, writer: &mut ByteWriter) {
        writer.u8(self.ipc_type).u32(self.id);
    }

    pub fn type_name(&self) -> &'static str {
        match self.ipc_type {
            1 => "message queue",
            2 => "semaphore",
            3 => "shared memory",
            _ => UNKNOWN,
        }
    }
}

/// An `AUT_IPC_PERM` token: owner and mode of an IPC object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IpcPerm {
    pub uid: u32,
    pub gid: u32,
    pub creator_uid: u32,
    pub creator_gid: u32,
    pub mode: u32,
    pub sequence: u32,
    pub key: u32,
}

impl IpcPerm {
    pub(crate) fn decode(cursor: &mut ByteCursor) -> Result<Self, CursorError> {
        Ok(Self {
            uid: cursor.read_u32()?,
            gid: cursor.read_u32()?,
            creator_uid: cursor.read_u32()?,
            creator_gid: cursor.read_u32()?,
            mode: cursor.read_u32()?,
            sequence: cursor.read_u32()?,
            key: cursor.read_u32()?,
        })
    }

    pub(crate) fn encode(&self, writer: &mut ByteWriter) {
        writer
            .u32(self.uid)
            .u32(self.gid)
            .u32(self.creator_uid)
            .u32(self.creator_gid)
            .u32(self.mode)
            .u32(self.sequence)
            .u32(self.key);
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        error::cursor::CursorError,
        tokens::ipc::{Ipc, IpcPerm},
        util::cursor::ByteCursor,
    };

    #[test]
    fn can_decode_ipc() {
        let bytes = [0x02, 0x00, 0x01, 0x00, 0x07];
        let mut cursor = ByteCursor::new(&bytes);
        let ipc = Ipc::decode(&mut cursor).unwrap();

        assert_eq!(ipc, Ipc { ipc_type: 2, id: 0x10007 });
        assert_eq!(ipc.type_name(), "semaphore");
        assert!(cursor.is_eof());
    }

    #[test]
    fn can_name_unknown_ipc_type() {
        let ipc = Ipc { ipc_type: 9, id: 1 };
        assert_eq!(ipc.type_name(), "UNKNOWN");
    }

    #[test]
    fn cant_decode_short_ipc_perm() {
        let bytes = [0u8; 27];
        let mut cursor = ByteCursor::new(&bytes);
        assert!(matches!(
            IpcPerm::decode(&mut cursor),
            Err(CursorError::OutOfBounds(..))
        ));
    }
}
