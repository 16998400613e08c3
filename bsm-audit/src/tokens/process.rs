/*!
 Tokens describing what a process did: arguments, environment and results.
*/

use crate::{
    error::cursor::CursorError,
    tokens::file::decode_text16,
    util::{cursor::ByteCursor, text::AuditText, writer::ByteWriter},
};

/// Width of the value field in argument and return tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueWidth {
    Bits32,
    Bits64,
}

fn read_value(cursor: &mut ByteCursor, width: ValueWidth) -> Result<u64, CursorError> {
    match width {
        ValueWidth::Bits32 => Ok(u64::from(cursor.read_u32()?)),
        ValueWidth::Bits64 => cursor.read_u64(),
    }
}

fn write_value(writer: &mut ByteWriter, value: u64, width: ValueWidth) {
    match width {
        ValueWidth::Bits32 => writer.u32(value as u32),
        ValueWidth::Bits64 => writer.u64(value),
    };
}

/// An `AUT_ARG32` or `AUT_ARG64` token: one system call argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    /// Position of the argument in the call
    pub index: u8,
    pub value: u64,
    /// Name of the argument
    pub name: AuditText,
}

impl Argument {
    pub(crate) fn decode(cursor: &mut ByteCursor, width: ValueWidth) -> Result<Self, CursorError> {
        Ok(Self {
            index: cursor.read_u8()?,
            value: read_value(cursor, width)?,
            name: decode_text16(cursor)?,
        })
    }

    pub(crate) fn encode(&self, writer: &mut ByteWriter, width: ValueWidth) {
        writer.u8(self.index);
        write_value(writer, self.value, width);
        writer.text16(self.name.as_str());
    }
}

/// An `AUT_RETURN32` or `AUT_RETURN64` token: the result of a system call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Return {
    /// Error number, see [`error_name`](crate::tables::errors::error_name)
    pub status: u8,
    pub value: u64,
}

impl Return {
    pub(crate) fn decode(cursor: &mut ByteCursor, width: ValueWidth) -> Result<Self, CursorError> {
        Ok(Self {
            status: cursor.read_u8()?,
            value: read_value(cursor, width)?,
        })
    }

    pub(crate) fn encode(&self, writer: &mut ByteWriter, width: ValueWidth) {
        writer.u8(self.status);
        write_value(writer, self.value, width);
    }
}

/// An `AUT_EXIT` token: exit status of a process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exit {
    pub status: u32,
    pub value: u32,
}

impl Exit {
    pub(crate) fn decode(cursor: &mut ByteCursor) -> Result<Self, CursorError> {
        Ok(Self {
            status: cursor.read_u32()?,
            value: cursor.read_u32()?,
        })
    }

    pub(crate) fn encode(&self, writer: &mut ByteWriter) {
        writer.u32(self.status).u32(self.value);
    }
}

/// Read the `u32` count and NUL-terminated strings of `AUT_EXEC_ARGS` and `AUT_EXEC_ENV`
pub(crate) fn decode_strings(cursor: &mut ByteCursor) -> Result<Vec<AuditText>, CursorError> {
    let count = cursor.read_u32()?;
    let mut strings = Vec::new();
    for _ in 0..count {
        strings.push(AuditText::from_bytes(cursor.read_c_string(usize::MAX)?));
    }
    Ok(strings)
}

pub(crate) fn encode_strings(writer: &mut ByteWriter, strings: &[AuditText]) {
    writer.u32(strings.len() as u32);
    strings.iter().for_each(|string| {
        writer.c_string(string.as_str());
    });
}

#[cfg(test)]
mod tests {
    use crate::{
        tokens::process::{decode_strings, Argument, Return, ValueWidth},
        util::cursor::ByteCursor,
    };

    #[test]
    fn can_decode_argument32() {
        let bytes = b"\x02\x00\x00\x01\xed\x00\x05mode\x00";
        let mut cursor = ByteCursor::new(bytes);
        let arg = Argument::decode(&mut cursor, ValueWidth::Bits32).unwrap();

        assert_eq!(arg.index, 2);
        assert_eq!(arg.value, 0o755);
        assert_eq!(arg.name.as_str(), "mode");
        assert!(cursor.is_eof());
    }

    #[test]
    fn can_decode_argument64() {
        let bytes = b"\x01\x00\x00\x00\x01\x00\x00\x00\x00\x00\x03fd\x00";
        let mut cursor = ByteCursor::new(bytes);
        let arg = Argument::decode(&mut cursor, ValueWidth::Bits64).unwrap();

        assert_eq!(arg.value, 0x1_0000_0000);
        assert_eq!(arg.name.as_str(), "fd");
    }

    #[test]
    fn can_decode_return64() {
        let bytes = [0x02, 0, 0, 0, 0, 0, 0, 0, 0xff];
        let mut cursor = ByteCursor::new(&bytes);
        let ret = Return::decode(&mut cursor, ValueWidth::Bits64).unwrap();

        assert_eq!(ret.status, 2);
        assert_eq!(ret.value, 255);
    }

    #[test]
    fn can_decode_exec_args() {
        let bytes = b"\x00\x00\x00\x03ls\x00-la\x00/tmp\x00";
        let mut cursor = ByteCursor::new(bytes);
        let args = decode_strings(&mut cursor).unwrap();

        assert_eq!(
            args.iter().map(|arg| arg.as_str()).collect::<Vec<_>>(),
            vec!["ls", "-la", "/tmp"]
        );
        assert!(cursor.is_eof());
    }

    #[test]
    fn cant_decode_unterminated_exec_args() {
        let bytes = b"\x00\x00\x00\x02ls\x00-la";
        let mut cursor = ByteCursor::new(bytes);

        assert!(decode_strings(&mut cursor).is_err());
    }
}
