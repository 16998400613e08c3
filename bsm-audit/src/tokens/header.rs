/*!
 Tokens that open and close a record.
*/

use crate::{
    error::cursor::CursorError,
    tokens::{address::NetAddress, registry::TokenKind},
    util::{cursor::ByteCursor, writer::ByteWriter},
};

/// The header version this decoder was written against
pub const AUDIT_HEADER_VERSION: u8 = 11;
/// Every trailer carries this magic number
pub const AUT_TRAILER_MAGIC: u16 = 0xb105;
/// Encoded size of a trailer, including its tag
pub const TRAILER_SIZE: usize = 7;

/// Width of the timestamp fields in a header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeWidth {
    Bits32,
    Bits64,
}

/// The three mutually exclusive header layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderVariant {
    /// `AUT_HEADER32`
    Time32,
    /// `AUT_HEADER64`
    Time64,
    /// `AUT_HEADER32_EX` or `AUT_HEADER64_EX`, with the address of the recording host
    Extended(TimeWidth, NetAddress),
}

/// The token that opens every record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub variant: HeaderVariant,
    /// Total byte length of the record, header tag and trailer included
    pub length: u32,
    pub version: u8,
    /// Key into the [`EventCatalog`](crate::tables::events::EventCatalog)
    pub event_type: u16,
    pub modifier: u16,
    /// Seconds since the Unix epoch
    pub seconds: u64,
    /// Sub-second part of the timestamp
    pub microseconds: u64,
}

impl Header {
    /// Decode the payload of a header of the given kind
    pub(crate) fn decode(cursor: &mut ByteCursor, kind: TokenKind) -> Result<Self, CursorError> {
        let length = cursor.read_u32()?;
        let version = cursor.read_u8()?;
        let event_type = cursor.read_u16()?;
        let modifier = cursor.read_u16()?;

        let (variant, width) = match kind {
            TokenKind::Header32Ex => (
                HeaderVariant::Extended(TimeWidth::Bits32, NetAddress::decode_ex(cursor)?),
                TimeWidth::Bits32,
            ),
            TokenKind::Header64Ex => (
                HeaderVariant::Extended(TimeWidth::Bits64, NetAddress::decode_ex(cursor)?),
                TimeWidth::Bits64,
            ),
            TokenKind::Header64 => (HeaderVariant::Time64, TimeWidth::Bits64),
            _ => (HeaderVariant::Time32, TimeWidth::Bits32),
        };

        let (seconds, microseconds) = match width {
            TimeWidth::Bits32 => (
                u64::from(cursor.read_u32()?),
                u64::from(cursor.read_u32()?),
            ),
            TimeWidth::Bits64 => (cursor.read_u64()?, cursor.read_u64()?),
        };

        Ok(Self {
            variant,
            length,
            version,
            event_type,
            modifier,
            seconds,
            microseconds,
        })
    }

    /// The registry kind that produced this header
    pub fn kind(&self) -> TokenKind {
        match self.variant {
            HeaderVariant::Time32 => TokenKind::Header32,
            HeaderVariant::Time64 => TokenKind::Header64,
            HeaderVariant::Extended(TimeWidth::Bits32, _) => TokenKind::Header32Ex,
            HeaderVariant::Extended(TimeWidth::Bits64, _) => TokenKind::Header64Ex,
        }
    }

    /// The host address, only present on extended headers
    pub fn address(&self) -> Option<&NetAddress> {
        match &self.variant {
            HeaderVariant::Extended(_, address) => Some(address),
            _ => None,
        }
    }

    pub(crate) fn encode(&self, writer: &mut ByteWriter) {
        writer
            .u32(self.length)
            .u8(self.version)
            .u16(self.event_type)
            .u16(self.modifier);
        let width = match &self.variant {
            HeaderVariant::Time32 => TimeWidth::Bits32,
            HeaderVariant::Time64 => TimeWidth::Bits64,
            HeaderVariant::Extended(width, address) => {
                address.encode_ex(writer);
                *width
            }
        };
        match width {
            TimeWidth::Bits32 => writer
                .u32(self.seconds as u32)
                .u32(self.microseconds as u32),
            TimeWidth::Bits64 => writer.u64(self.seconds).u64(self.microseconds),
        };
    }
}

/// The token that closes every record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trailer {
    /// Should always be [`AUT_TRAILER_MAGIC`]
    pub magic: u16,
    /// Total byte length of the record, as recorded at the end of it
    pub record_length: u32,
}

impl Trailer {
    pub(crate) fn decode(cursor: &mut ByteCursor) -> Result<Self, CursorError> {
        Ok(Self {
            magic: cursor.read_u16()?,
            record_length: cursor.read_u32()?,
        })
    }

    pub fn has_valid_magic(&self) -> bool {
        self.magic == AUT_TRAILER_MAGIC
    }

    pub(crate) fn encode(&self, writer: &mut ByteWriter) {
        writer.u16(self.magic).u32(self.record_length);
    }
}

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;

    use crate::{
        tokens::{
            address::NetAddress,
            header::{Header, HeaderVariant, TimeWidth, Trailer},
            registry::TokenKind,
        },
        util::cursor::ByteCursor,
    };

    #[test]
    fn can_decode_header32() {
        let bytes = [
            0x00, 0x00, 0x00, 0x38, // length
            0x0b, // version
            0x00, 0x2d, // event type
            0x00, 0x00, // modifier
            0x53, 0x05, 0xca, 0x7b, // seconds
            0x00, 0x00, 0x01, 0x42, // microseconds
        ];
        let mut cursor = ByteCursor::new(&bytes);
        let header = Header::decode(&mut cursor, TokenKind::Header32).unwrap();

        let expected = Header {
            variant: HeaderVariant::Time32,
            length: 56,
            version: 11,
            event_type: 45,
            modifier: 0,
            seconds: 0x5305ca7b,
            microseconds: 322,
        };
        assert_eq!(header, expected);
        assert!(cursor.is_eof());
    }

    #[test]
    fn can_decode_header64_ex() {
        let bytes = [
            0x00, 0x00, 0x00, 0x40, 0x0b, 0x00, 0x01, 0x00, 0x00, // length .. modifier
            0x00, 0x00, 0x00, 0x04, 0x0a, 0x00, 0x00, 0x01, // net type, address
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, // seconds
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x20, // microseconds
        ];
        let mut cursor = ByteCursor::new(&bytes);
        let header = Header::decode(&mut cursor, TokenKind::Header64Ex).unwrap();

        assert_eq!(
            header.variant,
            HeaderVariant::Extended(
                TimeWidth::Bits64,
                NetAddress::IPv4(Ipv4Addr::new(10, 0, 0, 1))
            )
        );
        assert_eq!(header.seconds, 16);
        assert_eq!(header.microseconds, 32);
        assert_eq!(header.kind(), TokenKind::Header64Ex);
        assert!(cursor.is_eof());
    }

    #[test]
    fn can_validate_trailer_magic() {
        let mut cursor = ByteCursor::new(&[0xb1, 0x05, 0x00, 0x00, 0x00, 0x38]);
        let trailer = Trailer::decode(&mut cursor).unwrap();

        assert!(trailer.has_valid_magic());
        assert_eq!(trailer.record_length, 56);
        assert!(!Trailer {
            magic: 0xb106,
            record_length: 56
        }
        .has_valid_magic());
    }

    #[test]
    fn cant_decode_short_header() {
        let mut cursor = ByteCursor::new(&[0x00, 0x00, 0x00, 0x38, 0x0b]);
        assert!(Header::decode(&mut cursor, TokenKind::Header32).is_err());
    }
}
