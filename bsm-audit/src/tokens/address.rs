/*!
 Network addresses embedded in headers, subjects, processes and sockets.
*/

use std::{
    fmt::{Display, Formatter, Result},
    net::{Ipv4Addr, Ipv6Addr},
};

use crate::{error::cursor::CursorError, util::cursor::ByteCursor, util::writer::ByteWriter};

/// Address type discriminator for an IPv4 address
pub const AU_IPV4: u32 = 4;
/// Address type discriminator for an IPv6 address
pub const AU_IPV6: u32 = 16;

/// An address whose layout is selected by a `net_type` discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetAddress {
    IPv4(Ipv4Addr),
    IPv6(Ipv6Addr),
    /// The discriminator was neither [`AU_IPV4`] nor [`AU_IPV6`]; no address bytes were read
    Unknown(u32),
}

impl NetAddress {
    /// Read the address bytes selected by `net_type`
    pub(crate) fn decode(cursor: &mut ByteCursor, net_type: u32) -> std::result::Result<Self, CursorError> {
        match net_type {
            AU_IPV4 => Ok(Self::IPv4(read_ipv4(cursor)?)),
            AU_IPV6 => Ok(Self::IPv6(read_ipv6(cursor)?)),
            other => Ok(Self::Unknown(other)),
        }
    }

    /// Read a `u32` discriminator followed by the address it selects
    pub(crate) fn decode_ex(cursor: &mut ByteCursor) -> std::result::Result<Self, CursorError> {
        let net_type = cursor.read_u32()?;
        Self::decode(cursor, net_type)
    }

    /// The discriminator value this address was read with
    pub fn net_type(&self) -> u32 {
        match self {
            NetAddress::IPv4(_) => AU_IPV4,
            NetAddress::IPv6(_) => AU_IPV6,
            NetAddress::Unknown(net_type) => *net_type,
        }
    }

    /// Write only the address bytes, without the discriminator
    pub(crate) fn encode(&self, writer: &mut ByteWriter) {
        match self {
            NetAddress::IPv4(addr) => {
                writer.bytes(&addr.octets());
            }
            NetAddress::IPv6(addr) => {
                writer.bytes(&addr.octets());
            }
            NetAddress::Unknown(_) => {}
        }
    }

    /// Write the `u32` discriminator and the address bytes
    pub(crate) fn encode_ex(&self, writer: &mut ByteWriter) {
        writer.u32(self.net_type());
        self.encode(writer);
    }
}

impl Display for NetAddress {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result {
        match self {
            NetAddress::IPv4(addr) => write!(fmt, "{addr}"),
            NetAddress::IPv6(addr) => write!(fmt, "{addr}"),
            NetAddress::Unknown(net_type) => write!(fmt, "unknown address (type {net_type})"),
        }
    }
}

/// Read 4 big-endian bytes as a dotted-quad address
pub(crate) fn read_ipv4(cursor: &mut ByteCursor) -> std::result::Result<Ipv4Addr, CursorError> {
    Ok(Ipv4Addr::from(cursor.read_u32()?))
}

/// Read two big-endian 64-bit halves as one 128-bit address
pub(crate) fn read_ipv6(cursor: &mut ByteCursor) -> std::result::Result<Ipv6Addr, CursorError> {
    let high = cursor.read_u64()?;
    let low = cursor.read_u64()?;
    Ok(ipv6_from_halves(high, low))
}

pub fn ipv6_from_halves(high: u64, low: u64) -> Ipv6Addr {
    Ipv6Addr::from((u128::from(high) << 64) | u128::from(low))
}
