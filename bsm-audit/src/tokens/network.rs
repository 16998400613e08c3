/*!
 Tokens describing network endpoints: IP headers, ports and sockets.
*/

use std::net::{IpAddr, Ipv4Addr};

use crate::{
    error::cursor::CursorError,
    tokens::address::{read_ipv4, read_ipv6, NetAddress},
    util::{cursor::ByteCursor, text::AuditText, writer::ByteWriter},
};

/// Longest path a `sockaddr_un` can hold
pub const UNIX_PATH_MAX: usize = 104;

/// A copy of an IPv4 packet header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IpHeader {
    pub version_ihl: u8,
    pub tos: u8,
    pub length: u16,
    pub id: u16,
    pub offset: u16,
    pub ttl: u8,
    pub protocol: u8,
    pub checksum: u16,
    pub source: Ipv4Addr,
    pub destination: Ipv4Addr,
}

impl IpHeader {
    pub(crate) fn decode(cursor: &mut ByteCursor) -> Result<Self, CursorError> {
        Ok(Self {
            version_ihl: cursor.read_u8()?,
            tos: cursor.read_u8()?,
            length: cursor.read_u16()?,
            id: cursor.read_u16()?,
            offset: cursor.read_u16()?,
            ttl: cursor.read_u8()?,
            protocol: cursor.read_u8()?,
            checksum: cursor.read_u16()?,
            source: read_ipv4(cursor)?,
            destination: read_ipv4(cursor)?,
        })
    }

    pub(crate) fn encode(&self, writer: &mut ByteWriter) {
        writer
            .u8(self.version_ihl)
            .u8(self.tos)
            .u16(self.length)
            .u16(self.id)
            .u16(self.offset)
            .u8(self.ttl)
            .u8(self.protocol)
            .u16(self.checksum)
            .bytes(&self.source.octets())
            .bytes(&self.destination.octets());
    }
}

/// An `AUT_SOCKET` token: IPv4 endpoints of a socket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Socket {
    pub socket_type: u16,
    pub local_port: u16,
    pub local_address: Ipv4Addr,
    pub remote_port: u16,
    pub remote_address: Ipv4Addr,
}

impl Socket {
    pub(crate) fn decode(cursor: &mut ByteCursor) -> Result<Self, CursorError> {
        Ok(Self {
            socket_type: cursor.read_u16()?,
            local_port: cursor.read_u16()?,
            local_address: read_ipv4(cursor)?,
            remote_port: cursor.read_u16()?,
            remote_address: read_ipv4(cursor)?,
        })
    }

    pub(crate) fn encode(&self, writer: &mut ByteWriter) {
        writer
            .u16(self.socket_type)
            .u16(self.local_port)
            .bytes(&self.local_address.octets())
            .u16(self.remote_port)
            .bytes(&self.remote_address.octets());
    }
}

/// An `AUT_SOCKET_EX` token: endpoints whose address width is chosen by `address_type`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocketEx {
    /// Protocol family, see [`protocol_name`](crate::tables::protocols::protocol_name)
    pub domain: u16,
    pub socket_type: u16,
    pub local_port: u16,
    pub local_address: NetAddress,
    pub remote_port: u16,
    pub remote_address: NetAddress,
}

impl SocketEx {
    pub(crate) fn decode(cursor: &mut ByteCursor) -> Result<Self, CursorError> {
        let domain = cursor.read_u16()?;
        let socket_type = cursor.read_u16()?;
        let address_type = u32::from(cursor.read_u16()?);
        let local_port = cursor.read_u16()?;
        let local_address = NetAddress::decode(cursor, address_type)?;
        let remote_port = cursor.read_u16()?;
        let remote_address = NetAddress::decode(cursor, address_type)?;
        Ok(Self {
            domain,
            socket_type,
            local_port,
            local_address,
            remote_port,
            remote_address,
        })
    }

    pub(crate) fn encode(&self, writer: &mut ByteWriter) {
        writer
            .u16(self.domain)
            .u16(self.socket_type)
            .u16(self.local_address.net_type() as u16)
            .u16(self.local_port);
        self.local_address.encode(writer);
        writer.u16(self.remote_port);
        self.remote_address.encode(writer);
    }
}

/// An `AUT_SOCKINET32` or `AUT_SOCKINET128` token: a `sockaddr_in` or `sockaddr_in6`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SockInet {
    pub family: u16,
    pub port: u16,
    pub address: IpAddr,
}

impl SockInet {
    pub(crate) fn decode_v4(cursor: &mut ByteCursor) -> Result<Self, CursorError> {
        Ok(Self {
            family: cursor.read_u16()?,
            port: cursor.read_u16()?,
            address: IpAddr::V4(read_ipv4(cursor)?),
        })
    }

    pub(crate) fn decode_v6(cursor: &mut ByteCursor) -> Result<Self, CursorError> {
        Ok(Self {
            family: cursor.read_u16()?,
            port: cursor.read_u16()?,
            address: IpAddr::V6(read_ipv6(cursor)?),
        })
    }

    pub(crate) fn encode(&self, writer: &mut ByteWriter) {
        writer.u16(self.family).u16(self.port);
        match self.address {
            IpAddr::V4(addr) => writer.bytes(&addr.octets()),
            IpAddr::V6(addr) => writer.bytes(&addr.octets()),
        };
    }
}

/// An `AUT_SOCKUNIX` token: a `sockaddr_un`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SockUnix {
    pub family: u16,
    pub path: AuditText,
}

impl SockUnix {
    pub(crate) fn decode(cursor: &mut ByteCursor) -> Result<Self, CursorError> {
        let family = cursor.read_u16()?;
        let path = AuditText::from_bytes(cursor.read_c_string(UNIX_PATH_MAX)?);
        Ok(Self { family, path })
    }

    pub(crate) fn encode(&self, writer: &mut ByteWriter) {
        writer.u16(self.family).c_string(self.path.as_str());
    }
}

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;

    use crate::{
        tokens::{
            address::NetAddress,
            network::{IpHeader, SockUnix, SocketEx},
        },
        util::cursor::ByteCursor,
    };

    #[test]
    fn can_decode_ip_header() {
        let bytes = [
            0x45, 0x00, 0x00, 0x54, 0x1c, 0x46, 0x40, 0x00, 0x40, 0x01, 0xb1, 0xe6, 0xc0, 0xa8,
            0x00, 0x68, 0xc0, 0xa8, 0x00, 0x01,
        ];
        let mut cursor = ByteCursor::new(&bytes);
        let header = IpHeader::decode(&mut cursor).unwrap();

        assert_eq!(header.version_ihl, 0x45);
        assert_eq!(header.length, 84);
        assert_eq!(header.ttl, 64);
        assert_eq!(header.protocol, 1);
        assert_eq!(header.source, Ipv4Addr::new(192, 168, 0, 104));
        assert_eq!(header.destination, Ipv4Addr::new(192, 168, 0, 1));
        assert!(cursor.is_eof());
    }

    #[test]
    fn can_decode_socket_ex_v4() {
        let bytes = [
            0x00, 0x02, 0x00, 0x01, 0x00, 0x04, // domain, type, address type
            0x1f, 0x90, 127, 0, 0, 1, // local
            0xc3, 0x50, 10, 1, 2, 3, // remote
        ];
        let mut cursor = ByteCursor::new(&bytes);
        let socket = SocketEx::decode(&mut cursor).unwrap();

        assert_eq!(socket.domain, 2);
        assert_eq!(socket.local_port, 8080);
        assert_eq!(
            socket.local_address,
            NetAddress::IPv4(Ipv4Addr::new(127, 0, 0, 1))
        );
        assert_eq!(socket.remote_port, 50000);
        assert_eq!(socket.remote_address.to_string(), "10.1.2.3");
        assert!(cursor.is_eof());
    }

    #[test]
    fn can_decode_sock_unix() {
        let bytes = b"\x00\x01/var/run/syslog\x00\x28";
        let mut cursor = ByteCursor::new(bytes);
        let socket = SockUnix::decode(&mut cursor).unwrap();

        assert_eq!(socket.family, 1);
        assert_eq!(socket.path.as_str(), "/var/run/syslog");
        assert_eq!(cursor.peek_u8().unwrap(), 0x28);
    }
}
