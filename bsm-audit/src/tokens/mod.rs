/*!
 Contains the data structures for every token this decoder understands.

 ## Overview

 A BSM record is a sequence of tokens. Each token starts with a one-byte tag that selects
 its layout; the [`registry`] maps tags to [`TokenKind`]s and [`Token::decode`] reads the
 payload for a kind into a [`Token`]. Decoded tokens are immutable and can be written
 back to their original bytes with [`Token::to_bytes`].
*/

pub mod address;
pub mod data;
pub mod file;
pub mod header;
pub mod ipc;
pub mod network;
pub mod process;
pub mod registry;
pub mod subject;

use std::net::Ipv4Addr;

use crate::{
    error::token::TokenError,
    tokens::{
        address::{read_ipv4, NetAddress},
        data::Data,
        file::{decode_opaque, decode_text16, Attr, DeviceWidth, OtherFile},
        header::{Header, Trailer},
        ipc::{Ipc, IpcPerm},
        network::{IpHeader, SockInet, SockUnix, Socket, SocketEx},
        process::{decode_strings, encode_strings, Argument, Exit, Return, ValueWidth},
        registry::TokenKind,
        subject::{decode_groups, PortWidth, Subject},
    },
    util::{cursor::ByteCursor, text::AuditText, writer::ByteWriter},
};

/// A decoded token, one variant per [`TokenKind`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Header(Header),
    Trailer(Trailer),
    OtherFile32(OtherFile),
    Data(Data),
    Ipc(Ipc),
    Path(AuditText),
    AttrPath(AuditText),
    Text(AuditText),
    ZoneName(AuditText),
    Opaque(Vec<u8>),
    Subject32(Subject),
    Subject64(Subject),
    Subject32Ex(Subject),
    Subject64Ex(Subject),
    Process32(Subject),
    Process64(Subject),
    Process32Ex(Subject),
    Process64Ex(Subject),
    Return32(Return),
    Return64(Return),
    Arg32(Argument),
    Arg64(Argument),
    Exit(Exit),
    ExecArgs(Vec<AuditText>),
    ExecEnv(Vec<AuditText>),
    InAddr(Ipv4Addr),
    InAddrEx(NetAddress),
    Ip(IpHeader),
    IpPort(u16),
    Socket(Socket),
    SocketEx(SocketEx),
    SockInet32(SockInet),
    SockInet128(SockInet),
    SockUnix(SockUnix),
    Sequence(u32),
    IpcPerm(IpcPerm),
    NewGroups(Vec<u32>),
    Attr32(Attr),
    Attr64(Attr),
}

impl Token {
    /// Decode the payload of a token whose tag has already been read
    pub fn decode(cursor: &mut ByteCursor, kind: TokenKind) -> Result<Self, TokenError> {
        let token = match kind {
            TokenKind::Header32
            | TokenKind::Header32Ex
            | TokenKind::Header64
            | TokenKind::Header64Ex => Token::Header(Header::decode(cursor, kind)?),
            TokenKind::Trailer => Token::Trailer(Trailer::decode(cursor)?),
            TokenKind::OtherFile32 => Token::OtherFile32(OtherFile::decode(cursor)?),
            TokenKind::Data => Token::Data(Data::decode(cursor)?),
            TokenKind::Ipc => Token::Ipc(Ipc::decode(cursor)?),
            TokenKind::Path => Token::Path(decode_text16(cursor)?),
            TokenKind::AttrPath => Token::AttrPath(decode_text16(cursor)?),
            TokenKind::Text => Token::Text(decode_text16(cursor)?),
            TokenKind::ZoneName => Token::ZoneName(decode_text16(cursor)?),
            TokenKind::Opaque => Token::Opaque(decode_opaque(cursor)?),
            TokenKind::Subject32 => Token::Subject32(Subject::decode(cursor, PortWidth::Bits32)?),
            TokenKind::Subject64 => Token::Subject64(Subject::decode(cursor, PortWidth::Bits64)?),
            TokenKind::Subject32Ex => {
                Token::Subject32Ex(Subject::decode_ex(cursor, PortWidth::Bits32)?)
            }
            TokenKind::Subject64Ex => {
                Token::Subject64Ex(Subject::decode_ex(cursor, PortWidth::Bits64)?)
            }
            TokenKind::Process32 => Token::Process32(Subject::decode(cursor, PortWidth::Bits32)?),
            TokenKind::Process64 => Token::Process64(Subject::decode(cursor, PortWidth::Bits64)?),
            TokenKind::Process32Ex => {
                Token::Process32Ex(Subject::decode_ex(cursor, PortWidth::Bits32)?)
            }
            TokenKind::Process64Ex => {
                Token::Process64Ex(Subject::decode_ex(cursor, PortWidth::Bits64)?)
            }
            TokenKind::Return32 => Token::Return32(Return::decode(cursor, ValueWidth::Bits32)?),
            TokenKind::Return64 => Token::Return64(Return::decode(cursor, ValueWidth::Bits64)?),
            TokenKind::Arg32 => Token::Arg32(Argument::decode(cursor, ValueWidth::Bits32)?),
            TokenKind::Arg64 => Token::Arg64(Argument::decode(cursor, ValueWidth::Bits64)?),
            TokenKind::Exit => Token::Exit(Exit::decode(cursor)?),
            TokenKind::ExecArgs => Token::ExecArgs(decode_strings(cursor)?),
            TokenKind::ExecEnv => Token::ExecEnv(decode_strings(cursor)?),
            TokenKind::InAddr => Token::InAddr(read_ipv4(cursor)?),
            TokenKind::InAddrEx => Token::InAddrEx(NetAddress::decode_ex(cursor)?),
            TokenKind::Ip => Token::Ip(IpHeader::decode(cursor)?),
            TokenKind::IpPort => Token::IpPort(cursor.read_u16()?),
            TokenKind::Socket => Token::Socket(Socket::decode(cursor)?),
            TokenKind::SocketEx => Token::SocketEx(SocketEx::decode(cursor)?),
            TokenKind::SockInet32 => Token::SockInet32(SockInet::decode_v4(cursor)?),
            TokenKind::SockInet128 => Token::SockInet128(SockInet::decode_v6(cursor)?),
            TokenKind::SockUnix => Token::SockUnix(SockUnix::decode(cursor)?),
            TokenKind::Sequence => Token::Sequence(cursor.read_u32()?),
            TokenKind::IpcPerm => Token::IpcPerm(IpcPerm::decode(cursor)?),
            TokenKind::NewGroups => Token::NewGroups(decode_groups(cursor)?),
            TokenKind::Attr32 => Token::Attr32(Attr::decode(cursor, DeviceWidth::Bits32)?),
            TokenKind::Attr64 => Token::Attr64(Attr::decode(cursor, DeviceWidth::Bits64)?),
        };
        Ok(token)
    }

    /// The registry kind this token was decoded as
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Header(header) => header.kind(),
            Token::Trailer(_) => TokenKind::Trailer,
            Token::OtherFile32(_) => TokenKind::OtherFile32,
            Token::Data(_) => TokenKind::Data,
            Token::Ipc(_) => TokenKind::Ipc,
            Token::Path(_) => TokenKind::Path,
            Token::AttrPath(_) => TokenKind::AttrPath,
            Token::Text(_) => TokenKind::Text,
            Token::ZoneName(_) => TokenKind::ZoneName,
            Token::Opaque(_) => TokenKind::Opaque,
            Token::Subject32(_) => TokenKind::Subject32,
            Token::Subject64(_) => TokenKind::Subject64,
            Token::Subject32Ex(_) => TokenKind::Subject32Ex,
            Token::Subject64Ex(_) => TokenKind::Subject64Ex,
            Token::Process32(_) => TokenKind::Process32,
            Token::Process64(_) => TokenKind::Process64,
            Token::Process32Ex(_) => TokenKind::Process32Ex,
            Token::Process64Ex(_) => TokenKind::Process64Ex,
            Token::Return32(_) => TokenKind::Return32,
            Token::Return64(_) => TokenKind::Return64,
            Token::Arg32(_) => TokenKind::Arg32,
            Token::Arg64(_) => TokenKind::Arg64,
            Token::Exit(_) => TokenKind::Exit,
            Token::ExecArgs(_) => TokenKind::ExecArgs,
            Token::ExecEnv(_) => TokenKind::ExecEnv,
            Token::InAddr(_) => TokenKind::InAddr,
            Token::InAddrEx(_) => TokenKind::InAddrEx,
            Token::Ip(_) => TokenKind::Ip,
            Token::IpPort(_) => TokenKind::IpPort,
            Token::Socket(_) => TokenKind::Socket,
            Token::SocketEx(_) => TokenKind::SocketEx,
            Token::SockInet32(_) => TokenKind::SockInet32,
            Token::SockInet128(_) => TokenKind::SockInet128,
            Token::SockUnix(_) => TokenKind::SockUnix,
            Token::Sequence(_) => TokenKind::Sequence,
            Token::IpcPerm(_) => TokenKind::IpcPerm,
            Token::NewGroups(_) => TokenKind::NewGroups,
            Token::Attr32(_) => TokenKind::Attr32,
            Token::Attr64(_) => TokenKind::Attr64,
        }
    }

    /// The OpenBSM name of the token
    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Whether any text in this token had invalid bytes replaced while decoding
    pub fn has_repaired_text(&self) -> bool {
        match self {
            Token::Path(text) | Token::AttrPath(text) | Token::Text(text) | Token::ZoneName(text) => {
                text.repaired
            }
            Token::OtherFile32(file) => file.name.repaired,
            Token::Arg32(arg) | Token::Arg64(arg) => arg.name.repaired,
            Token::ExecArgs(strings) | Token::ExecEnv(strings) => {
                strings.iter().any(|string| string.repaired)
            }
            Token::SockUnix(socket) => socket.path.repaired,
            Token::Data(data) => match &data.value {
                data::DataValue::Text(text) => text.repaired,
                data::DataValue::Numbers(_) => false,
            },
            _ => false,
        }
    }

    /// Encode the tag and payload of this token
    ///
    /// Fixed-layout tokens reproduce their original bytes exactly; text is written up to
    /// its first NUL followed by a single terminator.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = ByteWriter::new();
        writer.u8(self.kind().tag());
        match self {
            Token::Header(header) => header.encode(&mut writer),
            Token::Trailer(trailer) => trailer.encode(&mut writer),
            Token::OtherFile32(file) => file.encode(&mut writer),
            Token::Data(data) => data.encode(&mut writer),
            Token::Ipc(ipc) => ipc.encode(&mut writer),
            Token::Path(text) | Token::AttrPath(text) | Token::Text(text) | Token::ZoneName(text) => {
                writer.text16(text.as_str());
            }
            Token::Opaque(bytes) => {
                let len = u16::try_from(bytes.len()).unwrap_or(u16::MAX);
                writer.u16(len).bytes(&bytes[..usize::from(len)]);
            }
            Token::Subject32(subject) | Token::Process32(subject) => {
                subject.encode(&mut writer, PortWidth::Bits32, false)
            }
            Token::Subject64(subject) | Token::Process64(subject) => {
                subject.encode(&mut writer, PortWidth::Bits64, false)
            }
            Token::Subject32Ex(subject) | Token::Process32Ex(subject) => {
                subject.encode(&mut writer, PortWidth::Bits32, true)
            }
            Token::Subject64Ex(subject) | Token::Process64Ex(subject) => {
                subject.encode(&mut writer, PortWidth::Bits64, true)
            }
            Token::Return32(ret) => ret.encode(&mut writer, ValueWidth::Bits32),
            Token::Return64(ret) => ret.encode(&mut writer, ValueWidth::Bits64),
            Token::Arg32(arg) => arg.encode(&mut writer, ValueWidth::Bits32),
            Token::Arg64(arg) => arg.encode(&mut writer, ValueWidth::Bits64),
            Token::Exit(exit) => exit.encode(&mut writer),
            Token::ExecArgs(strings) | Token::ExecEnv(strings) => {
                encode_strings(&mut writer, strings)
            }
            Token::InAddr(addr) => {
                writer.bytes(&addr.octets());
            }
            Token::InAddrEx(addr) => addr.encode_ex(&mut writer),
            Token::Ip(ip) => ip.encode(&mut writer),
            Token::IpPort(port) => {
                writer.u16(*port);
            }
            Token::Socket(socket) => socket.encode(&mut writer),
            Token::SocketEx(socket) => socket.encode(&mut writer),
            Token::SockInet32(socket) | Token::SockInet128(socket) => socket.encode(&mut writer),
            Token::SockUnix(socket) => socket.encode(&mut writer),
            Token::Sequence(sequence) => {
                writer.u32(*sequence);
            }
            Token::IpcPerm(perm) => perm.encode(&mut writer),
            Token::NewGroups(groups) => {
                let count = u16::try_from(groups.len()).unwrap_or(u16::MAX);
                writer.u16(count);
                groups.iter().take(usize::from(count)).for_each(|gid| {
                    writer.u32(*gid);
                });
            }
            Token::Attr32(attr) => attr.encode(&mut writer, DeviceWidth::Bits32),
            Token::Attr64(attr) => attr.encode(&mut writer, DeviceWidth::Bits64),
        }
        writer.finish()
    }
}
