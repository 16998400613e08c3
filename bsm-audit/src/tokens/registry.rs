/*!
 The closed set of token tags this decoder understands.

 Tag values are taken from OpenBSM's `audit_record.h`. A tag that is not listed here
 resolves to [`None`]; nothing is ever guessed.
*/

/// File token: name and timestamp of the next trail file
pub const AUT_OTHER_FILE32: u8 = 0x11;
/// Closes every record
pub const AUT_TRAILER: u8 = 0x13;
/// Record header with 32-bit time
pub const AUT_HEADER32: u8 = 0x14;
/// Record header with 32-bit time and host address
pub const AUT_HEADER32_EX: u8 = 0x15;
pub const AUT_DATA: u8 = 0x21;
pub const AUT_IPC: u8 = 0x22;
pub const AUT_PATH: u8 = 0x23;
pub const AUT_SUBJECT32: u8 = 0x24;
pub const AUT_XATPATH: u8 = 0x25;
pub const AUT_PROCESS32: u8 = 0x26;
pub const AUT_RETURN32: u8 = 0x27;
pub const AUT_TEXT: u8 = 0x28;
pub const AUT_OPAQUE: u8 = 0x29;
pub const AUT_IN_ADDR: u8 = 0x2a;
pub const AUT_IP: u8 = 0x2b;
pub const AUT_IPORT: u8 = 0x2c;
pub const AUT_ARG32: u8 = 0x2d;
pub const AUT_SOCKET: u8 = 0x2e;
pub const AUT_SEQ: u8 = 0x2f;
pub const AUT_IPC_PERM: u8 = 0x32;
pub const AUT_NEWGROUPS: u8 = 0x3b;
pub const AUT_EXEC_ARGS: u8 = 0x3c;
pub const AUT_EXEC_ENV: u8 = 0x3d;
pub const AUT_ATTR32: u8 = 0x3e;
pub const AUT_EXIT: u8 = 0x52;
pub const AUT_ZONENAME: u8 = 0x60;
pub const AUT_ARG64: u8 = 0x71;
pub const AUT_RETURN64: u8 = 0x72;
pub const AUT_ATTR64: u8 = 0x73;
/// Record header with 64-bit time
pub const AUT_HEADER64: u8 = 0x74;
pub const AUT_SUBJECT64: u8 = 0x75;
pub const AUT_PROCESS64: u8 = 0x77;
/// Record header with 64-bit time and host address
pub const AUT_HEADER64_EX: u8 = 0x79;
pub const AUT_SUBJECT32_EX: u8 = 0x7a;
pub const AUT_PROCESS32_EX: u8 = 0x7b;
pub const AUT_SUBJECT64_EX: u8 = 0x7c;
pub const AUT_PROCESS64_EX: u8 = 0x7d;
pub const AUT_IN_ADDR_EX: u8 = 0x7e;
pub const AUT_SOCKET_EX: u8 = 0x7f;
pub const AUT_SOCKINET32: u8 = 0x80;
pub const AUT_SOCKINET128: u8 = 0x81;
pub const AUT_SOCKUNIX: u8 = 0x82;

/// Decode shapes, one per registered tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    OtherFile32,
    Trailer,
    Header32,
    Header32Ex,
    Data,
    Ipc,
    Path,
    Subject32,
    AttrPath,
    Process32,
    Return32,
    Text,
    Opaque,
    InAddr,
    Ip,
    IpPort,
    Arg32,
    Socket,
    Sequence,
    IpcPerm,
    NewGroups,
    ExecArgs,
    ExecEnv,
    Attr32,
    Exit,
    ZoneName,
    Arg64,
    Return64,
    Attr64,
    Header64,
    Subject64,
    Process64,
    Header64Ex,
    Subject32Ex,
    Process32Ex,
    Subject64Ex,
    Process64Ex,
    InAddrEx,
    SocketEx,
    SockInet32,
    SockInet128,
    SockUnix,
}

impl TokenKind {
    /// Resolve a tag byte, or [`None`] if the tag is not registered
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            AUT_OTHER_FILE32 => Some(Self::OtherFile32),
            AUT_TRAILER => Some(Self::Trailer),
            AUT_HEADER32 => Some(Self::Header32),
            AUT_HEADER32_EX => Some(Self::Header32Ex),
            AUT_DATA => Some(Self::Data),
            AUT_IPC => Some(Self::Ipc),
            AUT_PATH => Some(Self::Path),
            AUT_SUBJECT32 => Some(Self::Subject32),
            AUT_XATPATH => Some(Self::AttrPath),
            AUT_PROCESS32 => Some(Self::Process32),
            AUT_RETURN32 => Some(Self::Return32),
            AUT_TEXT => Some(Self::Text),
            AUT_OPAQUE => Some(Self::Opaque),
            AUT_IN_ADDR => Some(Self::InAddr),
            AUT_IP => Some(Self::Ip),
            AUT_IPORT => Some(Self::IpPort),
            AUT_ARG32 => Some(Self::Arg32),
            AUT_SOCKET => Some(Self::Socket),
            AUT_SEQ => Some(Self::Sequence),
            AUT_IPC_PERM => Some(Self::IpcPerm),
            AUT_NEWGROUPS => Some(Self::NewGroups),
            AUT_EXEC_ARGS => Some(Self::ExecArgs),
            AUT_EXEC_ENV => Some(Self::ExecEnv),
            AUT_ATTR32 => Some(Self::Attr32),
            AUT_EXIT => Some(Self::Exit),
            AUT_ZONENAME => Some(Self::ZoneName),
            AUT_ARG64 => Some(Self::Arg64),
            AUT_RETURN64 => Some(Self::Return64),
            AUT_ATTR64 => Some(Self::Attr64),
            AUT_HEADER64 => Some(Self::Header64),
            AUT_SUBJECT64 => Some(Self::Subject64),
            AUT_PROCESS64 => Some(Self::Process64),
            AUT_HEADER64_EX => Some(Self::Header64Ex),
            AUT_SUBJECT32_EX => Some(Self::Subject32Ex),
            AUT_PROCESS32_EX => Some(Self::Process32Ex),
            AUT_SUBJECT64_EX => Some(Self::Subject64Ex),
            AUT_PROCESS64_EX => Some(Self::Process64Ex),
            AUT_IN_ADDR_EX => Some(Self::InAddrEx),
            AUT_SOCKET_EX => Some(Self::SocketEx),
            AUT_SOCKINET32 => Some(Self::SockInet32),
            AUT_SOCKINET128 => Some(Self::SockInet128),
            AUT_SOCKUNIX => Some(Self::SockUnix),
            _ => None,
        }
    }

    /// The tag byte that introduces this kind in the stream
    pub fn tag(&self) -> u8 {
        match self {
            Self::OtherFile32 => AUT_OTHER_FILE32,
            Self::Trailer => AUT_TRAILER,
            Self::Header32 => AUT_HEADER32,
            Self::Header32Ex => AUT_HEADER32_EX,
            Self::Data => AUT_DATA,
            Self::Ipc => AUT_IPC,
            Self::Path => AUT_PATH,
            Self::Subject32 => AUT_SUBJECT32,
            Self::AttrPath => AUT_XATPATH,
            Self::Process32 => AUT_PROCESS32,
            Self::Return32 => AUT_RETURN32,
            Self::Text => AUT_TEXT,
            Self::Opaque => AUT_OPAQUE,
            Self::InAddr => AUT_IN_ADDR,
            Self::Ip => AUT_IP,
            Self::IpPort => AUT_IPORT,
            Self::Arg32 => AUT_ARG32,
            Self::Socket => AUT_SOCKET,
            Self::Sequence => AUT_SEQ,
            Self::IpcPerm => AUT_IPC_PERM,
            Self::NewGroups => AUT_NEWGROUPS,
            Self::ExecArgs => AUT_EXEC_ARGS,
            Self::ExecEnv => AUT_EXEC_ENV,
            Self::Attr32 => AUT_ATTR32,
            Self::Exit => AUT_EXIT,
            Self::ZoneName => AUT_ZONENAME,
            Self::Arg64 => AUT_ARG64,
            Self::Return64 => AUT_RETURN64,
            Self::Attr64 => AUT_ATTR64,
            Self::Header64 => AUT_HEADER64,
            Self::Subject64 => AUT_SUBJECT64,
            Self::Process64 => AUT_PROCESS64,
            Self::Header64Ex => AUT_HEADER64_EX,
            Self::Subject32Ex => AUT_SUBJECT32_EX,
            Self::Process32Ex => AUT_PROCESS32_EX,
            Self::Subject64Ex => AUT_SUBJECT64_EX,
            Self::Process64Ex => AUT_PROCESS64_EX,
            Self::InAddrEx => AUT_IN_ADDR_EX,
            Self::SocketEx => AUT_SOCKET_EX,
            Self::SockInet32 => AUT_SOCKINET32,
            Self::SockInet128 => AUT_SOCKINET128,
            Self::SockUnix => AUT_SOCKUNIX,
        }
    }

    /// The OpenBSM name of the token, used as the tag name when formatting
    pub fn name(&self) -> &'static str {
        match self {
            Self::OtherFile32 => "AUT_OTHER_FILE32",
            Self::Trailer => "AUT_TRAILER",
            Self::Header32 => "AUT_HEADER32",
            Self::Header32Ex => "AUT_HEADER32_EX",
            Self::Data => "AUT_DATA",
            Self::Ipc => "AUT_IPC",
            Self::Path => "AUT_PATH",
            Self::Subject32 => "AUT_SUBJECT32",
            Self::AttrPath => "AUT_XATPATH",
            Self::Process32 => "AUT_PROCESS32",
            Self::Return32 => "AUT_RETURN32",
            Self::Text => "AUT_TEXT",
            Self::Opaque => "AUT_OPAQUE",
            Self::InAddr => "AUT_IN_ADDR",
            Self::Ip => "AUT_IP",
            Self::IpPort => "AUT_IPORT",
            Self::Arg32 => "AUT_ARG32",
            Self::Socket => "AUT_SOCKET",
            Self::Sequence => "AUT_SEQ",
            Self::IpcPerm => "AUT_IPC_PERM",
            Self::NewGroups => "AUT_NEWGROUPS",
            Self::ExecArgs => "AUT_EXEC_ARGS",
            Self::ExecEnv => "AUT_EXEC_ENV",
            Self::Attr32 => "AUT_ATTR32",
            Self::Exit => "AUT_EXIT",
            Self::ZoneName => "AUT_ZONENAME",
            Self::Arg64 => "AUT_ARG64",
            Self::Return64 => "AUT_RETURN64",
            Self::Attr64 => "AUT_ATTR64",
            Self::Header64 => "AUT_HEADER64",
            Self::Subject64 => "AUT_SUBJECT64",
            Self::Process64 => "AUT_PROCESS64",
            Self::Header64Ex => "AUT_HEADER64_EX",
            Self::Subject32Ex => "AUT_SUBJECT32_EX",
            Self::Process32Ex => "AUT_PROCESS32_EX",
            Self::Subject64Ex => "AUT_SUBJECT64_EX",
            Self::Process64Ex => "AUT_PROCESS64_EX",
            Self::InAddrEx => "AUT_IN_ADDR_EX",
            Self::SocketEx => "AUT_SOCKET_EX",
            Self::SockInet32 => "AUT_SOCKINET32",
            Self::SockInet128 => "AUT_SOCKINET128",
            Self::SockUnix => "AUT_SOCKUNIX",
        }
    }

    /// Whether this kind opens a record
    pub fn is_header(&self) -> bool {
        matches!(
            self,
            Self::Header32 | Self::Header32Ex | Self::Header64 | Self::Header64Ex
        )
    }
}
