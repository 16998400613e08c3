/*!
 Turns decoded tokens into human readable lines.

 Every function here is a pure mapping from a [`Token`] to a `String`; numbers are resolved
 to names with the lookup tables in [`tables`](crate::tables).
*/

use std::net::{IpAddr, SocketAddr};

use crate::{
    tables::{errors::error_name, events::EventCatalog, protocols::protocol_name, UNKNOWN},
    tokens::{
        address::NetAddress,
        file::Attr,
        header::{Header, Trailer},
        process::{Argument, Exit, Return},
        subject::Subject,
        Token,
    },
    util::{dates::format_timestamp, text::AuditText},
};

/// Formats tokens using the event names of a [`EventCatalog`]
pub struct TokenFormatter<'a> {
    catalog: &'a EventCatalog,
}

impl<'a> TokenFormatter<'a> {
    pub fn new(catalog: &'a EventCatalog) -> Self {
        Self { catalog }
    }

    /// Get the name of the event a header describes
    pub fn event_name(&self, header: &Header) -> &'a str {
        self.catalog.name(header.event_type)
    }

    /// Get the description of the event a header describes, if the catalog has one
    pub fn event_description(&self, header: &Header) -> Option<&'a str> {
        self.catalog.description(header.event_type)
    }

    /// Format the fields of a header, i.e.
    ///
    /// `Event Type: AUE_EXECVE (23), Modifier: 0, Time: 2014-02-20 09:23:07 (1392888187.322)`
    pub fn format_header(&self, header: &Header) -> String {
        let mut out_s = format!(
            "Event Type: {} ({})",
            self.event_name(header),
            header.event_type
        );
        if let Some(description) = self.event_description(header) {
            out_s.push_str(&format!(", Description: {description}"));
        }
        out_s.push_str(&format!(
            ", Modifier: {}, Time: {}",
            header.modifier,
            format_timestamp(header.seconds, header.microseconds)
        ));
        if let Some(address) = header.address() {
            out_s.push_str(&format!(", Host: {address}"));
        }
        out_s
    }

    /// Format one token on a single line
    pub fn format_token(&self, token: &Token) -> String {
        match token {
            Token::Header(header) => self.format_header(header),
            Token::Trailer(trailer) => format_trailer(trailer),
            Token::OtherFile32(file) => format!(
                "Other File: {}, Time: {}",
                file.name,
                format_timestamp(u64::from(file.seconds), u64::from(file.milliseconds))
            ),
            Token::Data(data) => format!("Data: {}", data.display()),
            Token::Ipc(ipc) => format!("IPC: {} ({}), id({})", ipc.type_name(), ipc.ipc_type, ipc.id),
            Token::Path(text) => format!("Path: {text}"),
            Token::AttrPath(text) => format!("Attribute Path: {text}"),
            Token::Text(text) => format!("Text: {text}"),
            Token::ZoneName(text) => format!("Zone: {text}"),
            Token::Opaque(bytes) => format!("Opaque: {} bytes: {}", bytes.len(), to_hex(bytes)),
            Token::Subject32(subject)
            | Token::Subject64(subject)
            | Token::Subject32Ex(subject)
            | Token::Subject64Ex(subject) => format_subject("Subject", subject),
            Token::Process32(subject)
            | Token::Process64(subject)
            | Token::Process32Ex(subject)
            | Token::Process64Ex(subject) => format_subject("Process", subject),
            Token::Return32(ret) | Token::Return64(ret) => format_return(ret),
            Token::Arg32(arg) | Token::Arg64(arg) => format_argument(arg),
            Token::Exit(exit) => format_exit(exit),
            Token::ExecArgs(strings) => format!("Exec Args: {}", join_text(strings)),
            Token::ExecEnv(strings) => format!("Exec Env: {}", join_text(strings)),
            Token::InAddr(addr) => format!("IP Address: {addr}"),
            Token::InAddrEx(addr) => format!("IP Address: {addr}"),
            Token::Ip(ip) => format!(
                "IP: {} -> {}, protocol({}), ttl({}), length({})",
                ip.source, ip.destination, ip.protocol, ip.ttl, ip.length
            ),
            Token::IpPort(port) => format!("IP Port: {port}"),
            Token::Socket(socket) => format!(
                "Socket: type({}), local({}), remote({})",
                socket.socket_type,
                SocketAddr::new(IpAddr::V4(socket.local_address), socket.local_port),
                SocketAddr::new(IpAddr::V4(socket.remote_address), socket.remote_port)
            ),
            Token::SocketEx(socket) => format!(
                "Socket: domain {}({}), type({}), local({}), remote({})",
                protocol_name(socket.domain),
                socket.domain,
                socket.socket_type,
                endpoint(&socket.local_address, socket.local_port),
                endpoint(&socket.remote_address, socket.remote_port)
            ),
            Token::SockInet32(socket) | Token::SockInet128(socket) => format!(
                "Socket Address: {}({}), {}",
                protocol_name(socket.family),
                socket.family,
                SocketAddr::new(socket.address, socket.port)
            ),
            Token::SockUnix(socket) => format!(
                "Unix Socket: {}({}), {}",
                protocol_name(socket.family),
                socket.family,
                socket.path
            ),
            Token::Sequence(sequence) => format!("Sequence: {sequence}"),
            Token::IpcPerm(perm) => format!(
                "IPC Permissions: uid({}), gid({}), creator_uid({}), creator_gid({}), mode({:o}), seq({}), key({:#x})",
                perm.uid, perm.gid, perm.creator_uid, perm.creator_gid, perm.mode, perm.sequence, perm.key
            ),
            Token::NewGroups(groups) => format!(
                "Groups: {}",
                groups
                    .iter()
                    .map(u32::to_string)
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
            Token::Attr32(attr) | Token::Attr64(attr) => format_attr(attr),
        }
    }
}

fn format_trailer(trailer: &Trailer) -> String {
    format!("Trailer: {}", trailer.record_length)
}

fn format_subject(label: &str, subject: &Subject) -> String {
    let identity = &subject.identity;
    format!(
        "{label}: aid({}), euid({}), egid({}), uid({}), gid({}), pid({}), session_id({}), terminal({}, {})",
        identity.audit_uid,
        identity.effective_uid,
        identity.effective_gid,
        identity.real_uid,
        identity.real_gid,
        identity.pid,
        identity.session_id,
        subject.port,
        subject.address
    )
}

fn format_return(ret: &Return) -> String {
    format!(
        "Return {}({}), value {}",
        error_name(ret.status),
        ret.status,
        ret.value
    )
}

fn format_exit(exit: &Exit) -> String {
    let name = u8::try_from(exit.status).map_or(UNKNOWN, error_name);
    format!("Exit {name}({}), Return value {}", exit.status, exit.value)
}

fn format_argument(arg: &Argument) -> String {
    format!("Argument {}({}) is {:#x}", arg.name, arg.index, arg.value)
}

fn format_attr(attr: &Attr) -> String {
    format!(
        "Attributes: mode({:o}), uid({}), gid({}), fsid({}), node_id({}), device({})",
        attr.mode, attr.uid, attr.gid, attr.fsid, attr.node_id, attr.device
    )
}

/// Render an address and port the way `SocketAddr` would, falling back for unknown types
fn endpoint(address: &NetAddress, port: u16) -> String {
    match address {
        NetAddress::IPv4(addr) => SocketAddr::new(IpAddr::V4(*addr), port).to_string(),
        NetAddress::IPv6(addr) => SocketAddr::new(IpAddr::V6(*addr), port).to_string(),
        NetAddress::Unknown(_) => format!("{address}, port {port}"),
    }
}

fn join_text(strings: &[AuditText]) -> String {
    strings
        .iter()
        .map(AuditText::as_str)
        .collect::<Vec<&str>>()
        .join(" ")
}

/// Lowercase hex without separators
pub fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{byte:02x}")).collect()
}
