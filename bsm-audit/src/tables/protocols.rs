/*!
 Names for the protocol families stored in socket tokens.

 Values follow OpenBSM's `audit_fcntl.h` socket domain constants.
*/

use std::{collections::HashMap, sync::LazyLock};

/// BSM socket domains mapped to their names
static BSM_PROTOCOLS: LazyLock<HashMap<u16, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        (0, "UNSPEC"),
        (1, "LOCAL"),
        (2, "INET"),
        (3, "IMPLINK"),
        (4, "PUP"),
        (5, "CHAOS"),
        (6, "NS"),
        (8, "ECMA"),
        (9, "DATAKIT"),
        (10, "CCITT"),
        (11, "SNA"),
        (12, "DECnet"),
        (13, "DLI"),
        (14, "LAT"),
        (15, "HYLINK"),
        (16, "APPLETALK"),
        (19, "OSI"),
        (23, "IPX"),
        (24, "ROUTE"),
        (25, "LINK"),
        (26, "INET6"),
        (27, "KEY"),
        (500, "NETBIOS"),
        (501, "ISO"),
        (502, "XTP"),
        (503, "COIP"),
        (504, "CNT"),
        (505, "RTIP"),
        (506, "SIP"),
        (507, "PIP"),
        (508, "ISDN"),
        (509, "E164"),
        (510, "NATM"),
        (511, "ATM"),
        (512, "NETGRAPH"),
        (513, "SLOW"),
        (514, "CLUSTER"),
        (515, "ARP"),
        (516, "BLUETOOTH"),
    ])
});

/// Get the name of a BSM protocol family, or `UNKNOWN`
pub fn protocol_name(domain: u16) -> &'static str {
    BSM_PROTOCOLS.get(&domain).copied().unwrap_or(super::UNKNOWN)
}
