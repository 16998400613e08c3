/*!
 Names for the error numbers stored in return and exit tokens.

 Values follow OpenBSM's `audit_errno.h`, which is the same on every platform that writes
 BSM trails, with names adjusted to read like the macOS `errno` constants.
*/

use std::{collections::HashMap, sync::LazyLock};

/// BSM error numbers mapped to their names
static BSM_ERRORS: LazyLock<HashMap<u8, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        (0, "SUCCESS"),
        (1, "OPERATION_NOT_PERMITTED"),
        (2, "NOENT"),
        (3, "SRCH"),
        (4, "INTR"),
        (5, "IO"),
        (6, "NXIO"),
        (7, "2BIG"),
        (8, "NOEXEC"),
        (9, "BADF"),
        (10, "CHILD"),
        (11, "AGAIN"),
        (12, "NOMEM"),
        (13, "ACCES"),
        (14, "FAULT"),
        (15, "NOTBLK"),
        (16, "BUSY"),
        (17, "EXIST"),
        (18, "XDEV"),
        (19, "NODEV"),
        (20, "NOTDIR"),
        (21, "ISDIR"),
        (22, "INVAL"),
        (23, "NFILE"),
        (24, "MFILE"),
        (25, "NOTTY"),
        (26, "TXTBSY"),
        (27, "FBIG"),
        (28, "NOSPC"),
        (29, "SPIPE"),
        (30, "ROFS"),
        (31, "MLINK"),
        (32, "PIPE"),
        (33, "DOM"),
        (34, "RANGE"),
        (35, "NOMSG"),
        (36, "IDRM"),
        (45, "DEADLK"),
        (46, "NOLCK"),
        (47, "CANCELED"),
        (48, "NOTSUP"),
        (49, "DQUOT"),
        (66, "REMOTE"),
        (67, "NOLINK"),
        (71, "PROTO"),
        (74, "MULTIHOP"),
        (77, "BADMSG"),
        (78, "NAMETOOLONG"),
        (79, "OVERFLOW"),
        (88, "ILSEQ"),
        (89, "NOSYS"),
        (90, "LOOP"),
        (91, "RESTART"),
        (93, "NOTEMPTY"),
        (94, "USERS"),
        (95, "NOTSOCK"),
        (96, "DESTADDRREQ"),
        (97, "MSGSIZE"),
        (98, "PROTOTYPE"),
        (99, "NOPROTOOPT"),
        (120, "PROTONOSUPPORT"),
        (121, "SOCKTNOSUPPORT"),
        (122, "OPNOTSUPP"),
        (123, "PFNOSUPPORT"),
        (124, "AFNOSUPPORT"),
        (125, "ADDRINUSE"),
        (126, "ADDRNOTAVAIL"),
        (127, "NETDOWN"),
        (128, "NETUNREACH"),
        (129, "NETRESET"),
        (130, "CONNABORTED"),
        (131, "CONNRESET"),
        (132, "NOBUFS"),
        (133, "ISCONN"),
        (134, "NOTCONN"),
        (143, "SHUTDOWN"),
        (144, "TOOMANYREFS"),
        (145, "TIMEDOUT"),
        (146, "CONNREFUSED"),
        (147, "HOSTDOWN"),
        (148, "HOSTUNREAC"),
        (149, "ALREADY"),
        (150, "INPROGRESS"),
        (151, "STALE"),
        (190, "PROCLIM"),
        (191, "BADRPC"),
        (192, "RPCMISMATCH"),
        (193, "PROGUNAVAIL"),
        (194, "PROGMISMATCH"),
        (195, "PROCUNAVAIL"),
        (196, "FTYPE"),
        (197, "AUTH"),
        (198, "NEEDAUTH"),
        (199, "NOATTR"),
        (200, "DOOFUS"),
        (201, "USTRETURN"),
        (202, "NOIOCTL"),
        (203, "DIRIOCTL"),
        (204, "PWROFF"),
        (205, "DEVERR"),
        (206, "BADEXEC"),
        (207, "BADARCH"),
        (208, "SHLIBVERS"),
        (209, "BADMACHO"),
        (210, "POLICY"),
    ])
});

/// Get the name of a BSM error number, or `UNKNOWN`
pub fn error_name(errno: u8) -> &'static str {
    BSM_ERRORS.get(&errno).copied().unwrap_or(super::UNKNOWN)
}
