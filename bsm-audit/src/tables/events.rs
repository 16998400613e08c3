/*!
 Names for the event numbers stored in record headers.

 The built-in table covers the OpenBSM `audit_event` file shipped with macOS and FreeBSD.
 Hosts can define their own events, so an [`EventCatalog`] can also be extended from an
 `audit_event(5)` file.
*/

use std::{
    collections::HashMap,
    fs::read_to_string,
    path::Path,
    sync::LazyLock,
};

use log::{debug, warn};

use crate::error::catalog::CatalogError;

/// Default location of the host's event definitions
pub const DEFAULT_AUDIT_EVENT_FILE: &str = "/etc/security/audit_event";

/// OpenBSM event numbers mapped to their `AUE_` names
static BSM_EVENTS: LazyLock<HashMap<u16, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        (0, "AUE_NULL"),
        (1, "AUE_EXIT"),
        (2, "AUE_FORK"),
        (3, "AUE_OPEN"),
        (4, "AUE_CREAT"),
        (5, "AUE_LINK"),
        (6, "AUE_UNLINK"),
        (7, "AUE_EXEC"),
        (8, "AUE_CHDIR"),
        (9, "AUE_MKNOD"),
        (10, "AUE_CHMOD"),
        (11, "AUE_CHOWN"),
        (12, "AUE_UMOUNT"),
        (13, "AUE_JUNK"),
        (14, "AUE_ACCESS"),
        (15, "AUE_KILL"),
        (16, "AUE_STAT"),
        (17, "AUE_LSTAT"),
        (18, "AUE_ACCT"),
        (19, "AUE_MCTL"),
        (20, "AUE_REBOOT"),
        (21, "AUE_SYMLINK"),
        (22, "AUE_READLINK"),
        (23, "AUE_EXECVE"),
        (24, "AUE_CHROOT"),
        (25, "AUE_VFORK"),
        (26, "AUE_SETGROUPS"),
        (27, "AUE_SETPGRP"),
        (28, "AUE_SWAPON"),
        (29, "AUE_SETHOSTNAME"),
        (30, "AUE_FCNTL"),
        (31, "AUE_SETPRIORITY"),
        (32, "AUE_CONNECT"),
        (33, "AUE_ACCEPT"),
        (34, "AUE_BIND"),
        (35, "AUE_SETSOCKOPT"),
        (36, "AUE_VTRACE"),
        (37, "AUE_SETTIMEOFDAY"),
        (38, "AUE_FCHOWN"),
        (39, "AUE_FCHMOD"),
        (40, "AUE_SETREUID"),
        (41, "AUE_SETREGID"),
        (42, "AUE_RENAME"),
        (43, "AUE_TRUNCATE"),
        (44, "AUE_FTRUNCATE"),
        (45, "AUE_FLOCK"),
        (46, "AUE_SHUTDOWN"),
        (47, "AUE_MKDIR"),
        (48, "AUE_RMDIR"),
        (49, "AUE_UTIMES"),
        (50, "AUE_ADJTIME"),
        (51, "AUE_SETRLIMIT"),
        (52, "AUE_KILLPG"),
        (53, "AUE_NFS_SVC"),
        (54, "AUE_STATFS"),
        (55, "AUE_FSTATFS"),
        (56, "AUE_UNMOUNT"),
        (57, "AUE_ASYNC_DAEMON"),
        (58, "AUE_NFS_GETFH"),
        (59, "AUE_SETDOMAINNAME"),
        (60, "AUE_QUOTACTL"),
        (61, "AUE_EXPORTFS"),
        (62, "AUE_MOUNT"),
        (63, "AUE_SEMSYS"),
        (64, "AUE_MSGSYS"),
        (65, "AUE_SHMSYS"),
        (66, "AUE_BSMSYS"),
        (67, "AUE_RFSSYS"),
        (68, "AUE_FCHDIR"),
        (69, "AUE_FCHROOT"),
        (70, "AUE_VPIXSYS"),
        (71, "AUE_PATHCONF"),
        (72, "AUE_OPEN_R"),
        (73, "AUE_OPEN_RC"),
        (74, "AUE_OPEN_RT"),
        (75, "AUE_OPEN_RTC"),
        (76, "AUE_OPEN_W"),
        (77, "AUE_OPEN_WC"),
        (78, "AUE_OPEN_WT"),
        (79, "AUE_OPEN_WTC"),
        (80, "AUE_OPEN_RW"),
        (81, "AUE_OPEN_RWC"),
        (82, "AUE_OPEN_RWT"),
        (83, "AUE_OPEN_RWTC"),
        (84, "AUE_MSGCTL"),
        (85, "AUE_MSGCTL_RMID"),
        (86, "AUE_MSGCTL_SET"),
        (87, "AUE_MSGCTL_STAT"),
        (88, "AUE_MSGGET"),
        (89, "AUE_MSGRCV"),
        (90, "AUE_MSGSND"),
        (91, "AUE_SHMCTL"),
        (92, "AUE_SHMCTL_RMID"),
        (93, "AUE_SHMCTL_SET"),
        (94, "AUE_SHMCTL_STAT"),
        (95, "AUE_SHMGET"),
        (96, "AUE_SHMAT"),
        (97, "AUE_SHMDT"),
        (98, "AUE_SEMCTL"),
        (99, "AUE_SEMCTL_RMID"),
        (100, "AUE_SEMCTL_SET"),
        (101, "AUE_SEMCTL_STAT"),
        (102, "AUE_SEMCTL_GETNCNT"),
        (103, "AUE_SEMCTL_GETPID"),
        (104, "AUE_SEMCTL_GETVAL"),
        (105, "AUE_SEMCTL_GETALL"),
        (106, "AUE_SEMCTL_GETZCNT"),
        (107, "AUE_SEMCTL_SETVAL"),
        (108, "AUE_SEMCTL_SETALL"),
        (109, "AUE_SEMGET"),
        (110, "AUE_SEMOP"),
        (111, "AUE_CORE"),
        (112, "AUE_CLOSE"),
        (113, "AUE_SYSTEMBOOT"),
        (114, "AUE_ASYNC_DAEMON_EXIT"),
        (115, "AUE_NFSSVC_EXIT"),
        (128, "AUE_WRITEL"),
        (129, "AUE_WRITEVL"),
        (130, "AUE_GETAUID"),
        (131, "AUE_SETAUID"),
        (132, "AUE_GETAUDIT"),
        (133, "AUE_SETAUDIT"),
        (134, "AUE_GETUSERAUDIT"),
        (135, "AUE_SETUSERAUDIT"),
        (136, "AUE_AUDITSVC"),
        (137, "AUE_AUDITUSER"),
        (138, "AUE_AUDITON"),
        (139, "AUE_AUDITON_GTERMID"),
        (140, "AUE_AUDITON_STERMID"),
        (141, "AUE_AUDITON_GPOLICY"),
        (142, "AUE_AUDITON_SPOLICY"),
        (143, "AUE_AUDITON_GESTATE"),
        (144, "AUE_AUDITON_SESTATE"),
        (145, "AUE_AUDITON_GQCTRL"),
        (146, "AUE_AUDITON_SQCTRL"),
        (147, "AUE_GETKERNSTATE"),
        (148, "AUE_SETKERNSTATE"),
        (149, "AUE_GETPORTAUDIT"),
        (150, "AUE_AUDITSTAT"),
        (151, "AUE_REVOKE"),
        (152, "AUE_MAC"),
        (153, "AUE_ENTERPROM"),
        (154, "AUE_EXITPROM"),
        (155, "AUE_IFLOAT"),
        (156, "AUE_PFLOAT"),
        (157, "AUE_UPRIV"),
        (158, "AUE_IOCTL"),
        (173, "AUE_SOCKET"),
        (174, "AUE_SENDTO"),
        (175, "AUE_PIPE"),
        (176, "AUE_SOCKETPAIR"),
        (177, "AUE_SEND"),
        (178, "AUE_SENDMSG"),
        (179, "AUE_RECV"),
        (180, "AUE_RECVMSG"),
        (181, "AUE_RECVFROM"),
        (182, "AUE_READ"),
        (183, "AUE_GETDENTS"),
        (184, "AUE_LSEEK"),
        (185, "AUE_WRITE"),
        (186, "AUE_WRITEV"),
        (187, "AUE_NFS"),
        (188, "AUE_READV"),
        (189, "AUE_OSTAT"),
        (190, "AUE_SETUID"),
        (191, "AUE_STIME"),
        (192, "AUE_UTIME"),
        (193, "AUE_NICE"),
        (194, "AUE_OSETPGRP"),
        (195, "AUE_SETGID"),
        (196, "AUE_READL"),
        (197, "AUE_READVL"),
        (198, "AUE_FSTAT"),
        (199, "AUE_DUP2"),
        (200, "AUE_MMAP"),
        (201, "AUE_AUDIT"),
        (202, "AUE_PRIOCNTLSYS"),
        (203, "AUE_MUNMAP"),
        (204, "AUE_SETEGID"),
        (205, "AUE_SETEUID"),
        (206, "AUE_PUTMSG"),
        (207, "AUE_GETMSG"),
        (208, "AUE_PUTPMSG"),
        (209, "AUE_GETPMSG"),
        (210, "AUE_AUDITSYS"),
        (211, "AUE_AUDITON_GETKMASK"),
        (212, "AUE_AUDITON_SETKMASK"),
        (213, "AUE_AUDITON_GETCWD"),
        (214, "AUE_AUDITON_GETCAR"),
        (215, "AUE_AUDITON_GETSTAT"),
        (216, "AUE_AUDITON_SETSTAT"),
        (217, "AUE_AUDITON_SETUMASK"),
        (218, "AUE_AUDITON_SETSMASK"),
        (219, "AUE_AUDITON_GETCOND"),
        (220, "AUE_AUDITON_SETCOND"),
        (221, "AUE_AUDITON_GETCLASS"),
        (222, "AUE_AUDITON_SETCLASS"),
        (223, "AUE_FUSERS"),
        (224, "AUE_STATVFS"),
        (225, "AUE_XSTAT"),
        (226, "AUE_LXSTAT"),
        (227, "AUE_LCHOWN"),
        (228, "AUE_MEMCNTL"),
        (229, "AUE_SYSINFO"),
        (230, "AUE_XMKNOD"),
        (231, "AUE_FORK1"),
        (232, "AUE_MODCTL"),
        (233, "AUE_MODLOAD"),
        (234, "AUE_MODUNLOAD"),
        (235, "AUE_MODCONFIG"),
        (236, "AUE_MODADDMAJ"),
        (237, "AUE_SOCKACCEPT"),
        (238, "AUE_SOCKCONNECT"),
        (239, "AUE_SOCKSEND"),
        (240, "AUE_SOCKRECEIVE"),
        (241, "AUE_ACLSET"),
        (242, "AUE_FACLSET"),
        (243, "AUE_DOORFS"),
        (244, "AUE_DOORFS_DOOR_CALL"),
        (245, "AUE_DOORFS_DOOR_RETURN"),
        (246, "AUE_DOORFS_DOOR_CREATE"),
        (247, "AUE_DOORFS_DOOR_REVOKE"),
        (248, "AUE_DOORFS_DOOR_INFO"),
        (249, "AUE_DOORFS_DOOR_CRED"),
        (250, "AUE_DOORFS_DOOR_BIND"),
        (251, "AUE_DOORFS_DOOR_UNBIND"),
        (252, "AUE_P_ONLINE"),
        (253, "AUE_PROCESSOR_BIND"),
        (254, "AUE_INST_SYNC"),
        (255, "AUE_SOCKCONFIG"),
        (256, "AUE_SETAUDIT_ADDR"),
        (257, "AUE_GETAUDIT_ADDR"),
        (258, "AUE_UMOUNT2"),
        (259, "AUE_FSAT"),
        (260, "AUE_OPENAT_R"),
        (261, "AUE_OPENAT_RC"),
        (262, "AUE_OPENAT_RT"),
        (263, "AUE_OPENAT_RTC"),
        (264, "AUE_OPENAT_W"),
        (265, "AUE_OPENAT_WC"),
        (266, "AUE_OPENAT_WT"),
        (267, "AUE_OPENAT_WTC"),
        (268, "AUE_OPENAT_RW"),
        (269, "AUE_OPENAT_RWC"),
        (270, "AUE_OPENAT_RWT"),
        (271, "AUE_OPENAT_RWTC"),
        (272, "AUE_RENAMEAT"),
        (273, "AUE_FSTATAT"),
        (274, "AUE_FCHOWNAT"),
        (275, "AUE_FUTIMESAT"),
        (276, "AUE_UNLINKAT"),
        (277, "AUE_CLOCK_SETTIME"),
        (278, "AUE_NTP_ADJTIME"),
        (279, "AUE_SETPPRIV"),
        (280, "AUE_MODDEVPLCY"),
        (281, "AUE_MODADDPRIV"),
        (282, "AUE_CRYPTOADM"),
        (283, "AUE_CONFIGKSSL"),
        (284, "AUE_BRANDSYS"),
        (285, "AUE_PF_POLICY_ADDRULE"),
        (286, "AUE_PF_POLICY_DELRULE"),
        (287, "AUE_PF_POLICY_CLONE"),
        (288, "AUE_PF_POLICY_FLIP"),
        (289, "AUE_PF_POLICY_FLUSH"),
        (290, "AUE_PF_POLICY_ALGS"),
        (291, "AUE_PORTFS"),
        (6144, "AUE_at_create"),
        (6145, "AUE_at_delete"),
        (6146, "AUE_at_perm"),
        (6147, "AUE_cron_invoke"),
        (6148, "AUE_crontab_create"),
        (6149, "AUE_crontab_delete"),
        (6150, "AUE_crontab_perm"),
        (6151, "AUE_inetd_connect"),
        (6152, "AUE_login"),
        (6153, "AUE_logout"),
        (6154, "AUE_telnet"),
        (6155, "AUE_rlogin"),
        (6156, "AUE_mountd_mount"),
        (6157, "AUE_mountd_umount"),
        (6158, "AUE_rshd"),
        (6159, "AUE_su"),
        (6160, "AUE_halt"),
        (6161, "AUE_reboot"),
        (6162, "AUE_rexecd"),
        (6163, "AUE_passwd"),
        (6164, "AUE_rexd"),
        (6165, "AUE_ftpd"),
        (6166, "AUE_init"),
        (6167, "AUE_uadmin"),
        (6168, "AUE_shutdown"),
        (6169, "AUE_poweroff"),
        (6170, "AUE_crontab_mod"),
        (6171, "AUE_ftpd_logout"),
        (6172, "AUE_ssh"),
        (6173, "AUE_role_login"),
        (6180, "AUE_prof_cmd"),
        (6181, "AUE_filesystem_add"),
        (6182, "AUE_filesystem_delete"),
        (6183, "AUE_filesystem_modify"),
        (6200, "AUE_allocate_succ"),
        (6201, "AUE_allocate_fail"),
        (6202, "AUE_deallocate_succ"),
        (6203, "AUE_deallocate_fail"),
        (6205, "AUE_listdevice_succ"),
        (6206, "AUE_listdevice_fail"),
        (6207, "AUE_create_user"),
        (6208, "AUE_modify_user"),
        (6209, "AUE_delete_user"),
        (6210, "AUE_disable_user"),
        (6211, "AUE_enable_user"),
        (6212, "AUE_newgrp_login"),
        (6213, "AUE_admin_authentication"),
        (6214, "AUE_kadmind_auth"),
        (6215, "AUE_kadmind_unauth"),
        (6216, "AUE_krb5kdc_as_req"),
        (6217, "AUE_krb5kdc_tgs_req"),
        (6218, "AUE_krb5kdc_tgs_req_2ndtktmm"),
        (6219, "AUE_krb5kdc_tgs_req_alt_tgt"),
        (32800, "AUE_openssh"),
        (43001, "AUE_GETFSSTAT"),
        (43002, "AUE_PTRACE"),
        (43003, "AUE_CHFLAGS"),
        (43004, "AUE_FCHFLAGS"),
        (43005, "AUE_PROFILE"),
        (43006, "AUE_KTRACE"),
        (43007, "AUE_SETLOGIN"),
        (43008, "AUE_OPENBSM_REVOKE"),
        (43009, "AUE_UMASK"),
        (43010, "AUE_MPROTECT"),
        (43011, "AUE_MKFIFO"),
        (43012, "AUE_POLL"),
        (43013, "AUE_FUTIMES"),
        (43014, "AUE_SETSID"),
        (43015, "AUE_SETPRIVEXEC"),
        (43016, "AUE_ADDPROFILE"),
        (43017, "AUE_KDEBUGTRACE"),
        (43018, "AUE_OPENBSM_FSTAT"),
        (43019, "AUE_FPATHCONF"),
        (43020, "AUE_GETDIRENTRIES"),
        (43021, "AUE_SYSCTL"),
        (43022, "AUE_MLOCK"),
        (43023, "AUE_MUNLOCK"),
        (43024, "AUE_UNDELETE"),
        (43025, "AUE_GETATTRLIST"),
        (43026, "AUE_SETATTRLIST"),
        (43027, "AUE_GETDIRENTRIESATTR"),
        (43028, "AUE_EXCHANGEDATA"),
        (43029, "AUE_SEARCHFS"),
        (43030, "AUE_MINHERIT"),
        (43031, "AUE_SEMCONFIG"),
        (43032, "AUE_SEMOPEN"),
        (43033, "AUE_SEMCLOSE"),
        (43034, "AUE_SEMUNLINK"),
        (43035, "AUE_SHMOPEN"),
        (43036, "AUE_SHMUNLINK"),
        (43037, "AUE_LOADSHFILE"),
        (43038, "AUE_RESETSHFILE"),
        (43039, "AUE_NEWSYSTEMSHREG"),
        (43040, "AUE_PTHREADKILL"),
        (43041, "AUE_PTHREADSIGMASK"),
        (43042, "AUE_AUDITCTL"),
        (43043, "AUE_RFORK"),
        (43044, "AUE_LCHMOD"),
        (43045, "AUE_SWAPOFF"),
        (43046, "AUE_INITPROCESS"),
        (43047, "AUE_MAPFD"),
        (43048, "AUE_TASKFORPID"),
        (43049, "AUE_PIDFORTASK"),
        (43050, "AUE_SYSCTL_NONADMIN"),
        (43051, "AUE_COPYFILE"),
        (43052, "AUE_LUTIMES"),
        (43053, "AUE_LCHFLAGS"),
        (43054, "AUE_SENDFILE"),
        (43055, "AUE_USELIB"),
        (43056, "AUE_GETRESUID"),
        (43057, "AUE_SETRESUID"),
        (43058, "AUE_GETRESGID"),
        (43059, "AUE_SETRESGID"),
        (43060, "AUE_WAIT4"),
        (43061, "AUE_LGETFH"),
        (43062, "AUE_FHSTATFS"),
        (43063, "AUE_FHOPEN"),
        (43064, "AUE_FHSTAT"),
        (43065, "AUE_JAIL"),
        (43066, "AUE_EACCESS"),
        (43067, "AUE_KQUEUE"),
        (43068, "AUE_KEVENT"),
        (43069, "AUE_FSYNC"),
        (43070, "AUE_NMOUNT"),
        (43071, "AUE_BDFLUSH"),
        (43072, "AUE_SETFSUID"),
        (43073, "AUE_SETFSGID"),
        (43074, "AUE_PERSONALITY"),
        (43075, "AUE_SCHED_GETSCHEDULER"),
        (43076, "AUE_SCHED_SETSCHEDULER"),
        (43077, "AUE_PRCTL"),
        (43078, "AUE_GETCWD"),
        (43079, "AUE_CAPGET"),
        (43080, "AUE_CAPSET"),
        (43081, "AUE_PIVOT_ROOT"),
        (43082, "AUE_RTPRIO"),
        (43083, "AUE_SCHED_GETPARAM"),
        (43084, "AUE_SCHED_SETPARAM"),
        (43085, "AUE_SCHED_GET_PRIORITY_MAX"),
        (43086, "AUE_SCHED_GET_PRIORITY_MIN"),
        (43087, "AUE_SCHED_RR_GET_INTERVAL"),
        (43088, "AUE_ACL_GET_FILE"),
        (43089, "AUE_ACL_SET_FILE"),
        (43090, "AUE_ACL_GET_FD"),
        (43091, "AUE_ACL_SET_FD"),
        (43092, "AUE_ACL_DELETE_FILE"),
        (43093, "AUE_ACL_DELETE_FD"),
        (43094, "AUE_ACL_CHECK_FILE"),
        (43095, "AUE_ACL_CHECK_FD"),
        (43096, "AUE_ACL_GET_LINK"),
        (43097, "AUE_ACL_SET_LINK"),
        (43098, "AUE_ACL_DELETE_LINK"),
        (43099, "AUE_ACL_CHECK_LINK"),
        (43100, "AUE_SYSARCH"),
        (43101, "AUE_EXTATTRCTL"),
        (43102, "AUE_EXTATTR_GET_FILE"),
        (43103, "AUE_EXTATTR_SET_FILE"),
        (43104, "AUE_EXTATTR_LIST_FILE"),
        (43105, "AUE_EXTATTR_DELETE_FILE"),
        (43106, "AUE_EXTATTR_GET_FD"),
        (43107, "AUE_EXTATTR_SET_FD"),
        (43108, "AUE_EXTATTR_LIST_FD"),
        (43109, "AUE_EXTATTR_DELETE_FD"),
        (43110, "AUE_EXTATTR_GET_LINK"),
        (43111, "AUE_EXTATTR_SET_LINK"),
        (43112, "AUE_EXTATTR_LIST_LINK"),
        (43113, "AUE_EXTATTR_DELETE_LINK"),
        (43114, "AUE_KENV"),
        (43115, "AUE_JAIL_ATTACH"),
        (43116, "AUE_SYSCTL_WRITE"),
        (43117, "AUE_IOPERM"),
        (43118, "AUE_READDIR"),
        (43119, "AUE_IOPL"),
        (43120, "AUE_VM86"),
        (43121, "AUE_MAC_GET_PROC"),
        (43122, "AUE_MAC_SET_PROC"),
        (43123, "AUE_MAC_GET_FD"),
        (43124, "AUE_MAC_GET_FILE"),
        (43125, "AUE_MAC_SET_FD"),
        (43126, "AUE_MAC_SET_FILE"),
        (43127, "AUE_MAC_SYSCALL"),
        (43128, "AUE_MAC_GET_PID"),
        (43129, "AUE_MAC_GET_LINK"),
        (43130, "AUE_MAC_SET_LINK"),
        (43131, "AUE_MAC_EXECVE"),
        (43132, "AUE_GETPATH_FROMFD"),
        (43133, "AUE_GETPATH_FROMADDR"),
        (43134, "AUE_MQ_OPEN"),
        (43135, "AUE_MQ_SETATTR"),
        (43136, "AUE_MQ_TIMEDRECEIVE"),
        (43137, "AUE_MQ_TIMEDSEND"),
        (43138, "AUE_MQ_NOTIFY"),
        (43139, "AUE_MQ_UNLINK"),
        (43140, "AUE_LISTEN"),
        (43141, "AUE_MLOCKALL"),
        (43142, "AUE_MUNLOCKALL"),
        (43143, "AUE_CLOSEFROM"),
        (43144, "AUE_FEXECVE"),
        (43145, "AUE_FACCESSAT"),
        (43146, "AUE_FCHMODAT"),
        (43147, "AUE_LINKAT"),
        (43148, "AUE_MKDIRAT"),
        (43149, "AUE_MKFIFOAT"),
        (43150, "AUE_MKNODAT"),
        (43151, "AUE_READLINKAT"),
        (43152, "AUE_SYMLINKAT"),
        (43153, "AUE_MAC_GETFSSTAT"),
        (43154, "AUE_MAC_GET_MOUNT"),
        (43155, "AUE_MAC_GET_LCID"),
        (43156, "AUE_MAC_GET_LCTX"),
        (43157, "AUE_MAC_SET_LCTX"),
        (43158, "AUE_MAC_MOUNT"),
        (43159, "AUE_GETLCID"),
        (43160, "AUE_SETLCID"),
        (43161, "AUE_TASKNAMEFORPID"),
        (43162, "AUE_ACCESS_EXTENDED"),
        (43163, "AUE_CHMOD_EXTENDED"),
        (43164, "AUE_FCHMOD_EXTENDED"),
        (43165, "AUE_FSTAT_EXTENDED"),
        (43166, "AUE_LSTAT_EXTENDED"),
        (43167, "AUE_MKDIR_EXTENDED"),
        (43168, "AUE_MKFIFO_EXTENDED"),
        (43169, "AUE_OPEN_EXTENDED"),
        (43170, "AUE_OPEN_EXTENDED_R"),
        (43171, "AUE_OPEN_EXTENDED_RC"),
        (43172, "AUE_OPEN_EXTENDED_RT"),
        (43173, "AUE_OPEN_EXTENDED_RTC"),
        (43174, "AUE_OPEN_EXTENDED_W"),
        (43175, "AUE_OPEN_EXTENDED_WC"),
        (43176, "AUE_OPEN_EXTENDED_WT"),
        (43177, "AUE_OPEN_EXTENDED_WTC"),
        (43178, "AUE_OPEN_EXTENDED_RW"),
        (43179, "AUE_OPEN_EXTENDED_RWC"),
        (43180, "AUE_OPEN_EXTENDED_RWT"),
        (43181, "AUE_OPEN_EXTENDED_RWTC"),
        (43182, "AUE_STAT_EXTENDED"),
        (43183, "AUE_UMASK_EXTENDED"),
        (43184, "AUE_OPENAT"),
        (43185, "AUE_POSIX_OPENPT"),
        (43186, "AUE_CAP_NEW"),
        (43187, "AUE_CAP_RIGHTS_GET"),
        (43188, "AUE_CAP_ENTER"),
        (43189, "AUE_CAP_GETMODE"),
        (43190, "AUE_POSIX_SPAWN"),
        (43191, "AUE_FSGETPATH"),
        (43192, "AUE_PREAD"),
        (43193, "AUE_PWRITE"),
        (43194, "AUE_FSCTL"),
        (43195, "AUE_FFSCTL"),
        (43196, "AUE_LPATHCONF"),
        (43197, "AUE_PDFORK"),
        (43198, "AUE_PDKILL"),
        (43199, "AUE_PDGETPID"),
        (43200, "AUE_PDWAIT"),
        (43201, "AUE_WAIT6"),
        (44901, "AUE_SESSION_START"),
        (44902, "AUE_SESSION_UPDATE"),
        (44903, "AUE_SESSION_END"),
        (44904, "AUE_SESSION_CLOSE"),
        (45000, "AUE_audit_startup"),
        (45001, "AUE_audit_shutdown"),
        (45002, "AUE_audit_recovery"),
        (45014, "AUE_modify_password"),
        (45015, "AUE_create_group"),
        (45016, "AUE_delete_group"),
        (45017, "AUE_modify_group"),
        (45018, "AUE_add_to_group"),
        (45019, "AUE_remove_from_group"),
        (45020, "AUE_revoke_obj"),
        (45021, "AUE_lw_login"),
        (45022, "AUE_lw_logout"),
        (45023, "AUE_auth_user"),
        (45024, "AUE_ssconn"),
        (45025, "AUE_ssauthorize"),
        (45026, "AUE_ssauthint"),
        (45027, "AUE_ssauthmech"),
        (45028, "AUE_sec_assessment"),
    ])
});

/// An entry of an `audit_event(5)` file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDefinition {
    /// The `AUE_` name
    pub name: String,
    /// Free text describing the event, often the system call, i.e. `execve(2)`
    pub description: String,
}

/// Event names keyed by event number
///
/// Names loaded from a file take precedence over the built-in ones. Only events loaded from
/// a file carry a description.
#[derive(Debug, Default)]
pub struct EventCatalog {
    overrides: HashMap<u16, EventDefinition>,
}

impl EventCatalog {
    /// A catalog that only knows the built-in names
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Build a catalog from the built-in names and the contents of an `audit_event` file
    ///
    /// Returns the catalog along with every entry that could not be parsed.
    pub fn from_file(path: &Path) -> Result<(Self, Vec<CatalogError>), CatalogError> {
        let mut catalog = Self::builtin();
        let contents =
            read_to_string(path).map_err(|why| CatalogError::CannotRead(why, path.to_path_buf()))?;
        let rejected = catalog.load(&contents);
        debug!(
            "Loaded {} event names from {}",
            catalog.overrides.len(),
            path.display()
        );
        Ok((catalog, rejected))
    }

    /// Parse `number:name:description:classes` entries, skipping blank lines and `#` comments
    pub fn load(&mut self, contents: &str) -> Vec<CatalogError> {
        let mut rejected = vec![];
        for (idx, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match parse_entry(line) {
                Some((number, definition)) => {
                    self.overrides.insert(number, definition);
                }
                None => {
                    let err = CatalogError::InvalidEntry(idx + 1, line.to_string());
                    warn!("{err}");
                    rejected.push(err);
                }
            }
        }
        rejected
    }

    /// Get the name of an event number, or `UNKNOWN`
    pub fn name(&self, event_type: u16) -> &str {
        match self.overrides.get(&event_type) {
            Some(definition) => &definition.name,
            None => BSM_EVENTS
                .get(&event_type)
                .copied()
                .unwrap_or(super::UNKNOWN),
        }
    }

    /// Get the description of an event number, if a file defined one
    pub fn description(&self, event_type: u16) -> Option<&str> {
        self.overrides
            .get(&event_type)
            .map(|definition| definition.description.as_str())
            .filter(|description| !description.is_empty())
    }

    /// Number of names loaded from a file
    pub fn overrides(&self) -> usize {
        self.overrides.len()
    }
}

fn parse_entry(line: &str) -> Option<(u16, EventDefinition)> {
    let mut fields = line.split(':');
    let number = fields.next()?.trim().parse::<u16>().ok()?;
    let name = fields.next()?.trim();
    let description = fields.next()?.trim();
    // Classes are required even though they are not kept
    fields.next()?;
    if name.is_empty() {
        return None;
    }
    Some((
        number,
        EventDefinition {
            name: name.to_string(),
            description: description.to_string(),
        },
    ))
}
