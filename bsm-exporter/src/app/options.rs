use std::path::{Path, PathBuf};

use clap::{crate_version, Arg, ArgAction, ArgMatches, Command};

use bsm_audit::{record::BoundaryPolicy, tables::events::DEFAULT_AUDIT_EVENT_FILE};

use crate::app::{error::RuntimeError, export_type::ExportType};

/// Option to print a decode summary instead of exporting
pub const OPTION_DIAGNOSTIC: &str = "diagnostics";
/// Option to set the path of the audit trail to read
pub const OPTION_AUDIT_TRAIL: &str = "audit-trail";
/// Option to set the output format
pub const OPTION_EXPORT_TYPE: &str = "export-type";
/// Option to set the file the export is written to
pub const OPTION_EXPORT_PATH: &str = "export-path";
/// Option to select how record boundaries are found
pub const OPTION_BOUNDARY_POLICY: &str = "boundary-policy";
/// Option to set an `audit_event` file with additional event names
pub const OPTION_AUDIT_EVENT_FILE: &str = "audit-event-file";

// Other CLI Text
pub const SUPPORTED_FILE_TYPES: &str = "txt, ndjson";
pub const SUPPORTED_BOUNDARY_POLICIES: &str = "declared, trailer";
pub const ABOUT: &str = concat!(
    "The `bsm-exporter` binary decodes BSM audit trails,\n",
    "as written by `auditd` on macOS and FreeBSD,\n",
    "and exports every event it can recover to txt or ndjson."
);

#[derive(Debug, PartialEq, Eq)]
pub struct Options {
    /// Path to the audit trail we are reading
    pub audit_trail: PathBuf,
    /// Path to an `audit_event` file given on the command line
    pub audit_event_file: Option<PathBuf>,
    /// If true, print a summary of the decode instead of exporting
    pub diagnostic: bool,
    /// The output format
    pub export_type: ExportType,
    /// Where to write the export, stdout if `None`
    pub export_path: Option<PathBuf>,
    /// How record boundaries are located
    pub boundary_policy: BoundaryPolicy,
}

impl Options {
    pub fn from_args(args: &ArgMatches) -> Result<Self, RuntimeError> {
        let audit_trail: Option<&String> = args.get_one(OPTION_AUDIT_TRAIL);
        let audit_event_file: Option<&String> = args.get_one(OPTION_AUDIT_EVENT_FILE);
        let diagnostic = args.get_flag(OPTION_DIAGNOSTIC);
        let export_file_type: Option<&String> = args.get_one(OPTION_EXPORT_TYPE);
        let export_path: Option<&String> = args.get_one(OPTION_EXPORT_PATH);
        let boundary_policy: Option<&String> = args.get_one(OPTION_BOUNDARY_POLICY);

        // Ensure there is an audit trail to read
        let audit_trail = audit_trail.ok_or(RuntimeError::InvalidOptions(format!(
            "No audit trail provided! Pass `--{OPTION_AUDIT_TRAIL}`"
        )))?;

        // Ensure that if diagnostics are enabled, no other export options are provided
        if diagnostic {
            if export_file_type.is_some() {
                return Err(RuntimeError::InvalidOptions(format!(
                    "Diagnostics are enabled; --{OPTION_EXPORT_TYPE} is disallowed"
                )));
            }
            if export_path.is_some() {
                return Err(RuntimeError::InvalidOptions(format!(
                    "Diagnostics are enabled; --{OPTION_EXPORT_PATH} is disallowed"
                )));
            }
        }

        // Build the export type
        let export_type = match export_file_type {
            Some(export_type_str) => {
                ExportType::from_cli(export_type_str).ok_or(RuntimeError::InvalidOptions(format!(
                    "{export_type_str} is not a valid export type! Must be one of <{SUPPORTED_FILE_TYPES}>"
                )))?
            }
            None => ExportType::Txt,
        };

        // Build the boundary policy
        let boundary_policy = match boundary_policy.map(String::as_str) {
            None | Some("declared") => BoundaryPolicy::DeclaredLength,
            Some("trailer") => BoundaryPolicy::Trailer,
            Some(other) => {
                return Err(RuntimeError::InvalidOptions(format!(
                    "{other} is not a valid boundary policy! Must be one of <{SUPPORTED_BOUNDARY_POLICIES}>"
                )))
            }
        };

        Ok(Options {
            audit_trail: PathBuf::from(audit_trail),
            audit_event_file: audit_event_file.map(PathBuf::from),
            diagnostic,
            export_type,
            export_path: export_path.map(PathBuf::from),
            boundary_policy,
        })
    }

    /// Get the `audit_event` file to read event names from
    ///
    /// Falls back to the system file when none was passed and it exists.
    pub fn get_audit_event_file(&self) -> Option<PathBuf> {
        match &self.audit_event_file {
            Some(path) => Some(path.clone()),
            None => {
                let default = Path::new(DEFAULT_AUDIT_EVENT_FILE);
                default.exists().then(|| default.to_path_buf())
            }
        }
    }
}

/// Build the command line argument parser
fn get_command() -> Command {
    Command::new("BSM Exporter")
        .version(crate_version!())
        .about(ABOUT)
        .arg_required_else_help(true)
        .arg(
            Arg::new(OPTION_AUDIT_TRAIL)
                .short('f')
                .long(OPTION_AUDIT_TRAIL)
                .help("Specify a path to a BSM audit trail\n")
                .display_order(0)
                .value_name("path/to/trail"),
        )
        .arg(
            Arg::new(OPTION_DIAGNOSTIC)
                .short('d')
                .long(OPTION_DIAGNOSTIC)
                .help("Print a summary of the decoded events and exit\n")
                .action(ArgAction::SetTrue)
                .display_order(1),
        )
        .arg(
            Arg::new(OPTION_EXPORT_TYPE)
                .short('e')
                .long(OPTION_EXPORT_TYPE)
                .help("Specify a single file format to export events into\n")
                .display_order(2)
                .value_name(SUPPORTED_FILE_TYPES),
        )
        .arg(
            Arg::new(OPTION_EXPORT_PATH)
                .short('o')
                .long(OPTION_EXPORT_PATH)
                .help("Specify a file to write the export to\nIf omitted, the export is written to stdout\n")
                .display_order(3)
                .value_name("path/to/export"),
        )
        .arg(
            Arg::new(OPTION_BOUNDARY_POLICY)
                .short('b')
                .long(OPTION_BOUNDARY_POLICY)
                .help("Specify how the end of a record is found\n`declared` trusts the length in each header, `trailer` ends each record at its trailer token\nIf omitted, the default is `declared`\n")
                .display_order(4)
                .value_name(SUPPORTED_BOUNDARY_POLICIES),
        )
        .arg(
            Arg::new(OPTION_AUDIT_EVENT_FILE)
                .short('a')
                .long(OPTION_AUDIT_EVENT_FILE)
                .help(format!("Specify an audit_event file with additional event names\nIf omitted, {DEFAULT_AUDIT_EVENT_FILE} is used when it exists\n"))
                .display_order(5)
                .value_name("path/to/audit_event"),
        )
}

/// Parse arguments from the command line
pub fn from_command_line() -> ArgMatches {
    get_command().get_matches()
}

#[cfg(test)]
mod arg_tests {
    use std::path::PathBuf;

    use bsm_audit::record::BoundaryPolicy;

    use crate::app::{
        error::RuntimeError,
        export_type::ExportType,
        options::{get_command, Options},
    };

    #[test]
    fn can_build_option_defaults() {
        let command = get_command();
        let args = command.get_matches_from(["bsm-exporter", "-f", "/var/audit/current"]);
        let actual = Options::from_args(&args).unwrap();

        let expected = Options {
            audit_trail: PathBuf::from("/var/audit/current"),
            audit_event_file: None,
            diagnostic: false,
            export_type: ExportType::Txt,
            export_path: None,
            boundary_policy: BoundaryPolicy::DeclaredLength,
        };

        assert_eq!(actual, expected);
    }

    #[test]
    fn can_build_option_export() {
        let command = get_command();
        let args = command.get_matches_from([
            "bsm-exporter",
            "-f",
            "trail.bsm",
            "-e",
            "ndjson",
            "-o",
            "/tmp/events.ndjson",
            "-b",
            "trailer",
            "-a",
            "audit_event",
        ]);
        let actual = Options::from_args(&args).unwrap();

        let expected = Options {
            audit_trail: PathBuf::from("trail.bsm"),
            audit_event_file: Some(PathBuf::from("audit_event")),
            diagnostic: false,
            export_type: ExportType::Ndjson,
            export_path: Some(PathBuf::from("/tmp/events.ndjson")),
            boundary_policy: BoundaryPolicy::Trailer,
        };

        assert_eq!(actual, expected);
    }

    #[test]
    fn can_build_option_diagnostic_flag() {
        let command = get_command();
        let args = command.get_matches_from(["bsm-exporter", "-f", "trail.bsm", "-d"]);
        let actual = Options::from_args(&args).unwrap();

        assert!(actual.diagnostic);
    }

    #[test]
    fn cant_build_option_without_trail() {
        let command = get_command();
        let args = command.get_matches_from(["bsm-exporter", "-d"]);

        assert!(matches!(
            Options::from_args(&args),
            Err(RuntimeError::InvalidOptions(_))
        ));
    }

    #[test]
    fn cant_build_option_diagnostic_with_export() {
        let command = get_command();
        let args = command.get_matches_from(["bsm-exporter", "-f", "trail.bsm", "-d", "-e", "txt"]);

        assert!(matches!(
            Options::from_args(&args),
            Err(RuntimeError::InvalidOptions(_))
        ));
    }

    #[test]
    fn cant_build_option_invalid_export_type() {
        let command = get_command();
        let args = command.get_matches_from(["bsm-exporter", "-f", "trail.bsm", "-e", "html"]);

        assert!(matches!(
            Options::from_args(&args),
            Err(RuntimeError::InvalidOptions(_))
        ));
    }

    #[test]
    fn cant_build_option_invalid_policy() {
        let command = get_command();
        let args = command.get_matches_from(["bsm-exporter", "-f", "trail.bsm", "-b", "guess"]);

        assert!(matches!(
            Options::from_args(&args),
            Err(RuntimeError::InvalidOptions(_))
        ));
    }

    #[test]
    fn can_use_given_audit_event_file() {
        let command = get_command();
        let args = command.get_matches_from(["bsm-exporter", "-f", "trail.bsm", "-a", "events"]);
        let options = Options::from_args(&args).unwrap();

        assert_eq!(
            options.get_audit_event_file(),
            Some(PathBuf::from("events"))
        );
    }
}
