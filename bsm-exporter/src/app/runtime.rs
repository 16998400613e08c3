use std::{
    collections::BTreeMap,
    fs::{read, File},
    io::{stdout, BufWriter, Write},
};

use bsm_audit::{
    error::audit::AuditError,
    record::{trail::AuditTrail, EventStatus},
    tables::events::EventCatalog,
};

use crate::{
    app::{error::RuntimeError, export_type::ExportType, options::Options},
    Exporter, NDJSON, TXT,
};

/// Stores the application state and handles application lifecycle
pub struct Config {
    /// The bytes of the audit trail
    pub trail: Vec<u8>,
    /// Event names used when formatting headers
    pub catalog: EventCatalog,
    /// App configuration options
    pub options: Options,
}

impl Config {
    /// Create a new instance of the application
    pub fn new(options: Options) -> Result<Config, RuntimeError> {
        eprintln!("Reading {}...", options.audit_trail.display());
        let trail = read(&options.audit_trail)
            .map_err(|why| RuntimeError::CannotRead(why, options.audit_trail.clone()))?;

        let catalog = match options.get_audit_event_file() {
            Some(path) => {
                let (catalog, rejected) =
                    EventCatalog::from_file(&path).map_err(RuntimeError::CatalogError)?;
                if !rejected.is_empty() {
                    eprintln!(
                        "Skipped {} invalid entries in {}",
                        rejected.len(),
                        path.display()
                    );
                }
                catalog
            }
            None => EventCatalog::builtin(),
        };

        Ok(Config {
            trail,
            catalog,
            options,
        })
    }

    /// Begin iterating over the events of the trail
    pub fn events(&self) -> Result<AuditTrail, RuntimeError> {
        AuditTrail::new(&self.trail, self.options.boundary_policy).map_err(RuntimeError::AuditError)
    }

    /// Open the destination of the export
    pub fn output(&self) -> Result<BufWriter<Box<dyn Write>>, RuntimeError> {
        let writer: Box<dyn Write> = match &self.options.export_path {
            Some(path) => Box::new(
                File::create(path).map_err(|why| RuntimeError::CreateError(why, path.clone()))?,
            ),
            None => Box::new(stdout()),
        };
        Ok(BufWriter::new(writer))
    }

    /// Human readable name of where the export goes
    pub fn destination(&self) -> String {
        match &self.options.export_path {
            Some(path) => path.display().to_string(),
            None => "stdout".to_string(),
        }
    }

    /// Handles diagnostic tests for the audit trail
    fn run_diagnostic(&self) -> Result<(), RuntimeError> {
        let summary = Diagnostics::collect(self.events()?);
        println!("{}", summary.render());
        match summary.error {
            Some(why) if why.is_fatal() => Err(RuntimeError::AuditError(why)),
            _ => Ok(()),
        }
    }

    /// Start the app given the provided set of options. This will either run
    /// diagnostic tests on the audit trail or export events to the specified file.
    pub fn start(&self) -> Result<(), RuntimeError> {
        if self.options.diagnostic {
            self.run_diagnostic()?;
        } else {
            match self.options.export_type {
                ExportType::Txt => TXT::new(self)?.iter_events()?,
                ExportType::Ndjson => NDJSON::new(self)?.iter_events()?,
            }
        }
        eprintln!("Done!");
        Ok(())
    }
}

/// Counts of what a full pass over an audit trail recovered
#[derive(Debug, Default)]
pub struct Diagnostics {
    pub events: usize,
    pub complete: usize,
    pub truncated: usize,
    pub overrun: usize,
    /// Number of warnings of each kind
    pub warnings: BTreeMap<&'static str, usize>,
    /// The error that stopped the pass, if any
    pub error: Option<AuditError>,
}

impl Diagnostics {
    pub fn collect(mut trail: AuditTrail) -> Self {
        let mut summary = Self::default();
        for item in trail.by_ref() {
            match item {
                Ok(event) => {
                    summary.events += 1;
                    match event.status {
                        EventStatus::Complete => summary.complete += 1,
                        EventStatus::Truncated => summary.truncated += 1,
                        EventStatus::Overrun => summary.overrun += 1,
                    }
                    for warning in &event.warnings {
                        *summary.warnings.entry(warning.kind()).or_insert(0) += 1;
                    }
                }
                Err(why) => summary.error = Some(why),
            }
        }
        for warning in trail.unattached_warnings() {
            *summary.warnings.entry(warning.kind()).or_insert(0) += 1;
        }
        summary
    }

    pub fn render(&self) -> String {
        let mut out_s = String::from("Audit Trail Diagnostics\n");
        out_s.push_str(&format!("Events: {}\n", self.events));
        out_s.push_str(&format!("    Complete: {}\n", self.complete));
        out_s.push_str(&format!("    Truncated: {}\n", self.truncated));
        out_s.push_str(&format!("    Overrun: {}\n", self.overrun));
        if self.warnings.is_empty() {
            out_s.push_str("Warnings: none\n");
        } else {
            out_s.push_str("Warnings:\n");
            for (kind, count) in &self.warnings {
                out_s.push_str(&format!("    {kind}: {count}\n"));
            }
        }
        if let Some(why) = &self.error {
            out_s.push_str(&format!("Stopped early: {why}\n"));
        }
        out_s
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::{env::current_dir, fs::read, path::PathBuf};

    use bsm_audit::{record::BoundaryPolicy, tables::events::EventCatalog};

    use crate::app::{
        export_type::ExportType,
        options::Options,
        runtime::{Config, Diagnostics},
    };

    pub(crate) fn fixture_path() -> PathBuf {
        current_dir()
            .unwrap()
            .parent()
            .unwrap()
            .join("bsm-audit/test_data/audit_trail.bsm")
    }

    pub(crate) fn fake_options() -> Options {
        Options {
            audit_trail: fixture_path(),
            audit_event_file: None,
            diagnostic: false,
            export_type: ExportType::Txt,
            export_path: None,
            boundary_policy: BoundaryPolicy::DeclaredLength,
        }
    }

    pub(crate) fn fake_config(options: Options) -> Config {
        Config {
            trail: read(&options.audit_trail).unwrap(),
            catalog: EventCatalog::builtin(),
            options,
        }
    }

    #[test]
    fn can_create() {
        let config = Config::new(fake_options()).unwrap();
        assert_eq!(config.trail.len(), 351);
        assert_eq!(config.destination(), "stdout");
    }

    #[test]
    fn cant_create_missing_trail() {
        let mut options = fake_options();
        options.audit_trail = PathBuf::from("/does/not/exist.bsm");
        assert!(Config::new(options).is_err());
    }

    #[test]
    fn can_collect_diagnostics() {
        let config = fake_config(fake_options());
        let summary = Diagnostics::collect(config.events().unwrap());

        assert_eq!(summary.events, 3);
        assert_eq!(summary.complete, 3);
        assert!(summary.warnings.is_empty());
        assert!(summary.error.is_none());
        assert_eq!(
            summary.render(),
            "Audit Trail Diagnostics\nEvents: 3\n    Complete: 3\n    Truncated: 0\n    Overrun: 0\nWarnings: none\n"
        );
    }

    #[test]
    fn can_collect_diagnostics_with_warnings() {
        let mut config = fake_config(fake_options());
        // Replace the tag of the first token in the first record
        config.trail[18] = 0x01;
        let summary = Diagnostics::collect(config.events().unwrap());

        assert_eq!(summary.events, 3);
        assert_eq!(summary.truncated, 1);
        assert_eq!(summary.warnings.get("unknown_token"), Some(&1));
    }

    #[test]
    fn can_count_warnings_after_last_event() {
        let mut config = fake_config(fake_options());
        // Padding after the last record holds no trailer to realign to
        config.trail.extend_from_slice(&[0; 4]);
        let summary = Diagnostics::collect(config.events().unwrap());

        assert_eq!(summary.events, 3);
        assert_eq!(summary.complete, 3);
        assert_eq!(summary.warnings.get("misaligned_record"), Some(&1));
        assert!(summary.error.is_some_and(|why| !why.is_fatal()));
    }
}
