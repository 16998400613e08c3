use std::io::{BufWriter, Write};

use bsm_audit::{error::warning::DecodeWarning, record::Event, tokens::Token};

use crate::app::{
    error::RuntimeError,
    progress::{build_hidden_progress_bar, build_progress_bar_export},
    runtime::Config,
};

/// Destination of an export, either a file or stdout
pub type Output = BufWriter<Box<dyn Write>>;

/// Defines behavior for iterating over the events of an audit trail and writing them out
pub trait Exporter<'a> {
    /// Create a new exporter with references to the cached data
    fn new(config: &'a Config) -> Result<Self, RuntimeError>
    where
        Self: Sized;
    /// Begin iterating over the events of the trail
    fn iter_events(&mut self) -> Result<(), RuntimeError>;
}

/// Defines behavior for formatting events to the desired output format
pub(super) trait Writer<'a, T> {
    /// Format an event with its tokens and warnings
    fn format_event(&self, event: &Event) -> T;
    /// Format a single token
    fn format_token(&self, token: &Token) -> T;
    /// Format a warning raised while decoding an event
    fn format_warning(&self, warning: &DecodeWarning) -> T;
}

/// Walk every event of the trail, writing what `render` produces for each one
///
/// A trail that ends early is reported and the export still succeeds; any other
/// decoding error aborts it.
pub(super) fn export_events<F>(
    config: &Config,
    file: &mut Output,
    mut render: F,
) -> Result<(), RuntimeError>
where
    F: FnMut(&Event) -> String,
{
    let pb = match config.options.export_path {
        Some(_) => build_progress_bar_export(config.trail.len() as u64),
        None => build_hidden_progress_bar(),
    };

    let mut trail = config.events()?;
    let mut stopped = None;
    for item in trail.by_ref() {
        match item {
            Ok(event) => {
                let text = render(&event);
                file.write_all(text.as_bytes())
                    .map_err(RuntimeError::DiskError)?;
                pb.set_position(event.end_offset as u64);
            }
            Err(why) => stopped = Some(why),
        }
    }
    pb.finish();
    for warning in trail.unattached_warnings() {
        eprintln!("[WARNING] {warning}");
    }

    file.flush().map_err(RuntimeError::DiskError)?;

    match stopped {
        Some(why) if why.is_fatal() => Err(RuntimeError::AuditError(why)),
        Some(why) => {
            eprintln!("Stopped at {:#x}: {why}", trail.offset());
            Ok(())
        }
        None => Ok(()),
    }
}
