use bsm_audit::{
    error::warning::DecodeWarning,
    format::TokenFormatter,
    record::Event,
    tokens::Token,
    util::dates::format_timestamp,
};

use crate::{
    app::{error::RuntimeError, runtime::Config},
    exporters::exporter::{export_events, Exporter, Writer},
};

pub struct TXT<'a> {
    /// Data that is setup from the application's runtime
    pub config: &'a Config,
    /// Renders tokens with the event names of the runtime catalog
    pub formatter: TokenFormatter<'a>,
}

impl<'a> Exporter<'a> for TXT<'a> {
    fn new(config: &'a Config) -> Result<Self, RuntimeError> {
        Ok(TXT {
            config,
            formatter: TokenFormatter::new(&config.catalog),
        })
    }

    fn iter_events(&mut self) -> Result<(), RuntimeError> {
        // Tell the user what we are doing
        eprintln!(
            "Exporting to {} as {}...",
            self.config.destination(),
            self.config.options.export_type
        );

        let mut file = self.config.output()?;
        export_events(self.config, &mut file, |event| self.format_event(event))
    }
}

impl<'a> Writer<'a, String> for TXT<'a> {
    fn format_event(&self, event: &Event) -> String {
        let header = &event.header;
        let mut out_s = format!(
            "Event {}: {} ({}), Time: {}, Offset: {:#x}\n",
            event.number,
            self.formatter.event_name(header),
            header.event_type,
            format_timestamp(header.seconds, header.microseconds),
            event.offset,
        );

        out_s.push_str(&format!("\t* {}\n", self.formatter.format_header(header)));
        for token in &event.tokens {
            out_s.push_str(&format!("\t* {}\n", self.format_token(token)));
        }

        if !event.is_complete() {
            out_s.push_str(&format!("\tStatus: {}\n", event.status.name()));
        }
        for warning in &event.warnings {
            out_s.push_str(&format!("\t{}\n", self.format_warning(warning)));
        }

        // Blank line between events
        out_s.push('\n');
        out_s
    }

    fn format_token(&self, token: &Token) -> String {
        self.formatter.format_token(token)
    }

    fn format_warning(&self, warning: &DecodeWarning) -> String {
        format!("[WARNING] {warning}")
    }
}
