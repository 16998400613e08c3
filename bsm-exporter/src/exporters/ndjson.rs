use base64::{prelude::BASE64_STANDARD, Engine};
use json::{object, JsonValue};

use bsm_audit::{
    error::warning::DecodeWarning,
    format::TokenFormatter,
    record::Event,
    tokens::{header::Header, Token},
    util::dates::format_timestamp,
};

use crate::{
    app::{error::RuntimeError, runtime::Config},
    exporters::exporter::{export_events, Exporter, Writer},
};

pub struct NDJSON<'a> {
    /// Data that is setup from the application's runtime
    pub config: &'a Config,
    /// Renders the `display` field of each token
    pub formatter: TokenFormatter<'a>,
}

impl<'a> Exporter<'a> for NDJSON<'a> {
    fn new(config: &'a Config) -> Result<Self, RuntimeError> {
        Ok(NDJSON {
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
        export_events(self.config, &mut file, |event| {
            let mut line = self.format_event(event).dump();
            line.push('\n');
            line
        })
    }
}

impl<'a> NDJSON<'a> {
    fn format_header(&self, header: &Header) -> JsonValue {
        object! {
            kind: header.kind().name(),
            length: header.length,
            version: header.version,
            event_type: header.event_type,
            event_name: self.formatter.event_name(header),
            description: self.formatter.event_description(header),
            modifier: header.modifier,
            seconds: header.seconds,
            microseconds: header.microseconds,
            time: format_timestamp(header.seconds, header.microseconds),
            address: header.address().map(|address| address.to_string()),
        }
    }
}

impl<'a> Writer<'a, JsonValue> for NDJSON<'a> {
    fn format_event(&self, event: &Event) -> JsonValue {
        object! {
            number: event.number as u64,
            offset: event.offset as u64,
            end_offset: event.end_offset as u64,
            status: event.status.name(),
            header: self.format_header(&event.header),
            tokens: JsonValue::Array(event.tokens.iter().map(|token| self.format_token(token)).collect()),
            warnings: JsonValue::Array(event.warnings.iter().map(|warning| self.format_warning(warning)).collect()),
        }
    }

    fn format_token(&self, token: &Token) -> JsonValue {
        let mut json_token = object! {
            kind: token.name(),
            display: self.formatter.format_token(token),
        };

        // Raw payloads are kept so nothing is lost to formatting
        match token {
            Token::Opaque(bytes) => json_token["data"] = BASE64_STANDARD.encode(bytes).into(),
            Token::Data(data) => json_token["data"] = BASE64_STANDARD.encode(&data.raw).into(),
            _ => {}
        }
        if token.has_repaired_text() {
            json_token["repaired_text"] = true.into();
        }
        json_token
    }

    fn format_warning(&self, warning: &DecodeWarning) -> JsonValue {
        object! {
            kind: warning.kind(),
            message: warning.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use bsm_audit::{
        error::warning::DecodeWarning,
        record::EventStatus,
        tokens::{header::HeaderVariant, Token},
    };

    use crate::{
        app::runtime::tests::{fake_config, fake_options},
        exporters::exporter::Writer,
        Exporter, NDJSON,
    };

    #[test]
    fn can_format_ndjson_fixture() {
        let config = fake_config(fake_options());
        let exporter = NDJSON::new(&config).unwrap();

        let events: Vec<_> = config
            .events()
            .unwrap()
            .map(|event| exporter.format_event(&event.unwrap()))
            .collect();
        assert_eq!(events.len(), 3);

        let first = &events[0];
        assert_eq!(first["number"], 1);
        assert_eq!(first["offset"], 0);
        assert_eq!(first["end_offset"], 120);
        assert_eq!(first["status"], "complete");
        assert_eq!(first["header"]["kind"], "AUT_HEADER32");
        assert_eq!(first["header"]["event_name"], "AUE_EXECVE");
        assert_eq!(first["header"]["time"], "2014-02-20 09:23:07 (1392888187.322)");
        assert!(first["header"]["address"].is_null());
        assert_eq!(first["tokens"][0]["kind"], "AUT_EXEC_ARGS");
        assert_eq!(first["tokens"][0]["display"], "Exec Args: ls -la");
        assert_eq!(first["tokens"].len(), 6);
        assert!(first["warnings"].is_empty());

        let second = &events[1];
        assert_eq!(second["header"]["kind"], "AUT_HEADER64_EX");
        assert_eq!(second["header"]["address"], "10.0.0.1");
        assert_eq!(events[2]["header"]["event_name"], "AUE_auth_user");
        assert!(events[2]["header"]["description"].is_null());
    }

    #[test]
    fn can_format_ndjson_description() {
        let mut config = fake_config(fake_options());
        config.catalog.load("23:AUE_EXECVE:execve(2):pc,ex");
        let exporter = NDJSON::new(&config).unwrap();

        let event = config.events().unwrap().next().unwrap().unwrap();
        let json_event = exporter.format_event(&event);
        assert_eq!(json_event["header"]["event_name"], "AUE_EXECVE");
        assert_eq!(json_event["header"]["description"], "execve(2)");
    }

    #[test]
    fn can_format_ndjson_opaque() {
        let config = fake_config(fake_options());
        let exporter = NDJSON::new(&config).unwrap();

        let token = exporter.format_token(&Token::Opaque(vec![0xde, 0xad, 0xbe, 0xef]));
        assert_eq!(token["kind"], "AUT_OPAQUE");
        assert_eq!(token["data"], "3q2+7w==");
        assert!(token["repaired_text"].is_null());
    }

    #[test]
    fn can_format_ndjson_warning() {
        let config = fake_config(fake_options());
        let exporter = NDJSON::new(&config).unwrap();

        let warning = exporter.format_warning(&DecodeWarning::UnsupportedVersion(10));
        assert_eq!(
            warning.dump(),
            r#"{"kind":"unsupported_version","message":"BSM version 10 not supported"}"#
        );
    }

    #[test]
    fn can_format_ndjson_truncated_event() {
        let config = fake_config(fake_options());
        let exporter = NDJSON::new(&config).unwrap();

        let mut event = config.events().unwrap().next().unwrap().unwrap();
        event.status = EventStatus::Truncated;
        event.tokens.truncate(1);
        event.warnings.push(DecodeWarning::UnknownToken {
            tag: 0x01,
            offset: 0x30,
        });
        assert_eq!(event.header.variant, HeaderVariant::Time32);

        let json_event = exporter.format_event(&event);
        assert_eq!(json_event["status"], "truncated");
        assert_eq!(json_event["tokens"].len(), 1);
        assert_eq!(json_event["warnings"][0]["kind"], "unknown_token");
    }

    #[test]
    fn can_export_ndjson_to_file() {
        let mut options = fake_options();
        let path = std::env::temp_dir().join("bsm-exporter-ndjson-test.ndjson");
        options.export_path = Some(path.clone());
        let config = fake_config(options);

        let mut exporter = NDJSON::new(&config).unwrap();
        exporter.iter_events().unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines.len(), 3);
        for line in lines {
            assert!(json::parse(line).unwrap().is_object());
        }
        std::fs::remove_file(path).unwrap();
    }
}
