use std::fmt::Display;

/// Represents the type of output the exporter writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportType {
    /// Plain text, one block per event
    Txt,
    /// One JSON object per line
    Ndjson,
}

impl ExportType {
    /// Given user's input, return a variant if the input matches one
    pub fn from_cli(export_type: &str) -> Option<Self> {
        match export_type.to_lowercase().as_str() {
            "txt" => Some(Self::Txt),
            "ndjson" | "json" => Some(Self::Ndjson),
            _ => None,
        }
    }
}

impl Display for ExportType {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportType::Txt => write!(fmt, "txt"),
            ExportType::Ndjson => write!(fmt, "ndjson"),
        }
    }
}
