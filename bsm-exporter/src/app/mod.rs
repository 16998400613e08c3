pub mod error;
pub mod export_type;
pub mod options;
pub mod progress;
pub mod runtime;
