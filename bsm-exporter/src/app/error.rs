/*!
Errors that can happen during the application's runtime
*/

use std::{
    fmt::{Display, Formatter, Result},
    io::Error as IoError,
    path::PathBuf,
};

use bsm_audit::error::{audit::AuditError, catalog::CatalogError};

/// Errors that can happen during the application's runtime
#[derive(Debug)]
pub enum RuntimeError {
    InvalidOptions(String),
    CannotRead(IoError, PathBuf),
    CreateError(IoError, PathBuf),
    DiskError(IoError),
    AuditError(AuditError),
    CatalogError(CatalogError),
}

impl Display for RuntimeError {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result {
        match self {
            RuntimeError::InvalidOptions(why) => write!(fmt, "Invalid options!\n{why}"),
            RuntimeError::CannotRead(why, path) => write!(fmt, "{why}: {path:?}"),
            RuntimeError::CreateError(why, path) => write!(fmt, "{why}: {path:?}"),
            RuntimeError::DiskError(why) => write!(fmt, "{why}"),
            RuntimeError::AuditError(why) => write!(fmt, "{why}"),
            RuntimeError::CatalogError(why) => write!(fmt, "{why}"),
        }
    }
}

impl std::error::Error for RuntimeError {}
