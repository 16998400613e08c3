/*!
 Errors that can happen when loading an `audit_event` file into an [`EventCatalog`](crate::tables::events::EventCatalog).
*/

use std::{
    fmt::{Display, Formatter, Result},
    io::Error as IoError,
    path::PathBuf,
};

/// Errors that can happen when reading event names from disk
#[derive(Debug)]
pub enum CatalogError {
    /// The file could not be read
    CannotRead(IoError, PathBuf),
    /// Line `.0` is not a `number:name:description:classes` entry
    InvalidEntry(usize, String),
}

impl Display for CatalogError {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result {
        match self {
            CatalogError::CannotRead(why, path) => write!(fmt, "{why}: {path:?}"),
            CatalogError::InvalidEntry(line, entry) => {
                write!(fmt, "Unknown entry on line {line}: {entry:?}")
            }
        }
    }
}

impl std::error::Error for CatalogError {}
