/*!
 Lookup tables that turn numbers found in tokens into display names.
*/

pub mod errors;
pub mod events;
pub mod protocols;

/// Rendered for any key a table does not contain
pub const UNKNOWN: &str = "UNKNOWN";
