/*!
 Errors and warnings that can happen when reading audit trail data.
*/

pub mod audit;
pub mod catalog;
pub mod cursor;
pub mod token;
pub mod warning;
