/*!
 This module defines common utilities used by the token decoders.
*/

pub mod cursor;
pub mod dates;
pub mod text;
pub mod writer;
