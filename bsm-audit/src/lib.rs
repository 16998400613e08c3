#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

pub mod error;
pub mod format;
pub mod record;
pub mod tables;
pub mod tokens;
pub mod util;
