//! INI document module.
//!
//! This module provides the in-memory INI data model ([`IniStore`],
//! [`Group`], [`Value`]), the lenient line parser and the serializer
//! that reproduces a loadable file.

mod error;
mod parse;
mod store;
mod types;
mod write;

pub use error::IniError;
pub use parse::MAX_LINE_LEN;
pub use store::IniStore;
pub use types::{Group, Value};
