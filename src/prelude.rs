//! Convenient re-exports for common usage patterns.
//!
//! This module provides a single import to bring all commonly used types
//! into scope.
//!
//! # Example
//!
//! ```no_run
//! use mini_ini::prelude::*;
//!
//! let mut store = IniStore::load_or_new("app.ini");
//! store.set(Some("net"), "host", "localhost")?;
//! store.save()?;
//! # Ok::<(), IniError>(())
//! ```

// Unified error handling
pub use crate::error::{Error, Result};

// INI document types
pub use crate::ini::{Group, IniError, IniStore, Value, MAX_LINE_LEN};
