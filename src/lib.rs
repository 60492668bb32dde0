//! In-memory INI-style configuration with ordered groups and typed accessors.
//!
//! An [`IniStore`] is an ordered sequence of groups of key/value string
//! pairs: an anonymous root group for top-level values plus any number of
//! named groups. Stores load from and save to a line-oriented text format:
//!
//! ```text
//! top_level=value
//!
//! [group-name]
//! key=value
//! other=text with = signs kept verbatim after the first '='
//! ```
//!
//! # Quick Start
//!
//! ```no_run
//! use mini_ini::prelude::*;
//!
//! // Load the file, or start empty if it is missing
//! let mut store = IniStore::load_or_new("app.ini");
//!
//! store.set(None, "title", "demo")?;
//! store.set_i64(Some("net"), "port", 8080)?;
//!
//! let port = store.get_i64(Some("net"), "port", 80);
//! let theme = store.get_or(Some("ui"), "theme", "dark");
//! println!("serving {} on port {}", theme, port);
//!
//! store.save()?;
//! # Ok::<(), mini_ini::IniError>(())
//! ```
//!
//! # Design
//!
//! - Parsing is lenient: malformed lines are dropped, never fatal.
//! - Group names are flat identifiers; `parent::child` is one group.
//! - Values keep insertion order; save/load round-trips are order-stable.
//! - Typed accessors (`get_i64`, `get_f64`, `get_bool`) are thin wrappers
//!   over the string API and degrade to a caller-supplied fallback.
//! - A store is plain owned data with no shared state; it is not
//!   thread-safe and callers needing concurrency must wrap it themselves.
//!
//! # Feature Flags
//!
//! - `logging` - Enable library-level tracing (consumers provide their own subscriber)
//! - `cli` - Enable the command-line interface binary
//! - `full` - Enable all features

pub mod ini;
mod logging;
pub mod prelude;

mod error;

// Re-export the unified error type
pub use error::{Error, Result};

// Re-export the INI types at crate root for convenience
pub use ini::{Group, IniError, IniStore, Value, MAX_LINE_LEN};
