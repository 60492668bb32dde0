//! INI serializer.
//!
//! Writes a store back out in the line format the parser reads: root
//! values first with no header, then one `[name]` block per named group,
//! with exactly one blank line between blocks and none after the last.

use std::io::Write;

use super::store::IniStore;

/// Serialize the store to a writer.
///
/// Values are written in stored order, so parsing the output reproduces
/// the store (root values, group order, per-group key order). Empty named
/// groups still get a header so their existence round-trips; an empty
/// root contributes nothing.
pub(super) fn write_to<W: Write>(store: &IniStore, writer: &mut W) -> std::io::Result<()> {
    let mut first_block = true;

    for group in store.groups() {
        match group.name() {
            None => {
                if group.is_empty() {
                    continue;
                }
                first_block = false;
            }
            Some(name) => {
                if !first_block {
                    writeln!(writer)?;
                }
                first_block = false;
                writeln!(writer, "[{}]", name)?;
            }
        }
        for (key, text) in group.iter() {
            writeln!(writer, "{}={}", key, text)?;
        }
    }

    Ok(())
}
