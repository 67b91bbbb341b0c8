//! Plain-text rendering of the registry, as printed by `error-codes`.
//!
//! ```text
//! Error Codes and their Numeric Values:
//! ====================================
//!  0: access
//!  1: would-block
//! ...
//! 36: cross-device
//! ```

use crate::ErrorCode;
use std::io;

/// First header line.
pub const TABLE_TITLE: &str = "Error Codes and their Numeric Values:";

/// Second header line.
pub const TABLE_RULE: &str = "====================================";

/// `(discriminant, name)` pairs in ascending order.
pub fn rows() -> impl Iterator<Item = (u8, &'static str)> {
    ErrorCode::ALL
        .into_iter()
        .map(|code| (code.discriminant(), code.as_str()))
}

/// Write the header and one `{:2}: {name}` line per code.
pub fn write_table<W: io::Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{TABLE_TITLE}")?;
    writeln!(out, "{TABLE_RULE}")?;

    for (index, name) in rows() {
        writeln!(out, "{index:2}: {name}")?;
    }

    Ok(())
}
