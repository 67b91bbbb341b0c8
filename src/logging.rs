//! Structured log entry for filesystem errors.
//!
//! # Properties
//!
//! - Borrows from `FileSystemError` with an explicit lifetime
//! - Cannot outlive the error that created it
//! - Accessors never allocate
//! - Formatted output bounds every field
//!
//! The entry exists only for the duration of the logging call. Paths and other
//! runtime context stay owned by the error, which scrubs them when dropped.

use crate::ErrorCode;
use std::borrow::Cow;
use std::fmt;
use zeroize::Zeroize;

/// Maximum length for any individual field in formatted output.
const MAX_FIELD_OUTPUT_LEN: usize = 1024;

/// Truncation indicator appended to truncated strings.
const TRUNCATION_INDICATOR: &str = "...[TRUNCATED]";

/// Metadata value wrapper with zeroization for owned data.
///
/// Borrowed values are static literals and are left alone.
#[derive(Debug)]
pub struct ContextField {
    value: Cow<'static, str>,
}

impl ContextField {
    /// Borrow the value.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.value.as_ref()
    }
}

impl From<&'static str> for ContextField {
    fn from(value: &'static str) -> Self {
        Self {
            value: Cow::Borrowed(value),
        }
    }
}

impl From<String> for ContextField {
    fn from(value: String) -> Self {
        Self {
            value: Cow::Owned(value),
        }
    }
}

impl From<Cow<'static, str>> for ContextField {
    fn from(value: Cow<'static, str>) -> Self {
        Self { value }
    }
}

impl Zeroize for ContextField {
    fn zeroize(&mut self) {
        if let Cow::Owned(ref mut s) = self.value {
            s.zeroize();
        }
    }
}

impl Drop for ContextField {
    fn drop(&mut self) {
        self.zeroize();
    }
}

/// Structured log entry borrowed from a `FileSystemError`.
///
/// # Example
///
/// ```rust
/// # use wasi_error_codes::{ErrorCode, FileSystemError};
/// let err = FileSystemError::new(ErrorCode::NoEntry, "open_at", "segment missing");
/// let log = err.internal_log();
/// assert_eq!(log.code(), ErrorCode::NoEntry);
/// assert_eq!(log.operation(), "open_at");
/// ```
#[derive(Debug)]
pub struct ErrorLog<'a> {
    pub(crate) code: ErrorCode,
    pub(crate) operation: &'a str,
    pub(crate) details: &'a str,
    pub(crate) io_kind: Option<&'a str>,
    pub(crate) path: Option<&'a str>,
    pub(crate) metadata: &'a [(&'static str, ContextField)],
    pub(crate) retryable: bool,
}

impl<'a> ErrorLog<'a> {
    /// Format for human-readable logs in trusted debug contexts.
    ///
    /// Materializes the path into a `String`. Only available with the
    /// `trusted_debug` feature in debug builds.
    #[cfg(all(feature = "trusted_debug", debug_assertions))]
    pub fn format_for_trusted_debug(&self) -> String {
        let mut output = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_to(&mut output);
        output
    }

    /// Write the entry to any `fmt::Write` sink.
    ///
    /// Format:
    /// `[<code>] [RETRYABLE] operation='..' details='..' source='..' path='..' key='value'`
    ///
    /// The retry marker, source, path and metadata only appear when present.
    /// Every field is truncated to `MAX_FIELD_OUTPUT_LEN` bytes.
    pub fn write_to(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write!(f, "[{}]", self.code)?;

        if self.retryable {
            f.write_str(" [RETRYABLE]")?;
        }

        write!(
            f,
            " operation='{}' details='{}'",
            truncate_with_indicator(self.operation),
            truncate_with_indicator(self.details)
        )?;

        if let Some(kind) = self.io_kind {
            write!(f, " source='{}'", truncate_with_indicator(kind))?;
        }

        if let Some(path) = self.path {
            write!(f, " path='{}'", truncate_with_indicator(path))?;
        }

        for (key, value) in self.metadata {
            write!(f, " {}='{}'", key, truncate_with_indicator(value.as_str()))?;
        }

        Ok(())
    }

    /// Error code payload.
    #[inline]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Operation that failed.
    #[inline]
    pub const fn operation(&self) -> &str {
        self.operation
    }

    /// Free-form details.
    #[inline]
    pub const fn details(&self) -> &str {
        self.details
    }

    /// `io::ErrorKind` label when the error came from the host.
    #[inline]
    pub const fn io_kind(&self) -> Option<&str> {
        self.io_kind
    }

    /// Path involved, if any. Treat as sensitive.
    #[inline]
    pub const fn path(&self) -> Option<&str> {
        self.path
    }

    /// Attached metadata pairs.
    #[inline]
    pub const fn metadata(&self) -> &[(&'static str, ContextField)] {
        self.metadata
    }

    /// Whether the code is retryable.
    #[inline]
    pub const fn is_retryable(&self) -> bool {
        self.retryable
    }
}

/// Bound one log field to `MAX_FIELD_OUTPUT_LEN` bytes.
///
/// Paths and details longer than the limit keep their leading characters and
/// end with `...[TRUNCATED]`. Returns `Cow::Borrowed` when the field fits.
fn truncate_with_indicator(field: &str) -> Cow<'_, str> {
    if field.len() <= MAX_FIELD_OUTPUT_LEN {
        return Cow::Borrowed(field);
    }

    // Kept prefix plus indicator must fit the limit.
    let budget = MAX_FIELD_OUTPUT_LEN - TRUNCATION_INDICATOR.len();
    let cut = field
        .char_indices()
        .map(|(at, c)| at + c.len_utf8())
        .take_while(|&end| end <= budget)
        .last()
        .unwrap_or(0);

    let mut bounded = String::with_capacity(cut + TRUNCATION_INDICATOR.len());
    bounded.push_str(&field[..cut]);
    bounded.push_str(TRUNCATION_INDICATOR);
    Cow::Owned(bounded)
}
