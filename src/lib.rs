//! # WASI Error Codes
//!
//! The `wasi:filesystem/types@0.2.0` `error-code` registry, a typed
//! filesystem error that carries one of those codes, and the `error-codes`
//! utility that prints the table.
//!
//! ## Design
//!
//! 1. **The registry is constant data**: 37 entries, fixed at compile time
//! 2. **Lookups are total**: any integer has a name, unknown ones included
//! 3. **Errors carry a code, not a message**: external display is the code only
//! 4. **Runtime context is scrubbed**: owned paths and details are zeroized on drop
//!
//! ## Quick Start
//!
//! ```rust
//! use wasi_error_codes::{name_of, ErrorCode};
//!
//! assert_eq!(name_of(3), "bad-descriptor");
//! assert_eq!(name_of(255), "unknown-error(255)");
//! assert_eq!(ErrorCode::Loop.to_string(), "loop");
//! ```
//!
//! ## Raising Filesystem Errors
//!
//! ```rust
//! use wasi_error_codes::{ErrorCode, FileSystemError, Result};
//! use std::fs::File;
//!
//! fn open(path: String) -> Result<File> {
//!     File::open(&path).map_err(|e| FileSystemError::from_io_path("open_at", path, e))
//! }
//!
//! let err = open(String::from("/definitely/not/here")).unwrap_err();
//! assert_eq!(err.code(), ErrorCode::NoEntry);
//! assert_eq!(err.to_string(), "FileSystem error: no-entry");
//! ```
//!
//! ## Features
//!
//! - `trusted_debug`: Enable `ErrorLog::format_for_trusted_debug` (debug builds only)

#![warn(missing_docs)]
#![warn(clippy::all)]

use smallvec::SmallVec;
use std::borrow::Cow;
use std::error::Error;
use std::fmt;
use std::io;
use std::result;
use zeroize::Zeroize;

pub mod codes;
pub mod convenience;
pub mod logging;
pub mod table;

pub use codes::*;
pub use convenience::*;
pub use logging::*;
pub use table::*;

/// Type alias for Results using our error type.
pub type Result<T> = result::Result<T, FileSystemError>;

// ============================================================================
// Error Context
// ============================================================================

/// Runtime context attached to a `FileSystemError`.
struct ErrorContext {
    operation: Cow<'static, str>,
    details: Cow<'static, str>,
    io_kind: Option<&'static str>,
    path: Option<Cow<'static, str>>,
    metadata: SmallVec<[(&'static str, ContextField); 4]>,
}

impl ErrorContext {
    #[inline]
    fn new(operation: impl Into<Cow<'static, str>>, details: impl Into<Cow<'static, str>>) -> Self {
        Self {
            operation: operation.into(),
            details: details.into(),
            io_kind: None,
            path: None,
            metadata: SmallVec::new(),
        }
    }

    #[inline]
    fn add_metadata(&mut self, key: &'static str, value: impl Into<Cow<'static, str>>) {
        self.metadata.push((key, ContextField::from(value.into())));
    }
}

impl Zeroize for ErrorContext {
    fn zeroize(&mut self) {
        if let Cow::Owned(ref mut s) = self.operation {
            s.zeroize();
        }
        if let Cow::Owned(ref mut s) = self.details {
            s.zeroize();
        }
        if let Some(Cow::Owned(ref mut s)) = self.path {
            s.zeroize();
        }
        for (_, value) in &mut self.metadata {
            value.zeroize();
        }
        self.metadata.clear();
    }
}

impl Drop for ErrorContext {
    fn drop(&mut self) {
        self.zeroize();
    }
}

#[inline]
const fn io_error_kind_label(kind: io::ErrorKind) -> &'static str {
    match kind {
        io::ErrorKind::NotFound => "NotFound",
        io::ErrorKind::PermissionDenied => "PermissionDenied",
        io::ErrorKind::AlreadyExists => "AlreadyExists",
        io::ErrorKind::WouldBlock => "WouldBlock",
        io::ErrorKind::InvalidInput => "InvalidInput",
        io::ErrorKind::InvalidData => "InvalidData",
        io::ErrorKind::Interrupted => "Interrupted",
        io::ErrorKind::Unsupported => "Unsupported",
        io::ErrorKind::OutOfMemory => "OutOfMemory",
        io::ErrorKind::BrokenPipe => "BrokenPipe",
        io::ErrorKind::NotADirectory => "NotADirectory",
        io::ErrorKind::IsADirectory => "IsADirectory",
        io::ErrorKind::DirectoryNotEmpty => "DirectoryNotEmpty",
        io::ErrorKind::ReadOnlyFilesystem => "ReadOnlyFilesystem",
        io::ErrorKind::StorageFull => "StorageFull",
        io::ErrorKind::NotSeekable => "NotSeekable",
        io::ErrorKind::FileTooLarge => "FileTooLarge",
        io::ErrorKind::ResourceBusy => "ResourceBusy",
        io::ErrorKind::ExecutableFileBusy => "ExecutableFileBusy",
        io::ErrorKind::Deadlock => "Deadlock",
        io::ErrorKind::CrossesDevices => "CrossesDevices",
        io::ErrorKind::TooManyLinks => "TooManyLinks",
        io::ErrorKind::InvalidFilename => "InvalidFilename",
        io::ErrorKind::QuotaExceeded => "QuotaExceeded",
        io::ErrorKind::TimedOut => "TimedOut",
        io::ErrorKind::UnexpectedEof => "UnexpectedEof",
        io::ErrorKind::WriteZero => "WriteZero",
        io::ErrorKind::Other => "Other",
        _ => "Unknown",
    }
}

// ============================================================================
// FileSystemError
// ============================================================================

/// A filesystem failure carrying an `error-code` payload.
///
/// # Key Properties
///
/// - External display is `FileSystem error: <code>` and nothing else
/// - Operation, details, path and metadata are reachable only through
///   [`FileSystemError::internal_log`]
/// - Owned context is zeroized on drop
/// - Converts into `io::Error` without losing the payload
#[must_use = "errors should be handled or logged"]
pub struct FileSystemError {
    code: ErrorCode,
    context: ErrorContext,
    source: Option<Box<dyn Error + Send + Sync>>,
}

impl FileSystemError {
    /// Create an error with internal context only.
    #[inline]
    pub fn new(
        code: ErrorCode,
        operation: impl Into<Cow<'static, str>>,
        details: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            code,
            context: ErrorContext::new(operation, details),
            source: None,
        }
    }

    /// Create an error that names the path involved.
    ///
    /// The path is kept apart from the details so log pipelines can treat it
    /// as sensitive.
    #[inline]
    pub fn with_path(
        code: ErrorCode,
        operation: impl Into<Cow<'static, str>>,
        path: impl Into<Cow<'static, str>>,
        details: impl Into<Cow<'static, str>>,
    ) -> Self {
        let mut err = Self::new(code, operation, details);
        err.context.path = Some(path.into());
        err
    }

    /// Wrap a host `io::Error`, deriving the code from its kind.
    #[inline]
    pub fn from_io(operation: impl Into<Cow<'static, str>>, error: io::Error) -> Self {
        let kind = error.kind();
        let mut err = Self::new(ErrorCode::from(kind), operation, "I/O operation failed");
        err.context.io_kind = Some(io_error_kind_label(kind));
        err.source = Some(Box::new(error));
        err
    }

    /// Wrap a host `io::Error` and keep the path it failed on.
    #[inline]
    pub fn from_io_path(
        operation: impl Into<Cow<'static, str>>,
        path: impl Into<Cow<'static, str>>,
        error: io::Error,
    ) -> Self {
        let mut err = Self::from_io(operation, error);
        err.context.path = Some(path.into());
        err
    }

    /// Add tracking metadata (descriptor numbers, stream ids, ...).
    #[inline]
    pub fn with_metadata(mut self, key: &'static str, value: impl Into<Cow<'static, str>>) -> Self {
        self.context.add_metadata(key, value);
        self
    }

    /// The error code payload.
    #[inline]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Whether the payload is a transient condition.
    #[inline]
    pub const fn is_retryable(&self) -> bool {
        self.code.is_retryable()
    }

    /// Structured log entry borrowing from this error.
    ///
    /// The entry cannot outlive the error, so context is consumed by the
    /// logger and then scrubbed with the error.
    #[inline]
    pub fn internal_log(&self) -> ErrorLog<'_> {
        ErrorLog {
            code: self.code,
            operation: self.context.operation.as_ref(),
            details: self.context.details.as_ref(),
            io_kind: self.context.io_kind,
            path: self.context.path.as_deref(),
            metadata: &self.context.metadata,
            retryable: self.code.is_retryable(),
        }
    }

    /// Callback-style access to the log entry.
    ///
    /// ```rust
    /// # use wasi_error_codes::{ErrorCode, FileSystemError};
    /// let err = FileSystemError::new(ErrorCode::ReadOnly, "write", "preopen is read-only");
    /// let op = err.with_internal_log(|log| log.operation().len());
    /// assert_eq!(op, 5);
    /// ```
    #[inline]
    pub fn with_internal_log<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ErrorLog<'_>) -> R,
    {
        let log = self.internal_log();
        f(&log)
    }
}

impl Drop for FileSystemError {
    fn drop(&mut self) {
        self.source = None;
        self.context.zeroize();
    }
}

impl fmt::Debug for FileSystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileSystemError")
            .field("code", &self.code)
            .field("context", &"<REDACTED>")
            .field("source", &self.source.as_ref().map(|_| "<PRESENT>"))
            .finish()
    }
}

impl fmt::Display for FileSystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FileSystem error: {}", self.code)
    }
}

impl Error for FileSystemError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

impl From<ErrorCode> for FileSystemError {
    fn from(code: ErrorCode) -> Self {
        Self::new(code, "unspecified", code.description())
    }
}

impl From<FileSystemError> for io::Error {
    fn from(err: FileSystemError) -> Self {
        io::Error::new(err.code().io_kind(), err)
    }
}

/// Recover the error code carried by a stream or filesystem error.
///
/// Returns the payload of a `FileSystemError`, or of an `io::Error` wrapping
/// one. Any other error yields `None`.
pub fn filesystem_error_code(err: &(dyn Error + 'static)) -> Option<ErrorCode> {
    if let Some(fs) = err.downcast_ref::<FileSystemError>() {
        return Some(fs.code());
    }

    err.downcast_ref::<io::Error>()
        .and_then(|io_err| io_err.get_ref())
        .and_then(|inner| inner.downcast_ref::<FileSystemError>())
        .map(FileSystemError::code)
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn display_is_code_only() {
        let err = FileSystemError::with_path(
            ErrorCode::NotDirectory,
            "get_child_entry",
            String::from("/etc/shadow/x"),
            "parent is a file",
        );

        let displayed = err.to_string();
        assert_eq!(displayed, "FileSystem error: not-directory");
        assert!(!displayed.contains("/etc"));
        assert!(!displayed.contains("get_child_entry"));
        assert!(!displayed.contains("parent"));
    }

    #[test]
    fn debug_redacts_context() {
        let err = FileSystemError::with_path(ErrorCode::Access, "open", String::from("/root"), "denied");
        let debug = format!("{err:?}");

        assert!(debug.contains("Access"));
        assert!(debug.contains("<REDACTED>"));
        assert!(!debug.contains("/root"));
    }

    #[test]
    fn from_io_derives_code_and_keeps_source() {
        let err = FileSystemError::from_io("sync", io::Error::from(io::ErrorKind::PermissionDenied));

        assert_eq!(err.code(), ErrorCode::Access);
        assert!(err.source().is_some());
        assert_eq!(err.internal_log().io_kind(), Some("PermissionDenied"));
    }

    #[test]
    fn internal_log_contains_details() {
        let err = FileSystemError::new(ErrorCode::Exist, "create_directory_at", "already there");

        let log = err.internal_log();
        assert_eq!(log.operation(), "create_directory_at");
        assert_eq!(log.details(), "already there");
        assert_eq!(log.path(), None);
        assert!(!log.is_retryable());
    }

    #[test]
    fn retryable_follows_code() {
        assert!(FileSystemError::from(ErrorCode::Interrupted).is_retryable());
        assert!(!FileSystemError::from(ErrorCode::Overflow).is_retryable());
    }

    #[test]
    fn metadata_is_logged_in_order() {
        let err = FileSystemError::new(ErrorCode::BadDescriptor, "stat", "closed")
            .with_metadata("fd", "3")
            .with_metadata("stream", String::from("input-7"));

        let log = err.internal_log();
        let keys: Vec<_> = log.metadata().iter().map(|(k, v)| (*k, v.as_str())).collect();
        assert_eq!(keys, vec![("fd", "3"), ("stream", "input-7")]);
    }

    #[test]
    fn io_error_conversion_keeps_payload() {
        let io_err: io::Error = FileSystemError::from(ErrorCode::NotEmpty).into();

        assert_eq!(io_err.kind(), io::ErrorKind::DirectoryNotEmpty);
        assert_eq!(filesystem_error_code(&io_err), Some(ErrorCode::NotEmpty));
    }

    #[test]
    fn filesystem_error_code_extraction() {
        let fs = FileSystemError::from(ErrorCode::Pipe);
        assert_eq!(filesystem_error_code(&fs), Some(ErrorCode::Pipe));

        let plain = io::Error::other("stream closed");
        assert_eq!(filesystem_error_code(&plain), None);

        let unrelated = UnknownErrorCode(99);
        assert_eq!(filesystem_error_code(&unrelated), None);
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<FileSystemError>();
        assert_send_sync::<ErrorCode>();
    }
}
