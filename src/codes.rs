//! Error code registry for `wasi:filesystem/types@0.2.0#error-code`.
//!
//! Error codes returned by filesystem functions, similar to `errno` in POSIX.
//! Not every code is produced by the filesystem API itself; some belong to
//! higher-level library layers and others exist only for alignment with POSIX.
//!
//! # Table Structure
//!
//! The catalog is a closed, ordered list of 37 entries. The position of an
//! entry is its discriminant, and the discriminant is the value that crosses
//! the component boundary:
//!
//! - `0` → `access`
//! - `1` → `would-block`
//! - ...
//! - `36` → `cross-device`
//!
//! # Governance
//!
//! The variant list, the canonical names, the POSIX analogues and the
//! descriptions are all generated from a single `error_codes!` invocation
//! below, so the parallel tables cannot drift apart. A const assertion checks
//! that `ErrorCode::ALL[i]` has discriminant `i` for every entry; a reordering
//! mistake fails the build.
//!
//! # Zero-Allocation Guarantee
//!
//! - Known codes resolve to `&'static str` with no allocation
//! - `CodeName` renders unknown discriminants straight into the formatter
//! - Only `name_of` on an out-of-range value allocates (the returned `String`)
//!
//! # Example Usage
//!
//! ```rust
//! use wasi_error_codes::{name_of, ErrorCode};
//!
//! assert_eq!(name_of(20), "no-entry");
//! assert_eq!(name_of(37), "unknown-error(37)");
//!
//! let code: ErrorCode = "read-only".parse().unwrap();
//! assert_eq!(code.discriminant(), 33);
//! assert_eq!(code.posix_name(), "EROFS");
//! ```

use std::borrow::Cow;
use std::fmt;
use std::io;
use std::str::FromStr;

/// Number of entries in the registry.
pub const ERROR_CODE_COUNT: usize = 37;

// ============================================================================
// Table Generation
// ============================================================================

/// Expands one ordered list into the enum and every lookup table.
///
/// Each entry is `Variant = discriminant => ("name", "POSIX", "description")`.
macro_rules! error_codes {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident = $value:literal => ($name:literal, $posix:literal, $desc:literal)
        ),+ $(,)?
    ) => {
        /// A `wasi:filesystem` error code.
        ///
        /// The discriminant of each variant is its position in the registry
        /// and the value carried across the component boundary.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u8)]
        pub enum ErrorCode {
            $(
                $(#[$meta])*
                $variant = $value,
            )+
        }

        impl ErrorCode {
            /// Every code, in ascending discriminant order.
            pub const ALL: [ErrorCode; ERROR_CODE_COUNT] = [$(ErrorCode::$variant,)+];

            /// Canonical lowercase, hyphenated name.
            #[inline]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(ErrorCode::$variant => $name,)+
                }
            }

            /// Closest POSIX `errno` constant.
            #[inline]
            pub const fn posix_name(self) -> &'static str {
                match self {
                    $(ErrorCode::$variant => $posix,)+
                }
            }

            /// Short human-readable description.
            #[inline]
            pub const fn description(self) -> &'static str {
                match self {
                    $(ErrorCode::$variant => $desc,)+
                }
            }
        }

        /// Canonical names indexed by discriminant.
        pub const ERROR_CODE_NAMES: [&str; ERROR_CODE_COUNT] = [$($name,)+];
    };
}

error_codes! {
    /// Permission denied, similar to `EACCES` in POSIX.
    Access = 0 => ("access", "EACCES", "Permission denied"),
    /// Resource unavailable, or operation would block, similar to `EAGAIN`
    /// and `EWOULDBLOCK` in POSIX.
    WouldBlock = 1 => ("would-block", "EAGAIN", "Resource unavailable, or operation would block"),
    /// Connection already in progress, similar to `EALREADY` in POSIX.
    Already = 2 => ("already", "EALREADY", "Connection already in progress"),
    /// Bad descriptor, similar to `EBADF` in POSIX.
    BadDescriptor = 3 => ("bad-descriptor", "EBADF", "Bad descriptor"),
    /// Device or resource busy, similar to `EBUSY` in POSIX.
    Busy = 4 => ("busy", "EBUSY", "Device or resource busy"),
    /// Resource deadlock would occur, similar to `EDEADLK` in POSIX.
    Deadlock = 5 => ("deadlock", "EDEADLK", "Resource deadlock would occur"),
    /// Storage quota exceeded, similar to `EDQUOT` in POSIX.
    Quota = 6 => ("quota", "EDQUOT", "Storage quota exceeded"),
    /// File exists, similar to `EEXIST` in POSIX.
    Exist = 7 => ("exist", "EEXIST", "File exists"),
    /// File too large, similar to `EFBIG` in POSIX.
    FileTooLarge = 8 => ("file-too-large", "EFBIG", "File too large"),
    /// Illegal byte sequence, similar to `EILSEQ` in POSIX.
    IllegalByteSequence = 9 => ("illegal-byte-sequence", "EILSEQ", "Illegal byte sequence"),
    /// Operation in progress, similar to `EINPROGRESS` in POSIX.
    InProgress = 10 => ("in-progress", "EINPROGRESS", "Operation in progress"),
    /// Interrupted function, similar to `EINTR` in POSIX.
    Interrupted = 11 => ("interrupted", "EINTR", "Interrupted function"),
    /// Invalid argument, similar to `EINVAL` in POSIX.
    Invalid = 12 => ("invalid", "EINVAL", "Invalid argument"),
    /// I/O error, similar to `EIO` in POSIX.
    Io = 13 => ("io", "EIO", "I/O error"),
    /// Is a directory, similar to `EISDIR` in POSIX.
    IsDirectory = 14 => ("is-directory", "EISDIR", "Is a directory"),
    /// Too many levels of symbolic links, similar to `ELOOP` in POSIX.
    Loop = 15 => ("loop", "ELOOP", "Too many levels of symbolic links"),
    /// Too many links, similar to `EMLINK` in POSIX.
    TooManyLinks = 16 => ("too-many-links", "EMLINK", "Too many links"),
    /// Message too large, similar to `EMSGSIZE` in POSIX.
    MessageSize = 17 => ("message-size", "EMSGSIZE", "Message too large"),
    /// Filename too long, similar to `ENAMETOOLONG` in POSIX.
    NameTooLong = 18 => ("name-too-long", "ENAMETOOLONG", "Filename too long"),
    /// No such device, similar to `ENODEV` in POSIX.
    NoDevice = 19 => ("no-device", "ENODEV", "No such device"),
    /// No such file or directory, similar to `ENOENT` in POSIX.
    NoEntry = 20 => ("no-entry", "ENOENT", "No such file or directory"),
    /// No locks available, similar to `ENOLCK` in POSIX.
    NoLock = 21 => ("no-lock", "ENOLCK", "No locks available"),
    /// Not enough space, similar to `ENOMEM` in POSIX.
    InsufficientMemory = 22 => ("insufficient-memory", "ENOMEM", "Not enough space"),
    /// No space left on device, similar to `ENOSPC` in POSIX.
    InsufficientSpace = 23 => ("insufficient-space", "ENOSPC", "No space left on device"),
    /// Not a directory or a symbolic link to a directory, similar to
    /// `ENOTDIR` in POSIX.
    NotDirectory = 24 => ("not-directory", "ENOTDIR", "Not a directory or a symbolic link to a directory"),
    /// Directory not empty, similar to `ENOTEMPTY` in POSIX.
    NotEmpty = 25 => ("not-empty", "ENOTEMPTY", "Directory not empty"),
    /// State not recoverable, similar to `ENOTRECOVERABLE` in POSIX.
    NotRecoverable = 26 => ("not-recoverable", "ENOTRECOVERABLE", "State not recoverable"),
    /// Not supported, similar to `ENOTSUP` and `ENOSYS` in POSIX.
    Unsupported = 27 => ("unsupported", "ENOTSUP", "Not supported"),
    /// Inappropriate I/O control operation, similar to `ENOTTY` in POSIX.
    NoTty = 28 => ("no-tty", "ENOTTY", "Inappropriate I/O control operation"),
    /// No such device or address, similar to `ENXIO` in POSIX.
    NoSuchDevice = 29 => ("no-such-device", "ENXIO", "No such device or address"),
    /// Value too large to be stored in data type, similar to `EOVERFLOW` in
    /// POSIX.
    Overflow = 30 => ("overflow", "EOVERFLOW", "Value too large to be stored in data type"),
    /// Operation not permitted, similar to `EPERM` in POSIX.
    NotPermitted = 31 => ("not-permitted", "EPERM", "Operation not permitted"),
    /// Broken pipe, similar to `EPIPE` in POSIX.
    Pipe = 32 => ("pipe", "EPIPE", "Broken pipe"),
    /// Read-only file system, similar to `EROFS` in POSIX.
    ReadOnly = 33 => ("read-only", "EROFS", "Read-only file system"),
    /// Invalid seek, similar to `ESPIPE` in POSIX.
    InvalidSeek = 34 => ("invalid-seek", "ESPIPE", "Invalid seek"),
    /// Text file busy, similar to `ETXTBSY` in POSIX.
    TextFileBusy = 35 => ("text-file-busy", "ETXTBSY", "Text file busy"),
    /// Cross-device link, similar to `EXDEV` in POSIX.
    CrossDevice = 36 => ("cross-device", "EXDEV", "Cross-device link"),
}

// Position in ALL must equal the discriminant.
const _: () = {
    let mut i = 0;
    while i < ERROR_CODE_COUNT {
        assert!(
            ErrorCode::ALL[i] as usize == i,
            "ErrorCode::ALL is out of discriminant order"
        );
        i += 1;
    }
};

// ============================================================================
// Lookup
// ============================================================================

impl ErrorCode {
    /// Numeric discriminant (table index).
    #[inline]
    pub const fn discriminant(self) -> u8 {
        self as u8
    }

    /// Look up a code by discriminant. Returns `None` outside `[0, 36]`.
    #[inline]
    pub const fn from_discriminant(value: i64) -> Option<Self> {
        if value >= 0 && value < ERROR_CODE_COUNT as i64 {
            Some(Self::ALL[value as usize])
        } else {
            None
        }
    }

    /// Whether retrying the same operation later can reasonably succeed.
    #[inline]
    pub const fn is_retryable(self) -> bool {
        matches!(
            self,
            Self::WouldBlock | Self::Interrupted | Self::InProgress | Self::Busy | Self::Already
        )
    }

    /// The `std::io::ErrorKind` used when this code leaves the crate as an
    /// `io::Error`.
    pub const fn io_kind(self) -> io::ErrorKind {
        use io::ErrorKind as K;
        match self {
            Self::Access | Self::NotPermitted => K::PermissionDenied,
            Self::WouldBlock => K::WouldBlock,
            Self::Busy => K::ResourceBusy,
            Self::Deadlock => K::Deadlock,
            Self::Quota => K::QuotaExceeded,
            Self::Exist => K::AlreadyExists,
            Self::FileTooLarge => K::FileTooLarge,
            Self::IllegalByteSequence => K::InvalidData,
            Self::Interrupted => K::Interrupted,
            Self::Invalid | Self::BadDescriptor => K::InvalidInput,
            Self::IsDirectory => K::IsADirectory,
            Self::TooManyLinks => K::TooManyLinks,
            Self::NameTooLong => K::InvalidFilename,
            Self::NoEntry => K::NotFound,
            Self::InsufficientMemory => K::OutOfMemory,
            Self::InsufficientSpace => K::StorageFull,
            Self::NotDirectory => K::NotADirectory,
            Self::NotEmpty => K::DirectoryNotEmpty,
            Self::Unsupported => K::Unsupported,
            Self::Pipe => K::BrokenPipe,
            Self::ReadOnly => K::ReadOnlyFilesystem,
            Self::InvalidSeek => K::NotSeekable,
            Self::TextFileBusy => K::ExecutableFileBusy,
            Self::CrossDevice => K::CrossesDevices,
            _ => K::Other,
        }
    }
}

impl fmt::Display for ErrorCode {
    /// Writes the canonical name directly to the formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ErrorCode> for u8 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.discriminant()
    }
}

impl TryFrom<i64> for ErrorCode {
    type Error = UnknownErrorCode;

    #[inline]
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_discriminant(value).ok_or(UnknownErrorCode(value))
    }
}

impl TryFrom<u8> for ErrorCode {
    type Error = UnknownErrorCode;

    #[inline]
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(value))
    }
}

impl From<io::ErrorKind> for ErrorCode {
    /// Classify a host I/O failure. Kinds without a closer match become `io`.
    fn from(kind: io::ErrorKind) -> Self {
        use io::ErrorKind as K;
        match kind {
            K::NotFound => Self::NoEntry,
            K::PermissionDenied => Self::Access,
            K::AlreadyExists => Self::Exist,
            K::WouldBlock => Self::WouldBlock,
            K::InvalidInput => Self::Invalid,
            K::InvalidData => Self::IllegalByteSequence,
            K::Interrupted => Self::Interrupted,
            K::Unsupported => Self::Unsupported,
            K::OutOfMemory => Self::InsufficientMemory,
            K::BrokenPipe => Self::Pipe,
            K::NotADirectory => Self::NotDirectory,
            K::IsADirectory => Self::IsDirectory,
            K::DirectoryNotEmpty => Self::NotEmpty,
            K::ReadOnlyFilesystem => Self::ReadOnly,
            K::StorageFull => Self::InsufficientSpace,
            K::NotSeekable => Self::InvalidSeek,
            K::FileTooLarge => Self::FileTooLarge,
            K::ResourceBusy => Self::Busy,
            K::ExecutableFileBusy => Self::TextFileBusy,
            K::Deadlock => Self::Deadlock,
            K::CrossesDevices => Self::CrossDevice,
            K::TooManyLinks => Self::TooManyLinks,
            K::InvalidFilename => Self::NameTooLong,
            K::QuotaExceeded => Self::Quota,
            _ => Self::Io,
        }
    }
}

impl FromStr for ErrorCode {
    type Err = ParseErrorCodeError;

    /// Exact match against the canonical names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| ParseErrorCodeError {
                input: s.to_owned(),
            })
    }
}

// ============================================================================
// Name Rendering
// ============================================================================

/// Display adapter for a raw discriminant.
///
/// Renders the canonical name for `[0, 36]` and `unknown-error(<n>)` for
/// anything else, writing straight into the formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodeName(pub i64);

impl fmt::Display for CodeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match ErrorCode::from_discriminant(self.0) {
            Some(code) => f.write_str(code.as_str()),
            None => write!(f, "unknown-error({})", self.0),
        }
    }
}

/// Canonical name of a discriminant.
///
/// Total over `i64`: values in `[0, 36]` borrow the static name, everything
/// else is formatted as `unknown-error(<n>)`. Out-of-range values are not
/// treated as misuse.
///
/// ```rust
/// # use wasi_error_codes::name_of;
/// assert_eq!(name_of(0), "access");
/// assert_eq!(name_of(36), "cross-device");
/// assert_eq!(name_of(-1), "unknown-error(-1)");
/// ```
pub fn name_of(code: i64) -> Cow<'static, str> {
    match ErrorCode::from_discriminant(code) {
        Some(known) => Cow::Borrowed(known.as_str()),
        None => Cow::Owned(CodeName(code).to_string()),
    }
}

// ============================================================================
// Conversion Errors
// ============================================================================

/// A discriminant outside the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnknownErrorCode(pub i64);

impl fmt::Display for UnknownErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown-error({})", self.0)
    }
}

impl std::error::Error for UnknownErrorCode {}

/// A string that is not a canonical error code name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorCodeError {
    input: String,
}

impl ParseErrorCodeError {
    /// The rejected input, unmodified.
    #[inline]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseErrorCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' is not a wasi filesystem error code",
            crate::sanitized!(self.input)
        )
    }
}

impl std::error::Error for ParseErrorCodeError {}

// ============================================================================
// Tests
// ============================================================================
