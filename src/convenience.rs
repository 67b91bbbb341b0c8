//! Convenience macros for creating filesystem errors with format strings.
//!
//! # Rules
//!
//! 1. **Operation names MUST be string literals**
//! 2. **Format strings MUST be string literals**
//! 3. **Format arguments must be wrapped in `sanitized!()`** so their length
//!    is bounded and control characters cannot reach a log line
//!
//! # Usage
//!
//! ```rust
//! # use wasi_error_codes::{fs_err, sanitized, ErrorCode};
//! let segment = "..";
//! let err = fs_err!(
//!     ErrorCode::NoEntry,
//!     "get_child_entry",
//!     "parent traversal via '{}'",
//!     sanitized!(segment)
//! );
//! assert_eq!(err.code(), ErrorCode::NoEntry);
//! ```
//!
//! ```rust,compile_fail
//! # use wasi_error_codes::{fs_err, ErrorCode};
//! let op = String::from("open");
//! // Operation must be a literal.
//! let err = fs_err!(ErrorCode::Invalid, op, "failed");
//! ```
//!
//! ```rust,compile_fail
//! # use wasi_error_codes::{fs_err, ErrorCode};
//! let raw = "oops";
//! // Args must be wrapped in sanitized!().
//! let err = fs_err!(ErrorCode::Invalid, "open", "{}", raw);
//! ```

// ============================================================================
// Sanitization Utilities
// ============================================================================

/// Maximum length in bytes for sanitized strings.
pub const MAX_SANITIZED_LEN: usize = 256;

/// Sanitize untrusted input for inclusion in error details.
///
/// # Behavior
/// - Truncates to `MAX_SANITIZED_LEN` bytes on a UTF-8 boundary, appending
///   `...[TRUNCATED]`.
/// - Replaces control characters with `?`; an ANSI CSI escape sequence
///   (`ESC [` through its final byte) collapses to a single `?`, and an ESC
///   not followed by `[` becomes `?` on its own.
/// - Converts non-string values with `to_string()` first.
/// - Input with no printable characters becomes `[INVALID_INPUT]`.
///
/// # Example
///
/// ```rust
/// # use wasi_error_codes::sanitized;
/// let long = "A".repeat(300);
/// let san = sanitized!(long);
/// assert!(san.len() <= 256);
/// assert!(san.ends_with("[TRUNCATED]"));
/// ```
#[macro_export]
macro_rules! sanitized {
    ($expr:expr) => {{
        let original = $expr.to_string();
        let max_len = $crate::convenience::MAX_SANITIZED_LEN;

        let mut s = String::with_capacity(max_len.min(original.len()));
        let mut len = 0;
        let mut truncated = false;
        let mut saw_non_control = false;
        let mut chars = original.chars().peekable();

        while let Some(c) = chars.next() {
            let replacement = if c == '\u{1b}' {
                // CSI sequences run through their final byte; a bare ESC is
                // replaced on its own.
                if chars.peek() == Some(&'[') {
                    chars.next();
                    while let Some(next) = chars.next() {
                        if ('\x40'..='\x7e').contains(&next) {
                            break;
                        }
                    }
                }
                '?'
            } else if c.is_control() {
                '?'
            } else {
                saw_non_control = true;
                c
            };

            let char_len = replacement.len_utf8();
            if len + char_len > max_len {
                truncated = true;
                break;
            }

            s.push(replacement);
            len += char_len;
        }

        if !saw_non_control {
            s = String::from("[INVALID_INPUT]");
        } else if truncated {
            // "...[TRUNCATED]" is 14 bytes.
            let mut new_len = max_len.saturating_sub(14);
            while new_len > 0 && !s.is_char_boundary(new_len) {
                new_len -= 1;
            }
            s.truncate(new_len);
            if s.is_empty() {
                s = String::from("[INVALID_INPUT]");
            } else {
                s.push_str("...[TRUNCATED]");
            }
        }

        s
    }};
}

// ============================================================================
// Error Creation Macros
// ============================================================================

/// Create a `FileSystemError` with compile-time literal enforcement.
///
/// # Arguments
/// - `$code`: `ErrorCode` (expression)
/// - `$op`: Operation name (string literal)
/// - `$details`: Details (string literal or format literal)
/// - `$args`: Optional arguments, each wrapped in `sanitized!()`
///
/// # Example
///
/// ```rust
/// # use wasi_error_codes::{fs_err, sanitized, ErrorCode};
/// let offset = 4096_u64;
/// let err = fs_err!(ErrorCode::InvalidSeek, "seek", "offset {} past end", sanitized!(offset));
/// err.with_internal_log(|log| assert_eq!(log.details(), "offset 4096 past end"));
/// ```
#[macro_export]
macro_rules! fs_err {
    ($code:expr, $op:literal, $details:literal $(,)?) => {
        $crate::FileSystemError::new($code, $op, $details)
    };
    ($code:expr, $op:literal, $fmt:literal $(, sanitized!($arg:expr))+ $(,)?) => {
        $crate::FileSystemError::new($code, $op, format!($fmt $(, $crate::sanitized!($arg))+))
    };
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorCode;

    #[test]
    fn fs_err_with_literal_details() {
        let err = fs_err!(ErrorCode::Unsupported, "unlink_file_at", "not implemented");

        assert_eq!(err.code(), ErrorCode::Unsupported);
        let log = err.internal_log();
        assert_eq!(log.operation(), "unlink_file_at");
        assert_eq!(log.details(), "not implemented");
    }

    #[test]
    fn fs_err_with_sanitized_args() {
        let name = "evil\u{1b}[31mname";
        let err = fs_err!(
            ErrorCode::NoEntry,
            "open_at",
            "missing '{}' in {}",
            sanitized!(name),
            sanitized!(3),
        );

        err.with_internal_log(|log| {
            assert_eq!(log.details(), "missing 'evil?name' in 3");
        });
    }

    #[test]
    fn sanitized_macro_truncates_long_strings() {
        let sanitized = sanitized!("A".repeat(1000));

        assert!(sanitized.len() <= MAX_SANITIZED_LEN);
        assert!(sanitized.ends_with("...[TRUNCATED]"));
    }

    #[test]
    fn sanitized_macro_preserves_short_strings() {
        assert_eq!(sanitized!("short"), "short");
    }

    #[test]
    fn sanitized_macro_respects_utf8_boundaries() {
        let sanitized = sanitized!("🔥".repeat(100));

        assert!(std::str::from_utf8(sanitized.as_bytes()).is_ok());
        assert!(sanitized.len() <= MAX_SANITIZED_LEN);
    }

    #[test]
    fn sanitized_macro_replaces_control_chars() {
        assert_eq!(sanitized!("hello\nworld\t\x07"), "hello?world??");
    }

    #[test]
    fn sanitized_macro_handles_all_control_input() {
        assert_eq!(sanitized!("\x07".repeat(300)), "[INVALID_INPUT]");
        assert_eq!(sanitized!(""), "[INVALID_INPUT]");
    }

    #[test]
    fn sanitized_macro_works_with_numbers() {
        assert_eq!(sanitized!(42), "42");
    }

    #[test]
    fn sanitized_with_exact_limit_utf8() {
        // Two bytes each, 256 bytes total.
        let sanitized = sanitized!("Ñ".repeat(128));
        assert_eq!(sanitized.len(), 256);
    }

    #[test]
    fn sanitized_collapses_non_sgr_escapes() {
        assert_eq!(sanitized!("abc\x1b[2Jdef"), "abc?def");
        assert_eq!(sanitized!("\x1b[Kvisible-name"), "?visible-name");
        assert_eq!(sanitized!("cursor\x1b[12;40Hmoved"), "cursor?moved");
    }

    #[test]
    fn sanitized_keeps_text_after_bare_escape() {
        assert_eq!(sanitized!("a\x1bb"), "a?b");
        assert_eq!(sanitized!("\x1b"), "[INVALID_INPUT]");
        assert_eq!(sanitized!("tail\x1b["), "tail?");
    }

    #[test]
    fn sanitized_with_mixed_controls() {
        assert_eq!(
            sanitized!("normal\x1b[0m escape \r\n sequence"),
            "normal? escape ?? sequence"
        );
    }
}
