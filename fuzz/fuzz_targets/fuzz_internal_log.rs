#![no_main]

use libfuzzer_sys::fuzz_target;
use wasi_error_codes::{ErrorCode, FileSystemError};

fuzz_target!(|input: (u8, String, String, String)| {
    let (raw, operation, path, details) = input;
    let code = ErrorCode::from_discriminant(i64::from(raw % 37)).unwrap_or(ErrorCode::Io);

    let err = FileSystemError::with_path(code, operation, path, details);
    let mut buf = String::new();
    let _ = err.internal_log().write_to(&mut buf);
    assert_eq!(err.to_string(), format!("FileSystem error: {code}"));
});
