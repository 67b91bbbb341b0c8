#![no_main]

use libfuzzer_sys::fuzz_target;
use wasi_error_codes::ErrorCode;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        match s.parse::<ErrorCode>() {
            Ok(code) => assert_eq!(code.as_str(), s),
            Err(err) => {
                let _ = err.to_string();
            }
        }
    }
});
