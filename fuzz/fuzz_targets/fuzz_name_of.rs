#![no_main]

use libfuzzer_sys::fuzz_target;
use wasi_error_codes::{CodeName, ErrorCode, name_of};

fuzz_target!(|value: i64| {
    let name = name_of(value);
    assert_eq!(name, CodeName(value).to_string());

    match ErrorCode::from_discriminant(value) {
        Some(code) => assert_eq!(name, code.as_str()),
        None => assert_eq!(name, format!("unknown-error({value})")),
    }
});
