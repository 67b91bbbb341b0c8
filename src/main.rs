//! `error-codes`: print the wasi filesystem error-code table.
//!
//! Takes no arguments and always exits with status 0.

use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(err) = wasi_error_codes::write_table(&mut out).and_then(|()| out.flush()) {
        let code = wasi_error_codes::ErrorCode::from(err.kind());
        eprintln!("error-codes: failed to write table ({code})");
    }

    ExitCode::SUCCESS
}
