use std::fs;
use std::io;
use wasi_error_codes::{ErrorCode, FileSystemError, Result, filesystem_error_code};

fn read_config(path: &str) -> Result<String> {
    fs::read_to_string(path).map_err(|e| FileSystemError::from_io_path("read_config", path.to_owned(), e))
}

fn main() {
    println!("--- Host I/O classification ---\n");

    match read_config("/nonexistent/wasi/config.toml") {
        Ok(_) => println!("unexpectedly found the file"),
        Err(err) => {
            // What a guest sees: only the code.
            println!("1. [GUEST] {}", err);

            // What the host logs.
            let mut line = String::new();
            err.internal_log().write_to(&mut line).unwrap();
            println!("2. [HOST]  {}", line);

            // The payload survives a trip through io::Error.
            let as_io: io::Error = err.into();
            println!("3. [IO]    kind={:?} payload={:?}", as_io.kind(), filesystem_error_code(&as_io));
        }
    }

    println!("\n--- Kind mapping ---\n");
    for kind in [
        io::ErrorKind::NotFound,
        io::ErrorKind::PermissionDenied,
        io::ErrorKind::AlreadyExists,
        io::ErrorKind::WouldBlock,
        io::ErrorKind::TimedOut,
    ] {
        let code = ErrorCode::from(kind);
        let kind = format!("{kind:?}");
        println!("{:>18} -> {:2}: {} ({})", kind, code.discriminant(), code, code.posix_name());
    }
}
