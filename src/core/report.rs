//! CLI failure reporting and exit code mapping.
//!
//! Both binaries reserve stdout for their payload contracts, so failures are
//! rendered on stderr: one `error[<code>]` line, the error details as compact
//! JSON, and one line per hint.

use std::io::{self, Write};
use std::process::ExitCode;

use crate::error::{Error, ErrorCode, Result};

/// Render a failure on stderr and map it to the process exit code.
pub fn fail(err: &Error) -> ExitCode {
    eprintln!("error[{}]: {}", err.code.as_str(), err.message);
    if !err.details.is_null() {
        eprintln!("  details: {}", err.details);
    }
    for hint in &err.hints {
        eprintln!("  hint: {}", hint.message);
    }

    ExitCode::from(exit_code_to_u8(exit_code_for_error(err.code)))
}

pub fn exit_code_for_error(code: ErrorCode) -> i32 {
    match code {
        ErrorCode::QueryMalformedSegment => 2,

        ErrorCode::ResourceNotFound => 4,

        ErrorCode::InternalIoError => 1,
    }
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}

/// Print one line to stdout, tolerating a closed pipe.
pub fn print_line(line: &str) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = writeln!(handle, "{}", line) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            return Ok(()); // Exit gracefully on SIGPIPE
        }
        return Err(Error::internal_io(
            e.to_string(),
            Some("write stdout".to_string()),
        ));
    }
    Ok(())
}
