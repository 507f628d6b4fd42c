use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;

use http_tools::log_status;
use http_tools::report;
use http_tools::resource;
use http_tools::{dump, Error};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "resource-dump")]
#[command(version = VERSION)]
#[command(about = "Write a bundled resource to stdout behind a Content-Length header")]
struct Cli {
    /// Logical resource path, e.g. 'index.html' or '/hello.txt'
    path: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Same missing-argument contract as query-string: usage on stdout, exit 1.
    let Some(path) = cli.path else {
        let _ = report::print_line(
            "Usage: 'resource-dump <resourcePath>'. For example 'resource-dump /index.html'",
        );
        return ExitCode::from(1);
    };

    match run(&path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report::fail(&err),
    }
}

fn run(path: &str) -> http_tools::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    let written = dump::write_resource(resource::bundled(), path, &mut handle)?;
    if let Err(e) = handle.flush() {
        if e.kind() != io::ErrorKind::BrokenPipe {
            return Err(Error::internal_io(
                e.to_string(),
                Some("flush stdout".to_string()),
            ));
        }
    }

    log_status!("resource-dump", "emitted {} bytes for {}", written, path);
    Ok(())
}
