use clap::Parser;
use std::process::ExitCode;

use http_tools::log_status;
use http_tools::query::QueryString;
use http_tools::report;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "query-string")]
#[command(version = VERSION)]
#[command(about = "Parse a query string and print the value of its 'status' parameter")]
struct Cli {
    /// Query string to parse, without a leading '?'
    query: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Missing argument reports usage on stdout and exits 1, so the positional
    // stays optional at the clap level and is checked by hand.
    let Some(query) = cli.query else {
        let _ = report::print_line(
            "Usage: 'query-string <queryString>'. \
             For example 'query-string status=302&location=http://example.com'",
        );
        return ExitCode::from(1);
    };

    match run(&query) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report::fail(&err),
    }
}

fn run(query: &str) -> http_tools::Result<()> {
    let parsed = QueryString::parse(query)?;
    log_status!("query-string", "parsed {} parameters", parsed.len());

    // An absent parameter prints the literal `null`.
    report::print_line(parsed.parameter("status").unwrap_or("null"))
}
