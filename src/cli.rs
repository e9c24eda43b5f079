//! Shared plumbing for the `import-epub` and `import-pdf` binaries.
//!
//! Both tools have the same shape: one `--file` argument, the extracted
//! text on stdout, one error line on stderr, and an exit code taken from
//! [`ExtractError::exit_code`]. Only the extractor differs, so the binaries
//! parse their arguments and hand the result to [`finish`].

use crate::error::{ExtractError, EXIT_FAILURE};
use anyhow::{Context, Result};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is unset. Keeps stderr down to the
/// error line the tool prints itself.
pub const DEFAULT_LOG_FILTER: &str = "error";

/// Install the stderr `tracing` subscriber.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(io::stderr)
        .init();
}

/// Print the outcome of an extraction to the process streams and return
/// the exit code.
pub fn finish(result: Result<String, ExtractError>) -> ExitCode {
    let stdout = io::stdout();
    let stderr = io::stderr();
    let code = report(result, &mut stdout.lock(), &mut stderr.lock());
    ExitCode::from(code)
}

/// Write `result` to `out` (text plus trailing newline) or `err` (one
/// line), returning the exit code.
pub fn report(
    result: Result<String, ExtractError>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> u8 {
    let outcome = result
        .map_err(anyhow::Error::from)
        .and_then(|text| write_text(out, &text));

    match outcome {
        Ok(()) => 0,
        Err(e) => {
            let (message, code) = match e.downcast_ref::<ExtractError>() {
                Some(extract) => (extract.to_string(), extract.exit_code()),
                None => (format!("{e:#}"), EXIT_FAILURE),
            };
            // stderr may itself be gone; the exit code still reports failure.
            let _ = writeln!(err, "{}", single_line(&message));
            code
        }
    }
}

fn write_text(out: &mut impl Write, text: &str) -> Result<()> {
    out.write_all(text.as_bytes())
        .and_then(|_| out.write_all(b"\n"))
        .and_then(|_| out.flush())
        .context("Failed to write to stdout")
}

fn single_line(message: &str) -> String {
    message.lines().map(str::trim).filter(|l| !l.is_empty()).collect::<Vec<_>>().join(" ")
}
