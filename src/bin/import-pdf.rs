//! CLI binary: print the plain text of a PDF file.
//!
//! A thin shim over [`docimport::extract_pdf`]. Exit code 0 on success,
//! 2 when no PDF library could be loaded, 1 on any other failure.

use clap::Parser;
use docimport::{cli, extract_pdf};
use std::path::PathBuf;
use std::process::ExitCode;

const AFTER_HELP: &str = r#"PDF LIBRARIES (first available wins):
  pdfium   libpdfium from the working directory or the system library path
  lopdf    built-in pure-Rust reader (cargo feature `lopdf`, on by default)

EXIT CODES:
  0  text printed to stdout
  1  file missing, unreadable, or without extractable text
  2  no PDF library available
"#;

/// Extract plain text from a PDF file.
#[derive(Parser, Debug)]
#[command(
    name = "import-pdf",
    version,
    about = "Extract plain text from a PDF file",
    arg_required_else_help = true,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Path to the PDF file.
    #[arg(long, value_name = "PATH")]
    file: PathBuf,
}

fn main() -> ExitCode {
    let args = Cli::parse();
    cli::init_logging();
    cli::finish(extract_pdf(&args.file))
}
