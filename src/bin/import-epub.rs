//! CLI binary: print the plain text of an EPUB file.
//!
//! A thin shim over [`docimport::extract_epub`]. Exit code 0 on success,
//! 1 on any failure.

use clap::Parser;
use docimport::{cli, extract_epub};
use std::path::PathBuf;
use std::process::ExitCode;

/// Extract plain text from an EPUB file.
#[derive(Parser, Debug)]
#[command(
    name = "import-epub",
    version,
    about = "Extract plain text from an EPUB file",
    arg_required_else_help = true
)]
struct Cli {
    /// Path to the EPUB file.
    #[arg(long, value_name = "PATH")]
    file: PathBuf,
}

fn main() -> ExitCode {
    let args = Cli::parse();
    cli::init_logging();
    cli::finish(extract_epub(&args.file))
}
