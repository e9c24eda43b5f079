//! # docimport
//!
//! Extract plain text from EPUB and PDF documents for downstream ingestion.
//!
//! Each extractor is a plain blocking function from a path to the document's
//! text. Per-unit texts (archive entries for EPUB, pages for PDF) are trimmed
//! and joined with a blank line. A document that yields no text is an error,
//! never an empty success.
//!
//! ```text
//! EPUB ── zip ──▶ *.xhtml|*.html|*.htm ── strip markup ──┐
//!                                                          ├──▶ join("\n\n")
//! PDF ── first bound provider ──▶ pages ── page text ────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use docimport::{extract_epub, extract_pdf};
//!
//! fn main() -> Result<(), docimport::ExtractError> {
//!     println!("{}", extract_epub("book.epub")?);
//!     println!("{}", extract_pdf("paper.pdf")?);
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `import-epub` and `import-pdf` binaries (clap + anyhow + tracing-subscriber) |
//! | `lopdf` | on      | Compiles in the pure-Rust PDF reader used when libpdfium is absent |

// ── Modules ──────────────────────────────────────────────────────────────

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod epub;
pub mod error;
pub mod input;
pub mod markup;
pub mod pdf;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ExtractConfig, ExtractConfigBuilder};
pub use epub::{extract_epub, extract_epub_with};
pub use error::{DocumentFormat, ExtractError};
pub use pdf::{
    extract_pdf, extract_pdf_with, LopdfProvider, PdfEngine, PdfPageSource, PdfProvider,
    PdfiumProvider, ProviderUnavailable,
};
