//! PDF text extraction over interchangeable capability providers.
//!
//! This crate does not parse PDF itself. A [`PdfProvider`] wraps an external
//! PDF library; binding it yields a [`PdfEngine`] that can open documents.
//! Providers are tried in the order given by
//! [`ExtractConfig::pdf_providers`](crate::ExtractConfig): the first one that
//! binds is used for the whole call, and if none binds the call fails with
//! [`ExtractError::MissingDependency`].
//!
//! ```text
//! [pdfium, lopdf] ──bind──▶ engine ──open──▶ pages ──text──▶ join("\n\n")
//! ```
//!
//! Default providers:
//!
//! | Order | Provider | Backed by |
//! |-------|----------|-----------|
//! | 1 | `pdfium` | libpdfium loaded at runtime via `pdfium-render` |
//! | 2 | `lopdf`  | pure-Rust `lopdf`, compiled in by the `lopdf` feature |

pub mod lopdf_provider;
pub mod pdfium_provider;

use crate::config::ExtractConfig;
use crate::error::{DocumentFormat, ExtractError};
use crate::input::{assemble_units, require_existing};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

pub use lopdf_provider::LopdfProvider;
pub use pdfium_provider::PdfiumProvider;

/// Library named in the missing-dependency message when no provider is configured.
const FALLBACK_LIBRARY: &str = "libpdfium";

/// Why a provider could not be bound.
#[derive(Debug, Error)]
#[error("{provider} unavailable: {reason}")]
pub struct ProviderUnavailable {
    pub provider: &'static str,
    pub reason: String,
}

impl ProviderUnavailable {
    pub fn new(provider: &'static str, reason: impl Into<String>) -> Self {
        Self {
            provider,
            reason: reason.into(),
        }
    }
}

/// An external library able to read PDF documents.
pub trait PdfProvider: Send + Sync {
    /// Short identifier used in logs and errors.
    fn name(&self) -> &'static str;

    /// The library a user would install to make this provider available.
    fn library(&self) -> &'static str;

    /// Load the library. Failure means the capability is absent, not that a
    /// document is bad.
    fn bind(&self) -> Result<Box<dyn PdfEngine>, ProviderUnavailable>;
}

/// A bound PDF library.
pub trait PdfEngine {
    /// Open the document at `path`.
    fn open<'a>(&'a self, path: &Path) -> Result<Box<dyn PdfPageSource + 'a>, ExtractError>;
}

/// An open document, read page by page.
pub trait PdfPageSource {
    fn page_count(&self) -> usize;

    /// Text of the page at 0-based `index`. `Ok(None)` means the page has no
    /// text layer and contributes nothing.
    fn page_text(&self, index: usize) -> Result<Option<String>, ExtractError>;
}

/// The default provider order: pdfium first, lopdf second.
pub fn default_providers() -> Vec<Arc<dyn PdfProvider>> {
    vec![Arc::new(PdfiumProvider), Arc::new(LopdfProvider)]
}

/// A provider that bound successfully, with its engine.
pub struct BoundEngine {
    pub provider: &'static str,
    pub engine: Box<dyn PdfEngine>,
}

/// Bind the first available provider in `providers`.
pub fn resolve_engine(providers: &[Arc<dyn PdfProvider>]) -> Result<BoundEngine, ExtractError> {
    for provider in providers {
        match provider.bind() {
            Ok(engine) => {
                info!("PDF provider bound: {}", provider.name());
                return Ok(BoundEngine {
                    provider: provider.name(),
                    engine,
                });
            }
            Err(e) => debug!("{}", e),
        }
    }

    let library = providers
        .first()
        .map(|p| p.library())
        .unwrap_or(FALLBACK_LIBRARY);
    Err(ExtractError::MissingDependency {
        library: library.to_string(),
    })
}

/// Extract the text of the PDF at `path` with the default configuration.
pub fn extract_pdf(path: impl AsRef<Path>) -> Result<String, ExtractError> {
    extract_pdf_with(path, &ExtractConfig::default())
}

/// Extract the text of the PDF at `path`.
///
/// # Errors
/// - [`ExtractError::FileNotFound`] before any provider is consulted
/// - [`ExtractError::MissingDependency`] when no provider binds
/// - [`ExtractError::Pdf`] when the library fails to open or read the document
/// - [`ExtractError::EmptyContent`] when no page yields text
pub fn extract_pdf_with(
    path: impl AsRef<Path>,
    config: &ExtractConfig,
) -> Result<String, ExtractError> {
    let path = require_existing(path.as_ref())?;
    info!("Extracting PDF: {}", path.display());

    let bound = resolve_engine(&config.pdf_providers)?;
    let document = bound.engine.open(path)?;
    let total_pages = document.page_count();
    info!("PDF loaded with {}: {} pages", bound.provider, total_pages);

    let mut parts = Vec::with_capacity(total_pages);
    for index in 0..total_pages {
        match document.page_text(index)? {
            Some(text) => {
                let text = text.trim();
                if text.is_empty() {
                    debug!("Page {} yielded no text", index + 1);
                } else {
                    parts.push(text.to_string());
                }
            }
            None => debug!("Page {} has no text layer", index + 1),
        }
    }

    debug!("{}/{} pages yielded text", parts.len(), total_pages);
    assemble_units(parts, &config.separator).ok_or(ExtractError::EmptyContent {
        format: DocumentFormat::Pdf,
    })
}
