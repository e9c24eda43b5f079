//! PDFium provider: binds libpdfium at runtime through `pdfium-render`.
//!
//! The library is looked up next to the working directory first, then on the
//! system library search path. Nothing is downloaded; if neither lookup
//! succeeds the provider reports itself unavailable and the next provider is
//! tried.

use super::{PdfEngine, PdfPageSource, PdfProvider, ProviderUnavailable};
use crate::error::ExtractError;
use pdfium_render::prelude::{PdfDocument, Pdfium};
use std::path::Path;
use tracing::debug;

const NAME: &str = "pdfium";

/// Provider backed by the PDFium shared library.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfiumProvider;

impl PdfProvider for PdfiumProvider {
    fn name(&self) -> &'static str {
        NAME
    }

    fn library(&self) -> &'static str {
        "libpdfium"
    }

    fn bind(&self) -> Result<Box<dyn PdfEngine>, ProviderUnavailable> {
        let local = Pdfium::pdfium_platform_library_name_at_path("./");
        let bindings = Pdfium::bind_to_library(&local)
            .or_else(|e| {
                debug!("No local pdfium ({}), trying system library", e);
                Pdfium::bind_to_system_library()
            })
            .map_err(|e| ProviderUnavailable::new(NAME, e.to_string()))?;

        Ok(Box::new(PdfiumEngine {
            pdfium: Pdfium::new(bindings),
        }))
    }
}

struct PdfiumEngine {
    pdfium: Pdfium,
}

impl PdfEngine for PdfiumEngine {
    fn open<'a>(&'a self, path: &Path) -> Result<Box<dyn PdfPageSource + 'a>, ExtractError> {
        let document = self
            .pdfium
            .load_pdf_from_file(path, None)
            .map_err(|e| ExtractError::Pdf {
                provider: NAME,
                detail: format!("{:?}", e),
            })?;
        Ok(Box::new(PdfiumDocument { document }))
    }
}

struct PdfiumDocument<'a> {
    document: PdfDocument<'a>,
}

impl PdfPageSource for PdfiumDocument<'_> {
    fn page_count(&self) -> usize {
        self.document.pages().len() as usize
    }

    fn page_text(&self, index: usize) -> Result<Option<String>, ExtractError> {
        let page = self
            .document
            .pages()
            .get(page_index(index)?)
            .map_err(|e| ExtractError::Pdf {
                provider: NAME,
                detail: format!("page {}: {:?}", index + 1, e),
            })?;

        let text = match page.text() {
            Ok(text) => Some(text.all()),
            Err(e) => {
                debug!("Page {} has no text layer: {:?}", index + 1, e);
                None
            }
        };
        Ok(text)
    }
}

/// PDFium addresses pages with a `u16`.
fn page_index(index: usize) -> Result<u16, ExtractError> {
    u16::try_from(index).map_err(|_| ExtractError::Pdf {
        provider: NAME,
        detail: format!("page {} is beyond the pdfium page limit", index + 1),
    })
}
