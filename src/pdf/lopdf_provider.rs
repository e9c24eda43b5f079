//! lopdf provider: pure-Rust fallback compiled in by the `lopdf` feature.
//!
//! Without the feature the provider still exists in the default list but
//! never binds, so a machine without libpdfium reports a missing dependency.

use super::{PdfEngine, PdfProvider, ProviderUnavailable};

const NAME: &str = "lopdf";

/// Provider backed by the `lopdf` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfProvider;

impl PdfProvider for LopdfProvider {
    fn name(&self) -> &'static str {
        NAME
    }

    fn library(&self) -> &'static str {
        "lopdf"
    }

    #[cfg(feature = "lopdf")]
    fn bind(&self) -> Result<Box<dyn PdfEngine>, ProviderUnavailable> {
        Ok(Box::new(engine::LopdfEngine))
    }

    #[cfg(not(feature = "lopdf"))]
    fn bind(&self) -> Result<Box<dyn PdfEngine>, ProviderUnavailable> {
        Err(ProviderUnavailable::new(
            NAME,
            "built without the `lopdf` feature",
        ))
    }
}

#[cfg(feature = "lopdf")]
mod engine {
    use super::NAME;
    use crate::error::ExtractError;
    use crate::pdf::{PdfEngine, PdfPageSource};
    use lopdf::Document;
    use std::path::Path;

    pub(super) struct LopdfEngine;

    impl PdfEngine for LopdfEngine {
        fn open<'a>(&'a self, path: &Path) -> Result<Box<dyn PdfPageSource + 'a>, ExtractError> {
            let document = Document::load(path).map_err(|e| ExtractError::Pdf {
                provider: NAME,
                detail: e.to_string(),
            })?;
            // get_pages is keyed by 1-based page number, in document order.
            let page_numbers = document.get_pages().keys().copied().collect();
            Ok(Box::new(LopdfDocument {
                document,
                page_numbers,
            }))
        }
    }

    struct LopdfDocument {
        document: Document,
        page_numbers: Vec<u32>,
    }

    impl PdfPageSource for LopdfDocument {
        fn page_count(&self) -> usize {
            self.page_numbers.len()
        }

        fn page_text(&self, index: usize) -> Result<Option<String>, ExtractError> {
            let number = self.page_numbers[index];
            self.document
                .extract_text(&[number])
                .map(Some)
                .map_err(|e| ExtractError::Pdf {
                    provider: NAME,
                    detail: format!("page {}: {}", number, e),
                })
        }
    }
}
