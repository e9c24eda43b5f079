//! Error types for the docimport library.
//!
//! Every failure is terminal for a single extraction: either the full text
//! is produced or an [`ExtractError`] is returned. There is no page-level or
//! entry-level partial success, so a single enum covers both extractors.
//!
//! The CLI maps errors to process exit codes through
//! [`ExtractError::exit_code`]. A missing PDF capability gets its own code so
//! that callers can tell "install something" apart from "this file is bad".

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit code for every failure except a missing PDF capability.
pub const EXIT_FAILURE: u8 = 1;

/// Exit code reserved for [`ExtractError::MissingDependency`].
pub const EXIT_MISSING_DEPENDENCY: u8 = 2;

/// The document kind an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Epub,
    Pdf,
}

impl DocumentFormat {
    /// Localised message used when a document of this kind yields no text.
    pub fn empty_content_message(self) -> &'static str {
        match self {
            DocumentFormat::Epub => "No se encontraron documentos legibles en el EPUB",
            DocumentFormat::Pdf => "No se pudo extraer texto del PDF",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Epub => f.write_str("EPUB"),
            DocumentFormat::Pdf => f.write_str("PDF"),
        }
    }
}

/// All errors returned by the docimport library.
#[derive(Debug, Error)]
pub enum ExtractError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("Archivo no encontrado: '{path}'")]
    FileNotFound { path: PathBuf },

    // ── Container / library errors ────────────────────────────────────────
    /// The EPUB is not a readable ZIP container. Displays the archive
    /// reader's own message.
    #[error(transparent)]
    Archive(#[from] zip::result::ZipError),

    /// The PDF library failed to open the document or read a page.
    #[error("{detail}")]
    Pdf {
        provider: &'static str,
        detail: String,
    },

    /// No PDF-reading capability could be bound.
    #[error("Instala la librería \"{library}\" para habilitar la importación de PDF.")]
    MissingDependency { library: String },

    // ── Content errors ────────────────────────────────────────────────────
    /// Extraction finished but produced no usable text.
    #[error("{}", .format.empty_content_message())]
    EmptyContent { format: DocumentFormat },

    // ── I/O errors ────────────────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Configuración inválida: {0}")]
    InvalidConfig(String),
}

impl ExtractError {
    /// `true` when the failure is a missing PDF capability.
    pub fn is_missing_dependency(&self) -> bool {
        matches!(self, ExtractError::MissingDependency { .. })
    }

    /// Process exit code the CLI reports for this error.
    pub fn exit_code(&self) -> u8 {
        if self.is_missing_dependency() {
            EXIT_MISSING_DEPENDENCY
        } else {
            EXIT_FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display_names_path() {
        let e = ExtractError::FileNotFound {
            path: PathBuf::from("/tmp/missing.epub"),
        };
        assert!(e.to_string().contains("/tmp/missing.epub"), "got: {e}");
        assert_eq!(e.exit_code(), EXIT_FAILURE);
    }

    #[test]
    fn empty_content_is_localised_per_format() {
        let epub = ExtractError::EmptyContent {
            format: DocumentFormat::Epub,
        };
        let pdf = ExtractError::EmptyContent {
            format: DocumentFormat::Pdf,
        };
        assert_eq!(
            epub.to_string(),
            "No se encontraron documentos legibles en el EPUB"
        );
        assert_eq!(pdf.to_string(), "No se pudo extraer texto del PDF");
    }

    #[test]
    fn missing_dependency_has_dedicated_exit_code() {
        let e = ExtractError::MissingDependency {
            library: "libpdfium".into(),
        };
        assert!(e.is_missing_dependency());
        assert_eq!(e.exit_code(), EXIT_MISSING_DEPENDENCY);
        assert!(e.to_string().contains("\"libpdfium\""));
    }

    #[test]
    fn pdf_error_shows_native_message_only() {
        let e = ExtractError::Pdf {
            provider: "lopdf",
            detail: "invalid file trailer".into(),
        };
        assert_eq!(e.to_string(), "invalid file trailer");
        assert!(!e.is_missing_dependency());
    }

    #[test]
    fn archive_error_is_transparent() {
        let inner = zip::result::ZipError::FileNotFound;
        let expected = inner.to_string();
        let e = ExtractError::from(inner);
        assert_eq!(e.to_string(), expected);
        assert_eq!(e.exit_code(), EXIT_FAILURE);
    }
}
