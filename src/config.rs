//! Configuration types for text extraction.
//!
//! The CLI always runs with [`ExtractConfig::default()`]; there is no config
//! file and no environment-driven setting. The struct exists so library
//! callers can swap the PDF provider list (tests inject fakes this way) and
//! so the few constants of the output contract live in one place.

use crate::error::ExtractError;
use crate::pdf::{default_providers, PdfProvider};
use std::fmt;
use std::sync::Arc;

/// Separator placed between per-entry and per-page texts.
pub const DEFAULT_SEPARATOR: &str = "\n\n";

/// Archive entry suffixes treated as markup documents.
pub const DEFAULT_MARKUP_SUFFIXES: [&str; 3] = [".xhtml", ".html", ".htm"];

/// Configuration for an extraction.
///
/// # Example
/// ```rust
/// use docimport::ExtractConfig;
///
/// let config = ExtractConfig::builder()
///     .separator("\n---\n")
///     .build()
///     .unwrap();
/// assert_eq!(config.separator, "\n---\n");
/// ```
#[derive(Clone)]
pub struct ExtractConfig {
    /// Text placed between two units (archive entries or pages). Default: `"\n\n"`.
    pub separator: String,

    /// Lowercased filename suffixes of the archive entries read as markup.
    /// Default: `.xhtml`, `.html`, `.htm`.
    pub markup_suffixes: Vec<String>,

    /// PDF capability providers, in priority order. The first one that binds
    /// is used. Default: pdfium, then lopdf.
    pub pdf_providers: Vec<Arc<dyn PdfProvider>>,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            markup_suffixes: DEFAULT_MARKUP_SUFFIXES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            pdf_providers: default_providers(),
        }
    }
}

impl fmt::Debug for ExtractConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let providers: Vec<&str> = self.pdf_providers.iter().map(|p| p.name()).collect();
        f.debug_struct("ExtractConfig")
            .field("separator", &self.separator)
            .field("markup_suffixes", &self.markup_suffixes)
            .field("pdf_providers", &providers)
            .finish()
    }
}

impl ExtractConfig {
    /// Create a new builder for `ExtractConfig`.
    pub fn builder() -> ExtractConfigBuilder {
        ExtractConfigBuilder {
            config: Self::default(),
        }
    }

    /// `true` if the archive entry `name` is a markup document.
    pub fn is_markup_entry(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        self.markup_suffixes.iter().any(|s| lower.ends_with(s.as_str()))
    }
}

/// Builder for [`ExtractConfig`].
#[derive(Debug)]
pub struct ExtractConfigBuilder {
    config: ExtractConfig,
}

impl ExtractConfigBuilder {
    pub fn separator(mut self, sep: impl Into<String>) -> Self {
        self.config.separator = sep.into();
        self
    }

    pub fn markup_suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.config.markup_suffixes = suffixes
            .into_iter()
            .map(|s| s.as_ref().to_lowercase())
            .collect();
        self
    }

    /// Replace the PDF provider list. Order is priority order.
    pub fn pdf_providers(mut self, providers: Vec<Arc<dyn PdfProvider>>) -> Self {
        self.config.pdf_providers = providers;
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ExtractConfig, ExtractError> {
        let c = &self.config;
        if c.markup_suffixes.is_empty() {
            return Err(ExtractError::InvalidConfig(
                "at least one markup suffix is required".into(),
            ));
        }
        if let Some(bad) = c.markup_suffixes.iter().find(|s| !s.starts_with('.')) {
            return Err(ExtractError::InvalidConfig(format!(
                "markup suffix must start with '.', got {bad:?}"
            )));
        }
        if c.pdf_providers.is_empty() {
            return Err(ExtractError::InvalidConfig(
                "at least one PDF provider is required".into(),
            ));
        }
        Ok(self.config)
    }
}
