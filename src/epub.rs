//! EPUB text extraction.
//!
//! An EPUB is a ZIP container. Rather than following the OPF spine, every
//! member whose name ends in a markup suffix is read in the archive's own
//! listing order (central directory order), which is the order the
//! packaging tool wrote the chapters in.

use crate::config::ExtractConfig;
use crate::error::{DocumentFormat, ExtractError};
use crate::input::{assemble_units, require_existing};
use crate::markup::{decode_lenient, html_to_text};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};
use zip::ZipArchive;

/// Extract the text of the EPUB at `path` with the default configuration.
pub fn extract_epub(path: impl AsRef<Path>) -> Result<String, ExtractError> {
    extract_epub_with(path, &ExtractConfig::default())
}

/// Extract the text of the EPUB at `path`.
///
/// # Errors
/// - [`ExtractError::FileNotFound`] if `path` does not exist
/// - [`ExtractError::Archive`] if the file is not a readable ZIP container
/// - [`ExtractError::EmptyContent`] if no markup document yields text
pub fn extract_epub_with(
    path: impl AsRef<Path>,
    config: &ExtractConfig,
) -> Result<String, ExtractError> {
    let path = require_existing(path.as_ref())?;
    info!("Extracting EPUB: {}", path.display());

    let mut archive = ZipArchive::new(File::open(path)?)?;
    let texts = read_markup_entries(&mut archive, config)?;

    info!("EPUB: {} markup documents read", texts.len());
    assemble_units(texts, &config.separator).ok_or(ExtractError::EmptyContent {
        format: DocumentFormat::Epub,
    })
}

/// Strip every markup member of `archive`, in listing order.
fn read_markup_entries<R>(
    archive: &mut ZipArchive<R>,
    config: &ExtractConfig,
) -> Result<Vec<String>, ExtractError>
where
    R: Read + std::io::Seek,
{
    let mut texts = Vec::new();

    for index in 0..archive.len() {
        let mut entry = match archive.by_index(index) {
            Ok(entry) => entry,
            Err(e) => {
                debug!("Skipping unreadable archive member #{}: {}", index, e);
                continue;
            }
        };

        if entry.is_dir() || !config.is_markup_entry(entry.name()) {
            continue;
        }

        // The declared size comes from the archive and is not trusted.
        let mut bytes = Vec::new();
        entry
            .read_to_end(&mut bytes)
            .map_err(|e| ExtractError::Archive(e.into()))?;

        let text = html_to_text(&decode_lenient(&bytes));
        debug!("{}: {} bytes of text", entry.name(), text.len());
        texts.push(text);
    }

    Ok(texts)
}
