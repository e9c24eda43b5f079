//! Input validation and output assembly shared by both extractors.
//!
//! Both extractors check that the source exists before touching any
//! library, and both join their per-unit texts the same way.

use crate::error::ExtractError;
use std::path::Path;
use tracing::debug;

/// Fail with [`ExtractError::FileNotFound`] unless `path` exists.
pub fn require_existing(path: &Path) -> Result<&Path, ExtractError> {
    if !path.exists() {
        return Err(ExtractError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    debug!("Resolved local input: {}", path.display());
    Ok(path)
}

/// Join the non-empty `units` with `separator`.
///
/// Returns `None` when no unit carries text, so callers can turn an empty
/// result into an error instead of printing nothing.
pub fn assemble_units<I, S>(units: I, separator: &str) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    let mut count = 0usize;

    for unit in units {
        let unit = unit.as_ref();
        if unit.is_empty() {
            continue;
        }
        if count > 0 {
            out.push_str(separator);
        }
        out.push_str(unit);
        count += 1;
    }

    (count > 0).then_some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_is_not_found() {
        let err = require_existing(Path::new("/definitely/not/a/real/file.epub")).unwrap_err();
        assert!(matches!(err, ExtractError::FileNotFound { .. }));
    }

    #[test]
    fn existing_path_passes_through() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert_eq!(require_existing(file.path()).unwrap(), file.path());
    }

    #[test]
    fn assemble_skips_empty_units() {
        let joined = assemble_units(["uno", "", "dos", "", "tres"], "\n\n");
        assert_eq!(joined.as_deref(), Some("uno\n\ndos\n\ntres"));
    }

    #[test]
    fn assemble_with_no_text_is_none() {
        assert_eq!(assemble_units(["", ""], "\n\n"), None);
        assert_eq!(assemble_units(Vec::<String>::new(), "\n\n"), None);
    }
}
