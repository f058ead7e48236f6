//! Locale-resource directory loading.
//!
//! Shipped resources follow the `locale/<xxx>.ini` naming convention, where
//! `<xxx>` is a three-letter locale code.

use std::path::Path;

use crate::error::ResourceError;
use crate::language::Language;
use crate::locale;

/// Loads every `<xxx>.ini` resource directly under `dir`.
///
/// Files not matching the naming convention are skipped. The result is
/// sorted by locale code.
pub fn load_locale_dir(dir: &Path) -> Result<Vec<Language>, ResourceError> {
    let entries = std::fs::read_dir(dir)
        .map_err(|source| ResourceError::Io { path: dir.to_path_buf(), source })?;

    let mut languages = Vec::new();
    for entry in entries {
        let entry = entry
            .map_err(|source| ResourceError::Io { path: dir.to_path_buf(), source })?;
        let path = entry.path();

        let Some(code) = locale_code_from_path(&path) else {
            continue;
        };
        if let Some(language) = Language::from_file(&path, &code)? {
            languages.push(language);
        }
    }

    languages.sort_by(|a, b| a.locale().cmp(b.locale()));
    tracing::info!(count = languages.len(), dir = %dir.display(), "loaded locale resources");

    Ok(languages)
}

/// Extracts the locale code from a `<xxx>.ini` file name.
fn locale_code_from_path(path: &Path) -> Option<String> {
    if path.extension().and_then(|ext| ext.to_str()) != Some("ini") {
        return None;
    }

    let stem = path.file_stem()?.to_str()?;
    (stem.len() == 3 && stem.chars().all(|c| c.is_ascii_alphabetic()))
        .then(|| locale::normalize(stem))
}
