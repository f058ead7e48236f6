//! 1ロケール分の翻訳マッピング

use std::collections::HashMap;
use std::path::Path;

use crate::error::ResourceError;
use crate::locale;
use crate::resource;

/// An immutable key→text mapping for one locale.
///
/// Built once by parsing a locale resource; never patched afterwards. A
/// reload replaces the whole instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    /// Key → translated text.
    entries: HashMap<String, String>,
    /// Normalized locale code (ISO 639-3 style).
    locale: String,
}

impl Language {
    /// Creates a language from pre-parsed entries. The locale is normalized.
    #[must_use]
    pub fn new(entries: HashMap<String, String>, locale: &str) -> Self {
        Self { entries, locale: locale::normalize(locale) }
    }

    /// The normalized locale code.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Exact lookup. No fallback, no transformation.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Lookup that falls back to the key itself, guaranteeing a result.
    ///
    /// This is the terminal rung of the translation fallback chain.
    #[must_use]
    pub fn get_or_key<'a>(&'a self, key: &'a str) -> &'a str {
        self.get(key).unwrap_or(key)
    }

    /// The language's display name (`language.name` entry, or the key itself).
    #[must_use]
    pub fn name(&self) -> &str {
        self.get_or_key("language.name")
    }

    /// Parses raw resource text into a language.
    ///
    /// Entries are ini-style `key=value` pairs; values are unescaped on load.
    #[must_use]
    pub fn from_contents(contents: &str, locale: &str) -> Self {
        Self::new(resource::parse_entries(contents), locale)
    }

    /// Loads a locale resource file.
    ///
    /// Returns `Ok(None)` when the file does not exist — a locale resource
    /// not being shipped is a normal outcome, not an error.
    pub fn from_file(path: &Path, locale: &str) -> Result<Option<Self>, ResourceError> {
        if !path.exists() {
            tracing::debug!("locale resource not found: {}", path.display());
            return Ok(None);
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|source| ResourceError::Io { path: path.to_path_buf(), source })?;

        Ok(Some(Self::from_contents(&contents, locale)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::expect_used, clippy::panic)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::*;
    use tempfile::TempDir;

    use super::*;

    fn language(pairs: &[(&str, &str)], locale: &str) -> Language {
        let entries =
            pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        Language::new(entries, locale)
    }

    #[rstest]
    fn from_contents_parses_and_unescapes() {
        let lang = Language::from_contents(
            "language.name=English\nmultiline=first\\nsecond\ntabbed=a\\tb\n",
            "ENG",
        );

        assert_that!(lang.locale(), eq("eng"));
        assert_that!(lang.get("language.name"), some(eq("English")));
        assert_that!(lang.get("multiline"), some(eq("first\nsecond")));
        assert_that!(lang.get("tabbed"), some(eq("a\tb")));
    }

    #[rstest]
    fn get_is_exact_without_fallback() {
        let lang = language(&[("greeting", "Hello")], "eng");

        assert_that!(lang.get("greeting"), some(eq("Hello")));
        assert_that!(lang.get("missing"), none());
        assert_that!(lang.get("GREETING"), none());
    }

    #[rstest]
    #[case("greeting", "Hello")]
    #[case("missing", "missing")]
    #[case("", "")]
    fn get_or_key_is_total(#[case] key: &str, #[case] expected: &str) {
        let lang = language(&[("greeting", "Hello")], "eng");

        assert_that!(lang.get_or_key(key), eq(expected));
    }

    #[rstest]
    fn name_reads_language_name_entry() {
        let named = language(&[("language.name", "English")], "eng");
        let unnamed = language(&[], "eng");

        assert_that!(named.name(), eq("English"));
        assert_that!(unnamed.name(), eq("language.name"));
    }

    #[rstest]
    fn from_file_loads_existing_resource() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("eng.ini");
        fs::write(&path, "greeting=Hello\n").unwrap();

        let lang = Language::from_file(&path, "eng").unwrap().unwrap();

        assert_that!(lang.get("greeting"), some(eq("Hello")));
    }

    #[rstest]
    fn from_file_missing_resource_is_none() {
        let temp_dir = TempDir::new().unwrap();

        let result = Language::from_file(&temp_dir.path().join("fra.ini"), "fra");

        assert_that!(result.unwrap(), none());
    }
}
