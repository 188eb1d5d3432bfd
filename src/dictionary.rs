//! Query facade over the fallback chain, loader, and store.

use std::path::{
    Path,
    PathBuf,
};

use crate::error::DictionaryError;
use crate::key::SourceKey;
use crate::loader;
use crate::locale;
use crate::settings::DictionarySettings;
use crate::store::TranslationStore;

/// Immutable, query-ready translation set for one requested locale.
///
/// Built once from a directory of translation files; after construction all
/// queries are pure reads over frozen tables, so a shared `&Dictionary` is
/// safe for concurrent use without locking.
#[derive(Debug)]
pub struct Dictionary {
    /// Root of the translation file tree.
    root: PathBuf,
    /// Locales searched in order, most specific first. Never empty.
    chain: Vec<String>,
    /// Per-locale translation tables, frozen after construction.
    store: TranslationStore,
}

impl Dictionary {
    /// Builds a dictionary for `locale_tag` from the tree under `root`.
    ///
    /// Resolves the fallback chain, then walks `root` recursively and loads
    /// every file named `*-<locale>.tr` for a chain locale. A tree with no
    /// matching file yields a legitimate empty dictionary: every query then
    /// falls back to its source string.
    ///
    /// # Errors
    /// - [`DictionaryError::InvalidLocale`] before any I/O happens
    /// - walk, read, or decode failures abort construction; no partial
    ///   dictionary is returned
    pub fn new(root: impl Into<PathBuf>, locale_tag: &str) -> Result<Self, DictionaryError> {
        let root = root.into();
        let chain = locale::fallback_chain(locale_tag)?;
        tracing::debug!(root = %root.display(), ?chain, "Building dictionary");

        let mut store = TranslationStore::default();
        loader::load(&root, &chain, &mut store)?;

        if store.entry_count() == 0 {
            tracing::debug!(root = %root.display(), "No translations found for the locale chain");
        }

        Ok(Self { root, chain, store })
    }

    /// Builds a dictionary from settings.
    ///
    /// The requested locale is an explicit configuration value; the crate
    /// keeps no process-wide default.
    pub fn from_settings(settings: &DictionarySettings) -> Result<Self, DictionaryError> {
        Self::new(settings.translations_dir.clone(), &settings.locale)
    }

    /// Translates `source` for the dictionary's locale.
    ///
    /// Total function: on a miss the source string is returned unchanged, so
    /// untranslated text degrades gracefully instead of failing.
    #[must_use]
    pub fn translate<'a>(&'a self, source: &'a str) -> &'a str {
        self.translate_with_context(source, &[])
    }

    /// Translates `source` disambiguated by `context`.
    ///
    /// Contexts distinguish identical source strings used in different
    /// situations (`"Open"` in a menu vs. on a file dialog). Total, like
    /// [`Self::translate`].
    #[must_use]
    pub fn translate_with_context<'a>(&'a self, source: &'a str, context: &[&str]) -> &'a str {
        let key = SourceKey::new(source, context);
        self.store.lookup(&self.chain, &key).unwrap_or(source)
    }

    /// Root of the translation file tree this dictionary was built from.
    #[must_use]
    pub fn root_path(&self) -> &Path {
        &self.root
    }

    /// The most specific locale of the fallback chain.
    #[must_use]
    pub fn primary_locale(&self) -> &str {
        // The chain is never empty once construction succeeded.
        self.chain.first().map_or("", String::as_str)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    #[rstest]
    fn new_rejects_an_invalid_locale_before_touching_the_tree() {
        let result = Dictionary::new("/nonexistent/does/not/matter", "no_such_locale");

        assert_that!(result, err(matches_pattern!(DictionaryError::InvalidLocale(anything()))));
    }

    #[rstest]
    fn new_fails_on_a_missing_translation_directory() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("translations");

        let result = Dictionary::new(missing, "en");

        assert_that!(result, err(matches_pattern!(DictionaryError::Walk(anything()))));
    }

    #[rstest]
    fn translate_returns_the_source_when_nothing_is_loaded() {
        let temp_dir = TempDir::new().unwrap();
        let dictionary = Dictionary::new(temp_dir.path(), "en").unwrap();

        assert_that!(dictionary.translate("Hello"), eq("Hello"));
    }

    #[rstest]
    fn translate_prefers_the_region_specific_translation() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("app-en.tr"),
            r#"{"messages": [{"source": "Colour", "translation": "Colour"}]}"#,
        )
        .unwrap();
        fs::write(
            temp_dir.path().join("app-en_US.tr"),
            r#"{"messages": [{"source": "Colour", "translation": "Color"}]}"#,
        )
        .unwrap();

        let dictionary = Dictionary::new(temp_dir.path(), "en_US").unwrap();

        assert_that!(dictionary.translate("Colour"), eq("Color"));
    }

    #[rstest]
    fn translate_with_context_distinguishes_identical_sources() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("app-fr.tr"),
            r#"{"messages": [
                {"source": "Open", "context": ["menu"], "translation": "Ouvrir"},
                {"source": "Open", "context": ["file"], "translation": "Ouvrez"}
            ]}"#,
        )
        .unwrap();

        let dictionary = Dictionary::new(temp_dir.path(), "fr").unwrap();

        assert_that!(dictionary.translate_with_context("Open", &["menu"]), eq("Ouvrir"));
        assert_that!(dictionary.translate_with_context("Open", &["file"]), eq("Ouvrez"));
        assert_that!(dictionary.translate("Open"), eq("Open"));
    }

    #[rstest]
    fn accessors_reflect_the_constructed_state() {
        let temp_dir = TempDir::new().unwrap();
        let dictionary = Dictionary::new(temp_dir.path(), "en_US").unwrap();

        assert_that!(dictionary.root_path(), eq(temp_dir.path()));
        assert_that!(dictionary.primary_locale(), eq("en_US"));
    }

    #[rstest]
    fn from_settings_uses_the_configured_locale_and_directory() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("app-de.tr"),
            r#"{"messages": [{"source": "Save", "translation": "Speichern"}]}"#,
        )
        .unwrap();

        let settings = DictionarySettings {
            locale: "de".to_string(),
            translations_dir: temp_dir.path().to_path_buf(),
        };
        let dictionary = Dictionary::from_settings(&settings).unwrap();

        assert_that!(dictionary.translate("Save"), eq("Speichern"));
        assert_that!(dictionary.primary_locale(), eq("de"));
    }
}
