//! Recursive discovery and decoding of translation files.

use std::fs;
use std::path::Path;

use globset::{
    Glob,
    GlobSet,
    GlobSetBuilder,
};
use ignore::WalkBuilder;
use serde::Deserialize;

use crate::error::DictionaryError;
use crate::key::SourceKey;
use crate::store::TranslationStore;

/// File extension understood by the decoder.
const FILE_EXTENSION: &str = "tr";

/// One translated message as stored on disk.
#[derive(Debug, Deserialize)]
struct MessageRecord {
    /// Source string as it appears in code.
    source: String,
    /// Disambiguation contexts, in order; usually absent.
    #[serde(default)]
    context: Vec<String>,
    /// Translated text; empty means "not yet translated".
    #[serde(default)]
    translation: String,
}

/// On-disk translation file: a stream of message records.
#[derive(Debug, Deserialize)]
struct TranslationFile {
    /// Records in file order.
    messages: Vec<MessageRecord>,
}

/// Matches file names against the locales of a fallback chain.
///
/// Holds one `*-<locale>.tr` glob per chain entry, in chain order, so the
/// lowest matching glob index is the most specific locale for a file.
#[derive(Debug)]
struct LocaleMatcher<'a> {
    /// Fallback chain the globs were built from, most specific first.
    chain: &'a [String],
    /// One glob per chain entry, in chain order.
    globs: GlobSet,
}

impl<'a> LocaleMatcher<'a> {
    /// Builds the glob set for `chain`.
    fn new(chain: &'a [String]) -> Result<Self, DictionaryError> {
        let mut builder = GlobSetBuilder::new();
        for locale in chain {
            builder.add(Glob::new(&format!("*-{locale}.{FILE_EXTENSION}"))?);
        }

        Ok(Self { chain, globs: builder.build()? })
    }

    /// Returns the most specific chain locale whose suffix matches `file_name`.
    fn locale_for(&self, file_name: &str) -> Option<&'a str> {
        self.globs
            .matches(file_name)
            .into_iter()
            .min()
            .and_then(|index| self.chain.get(index))
            .map(String::as_str)
    }
}

/// Walks `root` recursively and loads every file matching a chain locale.
///
/// Files whose name matches no chain entry are skipped silently; the tree
/// may hold translations for locales outside the current chain. Any walk,
/// read, or decode failure aborts the load; translations already recorded
/// are not rolled back.
pub(crate) fn load(
    root: &Path,
    chain: &[String],
    store: &mut TranslationStore,
) -> Result<(), DictionaryError> {
    let matcher = LocaleMatcher::new(chain)?;
    let mut loaded = 0_usize;

    // Standard filters stay off: translation trees are data directories and
    // gitignore/hidden-file rules must not hide catalogs.
    for entry in WalkBuilder::new(root).standard_filters(false).follow_links(false).build() {
        let entry = entry?;
        if !entry.file_type().is_some_and(|file_type| file_type.is_file()) {
            continue;
        }

        let path = entry.path();
        let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        let Some(locale) = matcher.locale_for(file_name) else {
            tracing::trace!(path = %path.display(), "Skipping file outside the locale chain");
            continue;
        };

        load_file(path, locale, store)?;
        loaded += 1;
    }

    tracing::debug!(
        root = %root.display(),
        files = loaded,
        entries = store.entry_count(),
        "Translation load finished"
    );

    Ok(())
}

/// Decodes one translation file and feeds its records into the store.
///
/// The file handle is scoped to the read and released on every path,
/// including decode failure.
fn load_file(
    path: &Path,
    locale: &str,
    store: &mut TranslationStore,
) -> Result<(), DictionaryError> {
    let content = fs::read_to_string(path)
        .map_err(|source| DictionaryError::Io { path: path.to_path_buf(), source })?;

    let file: TranslationFile = serde_json::from_str(&content)
        .map_err(|source| DictionaryError::Decode { path: path.to_path_buf(), source })?;

    for record in file.messages {
        let context: Vec<&str> = record.context.iter().map(String::as_str).collect();
        let key = SourceKey::new(&record.source, &context);
        store.record(locale, key, &record.translation);
    }

    tracing::debug!(path = %path.display(), locale, "Loaded translation file");

    Ok(())
}
