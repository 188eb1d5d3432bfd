//! In-memory translation tables, one per locale.

use std::collections::HashMap;

use crate::key::SourceKey;

/// Mapping from locale identifier to its translation table.
///
/// Populated by the loader during dictionary construction and read-only
/// afterwards; the crate exposes no mutation path past that point.
#[derive(Debug, Default)]
pub(crate) struct TranslationStore {
    /// Per-locale tables from source key to translated text.
    tables: HashMap<String, HashMap<SourceKey, String>>,
}

impl TranslationStore {
    /// Returns the table for `locale`, creating an empty one if absent.
    fn table_mut(&mut self, locale: &str) -> &mut HashMap<SourceKey, String> {
        self.tables.entry(locale.to_string()).or_default()
    }

    /// Records a translation for `key` in the table of `locale`.
    ///
    /// An empty translation is a no-op: it never creates an entry and never
    /// erases a previously recorded one. For true duplicates of one key the
    /// last non-empty record wins; file order within a load is
    /// implementation-defined, so which duplicate survives is unspecified.
    pub(crate) fn record(&mut self, locale: &str, key: SourceKey, translation: &str) {
        if translation.is_empty() {
            return;
        }
        self.table_mut(locale).insert(key, translation.to_string());
    }

    /// Looks up `key` along `chain`, most specific locale first.
    ///
    /// The first locale whose table contains the key wins; `None` when no
    /// locale in the chain has it.
    pub(crate) fn lookup(&self, chain: &[String], key: &SourceKey) -> Option<&str> {
        chain
            .iter()
            .find_map(|locale| self.tables.get(locale).and_then(|table| table.get(key)))
            .map(String::as_str)
    }

    /// Total number of recorded translations across all locales.
    pub(crate) fn entry_count(&self) -> usize {
        self.tables.values().map(HashMap::len).sum()
    }
}
