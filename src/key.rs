//! Source-key construction for translation lookup.

/// Joins source and context strings into one composite key.
///
/// A doubled ASCII unit separator: a control sequence that does not occur in
/// meaningful UI text, so distinct (source, context) pairs keep distinct keys.
const DELIMITER: &str = "\u{1f}\u{1f}";

/// Identity of a translatable string within one locale table.
///
/// Two keys are equal iff their source string and their context sequence
/// (order-sensitive) are equal. Used purely as a map key, never displayed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceKey(String);

impl SourceKey {
    /// Builds the key for `source` disambiguated by `context`.
    ///
    /// With no context the key is the source string itself; otherwise the
    /// source and every context string are joined with [`DELIMITER`].
    /// Deterministic: the same pair always produces the same key.
    #[must_use]
    pub fn new(source: &str, context: &[&str]) -> Self {
        if context.is_empty() {
            return Self(source.to_string());
        }

        let extra: usize = context.iter().map(|part| part.len() + DELIMITER.len()).sum();
        let mut composite = String::with_capacity(source.len() + extra);
        composite.push_str(source);
        for part in context {
            composite.push_str(DELIMITER);
            composite.push_str(part);
        }

        Self(composite)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn empty_context_key_is_the_source_itself() {
        assert_eq!(SourceKey::new("Hello", &[]).0, "Hello");
    }

    #[rstest]
    fn context_disambiguates_identical_sources() {
        let plain = SourceKey::new("Open", &[]);
        let menu = SourceKey::new("Open", &["menu"]);
        let file = SourceKey::new("Open", &["file"]);

        assert_ne!(plain, menu);
        assert_ne!(plain, file);
        assert_ne!(menu, file);
    }

    #[rstest]
    fn context_order_is_significant() {
        let ab = SourceKey::new("Save", &["a", "b"]);
        let ba = SourceKey::new("Save", &["b", "a"]);

        assert_ne!(ab, ba);
    }

    #[rstest]
    fn same_pair_always_produces_the_same_key() {
        let first = SourceKey::new("Close", &["dialog", "button"]);
        let second = SourceKey::new("Close", &["dialog", "button"]);

        assert_eq!(first, second);
    }

    #[rstest]
    fn a_context_string_cannot_masquerade_as_source_text() {
        assert_ne!(SourceKey::new("a__b", &[]), SourceKey::new("a", &["b"]));
    }
}
