//! Locale tag validation and fallback-chain derivation.

use crate::error::DictionaryError;

/// Derives the fallback chain for a locale tag, most specific first.
///
/// A tag is a 2-letter lowercase language, optionally followed by `_` and a
/// 2–3 letter uppercase region. A bare language yields a single-entry chain;
/// a regioned tag yields the full tag first, then the bare language:
///
/// - `"fr"` → `["fr"]`
/// - `"en_US"` → `["en_US", "en"]`
///
/// Anything else is rejected as [`DictionaryError::InvalidLocale`]; tags are
/// never silently corrected. Pure function, no I/O.
pub fn fallback_chain(tag: &str) -> Result<Vec<String>, DictionaryError> {
    match tag.split('_').collect::<Vec<_>>().as_slice() {
        [language] if is_language(language) => Ok(vec![(*language).to_string()]),
        [language, region] if is_language(language) && is_region(region) => {
            Ok(vec![tag.to_string(), (*language).to_string()])
        }
        _ => Err(DictionaryError::InvalidLocale(tag.to_string())),
    }
}

/// Language subtag: exactly 2 ASCII lowercase letters.
fn is_language(segment: &str) -> bool {
    segment.len() == 2 && segment.bytes().all(|b| b.is_ascii_lowercase())
}

/// Region subtag: 2–3 ASCII uppercase letters.
fn is_region(segment: &str) -> bool {
    (2..=3).contains(&segment.len()) && segment.bytes().all(|b| b.is_ascii_uppercase())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::error::DictionaryError;

    #[rstest]
    // Bare language
    #[case("en", &["en"])]
    #[case("fr", &["fr"])]
    // Language + region, full tag first
    #[case("en_US", &["en_US", "en"])]
    #[case("pt_BR", &["pt_BR", "pt"])]
    // Three-letter regions are allowed
    #[case("es_LAT", &["es_LAT", "es"])]
    fn fallback_chain_accepts_valid_tags(#[case] tag: &str, #[case] expected: &[&str]) {
        let chain = fallback_chain(tag).unwrap();

        assert_eq!(chain, expected);
    }

    #[rstest]
    #[case("")]
    // Wrong case
    #[case("EN")]
    #[case("en_us")]
    #[case("En_US")]
    // Wrong segment lengths
    #[case("e")]
    #[case("eng")]
    #[case("en_U")]
    #[case("en_USAX")]
    // Too many segments
    #[case("en_US_X")]
    // Non-letter characters and wrong separators
    #[case("e1")]
    #[case("en-US")]
    #[case("en_U2")]
    fn fallback_chain_rejects_invalid_tags(#[case] tag: &str) {
        let result = fallback_chain(tag);

        assert!(matches!(result, Err(DictionaryError::InvalidLocale(_))));
    }

    #[rstest]
    fn invalid_locale_error_names_the_tag() {
        let error = fallback_chain("en_us").unwrap_err();

        assert_eq!(format!("{error}"), "invalid locale tag 'en_us'");
    }
}
