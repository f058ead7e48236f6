//! Locale-code normalization and IETF-tag conversion.
//!
//! Languages are keyed by ISO 639-3-style three-letter codes. Actors usually
//! report IETF-style tags (`en_US`, `ja-JP`) which must be converted before
//! lookup.

/// Primary-subtag (ISO 639-1) to ISO 639-3 mapping for supported languages.
const PRIMARY_SUBTAGS: &[(&str, &str)] = &[
    ("bg", "bul"),
    ("cs", "ces"),
    ("da", "dan"),
    ("de", "deu"),
    ("el", "ell"),
    ("en", "eng"),
    ("es", "spa"),
    ("fi", "fin"),
    ("fr", "fra"),
    ("hu", "hun"),
    ("id", "ind"),
    ("it", "ita"),
    ("ja", "jpn"),
    ("ko", "kor"),
    ("nb", "nor"),
    ("nl", "nld"),
    ("no", "nor"),
    ("pl", "pol"),
    ("pt", "por"),
    ("ru", "rus"),
    ("sk", "slk"),
    ("sv", "swe"),
    ("tr", "tur"),
    ("uk", "ukr"),
    ("vi", "vie"),
    ("zh", "zho"),
];

/// Normalizes a locale code for map lookup.
#[must_use]
pub fn normalize(code: &str) -> String {
    code.to_ascii_lowercase()
}

/// Converts an IETF-style tag (`en_US`, `en-GB`, `en`) to an ISO 639-3 code.
///
/// A tag whose primary subtag is already three ASCII letters passes through
/// lowercased. Unknown primary subtags yield `None`; the caller falls back to
/// the default language.
#[must_use]
pub fn convert_ietf(tag: &str) -> Option<String> {
    let primary = tag
        .split(['_', '-'])
        .next()
        .unwrap_or(tag)
        .to_ascii_lowercase();

    if primary.len() == 3 && primary.chars().all(|c| c.is_ascii_alphabetic()) {
        return Some(primary);
    }

    PRIMARY_SUBTAGS
        .iter()
        .find(|(subtag, _)| *subtag == primary)
        .map(|(_, code)| (*code).to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize("ENG"), "eng");
        assert_eq!(normalize("eNg"), "eng");
    }

    #[test]
    fn test_convert_ietf_region_tags() {
        assert_eq!(convert_ietf("en_US"), Some("eng".to_string()));
        assert_eq!(convert_ietf("en-GB"), Some("eng".to_string()));
        assert_eq!(convert_ietf("ja_JP"), Some("jpn".to_string()));
        assert_eq!(convert_ietf("de"), Some("deu".to_string()));
    }

    #[test]
    fn test_convert_ietf_three_letter_passthrough() {
        assert_eq!(convert_ietf("ENG"), Some("eng".to_string()));
        assert_eq!(convert_ietf("fra_FR"), Some("fra".to_string()));
    }

    #[test]
    fn test_convert_ietf_unknown_tag() {
        assert_eq!(convert_ietf("xx_XX"), None);
        assert_eq!(convert_ietf(""), None);
        assert_eq!(convert_ietf("1234"), None);
    }
}
