use crate::config::MULTI_POST_DELIMITER;

/// Text normalization applied to both corpus documents and queries.
///
/// Every `|||` post delimiter becomes a single space, then the whole text is
/// lowercased with Unicode's locale-independent mapping.
/// Whitespace and punctuation are left alone; the tokenizer deals with them.
///
/// # Examples
/// ```
/// use tf_idf_label_matcher::utils::normalizer::normalize;
/// assert_eq!(normalize("A|||B"), "a b");
/// ```
#[inline]
pub fn normalize(text: &str) -> String {
    text.replace(MULTI_POST_DELIMITER, " ").to_lowercase()
}

/// Normalized text is blank when nothing but whitespace is left.
#[inline]
pub fn is_blank(normalized: &str) -> bool {
    normalized.chars().all(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_delimiter_and_lowercases() {
        assert_eq!(normalize("A|||B"), "a b");
        assert_eq!(normalize("Hello|||World|||AGAIN"), "hello world again");
    }

    #[test]
    fn keeps_whitespace_and_punctuation() {
        assert_eq!(normalize("  Dogs, Cats!  "), "  dogs, cats!  ");
        // a lone pipe is not the delimiter
        assert_eq!(normalize("a|b||c"), "a|b||c");
    }

    #[test]
    fn is_idempotent() {
        for input in ["A|||B", "ÄÖÜ straße", "MiXeD|||case|||Text", ""] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn unicode_lowercase_is_locale_independent() {
        assert_eq!(normalize("ΣΟΦΙΑ"), "σοφια");
    }

    #[test]
    fn blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank(" \t\n"));
        assert!(is_blank(&normalize("|||")));
        assert!(!is_blank(" a "));
    }
}
