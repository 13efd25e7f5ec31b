use unicode_normalization::UnicodeNormalization;

/// Collapse a raw query into the term sent to the lookup service.
///
/// Trims, applies NFKC normalization, and folds internal whitespace runs
/// into single spaces. Returns an empty string for blank input.
pub fn normalize_term(raw: &str) -> String {
    let term = raw.trim();
    if term.is_empty() {
        return String::new();
    }

    let term: String = term.nfkc().collect();
    term.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(normalize_term("  hello \n"), "hello");
    }

    #[test]
    fn blank_input_stays_empty() {
        assert_eq!(normalize_term(""), "");
        assert_eq!(normalize_term("   \t  "), "");
    }

    #[test]
    fn folds_internal_whitespace() {
        assert_eq!(normalize_term("ice   cream"), "ice cream");
    }

    #[test]
    fn applies_compatibility_normalization() {
        // Full-width latin letters fold to ASCII under NFKC
        assert_eq!(normalize_term("ｈｅｌｌｏ"), "hello");
    }
}
