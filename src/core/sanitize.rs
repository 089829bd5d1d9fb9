//! Field sanitizers applied before validation and serialization.
//!
//! Sanitizing never fails: invalid characters are silently dropped and
//! overlong text is cut.

/// Maximum length of the beneficiary name (AT-21).
pub const MAX_NAME_LEN: usize = 70;
/// Maximum length of the unstructured remittance text (AT-05).
pub const MAX_REMITTANCE_LEN: usize = 140;
/// Maximum length of the beneficiary-to-originator information.
pub const MAX_INFORMATION_LEN: usize = 70;

/// Uppercase the input and keep only `A-Z` and `0-9`.
///
/// ```
/// use epcqr::core::sanitize_alphanumeric;
///
/// assert_eq!(sanitize_alphanumeric("BE44 0019 8186 0045"), "BE44001981860045");
/// assert_eq!(sanitize_alphanumeric("geba-be-bb"), "GEBABEBB");
/// ```
pub fn sanitize_alphanumeric(text: &str) -> String {
    text.to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        .collect()
}

/// Replace control characters (line breaks, tabs) with spaces and trim.
///
/// A payload field must stay on its own line, so no `\n` or `\r` survives.
///
/// ```
/// use epcqr::core::sanitize_line;
///
/// assert_eq!(sanitize_line(" ACME\nGmbH\r\n"), "ACME GmbH");
/// ```
pub fn sanitize_line(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect::<String>()
        .trim()
        .to_string()
}

/// Flatten to a single line, then keep at most `max_len` characters.
pub fn sanitize_text(text: &str, max_len: usize) -> String {
    sanitize_line(text).chars().take(max_len).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphanumeric_strips_spaces() {
        assert_eq!(sanitize_alphanumeric("GEBA BE BB"), "GEBABEBB");
    }

    #[test]
    fn alphanumeric_drops_punctuation_and_accents() {
        assert_eq!(sanitize_alphanumeric("rf18-5390.0754/7034"), "RF18539007547034");
        assert_eq!(sanitize_alphanumeric("é1"), "1");
        assert_eq!(sanitize_alphanumeric(""), "");
    }

    #[test]
    fn text_is_trimmed() {
        assert_eq!(sanitize_text("  Test Company \n", MAX_NAME_LEN), "Test Company");
    }

    #[test]
    fn text_truncates_by_characters() {
        let long = "ä".repeat(200);
        let cut = sanitize_text(&long, MAX_REMITTANCE_LEN);
        assert_eq!(cut.chars().count(), 140);
    }

    #[test]
    fn line_breaks_become_spaces() {
        assert_eq!(sanitize_text("Invoice\n42", MAX_REMITTANCE_LEN), "Invoice 42");
        assert_eq!(sanitize_text("a\r\nb\tc", MAX_REMITTANCE_LEN), "a  b c");
        assert_eq!(sanitize_text("\n\n", MAX_NAME_LEN), "");
    }

    #[test]
    fn whitespace_only_becomes_empty() {
        assert_eq!(sanitize_text("   \t ", MAX_INFORMATION_LEN), "");
    }
}
