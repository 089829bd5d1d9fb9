//! Mod-97 check digit arithmetic.
//!
//! IBANs and ISO 11649 creditor references expand to numbers far beyond
//! `u64` once letters are substituted, so everything here reduces digit by
//! digit instead of parsing into an integer.

use super::sanitize::sanitize_alphanumeric;

/// Compute the value of a decimal digit string modulo 97.
///
/// Non-digit characters are skipped.
///
/// ```
/// use epcqr::core::mod97;
///
/// assert_eq!(mod97("5337367152"), 61);
/// assert_eq!(mod97(""), 0);
/// ```
pub fn mod97(digits: &str) -> u32 {
    digits
        .chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0, |acc, digit| (acc * 10 + digit) % 97)
}

/// Expand an uppercase alphanumeric string into digits (A=10 … Z=35).
///
/// Returns `None` if any character is outside `[A-Z0-9]`.
pub fn alphanumeric_to_digits(value: &str) -> Option<String> {
    let mut digits = String::with_capacity(value.len() * 2);
    for c in value.chars() {
        match c {
            '0'..='9' => digits.push(c),
            'A'..='Z' => {
                let n = c as u32 - 'A' as u32 + 10;
                digits.push_str(&n.to_string());
            }
            _ => return None,
        }
    }
    Some(digits)
}

/// ISO 7064 MOD 97-10 remainder of an uppercase alphanumeric string.
///
/// The caller is responsible for any rearrangement (IBAN and RF both move
/// their first four characters to the end before checking).
pub fn iso7064_mod97_10(value: &str) -> Option<u32> {
    alphanumeric_to_digits(value).map(|digits| mod97(&digits))
}

/// Check an ISO 11649 structured creditor reference (`RFkk…`).
///
/// The input is sanitized first, so `"RF18 5390 0754 7034"` is accepted.
/// Valid references are 5 to 25 characters, start with `RF` followed by two
/// check digits, and leave a remainder of 1 under MOD 97-10.
pub fn is_valid_creditor_reference(reference: &str) -> bool {
    let rf = sanitize_alphanumeric(reference);
    if !(5..=25).contains(&rf.len()) || !rf.starts_with("RF") {
        return false;
    }
    if !rf.as_bytes()[2..4].iter().all(u8::is_ascii_digit) {
        return false;
    }
    let rearranged = format!("{}{}", &rf[4..], &rf[..4]);
    iso7064_mod97_10(&rearranged) == Some(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mod97_small_values() {
        assert_eq!(mod97("0"), 0);
        assert_eq!(mod97("96"), 96);
        assert_eq!(mod97("97"), 0);
        assert_eq!(mod97("98"), 1);
    }

    #[test]
    fn mod97_exceeds_u64() {
        // 30 digits, well past u64::MAX
        let digits = "123456789012345678901234567890";
        let expected = (digits.parse::<u128>().unwrap() % 97) as u32;
        assert_eq!(mod97(digits), expected);
    }

    #[test]
    fn mod97_skips_separators() {
        assert_eq!(mod97("533/7367/152"), 61);
    }

    #[test]
    fn letters_expand_to_two_digits() {
        assert_eq!(alphanumeric_to_digits("A").as_deref(), Some("10"));
        assert_eq!(alphanumeric_to_digits("Z").as_deref(), Some("35"));
        assert_eq!(alphanumeric_to_digits("BE00").as_deref(), Some("111400"));
    }

    #[test]
    fn lowercase_is_rejected() {
        assert_eq!(alphanumeric_to_digits("be"), None);
        assert_eq!(iso7064_mod97_10("RF-18"), None);
    }

    #[test]
    fn creditor_reference_valid() {
        assert!(is_valid_creditor_reference("RF18539007547034"));
        assert!(is_valid_creditor_reference("RF18 5390 0754 7034"));
        assert!(is_valid_creditor_reference("rf18000000000539007547034"));
    }

    #[test]
    fn creditor_reference_invalid() {
        assert!(!is_valid_creditor_reference("RF19539007547034"));
        assert!(!is_valid_creditor_reference("RF18"));
        assert!(!is_valid_creditor_reference("XX18539007547034"));
        assert!(!is_valid_creditor_reference("RFAB539007547034"));
        assert!(!is_valid_creditor_reference(""));
    }
}
