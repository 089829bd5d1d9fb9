//! IBAN structural and checksum validation (ISO 13616 / ISO 7064 MOD 97-10).

use super::checksum::{alphanumeric_to_digits, mod97};
use super::sanitize::sanitize_alphanumeric;

/// Check that a sanitized IBAN has the generic shape: two letters, two
/// digits, then 1 to 30 alphanumerics.
fn has_iban_structure(iban: &str) -> bool {
    let bytes = iban.as_bytes();
    (5..=34).contains(&bytes.len())
        && bytes[..2].iter().all(u8::is_ascii_uppercase)
        && bytes[2..4].iter().all(u8::is_ascii_digit)
        && bytes[4..]
            .iter()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
}

/// Validate an IBAN by structure and MOD 97-10 checksum (no registry lookup).
///
/// The input is sanitized first, so spacing and lowercase are accepted.
///
/// ```
/// use epcqr::core::validate_iban;
///
/// assert!(validate_iban("BE44 0019 8186 0045"));
/// assert!(!validate_iban("BE44001981860046"));
/// ```
pub fn validate_iban(iban: &str) -> bool {
    let iban = sanitize_alphanumeric(iban);
    if iban.is_empty() || !has_iban_structure(&iban) {
        return false;
    }
    let rearranged = format!("{}{}", &iban[4..], &iban[..4]);
    match alphanumeric_to_digits(&rearranged) {
        Some(digits) => mod97(&digits) == 1,
        None => false,
    }
}
