use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::checksum::is_valid_creditor_reference;
use super::error::ValidationError;
use super::iban::validate_iban;
use super::purpose_codes::is_known_purpose_code;
use super::serialize::{SanitizedFields, business_rule_errors};
use super::types::*;

/// Largest amount an EPC QR code may carry.
pub const MAX_AMOUNT: Decimal = dec!(999999999.99);
/// Smallest non-open amount.
pub const MIN_AMOUNT: Decimal = dec!(0.01);

/// Validate a payload against the EPC069-12 rules.
/// Returns all validation errors found (not just the first).
///
/// This is stricter than serialization: it also checks the IBAN checksum,
/// BIC length, amount range, currency, purpose code and the ISO 11649 check
/// digits of a creditor reference.
pub fn validate_payload(payload: &PaymentPayload) -> Vec<ValidationError> {
    let fields = SanitizedFields::from_payload(payload);
    let mut errors = business_rule_errors(&fields);

    // AT-20: IBAN
    if fields.iban.is_empty() {
        errors.push(ValidationError::with_rule("iban", "IBAN required", "AT-20"));
    } else if !validate_iban(&fields.iban) {
        errors.push(ValidationError::with_rule(
            "iban",
            format!("invalid IBAN checksum or format: {}", fields.iban),
            "AT-20",
        ));
    }

    // AT-23: BIC is optional in version 002 but must be 8 or 11 characters if present
    if !fields.bic.is_empty() && fields.bic.len() != 8 && fields.bic.len() != 11 {
        errors.push(ValidationError::with_rule(
            "bic",
            format!("BIC must be 8 or 11 characters, got {}", fields.bic.len()),
            "AT-23",
        ));
    }

    // AT-04: amount
    if payload.amount > Decimal::ZERO {
        if payload.amount < MIN_AMOUNT {
            errors.push(ValidationError::with_rule(
                "amount",
                format!("amount {} is below {MIN_AMOUNT}", payload.amount),
                "AT-04",
            ));
        } else if payload.amount > MAX_AMOUNT {
            errors.push(ValidationError::with_rule(
                "amount",
                format!("amount {} exceeds {MAX_AMOUNT}", payload.amount),
                "AT-04",
            ));
        }
    } else if payload.amount < Decimal::ZERO {
        errors.push(ValidationError::with_rule(
            "amount",
            "amount must not be negative",
            "AT-04",
        ));
    }

    if payload.currency != DEFAULT_CURRENCY {
        errors.push(ValidationError::new(
            "currency",
            format!("EPC QR payments must be in EUR, got '{}'", payload.currency),
        ));
    }

    // AT-44: purpose
    if !payload.purpose_code.is_empty() && !is_known_purpose_code(&payload.purpose_code) {
        errors.push(ValidationError::with_rule(
            "purpose_code",
            format!("'{}' is not a known SEPA purpose code", payload.purpose_code),
            "AT-44",
        ));
    }

    if fields.creditor_reference.starts_with("RF")
        && !is_valid_creditor_reference(&fields.creditor_reference)
    {
        errors.push(ValidationError::with_rule(
            "creditor_reference",
            format!(
                "'{}' fails the ISO 11649 check digits",
                fields.creditor_reference
            ),
            "AT-05",
        ));
    }

    errors
}
