//! Serialization of a [`PaymentPayload`] into the 12-line EPC069-12 text.

use rust_decimal::Decimal;

use super::error::{QrError, ValidationError};
use super::sanitize::*;
use super::types::*;

/// Sanitized copies of the payload's variable fields.
///
/// Serialization and validation work on these; the payload itself is never
/// modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SanitizedFields {
    pub iban: String,
    pub bic: String,
    pub beneficiary_name: String,
    pub currency: String,
    pub purpose_code: String,
    pub creditor_reference: String,
    pub remittance_text: String,
    pub information: String,
}

impl SanitizedFields {
    pub fn from_payload(payload: &PaymentPayload) -> Self {
        Self {
            iban: sanitize_alphanumeric(&payload.iban),
            bic: sanitize_alphanumeric(&payload.bic),
            beneficiary_name: sanitize_text(&payload.beneficiary_name, MAX_NAME_LEN),
            currency: sanitize_line(&payload.currency),
            purpose_code: sanitize_line(&payload.purpose_code),
            creditor_reference: sanitize_alphanumeric(&payload.creditor_reference),
            remittance_text: sanitize_text(&payload.remittance_text, MAX_REMITTANCE_LEN),
            information: sanitize_text(&payload.information, MAX_INFORMATION_LEN),
        }
    }
}

/// The serializer's business rules, in the order they are enforced.
pub(crate) fn business_rule_errors(fields: &SanitizedFields) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if fields.beneficiary_name.is_empty() {
        errors.push(ValidationError::with_rule(
            "beneficiary_name",
            "beneficiary name required",
            "AT-21",
        ));
    }

    if !fields.remittance_text.is_empty() && !fields.creditor_reference.is_empty() {
        errors.push(ValidationError::with_rule(
            "creditor_reference",
            "cannot set both remittance text and creditor reference",
            "AT-05",
        ));
    }

    if !fields.creditor_reference.is_empty() && !fields.creditor_reference.starts_with("RF") {
        errors.push(ValidationError::with_rule(
            "creditor_reference",
            "structured reference must start with RF (ISO 11649); use remittance text for other formats",
            "AT-05",
        ));
    }

    errors
}

/// Render the amount field: currency followed by the amount with exactly two
/// decimals, or an empty string for an open amount.
pub fn format_amount(currency: &str, amount: Decimal) -> String {
    if amount > Decimal::ZERO {
        format!("{currency}{:.2}", amount.round_dp(2))
    } else {
        String::new()
    }
}

/// Serialize a payload into its EPC069-12 text form.
///
/// Fails with [`QrError::Validation`] when the beneficiary name is missing,
/// when both remittance text and creditor reference are set, or when the
/// creditor reference does not start with `RF`.
pub fn serialize(payload: &PaymentPayload) -> Result<String, QrError> {
    let fields = SanitizedFields::from_payload(payload);

    if let Some(err) = business_rule_errors(&fields).into_iter().next() {
        tracing::debug!(error = %err, "payload rejected");
        return Err(QrError::Validation(err));
    }

    let amount = format_amount(&fields.currency, payload.amount);

    let lines: [&str; FIELD_COUNT] = [
        SERVICE_TAG,
        VERSION,
        CHARSET_UTF8,
        IDENTIFICATION,
        &fields.bic,
        &fields.beneficiary_name,
        &fields.iban,
        &amount,
        &fields.purpose_code,
        &fields.creditor_reference,
        &fields.remittance_text,
        &fields.information,
    ];

    let out = lines.join("\n");
    tracing::debug!(bytes = out.len(), open_amount = amount.is_empty(), "serialized EPC payload");
    Ok(out)
}

impl PaymentPayload {
    /// Serialize into the 12-line EPC069-12 payload. See [`serialize`].
    pub fn to_qr_string(&self) -> Result<String, QrError> {
        serialize(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PaymentPayloadBuilder;
    use rust_decimal_macros::dec;

    fn base() -> PaymentPayloadBuilder {
        PaymentPayloadBuilder::new("BE44001981860045").beneficiary_name("Test Company")
    }

    #[test]
    fn amount_two_decimals() {
        assert_eq!(format_amount("EUR", dec!(100)), "EUR100.00");
        assert_eq!(format_amount("EUR", dec!(1.5)), "EUR1.50");
        assert_eq!(format_amount("EUR", dec!(0.01)), "EUR0.01");
    }

    #[test]
    fn amount_rounds_half_even() {
        assert_eq!(format_amount("EUR", dec!(1.005)), "EUR1.00");
        assert_eq!(format_amount("EUR", dec!(1.015)), "EUR1.02");
    }

    #[test]
    fn open_amount_is_empty() {
        assert_eq!(format_amount("EUR", Decimal::ZERO), "");
        assert_eq!(format_amount("EUR", dec!(-5)), "");
    }

    #[test]
    fn header_lines() {
        let qr = base().build().to_qr_string().unwrap();
        let lines: Vec<&str> = qr.split('\n').collect();
        assert_eq!(lines.len(), 12);
        assert_eq!(&lines[..4], &["BCD", "002", "1", "SCT"]);
    }

    #[test]
    fn missing_name() {
        let err = PaymentPayloadBuilder::new("BE44001981860045")
            .beneficiary_name("   ")
            .build()
            .to_qr_string()
            .unwrap_err();
        match err {
            QrError::Validation(e) => {
                assert_eq!(e.field, "beneficiary_name");
                assert!(e.message.contains("beneficiary name required"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn both_references_rejected() {
        let err = base()
            .creditor_reference("RF18")
            .remittance_text("Some text")
            .build()
            .to_qr_string()
            .unwrap_err();
        assert!(err.to_string().contains("cannot set both"));
    }

    #[test]
    fn non_rf_reference_rejected() {
        let err = base()
            .creditor_reference("123456")
            .build()
            .to_qr_string()
            .unwrap_err();
        assert!(err.to_string().contains("structured reference must start with RF"));
    }

    #[test]
    fn mutual_exclusion_checked_before_rf_prefix() {
        let err = base()
            .creditor_reference("123456")
            .remittance_text("text")
            .build()
            .to_qr_string()
            .unwrap_err();
        assert!(err.to_string().contains("cannot set both"));
    }

    #[test]
    fn creditor_reference_sanitized() {
        let qr = base()
            .creditor_reference("rf18 5390 0754 7034")
            .build()
            .to_qr_string()
            .unwrap();
        assert_eq!(qr.split('\n').nth(9), Some("RF18539007547034"));
    }

    #[test]
    fn line_breaks_never_add_lines() {
        let qr = PaymentPayloadBuilder::new("BE44001981860045")
            .beneficiary_name("ACME\nGmbH")
            .remittance_text("Invoice\n42")
            .information("line one\r\nline two")
            .purpose_code("IVPT\n")
            .build()
            .to_qr_string()
            .unwrap();
        let lines: Vec<&str> = qr.split('\n').collect();
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[5], "ACME GmbH");
        assert_eq!(lines[8], "IVPT");
        assert_eq!(lines[10], "Invoice 42");
        assert_eq!(lines[11], "line one  line two");
    }

    #[test]
    fn serialization_does_not_mutate() {
        let p = base().remittance_text("  spaced  ").build();
        let _ = p.to_qr_string().unwrap();
        assert_eq!(p.remittance_text(), "  spaced  ");
    }
}
