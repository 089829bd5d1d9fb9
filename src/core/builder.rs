use rust_decimal::Decimal;

use super::sanitize::sanitize_alphanumeric;
use super::types::*;

/// Builder for constructing payment payloads.
///
/// ```
/// use epcqr::core::*;
/// use rust_decimal_macros::dec;
///
/// let payload = PaymentPayloadBuilder::new("BE44 0019 8186 0045")
///     .bic("GEBA BE BB")
///     .beneficiary_name("Test Company")
///     .amount(dec!(100.00))
///     .remittance_text("Invoice Jan 2024")
///     .build();
///
/// assert_eq!(payload.iban(), "BE44001981860045");
/// let qr = payload.to_qr_string().unwrap();
/// assert_eq!(qr.split('\n').count(), 12);
/// ```
#[derive(Debug, Clone)]
pub struct PaymentPayloadBuilder {
    iban: String,
    bic: String,
    beneficiary_name: String,
    amount: Decimal,
    currency: String,
    purpose_code: String,
    remittance_text: String,
    creditor_reference: String,
    information: String,
}

impl PaymentPayloadBuilder {
    pub fn new(iban: impl AsRef<str>) -> Self {
        Self {
            iban: sanitize_alphanumeric(iban.as_ref()),
            bic: String::new(),
            beneficiary_name: String::new(),
            amount: Decimal::ZERO,
            currency: DEFAULT_CURRENCY.to_string(),
            purpose_code: String::new(),
            remittance_text: String::new(),
            creditor_reference: String::new(),
            information: String::new(),
        }
    }

    pub fn bic(mut self, bic: impl AsRef<str>) -> Self {
        self.bic = sanitize_alphanumeric(bic.as_ref());
        self
    }

    pub fn beneficiary_name(mut self, name: impl Into<String>) -> Self {
        self.beneficiary_name = name.into();
        self
    }

    /// Amount to pay. Leave at zero for an open amount.
    pub fn amount(mut self, amount: Decimal) -> Self {
        self.amount = amount;
        self
    }

    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.currency = code.into();
        self
    }

    pub fn purpose_code(mut self, code: impl Into<String>) -> Self {
        self.purpose_code = code.into();
        self
    }

    /// Unstructured remittance text. Mutually exclusive with
    /// [`creditor_reference`](Self::creditor_reference).
    pub fn remittance_text(mut self, text: impl Into<String>) -> Self {
        self.remittance_text = text.into();
        self
    }

    /// ISO 11649 structured creditor reference (`RF…`).
    pub fn creditor_reference(mut self, reference: impl Into<String>) -> Self {
        self.creditor_reference = reference.into();
        self
    }

    /// Beneficiary to originator information.
    pub fn information(mut self, info: impl Into<String>) -> Self {
        self.information = info.into();
        self
    }

    /// Build the payload. Business rules are checked when serializing, see
    /// [`PaymentPayload::to_qr_string`].
    pub fn build(self) -> PaymentPayload {
        PaymentPayload {
            iban: self.iban,
            bic: self.bic,
            beneficiary_name: self.beneficiary_name,
            amount: self.amount,
            currency: self.currency,
            purpose_code: self.purpose_code,
            remittance_text: self.remittance_text,
            creditor_reference: self.creditor_reference,
            information: self.information,
        }
    }
}

impl PaymentPayload {
    /// Start a builder pre-filled with this payload's values.
    pub fn to_builder(&self) -> PaymentPayloadBuilder {
        PaymentPayloadBuilder {
            iban: self.iban.clone(),
            bic: self.bic.clone(),
            beneficiary_name: self.beneficiary_name.clone(),
            amount: self.amount,
            currency: self.currency.clone(),
            purpose_code: self.purpose_code.clone(),
            remittance_text: self.remittance_text.clone(),
            creditor_reference: self.creditor_reference.clone(),
            information: self.information.clone(),
        }
    }
}
