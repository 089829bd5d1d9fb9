use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Service tag, first line of every EPC QR payload.
pub const SERVICE_TAG: &str = "BCD";
/// Payload version (002 makes the BIC optional inside the EEA).
pub const VERSION: &str = "002";
/// Character set indicator, 1 = UTF-8.
pub const CHARSET_UTF8: &str = "1";
/// Identification code for SEPA credit transfer.
pub const IDENTIFICATION: &str = "SCT";
/// Default (and only EPC-permitted) currency.
pub const DEFAULT_CURRENCY: &str = "EUR";
/// Separator between payload fields.
pub const LINE_SEPARATOR: char = '\n';
/// Number of fields in a version 002 payload.
pub const FIELD_COUNT: usize = 12;

/// The twelve positional fields of an EPC069-12 payload, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PayloadField {
    ServiceTag,
    Version,
    CharacterSet,
    Identification,
    /// AT-23: BIC of the beneficiary bank.
    Bic,
    /// AT-21: Name of the beneficiary.
    BeneficiaryName,
    /// AT-20: Account number of the beneficiary.
    Iban,
    /// AT-04: Currency and amount, e.g. "EUR12.50".
    Amount,
    /// AT-44: Purpose of the credit transfer.
    Purpose,
    /// AT-05: Structured remittance (ISO 11649 creditor reference).
    CreditorReference,
    /// AT-05: Unstructured remittance text.
    RemittanceText,
    /// Beneficiary to originator information.
    Information,
}

impl PayloadField {
    /// All fields in wire order.
    pub const ALL: [PayloadField; FIELD_COUNT] = [
        PayloadField::ServiceTag,
        PayloadField::Version,
        PayloadField::CharacterSet,
        PayloadField::Identification,
        PayloadField::Bic,
        PayloadField::BeneficiaryName,
        PayloadField::Iban,
        PayloadField::Amount,
        PayloadField::Purpose,
        PayloadField::CreditorReference,
        PayloadField::RemittanceText,
        PayloadField::Information,
    ];

    /// Zero-based line index in the payload.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display label used in diagnostics.
    pub fn label(self) -> &'static str {
        match self {
            PayloadField::ServiceTag => "Service Tag",
            PayloadField::Version => "Version",
            PayloadField::CharacterSet => "Character Set",
            PayloadField::Identification => "Identification",
            PayloadField::Bic => "BIC",
            PayloadField::BeneficiaryName => "Beneficiary Name",
            PayloadField::Iban => "IBAN",
            PayloadField::Amount => "Amount",
            PayloadField::Purpose => "Purpose",
            PayloadField::CreditorReference => "Creditor Reference",
            PayloadField::RemittanceText => "Remittance Text",
            PayloadField::Information => "Beneficiary Info",
        }
    }

    /// Fixed literal expected at this position, `None` for free-form fields.
    pub fn expected(self) -> Option<&'static str> {
        match self {
            PayloadField::ServiceTag => Some(SERVICE_TAG),
            PayloadField::Version => Some(VERSION),
            PayloadField::CharacterSet => Some(CHARSET_UTF8),
            PayloadField::Identification => Some(IDENTIFICATION),
            _ => None,
        }
    }

    /// Whether the field must not be empty.
    pub fn is_mandatory(self) -> bool {
        matches!(self, PayloadField::BeneficiaryName | PayloadField::Iban)
    }
}

/// An EPC069-12 SEPA credit transfer payload.
///
/// Built with [`PaymentPayloadBuilder`](super::PaymentPayloadBuilder). IBAN
/// and BIC are sanitized on construction; the free-text fields keep their raw
/// value and are trimmed and truncated only when serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentPayload {
    pub(crate) iban: String,
    pub(crate) bic: String,
    pub(crate) beneficiary_name: String,
    pub(crate) amount: Decimal,
    pub(crate) currency: String,
    pub(crate) purpose_code: String,
    pub(crate) remittance_text: String,
    pub(crate) creditor_reference: String,
    pub(crate) information: String,
}

impl PaymentPayload {
    /// Sanitized IBAN (uppercase alphanumeric).
    pub fn iban(&self) -> &str {
        &self.iban
    }

    /// Sanitized BIC, empty when not given.
    pub fn bic(&self) -> &str {
        &self.bic
    }

    pub fn beneficiary_name(&self) -> &str {
        &self.beneficiary_name
    }

    /// Amount; zero or negative means the payer enters it.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn purpose_code(&self) -> &str {
        &self.purpose_code
    }

    pub fn remittance_text(&self) -> &str {
        &self.remittance_text
    }

    pub fn creditor_reference(&self) -> &str {
        &self.creditor_reference
    }

    pub fn information(&self) -> &str {
        &self.information
    }

    /// Payload version, always "002".
    pub fn version(&self) -> &'static str {
        VERSION
    }

    /// Character set indicator, always "1" (UTF-8).
    pub fn charset(&self) -> &'static str {
        CHARSET_UTF8
    }

    /// Whether the IBAN passes the structural and MOD 97-10 check.
    pub fn has_valid_iban(&self) -> bool {
        super::iban::validate_iban(&self.iban)
    }
}
