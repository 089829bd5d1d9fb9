use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{PaymentPayloadBuilder, QrError, sanitize_alphanumeric, validate_iban};
use crate::ogm::generate_ogm_with;

/// How the payer's reference is communicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Communication {
    /// Free remittance text.
    Unstructured { text: String },
    /// ISO 11649 creditor reference (`RF…`).
    Structured { reference: String },
    /// Belgian OGM, generated from `base` or at random, placed in the
    /// remittance text field.
    BelgianOgm {
        #[serde(default)]
        base: Option<String>,
    },
}

impl Default for Communication {
    fn default() -> Self {
        Communication::Unstructured {
            text: String::new(),
        }
    }
}

/// Raw values as entered in a payment form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrRequest {
    pub beneficiary_name: String,
    pub iban: String,
    #[serde(default)]
    pub bic: String,
    #[serde(default)]
    pub amount: Decimal,
    #[serde(default)]
    pub purpose_code: String,
    #[serde(default)]
    pub communication: Communication,
}

/// A generated, serialized payload ready for a barcode encoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedQr {
    /// The 12-line EPC069-12 payload.
    pub payload: String,
    /// The sanitized IBAN that was checked.
    pub iban: String,
    /// The OGM placed in the remittance field, if one was generated.
    pub ogm: Option<String>,
}

/// Turn form input into a payload, drawing random OGM bases from the thread RNG.
pub fn generate_payment_qr(request: &QrRequest) -> Result<GeneratedQr, QrError> {
    generate_payment_qr_with(request, &mut rand::thread_rng())
}

/// Turn form input into a payload.
///
/// Fails with [`QrError::InvalidIban`] before anything else when the IBAN
/// does not pass the MOD 97-10 check, then with the serializer's
/// [`QrError::Validation`] errors.
pub fn generate_payment_qr_with<R: Rng>(
    request: &QrRequest,
    rng: &mut R,
) -> Result<GeneratedQr, QrError> {
    if !validate_iban(&request.iban) {
        let iban = sanitize_alphanumeric(&request.iban);
        tracing::debug!(%iban, "rejected IBAN");
        return Err(QrError::InvalidIban(iban));
    }

    let amount = if request.amount > Decimal::ZERO {
        request.amount
    } else {
        Decimal::ZERO
    };

    let builder = PaymentPayloadBuilder::new(&request.iban)
        .bic(&request.bic)
        .beneficiary_name(request.beneficiary_name.as_str())
        .amount(amount)
        .purpose_code(request.purpose_code.as_str());

    let mut ogm = None;
    let builder = match &request.communication {
        Communication::Unstructured { text } => builder.remittance_text(text.as_str()),
        Communication::Structured { reference } => builder.creditor_reference(reference.as_str()),
        Communication::BelgianOgm { base } => {
            let generated = generate_ogm_with(base.as_deref(), rng);
            ogm = Some(generated.clone());
            builder.remittance_text(generated)
        }
    };

    let payment = builder.build();
    let payload = payment.to_qr_string()?;
    tracing::debug!(iban = %payment.iban(), ogm = ?ogm, "generated payment QR payload");

    Ok(GeneratedQr {
        payload,
        iban: payment.iban().to_string(),
        ogm,
    })
}
