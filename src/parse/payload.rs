use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{
    DEFAULT_CURRENCY, FIELD_COUNT, PayloadField, PaymentPayload, PaymentPayloadBuilder, QrError,
};

/// The twelve trimmed field values of a payload that passed the line-count gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedPayload {
    values: Vec<String>,
}

impl ParsedPayload {
    pub(crate) fn from_values(values: &[&str]) -> Self {
        debug_assert_eq!(values.len(), FIELD_COUNT);
        Self {
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    /// Trimmed value of a field.
    pub fn field(&self, field: PayloadField) -> &str {
        &self.values[field.index()]
    }

    /// Fields with their values, in wire order.
    pub fn iter(&self) -> impl Iterator<Item = (PayloadField, &str)> {
        PayloadField::ALL
            .into_iter()
            .zip(self.values.iter().map(String::as_str))
    }
}

/// Split an amount field like `EUR12.50` into currency and value.
fn parse_amount(field: &str) -> Result<(String, Decimal), QrError> {
    if field.is_empty() {
        return Ok((DEFAULT_CURRENCY.to_string(), Decimal::ZERO));
    }
    let currency = field
        .get(..3)
        .filter(|c| c.bytes().all(|b| b.is_ascii_uppercase()))
        .ok_or_else(|| QrError::Parse(format!("amount '{field}' has no currency prefix")))?;
    let amount = Decimal::from_str(&field[3..])
        .map_err(|e| QrError::Parse(format!("amount '{field}': {e}")))?;
    Ok((currency.to_string(), amount))
}

impl TryFrom<&ParsedPayload> for PaymentPayload {
    type Error = QrError;

    fn try_from(parsed: &ParsedPayload) -> Result<Self, Self::Error> {
        let (currency, amount) = parse_amount(parsed.field(PayloadField::Amount))?;
        Ok(PaymentPayloadBuilder::new(parsed.field(PayloadField::Iban))
            .bic(parsed.field(PayloadField::Bic))
            .beneficiary_name(parsed.field(PayloadField::BeneficiaryName))
            .amount(amount)
            .currency(currency)
            .purpose_code(parsed.field(PayloadField::Purpose))
            .creditor_reference(parsed.field(PayloadField::CreditorReference))
            .remittance_text(parsed.field(PayloadField::RemittanceText))
            .information(parsed.field(PayloadField::Information))
            .build())
    }
}
