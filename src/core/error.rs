use thiserror::Error;

/// Errors that can occur while building, serializing or rendering a payment payload.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QrError {
    /// A business rule of the EPC069-12 payload was violated.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The IBAN failed the structural or MOD 97-10 check.
    #[error("invalid IBAN checksum or format: {0}")]
    InvalidIban(String),

    /// A parsed payload could not be turned back into a payment payload.
    #[error("parse error: {0}")]
    Parse(String),

    /// The external barcode encoder rejected the payload.
    #[error("encoding error: {0}")]
    Encoding(String),
}

/// A single validation error with field name and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Payload field the error applies to (e.g. "creditor_reference").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
    /// EPC069-12 attribute ID if applicable (e.g. "AT-21").
    pub rule: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(rule) = &self.rule {
            write!(f, "[{}] {}: {}", rule, self.field, self.message)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    /// Create a validation error without an attribute ID.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: None,
        }
    }

    /// Create a validation error tied to an EPC069-12 attribute.
    pub fn with_rule(
        field: impl Into<String>,
        message: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: Some(rule.into()),
        }
    }
}
