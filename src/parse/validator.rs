use serde::{Deserialize, Serialize};

use super::diagnostics::{Diagnostic, Diagnostics, Severity};
use super::payload::ParsedPayload;
use crate::core::{FIELD_COUNT, LINE_SEPARATOR, PayloadField};

/// Outcome of validating a raw payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseReport {
    /// True iff no `Error` diagnostic was recorded.
    pub valid: bool,
    /// Every finding, in the order the checks ran.
    pub diagnostics: Vec<Diagnostic>,
    /// The 12 parsed fields, absent when the line count was wrong.
    pub payload: Option<ParsedPayload>,
}

impl ParseReport {
    /// Diagnostics rendered as text lines.
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics.iter().map(|d| d.to_string()).collect()
    }

    /// Only the `Error` diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
    }
}

/// Split the raw text into exactly 12 lines, tolerating a dropped trailing
/// Information line and surplus trailing blank lines.
fn normalize_lines<'a>(raw: &'a str, diags: &mut Diagnostics) -> Option<Vec<&'a str>> {
    let mut lines: Vec<&str> = raw.split(LINE_SEPARATOR).collect();

    if lines.len() == FIELD_COUNT - 1 {
        tracing::warn!("payload has 11 lines, appending empty Information line");
        diags.warn(
            None,
            "payload has 11 lines; appended implied empty 'Beneficiary Info' field (line 12), \
             usually lost when copying without the final newline",
        );
        lines.push("");
    }

    while lines.len() > FIELD_COUNT && lines.last() == Some(&"") {
        lines.pop();
    }

    if lines.len() != FIELD_COUNT {
        diags.error(
            None,
            format!(
                "expected {FIELD_COUNT} lines, got {}; lines found: {:?}",
                lines.len(),
                lines
            ),
        );
        return None;
    }

    diags.info(None, format!("line count: {FIELD_COUNT}"));
    Some(lines)
}

#[cfg(feature = "ogm")]
fn check_ogm_digits(value: &str, line: Option<usize>, diags: &mut Diagnostics) {
    if let Err(e) = crate::ogm::OgmReference::parse(value) {
        diags.warn(line, format!("{}: {e}", PayloadField::RemittanceText.label()));
    }
}

#[cfg(not(feature = "ogm"))]
fn check_ogm_digits(_value: &str, _line: Option<usize>, _diags: &mut Diagnostics) {}

fn check_field(field: PayloadField, values: &[&str], diags: &mut Diagnostics) {
    let line = Some(field.index() + 1);
    let label = field.label();
    let value = values[field.index()];

    if let Some(expected) = field.expected() {
        if value != expected {
            diags.error(line, format!("{label}: expected '{expected}', got '{value}'"));
        }
    }

    if field.is_mandatory() && value.is_empty() {
        diags.error(line, format!("{label}: mandatory field is empty"));
    }

    if field == PayloadField::CreditorReference && !value.is_empty() {
        if !values[PayloadField::RemittanceText.index()].is_empty() {
            diags.error(
                line,
                "both Creditor Reference (line 10) and Remittance Text (line 11) are present",
            );
        }
        if !value.starts_with("RF") {
            diags.error(
                line,
                format!("{label}: must start with 'RF' (ISO 11649), found '{value}'"),
            );
        }
    }

    if field == PayloadField::RemittanceText && value.starts_with("+++") && value.ends_with("+++")
    {
        diags.info(line, format!("{label}: Belgian OGM format detected"));
        check_ogm_digits(value, line, diags);
    }

    let shown = if value.is_empty() { "[empty]" } else { value };
    diags.info(line, format!("{label}: {shown}"));
}

/// Validate a raw EPC069-12 payload line by line.
///
/// Never fails: structural problems are reported as `Error` diagnostics and
/// make the report invalid. All field checks run even after one fails.
pub fn validate_qr_string(raw: &str) -> ParseReport {
    let mut diags = Diagnostics::default();

    let Some(lines) = normalize_lines(raw, &mut diags) else {
        tracing::debug!("payload rejected on line count");
        return ParseReport {
            valid: false,
            diagnostics: diags.into_vec(),
            payload: None,
        };
    };

    let values: Vec<&str> = lines.iter().map(|l| l.trim()).collect();
    for field in PayloadField::ALL {
        check_field(field, &values, &mut diags);
    }

    let errors = diags.error_count();
    let valid = errors == 0;
    if valid {
        diags.info(None, "result: passed (compliant with EPC069-12)");
    } else {
        diags.info(None, format!("result: failed ({errors} errors)"));
    }
    tracing::debug!(valid, errors, "validated EPC payload");

    ParseReport {
        valid,
        diagnostics: diags.into_vec(),
        payload: Some(ParsedPayload::from_values(&values)),
    }
}
