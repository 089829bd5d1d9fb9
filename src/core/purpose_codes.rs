//! SEPA purpose codes (ISO 20022 ExternalPurpose1Code subset).
//!
//! The payload serializes whatever code it is given; this catalogue backs
//! the extended validation and lets a form offer a picklist.

/// Check whether `code` is a known SEPA purpose code.
pub fn is_known_purpose_code(code: &str) -> bool {
    PURPOSE_CODES
        .binary_search_by(|(c, _)| c.cmp(&code))
        .is_ok()
}

/// Human-readable description of a known purpose code.
pub fn purpose_code_description(code: &str) -> Option<&'static str> {
    PURPOSE_CODES
        .binary_search_by(|(c, _)| c.cmp(&code))
        .ok()
        .map(|i| PURPOSE_CODES[i].1)
}

/// All known purpose codes with their descriptions, sorted by code.
pub fn purpose_codes() -> &'static [(&'static str, &'static str)] {
    PURPOSE_CODES
}

/// Sorted for binary search.
static PURPOSE_CODES: &[(&str, &str)] = &[
    ("ACCT", "Account Management"),
    ("BONU", "Bonus Payment"),
    ("CHAR", "Charity Payment"),
    ("COLL", "Collection Payment"),
    ("COMC", "Commercial Payment"),
    ("CPYR", "Copyright"),
    ("DIVD", "Dividend"),
    ("EDUC", "Education"),
    ("GOVT", "Government Payment"),
    ("INSU", "Insurance Premium"),
    ("INTC", "Intra Company Payment"),
    ("INVS", "Investment & Securities"),
    ("IVPT", "Invoice Payment"),
    ("LOAN", "Loan"),
    ("PENS", "Pension Payment"),
    ("RENT", "Rent"),
    ("SALA", "Salary Payment"),
    ("SSBE", "Social Security Benefit"),
    ("SUPP", "Supplier Payment"),
    ("TAXS", "Tax Payment"),
    ("TRAD", "Commercial"),
    ("UTIL", "Utilities"),
];
