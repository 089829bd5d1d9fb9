//! Property-based tests for payload serialization, IBAN checks and OGM generation.
//!
//! Run with: `cargo test --features all --test proptest_tests`

#![cfg(all(feature = "ogm", feature = "parse"))]

use epcqr::core::*;
use epcqr::ogm::*;
use epcqr::parse::validate_qr_string;
use proptest::prelude::*;
use rust_decimal::Decimal;

// ── Proptest Strategies ─────────────────────────────────────────────────────

/// Generate an amount between 0.00 and 999999999.99 (zero means open amount).
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Free text, including embedded line breaks and tabs.
fn arb_text(max: usize) -> impl Strategy<Value = String> {
    proptest::string::string_regex(&format!("[A-Za-z0-9 .,/+äöüé\\n\\r\\t-]{{0,{max}}}")).unwrap()
}

fn arb_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z][A-Za-z0-9 .&\\n\\r-]{0,90}").unwrap()
}

fn arb_purpose() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        proptest::sample::select(purpose_codes::purpose_codes().to_vec())
            .prop_map(|(code, _)| code.to_string()),
    ]
}

/// Either remittance text or an RF creditor reference, never both.
fn arb_reference() -> impl Strategy<Value = (String, String)> {
    prop_oneof![
        arb_text(160).prop_map(|t| (t, String::new())),
        "[0-9A-Z]{1,21}".prop_map(|r| (String::new(), format!("RF00{r}"))),
    ]
}

fn arb_payload() -> impl Strategy<Value = PaymentPayload> {
    (
        arb_name(),
        arb_amount(),
        arb_purpose(),
        arb_reference(),
        arb_text(90),
    )
        .prop_map(|(name, amount, purpose, (remittance, reference), info)| {
            PaymentPayloadBuilder::new("BE44 0019 8186 0045")
                .bic("GEBABEBB")
                .beneficiary_name(name)
                .amount(amount)
                .purpose_code(purpose)
                .remittance_text(remittance)
                .creditor_reference(reference)
                .information(info)
                .build()
        })
}

/// Generate a valid IBAN by computing its check digits.
fn arb_valid_iban() -> impl Strategy<Value = String> {
    ("[A-Z]{2}", "[0-9]{4}[0-9A-Z]{4,22}").prop_map(|(country, bban)| {
        let digits = alphanumeric_to_digits(&format!("{bban}{country}00")).unwrap();
        let check = 98 - mod97(&digits);
        format!("{country}{check:02}{bban}")
    })
}

// ── Property Tests ──────────────────────────────────────────────────────────

proptest! {
    /// Serializing a conflict-free payload always yields 12 lines with the fixed header.
    #[test]
    fn serialized_payload_has_twelve_lines(payload in arb_payload()) {
        let qr = payload.to_qr_string().unwrap();
        let lines: Vec<&str> = qr.split('\n').collect();
        prop_assert_eq!(lines.len(), 12);
        prop_assert_eq!(&lines[..4], &["BCD", "002", "1", "SCT"]);
    }

    /// Serialized payloads always pass the line-by-line validator.
    #[test]
    fn serialized_payload_validates(payload in arb_payload()) {
        let qr = payload.to_qr_string().unwrap();
        let report = validate_qr_string(&qr);
        prop_assert!(report.valid, "{:#?}", report.messages());
    }

    /// Dropping the trailing newline of a payload with empty Information still validates.
    #[test]
    fn truncated_payload_validates(payload in arb_payload()) {
        let qr = payload.to_builder().information("").build().to_qr_string().unwrap();
        let truncated = qr.strip_suffix('\n').unwrap();
        prop_assert!(validate_qr_string(truncated).valid);
    }

    /// Both references set always fails serialization.
    #[test]
    fn both_references_fail(name in arb_name(), text in "[a-z]{1,20}", rf in "[0-9]{1,10}") {
        let result = PaymentPayloadBuilder::new("BE44001981860045")
            .beneficiary_name(name)
            .remittance_text(text)
            .creditor_reference(format!("RF{rf}"))
            .build()
            .to_qr_string();
        prop_assert!(matches!(result, Err(QrError::Validation(_))));
    }

    /// Computed check digits always validate.
    #[test]
    fn generated_ibans_validate(iban in arb_valid_iban()) {
        prop_assert!(validate_iban(&iban), "{}", iban);
    }

    /// Changing one digit of the account part always breaks the checksum.
    #[test]
    fn iban_digit_mutation_fails(iban in arb_valid_iban(), pick in any::<usize>(), delta in 1u32..10) {
        let bytes = iban.as_bytes();
        let digit_positions: Vec<usize> = (4..bytes.len())
            .filter(|&i| bytes[i].is_ascii_digit())
            .collect();
        let pos = digit_positions[pick % digit_positions.len()];
        let d = u32::from(bytes[pos] - b'0');
        let mutated = format!("{}{}{}", &iban[..pos], (d + delta) % 10, &iban[pos + 1..]);
        prop_assert!(!validate_iban(&mutated), "{}", mutated);
    }

    /// OGM output always has the +++DDD/DDDD/DDDDD+++ shape.
    #[test]
    fn ogm_format(base in ".{0,20}") {
        let ogm = generate_ogm(Some(base.as_str()));
        let bytes = ogm.as_bytes();
        prop_assert_eq!(bytes.len(), 20);
        prop_assert!(ogm.starts_with("+++") && ogm.ends_with("+++"));
        prop_assert_eq!(bytes[6], b'/');
        prop_assert_eq!(bytes[11], b'/');
        for (i, b) in bytes.iter().enumerate() {
            if !matches!(i, 0..=2 | 6 | 11 | 17..=19) {
                prop_assert!(b.is_ascii_digit(), "{}", ogm);
            }
        }
    }

    /// The last two digits are always base % 97 (0 → 97).
    #[test]
    fn ogm_check_digits(base in "[0-9]{0,14}") {
        let ogm = generate_ogm(Some(base.as_str()));
        let digits: String = ogm.chars().filter(char::is_ascii_digit).collect();
        let data: u64 = digits[..10].parse().unwrap();
        let check: u64 = digits[10..].parse().unwrap();
        let expected = match data % 97 { 0 => 97, c => c };
        prop_assert_eq!(check, expected);
    }

    /// Parsing a generated OGM gives back the same reference.
    #[test]
    fn ogm_parse_round_trip(base in 0u64..10_000_000_000) {
        let ogm = OgmReference::from_number(base);
        prop_assert_eq!(OgmReference::parse(&ogm.to_string()), Ok(ogm));
    }

    /// mod97 agrees with native arithmetic where native arithmetic fits.
    #[test]
    fn mod97_matches_u128(n in any::<u128>()) {
        prop_assert_eq!(u128::from(mod97(&n.to_string())), n % 97);
    }
}
