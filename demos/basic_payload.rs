use epcqr::core::*;
use rust_decimal_macros::dec;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // ── 1. A complete payload ─────────────────────────────────────────
    let payload = PaymentPayloadBuilder::new("BE44 0019 8186 0045")
        .bic("GEBA BE BB")
        .beneficiary_name("Breutech Solutions")
        .amount(dec!(49.90))
        .purpose_code("IVPT")
        .remittance_text("Invoice 2024-017")
        .build();

    println!("IBAN valid: {}", payload.has_valid_iban());
    match payload.to_qr_string() {
        Ok(qr) => println!("=== Payload ===\n{qr}"),
        Err(e) => println!("  Serialization failed: {e}"),
    }

    // ── 2. Open amount with a structured reference ────────────────────
    let open = PaymentPayloadBuilder::new("BE68539007547034")
        .beneficiary_name("Stad Gent")
        .creditor_reference("RF18 5390 0754 7034")
        .build();
    println!("\n=== Open amount ===\n{}", open.to_qr_string().expect("valid payload"));

    // ── 3. Rejected payloads ──────────────────────────────────────────
    println!("\n=== Rejections ===");
    let both = open.to_builder().remittance_text("also text").build();
    if let Err(e) = both.to_qr_string() {
        println!("  {e}");
    }

    let sloppy = PaymentPayloadBuilder::new("BE44001981860046")
        .bic("GEBA")
        .amount(dec!(-1))
        .purpose_code("TAXCs")
        .build();
    for e in validate_payload(&sloppy) {
        println!("  {e}");
    }
}
