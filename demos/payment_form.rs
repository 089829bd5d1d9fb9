use epcqr::generate::*;

/// Stand-in encoder that prints the payload instead of drawing a QR code.
struct TextEncoder;

impl BarcodeEncoder for TextEncoder {
    fn encode(&self, payload: &str, options: &RenderOptions) -> Result<Vec<u8>, epcqr::QrError> {
        println!(
            "[encoder] level {:?}, scale {}, border {}",
            options.error_correction, options.scale, options.border
        );
        Ok(payload.as_bytes().to_vec())
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // What a web form would post
    let form = r#"{
        "beneficiary_name": "Breutech Solutions",
        "iban": "BE44 0019 8186 0045",
        "bic": "GEBA BE BB",
        "amount": "12.50",
        "purpose_code": "IVPT",
        "communication": { "type": "belgian_ogm" }
    }"#;
    let request: QrRequest = serde_json::from_str(form).expect("valid form JSON");

    match generate_payment_qr(&request) {
        Ok(qr) => {
            let image = render(&qr, &TextEncoder, &RenderOptions::default())
                .expect("encoder accepts payload");
            println!("Generated OGM: {}", qr.ogm.as_deref().unwrap_or("-"));
            println!("{} bytes:\n{}", image.len(), qr.payload);
        }
        Err(e) => println!("Validation Error: {e}"),
    }

    let mut bad = request.clone();
    bad.iban = "BE44001981860046".into();
    if let Err(e) = generate_payment_qr(&bad) {
        println!("Validation Error: {e}");
    }
}
