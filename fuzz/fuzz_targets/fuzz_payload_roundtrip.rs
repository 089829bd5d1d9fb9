#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    // Unit separator splits the input into name / remittance / info.
    let mut parts = s.splitn(3, '\u{1f}');
    let name = parts.next().unwrap_or_default();
    let remittance = parts.next().unwrap_or_default();
    let info = parts.next().unwrap_or_default();

    let payload = epcqr::PaymentPayloadBuilder::new("BE44001981860045")
        .beneficiary_name(name)
        .remittance_text(remittance)
        .information(info)
        .build();

    if let Ok(qr) = payload.to_qr_string() {
        assert_eq!(qr.split('\n').count(), 12, "{qr:?}");
        assert!(epcqr::parse::validate_qr_string(&qr).valid, "{qr:?}");
    }
});
