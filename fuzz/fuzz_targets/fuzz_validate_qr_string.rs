#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic, whatever the input.
        let report = epcqr::parse::validate_qr_string(s);
        assert_eq!(report.valid, report.errors().next().is_none());
        if let Some(parsed) = &report.payload {
            let _ = epcqr::PaymentPayload::try_from(parsed);
        }
    }
});
