#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(ogm) = epcqr::ogm::OgmReference::parse(s) {
            assert_eq!(epcqr::ogm::OgmReference::parse(&ogm.to_string()), Ok(ogm));
        }
        let _ = epcqr::ogm::generate_ogm(Some(s));
    }
});
