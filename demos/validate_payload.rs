use epcqr::parse::*;

// Copied from a banking app without the final newline: 11 lines.
const SAMPLE: &str = "BCD
002
1
SCT
GEBABEBB
Breutech Solutions
BE44001981860045
EUR1.00
IVPT

+++776/1504/73874+++";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let input = std::env::args().nth(1).map(|path| {
        std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("cannot read {path}: {e}"))
    });
    let raw = input.as_deref().unwrap_or(SAMPLE);

    println!("--- START VALIDATION ---");
    let report = validate_qr_string(raw);
    for line in report.messages() {
        println!("{line}");
    }
    println!("--- VALIDATION COMPLETE ---");
    println!("RESULT: {}", if report.valid { "PASSED" } else { "FAILED" });
}
