use epcqr::ogm::*;

fn main() {
    // Deterministic from a base number
    println!("{}", generate_ogm(Some("5337367152")));

    // Random
    for _ in 0..3 {
        println!("{}", generate_ogm(None));
    }

    // Checking what a customer typed
    for typed in ["+++533/7367/15261+++", "***533/7367/15261***", "+++533/7367/15262+++"] {
        match OgmReference::parse(typed) {
            Ok(ogm) => println!("{typed}: ok ({})", ogm.digits()),
            Err(e) => println!("{typed}: {e}"),
        }
    }
}
