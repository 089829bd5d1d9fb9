//! Belgian structured communication (OGM / VCS).
//!
//! An OGM is 10 data digits followed by 2 check digits (the data modulo 97,
//! with 97 standing in for 0), written `+++DDD/DDDD/DDDDD+++`. Belgian banks
//! also print the `***` variant; both are accepted when parsing.
//!
//! # Example
//!
//! ```
//! use epcqr::ogm::*;
//!
//! assert_eq!(generate_ogm(Some("5337367152")), "+++533/7367/15261+++");
//!
//! let ogm: OgmReference = "+++533/7367/15261+++".parse().unwrap();
//! assert_eq!(ogm.check_digits(), 61);
//! ```

mod reference;

pub use reference::{OGM_BASE_DIGITS, OgmError, OgmReference, generate_ogm, generate_ogm_with};
