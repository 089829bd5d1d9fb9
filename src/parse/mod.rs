//! Line-by-line validation of raw EPC069-12 payload text.
//!
//! The validator accumulates every problem it finds instead of stopping at
//! the first one, so a pasted payload can be fixed in a single pass. Only a
//! wrong line count stops it before the field checks.
//!
//! # Example
//!
//! ```
//! use epcqr::parse::*;
//!
//! // Copied without the trailing empty Information line
//! let raw = "BCD\n002\n1\nSCT\nGEBABEBB\nBreutech Solutions\nBE44001981860045\nEUR1.00\nIVPT\n\n+++776/1504/73874+++";
//! let report = validate_qr_string(raw);
//! assert!(report.valid);
//! for line in report.messages() {
//!     println!("{line}");
//! }
//! ```

mod diagnostics;
mod payload;
mod validator;

pub use diagnostics::{Diagnostic, Severity};
pub use payload::ParsedPayload;
pub use validator::{ParseReport, validate_qr_string};
