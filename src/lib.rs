//! # epcqr
//!
//! Generation and validation of EPC069-12 "BCD" QR payloads, the
//! pan-European format for QR-code encoded SEPA credit transfers, plus
//! Belgian structured communication (OGM) references.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! Rendering the payload into a QR image is left to an external barcode
//! encoder; see the `generate` module for the seam.
//!
//! ## Quick Start
//!
//! ```rust
//! use epcqr::core::*;
//! use rust_decimal_macros::dec;
//!
//! let payload = PaymentPayloadBuilder::new("BE44 0019 8186 0045")
//!     .bic("GEBABEBB")
//!     .beneficiary_name("Breutech Solutions")
//!     .amount(dec!(1))
//!     .purpose_code("IVPT")
//!     .remittance_text("+++776/1504/73874+++")
//!     .build();
//!
//! assert!(payload.has_valid_iban());
//! assert!(validate_payload(&payload).is_empty());
//!
//! let qr = payload.to_qr_string().unwrap();
//! assert!(qr.starts_with("BCD\n002\n1\nSCT\nGEBABEBB\n"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Payload model, sanitizers, IBAN / RF checksums, serializer |
//! | `ogm` | Belgian OGM generation and parsing (pulls in `rand`) |
//! | `parse` | Line-by-line payload validator with diagnostics |
//! | `generate` | Form-driven generation flow and barcode encoder seam |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "ogm")]
pub mod ogm;

#[cfg(feature = "parse")]
pub mod parse;

#[cfg(feature = "generate")]
pub mod generate;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
