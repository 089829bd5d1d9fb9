//! Form-driven payload generation and the barcode encoder seam.
//!
//! A presentation layer collects raw field values into a [`QrRequest`],
//! calls [`generate_payment_qr`] and hands the resulting payload to any
//! [`BarcodeEncoder`] implementation.
//!
//! # Example
//!
//! ```
//! use epcqr::generate::*;
//! use rust_decimal_macros::dec;
//!
//! let request = QrRequest {
//!     beneficiary_name: "Test Company".into(),
//!     iban: "BE44 0019 8186 0045".into(),
//!     bic: "GEBA BE BB".into(),
//!     amount: dec!(25),
//!     purpose_code: String::new(),
//!     communication: Communication::BelgianOgm { base: Some("5337367152".into()) },
//! };
//!
//! let qr = generate_payment_qr(&request).unwrap();
//! assert_eq!(qr.ogm.as_deref(), Some("+++533/7367/15261+++"));
//! assert!(qr.payload.ends_with("+++533/7367/15261+++\n"));
//! ```

mod render;
mod request;

pub use render::{BarcodeEncoder, ErrorCorrection, MAX_PAYLOAD_BYTES, RenderOptions, render};
pub use request::{Communication, GeneratedQr, QrRequest, generate_payment_qr, generate_payment_qr_with};
