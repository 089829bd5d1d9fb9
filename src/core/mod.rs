//! Core payload types, sanitization, checksums and serialization.
//!
//! This module provides the EPC069-12 payment payload model: a builder,
//! the field sanitizers, IBAN and ISO 11649 checksum validation, and the
//! 12-line serializer.

mod builder;
mod checksum;
mod error;
mod iban;
pub mod purpose_codes;
mod sanitize;
mod serialize;
mod types;
mod validation;

pub use builder::*;
pub use checksum::*;
pub use error::*;
pub use iban::validate_iban;
pub use purpose_codes::is_known_purpose_code;
pub use sanitize::*;
pub use serialize::{format_amount, serialize};
pub use types::*;
pub use validation::*;
