use serde::{Deserialize, Serialize};

use super::request::GeneratedQr;
use crate::core::QrError;

/// Largest payload EPC069-12 allows inside the QR code.
pub const MAX_PAYLOAD_BYTES: usize = 331;

/// QR error-correction level. EPC069-12 requires at least `M`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCorrection {
    L,
    #[default]
    M,
    Q,
    H,
}

/// Options forwarded to the barcode encoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub error_correction: ErrorCorrection,
    /// Pixels per module.
    pub scale: u32,
    /// Quiet zone in modules.
    pub border: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            error_correction: ErrorCorrection::M,
            scale: 10,
            border: 4,
        }
    }
}

/// An external QR image encoder. The payload is always UTF-8 text; image
/// format is up to the implementation.
pub trait BarcodeEncoder {
    fn encode(&self, payload: &str, options: &RenderOptions) -> Result<Vec<u8>, QrError>;
}

/// Hand a generated payload to an encoder.
///
/// Rejects payloads over [`MAX_PAYLOAD_BYTES`] and error-correction levels
/// below `M` without calling the encoder.
pub fn render<E: BarcodeEncoder + ?Sized>(
    qr: &GeneratedQr,
    encoder: &E,
    options: &RenderOptions,
) -> Result<Vec<u8>, QrError> {
    if qr.payload.len() > MAX_PAYLOAD_BYTES {
        return Err(QrError::Encoding(format!(
            "payload is {} bytes, EPC069-12 allows at most {MAX_PAYLOAD_BYTES}",
            qr.payload.len()
        )));
    }
    if options.error_correction == ErrorCorrection::L {
        return Err(QrError::Encoding(
            "EPC069-12 requires error correction level M or higher".into(),
        ));
    }
    tracing::debug!(
        bytes = qr.payload.len(),
        level = ?options.error_correction,
        "encoding payment QR"
    );
    encoder.encode(&qr.payload, options)
}
