//! Proof of payment
//!
//! A single image evidencing the bank transfer. The binary payload is what
//! gets uploaded; the preview is a data URL decoded from the same bytes for
//! display only and never transmitted.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

/// Proof image rejections.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProofError {
    /// Empty file selected
    #[error("Proof image is empty")]
    EmptyImage,
    /// Bytes do not look like a supported image format
    #[error("Unrecognized image format, expected PNG, JPEG, GIF or WebP")]
    UnrecognizedFormat,
}

/// A proof-of-payment image pending upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofOfPayment {
    file_name: String,
    content_type: &'static str,
    bytes: Vec<u8>,
    preview: String,
}

fn sniff_content_type(bytes: &[u8]) -> Option<&'static str> {
    match bytes {
        [0x89, b'P', b'N', b'G', ..] => Some("image/png"),
        [0xFF, 0xD8, 0xFF, ..] => Some("image/jpeg"),
        [b'G', b'I', b'F', b'8', ..] => Some("image/gif"),
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => Some("image/webp"),
        _ => None,
    }
}

impl ProofOfPayment {
    /// Build a proof from an image file's name and bytes.
    ///
    /// The content type is sniffed from the leading bytes rather than
    /// trusted from the file name.
    pub fn from_bytes(file_name: impl Into<String>, bytes: Vec<u8>) -> Result<Self, ProofError> {
        if bytes.is_empty() {
            return Err(ProofError::EmptyImage);
        }
        let content_type = sniff_content_type(&bytes).ok_or(ProofError::UnrecognizedFormat)?;
        let preview = format!("data:{};base64,{}", content_type, STANDARD.encode(&bytes));

        Ok(Self {
            file_name: file_name.into(),
            content_type,
            bytes,
            preview,
        })
    }

    /// File name sent with the upload.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Sniffed MIME type.
    pub fn content_type(&self) -> &'static str {
        self.content_type
    }

    /// The binary payload that is transmitted.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Displayable data-URL preview of the image.
    pub fn preview(&self) -> &str {
        &self.preview
    }
}
