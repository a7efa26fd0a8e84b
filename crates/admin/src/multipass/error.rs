//! Error types for multipass token encoding.

use thiserror::Error;

/// Errors that can occur while encoding or decoding a multipass token.
#[derive(Debug, Error)]
pub enum MultipassError {
    /// The multipass secret was empty.
    #[error("multipass secret must not be empty")]
    EmptySecret,

    /// The shop domain needed for the login URL was empty.
    #[error("shop domain must not be empty")]
    MissingDomain,

    /// Customer data could not be serialized or deserialized.
    #[error("customer data error: {0}")]
    Json(#[from] serde_json::Error),

    /// Token is not valid URL-safe base64.
    #[error("token is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Token is shorter than IV plus signature.
    #[error("token too short ({0} bytes)")]
    TooShort(usize),

    /// Signature does not match the ciphertext.
    #[error("token signature mismatch")]
    InvalidSignature,

    /// Cipher setup or decryption failed.
    #[error("cipher error: {0}")]
    Cipher(String),
}
