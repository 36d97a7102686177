use thiserror::Error;

#[derive(Error, Debug)]
pub enum CloakError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Base64 error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Hex error: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("Recovered data is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Invalid transform order: expected {expected} entries, got {got}")]
    InvalidOrderLength { expected: usize, got: usize },

    #[error("Invalid transform index: {0}")]
    InvalidTransformIndex(u8),

    #[error("Malformed reverse key: {0}")]
    MalformedReverseKey(String),

    #[error("Invalid transit message: {0}")]
    InvalidTransit(String),

    #[error("Decryption failed: {0}")]
    DecryptionFailed(String),

    #[error("Key derivation failed")]
    KeyDerivation,
}

pub type Result<T> = std::result::Result<T, CloakError>;
