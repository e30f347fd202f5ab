use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Key material could not be produced. Fatal at startup.
#[derive(Debug, Error)]
pub enum KeyError {
    #[error("RSA key generation failed: {0}")]
    Generation(#[from] openssl::error::ErrorStack),

    #[error("Unsupported modulus size: {0} bits")]
    UnsupportedSize(u32),
}

#[derive(Debug, Error)]
pub enum EncryptError {
    #[error("Plaintext too large: {len} bytes (max: {max} bytes)")]
    Oversize { len: usize, max: usize },

    #[error("OpenSSL error: {0}")]
    Backend(#[from] openssl::error::ErrorStack),
}

/// Every decryption failure collapses into this one value: wrong length, bad
/// padding, wrong key and non UTF-8 output are indistinguishable to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("decryption failed")]
pub struct DecryptError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("ciphertext is empty")]
    Empty,

    #[error("ciphertext has odd length")]
    OddLength,

    #[error("ciphertext contains non-hexadecimal characters")]
    InvalidCharacter,

    #[error("ciphertext must be {expected} bytes, got {actual}")]
    WrongLength { expected: usize, actual: usize },
}

impl From<hex::FromHexError> for CodecError {
    fn from(err: hex::FromHexError) -> Self {
        match err {
            hex::FromHexError::OddLength => CodecError::OddLength,
            hex::FromHexError::InvalidHexCharacter { .. } => CodecError::InvalidCharacter,
            hex::FromHexError::InvalidStringLength => CodecError::OddLength,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

/// Errors surfaced at the HTTP boundary.
///
/// Display text is what the caller sees, so no variant carries library
/// messages.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing or empty field: {0}")]
    MissingField(&'static str),

    #[error("Text too long to encrypt: {len} bytes (max: {max} bytes)")]
    Oversize { len: usize, max: usize },

    #[error("Malformed ciphertext: {0}")]
    MalformedInput(#[from] CodecError),

    #[error("Could not decrypt data")]
    DecryptionFailed,

    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingField(_)
            | ApiError::Oversize { .. }
            | ApiError::MalformedInput(_)
            | ApiError::DecryptionFailed => StatusCode::BAD_REQUEST,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<EncryptError> for ApiError {
    fn from(err: EncryptError) -> Self {
        match err {
            EncryptError::Oversize { len, max } => ApiError::Oversize { len, max },
            EncryptError::Backend(e) => {
                tracing::error!("Encryption backend failure: {}", e);
                ApiError::Internal
            }
        }
    }
}

impl From<DecryptError> for ApiError {
    fn from(_: DecryptError) -> Self {
        ApiError::DecryptionFailed
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(%status, "request failed: {}", self);
        } else {
            tracing::debug!(%status, "request rejected: {}", self);
        }

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
