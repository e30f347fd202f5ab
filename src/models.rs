use serde::{Deserialize, Serialize};

// Request/Response models for the HTTP surface

// Form body for POST /encrypt
#[derive(Debug, Deserialize)]
pub struct EncryptRequest {
    pub text_to_encrypt: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EncryptResponse {
    pub encrypted_data: String,
}

// Form body for POST /decrypt
#[derive(Debug, Deserialize)]
pub struct DecryptRequest {
    pub text_to_decrypt: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DecryptResponse {
    pub decrypted_data: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub author: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// Model for service statistics
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub status: String,
    pub uptime_seconds: u64,
    pub version: String,
}
