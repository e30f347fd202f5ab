use axum::{
    Form, Json,
    extract::{State, rejection::FormRejection},
    response::Html,
};
use std::sync::Arc;
use std::time::Instant;

use crate::codec;
use crate::error::ApiError;
use crate::models::{
    DecryptRequest, DecryptResponse, EncryptRequest, EncryptResponse, LoginResponse,
    StatsResponse,
};
use crate::state::AppState;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Asymmetric encryption</title>
</head>
<body>
    <h2>Encrypt and decrypt</h2>
    <form action="/encrypt" method="post">
        <h3>Text to encrypt:</h3>
        <textarea name="text_to_encrypt" rows="1" cols="50"></textarea><br><br>
        <input type="submit" value="Encrypt">
    </form>
    <form action="/decrypt" method="post">
        <h3>Hex ciphertext to decrypt:</h3>
        <textarea name="text_to_decrypt" rows="1" cols="50"></textarea><br><br>
        <input type="submit" value="Decrypt">
    </form>
</body>
</html>
"#;

/// Pulls a required, non-empty form field. An unparsable body counts as a
/// missing field.
fn required_field(
    value: Result<Option<String>, FormRejection>,
    name: &'static str,
) -> Result<String, ApiError> {
    match value {
        Ok(Some(text)) if !text.is_empty() => Ok(text),
        Ok(_) => Err(ApiError::MissingField(name)),
        Err(rejection) => {
            tracing::debug!("Rejected form body: {}", rejection);
            Err(ApiError::MissingField(name))
        }
    }
}

pub async fn root() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn encrypt(
    State(state): State<Arc<AppState>>,
    form: Result<Form<EncryptRequest>, FormRejection>,
) -> Result<Json<EncryptResponse>, ApiError> {
    let start = Instant::now();

    let text = required_field(form.map(|Form(f)| f.text_to_encrypt), "text_to_encrypt")?;
    let ciphertext = state.service.encrypt(&text)?;

    tracing::debug!("encrypt operation took: {:?}", start.elapsed());

    Ok(Json(EncryptResponse {
        encrypted_data: codec::to_wire_text(&ciphertext),
    }))
}

pub async fn decrypt(
    State(state): State<Arc<AppState>>,
    form: Result<Form<DecryptRequest>, FormRejection>,
) -> Result<Json<DecryptResponse>, ApiError> {
    let start = Instant::now();

    let wire_text = required_field(form.map(|Form(f)| f.text_to_decrypt), "text_to_decrypt")?;
    let ciphertext = codec::from_wire_text(&wire_text, state.service.ciphertext_len())?;
    let decrypted_data = state.service.decrypt(&ciphertext)?;

    tracing::debug!("decrypt operation took: {:?}", start.elapsed());

    Ok(Json(DecryptResponse { decrypted_data }))
}

pub async fn login(State(state): State<Arc<AppState>>) -> Json<LoginResponse> {
    Json(LoginResponse {
        author: state.author.clone(),
    })
}

// Service health check and statistics
pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<StatsResponse> {
    Json(StatsResponse {
        status: "healthy".to_string(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
