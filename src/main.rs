use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use rsa_cipher_service::{AppState, KeyPair, RsaService, ServiceConfig, app};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,rsa_cipher_service=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    let config = ServiceConfig::from_env()?;
    let addr = config.bind_addr()?;

    // Key material is generated once; without it there is nothing to serve
    let keys = KeyPair::generate().inspect_err(|e| {
        tracing::error!("Failed to generate RSA key pair: {}", e);
    })?;
    tracing::info!(
        modulus_bits = keys.modulus_bits(),
        public_exponent = keys.public_exponent(),
        "RSA key pair generated"
    );

    let service = Arc::new(RsaService::new(keys));
    let state = Arc::new(AppState::new(service, config.author));

    tracing::info!("RSA encryption service listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
