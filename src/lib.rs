// This file allows the components to be used as a library as well
pub mod codec;
pub mod config;
pub mod error;
pub mod handlers;
pub mod key_pair;
pub mod models;
pub mod routes;
pub mod rsa_service;
pub mod state;

// Re-export important types for easier use
pub use config::ServiceConfig;
pub use error::{ApiError, CodecError, DecryptError, EncryptError, KeyError};
pub use key_pair::KeyPair;
pub use routes::app;
pub use rsa_service::{Ciphertext, OaepDigest, RsaService};
pub use state::AppState;
