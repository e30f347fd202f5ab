use std::sync::Arc;
use std::time::Instant;

use crate::rsa_service::RsaService;

/// Shared, read-only state handed to every handler.
#[derive(Debug)]
pub struct AppState {
    pub service: Arc<RsaService>,
    pub author: String,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(service: Arc<RsaService>, author: impl Into<String>) -> Self {
        Self {
            service,
            author: author.into(),
            started_at: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
