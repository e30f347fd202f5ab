use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::{decrypt, encrypt, get_stats, login, root};
use crate::state::AppState;

/// Build the application router with all endpoints.
pub fn app(state: Arc<AppState>) -> Router {
    // No caller auth here, so CORS stays open
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/encrypt", post(encrypt))
        .route("/decrypt", post(decrypt))
        .route("/login", get(login))
        .route("/stats", get(get_stats))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
