pub mod config;
pub mod controllers;
pub mod models;
pub mod seatmap;
pub mod services;
pub mod store;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

// Shared state для всего приложения
pub struct AppState {
    pub config: config::Config,
    pub store: store::SelectionStore,
}

impl AppState {
    pub fn new(config: config::Config) -> Arc<Self> {
        let store = store::SelectionStore::new(config.selection.session_ttl_minutes);
        Arc::new(Self { config, store })
    }
}

/// Собирает приложение целиком; используется и в main, и в тестах.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { "Seatplan API v1.0" }))
        .route("/health", get(|| async { "OK" }))
        .nest("/api", controllers::routes())
        .with_state(state)
        // Браузерный клиент ходит с другого origin'а
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
