use std::net::SocketAddr;
use std::time::Duration;
use tokio::task;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use seatplan::{app, config::Config, services::cleanup::CleanupService, AppState};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Seatplan API");

    let cleanup_interval = config.selection.cleanup_interval_seconds;
    let app_state = AppState::new(config);

    // --- Start background tasks ---

    // Чистка протухших сессий выбора по интервалу из конфига
    let cleanup = CleanupService::new(app_state.clone());
    task::spawn(async move {
        loop {
            tokio::time::sleep(Duration::from_secs(cleanup_interval)).await;
            cleanup.run_session_sweep().await;
        }
    });

    // --- Start the web server ---

    let port = app_state.config.app.port;
    let router = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");
    axum::serve(listener, router.into_make_service())
        .await
        .expect("Server error");
}
