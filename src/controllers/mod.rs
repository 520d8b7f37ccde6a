pub mod preview;
pub mod seatmaps;
pub mod selections;

use axum::Router;
use std::sync::Arc;

pub fn routes() -> Router<Arc<crate::AppState>> {
    Router::new()
        .merge(seatmaps::routes())
        .merge(selections::routes())
        .merge(preview::routes())
}
