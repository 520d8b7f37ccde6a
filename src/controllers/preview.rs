use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::seatmap::preview::{build_preview, render_text, PreviewCell};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/preview", post(generate_preview))
}

// POST /api/preview — живое превью раскладки для админской формы.
// Независимая упрощённая модель: строка секций вместо типа транспорта.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRequest {
    pub total_seats: u32,
    pub layout: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub rows: Vec<Vec<PreviewCell>>,
    pub text: String,
}

async fn generate_preview(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PreviewRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let max = state.config.selection.max_total_seats;
    if req.total_seats > max {
        return Err((
            StatusCode::BAD_REQUEST,
            format!("totalSeats не может превышать {}", max),
        ));
    }

    let layout = req.layout.as_deref().unwrap_or("2-2");
    let rows = build_preview(req.total_seats, layout);
    let text = render_text(&rows);

    Ok((StatusCode::OK, Json(PreviewResponse { rows, text })))
}
