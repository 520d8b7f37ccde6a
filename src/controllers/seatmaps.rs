use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::models::VehicleType;
use crate::seatmap::{layout::build_layout, SeatGrid};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/layout", get(get_layout))
        .route("/seatmaps", post(generate_seatmap))
}

/* ---------- helpers ---------- */

// Проверка total_seats против верхней границы из конфига
fn check_total_seats(state: &AppState, total_seats: u32) -> Result<(), (StatusCode, String)> {
    let max = state.config.selection.max_total_seats;
    if total_seats > max {
        return Err((
            StatusCode::BAD_REQUEST,
            format!("totalSeats не может превышать {}", max),
        ));
    }
    Ok(())
}

/* ---------- LAYOUT ---------- */

// GET /api/layout
#[derive(Debug, Deserialize)]
struct LayoutQuery {
    #[serde(rename = "vehicleType")]
    vehicle_type: Option<String>,
    #[serde(rename = "totalSeats")]
    total_seats: u32,
}

async fn get_layout(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LayoutQuery>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    check_total_seats(&state, params.total_seats)?;

    // неизвестный тип не ошибка — нормализуем в bus
    let vehicle_type = VehicleType::normalize(params.vehicle_type.as_deref().unwrap_or("bus"));
    let layout = build_layout(vehicle_type, params.total_seats);

    Ok((StatusCode::OK, Json(layout)))
}

/* ---------- SEAT MAP ---------- */

// POST /api/seatmaps
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSeatMapRequest {
    pub vehicle_type: Option<String>,
    pub total_seats: u32,
    #[serde(default)]
    pub booked_seats: Vec<String>,
    #[serde(default)]
    pub class_prices: BTreeMap<String, f64>,
}

async fn generate_seatmap(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateSeatMapRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    check_total_seats(&state, req.total_seats)?;

    let vehicle_type = VehicleType::normalize(req.vehicle_type.as_deref().unwrap_or("bus"));
    let grid = SeatGrid::build(
        vehicle_type,
        req.total_seats,
        &req.booked_seats,
        &req.class_prices,
    );

    Ok((StatusCode::OK, Json(grid)))
}
