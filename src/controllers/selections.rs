use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::models::VehicleType;
use crate::seatmap::{SeatGrid, SelectionOutcome, SelectionSummary};
use crate::store::StoreError;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/selections", post(create_selection))
        .route("/selections/{id}", get(get_selection).delete(drop_selection))
        .route("/selections/select", patch(select_seat))
        .route("/selections/release", patch(release_seat))
        .route("/selections/clear", patch(clear_selection))
}

/* ---------- helpers ---------- */

fn store_error(e: StoreError) -> (StatusCode, String) {
    match e {
        StoreError::SessionNotFound(_) => {
            (StatusCode::NOT_FOUND, "Сессия выбора не найдена".to_string())
        }
    }
}

/* ---------- SELECTIONS ---------- */

// POST /api/selections
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateSelectionRequest {
    vehicle_type: Option<String>,
    total_seats: u32,
    #[serde(default)]
    booked_seats: Vec<String>,
    #[serde(default)]
    class_prices: BTreeMap<String, f64>,
    max_selection: Option<usize>,
}

#[derive(Debug, Serialize)]
struct CreateSelectionResponse {
    id: Uuid,
}

async fn create_selection(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateSelectionRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let max_total = state.config.selection.max_total_seats;
    if req.total_seats > max_total {
        return Err((
            StatusCode::BAD_REQUEST,
            format!("totalSeats не может превышать {}", max_total),
        ));
    }

    let max_selection = req
        .max_selection
        .unwrap_or(state.config.selection.default_max_selection);
    if max_selection == 0 {
        return Err((
            StatusCode::BAD_REQUEST,
            "maxSelection должен быть > 0".to_string(),
        ));
    }

    let vehicle_type = VehicleType::normalize(req.vehicle_type.as_deref().unwrap_or("bus"));
    let map = SeatGrid::build(
        vehicle_type,
        req.total_seats,
        &req.booked_seats,
        &req.class_prices,
    )
    .into_seat_map(max_selection);

    let id = state.store.create(map).await;
    tracing::debug!("selection session {} created ({} seats)", id, req.total_seats);

    Ok((StatusCode::CREATED, Json(CreateSelectionResponse { id })))
}

// GET /api/selections/{id}
async fn get_selection(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let summary: SelectionSummary = state
        .store
        .with_session(id, |map| map.summary())
        .await
        .map_err(store_error)?;

    Ok((StatusCode::OK, Json(summary)))
}

// DELETE /api/selections/{id}
async fn drop_selection(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    state.store.remove(id).await.map_err(store_error)?;
    Ok((
        StatusCode::OK,
        Json(json!({"message": "Сессия выбора удалена"})),
    ))
}

/* ---------- SEATS ---------- */

// PATCH /api/selections/select
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeatActionRequest {
    selection_id: Uuid,
    seat_number: String,
}

async fn select_seat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SeatActionRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let outcome = state
        .store
        .with_session(req.selection_id, |map| map.select(&req.seat_number))
        .await
        .map_err(store_error)?;

    match outcome {
        SelectionOutcome::Selected(seat) => Ok((
            StatusCode::OK,
            Json(json!({"message": "Место успешно выбрано", "seat": seat})),
        )),
        SelectionOutcome::AlreadySelected => Ok((
            StatusCode::OK,
            Json(json!({"message": "Место уже было выбрано"})),
        )),
        SelectionOutcome::LimitReached => Err((
            StatusCode::CONFLICT,
            "Достигнут лимит выбранных мест".to_string(),
        )),
        SelectionOutcome::NotSelectable => Err((
            StatusCode::CONFLICT,
            "Место занято и недоступно для выбора".to_string(),
        )),
        SelectionOutcome::UnknownSeat => {
            Err((StatusCode::NOT_FOUND, "Место не найдено".to_string()))
        }
        // select не возвращает Deselected/NotSelected
        _ => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            "Неожиданный результат выбора".to_string(),
        )),
    }
}

// PATCH /api/selections/release
async fn release_seat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SeatActionRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let outcome = state
        .store
        .with_session(req.selection_id, |map| map.deselect(&req.seat_number))
        .await
        .map_err(store_error)?;

    match outcome {
        SelectionOutcome::Deselected(seat) => Ok((
            StatusCode::OK,
            Json(json!({"message": "Место успешно освобождено", "seat": seat})),
        )),
        SelectionOutcome::NotSelected => Err((
            StatusCode::CONFLICT,
            "Место не было выбрано".to_string(),
        )),
        SelectionOutcome::NotSelectable => Err((
            StatusCode::CONFLICT,
            "Место занято и не принадлежит этой сессии".to_string(),
        )),
        SelectionOutcome::UnknownSeat => {
            Err((StatusCode::NOT_FOUND, "Место не найдено".to_string()))
        }
        _ => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            "Неожиданный результат освобождения".to_string(),
        )),
    }
}

// PATCH /api/selections/clear
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ClearSelectionRequest {
    selection_id: Uuid,
}

async fn clear_selection(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ClearSelectionRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let cleared = state
        .store
        .with_session(req.selection_id, |map| map.clear())
        .await
        .map_err(store_error)?;

    Ok((
        StatusCode::OK,
        Json(json!({"message": "Выбор сброшен", "cleared": cleared})),
    ))
}
