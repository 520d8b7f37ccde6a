//! Генерация раскладки салона и интерактивный выбор мест.
//!
//! Всё в этом модуле — чистые синхронные вычисления: дескриптор салона и
//! сетка мест пересобираются на каждый запрос и нигде не сохраняются.

pub mod grid;
pub mod layout;
pub mod preview;
pub mod pricing;
pub mod selection;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{Seat, VehicleLayout, VehicleType};

pub use selection::{SeatMap, SelectionHooks, SelectionOutcome, SelectionSummary};

/// Готовая карта мест: дескриптор салона плюс сетка.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatGrid {
    pub layout: VehicleLayout,
    pub rows: Vec<Vec<Seat>>,
    pub seat_count: u32,
}

impl SeatGrid {
    /// Собирает карту целиком: layout по типу транспорта, затем сетка
    /// с пометкой занятых мест и ценами из прайса.
    pub fn build(
        vehicle_type: VehicleType,
        total_seats: u32,
        booked: &[String],
        prices: &BTreeMap<String, f64>,
    ) -> Self {
        let layout = layout::build_layout(vehicle_type, total_seats);
        let rows = grid::generate(&layout, total_seats, booked, prices);
        let seat_count = rows.iter().map(|r| r.len() as u32).sum();
        SeatGrid {
            layout,
            rows,
            seat_count,
        }
    }

    /// Интерактивная карта поверх сгенерированной сетки.
    pub fn into_seat_map(self, max_selection: usize) -> SeatMap {
        SeatMap::new(self.rows, max_selection)
    }
}
