use crate::models::{ClassBand, SeatClass, VehicleLayout, VehicleType};

// Геометрия салона по типу транспорта. Значения фиксированы:
// bus    — 4 колонки, проход после 2-й
// train  — 5 колонок, проходы после 2-й и 3-й
// plane  — 6 колонок, проход после 3-й
fn columns_for(vehicle_type: VehicleType) -> u32 {
    match vehicle_type {
        VehicleType::Bus => 4,
        VehicleType::Train => 5,
        VehicleType::Plane => 6,
    }
}

fn aisles_for(vehicle_type: VehicleType) -> Vec<u32> {
    match vehicle_type {
        VehicleType::Bus => vec![2],
        VehicleType::Train => vec![2, 3],
        VehicleType::Plane => vec![3],
    }
}

// Полосы классов по рядам. Последняя (economy) полоса открыта сверху
// и обрезается по фактическому числу рядов при сборке layout'а.
fn class_bands_for(vehicle_type: VehicleType) -> Vec<(SeatClass, u32, u32)> {
    match vehicle_type {
        VehicleType::Bus => vec![
            (SeatClass::Business, 1, 2),
            (SeatClass::Economy, 3, u32::MAX),
        ],
        VehicleType::Train => vec![
            (SeatClass::First, 1, 2),
            (SeatClass::Business, 3, 5),
            (SeatClass::Economy, 6, u32::MAX),
        ],
        VehicleType::Plane => vec![
            (SeatClass::First, 1, 2),
            (SeatClass::Business, 3, 6),
            (SeatClass::Premium, 7, 10),
            (SeatClass::Economy, 11, u32::MAX),
        ],
    }
}

/// Строит дескриптор салона для типа транспорта и общего числа мест.
///
/// Детерминированно, без побочных эффектов и без ошибок: нулевое число
/// мест даёт вырожденный layout без рядов, полосы классов обрезаются по
/// вычисленному числу рядов.
pub fn build_layout(vehicle_type: VehicleType, total_seats: u32) -> VehicleLayout {
    let columns = columns_for(vehicle_type);
    let rows = total_seats.div_ceil(columns);

    let class_bands = class_bands_for(vehicle_type)
        .into_iter()
        .filter(|(_, from, _)| *from <= rows)
        .map(|(class, from, to)| ClassBand {
            class,
            from_row: from,
            to_row: to.min(rows),
        })
        .collect();

    VehicleLayout {
        vehicle_type,
        rows,
        columns,
        aisles_after: aisles_for(vehicle_type),
        class_bands,
    }
}
