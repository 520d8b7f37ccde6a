use std::collections::{BTreeMap, HashSet};

use crate::models::{Seat, SeatStatus, VehicleLayout};
use crate::seatmap::pricing::resolve_price;

// Буква колонки: A, B, C, ... — до 8 колонок
fn seat_letter(column: u32) -> char {
    debug_assert!((1..=8).contains(&column));
    (b'A' + (column as u8 - 1)) as char
}

/// Отображаемый номер места: номер ряда + буква колонки ("12A").
pub fn seat_number(row: u32, column: u32) -> String {
    format!("{}{}", row, seat_letter(column))
}

/// Генерирует сетку мест по дескриптору салона.
///
/// Входы трактуются максимально снисходительно, ошибок нет:
/// - мест в сетке никогда не больше `total_seats`;
/// - пустые ряды на границе в результат не попадают;
/// - места с номерами из `booked` сразу помечаются booked;
/// - цена берётся из прайса через цепочку фолбэков (см. pricing).
pub fn generate(
    layout: &VehicleLayout,
    total_seats: u32,
    booked: &[String],
    prices: &BTreeMap<String, f64>,
) -> Vec<Vec<Seat>> {
    let booked_set: HashSet<&str> = booked.iter().map(|s| s.as_str()).collect();

    let mut rows = Vec::with_capacity(layout.rows as usize);
    let mut produced: u32 = 0;
    let mut next_id: i64 = 1;

    for row in 1..=layout.rows {
        let class = layout.class_for_row(row);
        let price = resolve_price(class, prices);

        let mut seats = Vec::with_capacity(layout.columns as usize);
        for column in 1..=layout.columns {
            if produced >= total_seats {
                break;
            }
            let number = seat_number(row, column);
            let status = if booked_set.contains(number.as_str()) {
                SeatStatus::Booked
            } else {
                SeatStatus::Available
            };
            seats.push(Seat {
                id: next_id,
                row,
                column,
                number,
                class,
                status,
                price,
            });
            next_id += 1;
            produced += 1;
        }

        if !seats.is_empty() {
            rows.push(seats);
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SeatClass, VehicleType};
    use crate::seatmap::layout::build_layout;
    use proptest::prelude::*;

    fn prices(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn bus_10_seats_with_booked_1a() {
        // пример из постановки: автобус, 10 мест, 1A занято, economy=300
        let layout = build_layout(VehicleType::Bus, 10);
        let grid = generate(
            &layout,
            10,
            &["1A".to_string()],
            &prices(&[("economy", 300.0)]),
        );

        assert_eq!(grid.len(), 3);
        assert_eq!(grid[0].len(), 4);
        assert_eq!(grid[1].len(), 4);
        assert_eq!(grid[2].len(), 2);

        for row in &grid {
            for seat in row {
                assert_eq!(seat.price, 300.0);
                if seat.number == "1A" {
                    assert_eq!(seat.status, SeatStatus::Booked);
                } else {
                    assert_eq!(seat.status, SeatStatus::Available);
                }
            }
        }
    }

    #[test]
    fn seat_numbers_follow_row_letter_scheme() {
        let layout = build_layout(VehicleType::Plane, 12);
        let grid = generate(&layout, 12, &[], &BTreeMap::new());
        assert_eq!(grid[0][0].number, "1A");
        assert_eq!(grid[0][5].number, "1F");
        assert_eq!(grid[1][0].number, "2A");
    }

    #[test]
    fn booked_numbers_not_in_grid_are_ignored() {
        let layout = build_layout(VehicleType::Bus, 4);
        let grid = generate(&layout, 4, &["99Z".to_string()], &BTreeMap::new());
        assert!(grid
            .iter()
            .flatten()
            .all(|s| s.status == SeatStatus::Available));
    }

    #[test]
    fn zero_total_seats_gives_empty_grid() {
        let layout = build_layout(VehicleType::Train, 0);
        let grid = generate(&layout, 0, &[], &BTreeMap::new());
        assert!(grid.is_empty());
    }

    #[test]
    fn ids_are_sequential() {
        let layout = build_layout(VehicleType::Train, 7);
        let grid = generate(&layout, 7, &[], &BTreeMap::new());
        let ids: Vec<i64> = grid.iter().flatten().map(|s| s.id).collect();
        assert_eq!(ids, (1..=7).collect::<Vec<i64>>());
    }

    fn any_vehicle() -> impl Strategy<Value = VehicleType> {
        prop_oneof![
            Just(VehicleType::Bus),
            Just(VehicleType::Train),
            Just(VehicleType::Plane),
        ]
    }

    proptest! {
        #[test]
        fn grid_has_exactly_total_seats(vt in any_vehicle(), total in 0u32..400) {
            let layout = build_layout(vt, total);
            let grid = generate(&layout, total, &[], &BTreeMap::new());
            let count: u32 = grid.iter().map(|r| r.len() as u32).sum();
            prop_assert_eq!(count, total.min(layout.rows * layout.columns));
        }

        #[test]
        fn positions_are_unique(vt in any_vehicle(), total in 0u32..400) {
            let layout = build_layout(vt, total);
            let grid = generate(&layout, total, &[], &BTreeMap::new());
            let mut positions = HashSet::new();
            for seat in grid.iter().flatten() {
                prop_assert!(positions.insert((seat.row, seat.column)));
            }
        }

        #[test]
        fn class_is_function_of_row(vt in any_vehicle(), total in 1u32..400) {
            let layout = build_layout(vt, total);
            let grid = generate(&layout, total, &[], &BTreeMap::new());
            for seat in grid.iter().flatten() {
                prop_assert_eq!(seat.class, layout.class_for_row(seat.row));
            }
        }

        #[test]
        fn no_empty_rows(vt in any_vehicle(), total in 0u32..400) {
            let layout = build_layout(vt, total);
            let grid = generate(&layout, total, &[], &BTreeMap::new());
            prop_assert!(grid.iter().all(|r| !r.is_empty()));
        }

        #[test]
        fn booked_marking_matches_input(total in 1u32..120) {
            let layout = build_layout(VehicleType::Bus, total);
            // бронируем каждое третье место
            let booked: Vec<String> = generate(&layout, total, &[], &BTreeMap::new())
                .iter()
                .flatten()
                .filter(|s| s.id % 3 == 0)
                .map(|s| s.number.clone())
                .collect();
            let grid = generate(&layout, total, &booked, &BTreeMap::new());
            for seat in grid.iter().flatten() {
                let expected = if booked.contains(&seat.number) {
                    SeatStatus::Booked
                } else {
                    SeatStatus::Available
                };
                prop_assert_eq!(seat.status, expected);
            }
        }

        #[test]
        fn seat_class_is_recognized_value(vt in any_vehicle(), total in 1u32..400) {
            let layout = build_layout(vt, total);
            let grid = generate(&layout, total, &[], &BTreeMap::new());
            for seat in grid.iter().flatten() {
                prop_assert!(matches!(
                    seat.class,
                    SeatClass::Economy | SeatClass::Business | SeatClass::Premium | SeatClass::First
                ));
            }
        }
    }
}
