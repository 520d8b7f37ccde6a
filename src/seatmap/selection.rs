use serde::Serialize;
use std::sync::Arc;

use crate::models::{Seat, SeatStatus};

/// Хуки выбора мест. Вызываются синхронно, ровно один раз на переход.
pub trait SelectionHooks: Send + Sync {
    fn on_select(&self, _seat: &Seat) {}
    fn on_deselect(&self, _seat: &Seat) {}
}

/// Результат попытки перехода. Состояние карты меняется только
/// у вариантов `Selected` / `Deselected`, остальные — no-op.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionOutcome {
    Selected(Seat),
    Deselected(Seat),
    /// Место уже выбрано, повторный select ничего не делает.
    AlreadySelected,
    /// Место не было выбрано, release ничего не делает.
    NotSelected,
    /// Лимит достигнут: ни место, ни хуки не трогаем.
    LimitReached,
    /// booked/blocked — терминальные, клик игнорируется.
    NotSelectable,
    UnknownSeat,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SelectionSummary {
    pub selected: Vec<String>,
    pub total_price: f64,
    pub max_selection: usize,
}

/// Интерактивная карта мест: сетка + ограниченный набор выбранных.
///
/// Переходы синхронные, между ними ничего не вклинивается — модель
/// один в один повторяет обработку кликов в одном UI-потоке.
pub struct SeatMap {
    rows: Vec<Vec<Seat>>,
    max_selection: usize,
    selected: Vec<String>,
    hooks: Option<Arc<dyn SelectionHooks>>,
}

impl SeatMap {
    pub fn new(rows: Vec<Vec<Seat>>, max_selection: usize) -> Self {
        Self {
            rows,
            max_selection,
            selected: Vec::new(),
            hooks: None,
        }
    }

    pub fn with_hooks(mut self, hooks: Arc<dyn SelectionHooks>) -> Self {
        self.hooks = Some(hooks);
        self
    }

    pub fn rows(&self) -> &[Vec<Seat>] {
        &self.rows
    }

    pub fn seat(&self, number: &str) -> Option<&Seat> {
        self.rows.iter().flatten().find(|s| s.number == number)
    }

    fn seat_mut(&mut self, number: &str) -> Option<&mut Seat> {
        self.rows.iter_mut().flatten().find(|s| s.number == number)
    }

    /// Выбрать место. При достигнутом лимите состояние не меняется
    /// и хук не вызывается.
    pub fn select(&mut self, number: &str) -> SelectionOutcome {
        let at_limit = self.selected.len() >= self.max_selection;
        let Some(seat) = self.seat_mut(number) else {
            return SelectionOutcome::UnknownSeat;
        };
        match seat.status {
            SeatStatus::Selected => SelectionOutcome::AlreadySelected,
            SeatStatus::Available => {
                if at_limit {
                    return SelectionOutcome::LimitReached;
                }
                seat.status = SeatStatus::Selected;
                let snapshot = seat.clone();
                self.selected.push(snapshot.number.clone());
                if let Some(hooks) = &self.hooks {
                    hooks.on_select(&snapshot);
                }
                SelectionOutcome::Selected(snapshot)
            }
            _ => SelectionOutcome::NotSelectable,
        }
    }

    /// Снять выбор. Для выбранного места всегда успешно.
    pub fn deselect(&mut self, number: &str) -> SelectionOutcome {
        let Some(seat) = self.seat_mut(number) else {
            return SelectionOutcome::UnknownSeat;
        };
        match seat.status {
            SeatStatus::Selected => {
                seat.status = SeatStatus::Available;
                let snapshot = seat.clone();
                self.selected.retain(|n| n != &snapshot.number);
                if let Some(hooks) = &self.hooks {
                    hooks.on_deselect(&snapshot);
                }
                SelectionOutcome::Deselected(snapshot)
            }
            SeatStatus::Available => SelectionOutcome::NotSelected,
            _ => SelectionOutcome::NotSelectable,
        }
    }

    /// Клик по месту: available <-> selected, остальное игнорируется.
    pub fn toggle(&mut self, number: &str) -> SelectionOutcome {
        match self.seat(number).map(|s| s.status) {
            Some(SeatStatus::Selected) => self.deselect(number),
            Some(_) | None => self.select(number),
        }
    }

    /// Сбросить весь выбор; хук deselect зовётся для каждого места.
    pub fn clear(&mut self) -> usize {
        let numbers: Vec<String> = self.selected.clone();
        for number in &numbers {
            self.deselect(number);
        }
        numbers.len()
    }

    pub fn selected_numbers(&self) -> &[String] {
        &self.selected
    }

    pub fn total_price(&self) -> f64 {
        self.selected
            .iter()
            .filter_map(|n| self.seat(n))
            .map(|s| s.price)
            .sum()
    }

    pub fn summary(&self) -> SelectionSummary {
        SelectionSummary {
            selected: self.selected.clone(),
            total_price: self.total_price(),
            max_selection: self.max_selection,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VehicleType;
    use crate::seatmap::{grid, layout};
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct Counters {
        selects: AtomicUsize,
        deselects: AtomicUsize,
    }

    impl SelectionHooks for Counters {
        fn on_select(&self, _seat: &Seat) {
            self.selects.fetch_add(1, Ordering::SeqCst);
        }
        fn on_deselect(&self, _seat: &Seat) {
            self.deselects.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn seat_map(total: u32, booked: &[&str], max: usize) -> (SeatMap, Arc<Counters>) {
        let booked: Vec<String> = booked.iter().map(|s| s.to_string()).collect();
        let layout = layout::build_layout(VehicleType::Bus, total);
        let rows = grid::generate(&layout, total, &booked, &BTreeMap::new());
        let counters = Arc::new(Counters::default());
        let map = SeatMap::new(rows, max).with_hooks(counters.clone());
        (map, counters)
    }

    #[test]
    fn select_then_deselect_roundtrip() {
        let (mut map, counters) = seat_map(8, &[], 4);
        assert!(matches!(map.select("1A"), SelectionOutcome::Selected(_)));
        assert_eq!(map.seat("1A").unwrap().status, SeatStatus::Selected);
        assert!(matches!(map.deselect("1A"), SelectionOutcome::Deselected(_)));
        assert_eq!(map.seat("1A").unwrap().status, SeatStatus::Available);
        assert_eq!(counters.selects.load(Ordering::SeqCst), 1);
        assert_eq!(counters.deselects.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn booked_seat_is_not_interactive() {
        let (mut map, counters) = seat_map(8, &["2B"], 4);
        assert_eq!(map.select("2B"), SelectionOutcome::NotSelectable);
        assert_eq!(map.toggle("2B"), SelectionOutcome::NotSelectable);
        assert_eq!(map.seat("2B").unwrap().status, SeatStatus::Booked);
        assert_eq!(counters.selects.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn limit_leaves_state_unchanged() {
        let (mut map, counters) = seat_map(8, &[], 2);
        map.select("1A");
        map.select("1B");
        assert_eq!(map.select("1C"), SelectionOutcome::LimitReached);
        assert_eq!(map.selected_numbers(), ["1A", "1B"]);
        assert_eq!(map.seat("1C").unwrap().status, SeatStatus::Available);
        assert_eq!(counters.selects.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn deselect_always_allowed_at_limit() {
        let (mut map, _) = seat_map(8, &[], 1);
        map.select("1A");
        assert!(matches!(map.deselect("1A"), SelectionOutcome::Deselected(_)));
        // после снятия снова можно выбирать
        assert!(matches!(map.select("1B"), SelectionOutcome::Selected(_)));
    }

    #[test]
    fn toggle_flips_between_states() {
        let (mut map, _) = seat_map(8, &[], 4);
        assert!(matches!(map.toggle("1A"), SelectionOutcome::Selected(_)));
        assert!(matches!(map.toggle("1A"), SelectionOutcome::Deselected(_)));
    }

    #[test]
    fn clear_resets_everything_and_fires_hooks() {
        let (mut map, counters) = seat_map(8, &[], 4);
        map.select("1A");
        map.select("1B");
        map.select("2C");
        assert_eq!(map.clear(), 3);
        assert!(map.selected_numbers().is_empty());
        assert_eq!(counters.deselects.load(Ordering::SeqCst), 3);
        assert!(map
            .rows()
            .iter()
            .flatten()
            .all(|s| s.status == SeatStatus::Available));
    }

    #[test]
    fn unknown_seat_is_reported() {
        let (mut map, _) = seat_map(4, &[], 2);
        assert_eq!(map.select("9Z"), SelectionOutcome::UnknownSeat);
        assert_eq!(map.deselect("9Z"), SelectionOutcome::UnknownSeat);
    }

    #[test]
    fn summary_totals_selected_prices() {
        let (mut map, _) = seat_map(10, &[], 4);
        map.select("1A"); // business, дефолт 500
        map.select("3A"); // economy, дефолт 300
        let summary = map.summary();
        assert_eq!(summary.selected, ["1A", "3A"]);
        assert_eq!(summary.total_price, 800.0);
        assert_eq!(summary.max_selection, 4);
    }
}
