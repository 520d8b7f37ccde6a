use serde::{Deserialize, Serialize};
use std::fmt;

// Классы обслуживания — фиксированный набор из четырёх значений
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatClass {
    Economy,
    Business,
    Premium,
    First,
}

impl SeatClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeatClass::Economy => "economy",
            SeatClass::Business => "business",
            SeatClass::Premium => "premium",
            SeatClass::First => "first",
        }
    }

    /// Базовая цена класса, если прайс вообще не передали.
    pub fn default_price(&self) -> f64 {
        match self {
            SeatClass::Economy => 300.0,
            SeatClass::Business => 500.0,
            SeatClass::Premium => 800.0,
            SeatClass::First => 1200.0,
        }
    }
}

impl fmt::Display for SeatClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    Available,
    Booked,
    Selected,
    Blocked,
}

impl SeatStatus {
    // booked/blocked — терминальные, клики по ним игнорируются
    pub fn is_interactive(&self) -> bool {
        matches!(self, SeatStatus::Available | SeatStatus::Selected)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    pub id: i64,
    pub row: u32,
    pub column: u32,
    pub number: String,
    pub class: SeatClass,
    pub status: SeatStatus,
    pub price: f64,
}
