use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::SeatClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Bus,
    Train,
    Plane,
}

impl VehicleType {
    /// Нормализация произвольной строки типа транспорта.
    /// Принимаем синонимы ("microbus", "air" и т.д.), всё неизвестное — bus.
    pub fn normalize(raw: &str) -> VehicleType {
        match raw.trim().to_lowercase().as_str() {
            "bus" | "microbus" | "car" | "coach" | "launch" => VehicleType::Bus,
            "train" => VehicleType::Train,
            "plane" | "air" | "aircraft" => VehicleType::Plane,
            _ => VehicleType::Bus,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Bus => "bus",
            VehicleType::Train => "train",
            VehicleType::Plane => "plane",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Непрерывная полоса рядов одного класса, границы включительно.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassBand {
    pub class: SeatClass,
    pub from_row: u32,
    pub to_row: u32,
}

impl ClassBand {
    pub fn contains(&self, row: u32) -> bool {
        self.from_row <= row && row <= self.to_row
    }
}

// Статический дескриптор формы салона. Пересобирается при каждой генерации,
// нигде не хранится.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleLayout {
    pub vehicle_type: VehicleType,
    pub rows: u32,
    pub columns: u32,
    /// Номера колонок (с единицы), после которых идёт проход.
    pub aisles_after: Vec<u32>,
    /// Полосы классов; ряд относится к первой подходящей полосе.
    pub class_bands: Vec<ClassBand>,
}

impl VehicleLayout {
    /// Класс ряда: первая полоса, в которую ряд попадает, иначе economy.
    pub fn class_for_row(&self, row: u32) -> SeatClass {
        self.class_bands
            .iter()
            .find(|band| band.contains(row))
            .map(|band| band.class)
            .unwrap_or(SeatClass::Economy)
    }
}
