use std::collections::BTreeMap;

use crate::models::SeatClass;

// Цена пригодна, если она конечна и положительна. Мусор из прайса
// (NaN, нули, отрицательные) просто пропускаем.
fn usable(price: f64) -> bool {
    price.is_finite() && price > 0.0
}

/// Подбор цены для класса по прайсу `класс -> цена`.
///
/// Цепочка фолбэков:
/// 1. точный ключ ("economy")
/// 2. ключ в верхнем регистре ("ECONOMY")
/// 3. ключ в нижнем регистре
/// 4. любая пригодная цена из прайса (порядок ключей BTreeMap — детерминирован)
/// 5. захардкоженная цена класса, если прайс пуст или ничего пригодного нет
pub fn resolve_price(class: SeatClass, prices: &BTreeMap<String, f64>) -> f64 {
    if prices.is_empty() {
        return class.default_price();
    }

    let name = class.as_str();
    let candidates = [
        name.to_string(),
        name.to_uppercase(),
        name.to_lowercase(),
    ];
    for key in &candidates {
        if let Some(&price) = prices.get(key) {
            if usable(price) {
                return price;
            }
        }
    }

    // Класс в прайсе не нашли — берём первую пригодную цену
    if let Some(&price) = prices.values().find(|p| usable(**p)) {
        return price;
    }

    class.default_price()
}
