use serde::Serialize;

/// Ячейка текстового превью: номер места или проход.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewCell {
    Seat(u32),
    Aisle,
}

// Секции из строки вида "2-2" / "3-3" / "2-3-2". Нечисловой мусор
// отбрасывается; если не распарсилось ничего — один блок на 4 места.
pub fn parse_sections(layout: &str) -> Vec<u32> {
    let sections: Vec<u32> = layout
        .split('-')
        .filter_map(|part| part.trim().parse::<u32>().ok())
        .filter(|n| *n > 0)
        .collect();
    if sections.is_empty() {
        vec![4]
    } else {
        sections
    }
}

/// Превью раскладки для админской формы.
///
/// Места нумеруются подряд и режутся на ряды шириной sum(секций);
/// проход вставляется на границе каждой секции, кроме последней.
/// Это осознанно независимая упрощённая модель: без классов и без
/// записей Seat, только номера.
pub fn build_preview(total_seats: u32, layout: &str) -> Vec<Vec<PreviewCell>> {
    let sections = parse_sections(layout);
    let per_row: u32 = sections.iter().sum();

    // Границы секций — накопленные суммы без последней
    let mut breaks = Vec::with_capacity(sections.len().saturating_sub(1));
    let mut acc = 0;
    for width in &sections[..sections.len() - 1] {
        acc += width;
        breaks.push(acc);
    }

    let mut rows = Vec::new();
    let mut seat = 1;
    while seat <= total_seats {
        let mut cells = Vec::new();
        for offset in 0..per_row {
            if seat > total_seats {
                break;
            }
            cells.push(PreviewCell::Seat(seat));
            seat += 1;
            if breaks.contains(&(offset + 1)) {
                cells.push(PreviewCell::Aisle);
            }
        }
        rows.push(cells);
    }

    rows
}

/// Текстовый рендер превью, по строке на ряд ("1 2 | 3 4").
pub fn render_text(rows: &[Vec<PreviewCell>]) -> String {
    rows.iter()
        .map(|row| {
            row.iter()
                .map(|cell| match cell {
                    PreviewCell::Seat(n) => n.to_string(),
                    PreviewCell::Aisle => "|".to_string(),
                })
                .collect::<Vec<String>>()
                .join(" ")
        })
        .collect::<Vec<String>>()
        .join("\n")
}
