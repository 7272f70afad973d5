use contracts::domain::a001_inventory::catalog::{canonical_item_name, unit_price_for};
use contracts::domain::a001_inventory::record::InventoryRecord;

/// Устаревший заголовок веса, встречается в старых выгрузках листа
const LEGACY_WEIGHT_HEADER: &str = "WEIGHT";

/// Заголовки, которые принадлежат вычисляемым полям записи и не
/// переносятся из листа как есть
const COMPUTED_HEADERS: [&str; 2] = ["UNIT", "SRP"];

/// Превращает сырые строки листа (первая строка — заголовки) в записи
/// инвентаря с каноническими именами и пересчитанными ценами.
///
/// Кривые ячейки не ошибка: они вырождаются в ноль/пустую строку, строка
/// при этом остается в результате. Пустой лист дает пустой список.
pub fn normalize(rows: &[Vec<String>]) -> Vec<InventoryRecord> {
    let Some((header_row, data_rows)) = rows.split_first() else {
        return Vec::new();
    };

    let headers: Vec<&str> = header_row.iter().map(|h| h.trim()).collect();

    data_rows
        .iter()
        .map(|row| normalize_row(&headers, row))
        .collect()
}

fn normalize_row(headers: &[&str], row: &[String]) -> InventoryRecord {
    let mut record = InventoryRecord::default();

    for (index, header) in headers.iter().enumerate() {
        // Строка может быть короче шапки, хвостовые колонки остаются пустыми
        let Some(cell) = row.get(index) else {
            break;
        };

        match *header {
            "ITEM" => record.item = cell.clone(),
            "KG" | LEGACY_WEIGHT_HEADER => record.kg = parse_numeric(cell),
            other if COMPUTED_HEADERS.contains(&other) => {}
            other => {
                record.extra.insert(other.to_string(), cell.clone());
            }
        }
    }

    record.item = canonical_item_name(&record.item).to_string();
    record.unit_price = unit_price_for(&record.item);
    record.srp = if record.kg != 0.0 && record.unit_price != 0.0 {
        record.kg * record.unit_price
    } else {
        0.0
    };

    record
}

/// Вытаскивает число из «грязной» ячейки: отбрасывает все, кроме цифр и
/// точки, остаток парсит как f64. Пустой или непарсимый остаток дает 0.
///
/// Переживает значения вида `PHP 2,290.20`, `2,290.20 kg`, `abc`, ``.
pub fn parse_numeric(cell: &str) -> f64 {
    let cleaned: String = cell
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    if cleaned.is_empty() {
        return 0.0;
    }

    cleaned.parse().unwrap_or(0.0)
}
