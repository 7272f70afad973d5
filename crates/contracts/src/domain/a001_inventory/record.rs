use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Одна строка инвентаря после нормализации
///
/// Числовые поля никогда не берутся из таблицы как есть: `unit_price`
/// подставляется из прайс-листа (см. [`super::catalog`]), `srp`
/// пересчитывается как `kg * unit_price`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    /// Наименование товара (после замены устаревших имен)
    #[serde(rename = "ITEM")]
    pub item: String,

    /// Вес в килограммах
    #[serde(rename = "KG")]
    pub kg: f64,

    /// Цена за килограмм из прайс-листа; 0 для неизвестных товаров
    #[serde(rename = "UNIT")]
    pub unit_price: f64,

    /// Рекомендованная розничная цена, всегда `kg * unit_price`
    #[serde(rename = "SRP")]
    pub srp: f64,

    /// Остальные колонки листа, как есть
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

/// Ответ `GET /api/inventory`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryResponse {
    pub data: Vec<InventoryRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_with_sheet_column_names() {
        let mut record = InventoryRecord {
            item: "Smoked Beef Brisket".to_string(),
            kg: 1.5,
            unit_price: 3300.0,
            srp: 4950.0,
            ..Default::default()
        };
        record.extra.insert("BATCH".to_string(), "B-07".to_string());

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["ITEM"], "Smoked Beef Brisket");
        assert_eq!(json["KG"], 1.5);
        assert_eq!(json["UNIT"], 3300.0);
        assert_eq!(json["SRP"], 4950.0);
        // Дополнительные колонки разворачиваются в плоские ключи
        assert_eq!(json["BATCH"], "B-07");
    }

    #[test]
    fn test_record_round_trips_extra_columns() {
        let payload = r#"{"ITEM":"Pork Ribs","KG":0.8,"UNIT":0.0,"SRP":0.0,"NOTES":"frozen"}"#;

        let record: InventoryRecord = serde_json::from_str(payload).unwrap();
        assert_eq!(record.item, "Pork Ribs");
        assert_eq!(record.kg, 0.8);
        assert_eq!(record.extra.get("NOTES").unwrap(), "frozen");

        let back: InventoryRecord =
            serde_json::from_str(&serde_json::to_string(&record).unwrap()).unwrap();
        assert_eq!(back, record);
    }
}
