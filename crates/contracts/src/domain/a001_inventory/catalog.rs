use maplit::hashmap;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Канонические категории в порядке отображения на дашборде
pub const CATEGORY_ORDER: [&str; 3] = [
    "Smoked Beef Brisket",
    "Smoked Angus \"Bri-Steak\"",
    "Smoked Beef Belly",
];

/// Фиксированный прайс-лист: цена за килограмм по каноническому имени.
///
/// Устаревшие имена продублированы на случай, если строка листа еще не
/// переименована. Товары вне прайс-листа получают цену 0.
pub static PRODUCT_PRICING: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    hashmap! {
        "Smoked Beef Brisket" => 3300.0,
        "Smoked Angus \"Bri-Steak\"" => 3300.0,
        "Smoked Beef Belly" => 2200.0,
        // Старые наименования
        "Beef Brisket" => 3300.0,
        "Beef Angus" => 3300.0,
        "Beef Belly" => 2200.0,
    }
});

/// Замены устаревших наименований, только точное совпадение
pub static LEGACY_NAME_REWRITES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    hashmap! {
        "Beef Brisket" => "Smoked Beef Brisket",
        "Beef Angus" => "Smoked Angus \"Bri-Steak\"",
        "Beef Belly" => "Smoked Beef Belly",
    }
});

/// Каноническое имя товара: замена по таблице или имя как есть
pub fn canonical_item_name(item: &str) -> &str {
    LEGACY_NAME_REWRITES.get(item).copied().unwrap_or(item)
}

/// Цена за килограмм для товара; 0 если товара нет в прайс-листе
pub fn unit_price_for(item: &str) -> f64 {
    PRODUCT_PRICING.get(item).copied().unwrap_or(0.0)
}
