//! Чистое вычисление производного вида: фильтр, поиск, группировка,
//! сортировка. Пересчитывается синхронно на каждое изменение состояния,
//! без debounce и мемоизации.

use std::cmp::Ordering;

use contracts::domain::a001_inventory::catalog::{unit_price_for, CATEGORY_ORDER};
use contracts::domain::a001_inventory::record::InventoryRecord;

use super::state::InventoryListState;
use crate::shared::list_utils::{sort_list, Searchable, Sortable};

/// Группа одной канонической категории. Пустая группа существует
/// структурно, но ничего не рисует.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryGroup {
    pub category: &'static str,
    pub items: Vec<InventoryRecord>,
    /// Цена за килограмм для шапки группы, из прайс-листа, не из записей
    pub price_per_kg: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InventoryView {
    pub groups: Vec<CategoryGroup>,
    pub others: Vec<InventoryRecord>,
    pub total_shown: usize,
}

impl Searchable for InventoryRecord {
    /// Пустой запрос пропускает все; иначе подстрока без учета регистра
    /// по имени и строковым представлениям числовых полей
    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        self.item.to_lowercase().contains(&needle)
            || self.kg.to_string().contains(&needle)
            || self.unit_price.to_string().contains(&needle)
            || self.srp.to_string().contains(&needle)
    }
}

impl Sortable for InventoryRecord {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "kg" => self.kg.partial_cmp(&other.kg).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        }
    }
}

/// Собирает вид для отрисовки из плоского списка записей и текущего
/// состояния. Чистая функция своих двух аргументов.
pub fn compute_view(records: &[InventoryRecord], state: &InventoryListState) -> InventoryView {
    let passes = |record: &InventoryRecord| {
        record.matches_filter(&state.search_term) && state.active_filter.matches(&record.item)
    };

    let groups: Vec<CategoryGroup> = CATEGORY_ORDER
        .iter()
        .map(|&category| {
            let mut items: Vec<InventoryRecord> = records
                .iter()
                .filter(|r| r.item == category && passes(r))
                .cloned()
                .collect();
            sort_list(&mut items, "kg", state.sort_ascending);

            CategoryGroup {
                category,
                items,
                price_per_kg: unit_price_for(category),
            }
        })
        .collect();

    let mut others: Vec<InventoryRecord> = records
        .iter()
        .filter(|r| !CATEGORY_ORDER.contains(&r.item.as_str()) && passes(r))
        .cloned()
        .collect();
    sort_list(&mut others, "kg", state.sort_ascending);

    let total_shown = groups.iter().map(|g| g.items.len()).sum::<usize>() + others.len();

    InventoryView {
        groups,
        others,
        total_shown,
    }
}

#[cfg(test)]
mod tests {
    use super::super::state::ProductFilter;
    use super::*;

    fn record(item: &str, kg: f64) -> InventoryRecord {
        let unit_price = unit_price_for(item);
        InventoryRecord {
            item: item.to_string(),
            kg,
            unit_price,
            srp: kg * unit_price,
            ..Default::default()
        }
    }

    fn state() -> InventoryListState {
        InventoryListState::default()
    }

    fn sample() -> Vec<InventoryRecord> {
        vec![
            record("Smoked Beef Brisket", 2.0),
            record("Smoked Beef Belly", 1.2),
            record("Smoked Angus \"Bri-Steak\"", 3.1),
            record("Pork Ribs", 0.8),
            record("Smoked Beef Brisket", 5.0),
        ]
    }

    #[test]
    fn test_default_state_shows_everything() {
        let records = sample();
        let view = compute_view(&records, &state());

        assert_eq!(view.groups.len(), 3);
        assert_eq!(view.groups[0].category, "Smoked Beef Brisket");
        assert_eq!(view.groups[0].items.len(), 2);
        assert_eq!(view.groups[1].items.len(), 1);
        assert_eq!(view.groups[2].items.len(), 1);
        assert_eq!(view.others.len(), 1);
        assert_eq!(view.others[0].item, "Pork Ribs");
        assert_eq!(view.total_shown, records.len());
    }

    #[test]
    fn test_group_header_prices_are_fixed() {
        let view = compute_view(&[], &state());

        assert_eq!(view.groups[0].price_per_kg, 3300.0);
        assert_eq!(view.groups[1].price_per_kg, 3300.0);
        assert_eq!(view.groups[2].price_per_kg, 2200.0);
    }

    #[test]
    fn test_empty_groups_exist_structurally() {
        let records = vec![record("Pork Ribs", 0.8)];
        let view = compute_view(&records, &state());

        assert_eq!(view.groups.len(), 3);
        assert!(view.groups.iter().all(|g| g.items.is_empty()));
        assert_eq!(view.total_shown, 1);
    }

    #[test]
    fn test_sort_descending_by_default_ascending_on_toggle() {
        let records = vec![
            record("Smoked Beef Brisket", 2.0),
            record("Smoked Beef Brisket", 5.0),
            record("Smoked Beef Brisket", 1.0),
        ];

        let view = compute_view(&records, &state());
        let weights: Vec<f64> = view.groups[0].items.iter().map(|r| r.kg).collect();
        assert_eq!(weights, vec![5.0, 2.0, 1.0]);

        let mut asc = state();
        asc.sort_ascending = true;
        let view = compute_view(&records, &asc);
        let weights: Vec<f64> = view.groups[0].items.iter().map(|r| r.kg).collect();
        assert_eq!(weights, vec![1.0, 2.0, 5.0]);
    }

    #[test]
    fn test_equal_weights_keep_input_order() {
        let mut first = record("Smoked Beef Brisket", 2.0);
        first.extra.insert("BATCH".to_string(), "first".to_string());
        let mut second = record("Smoked Beef Brisket", 2.0);
        second.extra.insert("BATCH".to_string(), "second".to_string());

        let records = vec![first.clone(), second.clone()];

        let view = compute_view(&records, &state());
        assert_eq!(view.groups[0].items, vec![first.clone(), second.clone()]);

        let mut asc = state();
        asc.sort_ascending = true;
        let view = compute_view(&records, &asc);
        assert_eq!(view.groups[0].items, vec![first, second]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let records = sample();
        let mut searched = state();
        searched.search_term = "BRISKET".to_string();

        let view = compute_view(&records, &searched);
        assert_eq!(view.groups[0].items.len(), 2);
        assert_eq!(view.total_shown, 2);
    }

    #[test]
    fn test_search_matches_stringified_numbers() {
        let records = sample();
        let mut searched = state();
        searched.search_term = "3300".to_string();

        // Совпадение по unit_price, даже если имя не содержит запрос
        let view = compute_view(&records, &searched);
        assert_eq!(view.total_shown, 3);
        assert!(view.others.is_empty());
    }

    #[test]
    fn test_blank_search_passes_everything() {
        let records = sample();
        let mut searched = state();
        searched.search_term = "   ".to_string();

        let view = compute_view(&records, &searched);
        assert_eq!(view.total_shown, records.len());
    }

    #[test]
    fn test_category_filter_angus_matches_bri_steak() {
        assert!(ProductFilter::Angus.matches("Smoked Angus \"Bri-Steak\""));
        assert!(ProductFilter::Angus.matches("BRI-STEAK special"));
        assert!(ProductFilter::Angus.matches("angus cut"));
        assert!(!ProductFilter::Angus.matches("Smoked Beef Brisket"));
    }

    #[test]
    fn test_category_filter_narrows_view() {
        let records = sample();
        let mut filtered = state();
        filtered.active_filter = ProductFilter::Belly;

        let view = compute_view(&records, &filtered);
        assert_eq!(view.total_shown, 1);
        assert_eq!(view.groups[2].items.len(), 1);
        assert!(view.groups[0].items.is_empty());
    }

    #[test]
    fn test_both_predicates_must_pass() {
        let records = sample();
        let mut combined = state();
        combined.active_filter = ProductFilter::Brisket;
        combined.search_term = "5".to_string();

        let view = compute_view(&records, &combined);
        assert_eq!(view.total_shown, 1);
        assert_eq!(view.groups[0].items[0].kg, 5.0);
    }

    #[test]
    fn test_compute_view_is_pure() {
        let records = sample();
        let mut s = state();
        s.search_term = "beef".to_string();

        assert_eq!(compute_view(&records, &s), compute_view(&records, &s));
    }
}
