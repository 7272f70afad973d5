use leptos::prelude::*;

/// Вкладки фильтра по типу продукта
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProductFilter {
    All,
    Brisket,
    Angus,
    Belly,
}

impl ProductFilter {
    pub const OPTIONS: [ProductFilter; 4] = [
        ProductFilter::All,
        ProductFilter::Brisket,
        ProductFilter::Angus,
        ProductFilter::Belly,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProductFilter::All => "All Products",
            ProductFilter::Brisket => "Beef Brisket",
            ProductFilter::Angus => "Angus \"Bri-Steak\"",
            ProductFilter::Belly => "Beef Belly",
        }
    }

    /// Пропускает ли фильтр товар с таким именем (без учета регистра)
    pub fn matches(&self, item: &str) -> bool {
        let name = item.to_lowercase();
        match self {
            ProductFilter::All => true,
            ProductFilter::Brisket => name.contains("brisket"),
            ProductFilter::Angus => name.contains("angus") || name.contains("bri-steak"),
            ProductFilter::Belly => name.contains("belly"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct InventoryListState {
    // search
    pub search_term: String,

    // client sorting, by weight only
    pub sort_ascending: bool,

    // product filter
    pub active_filter: ProductFilter,
}

impl Default for InventoryListState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            // Largest first by default
            sort_ascending: false,
            active_filter: ProductFilter::All,
        }
    }
}

pub fn create_state() -> RwSignal<InventoryListState> {
    RwSignal::new(InventoryListState::default())
}
