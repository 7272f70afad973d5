use contracts::domain::a001_inventory::record::InventoryRecord;
use leptos::prelude::*;

use super::search_bar::SearchBar;
use super::state::{create_state, ProductFilter};
use super::view_model::{compute_view, CategoryGroup};
use crate::domain::a001_inventory::api;
use crate::shared::format::{format_kg, format_php};

/// Дашборд инвентаря: один запрос при монтировании, дальше все
/// производное состояние считается на клиенте из плоского списка.
#[component]
pub fn InventoryDashboard() -> impl IntoView {
    let state = create_state();
    let (inventory, set_inventory) = signal(Vec::<InventoryRecord>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    // Единственная загрузка данных, при монтировании
    Effect::new(move |_| {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_inventory().await {
                Ok(items) => {
                    set_inventory.set(items);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Error fetching inventory: {}", e);
                    set_error.set(Some(
                        "Failed to load inventory data. Please try again.".to_string(),
                    ));
                }
            }
            set_loading.set(false);
        });
    });

    let on_search = Callback::new(move |term: String| {
        state.update(|s| s.search_term = term);
    });
    let on_sort_toggle = Callback::new(move |_: ()| {
        state.update(|s| s.sort_ascending = !s.sort_ascending);
    });
    let on_filter_change = Callback::new(move |filter: ProductFilter| {
        state.update(|s| s.active_filter = filter);
    });

    view! {
        <div class="dashboard">
            {move || {
                error
                    .get()
                    .map(|err| {
                        view! {
                            <div class="error-banner">
                                <p>{err}</p>
                            </div>
                        }
                    })
            }}

            <SearchBar
                sort_ascending=Signal::derive(move || state.get().sort_ascending)
                active_filter=Signal::derive(move || state.get().active_filter)
                on_search=on_search
                on_sort_toggle=on_sort_toggle
                on_filter_change=on_filter_change
            />

            {move || {
                if loading.get() {
                    return view! {
                        <div class="loading">
                            <div class="spinner"></div>
                        </div>
                    }
                        .into_any();
                }

                let records = inventory.get();
                let view_state = state.get();
                let data = compute_view(&records, &view_state);
                let total_count = records.len();
                let total_shown = data.total_shown;

                // Пустая группа не рисуется, но в данных существует
                let groups = data
                    .groups
                    .into_iter()
                    .filter(|group| !group.items.is_empty())
                    .map(|group| view! { <CategorySection group=group /> })
                    .collect_view();

                let others = (!data.others.is_empty())
                    .then(|| view! { <OtherItemsSection items=data.others /> });

                let empty_state = (total_shown == 0)
                    .then(|| {
                        let criteria_active = !view_state.search_term.trim().is_empty()
                            || view_state.active_filter != ProductFilter::All;
                        view! { <EmptyState criteria_active=criteria_active /> }
                    });

                let last_updated = String::from(
                    js_sys::Date::new_0()
                        .to_locale_date_string("en-PH", &wasm_bindgen::JsValue::UNDEFINED),
                );

                view! {
                    <>
                        {groups}
                        {others}
                        {empty_state}
                        <div class="dashboard-footer">
                            <span>
                                {format!("Showing {} of {} items", total_shown, total_count)}
                            </span>
                            <span class="dashboard-footer-date">
                                {format!("Last updated: {}", last_updated)}
                            </span>
                        </div>
                    </>
                }
                    .into_any()
            }}
        </div>
    }
}

/// Секция одной канонической категории с фиксированной ценой в шапке
#[component]
fn CategorySection(group: CategoryGroup) -> impl IntoView {
    let price_per_kg = group.price_per_kg;

    view! {
        <div class="category-section">
            <div class="category-header">
                <h2>{group.category}</h2>
                <div class="category-price">
                    {format!("Price per KG: {}", format_php(price_per_kg))}
                </div>
            </div>
            <div class="card-grid">
                {group
                    .items
                    .into_iter()
                    .map(|record| view! { <CategoryCard record=record price_per_kg=price_per_kg /> })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Карточка товара внутри категории. SRP считается от цены категории.
#[component]
fn CategoryCard(record: InventoryRecord, price_per_kg: f64) -> impl IntoView {
    let srp = if record.kg != 0.0 && price_per_kg != 0.0 {
        record.kg * price_per_kg
    } else {
        0.0
    };

    view! {
        <div class="card">
            <h3>{record.item.clone()}</h3>
            <div class="card-rows">
                <div class="card-row">
                    <span>"Weight"</span>
                    <span class="card-value">{format_kg(record.kg)}</span>
                </div>
                <div class="card-row">
                    <span>"SRP"</span>
                    <span class="card-value">{format_php(srp)}</span>
                </div>
            </div>
        </div>
    }
}

/// Товары вне трех канонических категорий
#[component]
fn OtherItemsSection(items: Vec<InventoryRecord>) -> impl IntoView {
    view! {
        <div class="category-section">
            <div class="category-header">
                <h2>"Other Items"</h2>
            </div>
            <div class="card-grid">
                {items
                    .into_iter()
                    .map(|record| view! { <OtherItemCard record=record /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn OtherItemCard(record: InventoryRecord) -> impl IntoView {
    view! {
        <div class="card">
            <h3>{record.item.clone()}</h3>
            <div class="card-rows">
                <div class="card-row">
                    <span>"Weight"</span>
                    <span class="card-value">{format_kg(record.kg)}</span>
                </div>
                <div class="card-row">
                    <span>"Price per KG"</span>
                    <span class="card-value">{format_php(record.unit_price)}</span>
                </div>
                <div class="card-row">
                    <span>"SRP"</span>
                    <span class="card-value">{format_php(record.srp)}</span>
                </div>
            </div>
        </div>
    }
}

/// Заглушка при пустой выдаче: текст зависит от того, активны ли
/// поиск или фильтр
#[component]
fn EmptyState(criteria_active: bool) -> impl IntoView {
    let hint = if criteria_active {
        "Try adjusting your search or filter criteria"
    } else {
        "Your inventory appears to be empty."
    };

    view! {
        <div class="empty-state">
            <h3>"No items found"</h3>
            <p>{hint}</p>
        </div>
    }
}
