use leptos::prelude::*;

use super::state::ProductFilter;

/// Строка управления дашбордом: поиск, переключатель сортировки по весу
/// и вкладки фильтра по типу продукта.
///
/// Каждое нажатие клавиши уходит наверх сразу, без debounce.
#[component]
pub fn SearchBar(
    #[prop(into)] sort_ascending: Signal<bool>,
    #[prop(into)] active_filter: Signal<ProductFilter>,
    #[prop(into)] on_search: Callback<String>,
    #[prop(into)] on_sort_toggle: Callback<()>,
    #[prop(into)] on_filter_change: Callback<ProductFilter>,
) -> impl IntoView {
    let (search_term, set_search_term) = signal(String::new());

    view! {
        <div class="search-bar">
            <div class="search-bar-top">
                <h1>"Inventory"</h1>
                <div class="search-bar-controls">
                    <button class="sort-toggle" on:click=move |_| on_sort_toggle.run(())>
                        {move || {
                            if sort_ascending.get() {
                                "Sort by Weight: ↑ Smallest First"
                            } else {
                                "Sort by Weight: ↓ Largest First"
                            }
                        }}
                    </button>
                    <input
                        type="text"
                        class="search-input"
                        placeholder="Search by name, weight, or price..."
                        prop:value=move || search_term.get()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            set_search_term.set(value.clone());
                            on_search.run(value);
                        }
                    />
                </div>
            </div>

            // Вкладки фильтра
            <div class="filter-tabs">
                {ProductFilter::OPTIONS
                    .iter()
                    .map(|option| {
                        let option = *option;
                        view! {
                            <button
                                class=move || {
                                    if active_filter.get() == option {
                                        "filter-tab filter-tab-active"
                                    } else {
                                        "filter-tab"
                                    }
                                }
                                on:click=move |_| on_filter_change.run(option)
                            >
                                {option.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
