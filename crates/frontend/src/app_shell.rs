//! Application shell: рамка страницы вокруг дашборда

use crate::domain::a001_inventory::ui::dashboard::InventoryDashboard;
use leptos::prelude::*;

#[component]
pub fn AppShell() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <div class="page">
            <main class="page-main">
                <InventoryDashboard />
            </main>
            <footer class="page-footer">
                <p>{format!("© {} Farmhouse Smokers. All rights reserved.", year)}</p>
            </footer>
        </div>
    }
}
