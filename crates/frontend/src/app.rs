use crate::app_shell::AppShell;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <AppShell />
    }
}
