use leptos::*;

pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::AccountsPanel;

#[component]
pub fn AccountsPage() -> impl IntoView {
    view! { <AccountsPanel /> }
}
