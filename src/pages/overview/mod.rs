use leptos::*;

pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::OverviewPanel;

#[component]
pub fn OverviewPage() -> impl IntoView {
    view! { <OverviewPanel /> }
}
