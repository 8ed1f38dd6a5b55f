use leptos::*;

pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::MatchesPanel;

#[component]
pub fn MatchesPage() -> impl IntoView {
    view! { <MatchesPanel /> }
}
