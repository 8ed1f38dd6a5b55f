use leptos::*;

pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::TherapistsPanel;

#[component]
pub fn TherapistsPage() -> impl IntoView {
    view! { <TherapistsPanel /> }
}
