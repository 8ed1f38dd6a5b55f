use leptos::*;

pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::PatientsPanel;

#[component]
pub fn PatientsPage() -> impl IntoView {
    view! { <PatientsPanel /> }
}
