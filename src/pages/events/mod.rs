use leptos::*;

pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::EventsPanel;

#[component]
pub fn EventsPage() -> impl IntoView {
    view! { <EventsPanel /> }
}
