use leptos::*;

pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::CertificatesPanel;

#[component]
pub fn CertificatesPage() -> impl IntoView {
    view! { <CertificatesPanel /> }
}
