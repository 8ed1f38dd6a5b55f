use leptos::*;

pub mod repository;
pub mod utils;
pub mod view_model;

mod editor;
mod panel;

pub use editor::QuestionnaireEditorPanel;
pub use panel::QuestionnairesPanel;

/// Which template the editor route points at, if any. The builder route
/// and server-side rendering both start from a blank form.
fn editor_id() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        crate::utils::storage::current_pathname()
            .and_then(|path| utils::editor_id_from_path(&path))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

#[component]
pub fn QuestionnairesPage() -> impl IntoView {
    view! { <QuestionnairesPanel /> }
}

#[component]
pub fn QuestionnaireEditorPage() -> impl IntoView {
    let id = editor_id();
    view! { <QuestionnaireEditorPanel id=id /> }
}
