use leptos::{ev::SubmitEvent, *};

use super::utils::{QuestionForm, QUESTION_TYPE_OPTIONS};
use super::view_model::{use_questionnaire_editor_view_model, QuestionnaireEditorViewModel};
use crate::components::error::InlineErrorMessage;
use crate::components::forms::{SelectField, TextAreaField, TextField};
use crate::components::layout::{DashboardLayout, LoadingSpinner};

#[component]
fn QuestionCard(vm: QuestionnaireEditorViewModel, question: QuestionForm) -> impl IntoView {
    let id_for_up = question.id.clone();
    let id_for_down = question.id.clone();
    let id_for_remove = question.id.clone();
    let question_type = question.question_type;
    let type_options: Vec<(String, String)> = QUESTION_TYPE_OPTIONS
        .iter()
        .map(|(value, label)| (value.to_string(), label.to_string()))
        .collect();

    view! {
        <div class="rounded-md border border-gray-200 p-4 space-y-3">
            <div class="flex items-center justify-end gap-2">
                <button
                    type="button"
                    class="text-sm text-gray-500 hover:text-gray-800"
                    on:click=move |_| vm.form.move_question_up(&id_for_up)
                >
                    {"↑"}
                </button>
                <button
                    type="button"
                    class="text-sm text-gray-500 hover:text-gray-800"
                    on:click=move |_| vm.form.move_question_down(&id_for_down)
                >
                    {"↓"}
                </button>
                <button
                    type="button"
                    class="text-sm font-medium text-red-600 hover:text-red-800"
                    on:click=move |_| vm.form.remove_question(&id_for_remove)
                >
                    "Remove"
                </button>
            </div>
            <TextField label="Question" value=question.text required=true />
            <SelectField label="Type" value=question_type options=type_options />
            <Show when=move || question_type.get() == "multiple_choice">
                <TextAreaField
                    label="Choices (one per line)"
                    value=question.options
                    rows=4
                />
            </Show>
        </div>
    }
}

#[component]
pub fn QuestionnaireEditorPanel(#[prop(optional_no_strip)] id: Option<String>) -> impl IntoView {
    let vm = use_questionnaire_editor_view_model(id);
    let heading = if vm.is_edit() {
        "Edit questionnaire"
    } else {
        "New questionnaire"
    };
    let loading = Signal::derive(move || vm.is_edit() && vm.load_resource.get().is_none());

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <DashboardLayout title=heading>
            <Show when=move || !loading.get() fallback=move || view! { <LoadingSpinner /> }>
                <form class="max-w-2xl space-y-4" on:submit=submit>
                    <InlineErrorMessage error=Signal::derive(move || vm.error.get()) />
                    <TextField label="Title" value=vm.form.title required=true />
                    <TextAreaField label="Description" value=vm.form.description />

                    <h2 class="text-sm font-semibold text-gray-700">"Questions"</h2>
                    <For
                        each=move || vm.form.questions.get()
                        key=|question| question.id.clone()
                        children=move |question| view! { <QuestionCard vm=vm question=question /> }
                    />
                    <button
                        type="button"
                        class="rounded-md border border-gray-300 px-4 py-2 text-sm font-medium text-gray-700 hover:bg-gray-50"
                        on:click=move |_| vm.form.add_question()
                    >
                        "Add question"
                    </button>

                    <div class="flex items-center gap-3">
                        <button
                            type="submit"
                            class="rounded-md bg-indigo-600 px-4 py-2 text-sm font-semibold text-white hover:bg-indigo-700 disabled:opacity-50"
                            disabled=move || vm.save_action.pending().get()
                        >
                            "Save questionnaire"
                        </button>
                        <a href="/questionnaires" class="text-sm text-gray-500 hover:text-gray-800">
                            "Cancel"
                        </a>
                    </div>
                </form>
            </Show>
        </DashboardLayout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{admin_account, provide_session};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn builder_starts_with_one_question_card() {
        let html = render_to_string(move || {
            provide_session(Some(admin_account()));
            view! { <QuestionnaireEditorPanel /> }
        });
        assert!(html.contains("New questionnaire"));
        assert!(html.contains("Add question"));
        assert!(html.contains("Multiple choice"));
    }
}
