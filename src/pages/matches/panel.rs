use leptos::{ev::SubmitEvent, *};

use super::view_model::{use_matches_view_model, MatchesViewModel};
use crate::api::types::{ApiError, MatchRecord};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::error::{ErrorBanner, InlineErrorMessage};
use crate::components::forms::{CheckboxField, Modal, TextField};
use crate::components::layout::{DashboardLayout, LoadingSpinner};
use crate::components::table::{Column, DataTable};
use crate::utils::format::short_id;

fn flag_badge(on: bool) -> View {
    let class = if on {
        "inline-flex rounded-full bg-green-100 px-2 py-0.5 text-xs font-medium text-green-800"
    } else {
        "inline-flex rounded-full bg-gray-100 px-2 py-0.5 text-xs font-medium text-gray-600"
    };
    let label = if on { "Yes" } else { "No" };
    view! { <span class=class>{label}</span> }.into_view()
}

fn columns(vm: MatchesViewModel) -> Vec<Column<MatchRecord>> {
    vec![
        Column::text("Patient", |m: &MatchRecord| short_id(&m.patient_id)),
        Column::text("Therapist", |m: &MatchRecord| short_id(&m.therapist_id)),
        Column::text("Score", |m: &MatchRecord| format!("{}%", m.match_score)),
        Column::new("Language", |m: &MatchRecord| flag_badge(m.language_match)),
        Column::new("Specialization", |m: &MatchRecord| {
            flag_badge(m.specialization_match)
        }),
        Column::new("", move |m: &MatchRecord| {
            let record = m.clone();
            let record_for_delete = m.clone();
            view! {
                <div class="flex gap-3">
                    <button
                        type="button"
                        class="text-sm font-medium text-indigo-600 hover:text-indigo-800"
                        on:click=move |_| vm.open_edit(&record)
                    >
                        "Edit"
                    </button>
                    <button
                        type="button"
                        class="text-sm font-medium text-red-600 hover:text-red-800"
                        on:click=move |_| vm.pending_delete.set(Some(record_for_delete.clone()))
                    >
                        "Delete"
                    </button>
                </div>
            }
            .into_view()
        }),
    ]
}

#[component]
pub fn MatchesPanel() -> impl IntoView {
    let vm = use_matches_view_model();
    let resource = vm.list_resource;
    let load_error = Signal::derive(move || resource.get().and_then(|result| result.err()));
    let rows = Signal::derive(move || {
        resource
            .get()
            .and_then(|result| result.ok())
            .map(|list| list.matches)
            .unwrap_or_default()
    });
    let loading = Signal::derive(move || resource.get().is_none());

    let editor_open = Signal::derive(move || vm.editing.get().is_some());
    let editor_title = Signal::derive(move || match vm.editing.get() {
        Some(Some(_)) => "Edit match".to_string(),
        _ => "New match".to_string(),
    });

    let submit_editor = move |ev: SubmitEvent| {
        ev.prevent_default();
        match vm.form.to_payload() {
            Ok(payload) => {
                let id = vm.editing.get_untracked().flatten();
                vm.save_action.dispatch((id, payload));
            }
            Err(msg) => vm.error.set(Some(ApiError::unknown(msg))),
        }
    };

    let delete_open = Signal::derive(move || vm.pending_delete.get().is_some());
    let delete_message = Signal::derive(move || {
        vm.pending_delete
            .get()
            .map(|m| {
                format!(
                    "Remove the match between patient {} and therapist {}?",
                    short_id(&m.patient_id),
                    short_id(&m.therapist_id)
                )
            })
            .unwrap_or_default()
    });

    view! {
        <DashboardLayout title="Matches">
            <ErrorBanner error=load_error />
            <div class="mb-4 flex flex-wrap items-end gap-3">
                <label class="block">
                    <span class="text-xs font-medium text-gray-500">"Patient id"</span>
                    <input
                        type="text"
                        class="mt-1 block rounded-md border border-gray-300 px-3 py-1.5 text-sm"
                        prop:value=move || vm.patient_filter.get()
                        on:input=move |ev| vm.patient_filter.set(event_target_value(&ev))
                    />
                </label>
                <label class="block">
                    <span class="text-xs font-medium text-gray-500">"Therapist id"</span>
                    <input
                        type="text"
                        class="mt-1 block rounded-md border border-gray-300 px-3 py-1.5 text-sm"
                        prop:value=move || vm.therapist_filter.get()
                        on:input=move |ev| vm.therapist_filter.set(event_target_value(&ev))
                    />
                </label>
                <label class="block">
                    <span class="text-xs font-medium text-gray-500">"Min score"</span>
                    <input
                        type="number"
                        min="0"
                        max="100"
                        class="mt-1 block w-24 rounded-md border border-gray-300 px-3 py-1.5 text-sm"
                        prop:value=move || vm.min_score_filter.get()
                        on:input=move |ev| vm.min_score_filter.set(event_target_value(&ev))
                    />
                </label>
                <label class="block">
                    <span class="text-xs font-medium text-gray-500">"Max score"</span>
                    <input
                        type="number"
                        min="0"
                        max="100"
                        class="mt-1 block w-24 rounded-md border border-gray-300 px-3 py-1.5 text-sm"
                        prop:value=move || vm.max_score_filter.get()
                        on:input=move |ev| vm.max_score_filter.set(event_target_value(&ev))
                    />
                </label>
                <button
                    type="button"
                    class="ml-auto rounded-md bg-indigo-600 px-4 py-2 text-sm font-semibold text-white hover:bg-indigo-700"
                    on:click=move |_| vm.open_create()
                >
                    "New match"
                </button>
            </div>

            <Show when=move || !loading.get() fallback=move || view! { <LoadingSpinner /> }>
                <DataTable
                    columns=columns(vm)
                    rows=rows
                    empty_title="No matches"
                    empty_description="Nothing matched your filters"
                />
            </Show>

            <Modal
                is_open=editor_open
                title=editor_title
                on_close=Callback::new(move |_| vm.close_editor())
            >
                {move || view! {
                    <form class="space-y-3" on:submit=submit_editor>
                        <InlineErrorMessage error=Signal::derive(move || vm.error.get()) />
                        <TextField label="Patient id" value=vm.form.patient_id required=true />
                        <TextField label="Therapist id" value=vm.form.therapist_id required=true />
                        <TextField label="Match score (0-100)" value=vm.form.match_score required=true />
                        <CheckboxField label="Language match" value=vm.form.language_match />
                        <CheckboxField label="Specialization match" value=vm.form.specialization_match />
                        <button
                            type="submit"
                            class="w-full rounded-md bg-indigo-600 px-4 py-2 text-sm font-semibold text-white hover:bg-indigo-700 disabled:opacity-50"
                            disabled=move || vm.save_action.pending().get()
                        >
                            "Save match"
                        </button>
                    </form>
                }}
            </Modal>

            <ConfirmDialog
                is_open=delete_open
                title="Delete match"
                message=delete_message
                confirm_label="Delete"
                destructive=true
                confirm_disabled=Signal::derive(move || vm.delete_action.pending().get())
                on_confirm=Callback::new(move |_| {
                    if let Some(record) = vm.pending_delete.get_untracked() {
                        vm.delete_action.dispatch(record.id);
                    }
                })
                on_cancel=Callback::new(move |_| vm.pending_delete.set(None))
            />
        </DashboardLayout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{admin_account, provide_session};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn matches_panel_renders_score_filters() {
        let html = render_to_string(move || {
            provide_session(Some(admin_account()));
            view! { <MatchesPanel /> }
        });
        assert!(html.contains("Matches"));
        assert!(html.contains("Min score"));
        assert!(html.contains("New match"));
    }
}
