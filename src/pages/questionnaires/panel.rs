use leptos::*;

use super::view_model::{use_questionnaires_view_model, QuestionnairesViewModel};
use crate::api::types::Questionnaire;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::error::ErrorBanner;
use crate::components::forms::Modal;
use crate::components::layout::{DashboardLayout, LoadingSpinner};
use crate::components::pagination::Pagination;
use crate::components::table::{Column, DataTable};
use crate::utils::format::{format_date_time, short_id};

fn columns(vm: QuestionnairesViewModel) -> Vec<Column<Questionnaire>> {
    vec![
        Column::text("Title", |q: &Questionnaire| q.title.clone()),
        Column::text("Questions", |q: &Questionnaire| {
            q.questions.len().to_string()
        }),
        Column::new("Status", move |q: &Questionnaire| {
            let id = q.id.clone();
            let is_active = q.is_active;
            let (class, label) = if is_active {
                (
                    "inline-flex rounded-full bg-green-100 px-2 py-0.5 text-xs font-medium text-green-800 hover:bg-green-200",
                    "Active",
                )
            } else {
                (
                    "inline-flex rounded-full bg-gray-100 px-2 py-0.5 text-xs font-medium text-gray-600 hover:bg-gray-200",
                    "Inactive",
                )
            };
            view! {
                <button
                    type="button"
                    class=class
                    on:click=move |_| vm.toggle_action.dispatch((id.clone(), !is_active))
                >
                    {label}
                </button>
            }
            .into_view()
        }),
        Column::new("", move |q: &Questionnaire| {
            let edit_href = format!("/questionnaires/{}/edit", q.id);
            let record_for_responses = q.clone();
            let record_for_delete = q.clone();
            view! {
                <div class="flex gap-3">
                    <button
                        type="button"
                        class="text-sm font-medium text-gray-600 hover:text-gray-800"
                        on:click=move |_| vm.responses_for.set(Some(record_for_responses.clone()))
                    >
                        "Responses"
                    </button>
                    <a
                        href=edit_href
                        class="text-sm font-medium text-indigo-600 hover:text-indigo-800"
                    >
                        "Edit"
                    </a>
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
pub fn QuestionnairesPanel() -> impl IntoView {
    let vm = use_questionnaires_view_model();
    let resource = vm.list_resource;
    let load_error = Signal::derive(move || resource.get().and_then(|result| result.err()));
    let rows = Signal::derive(move || {
        resource
            .get()
            .and_then(|result| result.ok())
            .map(|list| list.questionnaires)
            .unwrap_or_default()
    });
    let total = Signal::derive(move || {
        resource
            .get()
            .and_then(|result| result.ok())
            .map(|list| list.total)
            .unwrap_or(0)
    });
    let loading = Signal::derive(move || resource.get().is_none());

    let delete_open = Signal::derive(move || vm.pending_delete.get().is_some());
    let delete_message = Signal::derive(move || {
        vm.pending_delete
            .get()
            .map(|q| format!("Delete the questionnaire \"{}\"?", q.title))
            .unwrap_or_default()
    });

    view! {
        <DashboardLayout title="Questionnaires">
            <ErrorBanner error=load_error />
            <div class="mb-4 flex flex-wrap items-end gap-3">
                <label class="block">
                    <span class="text-xs font-medium text-gray-500">"Status"</span>
                    <select
                        class="mt-1 block rounded-md border border-gray-300 px-3 py-1.5 text-sm"
                        on:change=move |ev| vm.set_active_filter(event_target_value(&ev))
                    >
                        <option value="">"All"</option>
                        <option value="true">"Active"</option>
                        <option value="false">"Inactive"</option>
                    </select>
                </label>
                <a
                    href="/questionnaires/new"
                    class="ml-auto rounded-md bg-indigo-600 px-4 py-2 text-sm font-semibold text-white hover:bg-indigo-700"
                >
                    "New questionnaire"
                </a>
            </div>

            <Show when=move || !loading.get() fallback=move || view! { <LoadingSpinner /> }>
                <DataTable
                    columns=columns(vm)
                    rows=rows
                    empty_title="No questionnaires"
                    empty_description="Create a template to send to patients"
                />
                <Pagination
                    page=Signal::derive(move || vm.page.get())
                    total=total
                    on_page=Callback::new(move |page| vm.page.set(page))
                />
            </Show>

            <Modal
                is_open=Signal::derive(move || vm.responses_for.get().is_some())
                title=Signal::derive(move || {
                    vm.responses_for
                        .get()
                        .map(|q| format!("Responses: {}", q.title))
                        .unwrap_or_default()
                })
                on_close=Callback::new(move |_| vm.responses_for.set(None))
            >
                {move || {
                    let state = vm.responses_resource.get().flatten();
                    match state {
                        None => view! { <LoadingSpinner /> }.into_view(),
                        Some(Err(err)) => view! {
                            <p class="text-sm text-red-600">{err.error}</p>
                        }
                        .into_view(),
                        Some(Ok(list)) if list.responses.is_empty() => view! {
                            <p class="text-sm text-gray-500">"No responses yet."</p>
                        }
                        .into_view(),
                        Some(Ok(list)) => view! {
                            <ul class="divide-y divide-gray-100">
                                {list
                                    .responses
                                    .iter()
                                    .map(|response| {
                                        let patient = short_id(&response.patient_id);
                                        let completed = response
                                            .completed_at
                                            .as_ref()
                                            .map(format_date_time)
                                            .unwrap_or_else(|| "In progress".to_string());
                                        view! {
                                            <li class="flex justify-between py-2 text-sm">
                                                <span class="text-gray-700">{format!("Patient {}", patient)}</span>
                                                <span class="text-gray-500">{completed}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        }
                        .into_view(),
                    }
                }}
            </Modal>

            <ConfirmDialog
                is_open=delete_open
                title="Delete questionnaire"
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
    fn questionnaires_panel_links_to_the_builder() {
        let html = render_to_string(move || {
            provide_session(Some(admin_account()));
            view! { <QuestionnairesPanel /> }
        });
        assert!(html.contains("Questionnaires"));
        assert!(html.contains("/questionnaires/new"));
        assert!(html.contains("New questionnaire"));
    }
}
