use leptos::{ev::SubmitEvent, *};

use super::view_model::{use_therapists_view_model, TherapistsViewModel};
use crate::api::types::{ApiError, Therapist};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::error::{ErrorBanner, InlineErrorMessage};
use crate::components::forms::{Modal, TextAreaField, TextField};
use crate::components::layout::{DashboardLayout, LoadingSpinner};
use crate::components::pagination::Pagination;
use crate::components::table::{Column, DataTable};
use crate::utils::files;

fn columns(vm: TherapistsViewModel) -> Vec<Column<Therapist>> {
    vec![
        Column::text("Name", |t: &Therapist| t.full_name()),
        Column::text("License", |t: &Therapist| t.license_number.clone()),
        Column::text("Experience", |t: &Therapist| {
            format!("{} yrs", t.years_of_experience)
        }),
        Column::text("Rate", |t: &Therapist| format!("${:.2}/h", t.hourly_rate)),
        Column::new("Verified", move |t: &Therapist| {
            let id = t.id.clone();
            let verified = t.is_verified;
            view! {
                <button
                    type="button"
                    class=if verified {
                        "rounded-full bg-green-100 px-2 py-0.5 text-xs font-medium text-green-700"
                    } else {
                        "rounded-full bg-yellow-100 px-2 py-0.5 text-xs font-medium text-yellow-700"
                    }
                    on:click=move |_| vm.verification_action.dispatch((id.clone(), !verified))
                >
                    {if verified { "Verified" } else { "Unverified" }}
                </button>
            }
            .into_view()
        }),
        Column::new("Accepting", move |t: &Therapist| {
            let id = t.id.clone();
            let accepting = t.is_accepting_patients;
            view! {
                <button
                    type="button"
                    class=if accepting {
                        "rounded-full bg-green-100 px-2 py-0.5 text-xs font-medium text-green-700"
                    } else {
                        "rounded-full bg-gray-100 px-2 py-0.5 text-xs font-medium text-gray-600"
                    }
                    on:click=move |_| vm.accepting_action.dispatch((id.clone(), !accepting))
                >
                    {if accepting { "Accepting" } else { "Closed" }}
                </button>
            }
            .into_view()
        }),
        Column::new("", move |t: &Therapist| {
            let record = t.clone();
            let record_for_delete = t.clone();
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
pub fn TherapistsPanel() -> impl IntoView {
    let vm = use_therapists_view_model();
    let resource = vm.list_resource;
    let load_error = Signal::derive(move || resource.get().and_then(|result| result.err()));
    let rows = Signal::derive(move || {
        resource
            .get()
            .and_then(|result| result.ok())
            .map(|list| list.therapists)
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

    let editor_open = Signal::derive(move || vm.editing.get().is_some());
    let editor_title = Signal::derive(move || match vm.editing.get() {
        Some(Some(_)) => "Edit therapist".to_string(),
        _ => "New therapist".to_string(),
    });

    let submit_editor = move |ev: SubmitEvent| {
        ev.prevent_default();
        match vm.form.to_draft() {
            Ok(draft) => {
                let id = vm.editing.get_untracked().flatten();
                vm.save_action.dispatch((id, draft));
            }
            Err(msg) => vm.error.set(Some(ApiError::unknown(msg))),
        }
    };

    let delete_open = Signal::derive(move || vm.pending_delete.get().is_some());
    let delete_message = Signal::derive(move || {
        vm.pending_delete
            .get()
            .map(|t| format!("Delete therapist {}? Their certificates go with them.", t.full_name()))
            .unwrap_or_default()
    });

    view! {
        <DashboardLayout title="Therapists">
            <ErrorBanner error=load_error />
            <div class="mb-4 flex flex-wrap items-end gap-3">
                <label class="block">
                    <span class="text-xs font-medium text-gray-500">"Search"</span>
                    <input
                        type="text"
                        class="mt-1 block rounded-md border border-gray-300 px-3 py-1.5 text-sm"
                        placeholder="Name or license"
                        prop:value=move || vm.query_filter.get()
                        on:input=move |ev| vm.set_query_filter(event_target_value(&ev))
                    />
                </label>
                <label class="block">
                    <span class="text-xs font-medium text-gray-500">"Verification"</span>
                    <select
                        class="mt-1 block rounded-md border border-gray-300 px-3 py-1.5 text-sm"
                        on:change=move |ev| vm.set_verified_filter(event_target_value(&ev))
                    >
                        <option value="">"All"</option>
                        <option value="true">"Verified"</option>
                        <option value="false">"Unverified"</option>
                    </select>
                </label>
                <label class="block">
                    <span class="text-xs font-medium text-gray-500">"Accepting patients"</span>
                    <select
                        class="mt-1 block rounded-md border border-gray-300 px-3 py-1.5 text-sm"
                        on:change=move |ev| vm.set_accepting_filter(event_target_value(&ev))
                    >
                        <option value="">"All"</option>
                        <option value="true">"Accepting"</option>
                        <option value="false">"Closed"</option>
                    </select>
                </label>
                <button
                    type="button"
                    class="ml-auto rounded-md bg-indigo-600 px-4 py-2 text-sm font-semibold text-white hover:bg-indigo-700"
                    on:click=move |_| vm.open_create()
                >
                    "New therapist"
                </button>
            </div>

            <Show when=move || !loading.get() fallback=move || view! { <LoadingSpinner /> }>
                <DataTable
                    columns=columns(vm)
                    rows=rows
                    empty_title="No therapists"
                    empty_description="Nothing matched your filters"
                />
                <Pagination
                    page=Signal::derive(move || vm.page.get())
                    total=total
                    on_page=Callback::new(move |page| vm.page.set(page))
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
                        <div class="grid grid-cols-2 gap-3">
                            <TextField label="First name" value=vm.form.first_name required=true />
                            <TextField label="Last name" value=vm.form.last_name required=true />
                        </div>
                        <TextField label="License number" value=vm.form.license_number required=true />
                        <TextField
                            label="Specializations"
                            value=vm.form.specializations
                            placeholder="anxiety, depression"
                        />
                        <div class="grid grid-cols-2 gap-3">
                            <TextField label="Years of experience" value=vm.form.years_of_experience />
                            <TextField label="Hourly rate" value=vm.form.hourly_rate />
                        </div>
                        <TextField label="Education" value=vm.form.education />
                        <TextField label="Languages" value=vm.form.languages placeholder="en, fr" />
                        <TextAreaField label="Bio" value=vm.form.bio />
                        <label class="block">
                            <span class="text-sm font-medium text-gray-700">"Certificate document"</span>
                            <input
                                type="file"
                                class="mt-1 block w-full text-sm text-gray-500"
                                on:change=move |ev| files::capture_upload(&ev, vm.form.document)
                            />
                            {move || vm.form.document.get().map(|upload| view! {
                                <p class="mt-1 text-xs text-gray-500">{upload.file_name}</p>
                            })}
                        </label>
                        <button
                            type="submit"
                            class="w-full rounded-md bg-indigo-600 px-4 py-2 text-sm font-semibold text-white hover:bg-indigo-700 disabled:opacity-50"
                            disabled=move || vm.save_action.pending().get()
                        >
                            "Save therapist"
                        </button>
                    </form>
                }}
            </Modal>

            <ConfirmDialog
                is_open=delete_open
                title="Delete therapist"
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
    fn therapists_panel_renders_filters_and_actions() {
        let html = render_to_string(move || {
            provide_session(Some(admin_account()));
            view! { <TherapistsPanel /> }
        });
        assert!(html.contains("Therapists"));
        assert!(html.contains("Name or license"));
        assert!(html.contains("Accepting patients"));
        assert!(html.contains("New therapist"));
    }
}
