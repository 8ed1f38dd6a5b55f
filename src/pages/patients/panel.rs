use leptos::{ev::SubmitEvent, *};

use super::view_model::{use_patients_view_model, PatientsViewModel};
use crate::api::types::{ApiError, Patient};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::error::{ErrorBanner, InlineErrorMessage};
use crate::components::forms::{Modal, TextAreaField, TextField};
use crate::components::layout::{DashboardLayout, LoadingSpinner};
use crate::components::pagination::Pagination;
use crate::components::table::{Column, DataTable};
use crate::utils::files;
use crate::utils::format::format_opt_date;

fn columns(vm: PatientsViewModel) -> Vec<Column<Patient>> {
    vec![
        Column::text("Name", |p: &Patient| p.full_name()),
        Column::text("Phone", |p: &Patient| {
            p.phone.clone().unwrap_or_else(|| "N/A".to_string())
        }),
        Column::text("Birth date", |p: &Patient| {
            format_opt_date(p.birth_date.as_ref())
        }),
        Column::text("Timezone", |p: &Patient| p.timezone.clone()),
        Column::text("Language", |p: &Patient| p.language.clone()),
        Column::new("", move |p: &Patient| {
            let record = p.clone();
            let record_for_delete = p.clone();
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
pub fn PatientsPanel() -> impl IntoView {
    let vm = use_patients_view_model();
    let resource = vm.list_resource;
    let load_error = Signal::derive(move || resource.get().and_then(|result| result.err()));
    let rows = Signal::derive(move || {
        resource
            .get()
            .and_then(|result| result.ok())
            .map(|list| list.patients)
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
        Some(Some(_)) => "Edit patient".to_string(),
        _ => "New patient".to_string(),
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
            .map(|p| format!("Delete patient {}? This cannot be undone.", p.full_name()))
            .unwrap_or_default()
    });

    view! {
        <DashboardLayout title="Patients">
            <ErrorBanner error=load_error />
            <div class="mb-4 flex justify-end">
                <button
                    type="button"
                    class="rounded-md bg-indigo-600 px-4 py-2 text-sm font-semibold text-white hover:bg-indigo-700"
                    on:click=move |_| vm.open_create()
                >
                    "New patient"
                </button>
            </div>

            <Show when=move || !loading.get() fallback=move || view! { <LoadingSpinner /> }>
                <DataTable
                    columns=columns(vm)
                    rows=rows
                    empty_title="No patients"
                    empty_description="No patients registered yet"
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
                        <div class="grid grid-cols-2 gap-3">
                            <TextField label="Phone" value=vm.form.phone />
                            <TextField label="Birth date" value=vm.form.birth_date input_type="date" />
                        </div>
                        <div class="grid grid-cols-2 gap-3">
                            <TextField label="Timezone" value=vm.form.timezone placeholder="America/New_York" />
                            <TextField label="Language" value=vm.form.language placeholder="en" />
                        </div>
                        <TextField label="Gender" value=vm.form.gender />
                        <TextAreaField label="Bio" value=vm.form.bio />
                        <label class="block">
                            <span class="text-sm font-medium text-gray-700">"Profile picture"</span>
                            <input
                                type="file"
                                accept="image/*"
                                class="mt-1 block w-full text-sm text-gray-500"
                                on:change=move |ev| files::capture_upload(&ev, vm.form.profile_picture)
                            />
                            {move || vm.form.profile_picture.get().map(|upload| view! {
                                <p class="mt-1 text-xs text-gray-500">{upload.file_name}</p>
                            })}
                        </label>
                        <button
                            type="submit"
                            class="w-full rounded-md bg-indigo-600 px-4 py-2 text-sm font-semibold text-white hover:bg-indigo-700 disabled:opacity-50"
                            disabled=move || vm.save_action.pending().get()
                        >
                            "Save patient"
                        </button>
                    </form>
                }}
            </Modal>

            <ConfirmDialog
                is_open=delete_open
                title="Delete patient"
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
