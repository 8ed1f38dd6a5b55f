use leptos::{ev::SubmitEvent, *};

use super::utils::TIME_FILTERS;
use super::view_model::{use_events_view_model, EventsViewModel};
use crate::api::types::{ApiError, Event};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::error::{ErrorBanner, InlineErrorMessage};
use crate::components::forms::{Modal, TextAreaField, TextField};
use crate::components::layout::{DashboardLayout, LoadingSpinner};
use crate::components::table::{Column, DataTable};
use crate::utils::format::format_date_time;

fn columns(vm: EventsViewModel) -> Vec<Column<Event>> {
    vec![
        Column::text("Title", |e: &Event| e.title.clone()),
        Column::text("When", |e: &Event| format_date_time(&e.event_date)),
        Column::text("Location", |e: &Event| {
            if e.location.is_empty() {
                "N/A".to_string()
            } else {
                e.location.clone()
            }
        }),
        Column::text("Participants", |e: &Event| {
            format!("{}/{}", e.current_participants, e.max_participants)
        }),
        Column::new("", move |e: &Event| {
            let record = e.clone();
            let record_for_delete = e.clone();
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
pub fn EventsPanel() -> impl IntoView {
    let vm = use_events_view_model();
    let resource = vm.list_resource;
    let load_error = Signal::derive(move || resource.get().and_then(|result| result.err()));
    let rows = Signal::derive(move || {
        resource
            .get()
            .and_then(|result| result.ok())
            .map(|list| list.events)
            .unwrap_or_default()
    });
    let loading = Signal::derive(move || resource.get().is_none());

    let editor_open = Signal::derive(move || vm.editing.get().is_some());
    let editor_title = Signal::derive(move || match vm.editing.get() {
        Some(Some(_)) => "Edit event".to_string(),
        _ => "New event".to_string(),
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
            .map(|e| format!("Delete the event \"{}\"?", e.title))
            .unwrap_or_default()
    });

    view! {
        <DashboardLayout title="Events">
            <ErrorBanner error=load_error />
            <div class="mb-4 flex flex-wrap items-end gap-3">
                <label class="block">
                    <span class="text-xs font-medium text-gray-500">"Title"</span>
                    <input
                        type="text"
                        class="mt-1 block rounded-md border border-gray-300 px-3 py-1.5 text-sm"
                        placeholder="Search title"
                        prop:value=move || vm.title_filter.get()
                        on:input=move |ev| vm.title_filter.set(event_target_value(&ev))
                    />
                </label>
                <label class="block">
                    <span class="text-xs font-medium text-gray-500">"Window"</span>
                    <select
                        class="mt-1 block rounded-md border border-gray-300 px-3 py-1.5 text-sm"
                        on:change=move |ev| vm.time_filter.set(event_target_value(&ev))
                    >
                        <option value="">"All"</option>
                        {TIME_FILTERS
                            .iter()
                            .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label class="block">
                    <span class="text-xs font-medium text-gray-500">"From"</span>
                    <input
                        type="date"
                        class="mt-1 block rounded-md border border-gray-300 px-3 py-1.5 text-sm"
                        prop:value=move || vm.start_date_filter.get()
                        on:input=move |ev| vm.start_date_filter.set(event_target_value(&ev))
                    />
                </label>
                <label class="block">
                    <span class="text-xs font-medium text-gray-500">"To"</span>
                    <input
                        type="date"
                        class="mt-1 block rounded-md border border-gray-300 px-3 py-1.5 text-sm"
                        prop:value=move || vm.end_date_filter.get()
                        on:input=move |ev| vm.end_date_filter.set(event_target_value(&ev))
                    />
                </label>
                <button
                    type="button"
                    class="ml-auto rounded-md bg-indigo-600 px-4 py-2 text-sm font-semibold text-white hover:bg-indigo-700"
                    on:click=move |_| vm.open_create()
                >
                    "New event"
                </button>
            </div>

            <Show when=move || !loading.get() fallback=move || view! { <LoadingSpinner /> }>
                <DataTable
                    columns=columns(vm)
                    rows=rows
                    empty_title="No events"
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
                        <TextField label="Title" value=vm.form.title required=true />
                        <TextAreaField label="Description" value=vm.form.description />
                        <div class="grid grid-cols-2 gap-3">
                            <TextField
                                label="Date and time"
                                value=vm.form.event_date
                                input_type="datetime-local"
                                required=true
                            />
                            <TextField label="Max participants" value=vm.form.max_participants required=true />
                        </div>
                        <TextField label="Location" value=vm.form.location />
                        <button
                            type="submit"
                            class="w-full rounded-md bg-indigo-600 px-4 py-2 text-sm font-semibold text-white hover:bg-indigo-700 disabled:opacity-50"
                            disabled=move || vm.save_action.pending().get()
                        >
                            "Save event"
                        </button>
                    </form>
                }}
            </Modal>

            <ConfirmDialog
                is_open=delete_open
                title="Delete event"
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
    fn events_panel_renders_time_window_filters() {
        let html = render_to_string(move || {
            provide_session(Some(admin_account()));
            view! { <EventsPanel /> }
        });
        assert!(html.contains("Events"));
        assert!(html.contains("Upcoming"));
        assert!(html.contains("New event"));
    }
}
