use leptos::{ev::SubmitEvent, *};

use super::utils::{validate_rejection_reason, STATUSES};
use super::view_model::{use_certificates_view_model, CertificatesViewModel};
use crate::api::types::{ApiError, Certificate};
use crate::components::error::{ErrorBanner, InlineErrorMessage};
use crate::components::forms::{Modal, TextAreaField};
use crate::components::layout::{DashboardLayout, LoadingSpinner};
use crate::components::table::{Column, DataTable};
use crate::utils::format::{format_opt_date, short_id};

fn status_badge(status: &str) -> &'static str {
    match status {
        "approved" => "rounded-full bg-green-100 px-2 py-0.5 text-xs font-medium text-green-700",
        "rejected" => "rounded-full bg-red-100 px-2 py-0.5 text-xs font-medium text-red-700",
        _ => "rounded-full bg-yellow-100 px-2 py-0.5 text-xs font-medium text-yellow-700",
    }
}

fn columns(vm: CertificatesViewModel) -> Vec<Column<Certificate>> {
    vec![
        Column::text("Therapist", |c: &Certificate| short_id(&c.therapist_id)),
        Column::text("Type", |c: &Certificate| c.certificate_type.clone()),
        Column::new("Document", |c: &Certificate| {
            let url = c.document_url.clone();
            view! {
                <a
                    href=url
                    target="_blank"
                    rel="noopener noreferrer"
                    class="text-sm font-medium text-indigo-600 hover:text-indigo-800"
                >
                    "View document"
                </a>
            }
            .into_view()
        }),
        Column::new("Status", |c: &Certificate| {
            let status = c.status.clone();
            let reason = c.rejection_reason.clone();
            view! {
                <div class="space-y-1">
                    <span class=status_badge(&status)>{status.clone()}</span>
                    {reason.map(|reason| view! {
                        <p class="text-xs text-gray-500">{reason}</p>
                    })}
                </div>
            }
            .into_view()
        }),
        Column::text("Issued", |c: &Certificate| {
            format_opt_date(c.issued_date.as_ref())
        }),
        Column::text("Expires", |c: &Certificate| {
            format_opt_date(c.expiry_date.as_ref())
        }),
        Column::new("", move |c: &Certificate| {
            if c.status != "pending" {
                return ().into_view();
            }
            let approve_id = c.id.clone();
            let record = c.clone();
            view! {
                <div class="flex gap-3">
                    <button
                        type="button"
                        class="text-sm font-medium text-green-600 hover:text-green-800"
                        on:click=move |_| vm.approve_action.dispatch(approve_id.clone())
                    >
                        "Approve"
                    </button>
                    <button
                        type="button"
                        class="text-sm font-medium text-red-600 hover:text-red-800"
                        on:click=move |_| {
                            vm.rejection_reason.set(String::new());
                            vm.pending_reject.set(Some(record.clone()));
                        }
                    >
                        "Reject"
                    </button>
                </div>
            }
            .into_view()
        }),
    ]
}

#[component]
pub fn CertificatesPanel() -> impl IntoView {
    let vm = use_certificates_view_model();
    let resource = vm.list_resource;
    let load_error = Signal::derive(move || resource.get().and_then(|result| result.err()));
    let rows = Signal::derive(move || {
        resource
            .get()
            .and_then(|result| result.ok())
            .map(|list| list.certificates)
            .unwrap_or_default()
    });
    let loading = Signal::derive(move || resource.get().is_none());

    let reject_open = Signal::derive(move || vm.pending_reject.get().is_some());
    let submit_reject = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(certificate) = vm.pending_reject.get_untracked() else {
            return;
        };
        match validate_rejection_reason(&vm.rejection_reason.get_untracked()) {
            Ok(reason) => vm.reject_action.dispatch((certificate.id, reason)),
            Err(msg) => vm.error.set(Some(ApiError::unknown(msg))),
        }
    };

    view! {
        <DashboardLayout title="Certificates">
            <ErrorBanner error=load_error />
            <div class="mb-4 flex flex-wrap items-end gap-3">
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
                    <span class="text-xs font-medium text-gray-500">"Type"</span>
                    <input
                        type="text"
                        class="mt-1 block rounded-md border border-gray-300 px-3 py-1.5 text-sm"
                        placeholder="license"
                        prop:value=move || vm.type_filter.get()
                        on:input=move |ev| vm.type_filter.set(event_target_value(&ev))
                    />
                </label>
                <label class="block">
                    <span class="text-xs font-medium text-gray-500">"Status"</span>
                    <select
                        class="mt-1 block rounded-md border border-gray-300 px-3 py-1.5 text-sm"
                        on:change=move |ev| vm.status_filter.set(event_target_value(&ev))
                    >
                        <option value="">"All"</option>
                        {STATUSES
                            .iter()
                            .map(|status| view! { <option value=*status>{*status}</option> })
                            .collect_view()}
                    </select>
                </label>
            </div>

            <Show when=move || !loading.get() fallback=move || view! { <LoadingSpinner /> }>
                <DataTable
                    columns=columns(vm)
                    rows=rows
                    empty_title="No certificates"
                    empty_description="Nothing matched your filters"
                />
            </Show>

            <Modal
                is_open=reject_open
                title="Reject certificate"
                on_close=Callback::new(move |_| vm.pending_reject.set(None))
            >
                {move || view! {
                    <form class="space-y-3" on:submit=submit_reject>
                        <InlineErrorMessage error=Signal::derive(move || vm.error.get()) />
                        <p class="text-sm text-gray-500">
                            "The therapist sees this reason, so be specific."
                        </p>
                        <TextAreaField label="Rejection reason" value=vm.rejection_reason />
                        <button
                            type="submit"
                            class="w-full rounded-md bg-red-600 px-4 py-2 text-sm font-semibold text-white hover:bg-red-700 disabled:opacity-50"
                            disabled=move || vm.reject_action.pending().get()
                        >
                            "Reject certificate"
                        </button>
                    </form>
                }}
            </Modal>
        </DashboardLayout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{admin_account, provide_session};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn certificates_panel_renders_review_filters() {
        let html = render_to_string(move || {
            provide_session(Some(admin_account()));
            view! { <CertificatesPanel /> }
        });
        assert!(html.contains("Certificates"));
        assert!(html.contains("Therapist id"));
        assert!(html.contains("pending"));
    }
}
