use leptos::{ev::SubmitEvent, *};

use super::utils::ROLES;
use super::view_model::{use_accounts_view_model, AccountsViewModel};
use crate::api::types::Account;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::error::ErrorBanner;
use crate::components::forms::{Modal, TextField};
use crate::components::layout::{DashboardLayout, LoadingSpinner};
use crate::components::pagination::Pagination;
use crate::components::table::{Column, DataTable};
use crate::utils::format::format_last_login;

fn columns(vm: AccountsViewModel) -> Vec<Column<Account>> {
    vec![
        Column::text("Email", |account: &Account| account.email.clone()),
        Column::new("Role", move |account: &Account| {
            let record = account.clone();
            let current = account.role.clone();
            view! {
                <select
                    class="rounded-md border border-gray-300 px-2 py-1 text-sm"
                    on:change=move |ev| {
                        vm.pending_role.set(Some((record.clone(), event_target_value(&ev))));
                    }
                >
                    {ROLES
                        .iter()
                        .map(|role| {
                            let selected = current == *role;
                            view! { <option value=*role selected=selected>{*role}</option> }
                        })
                        .collect_view()}
                </select>
            }
            .into_view()
        }),
        Column::new("Status", move |account: &Account| {
            let id = account.id.clone();
            let is_active = account.is_active;
            let (badge, badge_class) = if is_active {
                ("Active", "bg-green-100 text-green-700")
            } else {
                ("Inactive", "bg-gray-100 text-gray-600")
            };
            view! {
                <div class="flex items-center gap-2">
                    <span class=format!("rounded-full px-2 py-0.5 text-xs font-medium {}", badge_class)>
                        {badge}
                    </span>
                    <button
                        type="button"
                        class="text-xs text-indigo-600 hover:text-indigo-800"
                        on:click=move |_| {
                            vm.set_active_action.dispatch((id.clone(), !is_active));
                        }
                    >
                        {if is_active { "Deactivate" } else { "Activate" }}
                    </button>
                </div>
            }
            .into_view()
        }),
        Column::text("Email verified", |account: &Account| {
            if account.email_verified { "Yes" } else { "No" }.to_string()
        }),
        Column::text("Last login", |account: &Account| {
            format_last_login(account.last_login_at.as_ref())
        }),
        Column::new("", move |account: &Account| {
            let record = account.clone();
            view! {
                <button
                    type="button"
                    class="text-sm font-medium text-red-600 hover:text-red-800"
                    on:click=move |_| vm.pending_delete.set(Some(record.clone()))
                >
                    "Delete"
                </button>
            }
            .into_view()
        }),
    ]
}

#[component]
pub fn AccountsPanel() -> impl IntoView {
    let vm = use_accounts_view_model();
    let resource = vm.list_resource;
    let load_error = Signal::derive(move || {
        resource
            .get()
            .and_then(|result| result.err())
            .or_else(|| vm.error.get())
    });
    let rows = Signal::derive(move || {
        resource
            .get()
            .and_then(|result| result.ok())
            .map(|list| list.accounts)
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

    let submit_create = move |ev: SubmitEvent| {
        ev.prevent_default();
        let email = vm.create_email.get_untracked().trim().to_string();
        if email.is_empty() {
            return;
        }
        vm.create_action.dispatch(email);
    };

    let delete_open = Signal::derive(move || vm.pending_delete.get().is_some());
    let delete_message = Signal::derive(move || {
        vm.pending_delete
            .get()
            .map(|account| format!("Delete the account {}? This cannot be undone.", account.email))
            .unwrap_or_default()
    });

    view! {
        <DashboardLayout title="Accounts">
            <ErrorBanner error=load_error />
            <div class="mb-4 flex flex-wrap items-end gap-3">
                <label class="block">
                    <span class="text-xs font-medium text-gray-500">"Email"</span>
                    <input
                        type="text"
                        class="mt-1 block rounded-md border border-gray-300 px-3 py-1.5 text-sm"
                        placeholder="Search email"
                        prop:value=move || vm.email_filter.get()
                        on:input=move |ev| vm.set_email_filter(event_target_value(&ev))
                    />
                </label>
                <label class="block">
                    <span class="text-xs font-medium text-gray-500">"Role"</span>
                    <select
                        class="mt-1 block rounded-md border border-gray-300 px-3 py-1.5 text-sm"
                        on:change=move |ev| vm.set_role_filter(event_target_value(&ev))
                    >
                        <option value="">"All roles"</option>
                        {ROLES
                            .iter()
                            .map(|role| view! { <option value=*role>{*role}</option> })
                            .collect_view()}
                    </select>
                </label>
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
                <button
                    type="button"
                    class="ml-auto rounded-md bg-indigo-600 px-4 py-2 text-sm font-semibold text-white hover:bg-indigo-700"
                    on:click=move |_| vm.create_open.set(true)
                >
                    "New account"
                </button>
            </div>

            <Show when=move || !loading.get() fallback=move || view! { <LoadingSpinner /> }>
                <DataTable
                    columns=columns(vm)
                    rows=rows
                    empty_title="No accounts"
                    empty_description="Nothing matched your filters"
                />
                <Pagination
                    page=Signal::derive(move || vm.page.get())
                    total=total
                    on_page=Callback::new(move |page| vm.page.set(page))
                />
            </Show>

            <Modal
                is_open=Signal::derive(move || vm.create_open.get())
                title="New account"
                on_close=Callback::new(move |_| vm.create_open.set(false))
            >
                {move || view! {
                    <form class="space-y-4" on:submit=submit_create>
                        <TextField
                            label="Email"
                            value=vm.create_email
                            input_type="email"
                            required=true
                        />
                        <p class="text-xs text-gray-500">
                            "The person receives a sign-in code at this address."
                        </p>
                        <button
                            type="submit"
                            class="w-full rounded-md bg-indigo-600 px-4 py-2 text-sm font-semibold text-white hover:bg-indigo-700 disabled:opacity-50"
                            disabled=move || vm.create_action.pending().get()
                        >
                            "Create account"
                        </button>
                    </form>
                }}
            </Modal>

            <ConfirmDialog
                is_open=delete_open
                title="Delete account"
                message=delete_message
                confirm_label="Delete"
                destructive=true
                confirm_disabled=Signal::derive(move || vm.delete_action.pending().get())
                on_confirm=Callback::new(move |_| {
                    if let Some(account) = vm.pending_delete.get_untracked() {
                        vm.delete_action.dispatch(account.id);
                    }
                })
                on_cancel=Callback::new(move |_| vm.pending_delete.set(None))
            />

            <ConfirmDialog
                is_open=Signal::derive(move || vm.pending_role.get().is_some())
                title="Change role"
                message=Signal::derive(move || {
                    vm.pending_role
                        .get()
                        .map(|(account, role)| {
                            format!("Change the role of {} to {}?", account.email, role)
                        })
                        .unwrap_or_default()
                })
                confirm_label="Change role"
                confirm_disabled=Signal::derive(move || vm.set_role_action.pending().get())
                on_confirm=Callback::new(move |_| {
                    if let Some((account, role)) = vm.pending_role.get_untracked() {
                        vm.set_role_action.dispatch((account.id, role));
                    }
                })
                on_cancel=Callback::new(move |_| vm.pending_role.set(None))
            />
        </DashboardLayout>
    }
}
