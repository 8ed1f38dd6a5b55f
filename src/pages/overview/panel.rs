use leptos::*;

use super::utils::role_breakdown;
use super::view_model::use_overview_view_model;
use crate::components::error::ErrorBanner;
use crate::components::layout::{DashboardLayout, LoadingSpinner, StatCard};

#[component]
pub fn OverviewPanel() -> impl IntoView {
    let vm = use_overview_view_model();
    let resource = vm.stats_resource;
    let error = Signal::derive(move || resource.get().and_then(|result| result.err()));
    let stats = create_memo(move |_| resource.get().and_then(|result| result.ok()));

    view! {
        <DashboardLayout title="Overview">
            <ErrorBanner error=error />
            <Show
                when=move || stats.get().is_some()
                fallback=move || view! { <LoadingSpinner /> }
            >
                {move || stats.get().map(|snapshot| {
                    let breakdown = role_breakdown(&snapshot.accounts);
                    let total_accounts = snapshot.accounts.total_count;
                    let verified_therapists = snapshot.therapists.verified_therapists;
                    let total_patients = snapshot.patients.total_patients;
                    let upcoming_events = snapshot.events.upcoming_events;
                    view! {
                        <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4">
                            <StatCard
                                label="Total accounts"
                                value=Signal::derive(move || total_accounts.to_string())
                            />
                            <StatCard
                                label="Verified therapists"
                                value=Signal::derive(move || verified_therapists.to_string())
                            />
                            <StatCard
                                label="Patients"
                                value=Signal::derive(move || total_patients.to_string())
                            />
                            <StatCard
                                label="Upcoming events"
                                value=Signal::derive(move || upcoming_events.to_string())
                            />
                        </div>
                        <div class="mt-6 grid grid-cols-1 gap-4 lg:grid-cols-2">
                            <div class="rounded-lg border border-gray-200 bg-white p-4 shadow-sm">
                                <h2 class="text-sm font-semibold text-gray-900">"Accounts by role"</h2>
                                <dl class="mt-3 space-y-2">
                                    {breakdown
                                        .into_iter()
                                        .map(|(label, count)| view! {
                                            <div class="flex justify-between text-sm">
                                                <dt class="text-gray-500">{label}</dt>
                                                <dd class="font-medium text-gray-900">{count}</dd>
                                            </div>
                                        })
                                        .collect_view()}
                                </dl>
                            </div>
                            <div class="rounded-lg border border-gray-200 bg-white p-4 shadow-sm">
                                <h2 class="text-sm font-semibold text-gray-900">"Account health"</h2>
                                <dl class="mt-3 space-y-2">
                                    <div class="flex justify-between text-sm">
                                        <dt class="text-gray-500">"Active"</dt>
                                        <dd class="font-medium text-gray-900">{snapshot.accounts.active_count}</dd>
                                    </div>
                                    <div class="flex justify-between text-sm">
                                        <dt class="text-gray-500">"Inactive"</dt>
                                        <dd class="font-medium text-gray-900">{snapshot.accounts.inactive_count}</dd>
                                    </div>
                                    <div class="flex justify-between text-sm">
                                        <dt class="text-gray-500">"Email verified"</dt>
                                        <dd class="font-medium text-gray-900">{snapshot.accounts.email_verified_count}</dd>
                                    </div>
                                    <div class="flex justify-between text-sm">
                                        <dt class="text-gray-500">"Accepting patients"</dt>
                                        <dd class="font-medium text-gray-900">{snapshot.therapists.accepting_patients}</dd>
                                    </div>
                                </dl>
                            </div>
                        </div>
                    }
                })}
            </Show>
        </DashboardLayout>
    }
}
