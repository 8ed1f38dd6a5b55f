use crate::state::auth::{self, use_session};
use leptos::*;

/// Sidebar entries in display order: `(href, label)`.
pub const NAV_ITEMS: &[(&str, &str)] = &[
    ("/dashboard", "Overview"),
    ("/accounts", "Accounts"),
    ("/therapists", "Therapists"),
    ("/patients", "Patients"),
    ("/certificates", "Certificates"),
    ("/events", "Events"),
    ("/matches", "Matches"),
    ("/questionnaires", "Questionnaires"),
];

pub fn nav_link_class(active: bool) -> &'static str {
    if active {
        "block rounded-md px-3 py-2 text-sm font-medium bg-indigo-50 text-indigo-700"
    } else {
        "block rounded-md px-3 py-2 text-sm font-medium text-gray-600 hover:bg-gray-50 hover:text-gray-900"
    }
}

fn current_path() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        crate::utils::storage::current_pathname()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-indigo-600"></div>
        </div>
    }
}

#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="rounded-lg border border-gray-200 bg-white p-4 shadow-sm">
            <p class="text-sm font-medium text-gray-500">{label}</p>
            <p class="mt-1 text-2xl font-semibold text-gray-900">{move || value.get()}</p>
        </div>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let (session, _) = use_session();
    let email = create_memo(move |_| {
        session
            .get()
            .account
            .map(|account| account.email)
            .unwrap_or_default()
    });

    let logout_action = auth::use_logout_action();
    let logout_pending = logout_action.pending();
    create_effect(move |_| {
        if logout_action.value().get().is_some() {
            if let Some(win) = web_sys::window() {
                let _ = win.location().set_href("/login");
            }
        }
    });
    let on_logout = move |_| {
        if logout_pending.get_untracked() {
            return;
        }
        logout_action.dispatch(());
    };

    view! {
        <aside class="flex h-screen w-64 flex-col border-r border-gray-200 bg-white">
            <div class="px-6 py-5 border-b border-gray-100">
                <h1 class="text-xl font-bold text-indigo-600">"Menta Admin"</h1>
                <Show when=move || !email.get().is_empty()>
                    <p class="mt-1 text-xs text-gray-500 truncate">{move || email.get()}</p>
                </Show>
            </div>
            <nav class="flex-1 space-y-1 px-3 py-4">
                {
                    let path = current_path();
                    NAV_ITEMS
                        .iter()
                        .map(|(href, label)| {
                            let active = path.as_deref() == Some(*href);
                            view! {
                                <a href=*href class=nav_link_class(active)>
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()
                }
            </nav>
            <div class="border-t border-gray-100 px-3 py-4">
                <button
                    type="button"
                    class="w-full rounded-md px-3 py-2 text-left text-sm font-medium text-gray-600 hover:bg-gray-50 hover:text-gray-900 disabled:opacity-50"
                    disabled=move || logout_pending.get()
                    on:click=on_logout
                >
                    "Sign out"
                </button>
            </div>
        </aside>
    }
}

/// Shell for every protected page: sidebar on the left, page content on
/// the right.
#[component]
pub fn DashboardLayout(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <div class="flex min-h-screen bg-gray-50">
            <Sidebar />
            <main class="flex-1 overflow-y-auto">
                <div class="mx-auto max-w-7xl px-6 py-8">
                    <h1 class="mb-6 text-2xl font-bold text-gray-900">{title}</h1>
                    {children()}
                </div>
            </main>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{admin_account, provide_session};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn sidebar_lists_every_section_and_the_signed_in_email() {
        let html = render_to_string(move || {
            provide_session(Some(admin_account()));
            view! { <Sidebar /> }
        });
        for (href, label) in NAV_ITEMS {
            assert!(html.contains(href), "missing nav href {}", href);
            assert!(html.contains(label), "missing nav label {}", label);
        }
        assert!(html.contains("admin@menta.io"));
        assert!(html.contains("Sign out"));
    }

    #[test]
    fn active_nav_entries_get_the_highlight_class() {
        assert!(nav_link_class(true).contains("bg-indigo-50"));
        assert!(!nav_link_class(false).contains("bg-indigo-50"));
    }

    #[test]
    fn layout_wraps_children_under_the_page_title() {
        let html = render_to_string(move || {
            provide_session(Some(admin_account()));
            view! {
                <DashboardLayout title="Accounts">
                    <p>"page-body"</p>
                </DashboardLayout>
            }
        });
        assert!(html.contains("Accounts"));
        assert!(html.contains("page-body"));
    }
}
