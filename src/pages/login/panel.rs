use leptos::{ev::SubmitEvent, *};

use super::utils::{self, LoginStep};
use super::view_model::use_login_view_model;
use crate::components::error::InlineErrorMessage;

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let send_pending = vm.send_action.pending();
    let verify_pending = vm.verify_action.pending();
    let pending = Signal::derive(move || send_pending.get() || verify_pending.get());
    let on_otp_step = create_memo(move |_| vm.step.get() == LoginStep::Otp);

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let email = vm.email.get_untracked().trim().to_string();
        match vm.step.get_untracked() {
            LoginStep::Email => {
                if let Err(msg) = utils::validate_email(&email) {
                    vm.error.set(Some(crate::api::types::ApiError::unknown(msg)));
                    return;
                }
                vm.error.set(None);
                vm.send_action.dispatch(email);
            }
            LoginStep::Otp => {
                let otp = vm.otp.get_untracked().trim().to_string();
                if let Err(msg) = utils::validate_otp(&otp) {
                    vm.error.set(Some(crate::api::types::ApiError::unknown(msg)));
                    return;
                }
                vm.error.set(None);
                vm.verify_action.dispatch((email, otp));
            }
        }
    };

    let back_to_email = move |_| {
        vm.otp.set(String::new());
        vm.error.set(None);
        vm.step.set(LoginStep::Email);
    };

    view! {
        <div class="flex min-h-screen items-center justify-center bg-gray-50 px-4">
            <div class="w-full max-w-sm rounded-lg border border-gray-200 bg-white p-8 shadow-sm">
                <h1 class="text-2xl font-bold text-indigo-600">"Menta Admin"</h1>
                <p class="mt-1 text-sm text-gray-500">
                    {move || if on_otp_step.get() {
                        "Enter the code we emailed you"
                    } else {
                        "Sign in with your admin email"
                    }}
                </p>
                <InlineErrorMessage error={Signal::derive(move || vm.error.get())} />
                <form class="mt-4 space-y-4" on:submit=handle_submit>
                    <label class="block">
                        <span class="text-sm font-medium text-gray-700">"Email"</span>
                        <input
                            type="email"
                            class="mt-1 block w-full rounded-md border border-gray-300 px-3 py-2 text-sm shadow-sm focus:border-indigo-500 focus:outline-none disabled:bg-gray-100"
                            prop:value=move || vm.email.get()
                            disabled=move || on_otp_step.get()
                            on:input=move |ev| vm.email.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || on_otp_step.get()>
                        <label class="block">
                            <span class="text-sm font-medium text-gray-700">"One-time code"</span>
                            <input
                                type="text"
                                inputmode="numeric"
                                autocomplete="one-time-code"
                                class="mt-1 block w-full rounded-md border border-gray-300 px-3 py-2 text-sm tracking-widest shadow-sm focus:border-indigo-500 focus:outline-none"
                                prop:value=move || vm.otp.get()
                                on:input=move |ev| vm.otp.set(event_target_value(&ev))
                            />
                        </label>
                    </Show>
                    <button
                        type="submit"
                        class="w-full rounded-md bg-indigo-600 px-4 py-2 text-sm font-semibold text-white hover:bg-indigo-700 disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        {move || if on_otp_step.get() { "Verify code" } else { "Send code" }}
                    </button>
                    <Show when=move || on_otp_step.get()>
                        <button
                            type="button"
                            class="w-full text-center text-sm text-gray-500 hover:text-gray-700"
                            on:click=back_to_email
                        >
                            "Use a different email"
                        </button>
                    </Show>
                </form>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn login_panel_starts_with_the_email_form() {
        let html = render_to_string(|| view! { <LoginPanel /> });
        assert!(html.contains("Menta Admin"));
        assert!(html.contains("Send code"));
        assert!(!html.contains("Verify code"));
    }
}
