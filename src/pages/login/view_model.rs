use std::rc::Rc;

use leptos::*;

use super::repository::LoginRepository;
use super::utils::LoginStep;
use crate::api::types::{ApiError, Session};
use crate::state::auth::{self, use_api, use_session, use_session_store};

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub email: RwSignal<String>,
    pub otp: RwSignal<String>,
    pub step: RwSignal<LoginStep>,
    pub error: RwSignal<Option<ApiError>>,
    pub send_action: Action<String, Result<(), ApiError>>,
    pub verify_action: Action<(String, String), Result<Session, ApiError>>,
}

pub fn use_login_view_model() -> LoginViewModel {
    let email = create_rw_signal(String::new());
    let otp = create_rw_signal(String::new());
    let step = create_rw_signal(LoginStep::default());
    let error = create_rw_signal(None::<ApiError>);

    let api = use_api();
    let store = use_session_store();
    let (_session, set_session) = use_session();
    let repository = LoginRepository::new(Rc::new(api));

    let repo_for_send = repository.clone();
    let send_action = create_action(move |email: &String| {
        let repo = repo_for_send.clone();
        let email = email.clone();
        async move { repo.send_otp(email).await }
    });

    let repo_for_verify = repository.clone();
    let verify_action = create_action(move |(email, otp): &(String, String)| {
        let repo = repo_for_verify.clone();
        let email = email.clone();
        let otp = otp.clone();
        async move { repo.verify_otp(email, otp).await }
    });

    create_effect(move |_| {
        if let Some(result) = send_action.value().get() {
            match result {
                Ok(()) => {
                    error.set(None);
                    step.set(LoginStep::Otp);
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = verify_action.value().get() {
            match result {
                Ok(session) => {
                    error.set(None);
                    otp.set(String::new());
                    auth::complete_login(session, &store, set_session);
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/dashboard");
                    }
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    LoginViewModel {
        email,
        otp,
        step,
        error,
        send_action,
        verify_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn view_model_starts_on_the_email_step() {
        with_runtime(|| {
            let vm = use_login_view_model();
            assert_eq!(vm.step.get(), LoginStep::Email);
            assert!(vm.email.get().is_empty());
            assert!(vm.error.get().is_none());
        });
    }
}
