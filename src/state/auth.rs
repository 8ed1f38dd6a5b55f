use leptos::*;

use crate::api::types::{Account, ApiError, Session};
use crate::api::ApiClient;
use crate::state::query::QueryClient;
use crate::state::session::SessionStore;

type SessionContext = (ReadSignal<SessionState>, WriteSignal<SessionState>);

/// Reactive mirror of the session store. Presence of a token is what the
/// route guard consults; validity is only ever learned lazily, when a
/// request comes back 401.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub account: Option<Account>,
    pub is_authenticated: bool,
}

/// Provides the session store, the API client bound to it, the query
/// cache and the reactive session state to the whole app.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let store = SessionStore::new();
    let api = ApiClient::new(store.clone());
    let queries = QueryClient::new();

    let (state, set_state) = create_signal(SessionState {
        account: None,
        is_authenticated: store.is_present(),
    });

    provide_context(store);
    provide_context(api);
    provide_context(queries);
    provide_context::<SessionContext>((state, set_state));

    view! { <>{children()}</> }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| create_signal(SessionState::default()))
}

pub fn use_session_store() -> SessionStore {
    use_context::<SessionStore>().unwrap_or_else(SessionStore::in_memory)
}

pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(|| ApiClient::new(SessionStore::in_memory()))
}

pub fn use_queries() -> QueryClient {
    use_context::<QueryClient>().unwrap_or_else(QueryClient::new)
}

/// Stores the verified session and flips the reactive state. Called by the
/// login page once `verify_otp` succeeds.
pub fn complete_login(
    session: Session,
    store: &SessionStore,
    set_state: WriteSignal<SessionState>,
) {
    store.set(&session.session_id);
    set_state.update(|state| {
        state.account = Some(session.account.clone());
        state.is_authenticated = true;
    });
}

/// Server-side sign-out is best effort; local session material is cleared
/// whatever the backend answers.
pub async fn logout(
    api: &ApiClient,
    set_state: WriteSignal<SessionState>,
) -> Result<(), ApiError> {
    let result = api.sign_out().await;

    api.session().clear();
    set_state.update(|state| {
        state.account = None;
        state.is_authenticated = false;
    });

    result
}

pub fn use_logout_action() -> Action<(), Result<(), ApiError>> {
    let (_state, set_state) = use_session();
    let api = use_api();

    create_action(move |_: &()| {
        let api = api.clone();
        async move { logout(&api, set_state).await }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::create_runtime;

    fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = test();
        runtime.dispose();
        result
    }

    #[test]
    fn use_session_returns_default_without_context() {
        with_runtime(|| {
            let (state, _set_state) = use_session();
            let snapshot = state.get();
            assert!(!snapshot.is_authenticated);
            assert!(snapshot.account.is_none());
        });
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn login_then_logout_round_trips_session_state() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/v1/auth/sign-out");
            then.status(200).json_body(serde_json::json!({}));
        });

        let runtime = create_runtime();
        let store = SessionStore::in_memory();
        let api = ApiClient::with_base_url(store.clone(), server.url("/api/v1"));
        let (state, set_state) = create_signal(SessionState::default());

        complete_login(
            Session {
                session_id: "tok_1".into(),
                account: helpers::admin_account(),
            },
            &store,
            set_state,
        );
        assert!(state.get().is_authenticated);
        assert_eq!(store.get().as_deref(), Some("tok_1"));

        logout(&api, set_state).await.unwrap();
        assert!(!state.get().is_authenticated);
        assert!(state.get().account.is_none());
        assert!(store.get().is_none());
        runtime.dispose();
    }

    #[tokio::test]
    async fn logout_clears_session_even_when_backend_fails() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/v1/auth/sign-out");
            then.status(500)
                .json_body(serde_json::json!({"error": "boom", "code": "INTERNAL"}));
        });

        let runtime = create_runtime();
        let store = SessionStore::with_token("tok_2");
        let api = ApiClient::with_base_url(store.clone(), server.url("/api/v1"));
        let (state, set_state) = create_signal(SessionState {
            account: Some(helpers::admin_account()),
            is_authenticated: true,
        });

        assert!(logout(&api, set_state).await.is_err());
        assert!(!state.get().is_authenticated);
        assert!(store.get().is_none());
        runtime.dispose();
    }
}
