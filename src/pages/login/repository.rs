use std::rc::Rc;

use crate::api::types::{ApiError, Session};
use crate::api::ApiClient;

#[derive(Clone)]
pub struct LoginRepository {
    client: Rc<ApiClient>,
}

impl LoginRepository {
    pub fn new(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn send_otp(&self, email: String) -> Result<(), ApiError> {
        self.client.send_otp(&email).await
    }

    pub async fn verify_otp(&self, email: String, otp: String) -> Result<Session, ApiError> {
        self.client.verify_otp(&email, &otp).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::session::SessionStore;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn verify_otp_unwraps_the_data_envelope() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST)
                .path("/api/v1/auth/verify-otp")
                .json_body(json!({"email": "admin@menta.io", "otp": "123456"}));
            then.status(200).json_body(json!({
                "data": {
                    "session_id": "tok_1",
                    "account": {
                        "id": "acc-admin",
                        "email": "admin@menta.io",
                        "role": "admin",
                        "is_active": true,
                        "email_verified": true
                    }
                }
            }));
        });

        let api = ApiClient::with_base_url(SessionStore::in_memory(), server.url("/api/v1"));
        let repo = LoginRepository::new(Rc::new(api));
        let session = repo
            .verify_otp("admin@menta.io".into(), "123456".into())
            .await
            .unwrap();
        assert_eq!(session.session_id, "tok_1");
        assert_eq!(session.account.role, "admin");
    }

    #[tokio::test]
    async fn send_otp_surfaces_backend_error_bodies() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/v1/auth/send-otp");
            then.status(429)
                .json_body(json!({"error": "Too many attempts", "code": "RATE_LIMITED"}));
        });

        let api = ApiClient::with_base_url(SessionStore::in_memory(), server.url("/api/v1"));
        let repo = LoginRepository::new(Rc::new(api));
        let err = repo.send_otp("admin@menta.io".into()).await.unwrap_err();
        assert_eq!(err.code, "RATE_LIMITED");
        assert_eq!(err.error, "Too many attempts");
    }
}
