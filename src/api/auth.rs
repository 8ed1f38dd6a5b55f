use serde_json::json;

use crate::api::client::ApiClient;
use crate::api::types::{ApiError, Enveloped, Session};

impl ApiClient {
    /// Requests a one-time passcode for the given address. The backend
    /// answers 200 whether or not the address maps to an admin account.
    pub async fn send_otp(&self, email: &str) -> Result<(), ApiError> {
        self.post_action("/auth/send-otp", &json!({ "email": email }))
            .await
    }

    /// Exchanges the passcode for a session. The caller stores the returned
    /// `session_id` in the session store.
    pub async fn verify_otp(&self, email: &str, otp: &str) -> Result<Session, ApiError> {
        let enveloped: Enveloped<Session> = self
            .post_json("/auth/verify-otp", &json!({ "email": email, "otp": otp }))
            .await?;
        Ok(enveloped.data)
    }

    /// Invalidates the session server-side. Local session material is
    /// cleared by the caller regardless of the outcome.
    pub async fn sign_out(&self) -> Result<(), ApiError> {
        self.get_action("/auth/sign-out").await
    }
}
