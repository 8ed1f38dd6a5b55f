use serde_json::json;

use crate::api::client::ApiClient;
use crate::api::types::{Account, AccountList, AccountStats, ApiError, Enveloped};
use crate::state::query::QueryParams;

impl ApiClient {
    /// Accounts are the one collection the backend wraps in a `data`
    /// envelope.
    pub async fn list_accounts(&self, params: &QueryParams) -> Result<AccountList, ApiError> {
        let enveloped: Enveloped<AccountList> =
            self.get_json("/accounts/", params.as_pairs()).await?;
        Ok(enveloped.data)
    }

    pub async fn account_stats(&self) -> Result<AccountStats, ApiError> {
        let enveloped: Enveloped<AccountStats> = self.get_json("/accounts/stats/", &[]).await?;
        Ok(enveloped.data)
    }

    /// Creates an invitation-only account; the backend emails the OTP flow.
    pub async fn create_account(&self, email: &str) -> Result<Account, ApiError> {
        self.post_json("/accounts/", &json!({ "email": email })).await
    }

    pub async fn delete_account(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/accounts/{}", id)).await
    }

    pub async fn activate_account(&self, id: &str) -> Result<(), ApiError> {
        self.put_action(&format!("/accounts/{}/activate", id), &json!({}))
            .await
    }

    pub async fn deactivate_account(&self, id: &str) -> Result<(), ApiError> {
        self.put_action(&format!("/accounts/{}/deactivate", id), &json!({}))
            .await
    }

    pub async fn set_account_role(&self, id: &str, role: &str) -> Result<(), ApiError> {
        self.put_action(&format!("/accounts/{}/role", id), &json!({ "role": role }))
            .await
    }
}
