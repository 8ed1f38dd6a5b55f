use serde_json::json;

use crate::api::client::ApiClient;
use crate::api::types::{ApiError, CertificateList};
use crate::state::query::QueryParams;

impl ApiClient {
    pub async fn list_certificates(&self, params: &QueryParams) -> Result<CertificateList, ApiError> {
        self.get_json("/certificates/", params.as_pairs()).await
    }

    pub async fn approve_certificate(&self, id: &str) -> Result<(), ApiError> {
        self.put_action(&format!("/certificates/{}/approve", id), &json!({}))
            .await
    }

    /// Rejection always carries a reason; the review dialog enforces a
    /// non-empty one.
    pub async fn reject_certificate(&self, id: &str, rejection_reason: &str) -> Result<(), ApiError> {
        self.put_action(
            &format!("/certificates/{}/reject", id),
            &json!({ "rejection_reason": rejection_reason }),
        )
        .await
    }
}
