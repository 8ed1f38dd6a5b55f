use crate::api::client::ApiClient;
use crate::api::types::{ApiError, MatchList, MatchPayload, MatchRecord};
use crate::state::query::QueryParams;

impl ApiClient {
    pub async fn list_matches(&self, params: &QueryParams) -> Result<MatchList, ApiError> {
        self.get_json("/matches/", params.as_pairs()).await
    }

    pub async fn create_match(&self, payload: &MatchPayload) -> Result<MatchRecord, ApiError> {
        self.post_json("/matches/", payload).await
    }

    pub async fn update_match(&self, id: &str, payload: &MatchPayload) -> Result<MatchRecord, ApiError> {
        self.put_json(&format!("/matches/{}", id), payload).await
    }

    pub async fn delete_match(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/matches/{}", id)).await
    }
}
