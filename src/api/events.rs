use crate::api::client::ApiClient;
use crate::api::types::{ApiError, Event, EventList, EventPayload, EventStats};
use crate::state::query::QueryParams;

impl ApiClient {
    pub async fn list_events(&self, params: &QueryParams) -> Result<EventList, ApiError> {
        self.get_json("/events/", params.as_pairs()).await
    }

    pub async fn event_stats(&self) -> Result<EventStats, ApiError> {
        self.get_json("/events/stats", &[]).await
    }

    pub async fn create_event(&self, payload: &EventPayload) -> Result<Event, ApiError> {
        self.post_json("/events/", payload).await
    }

    pub async fn update_event(&self, id: &str, payload: &EventPayload) -> Result<Event, ApiError> {
        self.put_json(&format!("/events/{}", id), payload).await
    }

    pub async fn delete_event(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/events/{}", id)).await
    }
}
