use std::rc::Rc;

use crate::api::types::{ApiError, Event, EventList, EventPayload};
use crate::api::ApiClient;
use crate::state::query::{resources, QueryClient, QueryParams};

#[derive(Clone)]
pub struct EventsRepository {
    client: Rc<ApiClient>,
    queries: QueryClient,
}

impl EventsRepository {
    pub fn new(client: Rc<ApiClient>, queries: QueryClient) -> Self {
        Self { client, queries }
    }

    pub async fn list(&self, params: &QueryParams) -> Result<EventList, ApiError> {
        self.queries
            .fetch(resources::EVENTS, params, || self.client.list_events(params))
            .await
    }

    pub async fn save(&self, id: Option<String>, payload: EventPayload) -> Result<Event, ApiError> {
        let operation = async {
            match &id {
                Some(id) => self.client.update_event(id, &payload).await,
                None => self.client.create_event(&payload).await,
            }
        };
        self.queries.mutate(resources::EVENTS, operation).await
    }

    pub async fn delete(&self, id: String) -> Result<(), ApiError> {
        self.queries
            .mutate(resources::EVENTS, self.client.delete_event(&id))
            .await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::events::utils::{list_params, parse_event_date};
    use crate::state::session::SessionStore;
    use httpmock::prelude::*;
    use leptos::create_runtime;
    use serde_json::json;

    #[tokio::test]
    async fn list_applies_time_window_filters() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/v1/events/")
                .query_param("time_filter", "upcoming")
                .query_param("start_date", "2026-09-01");
            then.status(200).json_body(json!({
                "events": [{
                    "id": "ev-1",
                    "title": "Group mindfulness",
                    "event_date": "2026-09-12T18:30:00Z",
                    "max_participants": 25,
                    "current_participants": 4
                }],
                "total": 1
            }));
        });

        let runtime = create_runtime();
        let api = ApiClient::with_base_url(SessionStore::in_memory(), server.url("/api/v1"));
        let repo = EventsRepository::new(Rc::new(api), QueryClient::new());
        let list = repo
            .list(&list_params("", "upcoming", "2026-09-01", ""))
            .await
            .unwrap();
        assert_eq!(list.events[0].title, "Group mindfulness");
        mock.assert_async().await;
        runtime.dispose();
    }

    #[tokio::test]
    async fn create_posts_the_json_payload() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/v1/events/")
                .json_body_partial(r#"{"title": "Group mindfulness", "max_participants": 25}"#);
            then.status(201).json_body(json!({
                "id": "ev-1",
                "title": "Group mindfulness",
                "event_date": "2026-09-12T18:30:00Z",
                "max_participants": 25
            }));
        });

        let runtime = create_runtime();
        let api = ApiClient::with_base_url(SessionStore::in_memory(), server.url("/api/v1"));
        let repo = EventsRepository::new(Rc::new(api), QueryClient::new());
        let payload = EventPayload {
            title: "Group mindfulness".into(),
            description: String::new(),
            event_date: parse_event_date("2026-09-12T18:30").unwrap(),
            location: String::new(),
            max_participants: 25,
        };
        let saved = repo.save(None, payload).await.unwrap();
        assert_eq!(saved.id, "ev-1");
        mock.assert_async().await;
        runtime.dispose();
    }
}
