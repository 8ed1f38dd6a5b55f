use std::rc::Rc;

use super::utils::OverviewStats;
use crate::api::types::ApiError;
use crate::api::ApiClient;
use crate::state::query::{resources, QueryClient, QueryParams};

/// Stats are cached under their owning resource family with a `view=stats`
/// discriminator, so mutating a collection also refreshes its card.
fn stats_params() -> QueryParams {
    let mut params = QueryParams::new();
    params.push("view", "stats");
    params
}

#[derive(Clone)]
pub struct OverviewRepository {
    client: Rc<ApiClient>,
    queries: QueryClient,
}

impl OverviewRepository {
    pub fn new(client: Rc<ApiClient>, queries: QueryClient) -> Self {
        Self { client, queries }
    }

    pub async fn load(&self) -> Result<OverviewStats, ApiError> {
        let params = stats_params();
        let accounts = self
            .queries
            .fetch(resources::ACCOUNTS, &params, || self.client.account_stats())
            .await?;
        let therapists = self
            .queries
            .fetch(resources::THERAPISTS, &params, || {
                self.client.therapist_stats()
            })
            .await?;
        let patients = self
            .queries
            .fetch(resources::PATIENTS, &params, || self.client.patient_stats())
            .await?;
        let events = self
            .queries
            .fetch(resources::EVENTS, &params, || self.client.event_stats())
            .await?;
        Ok(OverviewStats {
            accounts,
            therapists,
            patients,
            events,
        })
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::session::SessionStore;
    use httpmock::prelude::*;
    use leptos::create_runtime;
    use serde_json::json;

    #[tokio::test]
    async fn load_gathers_all_four_stat_blocks() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/v1/accounts/stats/");
            then.status(200).json_body(json!({"data": {
                "total_count": 53,
                "active_count": 50,
                "inactive_count": 3,
                "admin_count": 2,
                "therapist_count": 10,
                "patient_count": 40,
                "support_count": 1,
                "email_verified_count": 48
            }}));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/v1/therapists/stats");
            then.status(200).json_body(json!({
                "total_therapists": 10,
                "verified_therapists": 8,
                "accepting_patients": 6
            }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/v1/patients/stats");
            then.status(200).json_body(json!({"total_patients": 40}));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/v1/events/stats");
            then.status(200).json_body(json!({
                "total_events": 5,
                "upcoming_events": 3,
                "past_events": 2
            }));
        });

        let runtime = create_runtime();
        let api = ApiClient::with_base_url(SessionStore::in_memory(), server.url("/api/v1"));
        let repo = OverviewRepository::new(Rc::new(api), QueryClient::new());
        let stats = repo.load().await.unwrap();
        assert_eq!(stats.accounts.total_count, 53);
        assert_eq!(stats.therapists.verified_therapists, 8);
        assert_eq!(stats.patients.total_patients, 40);
        assert_eq!(stats.events.upcoming_events, 3);
        runtime.dispose();
    }
}
