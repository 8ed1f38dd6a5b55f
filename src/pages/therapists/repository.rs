use std::rc::Rc;

use crate::api::types::{ApiError, Therapist, TherapistDraft, TherapistList};
use crate::api::ApiClient;
use crate::state::query::{resources, QueryClient, QueryParams};

#[derive(Clone)]
pub struct TherapistsRepository {
    client: Rc<ApiClient>,
    queries: QueryClient,
}

impl TherapistsRepository {
    pub fn new(client: Rc<ApiClient>, queries: QueryClient) -> Self {
        Self { client, queries }
    }

    pub async fn list(&self, params: &QueryParams) -> Result<TherapistList, ApiError> {
        self.queries
            .fetch(resources::THERAPISTS, params, || {
                self.client.list_therapists(params)
            })
            .await
    }

    pub async fn save(
        &self,
        id: Option<String>,
        draft: TherapistDraft,
    ) -> Result<Therapist, ApiError> {
        let operation = async {
            match &id {
                Some(id) => self.client.update_therapist(id, &draft).await,
                None => self.client.create_therapist(&draft).await,
            }
        };
        self.queries.mutate(resources::THERAPISTS, operation).await
    }

    pub async fn delete(&self, id: String) -> Result<(), ApiError> {
        self.queries
            .mutate(resources::THERAPISTS, self.client.delete_therapist(&id))
            .await
    }

    pub async fn set_verification(&self, id: String, verified: bool) -> Result<(), ApiError> {
        self.queries
            .mutate(
                resources::THERAPISTS,
                self.client.set_therapist_verification(&id, verified),
            )
            .await
    }

    pub async fn set_accepting(&self, id: String, accepting: bool) -> Result<(), ApiError> {
        self.queries
            .mutate(
                resources::THERAPISTS,
                self.client.set_therapist_accepting(&id, accepting),
            )
            .await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::types::FileUpload;
    use crate::pages::therapists::utils::list_params;
    use crate::state::session::SessionStore;
    use httpmock::prelude::*;
    use leptos::create_runtime;
    use serde_json::json;

    fn therapist_body() -> serde_json::Value {
        json!({
            "id": "ther-1",
            "account_id": "acc-ther",
            "first_name": "Maya",
            "last_name": "Okafor",
            "license_number": "LIC-4821",
            "specializations": ["anxiety"],
            "years_of_experience": 7,
            "languages": ["en"],
            "hourly_rate": 120.0,
            "is_verified": false,
            "is_accepting_patients": true
        })
    }

    #[tokio::test]
    async fn list_is_a_direct_collection_without_envelope() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET)
                .path("/api/v1/therapists/")
                .query_param("query", "maya")
                .query_param("is_verified", "true");
            then.status(200)
                .json_body(json!({"therapists": [therapist_body()], "total": 1}));
        });

        let runtime = create_runtime();
        let api = ApiClient::with_base_url(SessionStore::in_memory(), server.url("/api/v1"));
        let repo = TherapistsRepository::new(Rc::new(api), QueryClient::new());
        let list = repo.list(&list_params(1, "maya", "true", "")).await.unwrap();
        assert_eq!(list.total, 1);
        assert_eq!(list.therapists[0].full_name(), "Maya Okafor");
        runtime.dispose();
    }

    #[tokio::test]
    async fn create_sends_multipart_with_the_document() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/v1/therapists/")
                .header_exists("content-type")
                .body_contains("LIC-4821")
                .body_contains("license.pdf");
            then.status(201).json_body(therapist_body());
        });

        let runtime = create_runtime();
        let api = ApiClient::with_base_url(SessionStore::in_memory(), server.url("/api/v1"));
        let repo = TherapistsRepository::new(Rc::new(api), QueryClient::new());
        let draft = TherapistDraft {
            first_name: "Maya".into(),
            last_name: "Okafor".into(),
            license_number: "LIC-4821".into(),
            document: Some(FileUpload {
                file_name: "license.pdf".into(),
                content_type: "application/pdf".into(),
                bytes: b"%PDF-1.4".to_vec(),
            }),
            ..Default::default()
        };
        let saved = repo.save(None, draft).await.unwrap();
        assert_eq!(saved.id, "ther-1");
        mock.assert_async().await;
        runtime.dispose();
    }

    #[tokio::test]
    async fn verification_toggle_hits_the_action_route() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(PUT)
                .path("/api/v1/therapists/ther-1/verification")
                .json_body(json!({"is_verified": true}));
            then.status(200).json_body(json!({}));
        });

        let runtime = create_runtime();
        let api = ApiClient::with_base_url(SessionStore::in_memory(), server.url("/api/v1"));
        let repo = TherapistsRepository::new(Rc::new(api), QueryClient::new());
        repo.set_verification("ther-1".into(), true).await.unwrap();
        mock.assert_async().await;
        runtime.dispose();
    }
}
