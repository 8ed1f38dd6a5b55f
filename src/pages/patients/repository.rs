use std::rc::Rc;

use crate::api::types::{ApiError, Patient, PatientDraft, PatientList};
use crate::api::ApiClient;
use crate::state::query::{resources, QueryClient, QueryParams};

#[derive(Clone)]
pub struct PatientsRepository {
    client: Rc<ApiClient>,
    queries: QueryClient,
}

impl PatientsRepository {
    pub fn new(client: Rc<ApiClient>, queries: QueryClient) -> Self {
        Self { client, queries }
    }

    pub async fn list(&self, params: &QueryParams) -> Result<PatientList, ApiError> {
        self.queries
            .fetch(resources::PATIENTS, params, || self.client.list_patients(params))
            .await
    }

    pub async fn save(&self, id: Option<String>, draft: PatientDraft) -> Result<Patient, ApiError> {
        let operation = async {
            match &id {
                Some(id) => self.client.update_patient(id, &draft).await,
                None => self.client.create_patient(&draft).await,
            }
        };
        self.queries.mutate(resources::PATIENTS, operation).await
    }

    pub async fn delete(&self, id: String) -> Result<(), ApiError> {
        self.queries
            .mutate(resources::PATIENTS, self.client.delete_patient(&id))
            .await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::patients::utils::list_params;
    use crate::state::session::SessionStore;
    use httpmock::prelude::*;
    use leptos::create_runtime;
    use serde_json::json;

    #[tokio::test]
    async fn list_pages_through_the_collection() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/v1/patients/")
                .query_param("offset", "20")
                .query_param("limit", "20");
            then.status(200).json_body(json!({
                "patients": [{
                    "id": "pat-1",
                    "account_id": "acc-pat",
                    "first_name": "Jordan",
                    "last_name": "Lee",
                    "timezone": "UTC",
                    "language": "en"
                }],
                "total": 35
            }));
        });

        let runtime = create_runtime();
        let api = ApiClient::with_base_url(SessionStore::in_memory(), server.url("/api/v1"));
        let repo = PatientsRepository::new(Rc::new(api), QueryClient::new());
        let list = repo.list(&list_params(2)).await.unwrap();
        assert_eq!(list.total, 35);
        assert_eq!(list.patients[0].full_name(), "Jordan Lee");
        mock.assert_async().await;
        runtime.dispose();
    }

    #[tokio::test]
    async fn update_sends_multipart_fields() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(PUT)
                .path("/api/v1/patients/pat-1")
                .body_contains("Jordan")
                .body_contains("America/New_York");
            then.status(200).json_body(json!({
                "id": "pat-1",
                "account_id": "acc-pat",
                "first_name": "Jordan",
                "last_name": "Lee",
                "timezone": "America/New_York",
                "language": "en"
            }));
        });

        let runtime = create_runtime();
        let api = ApiClient::with_base_url(SessionStore::in_memory(), server.url("/api/v1"));
        let repo = PatientsRepository::new(Rc::new(api), QueryClient::new());
        let draft = PatientDraft {
            first_name: "Jordan".into(),
            last_name: "Lee".into(),
            timezone: "America/New_York".into(),
            language: "en".into(),
            ..Default::default()
        };
        let saved = repo.save(Some("pat-1".into()), draft).await.unwrap();
        assert_eq!(saved.timezone, "America/New_York");
        mock.assert_async().await;
        runtime.dispose();
    }
}
