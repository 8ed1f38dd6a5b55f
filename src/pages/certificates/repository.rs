use std::rc::Rc;

use crate::api::types::{ApiError, CertificateList};
use crate::api::ApiClient;
use crate::state::query::{resources, QueryClient, QueryParams};

#[derive(Clone)]
pub struct CertificatesRepository {
    client: Rc<ApiClient>,
    queries: QueryClient,
}

impl CertificatesRepository {
    pub fn new(client: Rc<ApiClient>, queries: QueryClient) -> Self {
        Self { client, queries }
    }

    pub async fn list(&self, params: &QueryParams) -> Result<CertificateList, ApiError> {
        self.queries
            .fetch(resources::CERTIFICATES, params, || {
                self.client.list_certificates(params)
            })
            .await
    }

    pub async fn approve(&self, id: String) -> Result<(), ApiError> {
        self.queries
            .mutate(resources::CERTIFICATES, self.client.approve_certificate(&id))
            .await
    }

    pub async fn reject(&self, id: String, reason: String) -> Result<(), ApiError> {
        self.queries
            .mutate(
                resources::CERTIFICATES,
                self.client.reject_certificate(&id, &reason),
            )
            .await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::certificates::utils::list_params;
    use crate::state::session::SessionStore;
    use httpmock::prelude::*;
    use leptos::create_runtime;
    use serde_json::json;

    #[tokio::test]
    async fn list_filters_by_status() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/v1/certificates/")
                .query_param("status", "pending");
            then.status(200).json_body(json!({
                "certificates": [{
                    "id": "cert-1",
                    "therapist_id": "ther-1",
                    "certificate_type": "license",
                    "document_url": "https://files.menta.io/cert-1.pdf",
                    "status": "pending"
                }],
                "total": 1
            }));
        });

        let runtime = create_runtime();
        let api = ApiClient::with_base_url(SessionStore::in_memory(), server.url("/api/v1"));
        let repo = CertificatesRepository::new(Rc::new(api), QueryClient::new());
        let list = repo.list(&list_params("", "", "pending")).await.unwrap();
        assert_eq!(list.certificates[0].status, "pending");
        mock.assert_async().await;
        runtime.dispose();
    }

    #[tokio::test]
    async fn reject_carries_the_reason() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(PUT)
                .path("/api/v1/certificates/cert-1/reject")
                .json_body(json!({"rejection_reason": "document expired"}));
            then.status(200).json_body(json!({}));
        });

        let runtime = create_runtime();
        let api = ApiClient::with_base_url(SessionStore::in_memory(), server.url("/api/v1"));
        let repo = CertificatesRepository::new(Rc::new(api), QueryClient::new());
        repo.reject("cert-1".into(), "document expired".into())
            .await
            .unwrap();
        mock.assert_async().await;
        runtime.dispose();
    }
}
