use std::rc::Rc;

use crate::api::types::{ApiError, MatchList, MatchPayload, MatchRecord};
use crate::api::ApiClient;
use crate::state::query::{resources, QueryClient, QueryParams};

#[derive(Clone)]
pub struct MatchesRepository {
    client: Rc<ApiClient>,
    queries: QueryClient,
}

impl MatchesRepository {
    pub fn new(client: Rc<ApiClient>, queries: QueryClient) -> Self {
        Self { client, queries }
    }

    pub async fn list(&self, params: &QueryParams) -> Result<MatchList, ApiError> {
        self.queries
            .fetch(resources::MATCHES, params, || self.client.list_matches(params))
            .await
    }

    pub async fn save(
        &self,
        id: Option<String>,
        payload: MatchPayload,
    ) -> Result<MatchRecord, ApiError> {
        let operation = async {
            match &id {
                Some(id) => self.client.update_match(id, &payload).await,
                None => self.client.create_match(&payload).await,
            }
        };
        self.queries.mutate(resources::MATCHES, operation).await
    }

    pub async fn delete(&self, id: String) -> Result<(), ApiError> {
        self.queries
            .mutate(resources::MATCHES, self.client.delete_match(&id))
            .await
    }
}
