use std::rc::Rc;

use crate::api::types::{Account, AccountList, ApiError};
use crate::api::ApiClient;
use crate::state::query::{resources, QueryClient, QueryParams};

#[derive(Clone)]
pub struct AccountsRepository {
    client: Rc<ApiClient>,
    queries: QueryClient,
}

impl AccountsRepository {
    pub fn new(client: Rc<ApiClient>, queries: QueryClient) -> Self {
        Self { client, queries }
    }

    pub async fn list(&self, params: &QueryParams) -> Result<AccountList, ApiError> {
        self.queries
            .fetch(resources::ACCOUNTS, params, || self.client.list_accounts(params))
            .await
    }

    pub async fn create(&self, email: String) -> Result<Account, ApiError> {
        self.queries
            .mutate(resources::ACCOUNTS, self.client.create_account(&email))
            .await
    }

    pub async fn delete(&self, id: String) -> Result<(), ApiError> {
        self.queries
            .mutate(resources::ACCOUNTS, self.client.delete_account(&id))
            .await
    }

    pub async fn set_active(&self, id: String, active: bool) -> Result<(), ApiError> {
        let operation = async {
            if active {
                self.client.activate_account(&id).await
            } else {
                self.client.deactivate_account(&id).await
            }
        };
        self.queries.mutate(resources::ACCOUNTS, operation).await
    }

    pub async fn set_role(&self, id: String, role: String) -> Result<(), ApiError> {
        self.queries
            .mutate(resources::ACCOUNTS, self.client.set_account_role(&id, &role))
            .await
    }
}
