use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::types::ApiError;
use crate::config;
use crate::state::session::SessionStore;

/// Thin wrapper over every request to the Menta backend. Attaches the
/// bearer token sourced from the injected [`SessionStore`] and owns the
/// single 401 handler: clear session material, send the browser to the
/// login route. No page implements its own 401 handling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(session: SessionStore) -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            session,
        }
    }

    /// Fixed base URL, bypassing runtime config discovery. Used by tests.
    pub fn with_base_url(session: SessionStore, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
            session,
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    async fn resolved_base_url(&self) -> String {
        match &self.base_url {
            Some(base) => base.clone(),
            None => config::await_api_base_url().await,
        }
    }

    async fn url(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.get() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn dispatch(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = self
            .authorize(builder)
            .send()
            .await
            .map_err(|e| ApiError::network(format!("Request failed: {}", e)))?;
        self.handle_unauthorized(response.status());
        Ok(response)
    }

    fn handle_unauthorized(&self, status: StatusCode) {
        if status != StatusCode::UNAUTHORIZED {
            return;
        }
        log::warn!("unauthorized response; clearing session");
        self.session.clear();
        redirect_to_login_if_needed();
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::parse(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::read_error(response, status).await)
        }
    }

    async fn read_empty(response: Response) -> Result<(), ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::read_error(response, status).await)
        }
    }

    async fn read_error(response: Response, status: StatusCode) -> ApiError {
        response
            .json::<ApiError>()
            .await
            .unwrap_or_else(|_| ApiError::status(status.as_u16()))
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T, ApiError> {
        let mut builder = self.client.get(self.url(path).await);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        let response = self.dispatch(builder).await?;
        Self::read_json(response).await
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let builder = self.client.post(self.url(path).await).json(body);
        let response = self.dispatch(builder).await?;
        Self::read_json(response).await
    }

    /// POST where the response body is irrelevant to the caller.
    pub(crate) async fn post_action<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let builder = self.client.post(self.url(path).await).json(body);
        let response = self.dispatch(builder).await?;
        Self::read_empty(response).await
    }

    pub(crate) async fn get_action(&self, path: &str) -> Result<(), ApiError> {
        let builder = self.client.get(self.url(path).await);
        let response = self.dispatch(builder).await?;
        Self::read_empty(response).await
    }

    pub(crate) async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let builder = self.client.put(self.url(path).await).json(body);
        let response = self.dispatch(builder).await?;
        Self::read_json(response).await
    }

    /// PUT with a JSON body where the response body carries nothing the
    /// caller needs (activate/deactivate/approve style actions).
    pub(crate) async fn put_action<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let builder = self.client.put(self.url(path).await).json(body);
        let response = self.dispatch(builder).await?;
        Self::read_empty(response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let builder = self.client.delete(self.url(path).await);
        let response = self.dispatch(builder).await?;
        Self::read_empty(response).await
    }

    /// Multipart body; the transport sets the boundary content type.
    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, ApiError> {
        let builder = self.client.post(self.url(path).await).multipart(form);
        let response = self.dispatch(builder).await?;
        Self::read_json(response).await
    }

    pub(crate) async fn put_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, ApiError> {
        let builder = self.client.put(self.url(path).await).multipart(form);
        let response = self.dispatch(builder).await?;
        Self::read_json(response).await
    }
}

#[cfg(target_arch = "wasm32")]
fn redirect_to_login_if_needed() {
    use crate::utils::storage;

    if storage::current_pathname().as_deref() == Some("/login") {
        return;
    }
    storage::navigate_to("/login");
}

#[cfg(not(target_arch = "wasm32"))]
fn redirect_to_login_if_needed() {}
