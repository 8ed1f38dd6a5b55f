use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;

use leptos::*;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::api::types::ApiError;

/// Fixed page size for every paginated list view.
pub const PAGE_SIZE: usize = 20;

/// Resource family names used as the coarse invalidation unit.
pub mod resources {
    pub const ACCOUNTS: &str = "accounts";
    pub const THERAPISTS: &str = "therapists";
    pub const PATIENTS: &str = "patients";
    pub const CERTIFICATES: &str = "certificates";
    pub const EVENTS: &str = "events";
    pub const MATCHES: &str = "matches";
    pub const QUESTIONNAIRES: &str = "questionnaires";
}

const QUERY_ENCODE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'&')
    .add(b'=')
    .add(b'%')
    .add(b'+')
    .add(b'#')
    .add(b'?');

/// Ordered filter/pagination parameters for a list request. The insertion
/// order is what goes on the wire; the canonical form (sorted, encoded)
/// is what keys the cache, so identical combinations always share a slot
/// regardless of how the caller assembled them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pagination prefix: `offset` then `limit` for the given 1-based page.
    pub fn paged(page: usize) -> Self {
        let mut params = Self::new();
        let offset = page.saturating_sub(1) * PAGE_SIZE;
        params.push("offset", offset.to_string());
        params.push("limit", PAGE_SIZE.to_string());
        params
    }

    pub fn push(&mut self, name: &str, value: impl Into<String>) {
        self.pairs.push((name.to_string(), value.into()));
    }

    /// Push only when the filter is actually set; empty strings mean "no
    /// filter" throughout the dashboard.
    pub fn push_non_empty(&mut self, name: &str, value: &str) {
        if !value.is_empty() {
            self.push(name, value);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn as_pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Wire form in insertion order, for asserting request shapes.
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(name, value)| format!("{}={}", encode(name), encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Cache form: sorted `name=value` pairs, url-encoded.
    pub fn canonical(&self) -> String {
        let mut encoded: Vec<String> = self
            .pairs
            .iter()
            .map(|(name, value)| format!("{}={}", encode(name), encode(value)))
            .collect();
        encoded.sort();
        encoded.join("&")
    }
}

fn encode(raw: &str) -> String {
    utf8_percent_encode(raw, QUERY_ENCODE).to_string()
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QueryKey {
    resource: String,
    params: String,
}

impl QueryKey {
    pub fn new(resource: &str, params: &QueryParams) -> Self {
        Self {
            resource: resource.to_string(),
            params: params.canonical(),
        }
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }
}

struct IssuedRequest {
    id: u64,
    key: QueryKey,
}

#[derive(Default)]
struct Inner {
    cache: HashMap<QueryKey, Value>,
    versions: HashMap<String, RwSignal<u64>>,
    newest: HashMap<String, IssuedRequest>,
    next_request_id: u64,
}

/// Client-side mirror of server-owned collections. Entries live under
/// (resource, canonical params); a successful mutation on a resource drops
/// every entry of that family and bumps the resource's version signal so
/// mounted views refetch in the background. Failed mutations leave the
/// cache untouched.
#[derive(Clone, Default)]
pub struct QueryClient {
    inner: Rc<RefCell<Inner>>,
}

impl QueryClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reactive invalidation counter for a resource family. List views key
    /// their `create_resource` source on this signal.
    pub fn version(&self, resource: &str) -> RwSignal<u64> {
        let mut inner = self.inner.borrow_mut();
        *inner
            .versions
            .entry(resource.to_string())
            .or_insert_with(|| create_rw_signal(0))
    }

    /// Cached-or-loaded read. Requests carry a monotonic id per resource;
    /// a response resolving after a newer request with a different key has
    /// been issued is discarded as `SUPERSEDED` rather than applied out of
    /// order.
    pub async fn fetch<T, F, Fut>(
        &self,
        resource: &str,
        params: &QueryParams,
        loader: F,
    ) -> Result<T, ApiError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let key = QueryKey::new(resource, params);
        if let Some(hit) = self.lookup::<T>(&key) {
            return Ok(hit);
        }

        let request_id = self.begin_request(&key);
        match loader().await {
            Ok(value) => {
                if self.is_superseded(&key, request_id) {
                    log::debug!("discarding superseded response for {}", resource);
                    return Err(ApiError::superseded());
                }
                self.store(&key, &value);
                Ok(value)
            }
            Err(err) => Err(err),
        }
    }

    /// Runs a mutation; invalidates the resource family only on success.
    pub async fn mutate<T, Fut>(&self, resource: &str, operation: Fut) -> Result<T, ApiError>
    where
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let result = operation.await;
        if result.is_ok() {
            self.invalidate(resource);
        }
        result
    }

    /// Drops every cache entry of the resource family, whatever its
    /// filter/page suffix, and notifies mounted views.
    pub fn invalidate(&self, resource: &str) {
        let signal = {
            let mut inner = self.inner.borrow_mut();
            inner.cache.retain(|key, _| key.resource() != resource);
            inner.newest.remove(resource);
            inner.versions.get(resource).copied()
        };
        if let Some(signal) = signal {
            signal.update(|version| *version += 1);
        }
    }

    /// Raw cached value, if any. Exists for inspection and tests.
    pub fn peek(&self, resource: &str, params: &QueryParams) -> Option<Value> {
        let key = QueryKey::new(resource, params);
        self.inner.borrow().cache.get(&key).cloned()
    }

    fn lookup<T: DeserializeOwned>(&self, key: &QueryKey) -> Option<T> {
        let inner = self.inner.borrow();
        let value = inner.cache.get(key)?;
        serde_json::from_value(value.clone()).ok()
    }

    fn begin_request(&self, key: &QueryKey) -> u64 {
        let mut inner = self.inner.borrow_mut();
        inner.next_request_id += 1;
        let id = inner.next_request_id;
        inner.newest.insert(
            key.resource().to_string(),
            IssuedRequest {
                id,
                key: key.clone(),
            },
        );
        id
    }

    fn is_superseded(&self, key: &QueryKey, request_id: u64) -> bool {
        let inner = self.inner.borrow();
        match inner.newest.get(key.resource()) {
            Some(current) => current.id != request_id && current.key != *key,
            None => false,
        }
    }

    fn store<T: Serialize>(&self, key: &QueryKey, value: &T) {
        match serde_json::to_value(value) {
            Ok(serialized) => {
                self.inner.borrow_mut().insert_value(key.clone(), serialized);
            }
            Err(err) => log::warn!("failed to cache {}: {}", key.resource(), err),
        }
    }
}

impl Inner {
    fn insert_value(&mut self, key: QueryKey, value: Value) {
        self.cache.insert(key, value);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;
    use serde_json::json;
    use std::cell::Cell;

    fn page_params(page: usize, role: &str) -> QueryParams {
        let mut params = QueryParams::paged(page);
        params.push_non_empty("role", role);
        params
    }

    #[test]
    fn wire_order_is_offset_limit_then_filters() {
        let params = page_params(2, "therapist");
        assert_eq!(params.to_query_string(), "offset=20&limit=20&role=therapist");
        let reset = page_params(1, "patient");
        assert_eq!(reset.to_query_string(), "offset=0&limit=20&role=patient");
    }

    #[test]
    fn canonical_form_is_insertion_order_independent() {
        let mut a = QueryParams::new();
        a.push("role", "therapist");
        a.push("offset", "20");
        let mut b = QueryParams::new();
        b.push("offset", "20");
        b.push("role", "therapist");
        assert_eq!(a.canonical(), b.canonical());
        assert_eq!(QueryKey::new("accounts", &a), QueryKey::new("accounts", &b));
    }

    #[test]
    fn distinct_pages_and_filters_never_collide() {
        let page1 = QueryParams::paged(1);
        let page2 = QueryParams::paged(2);
        assert_ne!(
            QueryKey::new("accounts", &page1),
            QueryKey::new("accounts", &page2)
        );

        let mut verified = QueryParams::paged(1);
        verified.push("is_verified", "true");
        assert_ne!(
            QueryKey::new("therapists", &page1),
            QueryKey::new("therapists", &verified)
        );
    }

    #[test]
    fn canonical_form_encodes_reserved_characters() {
        let mut params = QueryParams::new();
        params.push("email", "a&b=c d");
        assert_eq!(params.canonical(), "email=a%26b%3Dc%20d");
    }

    #[tokio::test]
    async fn fetch_caches_until_invalidated() {
        let runtime = create_runtime();
        let queries = QueryClient::new();
        let params = QueryParams::paged(1);
        let calls = Rc::new(Cell::new(0u32));

        for _ in 0..2 {
            let calls = calls.clone();
            let loaded: Vec<String> = queries
                .fetch(resources::ACCOUNTS, &params, || async move {
                    calls.set(calls.get() + 1);
                    Ok(vec!["a@b.com".to_string()])
                })
                .await
                .unwrap();
            assert_eq!(loaded, vec!["a@b.com".to_string()]);
        }
        assert_eq!(calls.get(), 1, "second read must hit the cache");

        queries.invalidate(resources::ACCOUNTS);
        let calls_again = calls.clone();
        let _: Vec<String> = queries
            .fetch(resources::ACCOUNTS, &params, || async move {
                calls_again.set(calls_again.get() + 1);
                Ok(vec!["a@b.com".to_string()])
            })
            .await
            .unwrap();
        assert_eq!(calls.get(), 2, "invalidation must force a refetch");
        runtime.dispose();
    }

    #[tokio::test]
    async fn invalidate_drops_every_params_combination() {
        let runtime = create_runtime();
        let queries = QueryClient::new();
        let page1 = page_params(1, "therapist");
        let page2 = page_params(2, "");

        let _: Vec<i32> = queries
            .fetch(resources::ACCOUNTS, &page1, || async { Ok(vec![1]) })
            .await
            .unwrap();
        let _: Vec<i32> = queries
            .fetch(resources::ACCOUNTS, &page2, || async { Ok(vec![2]) })
            .await
            .unwrap();
        assert!(queries.peek(resources::ACCOUNTS, &page1).is_some());
        assert!(queries.peek(resources::ACCOUNTS, &page2).is_some());

        queries.invalidate(resources::ACCOUNTS);
        assert!(queries.peek(resources::ACCOUNTS, &page1).is_none());
        assert!(queries.peek(resources::ACCOUNTS, &page2).is_none());
        runtime.dispose();
    }

    #[tokio::test]
    async fn successful_mutation_bumps_version_and_invalidates() {
        let runtime = create_runtime();
        let queries = QueryClient::new();
        let params = QueryParams::paged(1);
        let version = queries.version(resources::THERAPISTS);

        let _: Vec<i32> = queries
            .fetch(resources::THERAPISTS, &params, || async { Ok(vec![1]) })
            .await
            .unwrap();

        let deleted: Result<(), ApiError> = queries
            .mutate(resources::THERAPISTS, async { Ok(()) })
            .await;
        assert!(deleted.is_ok());
        assert_eq!(version.get_untracked(), 1);
        assert!(queries.peek(resources::THERAPISTS, &params).is_none());
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_mutation_leaves_cache_untouched() {
        let runtime = create_runtime();
        let queries = QueryClient::new();
        let params = QueryParams::paged(1);
        let version = queries.version(resources::THERAPISTS);

        let _: Vec<i32> = queries
            .fetch(resources::THERAPISTS, &params, || async { Ok(vec![7, 8]) })
            .await
            .unwrap();
        let before = queries.peek(resources::THERAPISTS, &params).unwrap();

        let failed: Result<(), ApiError> = queries
            .mutate(resources::THERAPISTS, async {
                Err(ApiError::unknown("boom"))
            })
            .await;
        assert!(failed.is_err());
        assert_eq!(version.get_untracked(), 0);
        assert_eq!(
            queries.peek(resources::THERAPISTS, &params),
            Some(before),
            "failed mutation must not alter cached collections"
        );
        runtime.dispose();
    }

    #[tokio::test]
    async fn stale_response_for_superseded_filters_is_discarded() {
        let runtime = create_runtime();
        let queries = QueryClient::new();
        let old_params = page_params(1, "therapist");
        let new_params = page_params(1, "patient");

        // The slow request begins first, then the user switches filters
        // and the newer request wins the race.
        let old_key = QueryKey::new(resources::ACCOUNTS, &old_params);
        let old_id = queries.begin_request(&old_key);

        let fresh: Vec<String> = queries
            .fetch(resources::ACCOUNTS, &new_params, || async {
                Ok(vec!["fresh".to_string()])
            })
            .await
            .unwrap();
        assert_eq!(fresh, vec!["fresh".to_string()]);

        assert!(queries.is_superseded(&old_key, old_id));
        assert!(queries.peek(resources::ACCOUNTS, &new_params).is_some());
        assert!(queries.peek(resources::ACCOUNTS, &old_params).is_none());
        runtime.dispose();
    }

    #[tokio::test]
    async fn fetch_errors_are_propagated_and_not_cached() {
        let runtime = create_runtime();
        let queries = QueryClient::new();
        let params = QueryParams::paged(1);

        let result: Result<Vec<i32>, ApiError> = queries
            .fetch(resources::EVENTS, &params, || async {
                Err(ApiError::status(500))
            })
            .await;
        assert!(result.is_err());
        assert!(queries.peek(resources::EVENTS, &params).is_none());

        let value = json!({"events": [], "total": 0});
        let loaded: Value = queries
            .fetch(resources::EVENTS, &params, || {
                let value = value.clone();
                async move { Ok(value) }
            })
            .await
            .unwrap();
        assert_eq!(loaded, value);
        runtime.dispose();
    }
}
