//! Generic CRUD client shared by every REST resource.

use std::marker::PhantomData;
use std::sync::Arc;

use reqwest::Method;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::client::ApiClient;
use crate::debounce::Debouncer;
use crate::errors::ApiResult;
use crate::pagination::{PaginatedResponse, Pagination};
use crate::query::{ListFilter, QueryParams};

/// Describes one REST resource: where it lives and what it exchanges.
pub trait ResourceKind {
    /// Collection path, e.g. `/clinic`.
    const PATH: &'static str;

    type Item: DeserializeOwned;
    type Create: Serialize;
    type Update: Serialize;
    type Filter: ListFilter;

    /// Parameters sent with every list and get request.
    fn base_params(_params: &mut QueryParams) {}
}

/// Typed handle performing CRUD calls for `K`.
pub struct Resource<'a, K> {
    client: &'a ApiClient,
    kind: PhantomData<K>,
}

impl<'a, K: ResourceKind> Resource<'a, K> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self {
            client,
            kind: PhantomData,
        }
    }

    fn item_path(id: i32) -> String {
        format!("{}/{id}", K::PATH)
    }

    /// One page of items, optionally filtered.
    ///
    /// Parameters are sent in order: fixed parameters of the resource, then
    /// `page` and `limit`, then the filter keys.
    pub async fn list(
        &self,
        pagination: Option<&Pagination>,
        filter: Option<&K::Filter>,
    ) -> ApiResult<PaginatedResponse<K::Item>> {
        let mut params = QueryParams::new();
        K::base_params(&mut params);
        if let Some(pagination) = pagination {
            pagination.apply(&mut params);
        }
        if let Some(filter) = filter {
            params.filter(filter);
        }
        self.client.get(K::PATH, &params).await
    }

    pub async fn get(&self, id: impl Into<i32>) -> ApiResult<K::Item> {
        let mut params = QueryParams::new();
        K::base_params(&mut params);
        self.client.get(&Self::item_path(id.into()), &params).await
    }

    /// Items whose name matches `term`, as a bare list.
    pub async fn search(&self, term: &str) -> ApiResult<Vec<K::Item>> {
        let mut params = QueryParams::new();
        params.search(term);
        self.client.get(K::PATH, &params).await
    }

    /// Creates an item.
    ///
    /// The server's echo of the record is returned when it decodes as a full
    /// item; a bare acknowledgement yields `None`.
    pub async fn create(&self, payload: &K::Create) -> ApiResult<Option<K::Item>> {
        self.client.write(Method::POST, K::PATH, Some(payload)).await
    }

    pub async fn update(
        &self,
        id: impl Into<i32>,
        payload: &K::Update,
    ) -> ApiResult<Option<K::Item>> {
        self.client
            .write(Method::PUT, &Self::item_path(id.into()), Some(payload))
            .await
    }

    pub async fn delete(&self, id: impl Into<i32>) -> ApiResult<()> {
        self.client.delete(&Self::item_path(id.into())).await
    }
}

/// Debounced [`Resource::search`] for typeahead inputs.
///
/// Each call of the returned trigger restarts the client's search window;
/// only the last term typed within it is sent, and `on_results` receives that
/// request's outcome. Failures have already been reported when it runs.
pub fn typeahead<K, F>(
    client: &ApiClient,
    debouncer: &Debouncer,
    on_results: F,
) -> impl Fn(String) + Send + Sync + 'static
where
    K: ResourceKind + Send + Sync + 'static,
    K::Item: Send,
    F: Fn(ApiResult<Vec<K::Item>>) + Send + Sync + 'static,
{
    let window = client.search_debounce();
    let client = client.clone();
    let on_results = Arc::new(on_results);
    debouncer.debounce(
        move |term: String| {
            let client = client.clone();
            let on_results = on_results.clone();
            async move {
                let results = Resource::<K>::new(&client).search(&term).await;
                on_results(results);
            }
        },
        window,
    )
}
