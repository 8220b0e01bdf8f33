//! HTTP transport shared by every service.
//!
//! [`ApiClient`] attaches the bearer token, encodes query strings, decodes
//! JSON bodies and passes every failure through the [`ErrorReporter`] before
//! returning it.

use std::sync::Arc;
use std::time::Duration;

use chrono::{FixedOffset, Offset, Utc};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::{ApiError, ApiResult, ErrorReporter};
use crate::models::config::ClientConfig;
use crate::notify::{
    AlwaysOnline, Connectivity, LogNavigator, LogNotifier, Navigator, Notifier,
};
use crate::pagination::Pagination;
use crate::query::QueryParams;
use crate::session::{FileTokenStore, MemoryTokenStore, Session, TokenStore};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_PAGE_LIMIT: u32 = 10;
const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Async client for the clinic REST API.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<Session>,
    reporter: ErrorReporter,
    connectivity: Arc<dyn Connectivity>,
    utc_offset: FixedOffset,
    default_page_limit: u32,
    search_debounce: Duration,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("session", &self.session)
            .field("utc_offset", &self.utc_offset)
            .field("default_page_limit", &self.default_page_limit)
            .field("search_debounce", &self.search_debounce)
            .finish_non_exhaustive()
    }
}

/// Collaborators and settings for an [`ApiClient`].
pub struct ApiClientBuilder {
    base_url: String,
    session: Option<Arc<Session>>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    connectivity: Arc<dyn Connectivity>,
    timeout: Duration,
    utc_offset: FixedOffset,
    default_page_limit: u32,
    search_debounce: Duration,
}

impl ApiClientBuilder {
    pub fn session(mut self, session: Arc<Session>) -> Self {
        self.session = Some(session);
        self
    }

    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = navigator;
        self
    }

    pub fn connectivity(mut self, connectivity: Arc<dyn Connectivity>) -> Self {
        self.connectivity = connectivity;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn utc_offset(mut self, offset: FixedOffset) -> Self {
        self.utc_offset = offset;
        self
    }

    pub fn default_page_limit(mut self, limit: u32) -> Self {
        self.default_page_limit = limit;
        self
    }

    /// Quiet period before a typeahead search is sent.
    pub fn search_debounce(mut self, window: Duration) -> Self {
        self.search_debounce = window;
        self
    }

    pub fn build(self) -> ApiResult<ApiClient> {
        let base_url = self.base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ApiError::Config("api_url must not be empty".into()));
        }
        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| ApiError::Config(format!("failed to build HTTP client: {e}")))?;
        let session = self
            .session
            .unwrap_or_else(|| Arc::new(Session::in_memory("token")));
        let reporter = ErrorReporter::new(session.clone(), self.notifier, self.navigator);

        Ok(ApiClient {
            http,
            base_url,
            session,
            reporter,
            connectivity: self.connectivity,
            utc_offset: self.utc_offset,
            default_page_limit: self.default_page_limit,
            search_debounce: self.search_debounce,
        })
    }
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Value,
}

impl ErrorBody {
    /// Servers send either a single message or a list of them.
    fn text(&self) -> Option<String> {
        let text = match &self.message {
            Value::String(message) => message.clone(),
            Value::Array(messages) => messages
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(", "),
            _ => return None,
        };
        (!text.trim().is_empty()).then_some(text)
    }
}

impl ApiClient {
    pub fn builder(base_url: impl Into<String>) -> ApiClientBuilder {
        ApiClientBuilder {
            base_url: base_url.into(),
            session: None,
            notifier: Arc::new(LogNotifier),
            navigator: Arc::new(LogNavigator),
            connectivity: Arc::new(AlwaysOnline),
            timeout: DEFAULT_TIMEOUT,
            utc_offset: Utc.fix(),
            default_page_limit: DEFAULT_PAGE_LIMIT,
            search_debounce: DEFAULT_SEARCH_DEBOUNCE,
        }
    }

    /// Client with log-only collaborators, configured from `config`.
    pub fn from_config(config: &ClientConfig) -> ApiResult<Self> {
        let store: Arc<dyn TokenStore> = match &config.token_dir {
            Some(dir) => Arc::new(FileTokenStore::new(dir)),
            None => Arc::new(MemoryTokenStore::new()),
        };
        let utc_offset = config
            .utc_offset()
            .map_err(|e| ApiError::Config(e.to_string()))?;

        Self::builder(config.api_url.as_str())
            .session(Arc::new(Session::new(store, config.token_key.as_str())))
            .timeout(config.timeout())
            .utc_offset(utc_offset)
            .default_page_limit(config.default_page_limit)
            .search_debounce(config.search_debounce())
            .build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    pub fn utc_offset(&self) -> FixedOffset {
        self.utc_offset
    }

    /// First page with the configured page size.
    pub fn default_pagination(&self) -> Pagination {
        Pagination::new(1, self.default_page_limit)
    }

    pub fn search_debounce(&self) -> Duration {
        self.search_debounce
    }

    /// Hands a locally detected failure to the central reporter.
    pub fn report(&self, error: impl Into<ApiError>) -> ApiError {
        self.reporter.report(error.into())
    }

    pub async fn get<T>(&self, path: &str, params: &QueryParams) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        self.send_json(Method::GET, path, params, None::<&()>).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(Method::POST, path, &QueryParams::new(), Some(body))
            .await
    }

    pub async fn put<B, T>(&self, path: &str, body: Option<&B>) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(Method::PUT, path, &QueryParams::new(), body)
            .await
    }

    /// Sends a write whose response body is informational.
    ///
    /// Every 2xx answer is a success. The body is decoded as `T` when it can
    /// be; an empty, partial or non-JSON body yields `Ok(None)`.
    pub async fn write<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<Option<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .execute(method, path, &QueryParams::new(), body)
            .await
            .map_err(|e| self.reporter.report(e))?;
        Ok(Self::decode_written(response).await)
    }

    /// Sends a DELETE and ignores any response body.
    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        self.execute(Method::DELETE, path, &QueryParams::new(), None::<&()>)
            .await
            .map(|_| ())
            .map_err(|e| self.reporter.report(e))
    }

    async fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        params: &QueryParams,
        body: Option<&B>,
    ) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let result = match self.execute(method, path, params, body).await {
            Ok(response) => self.decode(response).await,
            Err(e) => Err(e),
        };
        result.map_err(|e| self.reporter.report(e))
    }

    async fn execute<B>(
        &self,
        method: Method,
        path: &str,
        params: &QueryParams,
        body: Option<&B>,
    ) -> ApiResult<Response>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, params.append_to(path)?);
        log::debug!("{method} {url}");

        let mut request = self.authorize(self.http.request(method, url.as_str()));
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| self.transport_error(e))?;
        Self::check_status(response).await
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn check_status(response: Response) -> ApiResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }

        let fallback = status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string();
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.text().unwrap_or(fallback),
            Err(_) => fallback,
        };
        Err(ApiError::Http {
            status: status.as_u16(),
            message,
        })
    }

    async fn decode<T: DeserializeOwned>(&self, response: Response) -> ApiResult<T> {
        let bytes = response.bytes().await.map_err(|e| self.transport_error(e))?;
        // Endpoints answering with an empty body decode as JSON `null`.
        let body: &[u8] = if bytes.is_empty() { b"null" } else { &bytes };
        serde_json::from_slice(body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn decode_written<T: DeserializeOwned>(response: Response) -> Option<T> {
        let url = response.url().clone();
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                log::warn!("write to {url} succeeded but its body could not be read: {e}");
                return None;
            }
        };
        if body.is_empty() {
            return None;
        }
        match serde_json::from_slice(&body) {
            Ok(item) => Some(item),
            Err(e) => {
                log::debug!("write to {url} answered with an undecodable body: {e}");
                None
            }
        }
    }

    fn transport_error(&self, err: reqwest::Error) -> ApiError {
        if err.is_decode() {
            return ApiError::Decode(err.to_string());
        }
        if err.is_builder() {
            return ApiError::InvalidRequest(err.to_string());
        }
        if err.is_connect() || err.is_timeout() || err.is_request() || err.is_body() {
            return if self.connectivity.is_online() {
                ApiError::Unreachable(err.to_string())
            } else {
                ApiError::Offline
            };
        }
        ApiError::Unexpected(err.to_string())
    }
}
