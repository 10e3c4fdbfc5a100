//! HTTP client for the balldontlie API.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    config::{ClientConfig, ConfigError},
    query::{Query, QueryParams},
    Error,
};

/// Header identifying which client library issued a request.
pub const CLIENT_HEADER: &str = "x-bdl-client";

/// Value sent in [`CLIENT_HEADER`].
pub const CLIENT_ID: &str = "rust";

/// One API call: method, path, query parameters and any header overrides.
#[derive(Clone, Debug)]
pub struct Request {
    method: Method,
    path: String,
    params: QueryParams,
    headers: Vec<(String, String)>,
}

impl Request {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            params: QueryParams::new(),
            headers: Vec::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Replaces the query parameters with those of `query`.
    pub fn with_query<Q: Query + ?Sized>(mut self, query: &Q) -> Self {
        self.params = query.to_params();
        self
    }

    /// Adds a header, replacing any default header with the same name.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn params(&self) -> &QueryParams {
        &self.params
    }
}

/// HTTP client for the balldontlie API.
///
/// Holds the immutable configuration and one pooled `reqwest::Client`.
/// Cloning is cheap and clones share both, so a single `Client` can serve
/// concurrent calls from many tasks. Calls are never retried.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    config: Arc<ClientConfig>,
    default_headers: HeaderMap,
}

// Verify Client is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
};

impl Client {
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        let mut auth = HeaderValue::from_str(config.api_key().as_ref())
            .map_err(|_| ConfigError::InvalidApiKey)?;
        auth.set_sensitive(true);

        let mut default_headers = HeaderMap::new();
        default_headers.insert(AUTHORIZATION, auth);
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        default_headers.insert(
            HeaderName::from_static(CLIENT_HEADER),
            HeaderValue::from_static(CLIENT_ID),
        );

        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            http,
            config: Arc::new(config),
            default_headers,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Headers sent with every request before per-request overrides.
    pub fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    /// Resolves the full URL for a request: base URL, path, then encoded parameters.
    ///
    /// The path must start with `/` and the result must stay on the base URL's
    /// origin, so the API key is never sent to another host.
    pub fn url(&self, request: &Request) -> Result<Url, Error> {
        if !request.path.starts_with('/') {
            tracing::error!("Rejected request path without leading slash: {}", request.path);
            return Err(Error::generic(format!(
                "Invalid request path {:?}: must start with '/'",
                request.path
            )));
        }
        let base = Url::parse(self.config.base_url()).map_err(|e| {
            Error::generic(format!("Invalid base URL {:?}: {}", self.config.base_url(), e))
        })?;
        let url = Url::parse(format!("{}{}", self.config.base_url(), request.path).as_str())
            .map_err(|e| {
                tracing::error!("Invalid URL constructed for {}: {}", request.path, e);
                Error::generic(format!("Invalid request path {:?}: {}", request.path, e))
            })?;
        if url.origin() != base.origin() {
            tracing::error!("Request path {} resolves outside {}", request.path, base);
            return Err(Error::generic(format!(
                "Invalid request path {:?}: resolves to another host",
                request.path
            )));
        }
        Ok(request.params.add_to_url(&url))
    }

    fn headers(&self, request: &Request) -> Result<HeaderMap, Error> {
        let mut headers = self.default_headers.clone();
        for (name, value) in request.headers.iter() {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| Error::generic(format!("Invalid header name {:?}: {}", name, e)))?;
            let mut value = HeaderValue::from_str(value)
                .map_err(|e| Error::generic(format!("Invalid header value for {}: {}", name, e)))?;
            if name == AUTHORIZATION {
                value.set_sensitive(true);
            }
            headers.insert(name, value);
        }
        Ok(headers)
    }

    /// Sends one request and decodes a success body as `T`.
    ///
    /// Non-success statuses are classified into an [`Error`] carrying the
    /// status, the extracted message and the response body. A request that
    /// gets no response at all fails with [`crate::ErrorKind::Network`].
    pub async fn execute<T>(&self, request: Request) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let url = self.url(&request)?;
        let headers = self.headers(&request)?;
        tracing::debug!(method = %request.method, url = %url, "sending request");

        let resp = self
            .http
            .request(request.method.clone(), url)
            .headers(headers)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to reach {}: {}", request.path, e);
                Error::network(e)
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::network(e)
        })?;

        if !status.is_success() {
            let err = Error::from_response(status.as_u16(), status.canonical_reason(), &body);
            tracing::warn!(
                "Request to {} failed with status {}: {}",
                request.path,
                status,
                truncate_body(&body)
            );
            return Err(err);
        }

        serde_json::from_str::<T>(&body).map_err(|e| {
            tracing::error!(
                "Failed to parse response from {}: {} | body: {}",
                request.path,
                e,
                truncate_body(&body)
            );
            Error::decode(status.as_u16(), e, &body)
        })
    }

    /// GETs `path` with the parameters of `query`.
    pub async fn get<T, Q>(&self, path: &str, query: &Q) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query + ?Sized,
    {
        self.execute(Request::get(path).with_query(query)).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
