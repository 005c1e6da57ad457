// Request Gateway
//
// Wraps `reqwest::Client` with base-URL construction, the fixed JSON header
// set, a single deadline around each call, and uniform error normalization.
// Resource endpoints (users, monitoring, logs, settings) are implemented as
// inherent methods in separate files to keep this module focused on
// transport mechanics.

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::{Deserialize, DeserializeOwned};
use serde_json::{Value, json};
use tracing::{debug, trace, warn};
use url::Url;

use crate::error::Error;
use crate::transport::{TransportConfig, default_headers};

/// Everything about a single call except its endpoint.
///
/// Caller headers are merged under the fixed `Content-Type`/`Accept` pair:
/// the fixed values win unless [`override_defaults`](Self::override_defaults)
/// is set.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    method: Method,
    body: Option<Value>,
    headers: HeaderMap,
    override_defaults: bool,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::new(Method::GET)
    }
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            body: None,
            headers: HeaderMap::new(),
            override_defaults: false,
        }
    }

    pub fn get() -> Self {
        Self::new(Method::GET)
    }

    pub fn post() -> Self {
        Self::new(Method::POST)
    }

    pub fn patch() -> Self {
        Self::new(Method::PATCH)
    }

    pub fn delete() -> Self {
        Self::new(Method::DELETE)
    }

    /// Attach a JSON body.
    pub fn json(mut self, body: &impl Serialize) -> Result<Self, Error> {
        self.body = Some(serde_json::to_value(body).map_err(Error::Encode)?);
        Ok(self)
    }

    /// Add a caller header.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Let caller headers replace the fixed header set.
    pub fn override_defaults(mut self) -> Self {
        self.override_defaults = true;
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    fn merged_headers(&mut self) -> HeaderMap {
        let caller = std::mem::take(&mut self.headers);
        if self.override_defaults {
            let mut headers = default_headers();
            headers.extend(caller);
            headers
        } else {
            let mut headers = caller;
            headers.extend(default_headers());
            headers
        }
    }
}

/// HTTP client for the monitoring backend.
///
/// Each call is a single attempt: no caching, no retries. Every call is
/// bounded by the configured timeout; on expiry the in-flight request is
/// dropped and [`Error::Timeout`] is returned.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    timeout: Duration,
}

impl ApiClient {
    /// Create a client from a `TransportConfig`.
    ///
    /// `base_url` is the backend root (e.g. `http://localhost:5000`); the
    /// `/api/...` paths are appended per call.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url,
            timeout: transport.timeout,
        })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url, timeout: Duration) -> Self {
        Self {
            http,
            base_url,
            timeout,
        }
    }

    /// The backend base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The per-call deadline.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Join a literal endpoint path (e.g. `/api/users`) onto the base URL.
    pub fn endpoint_url(&self, endpoint: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let endpoint = endpoint.trim_start_matches('/');
        Ok(Url::parse(&format!("{base}/{endpoint}"))?)
    }

    /// Build `{base}/api/{segments...}`, percent-encoding each segment.
    ///
    /// Identifiers such as user ids may be email addresses, so they must
    /// never be spliced into the path unescaped.
    pub(crate) fn api_url(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .push("api")
            .extend(segments);
        Ok(url)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Issue one call to `endpoint` and return the parsed JSON.
    ///
    /// Non-JSON 2xx responses resolve to `{"success": true}`.
    pub async fn request(&self, endpoint: &str, options: RequestOptions) -> Result<Value, Error> {
        let url = self.endpoint_url(endpoint)?;
        self.send(url, options).await
    }

    pub(crate) async fn send(&self, url: Url, mut options: RequestOptions) -> Result<Value, Error> {
        debug!(method = %options.method, %url, "sending request");

        let headers = options.merged_headers();
        let mut builder = self
            .http
            .request(options.method.clone(), url)
            .headers(headers);
        if let Some(body) = options.body.take() {
            builder = builder.body(body.to_string());
        }

        if let Ok(result) = tokio::time::timeout(self.timeout, Self::execute(builder)).await {
            result
        } else {
            let timeout_ms = u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX);
            warn!(timeout_ms, "request timed out");
            Err(Error::Timeout { timeout_ms })
        }
    }

    /// Send a request and decode the JSON into `T`.
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        url: Url,
        options: RequestOptions,
    ) -> Result<T, Error> {
        let value = self.send(url, options).await?;
        T::deserialize(&value).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body: value.to_string(),
        })
    }

    async fn execute(builder: RequestBuilder) -> Result<Value, Error> {
        let resp = builder.send().await?;
        let status = resp.status();

        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_owned(),
            });
        }

        let is_json = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.contains("application/json"));
        if !is_json {
            trace!(%status, "non-JSON response body, synthesizing success");
            return Ok(json!({ "success": true }));
        }

        let body = resp.text().await?;
        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(e) => {
                let preview: String = body.chars().take(200).collect();
                Err(Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                })
            }
        }
    }
}
