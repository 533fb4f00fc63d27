//! HTTP gateway for the task-management API.
//!
//! Every request goes through [`ApiClient::request`]: it attaches the bearer
//! token, performs one transparent refresh-and-retry cycle on HTTP 401, and
//! surfaces failures as toast notifications. Transport is a trait so the
//! whole control flow runs natively under test against a scripted responder;
//! the browser implementation uses `gloo-net` with cookies included, which
//! carries the http-only refresh credential.
//!
//! REFRESH SERIALIZATION
//! =====================
//! Concurrent 401s all funnel through the session's refresh gate (an async
//! mutex). The first caller refreshes; later callers wake up, observe the
//! token changed while they waited, and reuse it without another refresh.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use leptos::prelude::*;
use serde_json::Value;

use crate::net::session::Session;
use crate::state::auth::AuthState;
use crate::state::toast::Toasts;

/// Fallback when a response body yields no usable message.
pub(crate) const GENERIC_ERROR: &str = "An unexpected error occurred.";
/// Shown once for transport-level failures and unparseable success bodies.
pub(crate) const NETWORK_ERROR: &str = "Network error — please try again.";
/// Shown (deduplicated) when the refresh credential itself is rejected.
pub(crate) const SESSION_EXPIRED: &str = "Your session expired. Please log in again.";
pub(crate) const SESSION_EXPIRED_KEY: &str = "session-expired";

const DEFAULT_API_URL: &str = "http://localhost:3000";

/// API base URL, overridable at build time.
#[must_use]
pub fn api_url() -> String {
    option_env!("TASKBOARD_API_URL").unwrap_or(DEFAULT_API_URL).to_owned()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

#[derive(Clone, Debug)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<String>,
    pub bearer: Option<String>,
}

#[derive(Clone, Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("{0}")]
    Fetch(String),
    #[error("http transport unavailable off-browser")]
    Unsupported,
}

/// Sends one HTTP request. Implemented by the browser fetch wrapper and by
/// scripted mocks in tests.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, req: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Browser transport backed by `gloo-net`. All requests include credentials
/// so the http-only refresh cookie travels with them.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

impl Transport for GlooTransport {
    #[cfg(feature = "csr")]
    async fn send(&self, req: &HttpRequest) -> Result<HttpResponse, TransportError> {
        use gloo_net::http::Request;

        let mut builder = match req.method {
            Method::Get => Request::get(&req.url),
            Method::Post => Request::post(&req.url),
            Method::Patch => Request::patch(&req.url),
            Method::Put => Request::put(&req.url),
            Method::Delete => Request::delete(&req.url),
        }
        .credentials(web_sys::RequestCredentials::Include);

        if let Some(token) = &req.bearer {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }

        let request = match &req.body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(body.clone())
                .map_err(|e| TransportError::Fetch(e.to_string()))?,
            None => builder.build().map_err(|e| TransportError::Fetch(e.to_string()))?,
        };

        let response = request.send().await.map_err(|e| TransportError::Fetch(e.to_string()))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| TransportError::Fetch(e.to_string()))?;
        Ok(HttpResponse { status, body })
    }

    #[cfg(not(feature = "csr"))]
    async fn send(&self, _req: &HttpRequest) -> Result<HttpResponse, TransportError> {
        Err(TransportError::Unsupported)
    }
}

/// Gateway error taxonomy.
///
/// Every variant has already been surfaced to the user as a toast by the
/// time a caller sees it; callers render it inline at most (never toast it
/// again).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx response after any applicable retry, message extracted from
    /// the body.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The refresh credential was rejected; the session has been cleared.
    #[error("{0}")]
    SessionExpired(String),
    /// Transport failure or an unparseable success body.
    #[error("{0}")]
    Network(String),
}

/// The API gateway: transport + session + the state it reports into.
#[derive(Clone)]
pub struct ApiClient<T: Transport> {
    transport: T,
    session: Session,
    auth: RwSignal<AuthState>,
    toasts: Toasts,
    base_url: String,
}

/// The concrete client the UI uses.
pub type Api = ApiClient<GlooTransport>;

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, session: Session, auth: RwSignal<AuthState>, toasts: Toasts) -> Self {
        Self { transport, session, auth, toasts, base_url: api_url() }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub(crate) fn session(&self) -> &Session {
        &self.session
    }

    pub(crate) fn auth(&self) -> RwSignal<AuthState> {
        self.auth
    }

    pub(crate) fn toasts(&self) -> Toasts {
        self.toasts
    }

    /// Issue a request, refreshing the access token once on 401.
    ///
    /// Resolves to `Ok(None)` for empty success bodies (e.g. 204) and
    /// `Ok(Some(value))` otherwise.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<Option<Value>, ApiError> {
        let bearer = self.session.token();
        let mut response = match self.transport.send(&self.build(method, path, &body, bearer.clone())).await {
            Ok(response) => response,
            Err(e) => return Err(self.network_error(&e)),
        };

        // A 401 on a request that carried a token means the token expired;
        // without a token there is nothing to refresh (e.g. bad login
        // credentials), so the status falls through to normal handling.
        if response.status == 401 && bearer.is_some() {
            match self.fresh_token(bearer).await {
                Some(token) => {
                    response = match self.transport.send(&self.build(method, path, &body, Some(token))).await {
                        Ok(response) => response,
                        Err(e) => return Err(self.network_error(&e)),
                    };
                }
                None => {
                    self.session.clear();
                    self.auth.update(|auth| auth.user = None);
                    self.toasts.error_keyed(SESSION_EXPIRED_KEY, SESSION_EXPIRED);
                    return Err(ApiError::SessionExpired(SESSION_EXPIRED.to_owned()));
                }
            }
        }

        if !response.ok() {
            let message = extract_message(&response.body);
            self.toasts.error(&message);
            return Err(ApiError::Status { status: response.status, message });
        }

        if response.body.trim().is_empty() {
            return Ok(None);
        }
        match serde_json::from_str(&response.body) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                log::warn!("response body was not valid JSON: {e}");
                self.toasts.error(NETWORK_ERROR);
                Err(ApiError::Network(NETWORK_ERROR.to_owned()))
            }
        }
    }

    /// Obtain a token to retry with after a 401, serialized behind the
    /// session's refresh gate. Returns `None` when the refresh credential
    /// is rejected.
    async fn fresh_token(&self, stale: Option<String>) -> Option<String> {
        let _gate = self.session.lock_refresh().await;

        // Another caller may have refreshed while we waited for the gate.
        let current = self.session.token();
        if current.is_some() && current != stale {
            return current;
        }

        let token = self.refresh().await?;
        self.session.set_token(Some(token.clone()));
        Some(token)
    }

    /// Mint a new access token from the out-of-band refresh credential.
    /// Failures are logged, not toasted: the caller decides whether the
    /// user needs to hear about it.
    pub(crate) async fn refresh(&self) -> Option<String> {
        let req = self.build(Method::Post, "/auth/refresh", &None, None);
        match self.transport.send(&req).await {
            Ok(response) if response.ok() => {
                match serde_json::from_str::<crate::net::types::RefreshResponse>(&response.body) {
                    Ok(parsed) => Some(parsed.access_token),
                    Err(e) => {
                        log::warn!("refresh response malformed: {e}");
                        None
                    }
                }
            }
            Ok(response) => {
                log::warn!("token refresh rejected: HTTP {}", response.status);
                None
            }
            Err(e) => {
                log::warn!("token refresh failed: {e}");
                None
            }
        }
    }

    pub(crate) fn build(
        &self,
        method: Method,
        path: &str,
        body: &Option<String>,
        bearer: Option<String>,
    ) -> HttpRequest {
        HttpRequest {
            method,
            url: format!("{}{path}", self.base_url),
            body: body.clone(),
            bearer,
        }
    }

    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    fn network_error(&self, cause: &TransportError) -> ApiError {
        log::warn!("request failed: {cause}");
        self.toasts.error(NETWORK_ERROR);
        ApiError::Network(NETWORK_ERROR.to_owned())
    }
}

/// Extract a human-readable message from an error response body.
///
/// Supports plain text and the JSON shapes `{message}`, `{message: [..]}`,
/// `{message: {message}}`, and `{error}`, in that priority order.
pub(crate) fn extract_message(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return GENERIC_ERROR.to_owned();
    }
    match serde_json::from_str::<Value>(trimmed) {
        Ok(value) => message_from_value(&value).unwrap_or_else(|| GENERIC_ERROR.to_owned()),
        // Not JSON at all: the body itself is the message.
        Err(_) => trimmed.to_owned(),
    }
}

fn message_from_value(value: &Value) -> Option<String> {
    match value {
        // A JSON-encoded string may itself wrap another payload.
        Value::String(inner) => {
            let trimmed = inner.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(extract_message(trimmed))
            }
        }
        Value::Object(map) => {
            match map.get("message") {
                Some(Value::String(message)) => return Some(message.clone()),
                Some(Value::Array(items)) => {
                    if let Some(first) = items.first() {
                        return Some(match first {
                            Value::String(message) => message.clone(),
                            other => other.to_string(),
                        });
                    }
                }
                Some(Value::Object(inner)) => {
                    if let Some(Value::String(message)) = inner.get("message") {
                        return Some(message.clone());
                    }
                }
                _ => {}
            }
            match map.get("error") {
                Some(Value::String(message)) => Some(message.clone()),
                _ => None,
            }
        }
        _ => None,
    }
}
