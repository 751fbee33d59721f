//! HTTP client wrapper.
//!
//! A single shared client configured with a fixed base URL. Every request
//! goes through `dispatch`, which attaches the bearer token from the
//! session context when one is present, maps non-2xx responses to
//! `ClientError::Api`, and logs failures once, labelled with the calling
//! operation's identity. Single-shot requests: no retry, no timeout, no
//! caching.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{ClientError, ClientResult};
use crate::session::{Session, SessionStore};
use crate::web::{self, FetchTransport};

/// Base URL of the external API.
pub const API_BASE_URL: &str = "https://apilaravel.racielhernandez.com/api";

// =========================================================
// Wire-level request/response types
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A single multipart field. Platform-neutral so services and tests never
/// touch `web_sys::FormData` directly; the fetch transport converts at the
/// boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum FormValue {
    Text(String),
    File {
        filename: String,
        mime: String,
        bytes: Vec<u8>,
    },
}

/// Multipart form payload, used when a create/update may carry binary
/// attachments (product and category images).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormPayload {
    pub fields: Vec<(String, FormValue)>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), FormValue::Text(value.into())));
        self
    }

    pub fn file(
        mut self,
        name: impl Into<String>,
        filename: impl Into<String>,
        mime: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        self.fields.push((
            name.into(),
            FormValue::File {
                filename: filename.into(),
                mime: mime.into(),
                bytes,
            },
        ));
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestPayload {
    Json(Value),
    Multipart(FormPayload),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub payload: Option<RequestPayload>,
}

impl ApiRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Raw response object: status code plus unparsed body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body parsed as JSON. Empty bodies become `Null`; non-JSON bodies are
    /// passed through as a string so nothing is silently dropped.
    pub fn json(&self) -> Value {
        if self.body.is_empty() {
            return Value::Null;
        }
        serde_json::from_str(&self.body).unwrap_or_else(|_| Value::String(self.body.clone()))
    }
}

// =========================================================
// Transport adapter
// =========================================================

/// Seam between the client and the actual wire. Production uses the
/// `web_sys` fetch transport; tests inject a mock that records requests.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ClientError>;
}

// =========================================================
// Client
// =========================================================

#[derive(Clone)]
pub struct ApiClient<T: Transport, S: SessionStore> {
    base_url: String,
    transport: T,
    session: Session<S>,
}

/// Production client: fetch transport over the browser session.
pub type AdminApi = ApiClient<FetchTransport, crate::session::BrowserSession>;

impl AdminApi {
    pub fn new() -> Self {
        Self::with_parts(FetchTransport, Session::default(), API_BASE_URL)
    }
}

impl Default for AdminApi {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S> ApiClient<T, S>
where
    T: Transport,
    S: SessionStore,
{
    pub fn with_parts(transport: T, session: Session<S>, base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
            session,
        }
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Sends a request and returns the response body as JSON.
    ///
    /// `op` is the human-readable (Spanish) identity of the operation, used
    /// once here for diagnostics so individual services do not carry their
    /// own log-and-rethrow blocks.
    pub async fn request(
        &self,
        op: &str,
        method: HttpMethod,
        path: &str,
        payload: Option<RequestPayload>,
    ) -> ClientResult<Value> {
        let response = self.dispatch(op, method, path, payload).await?;
        Ok(response.json())
    }

    /// Same as `request`, but hands back the raw response object instead of
    /// the unwrapped body.
    pub async fn request_raw(
        &self,
        op: &str,
        method: HttpMethod,
        path: &str,
        payload: Option<RequestPayload>,
    ) -> ClientResult<ApiResponse> {
        self.dispatch(op, method, path, payload).await
    }

    async fn dispatch(
        &self,
        op: &str,
        method: HttpMethod,
        path: &str,
        payload: Option<RequestPayload>,
    ) -> ClientResult<ApiResponse> {
        let mut headers: Vec<(String, String)> = Vec::new();

        // JSON payloads carry an explicit content type; multipart bodies
        // leave it to the browser so the boundary gets set.
        if matches!(payload, Some(RequestPayload::Json(_))) {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }

        // Pre-request hook: a token in the session means every request
        // carries it; no token means the request goes out unauthenticated
        // and the API decides.
        if let Some(token) = self.session.token() {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }

        let request = ApiRequest {
            method,
            url: self.url(path),
            headers,
            payload,
        };

        let result = match self.transport.send(request).await {
            Ok(response) if response.ok() => Ok(response),
            Ok(response) => Err(ClientError::api(response.status, response.body)),
            Err(err) => Err(err),
        };

        if let Err(err) = &result {
            web::log_error(&format!("{}: {}", op, err));
        }

        result
    }
}
