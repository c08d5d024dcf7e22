//! # HTTP plumbing shared by every endpoint
//!
//! [`ApiClient`] owns the `reqwest` client, the normalised base URL and the
//! [`Session`] whose token is attached to requests. Endpoint methods live in
//! [`crate::endpoints`]; they build a request, pick an [`Auth`] mode and hand
//! it to [`ApiClient::send`], then decode with [`read_json`] or
//! [`read_optional_json`].
//!
//! ## Response interpretation
//!
//! | Response | Result |
//! |----------|--------|
//! | no response | [`ApiError::Network`] |
//! | 401 on a request that required a token | token cleared, [`ApiError::Unauthenticated`] |
//! | 2xx | body decoded, [`ApiError::Parse`] on mismatch |
//! | anything else | [`ApiError::Server`] with a message from [`error_message`] |

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use store::config::DEFAULT_API_BASE;
use store::MarketConfig;
use tracing::{debug, warn};

use crate::error::{ApiError, Result};
use crate::session::Session;

/// How a request carries the bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Auth {
    /// Never send a token.
    Anonymous,
    /// Send the token when one is stored.
    Optional,
    /// Fail with [`ApiError::Unauthenticated`] when no token is stored.
    Required,
}

/// Client for the marketplace REST API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    /// Create a client for `base_url`, attaching tokens from `session`.
    pub fn new(base_url: &str, session: Session) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ApiError::invalid("API base URL cannot be empty"));
        }
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ApiError::invalid(
                "API base URL must start with http:// or https://",
            ));
        }

        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
            session,
        })
    }

    pub fn from_config(config: &MarketConfig, session: Session) -> Result<Self> {
        Self::new(config.api_base(), session)
    }

    /// Client for the API on its default local address.
    pub fn local(session: Session) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: DEFAULT_API_BASE.to_string(),
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, format!("{}{}", self.base_url, path))
    }

    /// Attach credentials per `auth` and send.
    pub(crate) async fn send(&self, request: RequestBuilder, auth: Auth) -> Result<Response> {
        let request = match auth {
            Auth::Anonymous => request,
            Auth::Optional => match self.session.token() {
                Some(token) => request.bearer_auth(token),
                None => request,
            },
            Auth::Required => {
                let token = self.session.token().ok_or(ApiError::Unauthenticated)?;
                request.bearer_auth(token)
            }
        };

        let response = request.send().await.map_err(|e| {
            warn!(error = %e, "Request failed before a response arrived");
            ApiError::Network(e.to_string())
        })?;

        debug!(url = %response.url(), status = %response.status(), "API response");

        if auth == Auth::Required && response.status() == StatusCode::UNAUTHORIZED {
            warn!("Server rejected the stored token, clearing session");
            self.session.clear();
            return Err(ApiError::Unauthenticated);
        }

        Ok(response)
    }
}

/// Decode a 2xx body, or turn the response into an error.
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    if response.status().is_success() {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    } else {
        Err(error_from_response(response).await)
    }
}

/// Like [`read_json`], but a 404 means "there is none" rather than an error.
/// Used by the "do I already have one" probes.
pub(crate) async fn read_optional_json<T: DeserializeOwned>(response: Response) -> Result<Option<T>> {
    if response.status() == StatusCode::NOT_FOUND {
        return Ok(None);
    }
    read_json(response).await.map(Some)
}

pub(crate) async fn error_from_response(response: Response) -> ApiError {
    let status = response.status().as_u16();
    let is_json = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.contains("application/json"));
    let body = response.text().await.unwrap_or_default();

    let message = error_message(status, is_json, &body);
    debug!(status, message = %message, "API error response");
    ApiError::Server { status, message }
}

/// Human-readable message for an error response.
///
/// JSON bodies yield their `detail` string; a non-string `detail` (validation
/// errors) or a body without `detail` is shown as compact JSON. Other bodies
/// are shown as text. An empty body falls back to the status code.
pub fn error_message(status: u16, is_json: bool, body: &str) -> String {
    if is_json {
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
            return match value.get("detail") {
                Some(serde_json::Value::String(detail)) => detail.clone(),
                Some(detail) if !detail.is_null() => detail.to_string(),
                _ => value.to_string(),
            };
        }
    }

    let text = body.trim();
    if text.is_empty() {
        format!("HTTP {status}")
    } else {
        text.to_string()
    }
}
