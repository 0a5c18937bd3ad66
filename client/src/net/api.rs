//! REST API helpers for the HR backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): requests are still built, but sending returns
//! `ApiError::Unavailable` since these endpoints are only called from the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. 401/403 map to
//! `ApiError::Unauthorized`, which views treat as "session is gone".

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{
    DepartmentCount, Employee, EmployeeInput, LoginRequest, LoginResponse, Profile, ProfileInput, TotalEmployees,
};
use crate::config::ApiConfig;
use crate::state::session::SessionStore;

/// Failure of a single API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Transport(String),
    /// The backend rejected the bearer token or the caller's role.
    #[error("not authorized (status {status})")]
    Unauthorized { status: u16 },
    /// Any other non-2xx response.
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    /// A 2xx response whose body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// An authenticated call was attempted with no token in the session.
    #[error("not signed in")]
    MissingToken,
    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Whether the caller should drop the session and return to login.
    #[must_use]
    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::Unauthorized { .. } | Self::MissingToken)
    }
}

/// HTTP verbs used by the backend surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Backend endpoints, one variant per route in the REST table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Login,
    Employees,
    Employee(i64),
    Profile,
    DepartmentCounts,
    TotalEmployees,
}

impl Endpoint {
    #[must_use]
    pub fn path(self) -> String {
        match self {
            Self::Login => "/api/login".to_owned(),
            Self::Employees => "/api/employees".to_owned(),
            Self::Employee(id) => format!("/api/employees/{id}"),
            Self::Profile => "/api/profile".to_owned(),
            Self::DepartmentCounts => "/api/analytics/employees-by-department".to_owned(),
            Self::TotalEmployees => "/api/analytics/total-employees".to_owned(),
        }
    }

    #[must_use]
    pub fn requires_auth(self) -> bool {
        !matches!(self, Self::Login)
    }
}

/// A fully resolved request, ready to hand to the transport.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub bearer: Option<String>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    /// Build a request for `endpoint`, reading the token from `session` now.
    ///
    /// # Errors
    ///
    /// Returns `MissingToken` for an authenticated endpoint when the session
    /// holds no token, and `Decode` if `body` cannot be serialized.
    pub fn build<B: Serialize>(
        config: &ApiConfig,
        session: &SessionStore,
        method: Method,
        endpoint: Endpoint,
        body: Option<&B>,
    ) -> Result<Self, ApiError> {
        let bearer = if endpoint.requires_auth() {
            Some(session.token().ok_or(ApiError::MissingToken)?)
        } else {
            None
        };
        let body = body
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(Self { method, url: config.url(&endpoint.path()), bearer, body })
    }

    /// Value for the `Authorization` header, if any.
    #[must_use]
    pub fn authorization(&self) -> Option<String> {
        self.bearer.as_deref().map(bearer_header_value)
    }
}

fn bearer_header_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Map a non-2xx status and its body to an `ApiError`.
#[must_use]
pub fn classify_status(status: u16, body: &str) -> ApiError {
    if status == 401 || status == 403 {
        return ApiError::Unauthorized { status };
    }
    ApiError::Status { status, message: error_message_from_body(status, body) }
}

fn error_message_from_body(status: u16, body: &str) -> String {
    let trimmed = body.trim();
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) {
        for key in ["message", "error"] {
            if let Some(text) = value.get(key).and_then(serde_json::Value::as_str) {
                return text.to_owned();
            }
        }
    }
    if trimmed.is_empty() { format!("HTTP {status}") } else { trimmed.to_owned() }
}

/// Turn a received status and body read into the call outcome. A failed body
/// read on a 2xx response is a transport failure; on any other status the
/// status wins and the body only feeds the message.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) fn resolve_response(status: u16, body: Result<String, String>) -> Result<String, ApiError> {
    if !(200..300).contains(&status) {
        return Err(classify_status(status, body.as_deref().unwrap_or_default()));
    }
    body.map_err(ApiError::Transport)
}

fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Send `request` and return the raw body of a 2xx response.
async fn dispatch(request: ApiRequest) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        if let Some(auth) = request.authorization() {
            builder = builder.header("Authorization", &auth);
        }
        let sent = match &request.body {
            Some(body) => builder.json(body).map_err(|e| ApiError::Transport(e.to_string()))?.send().await,
            None => builder.send().await,
        };
        let resp = sent.map_err(|e| {
            log::warn!("{:?} {} failed: {e}", request.method, request.url);
            ApiError::Transport(e.to_string())
        })?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| e.to_string());
        let outcome = resolve_response(status, body);
        if let Err(err) = &outcome {
            log::warn!("{:?} {} returned {status}: {err}", request.method, request.url);
        }
        outcome
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

async fn call<B: Serialize, T: DeserializeOwned>(
    config: &ApiConfig,
    session: &SessionStore,
    method: Method,
    endpoint: Endpoint,
    body: Option<&B>,
) -> Result<T, ApiError> {
    let request = ApiRequest::build(config, session, method, endpoint, body)?;
    let raw = dispatch(request).await?;
    decode_body(&raw)
}

/// Exchange credentials for a token via `POST /api/login`.
///
/// # Errors
///
/// Any transport, status, or decode failure.
pub async fn login(
    config: &ApiConfig,
    session: &SessionStore,
    credentials: &LoginRequest,
) -> Result<LoginResponse, ApiError> {
    call(config, session, Method::Post, Endpoint::Login, Some(credentials)).await
}

/// `GET /api/employees`.
///
/// # Errors
///
/// Any transport, status, or decode failure, or `MissingToken`.
pub async fn list_employees(config: &ApiConfig, session: &SessionStore) -> Result<Vec<Employee>, ApiError> {
    call::<(), _>(config, session, Method::Get, Endpoint::Employees, None).await
}

/// `POST /api/employees`, returning the created record.
///
/// # Errors
///
/// Any transport, status, or decode failure, or `MissingToken`.
pub async fn create_employee(
    config: &ApiConfig,
    session: &SessionStore,
    input: &EmployeeInput,
) -> Result<Employee, ApiError> {
    call(config, session, Method::Post, Endpoint::Employees, Some(input)).await
}

/// `PUT /api/employees/{id}`, returning the updated record.
///
/// # Errors
///
/// Any transport, status, or decode failure, or `MissingToken`.
pub async fn update_employee(
    config: &ApiConfig,
    session: &SessionStore,
    id: i64,
    input: &EmployeeInput,
) -> Result<Employee, ApiError> {
    call(config, session, Method::Put, Endpoint::Employee(id), Some(input)).await
}

/// `DELETE /api/employees/{id}`. The response body is ignored.
///
/// # Errors
///
/// Any transport or status failure, or `MissingToken`.
pub async fn delete_employee(config: &ApiConfig, session: &SessionStore, id: i64) -> Result<(), ApiError> {
    let request = ApiRequest::build::<()>(config, session, Method::Delete, Endpoint::Employee(id), None)?;
    dispatch(request).await.map(|_| ())
}

/// `GET /api/profile` for the signed-in user.
///
/// # Errors
///
/// Any transport, status, or decode failure, or `MissingToken`.
pub async fn fetch_profile(config: &ApiConfig, session: &SessionStore) -> Result<Profile, ApiError> {
    call::<(), _>(config, session, Method::Get, Endpoint::Profile, None).await
}

/// `PUT /api/profile`, returning the stored profile.
///
/// # Errors
///
/// Any transport, status, or decode failure, or `MissingToken`.
pub async fn update_profile(
    config: &ApiConfig,
    session: &SessionStore,
    input: &ProfileInput,
) -> Result<Profile, ApiError> {
    call(config, session, Method::Put, Endpoint::Profile, Some(input)).await
}

/// `GET /api/analytics/employees-by-department`.
///
/// # Errors
///
/// Any transport, status, or decode failure, or `MissingToken`.
pub async fn department_counts(config: &ApiConfig, session: &SessionStore) -> Result<Vec<DepartmentCount>, ApiError> {
    call::<(), _>(config, session, Method::Get, Endpoint::DepartmentCounts, None).await
}

/// `GET /api/analytics/total-employees`.
///
/// # Errors
///
/// Any transport, status, or decode failure, or `MissingToken`.
pub async fn total_employees(config: &ApiConfig, session: &SessionStore) -> Result<u64, ApiError> {
    let body: TotalEmployees = call::<(), _>(config, session, Method::Get, Endpoint::TotalEmployees, None).await?;
    Ok(body.total_employees)
}
