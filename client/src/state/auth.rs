//! Login flow state and token-claim decoding.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login page validates credentials, posts them, and hands the returned
//! token to [`complete_login`]. The decoded role only picks the landing route;
//! the backend enforces authorization on every request.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Deserializer};

use crate::net::types::LoginResponse;
use crate::state::session::{Role, SessionStore};

/// Route shown to signed-out users.
pub const LOGIN_ROUTE: &str = "/";
pub const ADMIN_ROUTE: &str = "/admin";
pub const EMPLOYEE_ROUTE: &str = "/employee";

/// Why a token could not be turned into claims.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("token is not a three-part JWT")]
    MalformedToken,
    #[error("token payload is not valid base64url")]
    InvalidEncoding,
    #[error("token payload is missing required claims: {0}")]
    InvalidClaims(String),
}

/// Claims carried in the token payload.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenClaims {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub email: String,
    pub role: String,
}

impl TokenClaims {
    #[must_use]
    pub fn role(&self) -> Role {
        Role::parse(&self.role)
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error as _;
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        _ => Err(D::Error::custom("expected string or numeric id")),
    }
}

/// Decode the payload segment of a JWT without verifying its signature.
///
/// # Errors
///
/// Returns an [`AuthError`] when the token shape, encoding, or claims are wrong.
pub fn decode_claims(token: &str) -> Result<TokenClaims, AuthError> {
    let mut parts = token.trim().split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(AuthError::MalformedToken);
    };
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).map_err(|_| AuthError::InvalidEncoding)?;
    serde_json::from_slice(&bytes).map_err(|e| AuthError::InvalidClaims(e.to_string()))
}

/// Landing route for a freshly signed-in role. Anything but admin lands on
/// the employee dashboard.
#[must_use]
pub fn landing_route(role: &Role) -> &'static str {
    match role {
        Role::Admin => ADMIN_ROUTE,
        Role::Employee | Role::Other(_) => EMPLOYEE_ROUTE,
    }
}

/// Persist a successful login response and return the decoded role.
///
/// The session is only written once the token decodes.
///
/// # Errors
///
/// Returns the decode error and leaves `session` untouched.
pub fn complete_login(session: &SessionStore, response: &LoginResponse) -> Result<Role, AuthError> {
    let claims = decode_claims(&response.token)?;
    let role = claims.role();
    session.set(&response.token, &role);
    Ok(role)
}

/// Trim the email and require both fields. The password is sent verbatim.
///
/// # Errors
///
/// Returns the user-facing prompt when a field is empty.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// The single message shown for any failed login, whatever the cause.
#[must_use]
pub fn login_failed_message(detail: &str) -> String {
    format!("Invalid credentials, please try again. ({detail})")
}

/// Login page status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub busy: bool,
    pub error: Option<String>,
    pub info: Option<String>,
}
