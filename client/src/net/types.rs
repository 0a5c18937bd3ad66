//! Wire DTOs for the HR backend REST surface.
//!
//! DESIGN
//! ======
//! Read models decode leniently: the backend serializes numeric columns as
//! strings in some responses (`count`, `salary`) and dates as full
//! timestamps. Write models are strict and only built from validated forms.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chrono::NaiveDate;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// An employee record as owned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Server-assigned unique identifier.
    #[serde(deserialize_with = "deserialize_i64_lenient")]
    pub id: i64,
    pub name: String,
    pub email: String,
    pub department: String,
    /// Job role free text (e.g. `"employee"`, `"manager"`).
    pub role: String,
    #[serde(deserialize_with = "deserialize_date_lenient")]
    pub joining_date: NaiveDate,
    #[serde(deserialize_with = "deserialize_f64_lenient")]
    pub salary: f64,
}

/// Validated body for `POST /api/employees` and `PUT /api/employees/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EmployeeInput {
    pub name: String,
    pub email: String,
    pub department: String,
    pub role: String,
    pub joining_date: NaiveDate,
    pub salary: f64,
}

/// The signed-in employee's own profile. Carries no id and no salary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub department: String,
    pub role: String,
    #[serde(deserialize_with = "deserialize_date_lenient")]
    pub joining_date: NaiveDate,
}

/// Validated body for `PUT /api/profile`.
pub type ProfileInput = Profile;

/// Head-count of one department, computed server-side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentCount {
    pub department: String,
    #[serde(deserialize_with = "deserialize_u64_lenient")]
    pub count: u64,
}

/// Response of `GET /api/analytics/total-employees`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalEmployees {
    #[serde(deserialize_with = "deserialize_u64_lenient")]
    pub total_employees: u64,
}

/// Body for `POST /api/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response of `POST /api/login`. Only the token is consumed.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

fn deserialize_i64_lenient<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => number
            .as_i64()
            .ok_or_else(|| D::Error::custom("expected integer-compatible number")),
        serde_json::Value::String(raw) => raw
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("invalid integer string {raw:?}"))),
        _ => Err(D::Error::custom("expected integer or integer string")),
    }
}

fn deserialize_u64_lenient<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = deserialize_i64_lenient(deserializer)?;
    u64::try_from(value).map_err(|_| D::Error::custom(format!("value {value} must not be negative")))
}

fn deserialize_f64_lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let parsed = match value {
        serde_json::Value::Number(number) => number.as_f64(),
        serde_json::Value::String(raw) => raw.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(float) if float.is_finite() => Ok(float),
        _ => Err(D::Error::custom("expected finite number or numeric string")),
    }
}

fn deserialize_date_lenient<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date_prefix(&raw).ok_or_else(|| D::Error::custom(format!("invalid date {raw:?}")))
}

/// Parse `YYYY-MM-DD`, also accepting a longer timestamp that starts with one
/// (e.g. `2024-03-01T00:00:00.000Z`).
pub fn parse_date_prefix(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    let head = trimmed.get(..10)?;
    if trimmed.len() > 10 && !trimmed[10..].starts_with(['T', ' ']) {
        return None;
    }
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}
