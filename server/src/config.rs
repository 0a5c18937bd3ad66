//! Host configuration parsed from environment variables.

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:4000";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_PROXY_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("HR_BACKEND_URL must start with http:// or https://, got '{0}'")]
    InvalidBackendUrl(String),
    #[error("{var} must be a positive integer, got '{value}'")]
    InvalidNumber { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Backend origin without a trailing slash.
    pub backend_url: String,
    pub port: u16,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl ServerConfig {
    /// Build typed host config from the process environment.
    ///
    /// Optional:
    /// - `HR_BACKEND_URL`: default `http://localhost:4000`
    /// - `PORT`: default 3000
    /// - `HR_PROXY_TIMEOUT_SECS`: default 30
    /// - `HR_PROXY_CONNECT_TIMEOUT_SECS`: default 5
    ///
    /// # Errors
    ///
    /// Returns an error when any variable is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an explicit variable source.
    ///
    /// # Errors
    ///
    /// Returns an error when any variable is present but malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let backend_url = parse_backend_url(lookup("HR_BACKEND_URL").as_deref())?;
        let port = parse_number("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let request_timeout_secs =
            parse_number("HR_PROXY_TIMEOUT_SECS", lookup("HR_PROXY_TIMEOUT_SECS"), DEFAULT_PROXY_TIMEOUT_SECS)?;
        let connect_timeout_secs = parse_number(
            "HR_PROXY_CONNECT_TIMEOUT_SECS",
            lookup("HR_PROXY_CONNECT_TIMEOUT_SECS"),
            DEFAULT_PROXY_CONNECT_TIMEOUT_SECS,
        )?;

        Ok(Self { backend_url, port, request_timeout_secs, connect_timeout_secs })
    }
}

fn parse_backend_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let raw = raw.map_or(DEFAULT_BACKEND_URL, str::trim);
    if !(raw.starts_with("http://") || raw.starts_with("https://")) {
        return Err(ConfigError::InvalidBackendUrl(raw.to_owned()));
    }
    Ok(raw.trim_end_matches('/').to_owned())
}

fn parse_number<T>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialEq + Default,
{
    let Some(value) = raw else {
        return Ok(default);
    };
    match value.trim().parse::<T>() {
        Ok(parsed) if parsed != T::default() => Ok(parsed),
        _ => Err(ConfigError::InvalidNumber { var, value }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
