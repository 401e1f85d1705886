//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable: {var}")]
    Missing { var: &'static str },
    #[error("invalid {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the hosted backend, without trailing slash.
    pub backend_url: String,
    /// Public (anon) API key sent as the `apikey` header.
    pub backend_anon_key: String,
    pub port: u16,
    /// Whether the session cookie carries the `Secure` attribute.
    pub cookie_secure: bool,
}

impl AppConfig {
    /// Build typed server config from environment variables.
    ///
    /// Required:
    /// - `BACKEND_URL`
    /// - `BACKEND_ANON_KEY`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `COOKIE_SECURE`: bool word; defaults to whether `BACKEND_URL` is https
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable source.
    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let backend_url = required(&get, "BACKEND_URL")?.trim_end_matches('/').to_owned();
        let backend_anon_key = required(&get, "BACKEND_ANON_KEY")?;
        let port = parse_port(get("PORT").as_deref())?;
        let cookie_secure = match get("COOKIE_SECURE") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid { var: "COOKIE_SECURE", value: raw })?,
            None => backend_url.starts_with("https://"),
        };
        Ok(Self { backend_url, backend_anon_key, port, cookie_secure })
    }
}

fn required(get: &impl Fn(&str) -> Option<String>, var: &'static str) -> Result<String, ConfigError> {
    get(var)
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing { var })
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) => value
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::Invalid { var: "PORT", value: value.to_owned() }),
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
