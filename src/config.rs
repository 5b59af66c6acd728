//! Client configuration injected by the host page.
//!
//! The browser build reads a JSON object from the `content` attribute of
//! `<meta name="asset-client-config">`. Every key is optional:
//!
//! - `baseUrl`: collection resource URL (default [`DEFAULT_BASE_URL`])
//! - `logLevel`: `error`, `warn`, `info` (default), `debug` or `trace`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v1/assets";
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

/// Name of the `<meta>` element carrying the JSON config.
pub const CONFIG_META_NAME: &str = "asset-client-config";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    InvalidJson(String),
    #[error("baseUrl must not be empty")]
    EmptyBaseUrl,
    #[error("unknown logLevel `{0}`")]
    InvalidLogLevel(String),
}

/// Typed client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Collection resource URL, without a trailing slash.
    pub base_url: String,
    pub log_level: log::Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_owned(), log_level: DEFAULT_LOG_LEVEL }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawConfig {
    base_url: Option<String>,
    log_level: Option<String>,
}

impl ClientConfig {
    /// Parse a `{ "baseUrl": ..., "logLevel": ... }` JSON object.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for malformed JSON, a blank `baseUrl`, or an
    /// unrecognized `logLevel`.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let parsed: RawConfig = serde_json::from_str(raw).map_err(|e| ConfigError::InvalidJson(e.to_string()))?;

        let base_url = match parsed.base_url.as_deref() {
            Some(url) => normalize_base_url(url)?,
            None => DEFAULT_BASE_URL.to_owned(),
        };
        let log_level = match parsed.log_level.as_deref() {
            Some(level) => parse_log_level(level)?,
            None => DEFAULT_LOG_LEVEL,
        };

        Ok(Self { base_url, log_level })
    }

    /// Read the config from the host document.
    ///
    /// A missing `<meta>` element yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the element exists but its content is invalid.
    pub fn from_document() -> Result<Self, ConfigError> {
        #[cfg(feature = "csr")]
        {
            let content = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.query_selector(&format!("meta[name=\"{CONFIG_META_NAME}\"]")).ok().flatten())
                .and_then(|el| el.get_attribute("content"));
            match content {
                Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw),
                _ => Ok(Self::default()),
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            Ok(Self::default())
        }
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyBaseUrl);
    }
    Ok(trimmed.to_owned())
}

fn parse_log_level(raw: &str) -> Result<log::Level, ConfigError> {
    raw.trim()
        .parse::<log::Level>()
        .map_err(|_| ConfigError::InvalidLogLevel(raw.to_owned()))
}
