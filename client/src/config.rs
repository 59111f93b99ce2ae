//! Client configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::env::VarError;
use std::path::PathBuf;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5005";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base URL without a trailing slash.
    pub backend_url: String,
    pub token_file: PathBuf,
    pub timeouts: Timeouts,
}

impl ClientConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `PRESTO_BACKEND_URL`: default `http://localhost:5005`
    /// - `PRESTO_TOKEN_FILE`: default `$HOME/.presto/token`
    /// - `PRESTO_REQUEST_TIMEOUT_SECS`: default 30
    /// - `PRESTO_CONNECT_TIMEOUT_SECS`: default 10
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key))
    }

    /// Build config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let backend_url = lookup("PRESTO_BACKEND_URL").unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_owned());
        let token_file = match lookup("PRESTO_TOKEN_FILE") {
            Ok(path) if !path.is_empty() => PathBuf::from(path),
            _ => default_token_file(),
        };
        let timeouts = Timeouts {
            request_secs: parse_or(lookup("PRESTO_REQUEST_TIMEOUT_SECS"), DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: parse_or(lookup("PRESTO_CONNECT_TIMEOUT_SECS"), DEFAULT_CONNECT_TIMEOUT_SECS),
        };
        Self { backend_url: normalize_base_url(&backend_url), token_file, timeouts }
    }

    #[must_use]
    pub fn with_backend_url(mut self, url: &str) -> Self {
        self.backend_url = normalize_base_url(url);
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_owned(),
            token_file: default_token_file(),
            timeouts: Timeouts::default(),
        }
    }
}

/// `$HOME/.presto/token`, or `.presto/token` when no home directory exists.
#[must_use]
pub fn default_token_file() -> PathBuf {
    dirs::home_dir().unwrap_or_default().join(".presto").join("token")
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_owned()
}

fn parse_or(raw: Result<String, VarError>, default: u64) -> u64 {
    match raw {
        Ok(value) => value.trim().parse().unwrap_or(default),
        Err(_) => default,
    }
}
