//! Remote data provider module
//!
//! This module provides the configuration and HTTP client used to fetch the
//! user directory and the meeting list from the remote REST API, as well as
//! the `DirectoryProvider` trait the domain services are written against.

use std::env;
use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::error::{ProviderError, ProviderResult};
use crate::models::{Envelope, RawMeeting, User};

const DEFAULT_BASE_URL: &str = "https://faux-api.com/api/v1/";
const DEFAULT_USERS_PATH: &str = "user_8795252158346524/";
const DEFAULT_MEETINGS_PATH: &str = "meetings_8795252158346524/";
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Provider configuration struct
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Base URL of the remote API
    pub base_url: String,
    /// Path of the "get all users" endpoint, relative to `base_url`
    pub users_path: String,
    /// Path of the "get all meetings" endpoint, relative to `base_url`
    pub meetings_path: String,
    /// Connect and overall request timeout
    pub timeout: Duration,
}

impl ProviderConfig {
    /// Create a new ProviderConfig from environment variables
    ///
    /// # Environment Variables
    /// - `PROVIDER_BASE_URL`: base URL (default: "https://faux-api.com/api/v1/")
    /// - `PROVIDER_USERS_PATH`: users endpoint path (default: "user_8795252158346524/")
    /// - `PROVIDER_MEETINGS_PATH`: meetings endpoint path (default: "meetings_8795252158346524/")
    /// - `PROVIDER_TIMEOUT_SECONDS`: request timeout in seconds (default: 30)
    pub fn from_env() -> ProviderResult<Self> {
        let base_url =
            env::var("PROVIDER_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ProviderError::Configuration(format!(
                "Invalid base URL: {}",
                base_url
            )));
        }

        let users_path =
            env::var("PROVIDER_USERS_PATH").unwrap_or_else(|_| DEFAULT_USERS_PATH.to_string());
        let meetings_path = env::var("PROVIDER_MEETINGS_PATH")
            .unwrap_or_else(|_| DEFAULT_MEETINGS_PATH.to_string());

        let timeout_seconds = env::var("PROVIDER_TIMEOUT_SECONDS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS);

        Ok(Self {
            base_url,
            users_path,
            meetings_path,
            timeout: Duration::from_secs(timeout_seconds),
        })
    }

    /// Configuration pointing at an arbitrary base URL with default paths
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            users_path: DEFAULT_USERS_PATH.to_string(),
            meetings_path: DEFAULT_MEETINGS_PATH.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Read-only access to the remote user directory and meeting list
pub trait DirectoryProvider: Send + Sync {
    /// Get all users
    fn fetch_users(&self) -> impl Future<Output = ProviderResult<Vec<User>>> + Send;

    /// Get all meetings
    fn fetch_meetings(&self) -> impl Future<Output = ProviderResult<Vec<RawMeeting>>> + Send;
}

/// HTTP implementation of the provider backed by `reqwest`
#[derive(Debug, Clone)]
pub struct HttpProvider {
    client: Client,
    users_url: String,
    meetings_url: String,
}

impl HttpProvider {
    /// Build the HTTP client for the given configuration
    pub fn new(config: &ProviderConfig) -> ProviderResult<Self> {
        let client = Client::builder()
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProviderError::Configuration(format!("Invalid HTTP client: {}", e)))?;

        info!("Remote provider client initialized with URL: {}", config.base_url);

        Ok(Self {
            client,
            users_url: config.endpoint(&config.users_path),
            meetings_url: config.endpoint(&config.meetings_path),
        })
    }

    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> ProviderResult<Vec<T>> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(ProviderError::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status));
        }

        let envelope: Envelope<T> = response.json().await.map_err(ProviderError::Decode)?;
        debug!(
            "GET {} -> {} ({} records)",
            url,
            envelope.status,
            envelope.result.len()
        );

        Ok(envelope.result)
    }
}

impl DirectoryProvider for HttpProvider {
    async fn fetch_users(&self) -> ProviderResult<Vec<User>> {
        self.fetch(&self.users_url).await
    }

    async fn fetch_meetings(&self) -> ProviderResult<Vec<RawMeeting>> {
        self.fetch(&self.meetings_url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "PROVIDER_BASE_URL",
            "PROVIDER_USERS_PATH",
            "PROVIDER_MEETINGS_PATH",
            "PROVIDER_TIMEOUT_SECONDS",
        ] {
            // SAFETY: env-mutating tests are serialized with `#[serial]`.
            unsafe { env::remove_var(key) };
        }
    }

    #[test]
    #[serial]
    fn test_provider_config_from_env_defaults() {
        clear_env();

        let config = ProviderConfig::from_env().expect("Failed to create provider config");
        assert_eq!(config.base_url, "https://faux-api.com/api/v1/");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(
            config.endpoint(&config.users_path),
            "https://faux-api.com/api/v1/user_8795252158346524/"
        );
        assert_eq!(
            config.endpoint(&config.meetings_path),
            "https://faux-api.com/api/v1/meetings_8795252158346524/"
        );
    }

    #[test]
    #[serial]
    fn test_provider_config_from_env_overrides() {
        clear_env();
        // SAFETY: env-mutating tests are serialized with `#[serial]`.
        unsafe {
            env::set_var("PROVIDER_BASE_URL", "http://localhost:8080/api");
            env::set_var("PROVIDER_USERS_PATH", "/users");
            env::set_var("PROVIDER_TIMEOUT_SECONDS", "5");
        }

        let config = ProviderConfig::from_env().expect("Failed to create provider config");
        clear_env();

        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(
            config.endpoint(&config.users_path),
            "http://localhost:8080/api/users"
        );
    }

    #[test]
    #[serial]
    fn test_provider_config_rejects_non_http_url() {
        clear_env();
        // SAFETY: env-mutating tests are serialized with `#[serial]`.
        unsafe { env::set_var("PROVIDER_BASE_URL", "ftp://example.com") };

        let result = ProviderConfig::from_env();
        clear_env();

        assert!(matches!(result, Err(ProviderError::Configuration(_))));
    }
}
