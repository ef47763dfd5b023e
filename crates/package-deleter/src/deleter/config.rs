//! Configuration types for the deletion client

use std::time::Duration;

use crate::deleter::core::{DeleteError, Result};

/// Default GraphQL endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.github.com/graphql";

/// Accept header opting into the package deletion preview
pub const PACKAGE_DELETES_PREVIEW: &str = "application/vnd.github.package-deletes-preview+json";

/// What happens when the deletion counter reaches the throttle threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThrottleMode {
    /// Log the warning and trigger the delay without awaiting it
    #[default]
    Inert,
    /// Log the warning and await the delay before sending the mutation
    Pause,
}

/// Configuration for registry API calls
#[derive(Debug, Clone)]
pub struct DeleteConfig {
    pub endpoint: String,
    /// Accept header sent with every request
    pub preview_accept: String,
    pub user_agent: String,
    pub timeout: Duration,
    /// Counter value that triggers the throttle warning
    pub throttle_threshold: u64,
    pub throttle_delay: Duration,
    pub throttle_mode: ThrottleMode,
    /// Fire a background rate-limit probe before each deletion
    pub probe_rate_limit: bool,
}

impl DeleteConfig {
    pub fn with_endpoint<S: Into<String>>(mut self, endpoint: S) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_throttle_mode(mut self, mode: ThrottleMode) -> Self {
        self.throttle_mode = mode;
        self
    }

    pub fn with_throttle_threshold(mut self, threshold: u64) -> Self {
        self.throttle_threshold = threshold;
        self
    }

    pub fn with_throttle_delay(mut self, delay: Duration) -> Self {
        self.throttle_delay = delay;
        self
    }

    pub fn with_rate_limit_probe(mut self, enabled: bool) -> Self {
        self.probe_rate_limit = enabled;
        self
    }

    /// Check that the endpoint is an absolute http(s) URL
    pub fn validate(&self) -> Result<url::Url> {
        let url = url::Url::parse(&self.endpoint)?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(DeleteError::Configuration {
                message: format!("unsupported endpoint scheme '{}'", scheme),
                field: Some("endpoint".to_string()),
                suggestion: Some("Use an http:// or https:// GraphQL endpoint".to_string()),
            }),
        }
    }

    /// Whether a counter value sits exactly at the throttle threshold
    pub fn is_throttle_point(&self, attempted: u64) -> bool {
        attempted == self.throttle_threshold
    }
}

impl Default for DeleteConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            preview_accept: PACKAGE_DELETES_PREVIEW.to_string(),
            user_agent: "package-deleter/0.1.0".to_string(),
            timeout: Duration::from_secs(30),
            throttle_threshold: 99,
            throttle_delay: Duration::from_millis(5000),
            throttle_mode: ThrottleMode::Inert,
            probe_rate_limit: true,
        }
    }
}
