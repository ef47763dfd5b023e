//! Core data types shared by the probe, single delete and batch delete

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::deleter::core::error::{DeleteError, Result};

/// Environment variable holding the registry token
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Bearer token sent on every request. Not inspected or refreshed.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    token: String,
}

impl Credentials {
    pub fn new<S: Into<String>>(token: S) -> Self {
        Self { token: token.into() }
    }

    /// Load the token from `GITHUB_TOKEN`, reading a `.env` file first if present
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok(); // Ignore error if .env not present
        let token = std::env::var(TOKEN_ENV_VAR)
            .ok()
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| DeleteError::Configuration {
                message: format!("{} environment variable not set", TOKEN_ENV_VAR),
                field: Some(TOKEN_ENV_VAR.to_string()),
                suggestion: Some(
                    "Set GITHUB_TOKEN to a token with the delete:packages scope, or pass --token".to_string(),
                ),
            })?;

        Ok(Self::new(token))
    }

    /// Value for the `Authorization` header
    pub fn authorization_header(&self) -> String {
        format!("bearer {}", self.token)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials").field("token", &"<redacted>").finish()
    }
}

/// Opaque identifier of one deletable package version
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageVersionId(String);

impl PackageVersionId {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageVersionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PackageVersionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PackageVersionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for PackageVersionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Authenticated identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewer {
    pub login: String,
}

/// Rate-limit counters as reported by the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateLimit {
    pub limit: u64,
    pub cost: u64,
    pub remaining: u64,
    pub reset_at: String,
    pub node: u64,
}

/// Snapshot returned by the rate-limit probe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitStatus {
    pub viewer: Viewer,
    #[serde(rename = "rateLimit")]
    pub rate_limit: RateLimit,
}

impl RateLimitStatus {
    /// One-line summary used for logging
    pub fn format_status(&self) -> String {
        format!(
            "login: {}, rate limit: {}, cost: {}, remaining: {}, node: {}",
            self.viewer.login,
            self.rate_limit.limit,
            self.rate_limit.cost,
            self.rate_limit.remaining,
            self.rate_limit.node
        )
    }

    /// Reset time as human-readable string
    pub fn time_until_reset(&self) -> String {
        format!("Next reset: {}", self.rate_limit.reset_at)
    }
}

/// `data` object of the deletion mutation
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletePackageVersionResponse {
    pub delete_package_version: DeletePackageVersionPayload,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeletePackageVersionPayload {
    pub success: bool,
}
