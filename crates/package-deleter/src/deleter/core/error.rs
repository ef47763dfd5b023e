//! Error types for the deletion client with call-site context and the raw API payload

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::deleter::core::types::PackageVersionId;

const DELETE_FAILED_LABEL: &str = "delete version mutation failed.";
const DELETE_FALLBACK: &str = "verify input parameters are correct";
const PROBE_FALLBACK: &str = "unknown error";

/// Error types for registry API calls
#[derive(Error, Debug, Clone)]
pub enum DeleteError {
    /// Transport/API failure, normalized to the message for its call site.
    /// `raw` keeps the original payload for programmatic inspection.
    #[error("{message}")]
    Transport {
        operation: ApiOperation,
        message: String,
        raw: Value,
        version_id: Option<PackageVersionId>,
    },

    /// A spawned deletion ended without producing an outcome
    #[error("delete task for {version_id} did not complete: {message}")]
    Task {
        version_id: PackageVersionId,
        message: String,
    },

    /// Client construction errors, raised before any request is sent
    #[error("Invalid configuration: {message}")]
    Configuration {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
}

/// The API call that produced a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiOperation {
    RateLimitQuery,
    DeleteVersionMutation,
}

impl std::fmt::Display for ApiOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiOperation::RateLimitQuery => write!(f, "rate limit query"),
            ApiOperation::DeleteVersionMutation => write!(f, "delete version mutation"),
        }
    }
}

impl ApiOperation {
    /// Build the caller-facing message for a failed call.
    ///
    /// The first structured error entry wins; without one each call site
    /// has its own fixed fallback.
    pub fn failure_message(&self, failure: &TransportFailure) -> String {
        let first = failure.first_message();
        match self {
            ApiOperation::RateLimitQuery => first.unwrap_or(PROBE_FALLBACK).to_string(),
            ApiOperation::DeleteVersionMutation => format!(
                "{} {}",
                DELETE_FAILED_LABEL,
                first.unwrap_or(DELETE_FALLBACK)
            ),
        }
    }
}

/// One entry of a GraphQL `errors` array
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphQlErrorEntry {
    pub message: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// Failure reported by a [`GraphQlTransport`](crate::deleter::api::GraphQlTransport)
///
/// `errors` is empty when the failure carried no structured entries
/// (network errors, empty bodies, unexpected shapes).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransportFailure {
    pub errors: Vec<GraphQlErrorEntry>,
    pub raw: Value,
}

impl TransportFailure {
    /// Failure without structured entries
    pub fn unstructured(raw: Value) -> Self {
        Self { errors: Vec::new(), raw }
    }

    /// Build a failure from a response body, picking up its `errors` array if present
    pub fn from_payload(raw: Value) -> Self {
        let errors = raw
            .get("errors")
            .and_then(|errors| serde_json::from_value::<Vec<GraphQlErrorEntry>>(errors.clone()).ok())
            .unwrap_or_default();
        Self { errors, raw }
    }

    pub fn first_message(&self) -> Option<&str> {
        self.errors.first().map(|entry| entry.message.as_str())
    }
}

pub type Result<T> = std::result::Result<T, DeleteError>;

impl DeleteError {
    /// Normalize a transport failure for the given call site
    pub fn from_transport(
        operation: ApiOperation,
        failure: TransportFailure,
        version_id: Option<PackageVersionId>,
    ) -> Self {
        DeleteError::Transport {
            operation,
            message: operation.failure_message(&failure),
            raw: failure.raw,
            version_id,
        }
    }

    pub(crate) fn task(version_id: PackageVersionId, message: impl Into<String>) -> Self {
        DeleteError::Task {
            version_id,
            message: message.into(),
        }
    }

    /// Original payload for transport failures
    pub fn raw(&self) -> Option<&Value> {
        match self {
            DeleteError::Transport { raw, .. } => Some(raw),
            DeleteError::Task { .. } | DeleteError::Configuration { .. } => None,
        }
    }

    /// Version the failed deletion targeted, if any
    pub fn version_id(&self) -> Option<&PackageVersionId> {
        match self {
            DeleteError::Transport { version_id, .. } => version_id.as_ref(),
            DeleteError::Task { version_id, .. } => Some(version_id),
            DeleteError::Configuration { .. } => None,
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            DeleteError::Transport { operation: ApiOperation::RateLimitQuery, .. } => "rate_limit_query",
            DeleteError::Transport { operation: ApiOperation::DeleteVersionMutation, .. } => "delete_version_mutation",
            DeleteError::Task { .. } => "task",
            DeleteError::Configuration { .. } => "configuration",
        }
    }

    /// Get user-friendly suggestion for resolving the error
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            DeleteError::Configuration { suggestion, .. } => suggestion.as_deref(),
            DeleteError::Task { .. } => Some("The deletion may still have reached the registry; check the version before retrying"),
            DeleteError::Transport { .. } => None,
        }
    }

    /// Create a detailed error report for debugging
    pub fn detailed_report(&self) -> String {
        let mut report = format!("Error: {}\n", self);
        report.push_str(&format!("Category: {}\n", self.category()));

        if let Some(version_id) = self.version_id() {
            report.push_str(&format!("Package version: {}\n", version_id));
        }

        if let Some(suggestion) = self.suggestion() {
            report.push_str(&format!("Suggestion: {}\n", suggestion));
        }

        if let Some(raw) = self.raw().filter(|raw| !raw.is_null()) {
            report.push_str(&format!("Payload: {}\n", raw));
        }

        report
    }
}

impl From<url::ParseError> for DeleteError {
    fn from(error: url::ParseError) -> Self {
        let suggestion = match error {
            url::ParseError::EmptyHost => "URL must have a valid hostname",
            url::ParseError::InvalidPort => "Port number must be between 1 and 65535",
            url::ParseError::RelativeUrlWithoutBase => "URL must be absolute (include http:// or https://)",
            _ => "Check URL format and try again",
        }.to_string();

        DeleteError::Configuration {
            message: format!("invalid GraphQL endpoint: {}", error),
            field: Some("endpoint".to_string()),
            suggestion: Some(suggestion),
        }
    }
}
