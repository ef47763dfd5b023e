//! GraphQL transport for the package registry
//!
//! This module handles the wire side of every registry call:
//! - The query and mutation documents
//! - Authenticated POST requests carrying the deletion preview header
//! - Classification of responses into `data` or a [`TransportFailure`]

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde_json::{Value, json};
use tracing::debug;

use crate::deleter::config::DeleteConfig;
use crate::deleter::core::{
    ApiOperation, Credentials, DeleteError, PackageVersionId, Result, TransportFailure,
};

const RATE_LIMIT_QUERY: &str = r#"
query {
  viewer {
    login
  }
  rateLimit {
    limit
    cost
    remaining
    resetAt
    node
  }
}"#;

const DELETE_PACKAGE_VERSION_MUTATION: &str = r#"
mutation deletePackageVersion($packageVersionId: String!) {
  deletePackageVersion(input: {packageVersionId: $packageVersionId}) {
    success
  }
}"#;

/// A single GraphQL document plus its variables
#[derive(Debug, Clone, PartialEq)]
pub struct GraphQlRequest {
    pub operation: ApiOperation,
    pub query: &'static str,
    pub variables: Value,
}

impl GraphQlRequest {
    /// Viewer identity and rate-limit counters
    pub fn rate_limit() -> Self {
        Self {
            operation: ApiOperation::RateLimitQuery,
            query: RATE_LIMIT_QUERY,
            variables: json!({}),
        }
    }

    /// Deletion of one package version
    pub fn delete_package_version(package_version_id: &PackageVersionId) -> Self {
        Self {
            operation: ApiOperation::DeleteVersionMutation,
            query: DELETE_PACKAGE_VERSION_MUTATION,
            variables: json!({ "packageVersionId": package_version_id }),
        }
    }

    /// Target version of a deletion request
    pub fn package_version_id(&self) -> Option<&str> {
        self.variables.get("packageVersionId").and_then(Value::as_str)
    }

    /// JSON body as posted to the endpoint
    pub fn body(&self) -> Value {
        json!({ "query": self.query, "variables": self.variables })
    }
}

/// Executes GraphQL requests against the registry
///
/// Implementations return the response's `data` object on success. Any
/// failure is reported as a [`TransportFailure`] carrying whatever
/// structured error entries the response had.
#[async_trait]
pub trait GraphQlTransport: Send + Sync {
    async fn execute(
        &self,
        credentials: &Credentials,
        request: &GraphQlRequest,
    ) -> std::result::Result<Value, TransportFailure>;
}

/// Transport over HTTPS using reqwest
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    endpoint: url::Url,
    preview_accept: String,
}

impl ReqwestTransport {
    /// Create a transport from configuration
    pub fn new(config: &DeleteConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(|e| DeleteError::Configuration {
                message: format!("Failed to create HTTP client: {}", e),
                field: None,
                suggestion: None,
            })?;

        Self::with_client(client, config)
    }

    /// Create a transport around an existing client
    pub fn with_client(client: Client, config: &DeleteConfig) -> Result<Self> {
        let endpoint = config.validate()?;

        Ok(Self {
            client,
            endpoint,
            preview_accept: config.preview_accept.clone(),
        })
    }
}

#[async_trait]
impl GraphQlTransport for ReqwestTransport {
    async fn execute(
        &self,
        credentials: &Credentials,
        request: &GraphQlRequest,
    ) -> std::result::Result<Value, TransportFailure> {
        debug!("GraphQL {} request to {}", request.operation, self.endpoint);

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(ACCEPT, self.preview_accept.as_str())
            .header(AUTHORIZATION, credentials.authorization_header())
            .json(&request.body())
            .send()
            .await
            .map_err(|e| network_failure(request.operation, e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| network_failure(request.operation, e))?;

        debug!("GraphQL {} response ({}): {}", request.operation, status, text);

        let payload: Value = match serde_json::from_str(&text) {
            Ok(payload) => payload,
            Err(_) => {
                return Err(TransportFailure::unstructured(json!({
                    "status": status.as_u16(),
                    "body": text,
                })));
            }
        };

        interpret_payload(status.is_success(), payload)
    }
}

fn network_failure(operation: ApiOperation, error: reqwest::Error) -> TransportFailure {
    debug!("GraphQL {} transport error: {}", operation, error);
    TransportFailure::unstructured(json!({ "message": error.to_string() }))
}

/// Split a decoded response body into `data` or a failure.
///
/// A non-empty `errors` array is a failure regardless of HTTP status, as is
/// a non-success status or a missing `data` object.
pub(crate) fn interpret_payload(
    status_ok: bool,
    payload: Value,
) -> std::result::Result<Value, TransportFailure> {
    let failure = TransportFailure::from_payload(payload);
    if !status_ok || !failure.errors.is_empty() {
        return Err(failure);
    }

    match failure.raw.get("data") {
        Some(data) if !data.is_null() => Ok(data.clone()),
        _ => Err(failure),
    }
}
