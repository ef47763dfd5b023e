//! Rate-limit probe
//!
//! One read-only query for the viewer login and the current rate-limit
//! counters. Safe to call repeatedly; it never touches the deletion counter.

use serde::Deserialize;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::deleter::api::{GraphQlRequest, GraphQlTransport};
use crate::deleter::core::{
    ApiOperation, Credentials, DeleteError, RateLimitStatus, Result, TransportFailure,
};

/// Query the viewer identity and current rate-limit counters
pub async fn get_rate_limit(
    transport: &dyn GraphQlTransport,
    credentials: &Credentials,
) -> Result<RateLimitStatus> {
    let request = GraphQlRequest::rate_limit();

    let data = transport
        .execute(credentials, &request)
        .await
        .map_err(|failure| DeleteError::from_transport(ApiOperation::RateLimitQuery, failure, None))?;

    RateLimitStatus::deserialize(&data).map_err(|e| {
        debug!("Unexpected rate limit response shape: {}", e);
        DeleteError::from_transport(
            ApiOperation::RateLimitQuery,
            TransportFailure::unstructured(data.clone()),
            None,
        )
    })
}

/// Run the probe as a detached task that only logs its result.
///
/// The caller is not expected to await the handle; a failed probe is
/// logged at debug level and goes nowhere else. Outside a Tokio runtime
/// nothing is spawned and `None` is returned.
pub fn spawn_rate_limit_probe(
    transport: Arc<dyn GraphQlTransport>,
    credentials: Credentials,
) -> Option<JoinHandle<()>> {
    let handle = match Handle::try_current() {
        Ok(handle) => handle,
        Err(e) => {
            debug!("Skipping background rate limit check: {}", e);
            return None;
        }
    };

    Some(handle.spawn(async move {
        match get_rate_limit(transport.as_ref(), &credentials).await {
            Ok(status) => info!("{}", status.format_status()),
            Err(e) => debug!("Background rate limit check failed: {}", e),
        }
    }))
}
