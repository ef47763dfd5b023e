//! Single-version deletion

use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::deleter::{
    api::{GraphQlRequest, GraphQlTransport},
    config::{DeleteConfig, ThrottleMode},
    core::{
        ApiOperation, Credentials, DeletePackageVersionResponse, DeleteError, PackageVersionId,
        Result, TransportFailure,
    },
    counter::DeletionCounter,
    rate_limit::spawn_rate_limit_probe,
};

/// Delete one package version and return the mutation's success flag.
///
/// Sends exactly one mutation and bumps the attempt counter exactly once,
/// whatever the outcome. A background rate-limit probe is fired first when
/// enabled; it is never awaited, and it is skipped outside a Tokio runtime.
///
/// # Panics
///
/// Reaching the throttle point outside a Tokio runtime panics, since the
/// throttle delay is built on the runtime's timer.
pub async fn delete_package_version(
    transport: &Arc<dyn GraphQlTransport>,
    config: &DeleteConfig,
    counter: &DeletionCounter,
    package_version_id: &PackageVersionId,
    credentials: &Credentials,
) -> Result<bool> {
    if config.probe_rate_limit {
        spawn_rate_limit_probe(Arc::clone(transport), credentials.clone());
    }

    let attempted = counter.record_attempt();
    if config.is_throttle_point(attempted) {
        warn!("reaching rate limit");
        throttle(config).await;
    }

    debug!("Deleting package version {}", package_version_id);

    let request = GraphQlRequest::delete_package_version(package_version_id);
    let data = match transport.execute(credentials, &request).await {
        Ok(data) => data,
        Err(failure) => {
            counter.record_failure();
            return Err(DeleteError::from_transport(
                ApiOperation::DeleteVersionMutation,
                failure,
                Some(package_version_id.clone()),
            ));
        }
    };

    let response = match DeletePackageVersionResponse::deserialize(&data) {
        Ok(response) => response,
        Err(e) => {
            debug!("Unexpected delete response shape for {}: {}", package_version_id, e);
            counter.record_failure();
            return Err(DeleteError::from_transport(
                ApiOperation::DeleteVersionMutation,
                TransportFailure::unstructured(data.clone()),
                Some(package_version_id.clone()),
            ));
        }
    };

    let success = response.delete_package_version.success;
    counter.record_outcome(success);
    Ok(success)
}

async fn throttle(config: &DeleteConfig) {
    let delay = tokio::time::sleep(config.throttle_delay);
    match config.throttle_mode {
        // Created but never polled, so no time passes.
        ThrottleMode::Inert => drop(delay),
        ThrottleMode::Pause => delay.await,
    }
}
