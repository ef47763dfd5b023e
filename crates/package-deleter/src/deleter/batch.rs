//! Batch deletion as a merged stream of per-version outcomes

use futures::future;
use futures::stream::{self, BoxStream, FuturesUnordered, StreamExt};
use std::sync::Arc;
use tokio::runtime::Handle;
use tracing::{debug, info, warn};

use crate::deleter::{
    api::GraphQlTransport,
    config::DeleteConfig,
    core::{Credentials, DeleteError, PackageVersionId, Result},
    counter::DeletionCounter,
    delete::delete_package_version,
};

/// Delete every version concurrently and yield outcomes as they complete.
///
/// An empty input yields a single `Ok(true)` without touching the network.
/// Each deletion is spawned as its own task when this function is called,
/// so all of them are in flight before the stream is first polled. A
/// failure shows up only as the `Err` element for its own version.
///
/// Dropping the stream early detaches the remaining tasks; they still run
/// to completion, log their outcome and update the counter.
///
/// Outside a Tokio runtime nothing is sent and every version yields a
/// [`DeleteError::Task`].
pub fn delete_package_versions(
    transport: Arc<dyn GraphQlTransport>,
    config: Arc<DeleteConfig>,
    counter: Arc<DeletionCounter>,
    package_version_ids: Vec<PackageVersionId>,
    credentials: Credentials,
) -> BoxStream<'static, Result<bool>> {
    if package_version_ids.is_empty() {
        debug!("No package versions to delete");
        return stream::once(future::ready(Ok(true))).boxed();
    }

    let runtime = match Handle::try_current() {
        Ok(runtime) => runtime,
        Err(e) => {
            warn!("Cannot start batch delete without a Tokio runtime: {}", e);
            let message = e.to_string();
            return stream::iter(package_version_ids)
                .map(move |package_version_id| {
                    Err::<bool, _>(DeleteError::task(package_version_id, message.clone()))
                })
                .boxed();
        }
    };

    debug!("Starting batch delete of {} package versions", package_version_ids.len());

    package_version_ids
        .into_iter()
        .map(|package_version_id| {
            let transport = Arc::clone(&transport);
            let config = Arc::clone(&config);
            let counter = Arc::clone(&counter);
            let credentials = credentials.clone();
            let task_id = package_version_id.clone();

            let task = runtime.spawn(async move {
                let result = delete_package_version(
                    &transport,
                    &config,
                    &counter,
                    &task_id,
                    &credentials,
                )
                .await;
                log_outcome(&task_id, &counter, &result);
                result
            });

            async move {
                match task.await {
                    Ok(result) => result,
                    Err(e) => Err(DeleteError::task(package_version_id, e.to_string())),
                }
            }
        })
        .collect::<FuturesUnordered<_>>()
        .boxed()
}

fn log_outcome(package_version_id: &PackageVersionId, counter: &DeletionCounter, result: &Result<bool>) {
    info!("versions deleted so far: {}", counter.attempted());
    match result {
        Ok(true) => info!("version with id: {}, deleted", package_version_id),
        Ok(false) => info!("version with id: {}, not deleted", package_version_id),
        Err(e) => warn!("version with id: {}, {}", package_version_id, e),
    }
}
