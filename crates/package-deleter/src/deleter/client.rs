//! Main entry point for the deletion client
//!
//! The call chain flows as follows:
//!
//! User Code
//! ↓
//! PackageDeleter (this file)
//! ↓
//! batch:: / delete:: / rate_limit:: functions
//! ↓
//! GraphQlTransport (api/graphql.rs)
//! ↓
//! Core types (core/*)

use futures::stream::BoxStream;
use std::sync::Arc;

use crate::deleter::{
    api::{GraphQlTransport, ReqwestTransport},
    config::DeleteConfig,
    core::{Credentials, PackageVersionId, RateLimitStatus, Result},
    counter::DeletionCounter,
};

/// Registry client for rate-limit checks and package version deletion
///
/// Cloning is cheap and clones share the transport, the configuration and
/// the deletion counter.
#[derive(Clone)]
pub struct PackageDeleter {
    transport: Arc<dyn GraphQlTransport>,
    config: Arc<DeleteConfig>,
    counter: Arc<DeletionCounter>,
}

impl PackageDeleter {
    /// Create a deleter talking to `config.endpoint` over HTTPS
    pub fn new(config: DeleteConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(Arc::new(transport), config))
    }

    /// Create a deleter with a custom transport
    pub fn with_transport(transport: Arc<dyn GraphQlTransport>, config: DeleteConfig) -> Self {
        Self {
            transport,
            config: Arc::new(config),
            counter: Arc::new(DeletionCounter::default()),
        }
    }

    /// Use an existing counter, e.g. to share the throttle count between deleters
    pub fn with_counter(mut self, counter: Arc<DeletionCounter>) -> Self {
        self.counter = counter;
        self
    }

    pub fn config(&self) -> &DeleteConfig {
        &self.config
    }

    /// Deletion attempts and outcomes so far
    pub fn counter(&self) -> &Arc<DeletionCounter> {
        &self.counter
    }

    /// Query the caller's identity and rate-limit counters
    pub async fn get_rate_limit(&self, credentials: &Credentials) -> Result<RateLimitStatus> {
        crate::deleter::rate_limit::get_rate_limit(self.transport.as_ref(), credentials).await
    }

    /// Delete a single package version
    pub async fn delete_package_version(
        &self,
        package_version_id: &PackageVersionId,
        credentials: &Credentials,
    ) -> Result<bool> {
        crate::deleter::delete::delete_package_version(
            &self.transport,
            &self.config,
            &self.counter,
            package_version_id,
            credentials,
        )
        .await
    }

    /// Delete many package versions concurrently
    ///
    /// Every deletion starts right away; dropping the stream does not cancel
    /// them. Outcomes arrive in completion order. See
    /// [`batch::delete_package_versions`](crate::deleter::batch::delete_package_versions).
    pub fn delete_package_versions<I, T>(
        &self,
        package_version_ids: I,
        credentials: &Credentials,
    ) -> BoxStream<'static, Result<bool>>
    where
        I: IntoIterator<Item = T>,
        T: Into<PackageVersionId>,
    {
        crate::deleter::batch::delete_package_versions(
            Arc::clone(&self.transport),
            Arc::clone(&self.config),
            Arc::clone(&self.counter),
            package_version_ids.into_iter().map(Into::into).collect(),
            credentials.clone(),
        )
    }
}

impl std::fmt::Debug for PackageDeleter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PackageDeleter")
            .field("config", &self.config)
            .field("counter", &self.counter.snapshot())
            .finish()
    }
}
