//! Deleter module
//!
//! This module contains the registry client: core types, configuration,
//! the GraphQL transport, and the probe / single / batch operations.

pub mod api;
pub mod batch;
pub mod client;
pub mod config;
pub mod core;
pub mod counter;
pub mod delete;
pub mod rate_limit;

// Re-export main types for convenience
pub use client::PackageDeleter;
pub use config::{DeleteConfig, ThrottleMode, DEFAULT_ENDPOINT, PACKAGE_DELETES_PREVIEW};
pub use self::core::{
    ApiOperation, Credentials, DeleteError, GraphQlErrorEntry, PackageVersionId, RateLimit,
    RateLimitStatus, Result, TransportFailure, Viewer,
};
pub use counter::{DeletionCounter, DeletionCounterSnapshot};
pub use api::{GraphQlRequest, GraphQlTransport, ReqwestTransport};
