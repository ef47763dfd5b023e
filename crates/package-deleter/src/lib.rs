//! Package Deleter Library
//!
//! This library is a thin client for a package registry's GraphQL API. It
//! checks rate-limit status and deletes package versions, one at a time or
//! in bulk.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use futures::StreamExt;
//! use package_deleter::{Credentials, DeleteConfig, PackageDeleter};
//!
//! # async fn example() -> package_deleter::Result<()> {
//! let deleter = PackageDeleter::new(DeleteConfig::default())?;
//! let credentials = Credentials::from_env()?;
//!
//! // Who am I and how much quota is left?
//! let status = deleter.get_rate_limit(&credentials).await?;
//! println!("{}", status.format_status());
//!
//! // Delete a batch; outcomes arrive as each mutation completes
//! let mut outcomes = deleter.delete_package_versions(["PV_one", "PV_two"], &credentials);
//! while let Some(outcome) = outcomes.next().await {
//!     match outcome {
//!         Ok(deleted) => println!("deleted: {}", deleted),
//!         Err(e) => println!("failed: {}", e),
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **Rate-limit probe**: viewer login plus limit, cost, remaining quota and reset time
//! - **Single delete**: one mutation per call, with a background probe logged on the side
//! - **Batch delete**: every version in flight at once, merged into one stream
//! - **Throttle heuristic**: a warning when the attempt counter hits its threshold
//! - **Structured errors**: normalized messages that keep the raw API payload

pub mod deleter;

// Re-export commonly used types for convenience
pub use deleter::{
    ApiOperation, Credentials, DeleteConfig, DeleteError, DeletionCounter, GraphQlTransport,
    PackageDeleter, PackageVersionId, RateLimitStatus, Result, ThrottleMode,
};
