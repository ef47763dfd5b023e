//! Core types for the deletion client
//!
//! Credentials, identifiers, API response shapes and the error taxonomy
//! used by every other module.

pub mod error;
pub mod types;

pub use error::{ApiOperation, DeleteError, GraphQlErrorEntry, Result, TransportFailure};
pub use types::{
    Credentials, DeletePackageVersionPayload, DeletePackageVersionResponse, PackageVersionId,
    RateLimit, RateLimitStatus, TOKEN_ENV_VAR, Viewer,
};
