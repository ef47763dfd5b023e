//! Registry API transport

pub mod graphql;

pub use graphql::{GraphQlRequest, GraphQlTransport, ReqwestTransport};
