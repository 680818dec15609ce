//! Assay Application - Configuration resolution, clients and suites
//!
//! This crate holds the harness logic that sits between the domain types
//! and the concrete adapters: resolving the layered configuration, issuing
//! REST and GraphQL requests through the [`ports::HttpClient`] port,
//! building test data and running named checks into a report.

pub mod clients;
pub mod config;
pub mod error;
pub mod ports;
pub mod suite;
pub mod test_data;

pub use clients::{GraphQlClient, RestApiClient};
pub use config::{ConfigResolver, SharedConfig};
pub use error::{ApplicationError, ApplicationResult};
