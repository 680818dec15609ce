//! REST and GraphQL clients over the [`HttpClient`](crate::ports::HttpClient) port

mod graphql;
mod rest;

#[cfg(test)]
pub(crate) mod mock;

pub use graphql::{GraphQlClient, has_data, has_errors};
pub use rest::RestApiClient;
