//! Constants for the demo services under test

pub mod api;
pub mod graphql;
