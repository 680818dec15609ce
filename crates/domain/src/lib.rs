//! Assay Domain - Core harness types
//!
//! This crate defines the domain model for the Assay API test harness:
//! the effective configuration, request and response shapes, JSON path
//! queries over response bodies, validation errors and the API models of
//! the demo services under test.
//! All types here are pure Rust with no I/O dependencies.

pub mod config;
pub mod constants;
pub mod error;
pub mod json_path;
pub mod models;
pub mod request;
pub mod response;
pub mod testing;

pub use config::{EffectiveConfig, Environment, OverridePolicy, PropertySource};
pub use error::{DomainError, DomainResult};
pub use json_path::JsonPath;
pub use request::{Header, HttpMethod, QueryParam, RequestBuilder, RequestSpec};
pub use response::{ResponseSpec, StatusCode};
pub use testing::{ValidationError, ValidationResult};
