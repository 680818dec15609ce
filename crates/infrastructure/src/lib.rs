//! Assay Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports defined in the
//! application layer, plus response validation, fixture loading and
//! logging setup.

pub mod adapters;
pub mod fixtures;
pub mod logging;
pub mod testing;

pub use adapters::{FileResourceLoader, ProcessOverrides, ReqwestHttpClient, SystemClock};
pub use fixtures::load_test_data;
pub use testing::ResponseValidator;
