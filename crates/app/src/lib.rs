//! Assay - API test harness
//!
//! Command line surface and the REST and GraphQL check suites run by the
//! `assay` binary.

pub mod cli;
pub mod suites;

pub use cli::{Cli, Target};
