//! Check suites against the demo services

pub mod graphql;
pub mod rest;

use assay_application::suite::{CheckResult, SuiteError};

/// Fails the check with `message` unless `condition` holds.
fn ensure(condition: bool, message: impl Into<String>) -> CheckResult {
    if condition {
        Ok(())
    } else {
        Err(SuiteError::failed(message))
    }
}
