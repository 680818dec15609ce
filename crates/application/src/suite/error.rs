//! Check failure type

use assay_domain::ValidationError;
use thiserror::Error;

use crate::error::ApplicationError;

/// Why a check failed.
#[derive(Debug, Error)]
pub enum SuiteError {
    /// A response expectation did not hold.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request could not be sent.
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Any other failed expectation.
    #[error("{0}")]
    Failed(String),
}

impl SuiteError {
    /// Creates a free-form failure.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

/// Result of one check.
pub type CheckResult = Result<(), SuiteError>;
