//! Response validation failures.
//!
//! Every variant names the path, field or code that diverged from the
//! expectation, so a failed check is attributable from its message alone.

use serde_json::Value;
use thiserror::Error;

/// A failed response expectation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The status code differs from the expected one.
    #[error("Status code mismatch. Expected: {expected}, Actual: {actual}")]
    StatusMismatch {
        /// Expected status code.
        expected: u16,
        /// Status code received.
        actual: u16,
    },

    /// A field is absent or null.
    #[error("Field '{path}' should not be null")]
    FieldNull {
        /// Path expression of the field.
        path: String,
    },

    /// A field holds a different value.
    #[error("Field '{path}' mismatch. Expected: {expected}, Actual: {actual}")]
    FieldMismatch {
        /// Path expression of the field.
        path: String,
        /// Expected value.
        expected: Value,
        /// Value found, `null` when absent.
        actual: Value,
    },

    /// A field is not greater than the given bound.
    #[error("Field '{path}' value {actual} should be greater than {min}")]
    NotGreaterThan {
        /// Path expression of the field.
        path: String,
        /// Exclusive lower bound.
        min: i64,
        /// Value found.
        actual: Value,
    },

    /// A list is absent, null, or not a list.
    #[error("List '{path}' should not be null")]
    ListNull {
        /// Path expression of the list.
        path: String,
    },

    /// A list has no elements.
    #[error("List '{path}' should not be empty")]
    ListEmpty {
        /// Path expression of the list.
        path: String,
    },

    /// A list has the wrong number of elements.
    #[error("List size mismatch for '{path}'. Expected: {expected}, Actual: {actual}")]
    ListSizeMismatch {
        /// Path expression of the list.
        path: String,
        /// Expected element count.
        expected: usize,
        /// Element count found.
        actual: usize,
    },

    /// The response took too long.
    #[error("Response time {actual_ms}ms exceeds maximum {max_ms}ms")]
    TooSlow {
        /// Elapsed time in milliseconds.
        actual_ms: u64,
        /// Exclusive upper bound in milliseconds.
        max_ms: u64,
    },

    /// The content type does not contain the expected text.
    #[error("Content-Type mismatch. Expected to contain: {expected}, Actual: {actual}")]
    ContentTypeMismatch {
        /// Expected substring.
        expected: String,
        /// Content type received, empty when absent.
        actual: String,
    },

    /// A GraphQL response carries errors.
    #[error("GraphQL response should not contain errors, but got: {errors}")]
    GraphQlErrors {
        /// The top-level `errors` payload.
        errors: Value,
    },

    /// A GraphQL `data` sub-field is absent or null.
    #[error("GraphQL data field '{field}' should not be null")]
    GraphQlDataMissing {
        /// Name of the sub-field under `data`.
        field: String,
    },
}

/// Result type alias for validation steps.
pub type ValidationResult<T> = Result<T, ValidationError>;
