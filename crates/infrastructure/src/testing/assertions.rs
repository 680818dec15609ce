//! Assertion primitives over a [`ResponseSpec`].
//!
//! Each function logs what it checks, then returns the first divergence as
//! a [`ValidationError`]. [`ResponseValidator`](super::ResponseValidator)
//! chains them.

use assay_domain::constants::graphql::{DATA_FIELD, ERRORS_FIELD};
use assay_domain::{ResponseSpec, ValidationError, ValidationResult};
use serde_json::Value;
use tracing::info;

/// The status code equals `expected`.
///
/// # Errors
///
/// [`ValidationError::StatusMismatch`] otherwise.
pub fn status_code(response: &ResponseSpec, expected: u16) -> ValidationResult<()> {
    let actual = response.status;
    info!("Asserting status code - Expected: {expected}, Actual: {actual}");
    if actual == expected {
        Ok(())
    } else {
        Err(ValidationError::StatusMismatch { expected, actual })
    }
}

/// The value at `path` is present and not null.
///
/// # Errors
///
/// [`ValidationError::FieldNull`] otherwise.
pub fn field_not_null(response: &ResponseSpec, path: &str) -> ValidationResult<()> {
    info!("Asserting field '{path}' is not null");
    present(response, path)
        .map(drop)
        .ok_or_else(|| ValidationError::FieldNull {
            path: path.to_string(),
        })
}

/// The value at `path` equals `expected`.
///
/// # Errors
///
/// [`ValidationError::FieldMismatch`] otherwise; an absent field reads as
/// `null`.
pub fn field_equals(response: &ResponseSpec, path: &str, expected: &Value) -> ValidationResult<()> {
    let actual = response.query(path).unwrap_or(Value::Null);
    info!("Asserting field '{path}' - Expected: {expected}, Actual: {actual}");
    if actual == *expected {
        Ok(())
    } else {
        Err(ValidationError::FieldMismatch {
            path: path.to_string(),
            expected: expected.clone(),
            actual,
        })
    }
}

/// The integer at `path` is strictly greater than `min`.
///
/// # Errors
///
/// [`ValidationError::FieldNull`] when absent, [`ValidationError::NotGreaterThan`]
/// when not an integer or not large enough.
pub fn field_greater_than(response: &ResponseSpec, path: &str, min: i64) -> ValidationResult<()> {
    let actual = present(response, path).ok_or_else(|| ValidationError::FieldNull {
        path: path.to_string(),
    })?;
    info!("Asserting field '{path}' > {min} - Actual: {actual}");
    if actual.as_i64().is_some_and(|value| value > min) {
        Ok(())
    } else {
        Err(ValidationError::NotGreaterThan {
            path: path.to_string(),
            min,
            actual,
        })
    }
}

/// The list at `path` exists and has at least one element.
///
/// # Errors
///
/// [`ValidationError::ListNull`] when absent or not a list,
/// [`ValidationError::ListEmpty`] when empty.
pub fn list_not_empty(response: &ResponseSpec, path: &str) -> ValidationResult<()> {
    info!("Asserting list '{path}' is not empty");
    if list_len(response, path)? == 0 {
        Err(ValidationError::ListEmpty {
            path: path.to_string(),
        })
    } else {
        Ok(())
    }
}

/// The list at `path` has exactly `expected` elements.
///
/// # Errors
///
/// [`ValidationError::ListNull`] when absent or not a list,
/// [`ValidationError::ListSizeMismatch`] on a different length.
pub fn list_size(response: &ResponseSpec, path: &str, expected: usize) -> ValidationResult<()> {
    let actual = list_len(response, path)?;
    info!("Asserting list '{path}' size - Expected: {expected}, Actual: {actual}");
    if actual == expected {
        Ok(())
    } else {
        Err(ValidationError::ListSizeMismatch {
            path: path.to_string(),
            expected,
            actual,
        })
    }
}

/// The response arrived in strictly less than `max_ms`.
///
/// # Errors
///
/// [`ValidationError::TooSlow`] otherwise.
pub fn response_time_below(response: &ResponseSpec, max_ms: u64) -> ValidationResult<()> {
    let actual_ms = response.elapsed_ms();
    info!("Asserting response time below {max_ms}ms - Actual: {actual_ms}ms");
    if actual_ms < max_ms {
        Ok(())
    } else {
        Err(ValidationError::TooSlow { actual_ms, max_ms })
    }
}

/// The `Content-Type` header contains `expected`.
///
/// # Errors
///
/// [`ValidationError::ContentTypeMismatch`] otherwise; a missing header
/// reads as the empty string.
pub fn content_type(response: &ResponseSpec, expected: &str) -> ValidationResult<()> {
    let actual = response.content_type();
    info!("Asserting content type - Expected: {expected}, Actual: {actual}");
    if actual.contains(expected) {
        Ok(())
    } else {
        Err(ValidationError::ContentTypeMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        })
    }
}

/// The top-level GraphQL `errors` entry is absent or null.
///
/// # Errors
///
/// [`ValidationError::GraphQlErrors`] carrying the payload otherwise.
pub fn graphql_no_errors(response: &ResponseSpec) -> ValidationResult<()> {
    info!("Asserting GraphQL response has no errors");
    match response.body_json().and_then(|json| json.get(ERRORS_FIELD)) {
        Some(errors) if !errors.is_null() => Err(ValidationError::GraphQlErrors {
            errors: errors.clone(),
        }),
        _ => Ok(()),
    }
}

/// `data.<field>` is present and not null.
///
/// # Errors
///
/// [`ValidationError::GraphQlDataMissing`] otherwise.
pub fn graphql_has_data(response: &ResponseSpec, field: &str) -> ValidationResult<()> {
    info!("Asserting GraphQL data field '{field}' is not null");
    let data = response
        .body_json()
        .and_then(|json| json.get(DATA_FIELD))
        .and_then(|data| data.get(field));
    match data {
        Some(value) if !value.is_null() => Ok(()),
        _ => Err(ValidationError::GraphQlDataMissing {
            field: field.to_string(),
        }),
    }
}

fn present(response: &ResponseSpec, path: &str) -> Option<Value> {
    response.query(path).filter(|value| !value.is_null())
}

fn list_len(response: &ResponseSpec, path: &str) -> ValidationResult<usize> {
    match response.query(path) {
        Some(Value::Array(items)) => Ok(items.len()),
        _ => Err(ValidationError::ListNull {
            path: path.to_string(),
        }),
    }
}
