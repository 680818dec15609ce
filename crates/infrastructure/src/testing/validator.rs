//! Chainable response expectations

use assay_domain::{ResponseSpec, ValidationResult};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

use super::assertions;

/// Fluent wrapper over the assertion primitives.
///
/// Each assertion consumes the validator and hands it back on success, so
/// a chain reads `validator.status_code(200)?.field_not_null("id")?`. The
/// first failure ends the chain. Extractions never fail.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use assay_domain::ResponseSpec;
/// use assay_infrastructure::testing::ResponseValidator;
/// use serde_json::json;
///
/// let response = ResponseSpec::json(200, &json!({"id": 5, "title": "T"}), Duration::from_millis(120));
/// let title = ResponseValidator::of(&response)
///     .status_code(200)?
///     .field_equals("title", "T")?
///     .response_time_below(5000)?
///     .extract_string("title");
/// assert_eq!(title.as_deref(), Some("T"));
/// # Ok::<(), assay_domain::ValidationError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ResponseValidator<'a> {
    response: &'a ResponseSpec,
}

impl<'a> ResponseValidator<'a> {
    /// Starts a chain over `response`.
    #[must_use]
    pub const fn of(response: &'a ResponseSpec) -> Self {
        Self { response }
    }

    /// Expects the status code to equal `expected`.
    ///
    /// # Errors
    ///
    /// Fails with the expected and actual codes.
    pub fn status_code(self, expected: u16) -> ValidationResult<Self> {
        assertions::status_code(self.response, expected).map(|()| self)
    }

    /// Expects a present, non-null value at `path`.
    ///
    /// # Errors
    ///
    /// Fails naming the path.
    pub fn field_not_null(self, path: &str) -> ValidationResult<Self> {
        assertions::field_not_null(self.response, path).map(|()| self)
    }

    /// Expects the value at `path` to equal `expected`.
    ///
    /// # Errors
    ///
    /// Fails with the expected and actual values.
    pub fn field_equals(self, path: &str, expected: impl Into<Value>) -> ValidationResult<Self> {
        assertions::field_equals(self.response, path, &expected.into()).map(|()| self)
    }

    /// Expects an integer greater than `min` at `path`.
    ///
    /// # Errors
    ///
    /// Fails when the value is absent, not an integer or too small.
    pub fn field_greater_than(self, path: &str, min: i64) -> ValidationResult<Self> {
        assertions::field_greater_than(self.response, path, min).map(|()| self)
    }

    /// Expects a non-empty list at `path`.
    ///
    /// # Errors
    ///
    /// Distinguishes a missing list from an empty one.
    pub fn list_not_empty(self, path: &str) -> ValidationResult<Self> {
        assertions::list_not_empty(self.response, path).map(|()| self)
    }

    /// Expects a list of exactly `expected` elements at `path`.
    ///
    /// # Errors
    ///
    /// Fails when the list is missing or has another length.
    pub fn list_size(self, path: &str, expected: usize) -> ValidationResult<Self> {
        assertions::list_size(self.response, path, expected).map(|()| self)
    }

    /// Expects the response to have taken strictly less than `max_ms`.
    ///
    /// # Errors
    ///
    /// Fails with the elapsed time and the bound.
    pub fn response_time_below(self, max_ms: u64) -> ValidationResult<Self> {
        assertions::response_time_below(self.response, max_ms).map(|()| self)
    }

    /// Expects the `Content-Type` header to contain `expected`.
    ///
    /// # Errors
    ///
    /// Fails with the expected text and the actual header.
    pub fn content_type(self, expected: &str) -> ValidationResult<Self> {
        assertions::content_type(self.response, expected).map(|()| self)
    }

    /// Expects no GraphQL `errors`.
    ///
    /// # Errors
    ///
    /// Fails carrying the errors payload.
    pub fn no_graphql_errors(self) -> ValidationResult<Self> {
        assertions::graphql_no_errors(self.response).map(|()| self)
    }

    /// Expects `data.<field>` to be present and non-null.
    ///
    /// # Errors
    ///
    /// Fails naming the field.
    pub fn graphql_data_not_null(self, field: &str) -> ValidationResult<Self> {
        assertions::graphql_has_data(self.response, field).map(|()| self)
    }

    /// Logs status and timing, and the body at debug level.
    #[must_use]
    pub fn log_response(self) -> Self {
        info!(
            "Response status: {}, time: {}",
            self.response.status,
            self.response.duration_display()
        );
        debug!("Response body: {}", self.response.body());
        self
    }

    /// Deserializes the whole body, or `None` if it does not fit `T`.
    #[must_use]
    pub fn extract_as<T: DeserializeOwned>(self) -> Option<T> {
        self.response.deserialize().ok()
    }

    /// Deserializes a body array into `Vec<T>`, empty on mismatch.
    #[must_use]
    pub fn extract_list_as<T: DeserializeOwned>(self) -> Vec<T> {
        self.response.deserialize().unwrap_or_default()
    }

    /// The value at `path` rendered as a string; JSON strings lose their
    /// quotes.
    #[must_use]
    pub fn extract_string(self, path: &str) -> Option<String> {
        match self.response.query(path)? {
            Value::Null => None,
            Value::String(text) => Some(text),
            other => Some(other.to_string()),
        }
    }

    /// The integer at `path`.
    #[must_use]
    pub fn extract_int(self, path: &str) -> Option<i64> {
        self.response.query(path).and_then(|value| value.as_i64())
    }

    /// The raw value at `path`.
    #[must_use]
    pub fn extract_value(self, path: &str) -> Option<Value> {
        self.response.query(path)
    }

    /// The list at `path`, empty when absent or not a list.
    #[must_use]
    pub fn extract_list(self, path: &str) -> Vec<Value> {
        match self.response.query(path) {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        }
    }

    /// The underlying response.
    #[must_use]
    pub const fn response(self) -> &'a ResponseSpec {
        self.response
    }
}
