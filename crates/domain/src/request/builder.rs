//! Fluent request builder

use std::collections::HashMap;

use serde::Serialize;

use super::{Header, HttpMethod, QueryParam, RequestSpec};
use crate::constants::api::{ACCEPT, APPLICATION_JSON, AUTHORIZATION, CONTENT_TYPE};
use crate::error::{DomainError, DomainResult};

/// Builds a [`RequestSpec`] step by step.
///
/// Requests default to JSON content type and accept headers; explicit
/// headers with the same name replace the defaults.
///
/// # Example
///
/// ```
/// use assay_domain::request::{HttpMethod, RequestBuilder};
///
/// let request = RequestBuilder::new(HttpMethod::Get)
///     .base_uri("https://jsonplaceholder.typicode.com")
///     .path("/posts/{id}")
///     .path_param("id", 1)
///     .query_param("expand", "user")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.url, "https://jsonplaceholder.typicode.com/posts/1");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestBuilder {
    method: HttpMethod,
    base_uri: String,
    base_path: String,
    path: String,
    headers: Vec<Header>,
    query: Vec<QueryParam>,
    path_params: HashMap<String, String>,
    body: Option<String>,
    timeout_ms: Option<u64>,
}

impl RequestBuilder {
    /// Starts a request with the given method.
    #[must_use]
    pub fn new(method: HttpMethod) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    /// Sets the scheme, host and optional leading path.
    #[must_use]
    pub fn base_uri(mut self, base_uri: impl Into<String>) -> Self {
        self.base_uri = base_uri.into();
        self
    }

    /// Sets a path segment placed between the base URI and the path.
    #[must_use]
    pub fn base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    /// Sets the endpoint path. May contain `{name}` placeholders.
    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Adds a header, replacing any previous header with the same name.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let header = Header::new(name, value);
        self.headers.retain(|h| !h.is(&header.name));
        self.headers.push(header);
        self
    }

    /// Adds several headers.
    #[must_use]
    pub fn headers<I, K, V>(self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        headers
            .into_iter()
            .fold(self, |builder, (name, value)| builder.header(name, value))
    }

    /// Appends a query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push(QueryParam::new(key, value));
        self
    }

    /// Binds a value to a `{name}` placeholder in the path.
    #[must_use]
    pub fn path_param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.path_params.insert(name.into(), value.to_string());
        self
    }

    /// Sets the `Content-Type` header.
    #[must_use]
    pub fn content_type(self, content_type: impl Into<String>) -> Self {
        self.header(CONTENT_TYPE, content_type)
    }

    /// Sets the `Accept` header.
    #[must_use]
    pub fn accept(self, accept: impl Into<String>) -> Self {
        self.header(ACCEPT, accept)
    }

    /// Adds an `Authorization: Bearer` header.
    #[must_use]
    pub fn bearer_auth(self, token: &str) -> Self {
        self.header(AUTHORIZATION, format!("Bearer {token}"))
    }

    /// Sets a pre-serialized body.
    #[must_use]
    pub fn raw_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serializes `body` as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidBody`] if serialization fails.
    pub fn json_body<T: Serialize + ?Sized>(mut self, body: &T) -> DomainResult<Self> {
        let json = serde_json::to_string(body).map_err(|e| DomainError::InvalidBody(e.to_string()))?;
        self.body = Some(json);
        Ok(self)
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// Assembles the request.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnresolvedPathParam`] if a placeholder has no
    /// bound value, or [`DomainError::InvalidUrl`] if no base URI was set.
    pub fn build(self) -> DomainResult<RequestSpec> {
        if self.base_uri.trim().is_empty() {
            return Err(DomainError::InvalidUrl("missing base URI".to_string()));
        }

        let mut path = self.path;
        for (name, value) in &self.path_params {
            path = path.replace(&format!("{{{name}}}"), value);
        }
        if let Some(start) = path.find('{') {
            let name = path[start + 1..]
                .split('}')
                .next()
                .unwrap_or_default()
                .to_string();
            return Err(DomainError::UnresolvedPathParam(name));
        }

        let url = [self.base_uri.as_str(), self.base_path.as_str(), path.as_str()]
            .into_iter()
            .filter(|part| !part.trim_matches('/').is_empty())
            .enumerate()
            .fold(String::new(), |mut url, (index, part)| {
                if index == 0 {
                    url.push_str(part.trim_end_matches('/'));
                } else {
                    url.push('/');
                    url.push_str(part.trim_matches('/'));
                }
                url
            });

        let mut headers = Vec::with_capacity(self.headers.len() + 2);
        for (name, default) in [(CONTENT_TYPE, APPLICATION_JSON), (ACCEPT, APPLICATION_JSON)] {
            if !self.headers.iter().any(|h| h.is(name)) {
                headers.push(Header::new(name, default));
            }
        }
        headers.extend(self.headers);

        Ok(RequestSpec {
            method: self.method,
            url,
            headers,
            query: self.query,
            body: self.body,
            timeout_ms: self.timeout_ms,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_joins_url_parts() {
        let request = RequestBuilder::new(HttpMethod::Get)
            .base_uri("https://api.example.com/")
            .base_path("/v1/")
            .path("users")
            .build()
            .unwrap();

        assert_eq!(request.url, "https://api.example.com/v1/users");
    }

    #[test]
    fn test_default_json_headers() {
        let request = RequestBuilder::new(HttpMethod::Get)
            .base_uri("https://api.example.com")
            .build()
            .unwrap();

        assert_eq!(request.header("content-type"), Some(APPLICATION_JSON));
        assert_eq!(request.header("accept"), Some(APPLICATION_JSON));
        assert_eq!(request.url, "https://api.example.com");
    }

    #[test]
    fn test_explicit_header_replaces_default() {
        let request = RequestBuilder::new(HttpMethod::Post)
            .base_uri("https://api.example.com")
            .content_type("text/plain")
            .bearer_auth("abc")
            .build()
            .unwrap();

        assert_eq!(request.header("Content-Type"), Some("text/plain"));
        assert_eq!(request.header("Authorization"), Some("Bearer abc"));
        assert_eq!(
            request
                .headers
                .iter()
                .filter(|h| h.is("content-type"))
                .count(),
            1
        );
    }

    #[test]
    fn test_path_params_substituted() {
        let request = RequestBuilder::new(HttpMethod::Delete)
            .base_uri("https://api.example.com")
            .path("/posts/{postId}/comments/{id}")
            .path_param("postId", 3)
            .path_param("id", 9)
            .build()
            .unwrap();

        assert_eq!(request.url, "https://api.example.com/posts/3/comments/9");
    }

    #[test]
    fn test_unresolved_path_param() {
        let result = RequestBuilder::new(HttpMethod::Get)
            .base_uri("https://api.example.com")
            .path("/posts/{id}")
            .build();

        assert_eq!(
            result.unwrap_err(),
            DomainError::UnresolvedPathParam("id".to_string())
        );
    }

    #[test]
    fn test_json_body() {
        let request = RequestBuilder::new(HttpMethod::Post)
            .base_uri("https://api.example.com")
            .json_body(&serde_json::json!({"title": "T"}))
            .unwrap()
            .timeout_ms(250)
            .build()
            .unwrap();

        assert_eq!(request.body.as_deref(), Some(r#"{"title":"T"}"#));
        assert_eq!(request.timeout_ms, Some(250));
    }

    #[test]
    fn test_missing_base_uri() {
        let result = RequestBuilder::new(HttpMethod::Get).path("/x").build();
        assert!(matches!(result, Err(DomainError::InvalidUrl(_))));
    }
}
