//! Request specification type

use serde::{Deserialize, Serialize};
use url::Url;

use super::{Header, HttpMethod, QueryParam};
use crate::error::{DomainError, DomainResult};

/// Complete specification for one HTTP request issued by a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSpec {
    /// HTTP method
    pub method: HttpMethod,
    /// Absolute target URL, without the query string
    pub url: String,
    /// HTTP headers, in insertion order
    #[serde(default)]
    pub headers: Vec<Header>,
    /// Query parameters appended to the URL
    #[serde(default)]
    pub query: Vec<QueryParam>,
    /// Serialized request body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Per-request timeout in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

impl RequestSpec {
    /// Creates a request with no headers, query or body.
    #[must_use]
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            query: Vec::new(),
            body: None,
            timeout_ms: None,
        }
    }

    /// Creates a GET request for `url`.
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, url)
    }

    /// Returns the first header with the given name (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|h| h.is(name))
            .map(|h| h.value.as_str())
    }

    /// Parses the URL and appends the query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidUrl`] if the URL is malformed.
    pub fn full_url(&self) -> DomainResult<Url> {
        let mut url =
            Url::parse(&self.url).map_err(|e| DomainError::InvalidUrl(format!("{e}: {}", self.url)))?;
        if !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for param in &self.query {
                pairs.append_pair(&param.key, &param.value);
            }
        }
        Ok(url)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_full_url_appends_query() {
        let mut req = RequestSpec::get("https://api.example.com/posts");
        req.query.push(QueryParam::new("userId", 1));
        req.query.push(QueryParam::new("q", "a b"));

        assert_eq!(
            req.full_url().unwrap().as_str(),
            "https://api.example.com/posts?userId=1&q=a+b"
        );
    }

    #[test]
    fn test_full_url_rejects_relative() {
        let req = RequestSpec::get("/posts");
        assert!(matches!(req.full_url(), Err(DomainError::InvalidUrl(_))));
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut req = RequestSpec::new(HttpMethod::Post, "https://api.example.com");
        req.headers.push(Header::new("Content-Type", "application/json"));

        assert_eq!(req.header("content-type"), Some("application/json"));
        assert_eq!(req.header("accept"), None);
    }
}
