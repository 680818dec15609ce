//! HTTP transport port

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use assay_domain::{RequestSpec, ResponseSpec};
use thiserror::Error;

/// Errors raised while sending a request or reading its response.
///
/// Non-2xx statuses are not errors; they come back as ordinary responses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HttpClientError {
    /// The URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request exceeded its timeout.
    #[error("request timed out after {timeout_ms}ms")]
    Timeout {
        /// Timeout that elapsed.
        timeout_ms: u64,
    },

    /// The host name could not be resolved.
    #[error("DNS lookup failed for {host}: {message}")]
    DnsError {
        /// Host that failed to resolve.
        host: String,
        /// Resolver message.
        message: String,
    },

    /// The remote end refused the connection.
    #[error("connection refused by {host}:{port}")]
    ConnectionRefused {
        /// Target host.
        host: String,
        /// Target port.
        port: u16,
    },

    /// Any other connection failure.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The redirect limit was reached.
    #[error("too many redirects (max {max})")]
    TooManyRedirects {
        /// Redirect limit.
        max: usize,
    },

    /// The response body could not be read.
    #[error("invalid body: {0}")]
    InvalidBody(String),

    /// Anything else.
    #[error("{0}")]
    Other(String),
}

/// Boxed future returned by [`HttpClient::execute`].
pub type HttpFuture<'a> = Pin<Box<dyn Future<Output = Result<ResponseSpec, HttpClientError>> + Send + 'a>>;

/// Port for sending HTTP requests.
pub trait HttpClient: Send + Sync {
    /// Sends `request` and returns the full response.
    fn execute(&self, request: &RequestSpec) -> HttpFuture<'_>;
}

impl<T: HttpClient + ?Sized> HttpClient for Arc<T> {
    fn execute(&self, request: &RequestSpec) -> HttpFuture<'_> {
        (**self).execute(request)
    }
}

impl<T: HttpClient + ?Sized> HttpClient for &T {
    fn execute(&self, request: &RequestSpec) -> HttpFuture<'_> {
        (**self).execute(request)
    }
}
