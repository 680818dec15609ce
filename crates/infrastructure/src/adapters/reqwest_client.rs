//! HTTP Client implementation using reqwest.
//!
//! This adapter implements the `HttpClient` port using the reqwest library.
//! Connect timeouts come from configuration; each request carries its own
//! read timeout, falling back to the configured one.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use assay_application::ports::{HttpClient, HttpClientError, HttpFuture};
use assay_domain::config::keys;
use assay_domain::{EffectiveConfig, HttpMethod, RequestSpec, ResponseSpec};
use reqwest::{Client, Method};
use tracing::debug;

const MAX_REDIRECTS: usize = 10;
const USER_AGENT: &str = concat!("Assay/", env!("CARGO_PKG_VERSION"));

/// HTTP client implementation using reqwest.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Client,
    default_timeout_ms: u64,
}

impl ReqwestHttpClient {
    /// Creates a client with the fallback timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new() -> Result<Self, HttpClientError> {
        Self::with_timeouts(
            keys::DEFAULT_CONNECTION_TIMEOUT_MS,
            keys::DEFAULT_READ_TIMEOUT_MS,
        )
    }

    /// Creates a client using `api.connection.timeout` and `api.read.timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn from_config(config: &EffectiveConfig) -> Result<Self, HttpClientError> {
        Self::with_timeouts(config.connection_timeout(), config.read_timeout())
    }

    /// Creates a client with explicit connect and read timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn with_timeouts(connect_timeout_ms: u64, read_timeout_ms: u64) -> Result<Self, HttpClientError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(Duration::from_millis(connect_timeout_ms))
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|e| HttpClientError::Other(e.to_string()))?;

        Ok(Self {
            client,
            default_timeout_ms: read_timeout_ms,
        })
    }

    /// Creates a new HTTP client with a custom reqwest client.
    #[must_use]
    pub const fn with_client(client: Client, default_timeout_ms: u64) -> Self {
        Self {
            client,
            default_timeout_ms,
        }
    }

    /// Converts domain `HttpMethod` to reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
        }
    }

    /// Maps reqwest errors to `HttpClientError`.
    fn map_error(error: &reqwest::Error, timeout_ms: u64) -> HttpClientError {
        if error.is_timeout() {
            return HttpClientError::Timeout { timeout_ms };
        }

        if error.is_connect() {
            let message = error.to_string();
            let host = error
                .url()
                .and_then(|u| u.host_str())
                .unwrap_or("unknown")
                .to_string();
            let lower = message.to_lowercase();
            if lower.contains("dns") || lower.contains("resolve") {
                return HttpClientError::DnsError { host, message };
            }
            if lower.contains("refused") {
                let port = error
                    .url()
                    .and_then(reqwest::Url::port_or_known_default)
                    .unwrap_or(80);
                return HttpClientError::ConnectionRefused { host, port };
            }
            return HttpClientError::ConnectionFailed(message);
        }

        if error.is_redirect() {
            return HttpClientError::TooManyRedirects { max: MAX_REDIRECTS };
        }

        HttpClientError::Other(error.to_string())
    }
}

impl HttpClient for ReqwestHttpClient {
    fn execute(&self, request: &RequestSpec) -> HttpFuture<'_> {
        let method = request.method;
        let url = request.full_url();
        let headers = request.headers.clone();
        let body = request.body.clone();
        let timeout_ms = request.timeout_ms.unwrap_or(self.default_timeout_ms);

        Box::pin(async move {
            let url = url.map_err(|e| HttpClientError::InvalidUrl(e.to_string()))?;
            debug!(%method, %url, timeout_ms, "Dispatching request");

            let start = Instant::now();

            let mut builder = self
                .client
                .request(Self::to_reqwest_method(method), url.as_str())
                .timeout(Duration::from_millis(timeout_ms));
            for header in &headers {
                builder = builder.header(&header.name, &header.value);
            }
            if let Some(body) = body {
                builder = builder.body(body);
            }

            let response = builder
                .send()
                .await
                .map_err(|e| Self::map_error(&e, timeout_ms))?;

            let status = response.status().as_u16();
            let response_headers: HashMap<String, String> = response
                .headers()
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("<binary>").to_string()))
                .collect();

            let bytes = response.bytes().await.map_err(|e| {
                if e.is_timeout() {
                    HttpClientError::Timeout { timeout_ms }
                } else {
                    HttpClientError::InvalidBody(format!("Failed to read body: {e}"))
                }
            })?;
            let duration = start.elapsed();

            Ok(ResponseSpec::new(
                status,
                response_headers,
                String::from_utf8_lossy(&bytes).into_owned(),
                duration,
            ))
        })
    }
}
