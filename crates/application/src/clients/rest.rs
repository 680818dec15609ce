//! REST API client

use std::fmt::Display;
use std::sync::Arc;

use assay_domain::{EffectiveConfig, HttpMethod, RequestBuilder, ResponseSpec};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::ApplicationResult;
use crate::ports::HttpClient;

/// Issues JSON requests against the configured REST base URL.
///
/// Every request carries JSON `Content-Type` and `Accept` headers and the
/// configured read timeout. Non-2xx responses are returned, not raised.
pub struct RestApiClient<C> {
    http: C,
    config: Arc<EffectiveConfig>,
    base_url: String,
}

impl<C: HttpClient> RestApiClient<C> {
    /// Creates a client targeting `api.base.url`.
    pub fn new(http: C, config: Arc<EffectiveConfig>) -> Self {
        let base_url = config.base_url().to_string();
        Self {
            http,
            config,
            base_url,
        }
    }

    /// Creates a client targeting an explicit base URL.
    pub fn with_base_url(http: C, config: Arc<EffectiveConfig>, base_url: impl Into<String>) -> Self {
        Self {
            http,
            config,
            base_url: base_url.into(),
        }
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {endpoint}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built or sent.
    pub async fn get(&self, endpoint: &str) -> ApplicationResult<ResponseSpec> {
        info!("GET request to: {endpoint}");
        self.send(RequestBuilder::new(HttpMethod::Get).path(endpoint))
            .await
    }

    /// `GET {endpoint}?k=v&...`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built or sent.
    pub async fn get_with_query<I, K, V>(
        &self,
        endpoint: &str,
        params: I,
    ) -> ApplicationResult<ResponseSpec>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: ToString,
    {
        let builder = params.into_iter().fold(
            RequestBuilder::new(HttpMethod::Get).path(endpoint),
            |builder, (key, value)| builder.query_param(key, value),
        );
        info!("GET request to: {endpoint} with query params");
        self.send(builder).await
    }

    /// `GET {endpoint}/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built or sent.
    pub async fn get_by_id(&self, endpoint: &str, id: impl Display) -> ApplicationResult<ResponseSpec> {
        info!("GET request to: {endpoint}/{id}");
        self.send(by_id(HttpMethod::Get, endpoint, &id)).await
    }

    /// `POST {endpoint}` with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be serialized or the request fails.
    pub async fn post<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> ApplicationResult<ResponseSpec> {
        info!("POST request to: {endpoint}");
        let builder = RequestBuilder::new(HttpMethod::Post)
            .path(endpoint)
            .json_body(body)?;
        self.send(builder).await
    }

    /// `PUT {endpoint}/{id}` with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be serialized or the request fails.
    pub async fn put<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        id: impl Display,
        body: &T,
    ) -> ApplicationResult<ResponseSpec> {
        info!("PUT request to: {endpoint}/{id}");
        let builder = by_id(HttpMethod::Put, endpoint, &id).json_body(body)?;
        self.send(builder).await
    }

    /// `PATCH {endpoint}/{id}` with a partial JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be serialized or the request fails.
    pub async fn patch<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        id: impl Display,
        body: &T,
    ) -> ApplicationResult<ResponseSpec> {
        info!("PATCH request to: {endpoint}/{id}");
        let builder = by_id(HttpMethod::Patch, endpoint, &id).json_body(body)?;
        self.send(builder).await
    }

    /// `DELETE {endpoint}/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built or sent.
    pub async fn delete(&self, endpoint: &str, id: impl Display) -> ApplicationResult<ResponseSpec> {
        info!("DELETE request to: {endpoint}/{id}");
        self.send(by_id(HttpMethod::Delete, endpoint, &id)).await
    }

    /// `POST {endpoint}` with a JSON body and extra headers.
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be serialized or the request fails.
    pub async fn post_with_headers<T, I, K, V>(
        &self,
        endpoint: &str,
        body: &T,
        headers: I,
    ) -> ApplicationResult<ResponseSpec>
    where
        T: Serialize + ?Sized,
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        info!("POST request with custom headers to: {endpoint}");
        let builder = RequestBuilder::new(HttpMethod::Post)
            .path(endpoint)
            .headers(headers)
            .json_body(body)?;
        self.send(builder).await
    }

    async fn send(&self, builder: RequestBuilder) -> ApplicationResult<ResponseSpec> {
        let request = builder
            .base_uri(self.base_url.as_str())
            .timeout_ms(self.config.read_timeout())
            .build()?;

        let log_details = self.config.request_logging();
        if log_details {
            debug!(
                method = %request.method,
                url = %request.url,
                body = request.body.as_deref().unwrap_or_default(),
                "Sending request"
            );
        }

        let response = self.http.execute(&request).await?;

        if log_details {
            debug!(
                status = response.status,
                elapsed_ms = response.elapsed_ms(),
                body = %response.body(),
                "Received response"
            );
        }
        Ok(response)
    }
}

fn by_id(method: HttpMethod, endpoint: &str, id: &impl Display) -> RequestBuilder {
    RequestBuilder::new(method)
        .path(format!("{}/{{id}}", endpoint.trim_end_matches('/')))
        .path_param("id", id)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::clients::mock::RecordingClient;
    use crate::error::ApplicationError;
    use crate::ports::HttpClientError;
    use assay_domain::PropertySource;
    use assay_domain::models::PostRequest;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn config() -> Arc<EffectiveConfig> {
        let mut config = EffectiveConfig::new("dev");
        let source: PropertySource = [
            ("api.base.url", "https://api.example.com"),
            ("api.read.timeout", "2500"),
        ]
        .into_iter()
        .collect();
        config.merge(&source);
        Arc::new(config)
    }

    #[tokio::test]
    async fn test_get_targets_configured_base_url() {
        let http = RecordingClient::replying(200, &json!([]));
        let client = RestApiClient::new(&http, config());

        let response = client.get("/posts").await.unwrap();

        assert_eq!(response.status, 200);
        let request = http.last();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.url, "https://api.example.com/posts");
        assert_eq!(request.timeout_ms, Some(2500));
        assert_eq!(request.header("Accept"), Some("application/json"));
    }

    #[tokio::test]
    async fn test_get_with_query() {
        let http = RecordingClient::replying(200, &json!([]));
        let client = RestApiClient::new(&http, config());

        client.get_with_query("/posts", [("userId", 1)]).await.unwrap();

        assert_eq!(
            http.last().full_url().unwrap().as_str(),
            "https://api.example.com/posts?userId=1"
        );
    }

    #[tokio::test]
    async fn test_post_serializes_body() {
        let http = RecordingClient::replying(201, &json!({"id": 101}));
        let client = RestApiClient::new(&http, config());
        let body = PostRequest::new(1, "T", "B");

        client.post("/posts", &body).await.unwrap();

        let request = http.last();
        assert_eq!(request.method, HttpMethod::Post);
        let sent: serde_json::Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(sent, json!({"userId": 1, "title": "T", "body": "B"}));
    }

    #[tokio::test]
    async fn test_id_routes() {
        let http = RecordingClient::replying(200, &json!({}));
        let client = RestApiClient::with_base_url(&http, config(), "https://other.example.com/");

        client.put("/posts", 1, &json!({"title": "U"})).await.unwrap();
        assert_eq!(http.last().url, "https://other.example.com/posts/1");
        assert_eq!(http.last().method, HttpMethod::Put);

        client.patch("/posts/", 2, &json!({"title": "P"})).await.unwrap();
        assert_eq!(http.last().url, "https://other.example.com/posts/2");

        client.delete("/posts", 3).await.unwrap();
        assert_eq!(http.last().method, HttpMethod::Delete);
        assert_eq!(http.last().body, None);

        client.get_by_id("/users", 4).await.unwrap();
        assert_eq!(http.last().url, "https://other.example.com/users/4");
    }

    #[tokio::test]
    async fn test_post_with_headers() {
        let http = RecordingClient::replying(201, &json!({}));
        let client = RestApiClient::new(&http, config());

        client
            .post_with_headers("/posts", &json!({}), [("X-Trace", "abc")])
            .await
            .unwrap();

        let request = http.last();
        assert_eq!(request.header("x-trace"), Some("abc"));
        assert_eq!(request.header("content-type"), Some("application/json"));
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let http = RecordingClient::failing(HttpClientError::Timeout { timeout_ms: 2500 });
        let client = RestApiClient::new(&http, config());

        let err = client.get("/posts").await.unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::Http(HttpClientError::Timeout { timeout_ms: 2500 })
        ));
    }
}
