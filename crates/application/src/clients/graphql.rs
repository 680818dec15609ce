//! GraphQL client

use std::sync::Arc;

use assay_domain::constants::graphql::{DATA_FIELD, ERRORS_FIELD};
use assay_domain::{EffectiveConfig, HttpMethod, RequestBuilder, ResponseSpec};
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::error::ApplicationResult;
use crate::ports::HttpClient;

/// Posts GraphQL documents to the configured endpoint.
pub struct GraphQlClient<C> {
    http: C,
    config: Arc<EffectiveConfig>,
    endpoint: String,
}

impl<C: HttpClient> GraphQlClient<C> {
    /// Creates a client targeting `graphql.base.url`.
    pub fn new(http: C, config: Arc<EffectiveConfig>) -> Self {
        let endpoint = config.graphql_url().to_string();
        Self {
            http,
            config,
            endpoint,
        }
    }

    /// Creates a client targeting an explicit endpoint.
    pub fn with_endpoint(http: C, config: Arc<EffectiveConfig>, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            config,
            endpoint: endpoint.into(),
        }
    }

    /// Returns the endpoint documents are posted to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Executes a query.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built or sent. GraphQL
    /// errors in the response body are not errors here; see [`has_errors`].
    pub async fn execute_query(
        &self,
        query: &str,
        variables: Option<&Value>,
    ) -> ApplicationResult<ResponseSpec> {
        info!("Executing GraphQL query");
        self.send(query, variables).await
    }

    /// Executes a mutation.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built or sent.
    pub async fn execute_mutation(
        &self,
        mutation: &str,
        variables: Option<&Value>,
    ) -> ApplicationResult<ResponseSpec> {
        info!("Executing GraphQL mutation");
        self.send(mutation, variables).await
    }

    async fn send(&self, document: &str, variables: Option<&Value>) -> ApplicationResult<ResponseSpec> {
        let payload = request_body(document, variables);
        let log_details = self.config.request_logging();
        if log_details {
            debug!(endpoint = %self.endpoint, payload = %payload, "GraphQL request");
        }

        let request = RequestBuilder::new(HttpMethod::Post)
            .base_uri(self.endpoint.as_str())
            .timeout_ms(self.config.read_timeout())
            .json_body(&payload)?
            .build()?;
        let response = self.http.execute(&request).await?;

        if log_details {
            debug!(status = response.status, body = %response.body(), "GraphQL response");
        }
        Ok(response)
    }
}

/// Builds `{"query": .., "variables": ..}`, leaving out empty variables.
fn request_body(document: &str, variables: Option<&Value>) -> Value {
    let mut body = Map::new();
    body.insert("query".to_string(), Value::String(document.to_string()));
    if let Some(variables) = variables.filter(|v| !is_empty(v)) {
        body.insert("variables".to_string(), variables.clone());
    }
    Value::Object(body)
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

/// Returns true if the response carries a non-null top-level `errors`.
#[must_use]
pub fn has_errors(response: &ResponseSpec) -> bool {
    top_level(response, ERRORS_FIELD)
}

/// Returns true if the response carries a non-null top-level `data`.
#[must_use]
pub fn has_data(response: &ResponseSpec) -> bool {
    top_level(response, DATA_FIELD)
}

fn top_level(response: &ResponseSpec, field: &str) -> bool {
    response
        .body_json()
        .and_then(|json| json.get(field))
        .is_some_and(|value| !value.is_null())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::clients::mock::RecordingClient;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::time::Duration;

    fn sent_body(http: &RecordingClient) -> Value {
        serde_json::from_str(http.last().body.as_deref().unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_query_without_variables_omits_them() {
        let http = RecordingClient::replying(200, &json!({"data": {}}));
        let client = GraphQlClient::with_endpoint(&http, Arc::default(), "https://gql.example.com/");

        client.execute_query("{ rockets { id } }", None).await.unwrap();

        assert_eq!(sent_body(&http), json!({"query": "{ rockets { id } }"}));
        let request = http.last();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, "https://gql.example.com");
    }

    #[tokio::test]
    async fn test_empty_variables_omitted() {
        let http = RecordingClient::replying(200, &json!({"data": {}}));
        let client = GraphQlClient::with_endpoint(&http, Arc::default(), "https://gql.example.com");

        client.execute_query("q", Some(&json!({}))).await.unwrap();

        assert_eq!(sent_body(&http), json!({"query": "q"}));
    }

    #[tokio::test]
    async fn test_mutation_with_variables() {
        let http = RecordingClient::replying(200, &json!({"data": {}}));
        let client = GraphQlClient::with_endpoint(&http, Arc::default(), "https://gql.example.com");

        client
            .execute_mutation("mutation($id: ID!) { x(id: $id) }", Some(&json!({"id": "5"})))
            .await
            .unwrap();

        assert_eq!(
            sent_body(&http),
            json!({"query": "mutation($id: ID!) { x(id: $id) }", "variables": {"id": "5"}})
        );
    }

    #[test]
    fn test_default_endpoint_from_config() {
        let http = RecordingClient::replying(200, &json!({}));
        let client = GraphQlClient::new(&http, Arc::new(EffectiveConfig::new("dev")));
        assert_eq!(client.endpoint(), "https://spacex-production.up.railway.app/");
    }

    #[test]
    fn test_has_errors_and_data() {
        let failed = ResponseSpec::json(200, &json!({"errors": [{"message": "bad"}]}), Duration::ZERO);
        assert!(has_errors(&failed));
        assert!(!has_data(&failed));

        let ok = ResponseSpec::json(200, &json!({"data": {"rockets": []}, "errors": null}), Duration::ZERO);
        assert!(!has_errors(&ok));
        assert!(has_data(&ok));

        let html = ResponseSpec::new(502, Default::default(), "<html/>", Duration::ZERO);
        assert!(!has_errors(&html));
    }
}
