//! Well-known configuration keys, resource names and their fallbacks.

/// Resource holding the base defaults.
pub const BASE_RESOURCE: &str = "application.properties";

/// Key selecting the active environment overlay.
pub const ENV: &str = "env";

/// Environment used when no `env` override is supplied.
pub const DEFAULT_ENVIRONMENT: &str = "dev";

/// REST API base URL.
pub const API_BASE_URL: &str = "api.base.url";
/// GraphQL endpoint URL.
pub const GRAPHQL_BASE_URL: &str = "graphql.base.url";
/// Connection timeout in milliseconds.
pub const API_CONNECTION_TIMEOUT: &str = "api.connection.timeout";
/// Read timeout in milliseconds.
pub const API_READ_TIMEOUT: &str = "api.read.timeout";
/// Maximum retry count.
pub const API_MAX_RETRIES: &str = "api.max.retries";
/// Whether clients log request and response details.
pub const AUTOMATION_LOG_REQUESTS: &str = "automation.log.requests";

/// Fallback REST API base URL.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
/// Fallback GraphQL endpoint URL.
pub const DEFAULT_GRAPHQL_URL: &str = "https://spacex-production.up.railway.app/";
/// Fallback connection timeout in milliseconds.
pub const DEFAULT_CONNECTION_TIMEOUT_MS: u64 = 5_000;
/// Fallback read timeout in milliseconds.
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 10_000;
/// Fallback retry count.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Returns the overlay resource name for an environment.
#[must_use]
pub fn overlay_resource(environment: &str) -> String {
    format!("application-{environment}.properties")
}
