//! The resolved configuration snapshot

use std::collections::HashMap;

use tracing::{debug, warn};

use super::keys;
use super::{OverridePolicy, PropertySource};

/// Merged view over all configuration layers.
///
/// Built once per process by the configuration resolver and shared
/// read-only afterwards. No accessor fails: missing or malformed values fall
/// back to the caller-supplied default and leave a log line behind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EffectiveConfig {
    properties: HashMap<String, String>,
    environment: String,
}

impl EffectiveConfig {
    /// Creates an empty configuration for the given environment name.
    pub fn new(environment: impl Into<String>) -> Self {
        Self {
            properties: HashMap::new(),
            environment: environment.into(),
        }
    }

    /// Layers `source` on top of the current properties.
    ///
    /// Keys already present are replaced.
    pub fn merge(&mut self, source: &PropertySource) {
        debug!(source = source.name(), count = source.len(), "Merging property source");
        for (key, value) in source.iter() {
            self.properties.insert(key.to_string(), value.to_string());
        }
    }

    /// Layers the entries of `source` accepted by `policy`.
    ///
    /// Returns the number of entries applied.
    pub fn merge_overrides(&mut self, source: &PropertySource, policy: &OverridePolicy) -> usize {
        let mut applied = 0;
        for (key, value) in source.iter() {
            if policy.allows(key) {
                self.properties.insert(key.to_string(), value.to_string());
                applied += 1;
            }
        }
        debug!(
            source = source.name(),
            applied,
            ignored = source.len() - applied,
            "Applied configuration overrides"
        );
        applied
    }

    /// Returns the active environment name.
    #[must_use]
    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Returns the number of resolved properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns true if nothing was resolved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Returns true if `key` has a resolved value.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Looks up a property, logging a warning when it is absent.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        let value = self.properties.get(key).map(String::as_str);
        if value.is_none() {
            warn!("Property not found: {key}");
        }
        value
    }

    /// Looks up a property, falling back to `default` without logging.
    #[must_use]
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.properties.get(key).map_or(default, String::as_str)
    }

    /// Parses a property as a base-10 integer.
    ///
    /// Returns `default` when the key is absent or its value does not parse.
    #[must_use]
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        let Some(value) = self.properties.get(key) else {
            return default;
        };
        value.trim().parse().unwrap_or_else(|_| {
            warn!("Invalid integer property '{key}': {value}");
            default
        })
    }

    /// Reads a property as a boolean.
    ///
    /// Only `"true"` (any case) maps to `true`; every other present value is
    /// `false`. Absent keys yield `default`.
    #[must_use]
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.properties
            .get(key)
            .map_or(default, |value| value.trim().eq_ignore_ascii_case("true"))
    }

    /// REST API base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.get_or(keys::API_BASE_URL, keys::DEFAULT_BASE_URL)
    }

    /// GraphQL endpoint URL.
    #[must_use]
    pub fn graphql_url(&self) -> &str {
        self.get_or(keys::GRAPHQL_BASE_URL, keys::DEFAULT_GRAPHQL_URL)
    }

    /// Connection timeout in milliseconds.
    #[must_use]
    pub fn connection_timeout(&self) -> u64 {
        self.get_unsigned(
            keys::API_CONNECTION_TIMEOUT,
            keys::DEFAULT_CONNECTION_TIMEOUT_MS,
        )
    }

    /// Read timeout in milliseconds.
    #[must_use]
    pub fn read_timeout(&self) -> u64 {
        self.get_unsigned(keys::API_READ_TIMEOUT, keys::DEFAULT_READ_TIMEOUT_MS)
    }

    /// Maximum retry count.
    #[must_use]
    pub fn max_retries(&self) -> u32 {
        let default = keys::DEFAULT_MAX_RETRIES;
        u32::try_from(self.get_int(keys::API_MAX_RETRIES, i64::from(default))).unwrap_or(default)
    }

    /// Whether clients should log request and response details.
    #[must_use]
    pub fn request_logging(&self) -> bool {
        self.get_bool(keys::AUTOMATION_LOG_REQUESTS, true)
    }

    fn get_unsigned(&self, key: &str, default: u64) -> u64 {
        let fallback = i64::try_from(default).unwrap_or(i64::MAX);
        u64::try_from(self.get_int(key, fallback)).unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn config_with(pairs: &[(&str, &str)]) -> EffectiveConfig {
        let mut config = EffectiveConfig::new("dev");
        let source: PropertySource = pairs.iter().copied().collect();
        config.merge(&source);
        config
    }

    #[test]
    fn test_later_merge_wins() {
        let mut config = config_with(&[("api.base.url", "base"), ("api.only", "base")]);
        let overlay: PropertySource = [("api.base.url", "overlay")].into_iter().collect();
        config.merge(&overlay);

        assert_eq!(config.get("api.base.url"), Some("overlay"));
        assert_eq!(config.get("api.only"), Some("base"));
    }

    #[test]
    fn test_merge_overrides_filters_keys() {
        let mut config = config_with(&[("api.base.url", "base")]);
        let overrides: PropertySource = [
            ("api.base.url", "override"),
            ("HOME", "/root"),
            ("environment.foo", "bar"),
        ]
        .into_iter()
        .collect();

        let applied = config.merge_overrides(&overrides, &OverridePolicy::standard());

        assert_eq!(applied, 1);
        assert_eq!(config.get("api.base.url"), Some("override"));
        assert!(!config.contains("HOME"));
        assert!(!config.contains("environment.foo"));
    }

    #[test]
    fn test_get_missing_returns_none() {
        let config = EffectiveConfig::new("dev");
        assert_eq!(config.get("missing"), None);
        assert_eq!(config.get_or("missing", "fallback"), "fallback");
    }

    #[test]
    fn test_get_int() {
        let config = config_with(&[("good", " 42 "), ("bad", "abc"), ("neg", "-7")]);
        assert_eq!(config.get_int("good", 1), 42);
        assert_eq!(config.get_int("bad", 1), 1);
        assert_eq!(config.get_int("neg", 1), -7);
        assert_eq!(config.get_int("missing", 9), 9);
    }

    #[test]
    fn test_get_bool() {
        let config = config_with(&[
            ("a", "true"),
            ("b", "TRUE"),
            ("c", "yes"),
            ("d", "1"),
            ("e", "false"),
        ]);
        assert!(config.get_bool("a", false));
        assert!(config.get_bool("b", false));
        assert!(!config.get_bool("c", true));
        assert!(!config.get_bool("d", true));
        assert!(!config.get_bool("e", true));
        assert!(config.get_bool("missing", true));
        assert!(!config.get_bool("missing", false));
    }

    #[test]
    fn test_typed_accessor_fallbacks() {
        let config = EffectiveConfig::new("dev");
        assert_eq!(config.base_url(), "https://jsonplaceholder.typicode.com");
        assert_eq!(
            config.graphql_url(),
            "https://spacex-production.up.railway.app/"
        );
        assert_eq!(config.connection_timeout(), 5000);
        assert_eq!(config.read_timeout(), 10000);
        assert_eq!(config.max_retries(), 3);
        assert!(config.request_logging());
    }

    #[test]
    fn test_typed_accessors_read_values() {
        let config = config_with(&[
            ("api.base.url", "http://localhost:3000"),
            ("api.connection.timeout", "1500"),
            ("api.read.timeout", "-1"),
            ("api.max.retries", "oops"),
        ]);
        assert_eq!(config.base_url(), "http://localhost:3000");
        assert_eq!(config.connection_timeout(), 1500);
        assert_eq!(config.read_timeout(), 10000);
        assert_eq!(config.max_retries(), 3);
    }
}
