//! Resolves base, overlay and override layers into one snapshot

use assay_domain::config::keys;
use assay_domain::{EffectiveConfig, OverridePolicy, PropertySource};
use tracing::{info, warn};

use crate::ports::ResourceLoader;

/// Resolves the effective configuration.
///
/// Layers, lowest precedence first:
/// 1. `application.properties`
/// 2. `application-<env>.properties`
/// 3. overrides accepted by the [`OverridePolicy`]
///
/// The environment name comes from the `env` override and falls back to
/// `dev`. Nothing here fails: missing resources are logged and skipped.
pub struct ConfigResolver<L> {
    loader: L,
    overrides: PropertySource,
    policy: OverridePolicy,
}

impl<L: ResourceLoader> ConfigResolver<L> {
    /// Creates a resolver with no overrides and the standard policy.
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            overrides: PropertySource::empty("overrides"),
            policy: OverridePolicy::standard(),
        }
    }

    /// Sets the override layer.
    #[must_use]
    pub fn with_overrides(mut self, overrides: PropertySource) -> Self {
        self.overrides = overrides;
        self
    }

    /// Replaces the override allow-list.
    #[must_use]
    pub fn with_policy(mut self, policy: OverridePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the resource loader.
    pub const fn loader(&self) -> &L {
        &self.loader
    }

    /// Returns the active environment name selected by the overrides.
    #[must_use]
    pub fn environment(&self) -> String {
        self.overrides
            .get(keys::ENV)
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(keys::DEFAULT_ENVIRONMENT)
            .to_string()
    }

    /// Runs one resolution pass.
    #[must_use]
    pub fn resolve(&self) -> EffectiveConfig {
        let environment = self.environment();
        let mut config = EffectiveConfig::new(environment.clone());

        match self.loader.load(keys::BASE_RESOURCE) {
            Some(base) => config.merge(&base),
            None => warn!(
                "Base configuration {} not found, continuing with defaults",
                keys::BASE_RESOURCE
            ),
        }

        let overlay_name = keys::overlay_resource(&environment);
        match self.loader.load(&overlay_name) {
            Some(overlay) => config.merge(&overlay),
            None => warn!("Environment configuration {overlay_name} not found"),
        }

        config.merge_overrides(&self.overrides, &self.policy);

        let selected: PropertySource = [(keys::ENV, environment.as_str())].into_iter().collect();
        config.merge(&selected);

        info!(
            environment = %environment,
            properties = config.len(),
            "Configuration loaded for environment: {environment}"
        );
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    struct MapLoader(HashMap<&'static str, PropertySource>);

    impl ResourceLoader for MapLoader {
        fn load(&self, name: &str) -> Option<PropertySource> {
            self.0.get(name).cloned()
        }
    }

    fn loader() -> MapLoader {
        MapLoader(HashMap::from([
            (
                "application.properties",
                [
                    ("api.base.url", "https://base.example.com"),
                    ("api.read.timeout", "10000"),
                    ("api.max.retries", "3"),
                ]
                .into_iter()
                .collect(),
            ),
            (
                "application-staging.properties",
                [("api.base.url", "https://staging.example.com")]
                    .into_iter()
                    .collect(),
            ),
        ]))
    }

    #[test]
    fn test_base_only_keys_resolve() {
        let config = ConfigResolver::new(loader()).resolve();

        assert_eq!(config.environment(), "dev");
        assert_eq!(config.base_url(), "https://base.example.com");
        assert_eq!(config.get("env"), Some("dev"));
    }

    #[test]
    fn test_overlay_beats_base() {
        let overrides = [("env", "staging")].into_iter().collect();
        let config = ConfigResolver::new(loader())
            .with_overrides(overrides)
            .resolve();

        assert_eq!(config.environment(), "staging");
        assert_eq!(config.base_url(), "https://staging.example.com");
        assert_eq!(config.read_timeout(), 10_000);
    }

    #[test]
    fn test_allowed_override_beats_overlay() {
        let overrides = [
            ("env", "staging"),
            ("api.base.url", "https://override.example.com"),
            ("automation.log.requests", "false"),
        ]
        .into_iter()
        .collect();
        let config = ConfigResolver::new(loader())
            .with_overrides(overrides)
            .resolve();

        assert_eq!(config.base_url(), "https://override.example.com");
        assert!(!config.request_logging());
    }

    #[test]
    fn test_disallowed_override_never_observed() {
        let overrides = [
            ("db.password", "hunter2"),
            ("environment.foo", "x"),
            ("PATH", "/usr/bin"),
        ]
        .into_iter()
        .collect();
        let config = ConfigResolver::new(loader())
            .with_overrides(overrides)
            .resolve();

        assert!(!config.contains("db.password"));
        assert!(!config.contains("environment.foo"));
        assert!(!config.contains("PATH"));
    }

    #[test]
    fn test_unknown_environment_still_resolves() {
        let overrides = [("env", "qa-eu")].into_iter().collect();
        let config = ConfigResolver::new(loader())
            .with_overrides(overrides)
            .resolve();

        assert_eq!(config.environment(), "qa-eu");
        assert_eq!(config.base_url(), "https://base.example.com");
    }

    #[test]
    fn test_missing_resources_fall_back_to_defaults() {
        let config = ConfigResolver::new(MapLoader(HashMap::new())).resolve();

        assert_eq!(config.base_url(), keys::DEFAULT_BASE_URL);
        assert_eq!(config.graphql_url(), keys::DEFAULT_GRAPHQL_URL);
        assert_eq!(config.connection_timeout(), 5_000);
        assert_eq!(config.max_retries(), 3);
    }

    #[test]
    fn test_blank_env_override_uses_default() {
        let overrides = [("env", "  ")].into_iter().collect();
        let resolver = ConfigResolver::new(loader()).with_overrides(overrides);
        assert_eq!(resolver.environment(), "dev");
    }

    #[test]
    fn test_custom_policy() {
        let overrides = [("feature.flag", "on")].into_iter().collect();
        let config = ConfigResolver::new(loader())
            .with_overrides(overrides)
            .with_policy(OverridePolicy::new(["env"], ["feature."]))
            .resolve();

        assert_eq!(config.get("feature.flag"), Some("on"));
    }
}
