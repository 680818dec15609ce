//! Allow-list for external configuration overrides

/// Decides which externally supplied keys may enter the effective
/// configuration.
///
/// A key is accepted when it equals one of the exact keys or starts with one
/// of the prefixes. The two checks are kept apart: `env` must match exactly
/// so that keys such as `environment.foo` stay out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverridePolicy {
    exact: Vec<String>,
    prefixes: Vec<String>,
}

impl OverridePolicy {
    /// Keys accepted by exact match in the standard policy.
    pub const STANDARD_EXACT: [&'static str; 1] = ["env"];

    /// Prefixes accepted in the standard policy.
    pub const STANDARD_PREFIXES: [&'static str; 3] = ["api.", "graphql.", "automation."];

    /// Creates a policy from explicit exact keys and prefixes.
    #[must_use]
    pub fn new<E, P>(exact: E, prefixes: P) -> Self
    where
        E: IntoIterator,
        E::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            exact: exact.into_iter().map(Into::into).collect(),
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// The harness policy: `env`, `api.*`, `graphql.*`, `automation.*`.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(Self::STANDARD_EXACT, Self::STANDARD_PREFIXES)
    }

    /// Returns true if an override for `key` may be applied.
    #[must_use]
    pub fn allows(&self, key: &str) -> bool {
        self.exact.iter().any(|exact| exact == key)
            || self.prefixes.iter().any(|prefix| key.starts_with(prefix.as_str()))
    }
}

impl Default for OverridePolicy {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_policy_accepts_namespaces() {
        let policy = OverridePolicy::standard();
        assert!(policy.allows("api.base.url"));
        assert!(policy.allows("graphql.base.url"));
        assert!(policy.allows("automation.log.requests"));
        assert!(policy.allows("env"));
    }

    #[test]
    fn test_env_requires_exact_match() {
        let policy = OverridePolicy::standard();
        assert!(!policy.allows("environment.foo"));
        assert!(!policy.allows("envoy"));
        assert!(!policy.allows("ENV"));
    }

    #[test]
    fn test_unrelated_keys_rejected() {
        let policy = OverridePolicy::standard();
        assert!(!policy.allows("PATH"));
        assert!(!policy.allows("user.home"));
        assert!(!policy.allows("apix.base.url"));
        assert!(!policy.allows("api"));
    }
}
