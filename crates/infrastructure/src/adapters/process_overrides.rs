//! External configuration overrides

use std::ffi::OsString;

use assay_domain::PropertySource;
use tracing::{debug, warn};

/// Name given to the combined override source.
pub const OVERRIDES_SOURCE: &str = "overrides";

/// Collects override candidates from the process environment and from
/// `KEY=VALUE` definitions, the latter taking precedence.
///
/// Nothing is filtered here; the resolver applies the allow-list.
#[derive(Debug, Clone)]
pub struct ProcessOverrides {
    source: PropertySource,
}

impl ProcessOverrides {
    /// Starts with no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: PropertySource::empty(OVERRIDES_SOURCE),
        }
    }

    /// Adds every process environment variable, verbatim.
    #[must_use]
    pub fn with_env(self) -> Self {
        self.with_vars_os(std::env::vars_os())
    }

    /// Adds platform-encoded name/value pairs. Pairs that are not valid
    /// Unicode are skipped.
    #[must_use]
    pub fn with_vars_os<I>(self, vars: I) -> Self
    where
        I: IntoIterator<Item = (OsString, OsString)>,
    {
        let vars = vars.into_iter().filter_map(|(key, value)| {
            match (key.into_string(), value.into_string()) {
                (Ok(key), Ok(value)) => Some((key, value)),
                (Ok(key), Err(_)) => {
                    debug!("Skipping environment variable '{key}' with a non-Unicode value");
                    None
                }
                (Err(key), _) => {
                    debug!("Skipping environment variable {key:?} with a non-Unicode name");
                    None
                }
            }
        });
        self.with_vars(vars)
    }

    /// Adds name/value pairs, replacing earlier values.
    #[must_use]
    pub fn with_vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in vars {
            self.source.insert(key, value);
        }
        self
    }

    /// Adds `KEY=VALUE` definitions. Entries without `=` are logged and
    /// skipped.
    #[must_use]
    pub fn with_definitions<I, S>(mut self, definitions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for definition in definitions {
            let definition = definition.as_ref();
            match parse_definition(definition) {
                Some((key, value)) => self.source.insert(key, value),
                None => warn!("Ignoring malformed override '{definition}', expected KEY=VALUE"),
            }
        }
        self
    }

    /// Sets a single override.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.source.insert(key, value);
        self
    }

    /// Returns the collected overrides.
    #[must_use]
    pub fn into_source(self) -> PropertySource {
        self.source
    }
}

impl Default for ProcessOverrides {
    fn default() -> Self {
        Self::new()
    }
}

/// Splits `KEY=VALUE` at the first `=`; the key is trimmed and must be
/// non-empty.
#[must_use]
pub fn parse_definition(definition: &str) -> Option<(&str, &str)> {
    let (key, value) = definition.split_once('=')?;
    let key = key.trim();
    (!key.is_empty()).then_some((key, value))
}
