//! Named property sources

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A set of configuration properties loaded from a single origin.
///
/// `PropertySource` represents one configuration layer (a properties file,
/// the process environment, command-line definitions). Several sources are
/// merged into an [`EffectiveConfig`](super::EffectiveConfig).
///
/// # Example
///
/// ```
/// use assay_domain::PropertySource;
/// use std::collections::HashMap;
///
/// let mut props = HashMap::new();
/// props.insert("api.base.url".to_string(), "http://localhost:8080".to_string());
///
/// let source = PropertySource::new("application.properties", props);
/// assert_eq!(source.get("api.base.url"), Some("http://localhost:8080"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySource {
    /// Name of the source (typically a file name or "environment")
    name: String,
    /// Key-value properties from this source
    properties: HashMap<String, String>,
}

impl PropertySource {
    /// Creates a new source with the given name and properties.
    pub fn new(name: impl Into<String>, properties: HashMap<String, String>) -> Self {
        Self {
            name: name.into(),
            properties,
        }
    }

    /// Creates an empty source.
    pub fn empty(name: impl Into<String>) -> Self {
        Self::new(name, HashMap::new())
    }

    /// Returns the name of this source.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a reference to the properties map.
    #[must_use]
    pub const fn properties(&self) -> &HashMap<String, String> {
        &self.properties
    }

    /// Gets a property value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Inserts or replaces a property.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(key.into(), value.into());
    }

    /// Iterates over all key-value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns true if there are no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for PropertySource
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let properties = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self::new("inline", properties)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces() {
        let mut source = PropertySource::empty("test");
        assert!(source.is_empty());

        source.insert("api.max.retries", "3");
        source.insert("api.max.retries", "5");

        assert_eq!(source.len(), 1);
        assert_eq!(source.get("api.max.retries"), Some("5"));
        assert_eq!(source.name(), "test");
    }

    #[test]
    fn test_from_iterator() {
        let source: PropertySource = [("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(source.get("a"), Some("1"));
        assert_eq!(source.get("b"), Some("2"));
        assert_eq!(source.get("c"), None);
    }
}
