//! Known deployment environments

use std::fmt;

use serde::{Deserialize, Serialize};

/// Environments the harness ships overlays for.
///
/// The resolver does not require the active environment to be one of these:
/// any name selects an overlay file of the same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development.
    #[default]
    Dev,
    /// Pre-production.
    Staging,
    /// Production.
    Prod,
}

impl Environment {
    /// All known environments.
    pub const ALL: [Self; 3] = [Self::Dev, Self::Staging, Self::Prod];

    /// Returns the overlay name for this environment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Staging => "staging",
            Self::Prod => "prod",
        }
    }

    /// Looks up an environment by name, case-insensitively.
    ///
    /// Unknown names fall back to [`Environment::Dev`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|env| env.as_str().eq_ignore_ascii_case(name.trim()))
            .unwrap_or_default()
    }

    /// Returns true if `name` denotes one of the known environments.
    #[must_use]
    pub fn is_known(name: &str) -> bool {
        Self::ALL
            .iter()
            .any(|env| env.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_is_case_insensitive() {
        assert_eq!(Environment::from_name("STAGING"), Environment::Staging);
        assert_eq!(Environment::from_name("Prod"), Environment::Prod);
        assert_eq!(Environment::from_name("dev"), Environment::Dev);
    }

    #[test]
    fn test_unknown_name_falls_back_to_dev() {
        assert_eq!(Environment::from_name("qa"), Environment::Dev);
        assert!(!Environment::is_known("qa"));
        assert!(Environment::is_known("staging"));
    }
}
