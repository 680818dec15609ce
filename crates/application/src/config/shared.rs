//! Process-wide configuration handle

use std::sync::{Arc, OnceLock};

use assay_domain::EffectiveConfig;

use super::ConfigResolver;
use crate::ports::ResourceLoader;

/// Lazily resolved configuration shared by clients and suites.
///
/// The first call to [`SharedConfig::get`] runs the resolver; concurrent
/// first callers block until that single pass completes and then all see
/// the same snapshot.
pub struct SharedConfig<L> {
    resolver: ConfigResolver<L>,
    resolved: OnceLock<Arc<EffectiveConfig>>,
}

impl<L: ResourceLoader> SharedConfig<L> {
    /// Wraps a resolver; nothing is loaded until first access.
    pub const fn new(resolver: ConfigResolver<L>) -> Self {
        Self {
            resolver,
            resolved: OnceLock::new(),
        }
    }

    /// Returns the resolved configuration, resolving it on first use.
    pub fn get(&self) -> Arc<EffectiveConfig> {
        Arc::clone(
            self.resolved
                .get_or_init(|| Arc::new(self.resolver.resolve())),
        )
    }

    /// Returns true once resolution has happened.
    pub fn is_resolved(&self) -> bool {
        self.resolved.get().is_some()
    }
}

impl SharedConfig<NoResources> {
    /// Wraps an already resolved configuration.
    #[must_use]
    pub fn from_config(config: EffectiveConfig) -> Self {
        let resolved = OnceLock::new();
        let _ = resolved.set(Arc::new(config));
        Self {
            resolver: ConfigResolver::new(NoResources),
            resolved,
        }
    }
}

/// Loader that never finds anything; backs [`SharedConfig::from_config`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NoResources;

impl ResourceLoader for NoResources {
    fn load(&self, _name: &str) -> Option<assay_domain::PropertySource> {
        None
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use assay_domain::PropertySource;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;
    use std::time::Duration;

    #[derive(Default)]
    struct CountingLoader {
        base_loads: AtomicUsize,
    }

    impl ResourceLoader for CountingLoader {
        fn load(&self, name: &str) -> Option<PropertySource> {
            if name == "application.properties" {
                self.base_loads.fetch_add(1, Ordering::SeqCst);
                thread::sleep(Duration::from_millis(20));
                return Some([("api.max.retries", "7")].into_iter().collect());
            }
            None
        }
    }

    #[test]
    fn test_lazy_until_first_access() {
        let shared = SharedConfig::new(ConfigResolver::new(CountingLoader::default()));
        assert!(!shared.is_resolved());

        assert_eq!(shared.get().max_retries(), 7);
        assert!(shared.is_resolved());
    }

    #[test]
    fn test_concurrent_first_access_resolves_once() {
        let shared = Arc::new(SharedConfig::new(ConfigResolver::new(
            CountingLoader::default(),
        )));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || shared.get())
            })
            .collect();
        let snapshots: Vec<_> = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect();

        assert_eq!(shared.resolver.loader().base_loads.load(Ordering::SeqCst), 1);
        assert!(snapshots.iter().all(|s| Arc::ptr_eq(s, &snapshots[0])));
    }

    #[test]
    fn test_from_config_is_already_resolved() {
        let shared = SharedConfig::from_config(EffectiveConfig::new("prod"));
        assert!(shared.is_resolved());
        assert_eq!(shared.get().environment(), "prod");
    }
}
