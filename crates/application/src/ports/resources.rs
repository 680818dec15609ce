//! Configuration resource port

use assay_domain::PropertySource;

/// Port for loading named configuration resources.
///
/// Implementations report problems (missing file, unreadable content)
/// through logging and return `None`; callers decide on the fallback.
pub trait ResourceLoader: Send + Sync {
    /// Loads the resource called `name`, or `None` if it is unavailable.
    fn load(&self, name: &str) -> Option<PropertySource>;
}

impl<T: ResourceLoader + ?Sized> ResourceLoader for Box<T> {
    fn load(&self, name: &str) -> Option<PropertySource> {
        (**self).load(name)
    }
}
