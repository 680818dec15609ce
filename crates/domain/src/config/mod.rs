//! Configuration domain types
//!
//! The effective configuration is assembled from layered property sources:
//! base defaults, an environment overlay, and external overrides filtered
//! through an [`OverridePolicy`]. Later layers win.

mod effective;
mod environment;
pub mod keys;
mod overrides;
mod source;

pub use effective::EffectiveConfig;
pub use environment::Environment;
pub use overrides::OverridePolicy;
pub use source::PropertySource;
