//! Layered configuration resolution

mod resolver;
mod shared;

pub use resolver::ConfigResolver;
pub use shared::{NoResources, SharedConfig};
