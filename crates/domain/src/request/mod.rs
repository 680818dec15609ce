//! HTTP request domain types

mod builder;
mod header;
mod method;
mod query;
mod spec;

pub use builder::RequestBuilder;
pub use header::Header;
pub use method::HttpMethod;
pub use query::QueryParam;
pub use spec::RequestSpec;
