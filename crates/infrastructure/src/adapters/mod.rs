//! Adapter implementations of the application ports

mod file_resources;
mod process_overrides;
mod reqwest_client;
mod system_clock;

pub use file_resources::{DEFAULT_CONFIG_DIR, FileResourceLoader};
pub use process_overrides::{OVERRIDES_SOURCE, ProcessOverrides, parse_definition};
pub use reqwest_client::ReqwestHttpClient;
pub use system_clock::SystemClock;
