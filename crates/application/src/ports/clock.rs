//! Clock port for time-related operations

use chrono::{DateTime, Utc};

/// Port for reading the current time.
///
/// Suite reports stamp their start and finish through this port so tests
/// can pin the timestamps.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;
}
