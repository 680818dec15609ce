//! Suite run results

use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Final state of one check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    /// Every expectation held.
    Passed,
    /// The first failed expectation.
    Failed(String),
    /// Not run, with the reason.
    Skipped(String),
}

/// Outcome of one check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Check name.
    pub name: String,
    /// Final state.
    pub status: CheckStatus,
    /// Wall time spent in the check.
    pub duration: Duration,
}

impl CheckOutcome {
    /// Returns true if the check passed.
    #[must_use]
    pub const fn passed(&self) -> bool {
        matches!(self.status, CheckStatus::Passed)
    }
}

/// Results of one suite run.
#[derive(Debug, Clone)]
pub struct SuiteReport {
    /// Unique id of this run.
    pub run_id: Uuid,
    /// Suite name.
    pub suite: String,
    /// When the suite started.
    pub started_at: DateTime<Utc>,
    /// When the suite finished.
    pub finished_at: DateTime<Utc>,
    /// Per-check outcomes, in execution order.
    pub outcomes: Vec<CheckOutcome>,
}

impl SuiteReport {
    /// Number of checks that ran or were skipped.
    #[must_use]
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of passed checks.
    #[must_use]
    pub fn passed(&self) -> usize {
        self.count(|s| matches!(s, CheckStatus::Passed))
    }

    /// Number of failed checks.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, CheckStatus::Failed(_)))
    }

    /// Number of skipped checks.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.count(|s| matches!(s, CheckStatus::Skipped(_)))
    }

    /// Returns true if no check failed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    /// Failed checks with their messages.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &str)> {
        self.outcomes.iter().filter_map(|o| match &o.status {
            CheckStatus::Failed(message) => Some((o.name.as_str(), message.as_str())),
            _ => None,
        })
    }

    /// Wall time between start and finish.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        (self.finished_at - self.started_at)
            .to_std()
            .unwrap_or_default()
    }

    fn count(&self, predicate: impl Fn(&CheckStatus) -> bool) -> usize {
        self.outcomes.iter().filter(|o| predicate(&o.status)).count()
    }
}

impl std::fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} total, {} passed, {} failed, {} skipped",
            self.suite,
            self.total(),
            self.passed(),
            self.failed(),
            self.skipped()
        )
    }
}
