//! Sequential check runner

use std::future::Future;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use tracing::{error, info, warn};
use uuid::Uuid;

use super::{Check, CheckOutcome, CheckResult, CheckStatus, SuiteReport};
use crate::ports::Clock;

const HALTED_REASON: &str = "stopped after an earlier failure";

/// Runs named checks one after another and collects a [`SuiteReport`].
#[derive(Debug, Default)]
pub struct SuiteRunner<K> {
    clock: K,
    stop_on_failure: bool,
}

impl<K: Clock> SuiteRunner<K> {
    /// Creates a runner stamping reports with `clock`.
    pub const fn new(clock: K) -> Self {
        Self {
            clock,
            stop_on_failure: false,
        }
    }

    /// Set whether to skip the remaining checks after the first failure.
    #[must_use]
    pub const fn with_stop_on_failure(mut self, stop: bool) -> Self {
        self.stop_on_failure = stop;
        self
    }

    /// Opens a run for `suite`.
    pub fn start(&self, suite: impl Into<String>) -> SuiteRun<'_, K> {
        let suite = suite.into();
        info!("=== Suite started: {suite} ===");
        SuiteRun {
            runner: self,
            run_id: Uuid::now_v7(),
            started_at: self.clock.now(),
            suite,
            outcomes: Vec::new(),
            halted: false,
        }
    }

    /// Runs every check in order and returns the report.
    pub async fn run(&self, suite: impl Into<String>, checks: Vec<Check<'_>>) -> SuiteReport {
        let mut run = self.start(suite);
        for check in checks {
            run.execute(check).await;
        }
        run.finish()
    }
}

/// A suite run in progress.
pub struct SuiteRun<'r, K> {
    runner: &'r SuiteRunner<K>,
    run_id: Uuid,
    suite: String,
    started_at: DateTime<Utc>,
    outcomes: Vec<CheckOutcome>,
    halted: bool,
}

impl<K: Clock> SuiteRun<'_, K> {
    /// Runs one check now.
    pub async fn check<F, Fut>(&mut self, name: impl Into<String>, check: F)
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = CheckResult>,
    {
        let name = name.into();
        if self.halted {
            self.skip(name, HALTED_REASON);
            return;
        }

        info!("--- Check started: {name} ---");
        let start = Instant::now();
        let result = check().await;
        let duration = start.elapsed();

        let status = match result {
            Ok(()) => {
                info!("PASSED: {name} ({}ms)", duration.as_millis());
                CheckStatus::Passed
            }
            Err(err) => {
                error!("FAILED: {name} - {err}");
                self.halted = self.runner.stop_on_failure;
                CheckStatus::Failed(err.to_string())
            }
        };
        self.outcomes.push(CheckOutcome {
            name,
            status,
            duration,
        });
    }

    /// Runs a deferred [`Check`].
    pub async fn execute(&mut self, check: Check<'_>) {
        match check.into_parts() {
            (name, Ok(body)) => self.check(name, body).await,
            (name, Err(reason)) => self.skip(name, reason),
        }
    }

    /// Records a check as skipped.
    pub fn skip(&mut self, name: impl Into<String>, reason: impl Into<String>) {
        let name = name.into();
        let reason = reason.into();
        warn!("SKIPPED: {name} ({reason})");
        self.outcomes.push(CheckOutcome {
            name,
            status: CheckStatus::Skipped(reason),
            duration: Duration::ZERO,
        });
    }

    /// Closes the run.
    #[must_use]
    pub fn finish(self) -> SuiteReport {
        let report = SuiteReport {
            run_id: self.run_id,
            suite: self.suite,
            started_at: self.started_at,
            finished_at: self.runner.clock.now(),
            outcomes: self.outcomes,
        };
        info!("=== Suite finished: {} ===", report.suite);
        info!(
            "Passed: {}, Failed: {}, Skipped: {}",
            report.passed(),
            report.failed(),
            report.skipped()
        );
        report
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::suite::SuiteError;
    use assay_domain::ValidationError;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    struct SteppingClock(Mutex<i64>);

    impl Clock for SteppingClock {
        fn now(&self) -> DateTime<Utc> {
            let mut secs = self.0.lock().unwrap();
            *secs += 1;
            Utc.timestamp_opt(*secs, 0).unwrap()
        }
    }

    fn runner() -> SuiteRunner<SteppingClock> {
        SuiteRunner::new(SteppingClock(Mutex::new(1_000)))
    }

    #[tokio::test]
    async fn test_counts_and_order() {
        let runner = runner();
        let checks = vec![
            Check::new("passes", || async { Ok(()) }),
            Check::new("fails", || async {
                Err(ValidationError::StatusMismatch {
                    expected: 200,
                    actual: 404,
                }
                .into())
            }),
            Check::skipped("later", "not supported"),
            Check::new("passes again", || async { Ok(()) }),
        ];

        let report = runner.run("rest", checks).await;

        assert_eq!(report.suite, "rest");
        assert_eq!(report.total(), 4);
        assert_eq!(report.passed(), 2);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.skipped(), 1);
        assert!(!report.all_passed());
        assert_eq!(
            report.failures().collect::<Vec<_>>(),
            vec![("fails", "Status code mismatch. Expected: 200, Actual: 404")]
        );
        assert_eq!(report.elapsed(), Duration::from_secs(1));
    }

    #[tokio::test]
    async fn test_stop_on_failure_skips_rest() {
        let runner = runner().with_stop_on_failure(true);
        let mut run = runner.start("graphql");

        run.check("boom", || async { Err(SuiteError::failed("boom")) })
            .await;
        run.check("never", || async { Err(SuiteError::failed("ran after failure")) })
            .await;
        let report = run.finish();

        assert_eq!(report.failed(), 1);
        assert_eq!(
            report.outcomes[1].status,
            CheckStatus::Skipped(HALTED_REASON.to_string())
        );
    }

    #[tokio::test]
    async fn test_check_borrows_local_state() {
        let runner = runner();
        let expected = 3;
        let expected = &expected;
        let report = runner
            .run(
                "borrow",
                vec![Check::new("borrowed", move || async move {
                    if *expected == 3 {
                        Ok(())
                    } else {
                        Err(SuiteError::failed("mismatch"))
                    }
                })],
            )
            .await;

        assert!(report.all_passed());
        assert!(report.outcomes[0].passed());
        assert_eq!(report.to_string(), "borrow: 1 total, 1 passed, 0 failed, 0 skipped");
    }
}
