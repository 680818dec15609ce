//! A named, deferred check

use std::future::Future;
use std::pin::Pin;

use super::CheckResult;

/// Boxed future produced by a check.
pub type CheckFuture<'a> = Pin<Box<dyn Future<Output = CheckResult> + 'a>>;

type CheckFn<'a> = Box<dyn FnOnce() -> CheckFuture<'a> + 'a>;

/// A named async check, run at most once.
pub struct Check<'a> {
    name: String,
    body: Option<CheckFn<'a>>,
    skip_reason: Option<String>,
}

impl<'a> Check<'a> {
    /// Creates a check from an async closure.
    pub fn new<F, Fut>(name: impl Into<String>, check: F) -> Self
    where
        F: FnOnce() -> Fut + 'a,
        Fut: Future<Output = CheckResult> + 'a,
    {
        Self {
            name: name.into(),
            body: Some(Box::new(move || -> CheckFuture<'a> { Box::pin(check()) })),
            skip_reason: None,
        }
    }

    /// Creates a check that is reported as skipped.
    pub fn skipped(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: None,
            skip_reason: Some(reason.into()),
        }
    }

    /// Returns the check name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn into_parts(self) -> (String, Result<CheckFn<'a>, String>) {
        let body = self
            .body
            .ok_or_else(|| self.skip_reason.unwrap_or_default());
        (self.name, body)
    }
}

impl std::fmt::Debug for Check<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Check")
            .field("name", &self.name)
            .field("skipped", &self.body.is_none())
            .finish()
    }
}
