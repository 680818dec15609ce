//! Named checks, the runner that executes them and the resulting report

mod check;
mod error;
mod report;
mod runner;

pub use check::{Check, CheckFuture};
pub use error::{CheckResult, SuiteError};
pub use report::{CheckOutcome, CheckStatus, SuiteReport};
pub use runner::{SuiteRun, SuiteRunner};
