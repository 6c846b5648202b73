use std::process::ExitCode;

use super::run::RunOutcome;

/// Exit status of a run.
///
/// - `Success` (0): nothing to scan, or no hardcoded text found
/// - `Failure` (1): at least one violation was reported
/// - `Error` (2): the run could not complete (bad config, git failure, ...)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<&RunOutcome> for ExitStatus {
    fn from(outcome: &RunOutcome) -> Self {
        match outcome {
            RunOutcome::Scanned(result) if !result.is_clean() => ExitStatus::Failure,
            _ => ExitStatus::Success,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
