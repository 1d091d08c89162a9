use std::process::ExitCode;

/// Exit status for the CLI.
///
/// - `Success` (0): the run completed, whatever diagnostics it found
/// - `Error` (1): the run failed with an internal error (invalid config
///   file, unreadable folder)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// The check pipeline ran to completion.
    Success,
    /// The run aborted before the pipeline could finish.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(1),
        }
    }
}
