use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): every file was extracted
/// - `Failure` (1): the command ran but some files failed (invalid marker usage, syntax error)
/// - `Error` (2): the command could not run (config error, missing path, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    /// At least one file could not be extracted.
    Failure,
    Error,
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
