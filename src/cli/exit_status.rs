use std::process::ExitCode;

/// Exit status for CLI commands, following common conventions for tools
/// that gate CI.
///
/// - `Success` (0): Command completed; nothing left to do
/// - `Failure` (1): Dry run found changes that `--apply` would make
/// - `Error` (2): Command failed (missing marker, config error, I/O error)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed; nothing left to do.
    Success,
    /// Dry run found pending changes.
    Failure,
    /// Command failed due to an error.
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
