//! Error mapping guide:
//! - Map io::ErrorKind::NotFound to exit code 127; all others to 1.
//! - TmuxError never reaches callers of the resolver; it is collapsed to an
//!   empty string so each lookup falls through to its next source.
use std::fmt;
use std::io;
use std::process::ExitStatus;

/// Map an io::Error to a process exit code:
/// - 127 for NotFound (command not found)
/// - 1 for all other errors
pub fn exit_code_for_io_error(e: &io::Error) -> u8 {
    if e.kind() == io::ErrorKind::NotFound {
        127
    } else {
        1
    }
}

/// Failure of a single `tmux display-message` query.
#[derive(Debug)]
pub enum TmuxError {
    /// tmux is not on PATH.
    NotFound,
    /// tmux could not be started or waited for.
    Exec(anyhow::Error),
    /// tmux ran but reported failure (no server, unknown pane, ...).
    Status { status: ExitStatus, stderr: String },
}

impl From<anyhow::Error> for TmuxError {
    fn from(e: anyhow::Error) -> Self {
        TmuxError::Exec(e)
    }
}

impl fmt::Display for TmuxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TmuxError::NotFound => f.write_str("tmux not found"),
            TmuxError::Exec(e) => write!(f, "failed to run tmux: {e:#}"),
            TmuxError::Status { status, stderr } => {
                let stderr = stderr.trim();
                if stderr.is_empty() {
                    write!(f, "tmux exited with {status}")
                } else {
                    write!(f, "tmux exited with {status}: {stderr}")
                }
            }
        }
    }
}

impl std::error::Error for TmuxError {}

/// Convert TmuxError to exit code (parity with io::Error mapping).
pub fn exit_code_for_tmux_error(e: &TmuxError) -> u8 {
    match e {
        TmuxError::NotFound => 127,
        TmuxError::Exec(err) => err
            .downcast_ref::<io::Error>()
            .map(exit_code_for_io_error)
            .unwrap_or(1),
        TmuxError::Status { .. } => 1,
    }
}
