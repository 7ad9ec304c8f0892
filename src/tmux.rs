#![allow(clippy::module_name_repetitions)]
//! tmux variable queries via `tmux display-message -p`.
//!
//! Invariants
//! - When TMUX_PANE is set the query targets that pane (`-t $TMUX_PANE`), so
//!   `#W` names the window the process runs in, not the active window.
//! - No timeout is applied; a hung tmux blocks the caller.
//! - `var` never fails: every error becomes an empty string so identity
//!   lookups can fall through to their defaults.

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::env::{EnvSource, ENV_TMUX_PANE};
use crate::errors::TmuxError;
use crate::util::exec::{ExecRequest, ExecService};

/// Format for the current session name.
pub const FORMAT_SESSION: &str = "#S";
/// Format for the current window name.
pub const FORMAT_WINDOW: &str = "#W";

/// Something that can expand a tmux format string.
pub trait MuxQuery {
    fn display_message(&self, format: &str) -> Result<String, TmuxError>;

    /// Expanded value, or "" when the query fails for any reason.
    fn var(&self, format: &str) -> String {
        self.display_message(format).unwrap_or_default()
    }
}

impl<Q: MuxQuery + ?Sized> MuxQuery for &Q {
    fn display_message(&self, format: &str) -> Result<String, TmuxError> {
        (**self).display_message(format)
    }
}

/// Arguments for `tmux display-message`, optionally pinned to a pane.
pub fn display_message_args(pane: Option<&str>, format: &str) -> Vec<String> {
    let mut args = vec!["display-message".to_string()];
    if let Some(pane) = pane.filter(|p| !p.is_empty()) {
        args.push("-t".to_string());
        args.push(pane.to_string());
    }
    args.push("-p".to_string());
    args.push(format.to_string());
    args
}

/// Runs the real tmux binary.
#[derive(Debug, Clone)]
pub struct TmuxQuery {
    program: String,
    pane: Option<String>,
    exec: ExecService,
}

impl TmuxQuery {
    /// Query tmux from PATH, targeting `TMUX_PANE` from `env` when set.
    pub fn from_env(env: &impl EnvSource) -> Self {
        Self {
            program: "tmux".to_string(),
            pane: env.non_empty(ENV_TMUX_PANE),
            exec: ExecService::unbounded(),
        }
    }

    /// Use a specific tmux executable (absolute path or name on PATH).
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn pane(&self) -> Option<&str> {
        self.pane.as_deref()
    }
}

impl MuxQuery for TmuxQuery {
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "debug", skip(self), fields(pane = ?self.pane), err)
    )]
    fn display_message(&self, format: &str) -> Result<String, TmuxError> {
        let program = which::which(&self.program).map_err(|_| TmuxError::NotFound)?;
        let out = self.exec.run(
            ExecRequest::new(program)
                .args(display_message_args(self.pane.as_deref(), format))
                .inherit_env(true)
                .capture_output(true),
        )?;
        if !out.status.success() {
            return Err(TmuxError::Status {
                status: out.status,
                stderr: out.stderr,
            });
        }
        Ok(out.stdout.trim().to_string())
    }
}

/// Expand `format` with tmux for the current process; "" on failure.
pub fn tmux_var(format: &str) -> String {
    TmuxQuery::from_env(&crate::env::ProcessEnv).var(format)
}

/// True when a tmux binary is reachable on PATH.
pub fn tmux_available() -> bool {
    which::which("tmux").is_ok()
}
