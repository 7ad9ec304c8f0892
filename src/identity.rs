//! Session and role identity resolution.
//!
//! Precedence (first non-empty wins):
//! - session: BUS_SESSION, SESSION, tmux `#S`, "default"
//! - role:    AGENT_ROLE, BUS_ROLE, tmux `#W`, "unknown"
//!
//! Resolution happens on every call; nothing is cached.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::env::{
    EnvSource, ProcessEnv, ENV_AGENT_ROLE, ENV_BUS_ROLE, ENV_BUS_SESSION, ENV_SESSION,
};
use crate::paths::{self, BusPaths};
use crate::tmux::{MuxQuery, TmuxQuery, FORMAT_SESSION, FORMAT_WINDOW};

pub const DEFAULT_SESSION: &str = "default";
pub const DEFAULT_ROLE: &str = "unknown";

/// Where a resolved value came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "name")]
pub enum Source {
    Env(&'static str),
    Tmux(&'static str),
    Default,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Env(var) => write!(f, "env:{var}"),
            Source::Tmux(format) => write!(f, "tmux:{format}"),
            Source::Default => f.write_str("default"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolved {
    pub value: String,
    pub source: Source,
}

/// Resolves identities from an environment and a tmux query.
pub struct Resolver<E, Q> {
    env: E,
    mux: Q,
}

impl Resolver<ProcessEnv, TmuxQuery> {
    /// Resolver over the real process environment and tmux.
    pub fn from_process() -> Self {
        let env = ProcessEnv;
        let mux = TmuxQuery::from_env(&env);
        Self { env, mux }
    }
}

impl<E: EnvSource, Q: MuxQuery> Resolver<E, Q> {
    pub fn new(env: E, mux: Q) -> Self {
        Self { env, mux }
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    fn resolve(
        &self,
        vars: [&'static str; 2],
        format: &'static str,
        default: &str,
    ) -> Resolved {
        for var in vars {
            if let Some(value) = self.env.non_empty(var) {
                return Resolved {
                    value,
                    source: Source::Env(var),
                };
            }
        }
        let value = self.mux.var(format);
        if !value.is_empty() {
            return Resolved {
                value,
                source: Source::Tmux(format),
            };
        }
        Resolved {
            value: default.to_string(),
            source: Source::Default,
        }
    }

    #[cfg_attr(feature = "tracing", instrument(level = "debug", skip(self), ret))]
    pub fn resolve_session(&self) -> Resolved {
        self.resolve(
            [ENV_BUS_SESSION, ENV_SESSION],
            FORMAT_SESSION,
            DEFAULT_SESSION,
        )
    }

    #[cfg_attr(feature = "tracing", instrument(level = "debug", skip(self), ret))]
    pub fn resolve_role(&self) -> Resolved {
        self.resolve([ENV_AGENT_ROLE, ENV_BUS_ROLE], FORMAT_WINDOW, DEFAULT_ROLE)
    }

    pub fn session(&self) -> String {
        self.resolve_session().value
    }

    pub fn role(&self) -> String {
        self.resolve_role().value
    }

    pub fn memory_dir(&self) -> PathBuf {
        paths::memory_dir_from(&self.env)
    }

    pub fn memory_path(&self, role: &str) -> PathBuf {
        paths::memory_path_in(&self.memory_dir(), role)
    }

    /// Paths for the given session/role, resolving whichever is `None`.
    pub fn paths(&self, session: Option<&str>, role: Option<&str>) -> BusPaths {
        let session = session.map(str::to_string).unwrap_or_else(|| self.session());
        let role = role.map(str::to_string).unwrap_or_else(|| self.role());
        BusPaths::new(&session, &role, &self.memory_dir())
    }
}

/// Current bus session for this process.
pub fn bus_session() -> String {
    Resolver::from_process().session()
}

/// Current agent role for this process.
pub fn bus_role() -> String {
    Resolver::from_process().role()
}
