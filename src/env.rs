#![allow(clippy::module_name_repetitions)]
//! Environment variable names and the lookup seam used by the resolver.
//!
//! Invariants
//! - A variable that is set but empty is treated exactly like an unset one.
//! - Values are returned verbatim (no trimming); callers decide on trimming.
//! - Non-unicode values count as set: paths keep the raw bytes, identities
//!   use the lossy string.

use std::collections::HashMap;
use std::ffi::OsString;

/// Comma-separated extra roles appended to the built-in registry.
pub const ENV_ROLES: &str = "MUXCODER_ROLES";
/// Whitespace-separated list replacing the built-in split-left windows.
pub const ENV_SPLIT_LEFT: &str = "MUXCODER_SPLIT_LEFT";
/// Explicit bus session name.
pub const ENV_BUS_SESSION: &str = "BUS_SESSION";
/// Generic session name shared with the launcher scripts.
pub const ENV_SESSION: &str = "SESSION";
/// Explicit agent role.
pub const ENV_AGENT_ROLE: &str = "AGENT_ROLE";
/// Generic bus role.
pub const ENV_BUS_ROLE: &str = "BUS_ROLE";
/// Memory directory override.
pub const ENV_MEMORY_DIR: &str = "BUS_MEMORY_DIR";
/// Pane id exported by tmux into every pane's environment.
pub const ENV_TMUX_PANE: &str = "TMUX_PANE";

/// Source of environment variables.
pub trait EnvSource {
    /// Raw lookup; `None` when unset. Values need not be unicode.
    fn var_os(&self, key: &str) -> Option<OsString>;

    /// Lookup as a string; non-unicode bytes are replaced (U+FFFD), never dropped.
    fn var(&self, key: &str) -> Option<String> {
        self.var_os(key).map(|v| v.to_string_lossy().into_owned())
    }

    /// Lookup that maps set-but-empty to `None`.
    fn non_empty(&self, key: &str) -> Option<String> {
        self.var(key).filter(|v| !v.is_empty())
    }

    /// Like `non_empty`, keeping the raw bytes (for paths).
    fn non_empty_os(&self, key: &str) -> Option<OsString> {
        self.var_os(key).filter(|v| !v.is_empty())
    }
}

/// Reads the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var_os(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }
}

/// Fixed set of variables; handy for embedding callers and tests.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, OsString>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<OsString>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<OsString>) {
        self.vars.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) {
        self.vars.remove(key);
    }
}

impl EnvSource for MapEnv {
    fn var_os(&self, key: &str) -> Option<OsString> {
        self.vars.get(key).cloned()
    }
}

impl<E: EnvSource + ?Sized> EnvSource for &E {
    fn var_os(&self, key: &str) -> Option<OsString> {
        (**self).var_os(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_treats_empty_as_unset() {
        let env = MapEnv::new().with("A", "").with("B", "x");
        assert_eq!(env.var("A").as_deref(), Some(""));
        assert_eq!(env.non_empty("A"), None);
        assert_eq!(env.non_empty("B").as_deref(), Some("x"));
        assert_eq!(env.non_empty("C"), None);
    }

    #[test]
    fn test_non_empty_keeps_whitespace_verbatim() {
        let env = MapEnv::new().with("A", "  ");
        assert_eq!(env.non_empty("A").as_deref(), Some("  "));
    }

    #[test]
    fn test_map_env_remove() {
        let mut env = MapEnv::new().with("A", "1");
        env.remove("A");
        assert_eq!(env.var("A"), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_unicode_value_is_not_treated_as_unset() {
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(b"s\xff1".to_vec());
        let env = MapEnv::new().with("BUS_SESSION", raw.clone());
        assert_eq!(env.non_empty_os("BUS_SESSION"), Some(raw));
        assert_eq!(env.non_empty("BUS_SESSION").as_deref(), Some("s\u{FFFD}1"));
    }
}
