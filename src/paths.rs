//! Filesystem locations shared with the bus shell scripts.
//!
//! Bus and trigger paths are rooted at a literal `/tmp` (not
//! `std::env::temp_dir()`): the launcher scripts hardcode
//! `/tmp/muxcoder-bus-{SESSION}/` and `/tmp/muxcoder-analyze-{SESSION}.trigger`.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::env::{EnvSource, ProcessEnv, ENV_MEMORY_DIR};

/// Root shared with the shell scripts.
pub const TMP_ROOT: &str = "/tmp";
/// Role name whose memory file is shared by all agents.
pub const SHARED_MEMORY: &str = "shared";

/// `/tmp/muxcoder-bus-<session>`
pub fn bus_dir(session: &str) -> PathBuf {
    PathBuf::from(format!("{TMP_ROOT}/muxcoder-bus-{session}"))
}

/// `<bus_dir>/inbox/<role>.jsonl`
pub fn inbox_path(session: &str, role: &str) -> PathBuf {
    bus_dir(session).join("inbox").join(format!("{role}.jsonl"))
}

/// `<bus_dir>/lock/<role>.lock`
pub fn lock_path(session: &str, role: &str) -> PathBuf {
    bus_dir(session).join("lock").join(format!("{role}.lock"))
}

/// `<bus_dir>/log.jsonl`
pub fn log_path(session: &str) -> PathBuf {
    bus_dir(session).join("log.jsonl")
}

/// `/tmp/muxcoder-analyze-<session>.trigger`, polled by the analyze hook.
pub fn trigger_file(session: &str) -> PathBuf {
    PathBuf::from(format!("{TMP_ROOT}/muxcoder-analyze-{session}.trigger"))
}

/// Memory directory: `BUS_MEMORY_DIR` when non-empty, else `.muxcoder/memory`
/// (relative to the working directory).
pub fn memory_dir_from(env: &impl EnvSource) -> PathBuf {
    match env.non_empty_os(ENV_MEMORY_DIR) {
        Some(dir) => PathBuf::from(dir),
        None => Path::new(".muxcoder").join("memory"),
    }
}

/// Memory directory for the current process environment.
pub fn memory_dir() -> PathBuf {
    memory_dir_from(&ProcessEnv)
}

/// Memory file for `role` under `dir`; `shared` maps to the shared file.
pub fn memory_path_in(dir: &Path, role: &str) -> PathBuf {
    if role == SHARED_MEMORY {
        dir.join(format!("{SHARED_MEMORY}.md"))
    } else {
        dir.join(format!("{role}.md"))
    }
}

/// Memory file for `role` using the process environment.
pub fn memory_path(role: &str) -> PathBuf {
    memory_path_in(&memory_dir(), role)
}

/// Every path derived for one session/role pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BusPaths {
    pub session: String,
    pub role: String,
    pub bus_dir: PathBuf,
    pub inbox: PathBuf,
    pub lock: PathBuf,
    pub log: PathBuf,
    pub trigger: PathBuf,
    pub memory: PathBuf,
    pub shared_memory: PathBuf,
}

impl BusPaths {
    pub fn new(session: &str, role: &str, memory_dir: &Path) -> Self {
        Self {
            session: session.to_string(),
            role: role.to_string(),
            bus_dir: bus_dir(session),
            inbox: inbox_path(session, role),
            lock: lock_path(session, role),
            log: log_path(session),
            trigger: trigger_file(session),
            memory: memory_path_in(memory_dir, role),
            shared_memory: memory_path_in(memory_dir, SHARED_MEMORY),
        }
    }
}
