//! Session/role identity and filesystem path resolution for the muxcoder
//! agent bus.
//!
//! Agents running in tmux windows coordinate through files under
//! `/tmp/muxcoder-bus-<session>/`. This crate answers "who am I" (session and
//! role, from the environment or tmux) and "where are my files" (inbox, lock,
//! log, trigger and memory paths) for both the agents and the shell scripts
//! that launch them.

pub mod color;
pub mod config;
pub mod env;
pub mod errors;
pub mod identity;
pub mod layout;
pub mod paths;
pub mod roles;
pub mod telemetry;
pub mod tmux;
pub mod util;

pub use color::*;
pub use config::{is_known_role, is_split_left, BusConfig};
pub use env::{EnvSource, MapEnv, ProcessEnv};
pub use errors::*;
pub use identity::{bus_role, bus_session, Resolved, Resolver, Source};
pub use layout::{agent_pane, pane_target, SplitLeft};
pub use paths::{
    bus_dir, inbox_path, lock_path, log_path, memory_dir, memory_path, trigger_file, BusPaths,
};
pub use roles::RoleRegistry;
pub use telemetry::telemetry_init;
pub use tmux::{tmux_available, tmux_var, MuxQuery, TmuxQuery};
pub use util::{shell_escape, shell_export};
