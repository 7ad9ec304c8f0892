#![allow(clippy::module_name_repetitions)]
//! Startup configuration: role registry and split-left windows.
//!
//! Build a `BusConfig` once at process entry and pass it by reference.
//! `MUXCODER_ROLES` and `MUXCODER_SPLIT_LEFT` are read only while building it;
//! later changes to the environment are not observed.

use once_cell::sync::OnceCell;
use serde::Serialize;

use crate::env::{EnvSource, ProcessEnv, ENV_ROLES, ENV_SPLIT_LEFT};
use crate::layout::SplitLeft;
use crate::roles::RoleRegistry;

static GLOBAL: OnceCell<BusConfig> = OnceCell::new();

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BusConfig {
    roles: RoleRegistry,
    split_left: SplitLeft,
}

impl BusConfig {
    pub fn new(roles: RoleRegistry, split_left: SplitLeft) -> Self {
        Self { roles, split_left }
    }

    pub fn from_env_source(env: &impl EnvSource) -> Self {
        let config = Self {
            roles: RoleRegistry::with_extension(env.var(ENV_ROLES).as_deref()),
            split_left: SplitLeft::from_override(env.var(ENV_SPLIT_LEFT).as_deref()),
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(
            roles = config.roles.len(),
            split_left = config.split_left.windows().count(),
            "bus config initialised"
        );
        config
    }

    pub fn from_env() -> Self {
        Self::from_env_source(&ProcessEnv)
    }

    /// Process-wide configuration, built from the environment on first use.
    pub fn global() -> &'static BusConfig {
        GLOBAL.get_or_init(Self::from_env)
    }

    /// Install `config` as the process-wide instance. Returns it back if one
    /// was already set.
    pub fn install_global(config: BusConfig) -> Result<(), BusConfig> {
        GLOBAL.set(config)
    }

    pub fn roles(&self) -> &RoleRegistry {
        &self.roles
    }

    pub fn split_left(&self) -> &SplitLeft {
        &self.split_left
    }

    pub fn is_known_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    pub fn is_split_left(&self, window: &str) -> bool {
        self.split_left.is_split_left(window)
    }
}

/// Membership test against the process-wide configuration.
pub fn is_known_role(role: &str) -> bool {
    BusConfig::global().is_known_role(role)
}

/// Split-left lookup against the process-wide configuration.
pub fn is_split_left(window: &str) -> bool {
    BusConfig::global().is_split_left(window)
}
