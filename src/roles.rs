//! Known agent roles.
//!
//! Invariants
//! - Order is built-in roles first, then extension roles in the order given.
//! - Entries are unique; re-adding an existing role is a no-op.

use serde::Serialize;

/// Roles every bus knows about without configuration.
pub const BUILTIN_ROLES: &[&str] = &[
    "edit", "build", "test", "review", "deploy", "run", "commit", "analyze",
];

/// Ordered, duplicate-free list of role names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RoleRegistry {
    roles: Vec<String>,
}

impl Default for RoleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RoleRegistry {
    pub fn builtin() -> Self {
        Self {
            roles: BUILTIN_ROLES.iter().map(|r| r.to_string()).collect(),
        }
    }

    /// Built-in roles extended by a comma-separated list (e.g. `MUXCODER_ROLES`).
    /// Segments are trimmed; empty segments and duplicates are skipped.
    pub fn with_extension(extra: Option<&str>) -> Self {
        let mut reg = Self::builtin();
        if let Some(extra) = extra.filter(|s| !s.is_empty()) {
            for r in extra.split(',') {
                reg.push(r.trim());
            }
        }
        reg
    }

    /// Append a role unless it is empty or already present. Returns true when added.
    pub fn push(&mut self, role: &str) -> bool {
        if role.is_empty() || self.contains(role) {
            return false;
        }
        self.roles.push(role.to_string());
        true
    }

    pub fn contains(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.roles.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.roles
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}
