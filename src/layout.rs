//! Pane layout metadata and tmux pane targets.
//!
//! The launcher always splits each window horizontally and starts the agent in
//! pane 1 (right). Split-left metadata only records which windows carry a
//! dedicated tool in the left pane; it does not influence the agent pane.

use std::collections::BTreeMap;

use serde::Serialize;

/// Windows with a dedicated tool in the left pane by default.
pub const BUILTIN_SPLIT_LEFT: &[&str] = &["edit", "analyze", "commit"];

/// Pane index of the agent in every window.
pub const AGENT_PANE: &str = "1";

/// Window name -> has a left-hand tool pane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SplitLeft {
    windows: BTreeMap<String, bool>,
}

impl Default for SplitLeft {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SplitLeft {
    pub fn builtin() -> Self {
        Self::from_tokens(BUILTIN_SPLIT_LEFT.iter().copied())
    }

    fn from_tokens<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            windows: tokens.into_iter().map(|w| (w.to_string(), true)).collect(),
        }
    }

    /// Replace the built-in set wholesale when `value` is non-empty
    /// (e.g. `MUXCODER_SPLIT_LEFT="edit review"`).
    pub fn from_override(value: Option<&str>) -> Self {
        match value.filter(|s| !s.is_empty()) {
            Some(v) => Self::from_tokens(v.split_whitespace()),
            None => Self::builtin(),
        }
    }

    pub fn is_split_left(&self, window: &str) -> bool {
        self.windows.get(window).copied().unwrap_or(false)
    }

    /// Windows flagged true, sorted by name.
    pub fn windows(&self) -> impl Iterator<Item = &str> {
        self.windows
            .iter()
            .filter(|(_, v)| **v)
            .map(|(k, _)| k.as_str())
    }
}

/// Pane where the agent runs for `window`; always the right-hand pane.
pub fn agent_pane(_window: &str) -> &'static str {
    AGENT_PANE
}

/// tmux target `session:window.pane` for a window's agent.
pub fn pane_target(session: &str, window: &str) -> String {
    format!("{}:{}.{}", session, window, agent_pane(window))
}
