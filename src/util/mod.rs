#![allow(clippy::module_name_repetitions)]
//! Small utilities: process execution and shell quoting.

pub mod exec;

/// Quote `s` for POSIX sh; safe words are returned unchanged.
pub fn shell_escape(s: &str) -> String {
    if s.is_empty() {
        "''".to_string()
    } else if s
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "-_=./:@%".contains(c))
    {
        s.to_string()
    } else {
        let escaped = s.replace('\'', "'\"'\"'");
        format!("'{}'", escaped)
    }
}

/// `export KEY=value` with the value shell-quoted.
pub fn shell_export(key: &str, value: &str) -> String {
    format!("export {}={}", key, shell_escape(value))
}
